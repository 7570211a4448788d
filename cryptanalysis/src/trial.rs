//! Known-answer fixtures and randomised trials for the estimator.
//!
//! Plaintexts are encrypted with [`common::SimpleVigenere`], so the true key length is known
//! and the candidates can be checked against it.

use common::SimpleVigenere;
use rand::{rngs::StdRng, SeedableRng};
use rand_distr::{Distribution, Uniform, WeightedIndex};
use serde::Serialize;
use tracing::{debug, info};

use crate::{analyze, AnalysisError, KasiskiParams};

/// Relative frequency of `A..Z` in English text
const EN_FREQ: [f64; 26] = [
    0.08167, 0.01492, 0.02782, 0.04253, 0.12702, 0.02228, 0.02015, 0.06094,
    0.06966, 0.00153, 0.00772, 0.04025, 0.02406, 0.06749, 0.07507, 0.01929,
    0.00095, 0.05987, 0.06327, 0.09056, 0.02758, 0.00978, 0.02360, 0.00150,
    0.01974, 0.00074,
];

/// A plaintext with the key used to encrypt it
#[derive(Debug, Clone, Copy)]
pub struct Fixture {
    pub name: &'static str,
    pub plaintext: &'static str,
    pub key: &'static str,
}

const FIXTURES: &[Fixture] = &[
    Fixture {
        name: "cryptography",
        plaintext: "CRYPTOGRAPHYCRYPTOGRAPHY",
        key: "KEY",
    },
    Fixture {
        name: "attack-at-dawn",
        plaintext: "Attack at dawn! The quick brown fox jumps over the lazy dog. \
            Attack at dusk, then attack again at dawn.",
        key: "LEMON",
    },
    Fixture {
        name: "two-cities",
        plaintext: "It was the best of times, it was the worst of times, it was the age of \
            wisdom, it was the age of foolishness, it was the epoch of belief, it was the \
            epoch of incredulity, it was the season of Light, it was the season of Darkness, \
            it was the spring of hope, it was the winter of despair",
        key: "DICKENS",
    },
    Fixture {
        name: "to-be",
        plaintext: "To be, or not to be, that is the question: whether tis nobler in the mind \
            to suffer the slings and arrows of outrageous fortune, or to take arms against a \
            sea of troubles and by opposing end them. To die, to sleep, no more; and by a \
            sleep to say we end the heart-ache and the thousand natural shocks that flesh is \
            heir to: tis a consummation devoutly to be wished. To die, to sleep; to sleep, \
            perchance to dream",
        key: "YORICK",
    },
];

pub fn builtin_fixtures() -> &'static [Fixture] {
    FIXTURES
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FixtureResult {
    pub name: &'static str,
    pub key_len: usize,
    pub candidates: Vec<usize>,
}

impl FixtureResult {
    /// True if the real key length is among the candidates
    pub fn passed(&self) -> bool {
        self.candidates.contains(&self.key_len)
    }
}

/// Encrypts every builtin fixture and runs the estimator on the ciphertext
pub fn run_fixtures(params: &KasiskiParams) -> Result<Vec<FixtureResult>, AnalysisError> {
    builtin_fixtures()
        .iter()
        .map(|fixture| {
            let cipher = SimpleVigenere::new(fixture.key)?;
            let report = analyze(&cipher.encode(fixture.plaintext), params)?;
            let result = FixtureResult {
                name: fixture.name,
                key_len: cipher.key().len(),
                candidates: report.candidates,
            };
            debug!(name = result.name, passed = result.passed(), candidates = ?result.candidates, "fixture");
            Ok(result)
        })
        .collect()
}

/// Parameters of a batch of random trials
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrialConfig {
    pub runs: usize,
    pub seed: u64,
    /// Letters of plaintext per run
    pub text_len: usize,
    pub min_key_len: usize,
    /// Inclusive
    pub max_key_len: usize,
}

impl Default for TrialConfig {
    fn default() -> Self {
        Self {
            runs: 100,
            seed: 0,
            text_len: 400,
            min_key_len: 3,
            max_key_len: 12,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TrialSummary {
    pub runs: usize,
    /// The only candidate was the key length
    pub exact: usize,
    /// The key length was one of the candidates
    pub included: usize,
    /// No hypothesis was formed
    pub empty: usize,
}

/// Samples letter indices `0..26` with the given relative weights
fn letter_distribution(weights: &[f64]) -> Result<WeightedIndex<f64>, AnalysisError> {
    Ok(WeightedIndex::new(weights)?)
}

/// Generates `config.runs` random plaintext and key pairs and tallies how well the estimator
/// recovers the key length. The same seed always gives the same summary
pub fn run_random_trials(
    config: &TrialConfig,
    params: &KasiskiParams,
) -> Result<TrialSummary, AnalysisError> {
    params.validate()?;
    let mut rng = StdRng::seed_from_u64(config.seed);
    let letters = letter_distribution(&EN_FREQ)?;
    let key_letter = Uniform::new(0u8, 26);
    let min_key_len = config.min_key_len.max(1);
    let key_len = Uniform::new_inclusive(min_key_len, config.max_key_len.max(min_key_len));

    let mut summary = TrialSummary::default();
    for _ in 0..config.runs {
        let plaintext: String = (0..config.text_len)
            .map(|_| (b'A' + letters.sample(&mut rng) as u8) as char)
            .collect();
        let key: String = (0..key_len.sample(&mut rng))
            .map(|_| (b'A' + key_letter.sample(&mut rng)) as char)
            .collect();

        let ciphertext = SimpleVigenere::new(&key)?.encode(&plaintext);
        let candidates = analyze(&ciphertext, params)?.candidates;

        summary.runs += 1;
        if candidates.is_empty() {
            summary.empty += 1;
        }
        if candidates.contains(&key.len()) {
            summary.included += 1;
            if candidates.len() == 1 {
                summary.exact += 1;
            }
        }
    }

    info!(
        runs = summary.runs,
        exact = summary.exact,
        included = summary.included,
        empty = summary.empty,
        "trials done"
    );
    Ok(summary)
}
