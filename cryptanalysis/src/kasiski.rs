use serde::Serialize;
use tracing::{debug, instrument};

use crate::{
    build_distance_table, effective_max_len, find_repetitions, normalize, reduce, AnalysisError,
    DistanceRow, Reduction, RepetitionRecord,
};

pub const DEFAULT_MIN_LEN: usize = 3;
pub const DEFAULT_MAX_LEN: usize = 16;

/// Fragment lengths searched by the estimator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KasiskiParams {
    pub min_len: usize,
    /// `None` scans up to half of the letters
    pub max_len: Option<usize>,
}

impl Default for KasiskiParams {
    fn default() -> Self {
        Self {
            min_len: DEFAULT_MIN_LEN,
            max_len: Some(DEFAULT_MAX_LEN),
        }
    }
}

impl KasiskiParams {
    pub fn new(min_len: usize, max_len: Option<usize>) -> Result<Self, AnalysisError> {
        let params = Self { min_len, max_len };
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<(), AnalysisError> {
        if self.min_len < 1 {
            return Err(AnalysisError::InvalidMinLength(self.min_len));
        }
        Ok(())
    }
}

/// Why an analysis ended the way it did. Only `Candidates` carries a hypothesis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Fewer than `2 * min_len` letters
    InputTooShort,
    NoRepetitionFound,
    /// The first distance has no divisor above 1
    DegenerateSeed,
    Candidates,
}

/// Everything the estimator computed for one ciphertext
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KasiskiReport {
    pub letters: usize,
    pub min_len: usize,
    /// Longest fragment length actually scanned
    pub max_len: usize,
    pub outcome: Outcome,
    pub repetitions: Vec<RepetitionRecord>,
    pub distances: Vec<DistanceRow>,
    /// Ascending, without duplicates, every value above 1
    pub candidates: Vec<usize>,
}

impl KasiskiReport {
    fn empty(letters: usize, min_len: usize, max_len: usize, outcome: Outcome) -> Self {
        Self {
            letters,
            min_len,
            max_len,
            outcome,
            repetitions: Vec::new(),
            distances: Vec::new(),
            candidates: Vec::new(),
        }
    }
}

/// Runs the Kasiski examination on `ciphertext` and keeps every intermediate table
#[instrument(level = "debug", skip(ciphertext), fields(chars = ciphertext.len()))]
pub fn analyze(ciphertext: &str, params: &KasiskiParams) -> Result<KasiskiReport, AnalysisError> {
    params.validate()?;

    let text = normalize(ciphertext);
    let min_len = params.min_len;
    let max_len = effective_max_len(text.len(), min_len, params.max_len);

    if text.len() < min_len.saturating_mul(2) {
        debug!(letters = text.len(), min_len, "too few letters");
        return Ok(KasiskiReport::empty(text.len(), min_len, max_len, Outcome::InputTooShort));
    }

    let repetitions = find_repetitions(&text, min_len, params.max_len);
    debug!(letters = text.len(), records = repetitions.len(), "scanned for repetitions");
    if repetitions.is_empty() {
        return Ok(KasiskiReport::empty(text.len(), min_len, max_len, Outcome::NoRepetitionFound));
    }

    let distances = build_distance_table(&repetitions);
    let (outcome, candidates) = match reduce(&distances) {
        // Records always hold two or more positions, so the table is never empty here
        Reduction::NoRows => (Outcome::NoRepetitionFound, Vec::new()),
        Reduction::DegenerateSeed(_) => (Outcome::DegenerateSeed, Vec::new()),
        Reduction::Candidates(set) => (Outcome::Candidates, set.into_vec()),
    };

    Ok(KasiskiReport {
        letters: text.len(),
        min_len,
        max_len,
        outcome,
        repetitions,
        distances,
        candidates,
    })
}

/// Estimates the length of the key used to produce `ciphertext`.
///
/// Returns the plausible key lengths, ascending. An empty list means no hypothesis could be
/// formed
pub fn kasiski_key_length(
    ciphertext: &str,
    min_len: usize,
    max_len: usize,
) -> Result<Vec<usize>, AnalysisError> {
    let params = KasiskiParams::new(min_len, Some(max_len))?;
    Ok(analyze(ciphertext, &params)?.candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};

    fn estimate(ciphertext: &str) -> Vec<usize> {
        kasiski_key_length(ciphertext, DEFAULT_MIN_LEN, DEFAULT_MAX_LEN).unwrap()
    }

    #[test]
    fn cryptography_with_key() {
        let ciphertext = common::encode("CRYPTOGRAPHYCRYPTOGRAPHY", "KEY").unwrap();
        let candidates = kasiski_key_length(&ciphertext, 3, 8).unwrap();
        assert!(candidates.contains(&3));
        assert_eq!(candidates, vec![2, 3, 4, 6, 12]);
    }

    #[test]
    fn attack_at_dawn_with_lemon() {
        let ciphertext = common::encode(
            "Attack at dawn! The quick brown fox jumps over the lazy dog. \
             Attack at dusk, then attack again at dawn.",
            "LEMON",
        )
        .unwrap();
        assert_eq!(estimate(&ciphertext), vec![5, 25]);
    }

    #[test]
    fn periodic_text() {
        assert_eq!(estimate("ABCABCABC"), vec![3]);
        assert_eq!(estimate("abc, abc; abc!"), vec![3]);
    }

    #[test]
    fn too_short() {
        let report = analyze("ABCAB", &KasiskiParams::default()).unwrap();
        assert_eq!(report.outcome, Outcome::InputTooShort);
        assert!(report.candidates.is_empty());
        assert_eq!(report.letters, 5);

        assert!(estimate("").is_empty());
        assert!(estimate("12345 !!").is_empty());
        assert!(kasiski_key_length("ABCABCABC", 5, 16).unwrap().is_empty());
    }

    #[test]
    fn no_repetition() {
        let report = analyze("THE QUICK BROWN FOX", &KasiskiParams::default()).unwrap();
        assert_eq!(report.outcome, Outcome::NoRepetitionFound);
        assert!(report.repetitions.is_empty());
        assert!(report.candidates.is_empty());
    }

    #[test]
    fn invalid_min_len() {
        assert_eq!(
            kasiski_key_length("ABCABCABC", 0, 16),
            Err(AnalysisError::InvalidMinLength(0))
        );
        assert!(KasiskiParams::new(0, None).is_err());
        assert!(KasiskiParams::new(1, None).is_ok());
    }

    #[test]
    fn report_tables() {
        let report = analyze("ABCABCABC", &KasiskiParams::default()).unwrap();
        assert_eq!(report.outcome, Outcome::Candidates);
        assert_eq!(report.max_len, 9);
        assert_eq!(report.repetitions.len(), 9);
        assert_eq!(report.distances.len(), 10);
        assert_eq!(report.candidates, vec![3]);

        let report = analyze("ABCABCABC", &KasiskiParams::new(3, None).unwrap()).unwrap();
        assert_eq!(report.max_len, 4);
    }

    #[test]
    fn report_serializes() {
        let report = analyze("ABCABCABC", &KasiskiParams::default()).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["outcome"], "candidates");
        assert_eq!(json["candidates"], serde_json::json!([3]));
        assert_eq!(json["repetitions"][0]["fragment"], "ABCABC");
    }

    #[test]
    fn candidate_invariants_on_random_input() {
        for i in 0..30 {
            let mut rng = rand::rngs::StdRng::seed_from_u64(i);
            let len = rng.gen_range(0..300);
            // A small alphabet makes repeats, and therefore candidates, likely
            let text: String = (0..len)
                .map(|_| match rng.gen_range(0..8u8) {
                    0 => ' ',
                    n => (b'A' + n) as char,
                })
                .collect();
            let min_len = rng.gen_range(1..5);

            let candidates = kasiski_key_length(&text, min_len, 16).unwrap();
            assert!(candidates.iter().all(|&c| c > 1));
            assert!(candidates.windows(2).all(|w| w[0] < w[1]));
            assert_eq!(candidates, kasiski_key_length(&text, min_len, 16).unwrap());

            let letters = text.chars().filter(|c| c.is_ascii_alphabetic()).count();
            if letters < 2 * min_len {
                assert!(candidates.is_empty());
            }
        }
    }

    #[test]
    fn recovers_key_length_of_long_text() {
        let plaintext = "It was the best of times, it was the worst of times, it was the age of \
            wisdom, it was the age of foolishness, it was the epoch of belief, it was the epoch \
            of incredulity, it was the season of Light, it was the season of Darkness, it was the \
            spring of hope, it was the winter of despair, we had everything before us, we had \
            nothing before us, we were all going direct to Heaven, we were all going direct the \
            other way";
        // LONDON only gets as far as 3, a divisor of its length
        for (key, expected) in [("DICKENS", vec![7]), ("LONDON", vec![3]), ("PARIS", vec![5])] {
            let ciphertext = common::encode(plaintext, key).unwrap();
            assert_eq!(estimate(&ciphertext), expected, "key {}", key);
        }
    }
}
