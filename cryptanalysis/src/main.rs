use std::fmt;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use common::{ExtendedVigenere, SimpleVigenere};
use cryptanalysis::trial::{run_fixtures, run_random_trials, TrialConfig};
use cryptanalysis::{analyze, KasiskiParams, Outcome, DEFAULT_MAX_LEN, DEFAULT_MIN_LEN};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Vigenère cipher and Kasiski key length estimation
#[derive(Parser)]
#[command(name = "cryptanalysis", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Estimate the key length of a Vigenère ciphertext
    Kasiski {
        /// UTF-8 file holding the ciphertext, stdin if omitted
        file: Option<PathBuf>,

        /// Shortest repeated fragment to consider
        #[arg(long = "min", env = "KASISKI_MIN_LEN", default_value_t = DEFAULT_MIN_LEN)]
        min_len: usize,

        /// Longest repeated fragment to consider, `auto` for half of the letters
        #[arg(long = "max", env = "KASISKI_MAX_LEN", default_value_t = MaxLen(Some(DEFAULT_MAX_LEN)))]
        max_len: MaxLen,

        /// Print the whole report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Encrypt text with a Vigenère key
    Encode(TransformArgs),

    /// Decrypt text with a Vigenère key
    Decode(TransformArgs),

    /// Run the estimator on the builtin fixtures
    Selftest,

    /// Run the estimator on random English-like plaintexts
    Trial {
        #[arg(long, default_value_t = 100)]
        runs: usize,

        #[arg(long, default_value_t = 0)]
        seed: u64,

        /// Letters per plaintext
        #[arg(long = "len", default_value_t = 400)]
        text_len: usize,

        #[arg(long, default_value_t = 3)]
        min_key: usize,

        #[arg(long, default_value_t = 12)]
        max_key: usize,
    },
}

#[derive(clap::Args)]
struct TransformArgs {
    #[arg(short, long)]
    key: String,

    /// Use the 124 symbol alphabet (case, accents, digits and punctuation)
    #[arg(long)]
    extended: bool,

    /// UTF-8 input file, stdin if omitted
    file: Option<PathBuf>,
}

/// `--max` value, `None` when the length is derived from the text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MaxLen(Option<usize>);

impl FromStr for MaxLen {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("auto") {
            return Ok(MaxLen(None));
        }
        s.parse().map(|n| MaxLen(Some(n)))
    }
}

impl fmt::Display for MaxLen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(n) => write!(f, "{}", n),
            None => write!(f, "auto"),
        }
    }
}

/// Failure to obtain the input, reported with its own exit status
#[derive(Error, Debug)]
#[error("{0:#}")]
struct InputError(anyhow::Error);

/// A run that completed, whatever the analysis found
const EXIT_OK: u8 = 0;
/// Bad arguments or a missed fixture
const EXIT_FAILURE: u8 = 1;
const EXIT_UNREADABLE_INPUT: u8 = 2;

fn exit_status(err: &anyhow::Error) -> u8 {
    if err.is::<InputError>() {
        EXIT_UNREADABLE_INPUT
    } else {
        EXIT_FAILURE
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let status = match run(cli.command) {
        Ok(status) => status,
        Err(err) => {
            let status = exit_status(&err);
            if status == EXIT_UNREADABLE_INPUT {
                eprintln!("Could not read input: {:#}", err);
            } else {
                eprintln!("Error: {:#}", err);
            }
            status
        }
    };
    ExitCode::from(status)
}

fn run(command: Command) -> Result<u8> {
    match command {
        Command::Kasiski {
            file,
            min_len,
            max_len,
            json,
        } => {
            let text = read_input(file.as_deref())?;
            let params = KasiskiParams::new(min_len, max_len.0)?;
            let report = analyze(&text, &params)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else if report.outcome == Outcome::Candidates {
                println!("Key length candidates: {}", Candidates(&report.candidates));
            } else {
                println!("No hypothesis (?): {:?}", report.outcome);
            }
        }
        Command::Encode(args) => println!("{}", transform(&args, true)?),
        Command::Decode(args) => println!("{}", transform(&args, false)?),
        Command::Selftest => {
            let results = run_fixtures(&KasiskiParams::default())?;
            let mut failed = 0;
            for result in &results {
                let status = if result.passed() { "ok" } else { "MISS" };
                println!(
                    "{:<16} key length {:>2}  candidates {}  {}",
                    result.name,
                    result.key_len,
                    Candidates(&result.candidates),
                    status
                );
                if !result.passed() {
                    failed += 1;
                }
            }
            if failed > 0 {
                println!("{} of {} fixtures missed", failed, results.len());
                return Ok(EXIT_FAILURE);
            }
        }
        Command::Trial {
            runs,
            seed,
            text_len,
            min_key,
            max_key,
        } => {
            let config = TrialConfig {
                runs,
                seed,
                text_len,
                min_key_len: min_key,
                max_key_len: max_key,
            };
            let summary = run_random_trials(&config, &KasiskiParams::default())?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }
    Ok(EXIT_OK)
}

fn transform(args: &TransformArgs, encode: bool) -> Result<String> {
    let text = read_input(args.file.as_deref())?;
    let text = text.trim_end_matches(['\r', '\n']);
    let out = if args.extended {
        let cipher = ExtendedVigenere::new(&args.key).context("invalid key")?;
        if encode {
            cipher.encode(text)
        } else {
            cipher.decode(text)
        }
    } else {
        let cipher = SimpleVigenere::new(&args.key).context("invalid key")?;
        if encode {
            cipher.encode(text)
        } else {
            cipher.decode(text)
        }
    };
    Ok(out)
}

fn read_input(path: Option<&Path>) -> Result<String> {
    let text = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))
            .map_err(InputError)?,
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("reading stdin")
                .map_err(InputError)?;
            text
        }
    };
    Ok(text)
}

/// Candidate list printed as `[2, 3, 6]`, or `?` when empty
struct Candidates<'a>(&'a [usize]);

impl fmt::Display for Candidates<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "?");
        }
        write!(f, "[")?;
        for (count, n) in self.0.iter().enumerate() {
            if count != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", n)?;
        }
        write!(f, "]")
    }
}
