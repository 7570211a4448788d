use common::CipherError;
use rand_distr::WeightedError;
use thiserror::Error;

/// Failures of the analysis itself. An inconclusive analysis is not an error, it yields an
/// empty candidate list
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("minimum fragment length must be at least 1, got {0}")]
    InvalidMinLength(usize),

    #[error(transparent)]
    Cipher(#[from] CipherError),

    #[error("invalid letter weights: {0}")]
    Weights(#[from] WeightedError),
}
