use thiserror::Error;

/// Errors produced when building a key or running a transform
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherError {
    #[error("key must contain at least one character")]
    EmptyKey,

    /// The Latin cipher only accepts letters in its key
    #[error("invalid key character {0:?}, expected an ASCII letter")]
    InvalidKeyChar(char),
}
