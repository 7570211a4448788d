use alloc::vec::Vec;

use crate::{Alphabet, CipherError, Extended, Latin};

/// A repeating Vigenère key, stored as the shift of each key character.
///
/// The key is reused from the start once all of its shifts have been consumed, so
/// `shift(i)` is defined for every `i`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VigenereKey {
    shifts: Vec<usize>,
}

impl VigenereKey {
    /// Parses a key for the Latin alphabet. Every character must be an ASCII letter, case is
    /// ignored
    pub fn latin(key: &str) -> Result<Self, CipherError> {
        let shifts = key
            .chars()
            .map(|c| Latin::index_of(c).ok_or(CipherError::InvalidKeyChar(c)))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_shifts(shifts)
    }

    /// Parses a key for the extended alphabet. Any character is accepted: characters outside
    /// the alphabet use their scalar value modulo the alphabet size
    pub fn extended(key: &str) -> Result<Self, CipherError> {
        let shifts = key
            .chars()
            .map(|c| Extended::index_of(c).unwrap_or(c as usize % Extended::LEN))
            .collect();
        Self::from_shifts(shifts)
    }

    fn from_shifts(shifts: Vec<usize>) -> Result<Self, CipherError> {
        if shifts.is_empty() {
            return Err(CipherError::EmptyKey);
        }
        Ok(Self { shifts })
    }

    /// The number of characters in the key, i.e. the period of the cipher
    pub fn len(&self) -> usize {
        self.shifts.len()
    }

    /// Always false, empty keys are rejected on construction
    pub fn is_empty(&self) -> bool {
        self.shifts.is_empty()
    }

    /// Returns the shift used for the `index`th transformed character
    pub fn shift(&self, index: usize) -> usize {
        self.shifts[index % self.shifts.len()]
    }

    pub fn shifts(&self) -> &[usize] {
        &self.shifts
    }
}
