use crate::{Alphabet, VigenereKey};
use alloc::string::String;
use core::marker::PhantomData;

/// Selects which input characters consume a position of the key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAdvance {
    /// Only characters of the alphabet move the key forward. Pass-through characters are
    /// copied without using up a key character
    Symbols,
    /// Every input character moves the key forward, including pass-through characters
    Every,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Encode,
    Decode,
}

/// A Vigenère transform over the alphabet `A`.
///
/// Each symbol of the input is shifted by the current key character modulo `A::LEN`.
/// Characters outside the alphabet are copied unchanged
pub struct GenericCipher<'k, A>
where
    A: Alphabet,
{
    key: &'k VigenereKey,
    advance: KeyAdvance,
    _alphabet: PhantomData<A>,
}

impl<'k, A> GenericCipher<'k, A>
where
    A: Alphabet,
{
    pub fn new(key: &'k VigenereKey, advance: KeyAdvance) -> Self {
        Self {
            key,
            advance,
            _alphabet: PhantomData,
        }
    }

    pub fn encode(&self, text: &str) -> String {
        self.transform(text, Direction::Encode)
    }

    pub fn decode(&self, text: &str) -> String {
        self.transform(text, Direction::Decode)
    }

    /// Runs the cipher over `text` in the given direction.
    ///
    /// Decoding the output of `encode` with the same key returns the input, as long as the
    /// alphabet does not fold case (the Latin alphabet returns uppercase letters)
    pub fn transform(&self, text: &str, direction: Direction) -> String {
        let mut out = String::with_capacity(text.len());
        let mut key_index = 0;
        for c in text.chars() {
            match A::index_of(c) {
                Some(index) => {
                    let shift = self.key.shift(key_index);
                    // Both values are < A::LEN, so adding A::LEN keeps the decode path positive
                    let shifted = match direction {
                        Direction::Encode => (index + shift) % A::LEN,
                        Direction::Decode => (index + A::LEN - shift) % A::LEN,
                    };
                    out.push(A::symbol(shifted));
                    key_index += 1;
                }
                None => {
                    out.push(c);
                    if self.advance == KeyAdvance::Every {
                        key_index += 1;
                    }
                }
            }
        }
        out
    }
}
