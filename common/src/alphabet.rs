#[cfg(feature = "std")]
use lazy_static::lazy_static;
#[cfg(feature = "std")]
use std::collections::HashMap;

/// A fixed bijection between a set of symbols and `0..LEN`.
///
/// Characters that are not part of the alphabet have no index and are passed through
/// unchanged by the ciphers.
pub trait Alphabet {
    /// The number of symbols, and therefore the modulus used by the cipher
    const LEN: usize;

    /// Returns the index of `c`, or `None` if `c` is not part of this alphabet
    fn index_of(c: char) -> Option<usize>;

    /// Returns the symbol at `index`
    ///
    /// # Panics
    ///
    /// If `index >= Self::LEN`
    fn symbol(index: usize) -> char;
}

/// The 26 letters `A..Z`. Lowercase input maps onto the same indices, output is always
/// uppercase
pub struct Latin;

/// The extended 124 symbol alphabet: both letter cases, French accented letters, digits and
/// ASCII punctuation. Case is significant
pub struct Extended;

pub const LATIN_LETTERS: [u8; 26] = *b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

const NO_INDEX: u8 = u8::MAX;

/// Reverse table for ASCII input. Both cases map to the same index
const LATIN_INDEX: [u8; 128] = {
    let mut table = [NO_INDEX; 128];
    let mut i = 0;
    while i < LATIN_LETTERS.len() {
        let upper = LATIN_LETTERS[i];
        table[upper as usize] = i as u8;
        table[upper.to_ascii_lowercase() as usize] = i as u8;
        i += 1;
    }
    table
};

impl Alphabet for Latin {
    const LEN: usize = LATIN_LETTERS.len();

    fn index_of(c: char) -> Option<usize> {
        if !c.is_ascii() {
            return None;
        }
        match LATIN_INDEX[c as usize] {
            NO_INDEX => None,
            index => Some(index as usize),
        }
    }

    fn symbol(index: usize) -> char {
        LATIN_LETTERS[index] as char
    }
}

#[rustfmt::skip]
pub const EXTENDED_SYMBOLS: [char; 124] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j',
    'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z', 'À', 'Â',
    'Ä', 'Ç', 'É', 'È', 'Ê', 'Ë', 'Î', 'Ï', 'Ô', 'Ö', 'Ù', 'Û', 'Ü', 'à', 'â', 'ä', 'ç', 'é',
    'è', 'ê', 'ë', 'î', 'ï', 'ô', 'ö', 'ù', 'û', 'ü', '0', '1', '2', '3', '4', '5', '6', '7',
    '8', '9', ' ', '.', ',', ';', ':', '!', '?', '(', ')', '[', ']', '{', '}', '+', '-', '*',
    '/', '=', '<', '>', '_', '"', '\'', '&', '%', '$', '#', '@', '^', '~', '|', '\\',
];

#[cfg(feature = "std")]
lazy_static! {
    static ref EXTENDED_INDEX: HashMap<char, usize> = EXTENDED_SYMBOLS
        .iter()
        .enumerate()
        .map(|(i, &c)| (c, i))
        .collect();
}

impl Alphabet for Extended {
    const LEN: usize = EXTENDED_SYMBOLS.len();

    #[cfg(feature = "std")]
    fn index_of(c: char) -> Option<usize> {
        EXTENDED_INDEX.get(&c).copied()
    }

    // Without std there is no hash map, 124 comparisons is fine
    #[cfg(not(feature = "std"))]
    fn index_of(c: char) -> Option<usize> {
        EXTENDED_SYMBOLS.iter().position(|&s| s == c)
    }

    fn symbol(index: usize) -> char {
        EXTENDED_SYMBOLS[index]
    }
}
