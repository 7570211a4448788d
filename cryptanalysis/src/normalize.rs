use serde::Serialize;

/// Ciphertext reduced to its letters, upper-cased.
///
/// Only ASCII letters are kept, so every byte is one of `A..Z` and byte offsets are
/// character offsets
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NormalizedText(String);

impl NormalizedText {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The `len` letters starting at `start`
    ///
    /// # Panics
    ///
    /// If the range is outside the text
    pub fn fragment(&self, start: usize, len: usize) -> &str {
        &self.0[start..start + len]
    }
}

/// Keeps the letters of `text` in order and upper-cases them. Never fails, an empty input
/// gives an empty text
pub fn normalize(text: &str) -> NormalizedText {
    NormalizedText(
        text.chars()
            .filter(char::is_ascii_alphabetic)
            .map(|c| c.to_ascii_uppercase())
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_only_letters() {
        let text = normalize("Attack at dawn! 10:30, Rendez-vous.");
        assert_eq!(text.as_str(), "ATTACKATDAWNRENDEZVOUS");
        assert_eq!(text.len(), 22);
        assert_eq!(text.fragment(0, 6), "ATTACK");
    }

    #[test]
    fn empty_and_letterless_input() {
        assert!(normalize("").is_empty());
        assert!(normalize("123 ... \n\t!?").is_empty());
    }

    #[test]
    fn drops_non_ascii_letters() {
        assert_eq!(normalize("Été à Noël").as_str(), "TNOL");
    }

    #[test]
    fn never_longer_than_source() {
        for text in ["", "abc", "a b c", "ÀÉÎ", "MVWZXMQVYZLW"] {
            let normalized = normalize(text);
            assert!(normalized.len() <= text.chars().count());
            assert!(normalized.as_str().bytes().all(|b| b.is_ascii_uppercase()));
        }
    }
}
