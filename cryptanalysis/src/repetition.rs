use std::collections::HashMap;

use serde::Serialize;

use crate::NormalizedText;

/// A fragment found at two or more positions of the text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepetitionRecord {
    pub fragment: String,
    /// Start offsets, ascending
    pub positions: Vec<usize>,
    pub length: usize,
}

/// The longest fragment length scanned for a text of `text_len` letters.
///
/// Without an explicit maximum the scan goes up to half the text. The result is never more
/// than `text_len`, and may be less than `min_len`, in which case nothing is scanned
pub fn effective_max_len(text_len: usize, min_len: usize, max_len: Option<usize>) -> usize {
    max_len
        .unwrap_or_else(|| min_len.max(text_len / 2))
        .min(text_len)
}

/// Finds every fragment of `min_len..=max_len` letters that occurs at least twice in `text`.
///
/// The search is exhaustive. Records come out grouped by length, longest first. Within one
/// length they are ordered by first occurrence
pub fn find_repetitions(
    text: &NormalizedText,
    min_len: usize,
    max_len: Option<usize>,
) -> Vec<RepetitionRecord> {
    let max_len = effective_max_len(text.len(), min_len, max_len);
    let min_len = min_len.max(1);

    let mut found = Vec::new();
    for length in (min_len..=max_len).rev() {
        found.extend(repetitions_of_length(text, length));
    }
    found
}

/// All repeated fragments of exactly `length` letters
pub fn repetitions_of_length(text: &NormalizedText, length: usize) -> Vec<RepetitionRecord> {
    if length == 0 || length > text.len() {
        return Vec::new();
    }

    // Fragment content is the only key. Groups keep the order in which they were first seen
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, Vec<usize>)> = Vec::new();
    for start in 0..=text.len() - length {
        let fragment = text.fragment(start, length);
        match slots.get(fragment) {
            Some(&slot) => groups[slot].1.push(start),
            None => {
                slots.insert(fragment, groups.len());
                groups.push((fragment, vec![start]));
            }
        }
    }

    groups
        .into_iter()
        .filter(|(_, positions)| positions.len() >= 2)
        .map(|(fragment, positions)| RepetitionRecord {
            fragment: fragment.to_owned(),
            positions,
            length,
        })
        .collect()
}
