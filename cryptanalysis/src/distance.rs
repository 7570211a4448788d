use std::cmp::Reverse;

use serde::Serialize;

use crate::RepetitionRecord;

/// The gap between two consecutive occurrences of a repeated fragment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistanceRow {
    pub fragment: String,
    pub distance: usize,
    pub length: usize,
    /// Start of the earlier occurrence
    pub first: usize,
    /// Start of the later occurrence
    pub second: usize,
}

/// Expands every record into one row per pair of consecutive occurrences, then orders the
/// rows by fragment length (longest first) and distance (shortest first).
///
/// The sort is stable, rows that tie keep the order of `records`
pub fn build_distance_table(records: &[RepetitionRecord]) -> Vec<DistanceRow> {
    let mut rows: Vec<DistanceRow> = records
        .iter()
        .flat_map(|record| {
            record.positions.windows(2).filter_map(move |pair| {
                let (first, second) = (pair[0], pair[1]);
                (second > first).then(|| DistanceRow {
                    fragment: record.fragment.clone(),
                    distance: second - first,
                    length: record.length,
                    first,
                    second,
                })
            })
        })
        .collect();

    rows.sort_by_key(|row| (Reverse(row.length), row.distance));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{find_repetitions, normalize};

    fn record(fragment: &str, positions: &[usize]) -> RepetitionRecord {
        RepetitionRecord {
            fragment: fragment.to_owned(),
            positions: positions.to_vec(),
            length: fragment.len(),
        }
    }

    fn summary(rows: &[DistanceRow]) -> Vec<(&str, usize, usize, usize)> {
        rows.iter()
            .map(|r| (r.fragment.as_str(), r.distance, r.first, r.second))
            .collect()
    }

    #[test]
    fn one_row_per_consecutive_pair() {
        let rows = build_distance_table(&[record("ABC", &[0, 3, 10])]);
        assert_eq!(summary(&rows), vec![("ABC", 3, 0, 3), ("ABC", 7, 3, 10)]);
        assert!(rows.iter().all(|r| r.length == 3));
    }

    #[test]
    fn ordered_by_length_then_distance() {
        let rows = build_distance_table(&[
            record("WXYZ", &[2, 40]),
            record("QRST", &[5, 17]),
            record("ABC", &[0, 9, 12]),
            record("DEF", &[20, 26]),
        ]);
        assert_eq!(
            summary(&rows),
            vec![
                ("QRST", 12, 5, 17),
                ("WXYZ", 38, 2, 40),
                ("ABC", 3, 9, 12),
                ("DEF", 6, 20, 26),
                ("ABC", 9, 0, 9),
            ]
        );
    }

    #[test]
    fn ties_keep_record_order() {
        let rows = build_distance_table(&[record("BCD", &[1, 7]), record("ABC", &[0, 6])]);
        assert_eq!(summary(&rows), vec![("BCD", 6, 1, 7), ("ABC", 6, 0, 6)]);
    }

    #[test]
    fn empty_input() {
        assert!(build_distance_table(&[]).is_empty());
    }

    #[test]
    fn from_scan() {
        let text = normalize("ABCABCABC");
        let rows = build_distance_table(&find_repetitions(&text, 3, Some(16)));
        // 1 + 2 + 3 + 4 rows for lengths 6, 5, 4 and 3
        assert_eq!(rows.len(), 10);
        assert_eq!(rows[0].fragment, "ABCABC");
        assert!(rows.iter().all(|r| r.distance == 3));
    }
}
