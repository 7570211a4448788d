use std::collections::BTreeSet;

use tracing::{debug, trace};

use crate::{divisors, gcd, DistanceRow};

/// Key lengths that are still consistent with the distances seen so far.
///
/// Every member is greater than 1. Iteration is ascending
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSet(BTreeSet<usize>);

impl CandidateSet {
    /// The divisors of the seed distance, or `None` when it has none (distance 0 or 1)
    pub fn seed(distance: usize) -> Option<Self> {
        let set: BTreeSet<usize> = divisors(distance).into_iter().collect();
        (!set.is_empty()).then_some(Self(set))
    }

    /// Replaces every candidate `c` by `gcd(c, distance)`, dropping results of 1.
    ///
    /// If nothing would remain the set is left untouched and `false` is returned: a
    /// distance that shares no factor with any candidate is treated as noise
    pub fn narrow(&mut self, distance: usize) -> bool {
        let next: BTreeSet<usize> = self
            .0
            .iter()
            .map(|&c| gcd(c, distance))
            .filter(|&g| g > 1)
            .collect();
        if next.is_empty() {
            return false;
        }
        self.0 = next;
        true
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, key_len: usize) -> bool {
        self.0.contains(&key_len)
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }

    pub fn into_vec(self) -> Vec<usize> {
        self.0.into_iter().collect()
    }
}

/// Result of running the reducer over a distance table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reduction {
    /// The table had no rows
    NoRows,
    /// The first distance has no divisor above 1
    DegenerateSeed(usize),
    Candidates(CandidateSet),
}

impl Reduction {
    /// The candidates as an ascending list, empty when no hypothesis could be formed
    pub fn into_candidates(self) -> Vec<usize> {
        match self {
            Reduction::Candidates(set) => set.into_vec(),
            Reduction::NoRows | Reduction::DegenerateSeed(_) => Vec::new(),
        }
    }
}

/// Kasiski's GCD narrowing over `rows`, which must already be in table order (see
/// [`build_distance_table`](crate::build_distance_table)).
///
/// The first row seeds the candidates with the divisors of its distance, every later row
/// narrows them with [`CandidateSet::narrow`]
pub fn reduce(rows: &[DistanceRow]) -> Reduction {
    let Some((seed_row, rest)) = rows.split_first() else {
        return Reduction::NoRows;
    };
    let Some(mut candidates) = CandidateSet::seed(seed_row.distance) else {
        debug!(distance = seed_row.distance, "seed distance has no divisors");
        return Reduction::DegenerateSeed(seed_row.distance);
    };
    debug!(
        fragment = %seed_row.fragment,
        distance = seed_row.distance,
        candidates = ?candidates,
        "seeded candidates"
    );

    for row in rest {
        if candidates.narrow(row.distance) {
            trace!(fragment = %row.fragment, distance = row.distance, candidates = ?candidates, "narrowed");
        } else {
            trace!(fragment = %row.fragment, distance = row.distance, "skipped, no common factor");
        }
    }

    debug!(candidates = ?candidates, rows = rows.len(), "reduction done");
    Reduction::Candidates(candidates)
}
