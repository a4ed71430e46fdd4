//! Deterministic top-N ranking of tallies.

use h1b_model::{RankedEntry, TallyMap};

/// Number of entries kept per category when no limit is given.
pub const DEFAULT_TOP_N: usize = 10;

/// Rank a tally by count descending, key ascending on ties, keeping at
/// most `n` entries.
///
/// The tie-break is byte-wise lexicographic on the key, so equal counts
/// always come out in the same order regardless of how the tally was
/// built.
pub fn rank(tally: &TallyMap, n: usize) -> Vec<RankedEntry> {
    let mut entries: Vec<RankedEntry> = tally
        .iter()
        .map(|(key, count)| RankedEntry::new(key, count))
        .collect();
    entries.sort();
    entries.truncate(n);
    entries
}
