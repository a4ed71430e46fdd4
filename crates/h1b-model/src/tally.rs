//! Tally accumulation and ranked results.

use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Certified-application counts per grouping key (state or occupation).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TallyMap(BTreeMap<String, u64>);

impl TallyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one to the count for `key`, inserting it at zero first if new.
    pub fn increment(&mut self, key: impl Into<String>) {
        *self.0.entry(key.into()).or_insert(0) += 1;
    }

    /// Count for `key`, zero if absent.
    pub fn count(&self, key: &str) -> u64 {
        self.0.get(key).copied().unwrap_or(0)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.0.iter().map(|(key, count)| (key.as_str(), *count))
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.0.values().sum()
    }
}

/// One ranked row: a grouping key and its certified count.
///
/// The derived ordering is count descending, then key ascending, so a
/// plain sort yields the deterministic top-N order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedEntry {
    pub key: String,
    pub count: u64,
}

impl RankedEntry {
    pub fn new(key: impl Into<String>, count: u64) -> Self {
        Self {
            key: key.into(),
            count,
        }
    }
}

impl Ord for RankedEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .count
            .cmp(&self.count)
            .then_with(|| self.key.cmp(&other.key))
    }
}

impl PartialOrd for RankedEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Outcome of one counting pass over an input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregationResult {
    /// Total number of rows whose status was exactly `CERTIFIED`.
    pub total_certified: u64,
    /// Certified counts per work state.
    pub states: TallyMap,
    /// Certified counts per occupation (SOC name).
    pub occupations: TallyMap,
}
