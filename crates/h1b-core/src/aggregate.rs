//! Single-pass counting of certified applications.

use csv::StringRecord;
use tracing::debug;

use h1b_ingest::ResolvedColumns;
use h1b_model::{AggregationResult, CERTIFIED_STATUS, Result, TallyMap};

/// Fold a record stream into per-state and per-occupation tallies.
///
/// Only rows whose status cell is exactly [`CERTIFIED_STATUS`] count;
/// each such row contributes one increment to the state tally, one to
/// the occupation tally, and one to the certified total. All other rows
/// are skipped without touching the accumulator.
pub fn aggregate<I>(records: I, columns: &ResolvedColumns) -> Result<AggregationResult>
where
    I: IntoIterator<Item = std::result::Result<StringRecord, csv::Error>>,
{
    let mut states = TallyMap::new();
    let mut occupations = TallyMap::new();
    let mut total_certified = 0u64;

    for record in records {
        let record = record?;
        if cell(&record, columns.status) != CERTIFIED_STATUS {
            continue;
        }
        states.increment(cell(&record, columns.state));
        occupations.increment(cell(&record, columns.occupation));
        total_certified += 1;
    }

    debug!(
        total_certified,
        states = states.len(),
        occupations = occupations.len(),
        "counting pass complete"
    );
    Ok(AggregationResult {
        total_certified,
        states,
        occupations,
    })
}

/// Cell value at `index`, trimmed; short records read as empty.
fn cell(record: &StringRecord, index: usize) -> &str {
    record.get(index).map(str::trim).unwrap_or("")
}
