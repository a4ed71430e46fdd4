//! Writes ranked results with percentages of the certified total.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use h1b_model::{RankedEntry, Result};

/// Header line for the occupations report.
pub const OCCUPATIONS_HEADER: &str = "TOP_OCCUPATIONS;NUMBER_CERTIFIED_APPLICATIONS;PERCENTAGE";

/// Header line for the states report.
pub const STATES_HEADER: &str = "TOP_STATES;NUMBER_CERTIFIED_APPLICATIONS;PERCENTAGE";

/// Share of `count` against `total` as a percentage, rounded to one
/// decimal place.
///
/// A zero total yields 0.0 rather than NaN.
pub fn percentage(count: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let raw = count as f64 * 100.0 / total as f64;
    (raw * 10.0).round() / 10.0
}

/// Format one report line: `<key>;<count>;<percentage>%`.
pub fn format_line(entry: &RankedEntry, total_certified: u64) -> String {
    format!(
        "{};{};{:.1}%",
        entry.key,
        entry.count,
        percentage(entry.count, total_certified)
    )
}

/// Write the header line and ranked entries to `path`, replacing any
/// existing file.
pub fn write_ranking(
    path: &Path,
    header_line: &str,
    entries: &[RankedEntry],
    total_certified: u64,
) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writeln!(writer, "{header_line}")?;
    for entry in entries {
        writeln!(writer, "{}", format_line(entry, total_certified))?;
    }
    writer.flush()?;
    info!(path = %path.display(), entries = entries.len(), "wrote report");
    Ok(())
}
