//! Maps configured header aliases onto the columns actually present.

use csv::StringRecord;
use tracing::debug;

use h1b_model::{AliasConfig, Field, H1bError, Result};

/// Column indexes for the three logical fields, resolved against one
/// header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedColumns {
    pub status: usize,
    pub occupation: usize,
    pub state: usize,
}

/// Resolve all three logical fields against `header_row`.
///
/// For each field the first configured alias present in the header wins;
/// candidate order is the priority order. Fails with
/// [`H1bError::MissingColumn`] if a field has no matching column, so the
/// row scan never hits an out-of-range lookup.
pub fn resolve_headers(
    header_row: &StringRecord,
    config: &AliasConfig,
) -> Result<ResolvedColumns> {
    let headers: Vec<String> = header_row
        .iter()
        .map(|raw| normalize_header(raw).to_string())
        .collect();
    Ok(ResolvedColumns {
        status: resolve_field(&headers, Field::CaseStatus, config)?,
        occupation: resolve_field(&headers, Field::Occupation, config)?,
        state: resolve_field(&headers, Field::WorkState, config)?,
    })
}

fn resolve_field(headers: &[String], field: Field, config: &AliasConfig) -> Result<usize> {
    let candidates = config.candidates(field);
    for alias in candidates {
        if let Some(index) = headers.iter().position(|header| header == alias) {
            debug!(field = %field, alias = %alias, column = index, "resolved header");
            return Ok(index);
        }
    }
    Err(H1bError::MissingColumn {
        field,
        candidates: candidates.to_vec(),
    })
}

/// Strip surrounding whitespace and a leading BOM before matching.
fn normalize_header(raw: &str) -> &str {
    raw.trim().trim_matches('\u{feff}')
}
