//! Error types shared across the H1B statistics crates.

use thiserror::Error;

use crate::aliases::Field;

#[derive(Debug, Error)]
pub enum H1bError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    /// None of the configured aliases for a logical field appear in the
    /// input header. Reported before any row is processed.
    #[error("no {field} column in input header (tried: {})", .candidates.join(", "))]
    MissingColumn {
        field: Field,
        candidates: Vec<String>,
    },
    #[error("invalid alias configuration {path}: {message}")]
    AliasConfig { path: String, message: String },
}

pub type Result<T> = std::result::Result<T, H1bError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_column_names_field_and_candidates() {
        let error = H1bError::MissingColumn {
            field: Field::WorkState,
            candidates: vec!["WORKSITE_STATE".to_string(), "STATE".to_string()],
        };
        assert_eq!(
            error.to_string(),
            "no work state column in input header (tried: WORKSITE_STATE, STATE)"
        );
    }
}
