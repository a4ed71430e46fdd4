//! Opens input files: the semicolon-delimited disclosure CSV and the
//! optional alias configuration.

use std::fs::File;
use std::path::Path;

use csv::{Reader, ReaderBuilder};
use tracing::debug;

use h1b_model::{AliasConfig, H1bError, Result};

/// Open a semicolon-delimited disclosure file with a header row.
///
/// The reader is flexible about ragged rows; short records surface as
/// empty cells downstream rather than aborting the scan.
pub fn open_input(path: &Path) -> Result<Reader<File>> {
    let reader = ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;
    debug!(path = %path.display(), "opened input file");
    Ok(reader)
}

/// Load an alias configuration from a JSON file.
///
/// Fields omitted from the file keep the built-in defaults.
pub fn load_alias_config(path: &Path) -> Result<AliasConfig> {
    let text = std::fs::read_to_string(path)?;
    let config = serde_json::from_str(&text).map_err(|error| H1bError::AliasConfig {
        path: path.display().to_string(),
        message: error.to_string(),
    })?;
    debug!(path = %path.display(), "loaded alias configuration");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use h1b_model::Field;

    use super::*;

    #[test]
    fn open_input_splits_on_semicolons() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "CASE_STATUS;SOC_NAME;WORKSITE_STATE").unwrap();
        writeln!(file, "CERTIFIED;SOFTWARE ENGINEER;CA").unwrap();
        file.flush().unwrap();

        let mut reader = open_input(file.path()).unwrap();
        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers.len(), 3);
        let rows: Vec<_> = reader.records().collect::<std::result::Result<_, _>>().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get(1), Some("SOFTWARE ENGINEER"));
    }

    #[test]
    fn open_input_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let error = open_input(&dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(error, H1bError::Csv(_)));
    }

    #[test]
    fn load_alias_config_overrides_one_field() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"work_state": ["EMPLOYER_STATE"]}}"#).unwrap();
        file.flush().unwrap();

        let config = load_alias_config(file.path()).unwrap();
        assert_eq!(
            config.candidates(Field::WorkState),
            &["EMPLOYER_STATE".to_string()]
        );
        assert_eq!(
            config.candidates(Field::CaseStatus),
            AliasConfig::default().candidates(Field::CaseStatus)
        );
    }

    #[test]
    fn load_alias_config_rejects_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        file.flush().unwrap();

        let error = load_alias_config(file.path()).unwrap_err();
        assert!(matches!(error, H1bError::AliasConfig { .. }));
    }
}
