//! Logical input fields and their header alias configuration.
//!
//! H1B disclosure files from different years name the same columns
//! differently (`CASE_STATUS` vs `STATUS`, `SOC_NAME` vs
//! `LCA_CASE_SOC_NAME`). The counting pass works in terms of three
//! logical fields; [`AliasConfig`] maps each one to an ordered list of
//! header names to try against the file actually being read.

use std::fmt;

use serde::Deserialize;

/// Status value that marks a row as a certified application.
///
/// Comparison is exact and case-sensitive.
pub const CERTIFIED_STATUS: &str = "CERTIFIED";

/// The three logical columns the counting pass reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    CaseStatus,
    Occupation,
    WorkState,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::CaseStatus => "case status",
            Self::Occupation => "occupation",
            Self::WorkState => "work state",
        };
        f.write_str(name)
    }
}

/// Ordered header candidates per logical field.
///
/// Earlier entries take priority when a file header contains more than
/// one alias for the same field. Deserializes from JSON; omitted fields
/// keep the built-in defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AliasConfig {
    pub case_status: Vec<String>,
    pub occupation: Vec<String>,
    pub work_state: Vec<String>,
}

impl Default for AliasConfig {
    fn default() -> Self {
        Self {
            case_status: to_owned(&["CASE_STATUS", "STATUS"]),
            occupation: to_owned(&["SOC_NAME", "LCA_CASE_SOC_NAME"]),
            work_state: to_owned(&["WORKSITE_STATE", "LCA_CASE_WORKLOC1_STATE"]),
        }
    }
}

impl AliasConfig {
    /// Candidate header names for `field`, highest priority first.
    pub fn candidates(&self, field: Field) -> &[String] {
        match field {
            Field::CaseStatus => &self.case_status,
            Field::Occupation => &self.occupation,
            Field::WorkState => &self.work_state,
        }
    }
}

fn to_owned(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| (*name).to_string()).collect()
}
