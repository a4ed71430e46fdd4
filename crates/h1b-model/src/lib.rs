//! Shared data model for the H1B statistics tools.

pub mod aliases;
pub mod error;
pub mod tally;

pub use aliases::{AliasConfig, CERTIFIED_STATUS, Field};
pub use error::{H1bError, Result};
pub use tally::{AggregationResult, RankedEntry, TallyMap};
