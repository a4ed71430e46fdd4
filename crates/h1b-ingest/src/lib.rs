//! Input handling for H1B disclosure files.

pub mod header;
pub mod reader;

pub use header::{ResolvedColumns, resolve_headers};
pub use reader::{load_alias_config, open_input};
