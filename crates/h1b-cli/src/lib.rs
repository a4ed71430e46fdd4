//! CLI library components for the H1B statistics tool.

pub mod logging;
pub mod pipeline;
