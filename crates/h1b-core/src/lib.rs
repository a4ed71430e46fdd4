//! Counting and ranking logic for H1B certified applications.

pub mod aggregate;
pub mod rank;

pub use aggregate::aggregate;
pub use rank::{DEFAULT_TOP_N, rank};
