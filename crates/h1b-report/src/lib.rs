//! Report generation for ranked certified-application counts.

pub mod writer;

pub use writer::{
    OCCUPATIONS_HEADER, STATES_HEADER, format_line, percentage, write_ranking,
};
