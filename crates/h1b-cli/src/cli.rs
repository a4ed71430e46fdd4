//! CLI argument definitions for the H1B statistics tool.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use h1b_core::DEFAULT_TOP_N;

#[derive(Parser)]
#[command(
    name = "h1b-stats",
    version,
    about = "Count certified H1B applications by work state and occupation",
    long_about = "Read a semicolon-delimited H1B disclosure CSV, count certified \
                  applications per work state and per occupation, and write the \
                  top-N results with percentages to two report files."
)]
pub struct Cli {
    /// Semicolon-delimited input CSV of H1B applications.
    #[arg(value_name = "INPUT_CSV")]
    pub input: PathBuf,

    /// Output path for the top occupations report.
    #[arg(value_name = "OCCUPATIONS_OUTPUT")]
    pub occupations_output: PathBuf,

    /// Output path for the top states report.
    #[arg(value_name = "STATES_OUTPUT")]
    pub states_output: PathBuf,

    /// Number of entries to keep per category.
    #[arg(long = "top", value_name = "N", default_value_t = DEFAULT_TOP_N)]
    pub top: usize,

    /// JSON file overriding the built-in header aliases.
    #[arg(long = "aliases", value_name = "PATH")]
    pub aliases: Option<PathBuf>,

    /// Skip the run summary table on stdout.
    #[arg(long = "no-summary")]
    pub no_summary: bool,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format (pretty for human, compact for single-line).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_positional_paths_and_top() {
        let cli = Cli::parse_from([
            "h1b-stats",
            "input.csv",
            "occupations.txt",
            "states.txt",
            "--top",
            "5",
        ]);
        assert_eq!(cli.input, PathBuf::from("input.csv"));
        assert_eq!(cli.occupations_output, PathBuf::from("occupations.txt"));
        assert_eq!(cli.states_output, PathBuf::from("states.txt"));
        assert_eq!(cli.top, 5);
        assert!(cli.aliases.is_none());
    }

    #[test]
    fn top_defaults_to_ten() {
        let cli = Cli::parse_from(["h1b-stats", "in.csv", "occ.txt", "states.txt"]);
        assert_eq!(cli.top, DEFAULT_TOP_N);
    }
}
