//! H1B certified-application statistics CLI.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};

use h1b_cli::logging::{LogConfig, LogFormat, init_logging};
use h1b_cli::pipeline::{RunOptions, run};

mod cli;
mod summary;

use crate::cli::{Cli, LogFormatArg};
use crate::summary::print_summary;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    if let Err(error) = init_logging(&log_config_from_cli(&cli)) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let options = RunOptions {
        input: cli.input.clone(),
        occupations_output: cli.occupations_output.clone(),
        states_output: cli.states_output.clone(),
        top: cli.top,
        aliases: cli.aliases.clone(),
    };
    // Any failure is fatal: report it and exit non-zero.
    let exit_code = match run(&options) {
        Ok(result) => {
            if !cli.no_summary {
                print_summary(&result);
            }
            0
        }
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        use_env_filter: !cli.verbosity.is_present(),
        format: match cli.log_format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
        },
        with_ansi: match cli.color.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => io::stderr().is_terminal(),
        },
    }
}
