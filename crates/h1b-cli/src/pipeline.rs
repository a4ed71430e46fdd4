//! One-shot counting pipeline: resolve, aggregate, rank, write.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use h1b_core::{aggregate, rank};
use h1b_ingest::{load_alias_config, open_input, resolve_headers};
use h1b_model::{AliasConfig, RankedEntry};
use h1b_report::{OCCUPATIONS_HEADER, STATES_HEADER, write_ranking};

/// Inputs for one run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Semicolon-delimited input CSV.
    pub input: PathBuf,
    /// Output path for the top occupations report.
    pub occupations_output: PathBuf,
    /// Output path for the top states report.
    pub states_output: PathBuf,
    /// Entries to keep per category.
    pub top: usize,
    /// Optional JSON alias configuration overriding the defaults.
    pub aliases: Option<PathBuf>,
}

/// What one run produced, for the summary table.
#[derive(Debug)]
pub struct RunResult {
    pub total_certified: u64,
    pub top_occupations: Vec<RankedEntry>,
    pub top_states: Vec<RankedEntry>,
    pub occupations_output: PathBuf,
    pub states_output: PathBuf,
}

/// Run the full pipeline. Both reports come from a single pass over the
/// input file; nothing is written until the pass has completed, so a
/// failed scan leaves no partial output behind.
pub fn run(options: &RunOptions) -> Result<RunResult> {
    let span = info_span!("count", input = %options.input.display());
    let _guard = span.enter();

    let aliases = match &options.aliases {
        Some(path) => load_alias_config(path)
            .with_context(|| format!("load alias configuration {}", path.display()))?,
        None => AliasConfig::default(),
    };

    let mut reader = open_input(&options.input)
        .with_context(|| format!("open input file {}", options.input.display()))?;
    let header_row = reader.headers().context("read header row")?.clone();
    let columns = resolve_headers(&header_row, &aliases)?;

    let result = aggregate(reader.records(), &columns).context("scan input rows")?;
    info!(
        total_certified = result.total_certified,
        states = result.states.len(),
        occupations = result.occupations.len(),
        "input scanned"
    );

    let top_occupations = rank(&result.occupations, options.top);
    let top_states = rank(&result.states, options.top);

    write_ranking(
        &options.occupations_output,
        OCCUPATIONS_HEADER,
        &top_occupations,
        result.total_certified,
    )
    .with_context(|| format!("write {}", options.occupations_output.display()))?;
    write_ranking(
        &options.states_output,
        STATES_HEADER,
        &top_states,
        result.total_certified,
    )
    .with_context(|| format!("write {}", options.states_output.display()))?;

    Ok(RunResult {
        total_certified: result.total_certified,
        top_occupations,
        top_states,
        occupations_output: options.occupations_output.clone(),
        states_output: options.states_output.clone(),
    })
}
