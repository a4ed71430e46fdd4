//! End-to-end counting tests: header resolution, aggregation, ranking.

use csv::ReaderBuilder;

use h1b_core::{aggregate, rank};
use h1b_ingest::resolve_headers;
use h1b_model::AliasConfig;

fn count(input: &str) -> h1b_model::AggregationResult {
    let mut reader = ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(true)
        .flexible(true)
        .from_reader(input.as_bytes());
    let header_row = reader.headers().unwrap().clone();
    let columns = resolve_headers(&header_row, &AliasConfig::default()).unwrap();
    aggregate(reader.records(), &columns).unwrap()
}

#[test]
fn reference_scenario() {
    let input = "\
WORKSITE_STATE;CASE_STATUS;SOC_NAME
CA;CERTIFIED;ENGINEER
CA;CERTIFIED;ENGINEER
NY;CERTIFIED;ANALYST
TX;DENIED;ENGINEER
";
    let result = count(input);
    assert_eq!(result.total_certified, 3);

    let states = rank(&result.states, 10);
    assert_eq!(states.len(), 2);
    assert_eq!((states[0].key.as_str(), states[0].count), ("CA", 2));
    assert_eq!((states[1].key.as_str(), states[1].count), ("NY", 1));

    let occupations = rank(&result.occupations, 10);
    assert_eq!(
        (occupations[0].key.as_str(), occupations[0].count),
        ("ENGINEER", 2)
    );
    assert_eq!(
        (occupations[1].key.as_str(), occupations[1].count),
        ("ANALYST", 1)
    );
}

#[test]
fn legacy_header_names_count_the_same() {
    let input = "\
LCA_CASE_WORKLOC1_STATE;STATUS;LCA_CASE_SOC_NAME
CA;CERTIFIED;ENGINEER
NY;CERTIFIED;ANALYST
";
    let result = count(input);
    assert_eq!(result.total_certified, 2);
    assert_eq!(result.states.count("CA"), 1);
    assert_eq!(result.occupations.count("ANALYST"), 1);
}

#[test]
fn each_certified_row_increments_exactly_one_key_per_tally() {
    let input = "\
WORKSITE_STATE;CASE_STATUS;SOC_NAME
CA;CERTIFIED;ENGINEER
CA;DENIED;ENGINEER
NV;CERTIFIED;ANALYST
NV;CERTIFIED;ANALYST
OR;PENDING;ANALYST
";
    let result = count(input);
    assert_eq!(result.total_certified, 3);
    assert_eq!(result.states.total(), result.total_certified);
    assert_eq!(result.occupations.total(), result.total_certified);
}

#[test]
fn counting_twice_is_identical() {
    let input = "\
WORKSITE_STATE;CASE_STATUS;SOC_NAME
CA;CERTIFIED;ENGINEER
NY;CERTIFIED;ANALYST
";
    assert_eq!(count(input), count(input));
}
