//! Run summary table printed to stdout after a successful run.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use h1b_cli::pipeline::RunResult;
use h1b_model::RankedEntry;
use h1b_report::percentage;

pub fn print_summary(result: &RunResult) {
    println!("Certified applications: {}", result.total_certified);
    println!("Occupations report: {}", result.occupations_output.display());
    println!("States report: {}", result.states_output.display());

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        header_cell("Category"),
        header_cell("Key"),
        header_cell("Certified"),
        header_cell("Share"),
    ]);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);

    add_rows(
        &mut table,
        "Occupation",
        &result.top_occupations,
        result.total_certified,
    );
    add_rows(&mut table, "State", &result.top_states, result.total_certified);

    println!("{table}");
}

fn add_rows(table: &mut Table, category: &str, entries: &[RankedEntry], total: u64) {
    for entry in entries {
        table.add_row(vec![
            Cell::new(category),
            Cell::new(&entry.key),
            Cell::new(entry.count),
            Cell::new(format!("{:.1}%", percentage(entry.count, total))),
        ]);
    }
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
