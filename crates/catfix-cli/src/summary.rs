//! Human-readable run summaries.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

use catfix_cli::pipeline::{GenerateOutcome, SplitOutcome};

pub fn print_generate_summary(outcome: &GenerateOutcome) {
    println!("Output: {}", outcome.output_path.display());
    let mut table = Table::new();
    table.set_header(vec!["Rows", "Skipped", "Filtered", "Records", "Bytes"]);
    apply_table_style(&mut table);
    for index in 0..5 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new(outcome.rows_read),
        Cell::new(outcome.rows_skipped),
        Cell::new(outcome.rows_filtered),
        Cell::new(outcome.records),
        Cell::new(outcome.document_bytes),
    ]);
    println!("{table}");
}

pub fn print_split_summary(outcome: &SplitOutcome) {
    println!(
        "Split {} entries into {} fragments:",
        outcome.entries,
        outcome.fragments.len()
    );
    for path in &outcome.fragments {
        println!("  {}", path.display());
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
