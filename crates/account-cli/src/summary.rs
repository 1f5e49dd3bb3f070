use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use account_cli::types::RunSummary;

/// Number of rows in the most-reported-fields table.
const TOP_FIELDS: usize = 10;

pub fn print_summary(result: &RunSummary) {
    println!("Output: {}", result.output_dir.display());
    println!("Validation report: {}", result.report.display());
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Arm"),
        header_cell("Input"),
        header_cell("Rows"),
        header_cell("Valid"),
        header_cell("Invalid"),
        header_cell("Messages"),
        header_cell("Columns"),
        header_cell("Output"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 2..=6 {
        align_column(&mut table, index, CellAlignment::Right);
    }

    let mut total_rows = 0usize;
    let mut total_valid = 0usize;
    let mut total_messages = 0usize;
    for arm in &result.arms {
        total_rows += arm.rows;
        total_valid += arm.valid_rows;
        total_messages += arm.messages.len();
        table.add_row(vec![
            Cell::new(arm.arm.label())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(arm.input.display()),
            Cell::new(arm.rows),
            Cell::new(arm.valid_rows),
            count_cell(arm.invalid_rows(), Color::Yellow),
            count_cell(arm.messages.len(), Color::Red),
            Cell::new(arm.output_columns),
            Cell::new(arm.output.display()),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(total_rows).add_attribute(Attribute::Bold),
        Cell::new(total_valid).add_attribute(Attribute::Bold),
        count_cell(total_rows - total_valid, Color::Yellow).add_attribute(Attribute::Bold),
        count_cell(total_messages, Color::Red).add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
    ]);
    println!("{table}");
    print_field_table(result);
}

fn print_field_table(result: &RunSummary) {
    let counts = result.field_counts();
    if counts.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Messages")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (field, count) in counts.iter().take(TOP_FIELDS) {
        table.add_row(vec![Cell::new(field), count_cell(*count, Color::Red)]);
    }
    println!();
    println!("Most reported fields:");
    println!("{table}");
    if counts.len() > TOP_FIELDS {
        println!("... and {} more fields", counts.len() - TOP_FIELDS);
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(165);
}

pub fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

pub fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
