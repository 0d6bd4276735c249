use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use remap_core::{LabelStatus, RuleStatus, Suggestion};
use remap_model::RuleList;

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

/// Rule list with the resolution status of each label.
pub fn rule_table(rules: &RuleList, statuses: &[RuleStatus]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Old material"),
        header_cell(""),
        header_cell(""),
        header_cell("New material"),
        header_cell(""),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Center);
    align_column(&mut table, 3, CellAlignment::Center);
    align_column(&mut table, 5, CellAlignment::Center);

    for (index, (rule, status)) in rules.iter().zip(statuses).enumerate() {
        table.add_row(vec![
            dim_cell(index),
            label_cell(&rule.old),
            status_cell(status.old),
            dim_cell("→"),
            label_cell(&rule.new),
            status_cell(status.new),
        ]);
    }
    table
}

pub fn suggestion_table(suggestions: &[Suggestion]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Material"), header_cell("Score")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for suggestion in suggestions {
        let name = if suggestion.prefix {
            Cell::new(&suggestion.name).add_attribute(Attribute::Bold)
        } else {
            Cell::new(&suggestion.name)
        };
        table.add_row(vec![name, dim_cell(format!("{:.2}", suggestion.score))]);
    }
    table
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn label_cell(label: &str) -> Cell {
    if label.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(label)
    }
}

fn status_cell(status: LabelStatus) -> Cell {
    let cell = Cell::new(status.symbol());
    match status {
        LabelStatus::Blank => cell,
        LabelStatus::Resolved => cell.fg(Color::Green),
        LabelStatus::Missing => cell.fg(Color::Yellow).add_attribute(Attribute::Bold),
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
