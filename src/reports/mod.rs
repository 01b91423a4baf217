use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use strum_macros::{Display, EnumString};
use taiscore::api::{PatternView, ScoreView};
use taiscore::scorer::ScoreDetails;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum OutputFormat {
    Table,
    Json,
}

pub fn pattern_table(patterns: &[PatternView]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("#"),
        Cell::new("Hand").add_attribute(Attribute::Bold),
        Cell::new("Tai").fg(Color::Cyan),
        Cell::new("Sel"),
    ]);

    for (i, p) in patterns.iter().enumerate() {
        let mark = if p.selected { "x" } else { "" };
        table.add_row(vec![
            Cell::new(i + 1).set_alignment(CellAlignment::Right),
            Cell::new(&p.name),
            Cell::new(&p.label).set_alignment(CellAlignment::Right),
            Cell::new(mark).set_alignment(CellAlignment::Center),
        ]);
    }
    table
}

pub fn breakdown_table(details: &ScoreDetails) -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Item").add_attribute(Attribute::Bold),
        Cell::new("Rule"),
        Cell::new("Tai").fg(Color::Cyan),
    ]);

    table.add_row(vec![
        Cell::new("Base (底)"),
        Cell::new(""),
        Cell::new(details.base_score).set_alignment(CellAlignment::Right),
    ]);

    for c in &details.contributions {
        table.add_row(vec![
            Cell::new(&c.name),
            Cell::new(&c.label).set_alignment(CellAlignment::Right),
            Cell::new(c.points).set_alignment(CellAlignment::Right),
        ]);
    }

    for name in &details.unknown {
        table.add_row(vec![
            Cell::new(name).fg(Color::Red),
            Cell::new("unknown").fg(Color::Red),
            Cell::new(0).set_alignment(CellAlignment::Right),
        ]);
    }

    table.add_row(vec![
        Cell::new("Total").add_attribute(Attribute::Bold),
        Cell::new(format!("x{}", details.point_value)),
        Cell::new(details.total_score)
            .add_attribute(Attribute::Bold)
            .set_alignment(CellAlignment::Right),
    ]);
    table
}

pub fn totals_line(total_score: i64, total_payout: i64) -> String {
    format!(
        "Total score: {}\nTotal payout: {}",
        total_score, total_payout
    )
}

pub fn inputs_line(view: &ScoreView) -> String {
    format!(
        "base_score={:?} point_value={:?} repeat_count={:?} hands=[{}]",
        view.base_score,
        view.point_value,
        view.repeat_count,
        view.selected.join(", ")
    )
}
