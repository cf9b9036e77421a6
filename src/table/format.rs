use crate::conf::LayoutConfig;
use crate::table::{AnnotatedRow, RawRow, Rows};

/// Renders the five input columns: city left-justified, the rest right-justified.
pub fn format_raw_row(row: &RawRow, layout: &LayoutConfig) -> String {
    format!(
        "{:<city$}{:>population$}{:>area$}{:>density$}{:>country$}",
        row.city,
        row.population,
        row.area,
        row.density,
        row.country,
        city = layout.city,
        population = layout.population,
        area = layout.area,
        density = layout.density,
        country = layout.country,
    )
}

pub fn format_row(row: &AnnotatedRow, layout: &LayoutConfig) -> String {
    let mut line = format_raw_row(&row.row, layout);
    line.push_str(&format!(
        "{:>width$}",
        row.percentage,
        width = layout.percentage
    ));
    line
}

/// One line per row in current order. Raw rows have no percentage column.
pub fn render(rows: &Rows, layout: &LayoutConfig) -> Vec<String> {
    match rows {
        Rows::Raw(rows) => rows.iter().map(|r| format_raw_row(r, layout)).collect(),
        Rows::Annotated(rows) => rows.iter().map(|r| format_row(r, layout)).collect(),
    }
}
