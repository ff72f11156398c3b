//! Console Presenter Module
//! Renders the dashboard as deterministic fixed-width text: tables as
//! aligned columns, charts as ASCII bars. Everything accumulates in a
//! buffer so the binary prints once and tests can snapshot the output.

use polars::prelude::*;

use super::Presenter;
use crate::charts::{ChartKind, ChartSpec, SeriesLabel};

/// Rows shown before a long table is elided.
const TABLE_PREVIEW_ROWS: usize = 12;

/// Widest bar drawn, in glyphs.
const BAR_WIDTH: usize = 40;

/// Glyphs assigned to stacked/segmented series, cycled when exhausted.
const SERIES_GLYPHS: [char; 5] = ['#', '=', '-', '+', '*'];

/// Accumulates the rendered dashboard as plain text.
#[derive(Debug, Default)]
pub struct ConsolePresenter {
    out: String,
}

impl ConsolePresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the presenter and hand back the full report.
    pub fn into_report(self) -> String {
        self.out
    }
}

impl Presenter for ConsolePresenter {
    fn text(&mut self, markdown: &str) {
        self.out.push_str(markdown);
        self.out.push_str("\n\n");
    }

    fn render_table(&mut self, title: &str, table: &DataFrame) {
        self.out.push_str(&format!("Table: {title}\n"));
        self.out.push_str(&format_table(table, TABLE_PREVIEW_ROWS));
        self.out.push('\n');
    }

    fn render_chart(&mut self, spec: &ChartSpec, table: &DataFrame) {
        self.out.push_str(&format!("Chart: {}\n", spec.title));
        let body = match &spec.kind {
            ChartKind::GeoScatter {
                locations,
                size,
                color,
                hover,
            } => format_geo(table, locations, size, color, hover),
            ChartKind::Bar { x, y } => format_bar(table, x, y),
            ChartKind::StackedBar { x, series } => format_stacked(table, x, series),
            ChartKind::CategoryBar { x, y, color } => format_category(table, x, y, color),
        };
        self.out.push_str(&body);
        self.out.push('\n');
    }

    fn numeric_slider(&mut self, label: &str, min: i64, max: i64, default: i64) -> i64 {
        let value = default.min(max).max(min);
        self.out
            .push_str(&format!("[slider] {label}: {value} (range {min}..={max})\n\n"));
        value
    }
}

fn is_numeric(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Float32
            | DataType::Float64
            | DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
    )
}

fn fmt_value(value: &AnyValue) -> String {
    match value {
        AnyValue::Float64(v) => format!("{v:.4}"),
        AnyValue::Float32(v) => format!("{v:.4}"),
        AnyValue::Null => String::new(),
        other => other.to_string().trim_matches('"').to_string(),
    }
}

/// Render a DataFrame as aligned text columns, numeric columns
/// right-aligned. Long tables show the first `max_rows` rows plus a
/// remainder note.
fn format_table(table: &DataFrame, max_rows: usize) -> String {
    if table.height() == 0 {
        return "(no rows)\n".to_string();
    }

    let names: Vec<String> = table
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();
    let right_align: Vec<bool> = table
        .get_columns()
        .iter()
        .map(|c| is_numeric(c.dtype()))
        .collect();

    let shown = table.height().min(max_rows);
    let mut rows: Vec<Vec<String>> = Vec::with_capacity(shown);
    for i in 0..shown {
        let mut row = Vec::with_capacity(names.len());
        for column in table.get_columns() {
            let cell = column.get(i).map(|v| fmt_value(&v)).unwrap_or_default();
            row.push(cell);
        }
        rows.push(row);
    }

    let mut widths: Vec<usize> = names.iter().map(|n| n.chars().count()).collect();
    for row in &rows {
        for (j, cell) in row.iter().enumerate() {
            widths[j] = widths[j].max(cell.chars().count());
        }
    }

    let mut out = String::new();
    out.push_str(format_row(&names, &widths, &right_align).trim_end());
    out.push('\n');

    let dashes: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(format_row(&dashes, &widths, &right_align).trim_end());
    out.push('\n');

    for row in &rows {
        out.push_str(format_row(row, &widths, &right_align).trim_end());
        out.push('\n');
    }

    if table.height() > shown {
        out.push_str(&format!("... ({} more rows)\n", table.height() - shown));
    }

    out
}

fn format_row(cells: &[String], widths: &[usize], right_align: &[bool]) -> String {
    let mut parts = Vec::with_capacity(cells.len());
    for (j, cell) in cells.iter().enumerate() {
        if right_align[j] {
            parts.push(format!("{cell:>width$}", width = widths[j]));
        } else {
            parts.push(format!("{cell:<width$}", width = widths[j]));
        }
    }
    parts.join("  ")
}

fn format_bar(table: &DataFrame, x: &str, y: &str) -> String {
    let labels = column_strings(table, x);
    let values = column_f64(table, y);
    if labels.is_empty() || labels.len() != values.len() {
        return "(no data)\n".to_string();
    }

    let label_width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let value_width = values
        .iter()
        .map(|v| format!("{v:.0}").chars().count())
        .max()
        .unwrap_or(1);
    let max = values.iter().cloned().fold(0.0_f64, f64::max);

    let mut out = String::new();
    for (label, value) in labels.iter().zip(&values) {
        let mut bar = String::new();
        for _ in 0..scale(*value, max) {
            bar.push('#');
        }
        out.push_str(
            format!("{label:<label_width$}  {value:>value_width$.0} |{bar}").trim_end(),
        );
        out.push('\n');
    }
    out
}

fn format_stacked(table: &DataFrame, x: &str, series: &[SeriesLabel]) -> String {
    let labels = column_strings(table, x);
    if labels.is_empty() {
        return "(no data)\n".to_string();
    }
    let columns: Vec<Vec<f64>> = series.iter().map(|s| column_f64(table, &s.column)).collect();
    if columns.iter().any(|c| c.len() != labels.len()) {
        return "(no data)\n".to_string();
    }

    let totals: Vec<f64> = (0..labels.len())
        .map(|i| columns.iter().map(|c| c[i]).sum())
        .collect();
    let max = totals.iter().cloned().fold(0.0_f64, f64::max);

    let legend: Vec<String> = series
        .iter()
        .enumerate()
        .map(|(j, s)| format!("{} '{}'", s.label, glyph(j)))
        .collect();

    let label_width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let total_width = totals
        .iter()
        .map(|t| format!("{t:.0}").chars().count())
        .max()
        .unwrap_or(1);

    let mut out = String::new();
    out.push_str(&format!("legend: {}\n", legend.join(" | ")));

    for (i, label) in labels.iter().enumerate() {
        let mut bar = String::new();
        for (j, column) in columns.iter().enumerate() {
            for _ in 0..scale(column[i], max) {
                bar.push(glyph(j));
            }
        }
        let total = totals[i];
        out.push_str(
            format!("{label:<label_width$}  {total:>total_width$.0} |{bar}").trim_end(),
        );
        out.push('\n');
    }
    out
}

fn format_category(table: &DataFrame, x: &str, y: &str, color: &str) -> String {
    let groups_x = column_strings(table, x);
    let categories = column_strings(table, color);
    let values = column_f64(table, y);
    if groups_x.is_empty() || groups_x.len() != categories.len() || groups_x.len() != values.len() {
        return "(no data)\n".to_string();
    }

    // Rows arrive grouped by x; collapse consecutive runs into one bar each.
    let mut groups: Vec<(String, Vec<(String, f64)>)> = Vec::new();
    for i in 0..groups_x.len() {
        match groups.last_mut() {
            Some((g, items)) if *g == groups_x[i] => {
                items.push((categories[i].clone(), values[i]));
            }
            _ => groups.push((groups_x[i].clone(), vec![(categories[i].clone(), values[i])])),
        }
    }

    let label_width = groups.iter().map(|(g, _)| g.chars().count()).max().unwrap_or(0);

    let mut out = String::new();
    for (group, items) in &groups {
        let mut bar = String::new();
        for (j, (_, value)) in items.iter().enumerate() {
            let len = ((value * BAR_WIDTH as f64).round() as usize).min(BAR_WIDTH);
            for _ in 0..len {
                bar.push(glyph(j));
            }
        }
        out.push_str(format!("{group:<label_width$} |{bar}").trim_end());
        out.push('\n');

        let mut ranked: Vec<&(String, f64)> = items.iter().collect();
        ranked.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });
        let shown: Vec<String> = ranked
            .iter()
            .take(3)
            .map(|(c, v)| format!("{c} {:.1}%", v * 100.0))
            .collect();
        let mut line = format!("{:label_width$}   {}", "", shown.join(", "));
        if ranked.len() > 3 {
            line.push_str(&format!(", +{} more", ranked.len() - 3));
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

fn format_geo(
    table: &DataFrame,
    locations: &str,
    size: &str,
    color: &str,
    hover: &[String],
) -> String {
    // No map projection in a terminal; note the encodings and show the data.
    let mut out = format!(
        "(map fallback) markers by '{locations}'; size '{size}', color '{color}', hover: {}\n",
        hover.join(", ")
    );
    out.push_str(&format_table(table, TABLE_PREVIEW_ROWS));
    out
}

fn glyph(index: usize) -> char {
    SERIES_GLYPHS[index % SERIES_GLYPHS.len()]
}

fn scale(value: f64, max: f64) -> usize {
    if max <= 0.0 {
        return 0;
    }
    ((value / max) * BAR_WIDTH as f64).round() as usize
}

fn column_strings(table: &DataFrame, name: &str) -> Vec<String> {
    let Ok(column) = table.column(name) else {
        return Vec::new();
    };
    (0..table.height())
        .map(|i| column.get(i).map(|v| fmt_value(&v)).unwrap_or_default())
        .collect()
}

fn column_f64(table: &DataFrame, name: &str) -> Vec<f64> {
    table
        .column(name)
        .ok()
        .and_then(|column| column.cast(&DataType::Float64).ok())
        .map(|column| {
            column
                .f64()
                .map(|ca| ca.into_iter().map(|v| v.unwrap_or(0.0)).collect())
                .unwrap_or_default()
        })
        .unwrap_or_default()
}
