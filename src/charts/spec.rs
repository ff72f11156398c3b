//! Chart Spec Module
//! Declarative descriptions of the dashboard charts. A spec names columns of
//! the table it is paired with at render time; how marks end up on screen is
//! the Presenter's business.

use serde::Serialize;

/// Renderer-agnostic description of one dashboard chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartSpec {
    pub title: String,
    pub kind: ChartKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ChartKind {
    /// World-map scatter; marker size and color both encode a column.
    GeoScatter {
        locations: String,
        size: String,
        color: String,
        hover: Vec<String>,
    },
    /// Plain bar chart.
    Bar { x: String, y: String },
    /// One bar per x value, stacked from the listed series columns.
    StackedBar { x: String, series: Vec<SeriesLabel> },
    /// Bars grouped by x and split by a categorical color column.
    CategoryBar { x: String, y: String, color: String },
}

/// A stacked-bar series column with its display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeriesLabel {
    pub column: String,
    pub label: String,
}

impl SeriesLabel {
    fn new(column: &str, label: &str) -> Self {
        Self {
            column: column.to_string(),
            label: label.to_string(),
        }
    }
}

/// World map of medal totals; pairs with the full medal tally table.
pub fn medals_geo_chart() -> ChartSpec {
    ChartSpec {
        title: "Paris 2024 Olympic Games Track & Field Medals Map".to_string(),
        kind: ChartKind::GeoScatter {
            locations: "country".to_string(),
            size: "total".to_string(),
            color: "total".to_string(),
            hover: vec![
                "gold".to_string(),
                "silver".to_string(),
                "bronze".to_string(),
                "total".to_string(),
            ],
        },
    }
}

/// Gold/silver/bronze stack per country; pairs with the sorted, threshold-
/// filtered tally table.
pub fn medals_stacked_chart() -> ChartSpec {
    ChartSpec {
        title: "Stacked Medals by Country".to_string(),
        kind: ChartKind::StackedBar {
            x: "country".to_string(),
            series: vec![
                SeriesLabel::new("gold", "Gold Medals"),
                SeriesLabel::new("silver", "Silver Medals"),
                SeriesLabel::new("bronze", "Bronze Medals"),
            ],
        },
    }
}

/// Result counts per country; pairs with the top-N athlete count table.
pub fn athletes_bar_chart() -> ChartSpec {
    ChartSpec {
        title: "Number of Athletes per Country".to_string(),
        kind: ChartKind::Bar {
            x: "country".to_string(),
            y: "athletes".to_string(),
        },
    }
}

/// Event shares per country; pairs with the top-K participation table.
pub fn participation_bar_chart() -> ChartSpec {
    ChartSpec {
        title: "Event Distribution per Country (Ordered by amount of athletes)".to_string(),
        kind: ChartKind::CategoryBar {
            x: "country".to_string(),
            y: "proportion".to_string(),
            color: "event".to_string(),
        },
    }
}
