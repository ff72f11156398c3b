//! Charts module - renderer-agnostic chart specifications

mod spec;

pub use spec::{
    athletes_bar_chart, medals_geo_chart, medals_stacked_chart, participation_bar_chart,
    ChartKind, ChartSpec, SeriesLabel,
};
