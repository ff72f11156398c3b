//! Present module - rendering seam the dashboard drives

mod console;

pub use console::ConsolePresenter;

use polars::prelude::DataFrame;

use crate::charts::ChartSpec;

/// The dashboard's only view of the outside world.
///
/// Implementations own layout, styling and interactivity; the dashboard owns
/// the data. `numeric_slider` is the one backchannel: the dashboard offers a
/// parameter with its bounds and default, the implementation returns the
/// value the user settled on, and the dashboard recomputes the affected
/// table with it.
pub trait Presenter {
    /// Show a block of markdown prose (headings, notes).
    fn text(&mut self, markdown: &str);

    /// Render a derived table.
    fn render_table(&mut self, title: &str, table: &DataFrame);

    /// Render a chart spec paired with the table holding its data.
    fn render_chart(&mut self, spec: &ChartSpec, table: &DataFrame);

    /// Offer a numeric parameter; returns the chosen value.
    fn numeric_slider(&mut self, label: &str, min: i64, max: i64, default: i64) -> i64;
}
