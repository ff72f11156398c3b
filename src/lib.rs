//! Paris 2024 Olympic Games track & field results analysis.
//!
//! The pipeline is a synchronous batch: load the results CSV into a
//! DataFrame, clean it (drop unused metadata columns and rows with missing
//! values), compute three aggregations (medal tally, athlete counts,
//! event-participation proportions), and hand derived tables plus chart
//! specifications to a [`present::Presenter`]. The binary is a thin wrapper
//! around this library so the whole pipeline is testable without spawning
//! processes.

pub mod app;
pub mod charts;
pub mod data;
pub mod export;
pub mod present;
pub mod stats;

pub use app::{Dashboard, RunOptions, RunOutput};
pub use data::{clean_results, load_results, DataSourceError, MissingColumnError};
pub use present::{ConsolePresenter, Presenter};
