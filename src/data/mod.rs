//! Data module - CSV loading and cleaning

mod loader;
mod processor;

pub use loader::{load_results, DataSourceError};
pub use processor::{
    clean_results, require_columns, MissingColumnError, ProcessorError, REQUIRED_COLUMNS,
    UNUSED_COLUMNS,
};
