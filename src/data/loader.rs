//! CSV Data Loader Module
//! Reads the results CSV into a DataFrame using Polars.

use polars::prelude::*;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum DataSourceError {
    #[error("Failed to load CSV: {0}")]
    Csv(#[from] PolarsError),
}

/// Load the results CSV into a DataFrame.
///
/// Any read or parse failure is a [`DataSourceError`]; a partial table is
/// never returned. Unparseable cells become nulls so the cleaning step can
/// drop those rows.
pub fn load_results(file_path: &str) -> Result<DataFrame, DataSourceError> {
    // Use lazy evaluation for memory efficiency, then collect
    let df = LazyCsvReader::new(file_path)
        .with_infer_schema_length(Some(10000))
        .with_ignore_errors(true)
        .finish()?
        .collect()?;

    info!(rows = df.height(), columns = df.width(), "loaded results CSV");
    debug!(columns = ?df.get_column_names(), "source schema");

    Ok(df)
}
