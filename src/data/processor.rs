//! Data Processor Module
//! Cleans the raw results table: drops unused metadata columns, coerces the
//! finishing position to a numeric rank, and removes incomplete rows.

use polars::prelude::*;
use thiserror::Error;
use tracing::info;

/// Metadata columns the dashboard never reads; removed when present.
pub const UNUSED_COLUMNS: [&str; 6] = [
    "local_time",
    "startlist_url",
    "results_url",
    "summary_url",
    "points_url",
    "bib",
];

/// Columns every downstream aggregation depends on.
pub const REQUIRED_COLUMNS: [&str; 3] = ["country", "event", "pos"];

/// An expected column is absent from the table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Expected column '{0}' is missing")]
pub struct MissingColumnError(pub String);

#[derive(Error, Debug)]
pub enum ProcessorError {
    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),
    #[error(transparent)]
    MissingColumn(#[from] MissingColumnError),
}

/// Check that every column in `required` exists in the DataFrame.
pub fn require_columns(df: &DataFrame, required: &[&str]) -> Result<(), MissingColumnError> {
    let names: Vec<String> = df.get_column_names().iter().map(|s| s.to_string()).collect();
    for &name in required {
        if !names.iter().any(|n| n == name) {
            return Err(MissingColumnError(name.to_string()));
        }
    }
    Ok(())
}

/// Produce the cleaned results table.
///
/// Drops the unused metadata columns, casts `pos` to a nullable `Float64`
/// rank (DNF/DQ and similar marks become null), and removes every row that
/// still contains a missing value in any retained column. The output is used
/// unchanged by all aggregations.
pub fn clean_results(df: &DataFrame) -> Result<DataFrame, ProcessorError> {
    let trimmed = df.drop_many(UNUSED_COLUMNS);
    require_columns(&trimmed, &REQUIRED_COLUMNS)?;

    let cleaned = trimmed
        .lazy()
        .with_column(col("pos").cast(DataType::Float64))
        .drop_nulls(None)
        .collect()?;

    info!(
        rows_in = df.height(),
        rows_out = cleaned.height(),
        dropped = df.height() - cleaned.height(),
        "cleaned results table"
    );

    Ok(cleaned)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_df() -> DataFrame {
        DataFrame::new(vec![
            Column::new(
                "country".into(),
                vec![Some("USA"), None, Some("KEN"), Some("JAM")],
            ),
            Column::new(
                "event".into(),
                vec![Some("100m"), Some("100m"), Some("200m"), Some("100m")],
            ),
            Column::new(
                "pos".into(),
                vec![Some("1.0"), Some("2.0"), Some("DNF"), Some("3.0")],
            ),
            Column::new(
                "mark".into(),
                vec![Some("9.79"), Some("9.88"), Some("19.81"), Some("9.91")],
            ),
            Column::new("local_time".into(), vec!["10:50"; 4]),
            Column::new("startlist_url".into(), vec!["u"; 4]),
            Column::new("results_url".into(), vec!["u"; 4]),
            Column::new("summary_url".into(), vec!["u"; 4]),
            Column::new("points_url".into(), vec!["u"; 4]),
            Column::new("bib".into(), vec!["7"; 4]),
        ])
        .unwrap()
    }

    #[test]
    fn drops_metadata_columns() {
        let cleaned = clean_results(&raw_df()).unwrap();
        let names: Vec<String> = cleaned
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();

        for unused in UNUSED_COLUMNS {
            assert!(!names.contains(&unused.to_string()), "{unused} survived");
        }
        for required in REQUIRED_COLUMNS {
            assert!(names.contains(&required.to_string()), "{required} missing");
        }
        assert!(names.contains(&"mark".to_string()));
    }

    #[test]
    fn drops_rows_with_missing_values() {
        // Null country row and DNF row (null after the numeric cast) go away.
        let cleaned = clean_results(&raw_df()).unwrap();
        assert_eq!(cleaned.height(), 2);

        let pos = cleaned
            .column("pos")
            .unwrap()
            .as_materialized_series()
            .f64()
            .unwrap()
            .into_iter()
            .flatten()
            .collect::<Vec<f64>>();
        assert_eq!(pos, vec![1.0, 3.0]);
    }

    #[test]
    fn pos_becomes_numeric() {
        let cleaned = clean_results(&raw_df()).unwrap();
        assert_eq!(cleaned.column("pos").unwrap().dtype(), &DataType::Float64);
    }

    #[test]
    fn missing_required_column_is_reported() {
        let df = DataFrame::new(vec![
            Column::new("country".into(), vec!["USA"]),
            Column::new("event".into(), vec!["100m"]),
        ])
        .unwrap();

        match clean_results(&df) {
            Err(ProcessorError::MissingColumn(e)) => assert_eq!(e.0, "pos"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn absent_metadata_columns_are_tolerated() {
        let df = DataFrame::new(vec![
            Column::new("country".into(), vec!["USA", "KEN"]),
            Column::new("event".into(), vec!["100m", "100m"]),
            Column::new("pos".into(), vec!["1.0", "2.0"]),
        ])
        .unwrap();

        let cleaned = clean_results(&df).unwrap();
        assert_eq!(cleaned.height(), 2);
    }

    #[test]
    fn already_clean_input_is_unchanged_in_size() {
        let df = DataFrame::new(vec![
            Column::new("country".into(), vec!["USA", "KEN"]),
            Column::new("event".into(), vec!["100m", "200m"]),
            Column::new("pos".into(), vec![1.0_f64, 2.0]),
        ])
        .unwrap();

        let cleaned = clean_results(&df).unwrap();
        assert_eq!(cleaned.height(), df.height());
    }
}
