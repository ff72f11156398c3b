//! Athlete count aggregation.
//! Counts recorded results per country.

use std::collections::BTreeMap;

use polars::prelude::*;
use serde::Serialize;

use super::AggregateError;
use crate::data::require_columns;

/// Number of recorded results for one country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AthleteCount {
    pub country: String,
    pub athletes: u32,
}

/// Count result rows per country over the cleaned table.
///
/// Rows come back ordered by count descending; equal counts order by
/// country name ascending so repeated runs agree.
pub fn athlete_counts(df: &DataFrame) -> Result<Vec<AthleteCount>, AggregateError> {
    require_columns(df, &["country"])?;

    let countries = df.column("country")?.as_materialized_series().str()?;

    let mut groups: BTreeMap<String, u32> = BTreeMap::new();
    for country in countries.into_iter().flatten() {
        *groups.entry(country.to_string()).or_insert(0) += 1;
    }

    let mut rows: Vec<AthleteCount> = groups
        .into_iter()
        .map(|(country, athletes)| AthleteCount { country, athletes })
        .collect();
    rows.sort_by(|a, b| {
        b.athletes
            .cmp(&a.athletes)
            .then_with(|| a.country.cmp(&b.country))
    });

    Ok(rows)
}

/// First `n` countries of the ranked counts.
pub fn top_n(rows: &[AthleteCount], n: usize) -> Vec<AthleteCount> {
    rows.iter().take(n).cloned().collect()
}

/// Materialize count rows as a DataFrame for presentation.
pub fn athlete_table(rows: &[AthleteCount]) -> Result<DataFrame, AggregateError> {
    let df = DataFrame::new(vec![
        Column::new(
            "country".into(),
            rows.iter().map(|r| r.country.clone()).collect::<Vec<_>>(),
        ),
        Column::new(
            "athletes".into(),
            rows.iter().map(|r| r.athletes).collect::<Vec<u32>>(),
        ),
    ])?;
    Ok(df)
}
