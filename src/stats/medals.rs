//! Medal tally aggregation.
//! Counts first/second/third-place finishes per country.

use std::collections::BTreeMap;

use polars::prelude::*;
use serde::Serialize;

use super::AggregateError;
use crate::data::require_columns;

/// Per-country medal counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MedalTally {
    pub country: String,
    pub gold: u32,
    pub silver: u32,
    pub bronze: u32,
    pub total: u32,
}

/// Count gold (`pos == 1`), silver (`pos == 2`) and bronze (`pos == 3`)
/// finishes per country over the cleaned table.
///
/// Every country present in the table appears, zero-medal countries
/// included. Rows come back ordered by country name; significance ordering
/// is left to the caller.
pub fn medal_tally(df: &DataFrame) -> Result<Vec<MedalTally>, AggregateError> {
    require_columns(df, &["country", "pos"])?;

    let countries = df.column("country")?.as_materialized_series().str()?;
    let positions = df.column("pos")?.as_materialized_series().f64()?;

    let mut groups: BTreeMap<String, (u32, u32, u32)> = BTreeMap::new();
    for (country, pos) in countries.into_iter().zip(positions) {
        let (Some(country), Some(pos)) = (country, pos) else {
            // Cleaned input carries no nulls.
            continue;
        };

        let entry = groups.entry(country.to_string()).or_insert((0, 0, 0));
        if pos == 1.0 {
            entry.0 += 1;
        } else if pos == 2.0 {
            entry.1 += 1;
        } else if pos == 3.0 {
            entry.2 += 1;
        }
    }

    Ok(groups
        .into_iter()
        .map(|(country, (gold, silver, bronze))| MedalTally {
            country,
            gold,
            silver,
            bronze,
            total: gold + silver + bronze,
        })
        .collect())
}

/// Sort for display: total descending, country name ascending on ties.
pub fn sort_by_total(rows: &mut [MedalTally]) {
    rows.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.country.cmp(&b.country)));
}

/// Keep countries with at least `threshold` total medals.
pub fn filter_min_total(rows: &[MedalTally], threshold: i64) -> Vec<MedalTally> {
    rows.iter()
        .filter(|r| i64::from(r.total) >= threshold)
        .cloned()
        .collect()
}

/// Materialize tally rows as a DataFrame for presentation.
pub fn medal_table(rows: &[MedalTally]) -> Result<DataFrame, AggregateError> {
    let df = DataFrame::new(vec![
        Column::new(
            "country".into(),
            rows.iter().map(|r| r.country.clone()).collect::<Vec<_>>(),
        ),
        Column::new("gold".into(), rows.iter().map(|r| r.gold).collect::<Vec<u32>>()),
        Column::new(
            "silver".into(),
            rows.iter().map(|r| r.silver).collect::<Vec<u32>>(),
        ),
        Column::new(
            "bronze".into(),
            rows.iter().map(|r| r.bronze).collect::<Vec<u32>>(),
        ),
        Column::new(
            "total".into(),
            rows.iter().map(|r| r.total).collect::<Vec<u32>>(),
        ),
    ])?;
    Ok(df)
}
