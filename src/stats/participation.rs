//! Participation proportion aggregation.
//! For each (country, event) pair: the share of that country's recorded
//! results attributable to the event.

use std::collections::{BTreeMap, HashSet};

use polars::prelude::*;
use serde::Serialize;

use super::AggregateError;
use crate::data::require_columns;

/// Share of one country's results coming from one event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParticipationShare {
    pub country: String,
    pub event: String,
    /// event row count / country row count, full double precision.
    pub proportion: f64,
    /// Total rows recorded for the country; used for ranking and top-K.
    pub country_total: u32,
}

/// Compute per-(country, event) participation proportions.
///
/// Rows come back ordered by country total descending (country name
/// ascending on equal totals), then event name ascending within a country.
/// Proportions for a country always sum to 1 since they share the same
/// denominator.
pub fn participation_shares(df: &DataFrame) -> Result<Vec<ParticipationShare>, AggregateError> {
    require_columns(df, &["country", "event"])?;

    let countries = df.column("country")?.as_materialized_series().str()?;
    let events = df.column("event")?.as_materialized_series().str()?;

    let mut event_counts: BTreeMap<(String, String), u32> = BTreeMap::new();
    let mut totals: BTreeMap<String, u32> = BTreeMap::new();

    for (country, event) in countries.into_iter().zip(events) {
        let (Some(country), Some(event)) = (country, event) else {
            // Cleaned input carries no nulls.
            continue;
        };

        *event_counts
            .entry((country.to_string(), event.to_string()))
            .or_insert(0) += 1;
        *totals.entry(country.to_string()).or_insert(0) += 1;
    }

    let mut rows: Vec<ParticipationShare> = event_counts
        .into_iter()
        .map(|((country, event), count)| {
            // Grouping guarantees the country key exists with a nonzero total.
            let country_total = totals[&country];
            ParticipationShare {
                proportion: f64::from(count) / f64::from(country_total),
                country,
                event,
                country_total,
            }
        })
        .collect();

    rows.sort_by(|a, b| {
        b.country_total
            .cmp(&a.country_total)
            .then_with(|| a.country.cmp(&b.country))
            .then_with(|| a.event.cmp(&b.event))
    });

    Ok(rows)
}

/// Keep only the rows of the `k` countries with the highest total
/// participation count (ties broken by country name ascending). Row order is
/// preserved.
pub fn filter_top_countries(rows: &[ParticipationShare], k: usize) -> Vec<ParticipationShare> {
    let mut ranking: Vec<(&str, u32)> = Vec::new();
    for row in rows {
        if !ranking.iter().any(|(c, _)| *c == row.country) {
            ranking.push((row.country.as_str(), row.country_total));
        }
    }
    ranking.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    let keep: HashSet<&str> = ranking.into_iter().take(k).map(|(c, _)| c).collect();
    rows.iter()
        .filter(|r| keep.contains(r.country.as_str()))
        .cloned()
        .collect()
}

/// Materialize share rows as a DataFrame for presentation.
pub fn participation_table(rows: &[ParticipationShare]) -> Result<DataFrame, AggregateError> {
    let df = DataFrame::new(vec![
        Column::new(
            "country".into(),
            rows.iter().map(|r| r.country.clone()).collect::<Vec<_>>(),
        ),
        Column::new(
            "event".into(),
            rows.iter().map(|r| r.event.clone()).collect::<Vec<_>>(),
        ),
        Column::new(
            "proportion".into(),
            rows.iter().map(|r| r.proportion).collect::<Vec<f64>>(),
        ),
    ])?;
    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn results(rows: &[(&str, &str)]) -> DataFrame {
        DataFrame::new(vec![
            Column::new(
                "country".into(),
                rows.iter().map(|r| r.0).collect::<Vec<_>>(),
            ),
            Column::new("event".into(), rows.iter().map(|r| r.1).collect::<Vec<_>>()),
        ])
        .unwrap()
    }

    fn podium_scenario() -> DataFrame {
        results(&[
            ("USA", "100m"),
            ("USA", "100m"),
            ("KEN", "100m"),
            ("KEN", "200m"),
        ])
    }

    #[test]
    fn shares_divide_event_count_by_country_total() {
        let shares = participation_shares(&podium_scenario()).unwrap();

        let usa_100m = shares
            .iter()
            .find(|s| s.country == "USA" && s.event == "100m")
            .unwrap();
        assert!((usa_100m.proportion - 1.0).abs() < 1e-12);

        let ken_100m = shares
            .iter()
            .find(|s| s.country == "KEN" && s.event == "100m")
            .unwrap();
        assert!((ken_100m.proportion - 0.5).abs() < 1e-12);

        let ken_200m = shares
            .iter()
            .find(|s| s.country == "KEN" && s.event == "200m")
            .unwrap();
        assert!((ken_200m.proportion - 0.5).abs() < 1e-12);
    }

    #[test]
    fn country_shares_sum_to_one() {
        // NOR spreads over three events so the thirds exercise rounding.
        let df = results(&[
            ("USA", "100m"),
            ("USA", "200m"),
            ("NOR", "800m"),
            ("NOR", "1500m"),
            ("NOR", "5000m"),
        ]);

        let shares = participation_shares(&df).unwrap();
        let mut sums: BTreeMap<&str, f64> = BTreeMap::new();
        for share in &shares {
            *sums.entry(share.country.as_str()).or_insert(0.0) += share.proportion;
        }

        for (country, sum) in sums {
            assert!((sum - 1.0).abs() < 1e-9, "{country} shares sum to {sum}");
        }
    }

    #[test]
    fn rows_order_by_total_then_country_then_event() {
        let df = results(&[
            ("USA", "100m"),
            ("KEN", "200m"),
            ("KEN", "100m"),
            ("KEN", "800m"),
            ("JAM", "100m"),
            ("JAM", "200m"),
        ]);

        let shares = participation_shares(&df).unwrap();
        let keys: Vec<(&str, &str)> = shares
            .iter()
            .map(|s| (s.country.as_str(), s.event.as_str()))
            .collect();

        assert_eq!(
            keys,
            vec![
                ("KEN", "100m"),
                ("KEN", "200m"),
                ("KEN", "800m"),
                ("JAM", "100m"),
                ("JAM", "200m"),
                ("USA", "100m"),
            ]
        );
    }

    #[test]
    fn top_k_breaks_total_ties_by_country_name() {
        let shares = participation_shares(&podium_scenario()).unwrap();

        // USA and KEN both total two rows; K=1 keeps KEN.
        let kept = filter_top_countries(&shares, 1);
        assert!(kept.iter().all(|s| s.country == "KEN"));
        assert_eq!(kept.len(), 2);
    }

    #[test]
    fn top_k_beyond_country_count_keeps_everything() {
        let shares = participation_shares(&podium_scenario()).unwrap();
        assert_eq!(filter_top_countries(&shares, 10).len(), shares.len());
    }

    #[test]
    fn empty_table_yields_no_shares() {
        let df = DataFrame::new(vec![
            Column::new("country".into(), Vec::<String>::new()),
            Column::new("event".into(), Vec::<String>::new()),
        ])
        .unwrap();

        assert!(participation_shares(&df).unwrap().is_empty());
    }

    #[test]
    fn recomputation_matches() {
        let df = podium_scenario();
        assert_eq!(
            participation_shares(&df).unwrap(),
            participation_shares(&df).unwrap()
        );
    }

    #[test]
    fn missing_event_column_is_reported() {
        let df = DataFrame::new(vec![Column::new("country".into(), vec!["USA"])]).unwrap();

        match participation_shares(&df) {
            Err(AggregateError::MissingColumn(e)) => assert_eq!(e.0, "event"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn table_carries_share_columns() {
        let shares = participation_shares(&podium_scenario()).unwrap();
        let table = participation_table(&shares).unwrap();

        let names: Vec<String> = table
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(names, vec!["country", "event", "proportion"]);
        assert_eq!(table.height(), 3);
    }
}
