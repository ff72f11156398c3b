//! Stats module - aggregations over the cleaned results table

mod athletes;
mod medals;
mod participation;

pub use athletes::{athlete_counts, athlete_table, top_n, AthleteCount};
pub use medals::{filter_min_total, medal_table, medal_tally, sort_by_total, MedalTally};
pub use participation::{
    filter_top_countries, participation_shares, participation_table, ParticipationShare,
};

use polars::prelude::PolarsError;
use thiserror::Error;

use crate::data::MissingColumnError;

#[derive(Error, Debug)]
pub enum AggregateError {
    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),
    #[error(transparent)]
    MissingColumn(#[from] MissingColumnError),
}
