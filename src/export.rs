//! JSON Report Module
//! Writes the derived tables of a dashboard run to a JSON file so the
//! results can be consumed outside the console report.

use std::fs::File;
use std::path::Path;

use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::app::RunOutput;
use crate::stats::{AthleteCount, MedalTally, ParticipationShare};

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to create report file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to encode report: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Serialize)]
struct JsonReport<'a> {
    medal_tally: &'a [MedalTally],
    athlete_counts: &'a [AthleteCount],
    participation: &'a [ParticipationShare],
}

/// Write the three derived tables as pretty-printed JSON.
pub fn write_json_report(path: &Path, output: &RunOutput) -> Result<(), ExportError> {
    let report = JsonReport {
        medal_tally: &output.medal_tally,
        athlete_counts: &output.athlete_counts,
        participation: &output.participation,
    };

    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, &report)?;

    info!(path = %path.display(), "wrote JSON report");
    Ok(())
}
