//! Dashboard pipeline: cleaned results in, presented sections out.
//!
//! Sections render in a fixed order: results table, medal tally with map
//! and threshold-filtered stacked bar, then the athlete and participation
//! charts. Each slider value comes back from the Presenter, gets clamped to
//! its bounds, and reruns the affected filter before the chart table is
//! handed over.

use polars::prelude::DataFrame;
use tracing::info;

use crate::charts;
use crate::present::Presenter;
use crate::stats::{self, AggregateError, AthleteCount, MedalTally, ParticipationShare};

/// Stacked-bar medal threshold slider bounds.
const MEDAL_SLIDER_MIN: i64 = 0;
const MEDAL_SLIDER_MAX: i64 = 100;

/// Lower bound of both country-count sliders.
const COUNTRY_SLIDER_MIN: i64 = 5;

/// Slider defaults, overridable from the command line.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub medal_threshold: i64,
    pub athlete_countries: i64,
    pub participation_countries: i64,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            medal_threshold: 20,
            athlete_countries: 20,
            participation_countries: 20,
        }
    }
}

/// Everything one dashboard run computed: the unfiltered aggregation rows
/// plus the slider values that parameterized the charts.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub medal_tally: Vec<MedalTally>,
    pub athlete_counts: Vec<AthleteCount>,
    pub participation: Vec<ParticipationShare>,
    pub medal_threshold: i64,
    pub athlete_countries: i64,
    pub participation_countries: i64,
}

/// Drives one synchronous dashboard run against a Presenter.
pub struct Dashboard {
    options: RunOptions,
}

impl Dashboard {
    pub fn new(options: RunOptions) -> Self {
        Self { options }
    }

    /// Render the full dashboard over the cleaned results table.
    pub fn run(
        &self,
        results: &DataFrame,
        presenter: &mut dyn Presenter,
    ) -> Result<RunOutput, AggregateError> {
        presenter.text("# Paris 2024 Olympic Games Track & Field Results");
        presenter.text("## Paris 2024 Olympic Games Track & Field Results Table");
        presenter.render_table("Cleaned Results", results);

        let tally = stats::medal_tally(results)?;
        let tally_table = stats::medal_table(&tally)?;
        presenter.text("## Paris 2024 Olympic Games Track & Field Medals");
        presenter.render_table("Medal Tally", &tally_table);
        presenter.render_chart(&charts::medals_geo_chart(), &tally_table);

        let medal_threshold = presenter
            .numeric_slider(
                "Minimum Number of Medals to Show",
                MEDAL_SLIDER_MIN,
                MEDAL_SLIDER_MAX,
                self.options.medal_threshold,
            )
            .clamp(MEDAL_SLIDER_MIN, MEDAL_SLIDER_MAX);
        let mut ranked = tally.clone();
        stats::sort_by_total(&mut ranked);
        let stacked = stats::filter_min_total(&ranked, medal_threshold);
        presenter.render_chart(&charts::medals_stacked_chart(), &stats::medal_table(&stacked)?);

        presenter.text("## Additional Interesting Data");

        let counts = stats::athlete_counts(results)?;
        let country_max = (counts.len() as i64).max(COUNTRY_SLIDER_MIN);

        let athlete_countries = presenter
            .numeric_slider(
                "Number of Countries to Display",
                COUNTRY_SLIDER_MIN,
                country_max,
                self.options.athlete_countries,
            )
            .clamp(COUNTRY_SLIDER_MIN, country_max);
        let top = stats::top_n(&counts, athlete_countries as usize);
        presenter.render_chart(&charts::athletes_bar_chart(), &stats::athlete_table(&top)?);

        let shares = stats::participation_shares(results)?;
        let participation_countries = presenter
            .numeric_slider(
                "Number of Countries to Display",
                COUNTRY_SLIDER_MIN,
                country_max,
                self.options.participation_countries,
            )
            .clamp(COUNTRY_SLIDER_MIN, country_max);
        let kept = stats::filter_top_countries(&shares, participation_countries as usize);
        presenter.render_chart(
            &charts::participation_bar_chart(),
            &stats::participation_table(&kept)?,
        );

        info!(
            countries = counts.len(),
            medal_threshold,
            athlete_countries,
            participation_countries,
            "dashboard rendered"
        );

        Ok(RunOutput {
            medal_tally: tally,
            athlete_counts: counts,
            participation: shares,
            medal_threshold,
            athlete_countries,
            participation_countries,
        })
    }
}
