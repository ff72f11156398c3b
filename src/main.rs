//! trackboard CLI - Paris 2024 Olympic Games track & field results analysis.

use std::collections::BTreeSet;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use trackboard::export::write_json_report;
use trackboard::{clean_results, load_results, ConsolePresenter, Dashboard, RunOptions};

#[derive(Parser)]
#[command(name = "trackboard")]
#[command(version)]
#[command(about = "Paris 2024 Olympic Games track & field results analysis and console dashboard")]
struct Cli {
    /// Path to the results CSV file
    #[arg(short, long)]
    csv: String,

    /// Minimum total medals for a country to enter the stacked bar
    #[arg(long, default_value_t = 20)]
    medal_threshold: i64,

    /// Countries shown in the athlete count bar
    #[arg(long, default_value_t = 20)]
    athlete_countries: i64,

    /// Countries kept in the participation chart
    #[arg(long, default_value_t = 20)]
    participation_countries: i64,

    /// Write the derived tables to a JSON report
    #[arg(long)]
    export: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set subscriber");
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let raw = load_results(&cli.csv)
        .with_context(|| format!("Failed to load results from {}", cli.csv))?;
    let results = clean_results(&raw).context("Failed to clean results")?;

    let options = RunOptions {
        medal_threshold: cli.medal_threshold,
        athlete_countries: cli.athlete_countries,
        participation_countries: cli.participation_countries,
    };

    let mut presenter = ConsolePresenter::new();
    let output = Dashboard::new(options)
        .run(&results, &mut presenter)
        .context("Failed to render dashboard")?;
    print!("{}", presenter.into_report());

    if let Some(path) = &cli.export {
        write_json_report(path, &output)
            .with_context(|| format!("Failed to write report to {}", path.display()))?;
    }

    let events: BTreeSet<&str> = output
        .participation
        .iter()
        .map(|s| s.event.as_str())
        .collect();

    println!("\n=== Analysis complete ===");
    println!("Rows used:     {}", results.height());
    println!("Rows dropped:  {}", raw.height() - results.height());
    println!("Countries:     {}", output.athlete_counts.len());
    println!("Events:        {}", events.len());
    if let Some(path) = &cli.export {
        println!("Report:        {}", path.display());
    }

    Ok(())
}
