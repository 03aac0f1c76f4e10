//! NFL Attendance Prep - regression-ready home-game attendance table
//!
//! Joins standings, attendance and game results, derives win/loss streaks and
//! lagged predictors, and writes `final_dataframe/attendance_with_lags.csv`.

mod config;
mod data;
mod features;
mod pipeline;

use anyhow::Context;
use config::PipelineConfig;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    let cwd = std::env::current_dir().context("Failed to read working directory")?;
    let config = PipelineConfig::in_dir(&cwd);
    info!("Preparing attendance data from {}", cwd.display());

    let summary = pipeline::run(&config).context("Attendance data preparation failed")?;

    println!("- Successfully exported data!");
    println!("- File Location: {}", summary.path.display());
    println!("- Rows exported: {}", summary.rows);
    println!("- Columns exported: {}", summary.columns);
    Ok(())
}
