//! End-to-end run: load -> streaks -> join -> features -> export.

use crate::config::PipelineConfig;
use crate::data::{
    DataLoader, ExportError, ExportSummary, Exporter, JoinError, Joiner, LoaderError,
};
use crate::features::{FeatureEngineer, FeatureError, StreakCalculator, StreakError};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Load(#[from] LoaderError),
    #[error(transparent)]
    Streak(#[from] StreakError),
    #[error(transparent)]
    Join(#[from] JoinError),
    #[error(transparent)]
    Feature(#[from] FeatureError),
    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Run the whole preparation pass once. Any failure aborts before the
/// output file is created.
pub fn run(config: &PipelineConfig) -> Result<ExportSummary, PipelineError> {
    let loader = DataLoader::from_config(config);
    let standings = loader.load_standings(&config.standings_path)?;
    let attendance = loader.load_attendance(&config.attendance_path)?;
    let games = loader.load_games(&config.games_path)?;

    let games = StreakCalculator::add_streak_columns(&games)?;
    let joined = Joiner::join_all(&attendance, &standings, &games)?;
    let features = FeatureEngineer::engineer(&joined)?;

    info!("Exporting {} engineered rows", features.height());
    Ok(Exporter::export(&features, &config.output_path())?)
}
