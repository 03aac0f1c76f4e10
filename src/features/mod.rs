//! Features module - streaks, dummies and lagged predictors

mod columns;
mod engineer;
mod streaks;

pub use columns::EXPORT_COLUMNS;
pub use engineer::{FeatureEngineer, FeatureError};
pub use streaks::{StreakCalculator, StreakError};
