//! Table Joiner Module
//! Denormalizes attendance, standings and game results into one table.

use polars::prelude::*;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum JoinError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
}

/// Left-joins the three sources keyed on team, year and week.
pub struct Joiner;

impl Joiner {
    /// Attendance ⋈ standings on (full_name, year), then ⋈ games on
    /// (team_name = home_team_name, year, week).
    ///
    /// Unmatched right-side rows yield nulls; no left rows are dropped.
    /// Output is ordered by (full_name, year, week).
    pub fn join_all(
        attendance: &DataFrame,
        standings: &DataFrame,
        games: &DataFrame,
    ) -> Result<DataFrame, JoinError> {
        let joined = attendance
            .clone()
            .lazy()
            .join(
                standings.clone().lazy(),
                [col("full_name"), col("year")],
                [col("full_name"), col("year")],
                JoinArgs::new(JoinType::Left),
            )
            .join(
                games.clone().lazy(),
                [col("team_name"), col("year"), col("week")],
                [col("home_team_name"), col("year"), col("week")],
                JoinArgs::new(JoinType::Left),
            )
            .sort(
                ["full_name", "year", "week"],
                SortMultipleOptions::default().with_maintain_order(true),
            )
            .collect()?;

        info!(
            "Joined table: {} rows, {} columns",
            joined.height(),
            joined.width()
        );
        Ok(joined)
    }
}
