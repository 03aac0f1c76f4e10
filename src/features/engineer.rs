//! Feature Engineering Module
//! Dummy coding plus week- and season-lagged predictors for attendance modeling.

use super::columns::{
    ANALYSIS_COLUMNS, DAY_CODES, LOSE_STREAK_LAG, SEASON_LAG_PREFIX, SEASON_STATS, TIE_SENTINEL,
    WEEKLY_LAGS, WIN_STREAK_LAG,
};
use polars::prelude::*;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum FeatureError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
}

/// Builds the modeling table from the joined attendance data.
pub struct FeatureEngineer;

impl FeatureEngineer {
    /// Run every feature step in order.
    ///
    /// Output is one row per home game, ordered by (home_team, year, week).
    pub fn engineer(joined: &DataFrame) -> Result<DataFrame, FeatureError> {
        let weekly = Self::weekly_features(joined)?;
        info!(
            "Kept {} of {} joined rows with a home game",
            weekly.height(),
            joined.height()
        );

        let season_lags = Self::season_lag_table(&weekly)?;
        let df = Self::attach_season_lags(&weekly, &season_lags)?;

        debug!("Engineered schema: {:?}", df.schema());
        Ok(df)
    }

    /// Projection, dummies and one-week lags within each team-season.
    pub fn weekly_features(joined: &DataFrame) -> Result<DataFrame, FeatureError> {
        let projection: Vec<Expr> = ANALYSIS_COLUMNS.iter().map(|c| col(*c)).collect();
        let partition = [col("home_team"), col("year")];

        let lags: Vec<Expr> = WEEKLY_LAGS
            .iter()
            .map(|(source, lagged)| {
                col(*source)
                    .shift(lit(1))
                    .over(partition.clone())
                    .alias(*lagged)
            })
            .collect();

        let df = joined
            .clone()
            .lazy()
            .select(projection)
            .filter(col("home_team").is_not_null())
            .with_columns([Self::tie_dummy(), Self::day_dummy(), Self::home_win()])
            .sort(
                ["home_team", "year", "week"],
                SortMultipleOptions::default().with_maintain_order(true),
            )
            .with_columns(lags)
            // No earlier game this season means no streak to carry.
            .with_columns([
                col(WIN_STREAK_LAG).fill_null(lit(0i64)),
                col(LOSE_STREAK_LAG).fill_null(lit(0i64)),
            ])
            .collect()?;

        Ok(df)
    }

    /// 1 when the game ended in a tie, else 0. Null and `"NA"` both mean no tie.
    fn tie_dummy() -> Expr {
        when(
            col("tie")
                .is_not_null()
                .and(col("tie").neq(lit(TIE_SENTINEL))),
        )
        .then(lit(1i64))
        .otherwise(lit(0i64))
        .cast(DataType::Int64)
        .alias("tie_dummy")
    }

    /// Day of week as 0 (Sun) through 6 (Sat); null for anything else.
    fn day_dummy() -> Expr {
        DAY_CODES
            .iter()
            .rev()
            .fold(lit(NULL).cast(DataType::Int64), |otherwise, (day, code)| {
                when(col("day").eq(lit(*day)))
                    .then(lit(*code))
                    .otherwise(otherwise)
            })
            .alias("day_dummy")
    }

    fn home_win() -> Expr {
        when(col("winner").eq(col("home_team")))
            .then(lit(1i64))
            .when(col("winner").eq(col("away_team")))
            .then(lit(0i64))
            .otherwise(lit(NULL).cast(DataType::Int64))
            .alias("home_win")
    }

    /// Distinct season aggregates per team, keyed on the following year and
    /// renamed to `lag_<stat>`.
    pub fn season_lag_table(df: &DataFrame) -> Result<DataFrame, FeatureError> {
        let mut distinct: Vec<Expr> = vec![col("home_team"), col("year")];
        distinct.extend(SEASON_STATS.iter().map(|s| col(*s)));

        let mut shifted: Vec<Expr> = vec![col("home_team"), (col("year") + lit(1i64)).alias("year")];
        shifted.extend(
            SEASON_STATS
                .iter()
                .map(|s| col(*s).alias(format!("{SEASON_LAG_PREFIX}{s}"))),
        );

        let table = df
            .clone()
            .lazy()
            .select(distinct)
            .unique_stable(None, UniqueKeepStrategy::First)
            .select(shifted)
            .collect()?;

        debug!("Season lag table: {} team-seasons", table.height());
        Ok(table)
    }

    /// Left-join previous-season aggregates on (home_team, year).
    pub fn attach_season_lags(
        df: &DataFrame,
        season_lags: &DataFrame,
    ) -> Result<DataFrame, FeatureError> {
        let joined = df
            .clone()
            .lazy()
            .join(
                season_lags.clone().lazy(),
                [col("home_team"), col("year")],
                [col("home_team"), col("year")],
                JoinArgs::new(JoinType::Left),
            )
            .sort(
                ["home_team", "year", "week"],
                SortMultipleOptions::default().with_maintain_order(true),
            )
            .collect()?;
        Ok(joined)
    }
}
