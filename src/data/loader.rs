//! CSV Data Loader Module
//! Reads the standings, attendance and games sources using Polars.

use super::schema::{self, ColumnSpec};
use crate::config::PipelineConfig;
use polars::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to load CSV: {0}")]
    CsvError(#[from] PolarsError),
    #[error("Input file not found: {0}")]
    MissingFile(PathBuf),
    #[error("{file}: required column '{column}' is missing")]
    MissingColumn { file: PathBuf, column: String },
}

/// Loads the three pipeline sources into typed DataFrames.
pub struct DataLoader {
    infer_schema_length: usize,
    first_week: i64,
    last_week: i64,
}

impl Default for DataLoader {
    fn default() -> Self {
        Self::from_config(&PipelineConfig::default())
    }
}

impl DataLoader {
    pub fn from_config(config: &PipelineConfig) -> Self {
        Self {
            infer_schema_length: config.infer_schema_length,
            first_week: config.first_week,
            last_week: config.last_week,
        }
    }

    /// Load a CSV file and coerce its declared columns.
    ///
    /// Values that fail to parse as the declared dtype become null.
    pub fn load_csv(&self, path: &Path, columns: &[ColumnSpec]) -> Result<DataFrame, LoaderError> {
        if !path.is_file() {
            return Err(LoaderError::MissingFile(path.to_path_buf()));
        }

        let df = LazyCsvReader::new(path)
            .with_has_header(true)
            .with_infer_schema_length(Some(self.infer_schema_length))
            .with_ignore_errors(true)
            .finish()?
            .collect()?;

        let present = df.get_column_names();
        for (name, _) in columns {
            if !present.iter().any(|c| c.as_str() == *name) {
                return Err(LoaderError::MissingColumn {
                    file: path.to_path_buf(),
                    column: name.to_string(),
                });
            }
        }

        let casts: Vec<Expr> = columns
            .iter()
            .map(|(name, dtype)| col(*name).cast(dtype.clone()))
            .collect();
        let df = df.lazy().with_columns(casts).collect()?;

        debug!("{}: {} rows, {} columns", path.display(), df.height(), df.width());
        Ok(df)
    }

    pub fn load_standings(&self, path: &Path) -> Result<DataFrame, LoaderError> {
        let df = self.load_csv(path, &schema::standings_schema())?;
        info!("Loaded {} standings rows", df.height());
        Ok(df)
    }

    pub fn load_attendance(&self, path: &Path) -> Result<DataFrame, LoaderError> {
        let df = self.load_csv(path, &schema::attendance_schema())?;
        info!("Loaded {} attendance rows", df.height());
        Ok(df)
    }

    /// Load game results, keeping regular-season weeks only.
    ///
    /// Non-numeric weeks (playoff rounds) are null after the cast and are dropped.
    pub fn load_games(&self, path: &Path) -> Result<DataFrame, LoaderError> {
        let raw = self.load_csv(path, &schema::games_schema())?;
        let total = raw.height();

        let df = raw
            .lazy()
            .filter(
                col("week")
                    .gt_eq(lit(self.first_week))
                    .and(col("week").lt_eq(lit(self.last_week))),
            )
            .collect()?;

        info!(
            "Loaded {} games, kept {} in weeks {}-{}",
            total,
            df.height(),
            self.first_week,
            self.last_week
        );
        Ok(df)
    }
}
