//! CSV Exporter Module
//! Writes the final modeling table.

use crate::features::EXPORT_COLUMNS;
use polars::prelude::*;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// What was written by a successful export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub path: PathBuf,
    pub rows: usize,
    pub columns: usize,
}

pub struct Exporter;

impl Exporter {
    /// Project to the export schema and write it as CSV with a header row.
    ///
    /// Parent directories of `path` are created as needed.
    pub fn export(df: &DataFrame, path: &Path) -> Result<ExportSummary, ExportError> {
        let mut out = df.select(EXPORT_COLUMNS)?;

        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|source| ExportError::Io {
                path: dir.to_path_buf(),
                source,
            })?;
        }

        let mut file = File::create(path).map_err(|source| ExportError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        CsvWriter::new(&mut file)
            .include_header(true)
            .finish(&mut out)?;

        let summary = ExportSummary {
            path: path.to_path_buf(),
            rows: out.height(),
            columns: out.width(),
        };
        info!(
            "Wrote {} rows x {} columns to {}",
            summary.rows,
            summary.columns,
            summary.path.display()
        );
        Ok(summary)
    }
}
