//! Pipeline configuration.
//! Fixed file layout relative to the working directory; no flags, no env.

use std::path::{Path, PathBuf};

/// Input/output locations and filter bounds for one pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub standings_path: PathBuf,
    pub attendance_path: PathBuf,
    pub games_path: PathBuf,
    pub output_dir: PathBuf,
    pub output_file: String,
    /// Regular-season week bounds, inclusive.
    pub first_week: i64,
    pub last_week: i64,
    pub infer_schema_length: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            standings_path: PathBuf::from("standings.csv"),
            attendance_path: PathBuf::from("Attendance.csv"),
            games_path: PathBuf::from("games.csv"),
            output_dir: PathBuf::from("final_dataframe"),
            output_file: "attendance_with_lags.csv".to_string(),
            first_week: 1,
            last_week: 17,
            infer_schema_length: 10000,
        }
    }
}

impl PipelineConfig {
    /// Default layout rooted at `dir` instead of the working directory.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        let defaults = Self::default();
        Self {
            standings_path: dir.join(defaults.standings_path),
            attendance_path: dir.join(defaults.attendance_path),
            games_path: dir.join(defaults.games_path),
            output_dir: dir.join(defaults.output_dir),
            ..defaults
        }
    }

    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(&self.output_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let config = PipelineConfig::default();
        assert_eq!(config.games_path, PathBuf::from("games.csv"));
        assert_eq!(
            config.output_path(),
            PathBuf::from("final_dataframe/attendance_with_lags.csv")
        );
        assert_eq!((config.first_week, config.last_week), (1, 17));
    }

    #[test]
    fn test_in_dir_reroots_paths() {
        let config = PipelineConfig::in_dir("/tmp/nfl");
        assert_eq!(config.attendance_path, PathBuf::from("/tmp/nfl/Attendance.csv"));
        assert_eq!(
            config.output_path(),
            PathBuf::from("/tmp/nfl/final_dataframe/attendance_with_lags.csv")
        );
    }
}
