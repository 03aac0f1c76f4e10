//! Win/loss streak calculation.
//! A single chronological pass over all regular-season games carrying per-team state.

use polars::prelude::*;
use std::collections::HashMap;
use thiserror::Error;
use tracing::{debug, info};

pub const HOME_WINS_COL: &str = "home_team_consecutive_wins";
pub const HOME_LOSSES_COL: &str = "home_team_consecutive_losses";

/// Preview rows logged at debug level after the pass.
const PREVIEW_ROWS: usize = 5;

#[derive(Error, Debug)]
pub enum StreakError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
}

/// Running streak counters for one team. At most one is nonzero.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TeamStreak {
    pub wins: i64,
    pub losses: i64,
}

impl TeamStreak {
    fn record_win(&mut self) {
        self.wins += 1;
        self.losses = 0;
    }

    fn record_loss(&mut self) {
        self.wins = 0;
        self.losses += 1;
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Outcome of a single game from the home team's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    HomeWin,
    AwayWin,
    Tie,
}

impl GameOutcome {
    /// A winner matching neither team (including a null winner) counts as a tie.
    pub fn from_winner(home: Option<&str>, away: Option<&str>, winner: Option<&str>) -> Self {
        match winner {
            Some(w) if Some(w) == home => GameOutcome::HomeWin,
            Some(w) if Some(w) == away => GameOutcome::AwayWin,
            _ => GameOutcome::Tie,
        }
    }
}

/// Tracks streaks for every team seen so far; unseen teams start at zero.
#[derive(Debug, Default)]
pub struct StreakTracker {
    teams: HashMap<String, TeamStreak>,
}

impl StreakTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, team: &str) -> TeamStreak {
        self.teams.get(team).copied().unwrap_or_default()
    }

    /// Number of teams with recorded state.
    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    fn update(&mut self, team: Option<&str>, f: fn(&mut TeamStreak)) {
        if let Some(team) = team {
            f(self.teams.entry(team.to_string()).or_default());
        }
    }

    /// Apply one game and return the home team's streak after it.
    ///
    /// A missing team name leaves no state behind; its streak reads as zero.
    /// The returned streak is all zeros after a tie.
    pub fn apply(
        &mut self,
        home: Option<&str>,
        away: Option<&str>,
        outcome: GameOutcome,
    ) -> TeamStreak {
        match outcome {
            GameOutcome::HomeWin => {
                self.update(home, TeamStreak::record_win);
                self.update(away, TeamStreak::record_loss);
            }
            GameOutcome::AwayWin => {
                self.update(away, TeamStreak::record_win);
                self.update(home, TeamStreak::record_loss);
            }
            GameOutcome::Tie => {
                self.update(home, TeamStreak::reset);
                self.update(away, TeamStreak::reset);
            }
        }
        home.map(|team| self.get(team)).unwrap_or_default()
    }
}

/// Appends home-team streak columns to the game table.
pub struct StreakCalculator;

impl StreakCalculator {
    /// Sort games chronologically and append the home team's win and loss
    /// streaks as they stand after each game.
    ///
    /// Output is ordered by (year, week, date, time).
    pub fn add_streak_columns(games: &DataFrame) -> Result<DataFrame, StreakError> {
        let mut sorted = games
            .clone()
            .lazy()
            .sort(
                ["year", "week", "date", "time"],
                SortMultipleOptions::default().with_maintain_order(true),
            )
            .collect()?;

        let home_col = sorted.column("home_team")?.str()?.clone();
        let away_col = sorted.column("away_team")?.str()?.clone();
        let winner_col = sorted.column("winner")?.str()?.clone();

        let mut tracker = StreakTracker::new();
        let mut win_streaks: Vec<i64> = Vec::with_capacity(sorted.height());
        let mut loss_streaks: Vec<i64> = Vec::with_capacity(sorted.height());

        for i in 0..sorted.height() {
            let home = home_col.get(i);
            let away = away_col.get(i);
            let outcome = GameOutcome::from_winner(home, away, winner_col.get(i));

            let streak = tracker.apply(home, away, outcome);
            let (wins, losses) = match outcome {
                GameOutcome::HomeWin => (streak.wins, 0),
                GameOutcome::AwayWin => (0, streak.losses),
                GameOutcome::Tie => (0, 0),
            };
            win_streaks.push(wins);
            loss_streaks.push(losses);
        }

        sorted.with_column(Column::new(HOME_WINS_COL.into(), win_streaks))?;
        sorted.with_column(Column::new(HOME_LOSSES_COL.into(), loss_streaks))?;

        info!(
            "Computed streaks over {} games for {} teams",
            sorted.height(),
            tracker.len()
        );
        debug!(
            "Streak preview:\n{}",
            sorted
                .select(["home_team", "year", "week", "away_team", "winner", HOME_WINS_COL, HOME_LOSSES_COL])?
                .head(Some(PREVIEW_ROWS))
        );

        Ok(sorted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn games(rows: &[(i64, i64, &str, &str, Option<&str>)]) -> DataFrame {
        let n = rows.len();
        df!(
            "year" => rows.iter().map(|r| r.0).collect::<Vec<_>>(),
            "week" => rows.iter().map(|r| r.1).collect::<Vec<_>>(),
            "date" => vec!["d"; n],
            "time" => vec!["13:00:00"; n],
            "home_team" => rows.iter().map(|r| r.2).collect::<Vec<_>>(),
            "away_team" => rows.iter().map(|r| r.3).collect::<Vec<_>>(),
            "winner" => rows.iter().map(|r| r.4).collect::<Vec<_>>()
        )
        .unwrap()
    }

    fn streak_columns(df: &DataFrame) -> (Vec<i64>, Vec<i64>) {
        let wins = df.column(HOME_WINS_COL).unwrap().i64().unwrap().into_no_null_iter().collect();
        let losses = df.column(HOME_LOSSES_COL).unwrap().i64().unwrap().into_no_null_iter().collect();
        (wins, losses)
    }

    #[test]
    fn test_consecutive_home_wins() {
        let df = games(&[
            (2020, 1, "A", "B", Some("A")),
            (2020, 2, "A", "C", Some("A")),
            (2020, 3, "A", "D", Some("A")),
        ]);
        let out = StreakCalculator::add_streak_columns(&df).unwrap();
        let (wins, losses) = streak_columns(&out);
        assert_eq!(wins, vec![1, 2, 3]);
        assert_eq!(losses, vec![0, 0, 0]);
    }

    #[test]
    fn test_away_games_count_toward_streak() {
        // A loses at B, then loses at home to C.
        let df = games(&[
            (2020, 1, "B", "A", Some("B")),
            (2020, 2, "A", "C", Some("C")),
        ]);
        let out = StreakCalculator::add_streak_columns(&df).unwrap();
        let (wins, losses) = streak_columns(&out);
        assert_eq!(wins, vec![1, 0]);
        assert_eq!(losses, vec![0, 2]);
    }

    #[test]
    fn test_tie_resets_both_teams() {
        let df = games(&[
            (2020, 1, "A", "B", Some("A")),
            (2020, 2, "A", "B", Some("A")),
            (2020, 3, "A", "B", None),
            (2020, 4, "B", "A", Some("B")),
            (2020, 5, "A", "C", Some("A")),
        ]);
        let out = StreakCalculator::add_streak_columns(&df).unwrap();
        let (wins, losses) = streak_columns(&out);
        assert_eq!(wins, vec![1, 2, 0, 1, 1]);
        assert_eq!(losses, vec![0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_games_sorted_before_scan() {
        let df = games(&[
            (2020, 2, "A", "B", Some("A")),
            (2019, 17, "A", "B", Some("A")),
            (2020, 1, "A", "B", Some("A")),
        ]);
        let out = StreakCalculator::add_streak_columns(&df).unwrap();
        let weeks: Vec<i64> = out.column("week").unwrap().i64().unwrap().into_no_null_iter().collect();
        assert_eq!(weeks, vec![17, 1, 2]);
        let (wins, _) = streak_columns(&out);
        assert_eq!(wins, vec![1, 2, 3]);
    }

    #[test]
    fn test_tracker_never_holds_both_streaks() {
        let mut tracker = StreakTracker::new();
        assert_eq!(tracker.get("A"), TeamStreak::default());

        let schedule = [
            ("A", "B", GameOutcome::HomeWin),
            ("B", "A", GameOutcome::HomeWin),
            ("A", "C", GameOutcome::AwayWin),
            ("C", "B", GameOutcome::Tie),
            ("B", "A", GameOutcome::AwayWin),
        ];
        for (home, away, outcome) in schedule {
            tracker.apply(Some(home), Some(away), outcome);
            for team in ["A", "B", "C"] {
                let s = tracker.get(team);
                assert!(s.wins == 0 || s.losses == 0, "{team}: {s:?}");
            }
        }
        assert_eq!(tracker.get("A"), TeamStreak { wins: 1, losses: 0 });
        assert_eq!(tracker.get("B"), TeamStreak { wins: 0, losses: 1 });
    }

    #[test]
    fn test_missing_team_leaves_no_state() {
        let mut tracker = StreakTracker::new();
        let home = tracker.apply(None, Some("B"), GameOutcome::AwayWin);
        assert_eq!(home, TeamStreak::default());
        assert_eq!(tracker.len(), 1);
        assert_eq!(tracker.get("B"), TeamStreak { wins: 1, losses: 0 });
        assert_eq!(tracker.get(""), TeamStreak::default());

        // Two games with unknown opponents must not share a streak.
        tracker.apply(Some("A"), None, GameOutcome::HomeWin);
        tracker.apply(Some("C"), None, GameOutcome::HomeWin);
        assert_eq!(tracker.len(), 3);
        assert_eq!(tracker.get("A"), TeamStreak { wins: 1, losses: 0 });
    }

    #[test]
    fn test_null_teams_in_frame() {
        let df = df!(
            "year" => [2020i64, 2020],
            "week" => [1i64, 2],
            "date" => ["d", "d"],
            "time" => ["13:00:00", "13:00:00"],
            "home_team" => [Some("A"), Some("A")],
            "away_team" => [None, Some("C")],
            "winner" => [Some("A"), Some("A")]
        )
        .unwrap();
        let out = StreakCalculator::add_streak_columns(&df).unwrap();
        let (wins, losses) = streak_columns(&out);
        assert_eq!(wins, vec![1, 2]);
        assert_eq!(losses, vec![0, 0]);
    }

    #[test]
    fn test_outcome_from_winner() {
        assert_eq!(GameOutcome::from_winner(Some("A"), Some("B"), Some("A")), GameOutcome::HomeWin);
        assert_eq!(GameOutcome::from_winner(Some("A"), Some("B"), Some("B")), GameOutcome::AwayWin);
        assert_eq!(GameOutcome::from_winner(Some("A"), Some("B"), None), GameOutcome::Tie);
        assert_eq!(GameOutcome::from_winner(None, Some("B"), None), GameOutcome::Tie);
    }
}
