//! Column lists for the engineered attendance table.

use super::streaks::{HOME_LOSSES_COL, HOME_WINS_COL};

/// Columns kept from the joined table before feature derivation.
pub const ANALYSIS_COLUMNS: [&str; 30] = [
    "home_team",
    "away_team",
    "year",
    "week",
    "weekly_attendance",
    "winner",
    "tie",
    "day",
    "date",
    "time",
    "pts_win",
    "pts_loss",
    "yds_win",
    "turnovers_win",
    "yds_loss",
    "turnovers_loss",
    "wins",
    "loss",
    "points_for",
    "points_against",
    "points_differential",
    "margin_of_victory",
    "strength_of_schedule",
    "simple_rating",
    "offensive_ranking",
    "defensive_ranking",
    "playoffs_dummy",
    HOME_WINS_COL,
    HOME_LOSSES_COL,
    "sb_winner",
];

pub const WIN_STREAK_LAG: &str = "win_streak_lag";
pub const LOSE_STREAK_LAG: &str = "lose_streak_lag";

/// Per-game columns lagged one week within a team-season: (source, lagged).
pub const WEEKLY_LAGS: [(&str, &str); 11] = [
    ("weekly_attendance", "weekly_attendance_lag"),
    ("pts_win", "pts_win_lag"),
    ("pts_loss", "pts_loss_lag"),
    ("yds_win", "yds_win_lag"),
    ("turnovers_win", "turnovers_win_lag"),
    ("yds_loss", "yds_loss_lag"),
    ("turnovers_loss", "turnovers_loss_lag"),
    ("tie_dummy", "tie_dummy_lag"),
    ("day_dummy", "day_dummy_lag"),
    (HOME_WINS_COL, WIN_STREAK_LAG),
    (HOME_LOSSES_COL, LOSE_STREAK_LAG),
];

/// Season aggregates carried forward one year as `lag_<name>`.
pub const SEASON_STATS: [&str; 11] = [
    "wins",
    "loss",
    "points_for",
    "points_against",
    "points_differential",
    "margin_of_victory",
    "strength_of_schedule",
    "simple_rating",
    "offensive_ranking",
    "defensive_ranking",
    "playoffs_dummy",
];

pub const SEASON_LAG_PREFIX: &str = "lag_";

/// Day-of-week dummy codes.
pub const DAY_CODES: [(&str, i64); 7] = [
    ("Sun", 0),
    ("Mon", 1),
    ("Tue", 2),
    ("Wed", 3),
    ("Thu", 4),
    ("Fri", 5),
    ("Sat", 6),
];

/// Value of the `tie` field meaning no tie occurred.
pub const TIE_SENTINEL: &str = "NA";

/// Exported columns, in order. Same-game outcomes are excluded.
pub const EXPORT_COLUMNS: [&str; 29] = [
    "home_team",
    "away_team",
    "year",
    "week",
    "weekly_attendance",
    "weekly_attendance_lag",
    HOME_WINS_COL,
    WIN_STREAK_LAG,
    HOME_LOSSES_COL,
    LOSE_STREAK_LAG,
    "pts_win_lag",
    "pts_loss_lag",
    "yds_win_lag",
    "turnovers_win_lag",
    "yds_loss_lag",
    "turnovers_loss_lag",
    "tie_dummy_lag",
    "day_dummy_lag",
    "lag_wins",
    "lag_loss",
    "lag_points_for",
    "lag_points_against",
    "lag_points_differential",
    "lag_margin_of_victory",
    "lag_strength_of_schedule",
    "lag_simple_rating",
    "lag_offensive_ranking",
    "lag_defensive_ranking",
    "lag_playoffs_dummy",
];
