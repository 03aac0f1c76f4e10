//! Source column schemas.
//! Each declared column is required and cast (non-strictly) to its dtype on load.

use polars::prelude::DataType;

/// A required source column and the dtype it is coerced to.
pub type ColumnSpec = (&'static str, DataType);

pub fn standings_schema() -> Vec<ColumnSpec> {
    vec![
        ("full_name", DataType::String),
        ("team_name", DataType::String),
        ("year", DataType::Int64),
        ("wins", DataType::Int64),
        ("loss", DataType::Int64),
        ("points_for", DataType::Int64),
        ("points_against", DataType::Int64),
        ("points_differential", DataType::Int64),
        ("margin_of_victory", DataType::Float64),
        ("strength_of_schedule", DataType::Float64),
        ("simple_rating", DataType::Float64),
        ("offensive_ranking", DataType::Float64),
        ("defensive_ranking", DataType::Float64),
        ("playoffs_dummy", DataType::Int64),
        ("sb_winner", DataType::String),
    ]
}

pub fn attendance_schema() -> Vec<ColumnSpec> {
    vec![
        ("full_name", DataType::String),
        ("team_name", DataType::String),
        ("year", DataType::Int64),
        ("week", DataType::Int64),
        ("weekly_attendance", DataType::Int64),
    ]
}

pub fn games_schema() -> Vec<ColumnSpec> {
    vec![
        ("year", DataType::Int64),
        ("week", DataType::Int64),
        ("home_team", DataType::String),
        ("away_team", DataType::String),
        ("home_team_name", DataType::String),
        ("winner", DataType::String),
        ("tie", DataType::String),
        ("day", DataType::String),
        ("date", DataType::String),
        ("time", DataType::String),
        ("pts_win", DataType::Int64),
        ("pts_loss", DataType::Int64),
        ("yds_win", DataType::Int64),
        ("turnovers_win", DataType::Int64),
        ("yds_loss", DataType::Int64),
        ("turnovers_loss", DataType::Int64),
    ]
}
