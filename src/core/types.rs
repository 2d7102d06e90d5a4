use std::fmt;

use serde::{Deserialize, Serialize};

/// Output surface size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// One team's side of one game.
///
/// Every matchup produces two records, one per participant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub season: u32,
    pub week: u32,
    pub is_playoff: bool,
    pub team: String,
    pub points_scored: f64,
    pub points_allowed: f64,
    pub won: bool,
    pub margin: f64,
}

impl GameRecord {
    /// Builds a record from the two final scores, deriving `won` and `margin`.
    #[must_use]
    pub fn from_scores(
        season: u32,
        week: u32,
        is_playoff: bool,
        team: impl Into<String>,
        points_scored: f64,
        points_allowed: f64,
    ) -> Self {
        Self {
            season,
            week,
            is_playoff,
            team: team.into(),
            points_scored,
            points_allowed,
            won: points_scored > points_allowed,
            margin: points_scored - points_allowed,
        }
    }
}

/// One game with both sides, as shown on a scoreboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchupRecord {
    pub season: u32,
    pub week: u32,
    pub is_playoff: bool,
    pub home_team: String,
    pub home_score: f64,
    pub away_team: String,
    pub away_score: f64,
}

impl MatchupRecord {
    /// Splits the matchup into the two per-team game records.
    #[must_use]
    pub fn to_game_records(&self) -> [GameRecord; 2] {
        [
            GameRecord::from_scores(
                self.season,
                self.week,
                self.is_playoff,
                self.home_team.clone(),
                self.home_score,
                self.away_score,
            ),
            GameRecord::from_scores(
                self.season,
                self.week,
                self.is_playoff,
                self.away_team.clone(),
                self.away_score,
                self.home_score,
            ),
        ]
    }

    /// Returns the winning side, or `None` for a tie.
    #[must_use]
    pub fn winner(&self) -> Option<&str> {
        if self.home_score > self.away_score {
            Some(&self.home_team)
        } else if self.away_score > self.home_score {
            Some(&self.away_team)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeriesPoint {
    pub x: f64,
    pub y: f64,
    pub color_key: String,
}

impl ChartSeriesPoint {
    #[must_use]
    pub fn new(x: f64, y: f64, color_key: impl Into<String>) -> Self {
        Self {
            x,
            y,
            color_key: color_key.into(),
        }
    }
}

/// Data-layer style for a chart.
///
/// Unrecognized names are preserved as `Unknown` so a chart can still draw
/// its axes and gridlines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ChartKind {
    Scatter,
    Line,
    Bar,
    Unknown(String),
}

impl ChartKind {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Scatter => "scatter",
            Self::Line => "line",
            Self::Bar => "bar",
            Self::Unknown(name) => name,
        }
    }

    /// Bars need a visible baseline, so their y-range always includes zero.
    #[must_use]
    pub fn includes_zero(&self) -> bool {
        matches!(self, Self::Bar)
    }
}

impl From<String> for ChartKind {
    fn from(value: String) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "scatter" => Self::Scatter,
            "line" => Self::Line,
            "bar" => Self::Bar,
            _ => Self::Unknown(value),
        }
    }
}

impl From<&str> for ChartKind {
    fn from(value: &str) -> Self {
        Self::from(value.to_owned())
    }
}

impl From<ChartKind> for String {
    fn from(value: ChartKind) -> Self {
        value.as_str().to_owned()
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
