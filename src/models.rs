use serde::{Deserialize, Serialize};
use std::fmt;

/// Target statistic predicted per player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Target {
    #[serde(rename = "PpG")]
    Points,
    #[serde(rename = "RpG")]
    Rebounds,
    #[serde(rename = "ApG")]
    Assists,
}

impl Target {
    /// All targets in display order
    pub const ALL: [Target; 3] = [Target::Points, Target::Rebounds, Target::Assists];

    /// Column / model key used in the bundle
    pub fn column(&self) -> &'static str {
        match self {
            Target::Points => "PpG",
            Target::Rebounds => "RpG",
            Target::Assists => "ApG",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

/// Points / rebounds / assists triple
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StatLine {
    #[serde(rename = "PpG")]
    pub points: f64,
    #[serde(rename = "RpG")]
    pub rebounds: f64,
    #[serde(rename = "ApG")]
    pub assists: f64,
}

impl StatLine {
    /// Build a stat line by evaluating `f` once per target
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(Target) -> f64,
    {
        Self {
            points: f(Target::Points),
            rebounds: f(Target::Rebounds),
            assists: f(Target::Assists),
        }
    }

    pub fn get(&self, target: Target) -> f64 {
        match target {
            Target::Points => self.points,
            Target::Rebounds => self.rebounds,
            Target::Assists => self.assists,
        }
    }
}

/// Defensive context shown alongside a prediction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DefenseContext {
    pub opp_drtg: f64,   // Opponent defensive rating, 1 decimal
    pub league_avg: f64, // League average defensive rating, 1 decimal
    pub factor: f64,     // Adjustment factor, 2 decimals
}

/// Opponent-adjusted prediction for one player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub name: String,
    pub opponent: String,
    pub stats: StatLine,
    pub actual_avg: StatLine,
    pub context: DefenseContext,
}

/// Recent games as parallel series, oldest first
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RecentGamesSeries {
    pub dates: Vec<String>,
    pub pts: Vec<i64>,
    pub reb: Vec<i64>,
    pub ast: Vec<i64>,
}

/// Form submission
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PredictForm {
    #[serde(default)]
    pub player_name: Option<String>,
    #[serde(default)]
    pub opponent_team: Option<String>,
}

impl PredictForm {
    /// Both selections, if present and non-empty
    pub fn selection(&self) -> Option<(&str, &str)> {
        let player = self.player_name.as_deref().filter(|s| !s.is_empty())?;
        let opponent = self.opponent_team.as_deref().filter(|s| !s.is_empty())?;
        Some((player, opponent))
    }
}

/// Data backing the prediction form page
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IndexResponse {
    pub players: Vec<String>,
    pub teams: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_player: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_opponent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prediction: Option<PredictionResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_7_data: Option<RecentGamesSeries>,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub players: usize,
    pub teams: usize,
    pub recent_games_loaded: bool,
}

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}
