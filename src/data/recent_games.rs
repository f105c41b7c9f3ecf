//! Recent Games Index
//!
//! Per-player box scores for the last few games, used only for display.
//! Loading is best-effort: any failure leaves the index empty.

use chrono::NaiveDate;
use polars::prelude::*;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::models::RecentGamesSeries;

/// Date formats seen in exported game logs
const DATE_FORMATS: [&str; 3] = ["%b %d, %Y", "%Y-%m-%d", "%m/%d/%Y"];

/// Single game box score
#[derive(Debug, Clone, PartialEq)]
pub struct RecentGameRecord {
    pub date: String,
    pub points: i64,
    pub rebounds: i64,
    pub assists: i64,
}

/// Recent games indexed by player name, oldest first
#[derive(Debug, Default)]
pub struct RecentGames {
    games: HashMap<String, Vec<RecentGameRecord>>,
}

impl RecentGames {
    /// Load and index recent games from CSV
    ///
    /// Columns: PlayerName, GAME_DATE, PTS, REB, AST
    pub fn load<P: AsRef<Path>>(csv_path: P) -> Result<Self, PolarsError> {
        let df = CsvReadOptions::default()
            .try_into_reader_with_file_path(Some(csv_path.as_ref().to_path_buf()))?
            .finish()?;

        Self::from_dataframe(&df)
    }

    /// Load recent games, falling back to an empty index on any error
    pub fn load_or_empty<P: AsRef<Path>>(csv_path: P) -> Self {
        let csv_path = csv_path.as_ref();
        match Self::load(csv_path) {
            Ok(index) => {
                info!(
                    "Loaded recent games for {} players from {:?}",
                    index.len(),
                    csv_path
                );
                index
            }
            Err(e) => {
                warn!(
                    "Failed to load recent games from {:?}: {}. Continuing without them.",
                    csv_path, e
                );
                Self::default()
            }
        }
    }

    pub fn from_dataframe(df: &DataFrame) -> Result<Self, PolarsError> {
        let names = df.column("PlayerName")?.cast(&DataType::String)?;
        let dates = df.column("GAME_DATE")?.cast(&DataType::String)?;
        let pts = df.column("PTS")?.cast(&DataType::Int64)?;
        let reb = df.column("REB")?.cast(&DataType::Int64)?;
        let ast = df.column("AST")?.cast(&DataType::Int64)?;

        let name_col = names.str()?;
        let date_col = dates.str()?;
        let pts_col = pts.i64()?;
        let reb_col = reb.i64()?;
        let ast_col = ast.i64()?;

        let mut games: HashMap<String, Vec<RecentGameRecord>> = HashMap::new();
        let mut skipped = 0usize;

        for i in 0..df.height() {
            // Skip incomplete rows rather than charting made-up zeros
            if let (Some(name), Some(date), Some(points), Some(rebounds), Some(assists)) = (
                name_col.get(i),
                date_col.get(i),
                pts_col.get(i),
                reb_col.get(i),
                ast_col.get(i),
            ) {
                games
                    .entry(name.to_string())
                    .or_default()
                    .push(RecentGameRecord {
                        date: date.to_string(),
                        points,
                        rebounds,
                        assists,
                    });
            } else {
                skipped += 1;
            }
        }

        if skipped > 0 {
            debug!("Skipped {} incomplete recent game rows", skipped);
        }

        for records in games.values_mut() {
            normalize_order(records);
        }

        Ok(Self { games })
    }

    /// Recent games for a player, oldest first; empty if unknown
    pub fn games_for(&self, player: &str) -> &[RecentGameRecord] {
        self.games.get(player).map(Vec::as_slice).unwrap_or_default()
    }

    /// Recent games as parallel series, `None` when the player has none
    pub fn series_for(&self, player: &str) -> Option<RecentGamesSeries> {
        let games = self.games_for(player);
        if games.is_empty() {
            return None;
        }

        Some(RecentGamesSeries {
            dates: games.iter().map(|g| g.date.clone()).collect(),
            pts: games.iter().map(|g| g.points).collect(),
            reb: games.iter().map(|g| g.rebounds).collect(),
            ast: games.iter().map(|g| g.assists).collect(),
        })
    }

    /// Number of players with at least one game
    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

fn parse_game_date(date: &str) -> Option<NaiveDate> {
    let date = date.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(date, fmt).ok())
}

/// Put a player's games oldest first
///
/// Game logs are exported newest first, so rows are reversed. When every
/// date parses, a stable sort by date then fixes any other source order.
fn normalize_order(records: &mut Vec<RecentGameRecord>) {
    records.reverse();

    let parsed: Option<Vec<NaiveDate>> = records.iter().map(|r| parse_game_date(&r.date)).collect();
    if let Some(dates) = parsed {
        let mut keyed: Vec<(NaiveDate, RecentGameRecord)> =
            dates.into_iter().zip(records.drain(..)).collect();
        keyed.sort_by_key(|(date, _)| *date);
        records.extend(keyed.into_iter().map(|(_, r)| r));
    }
}
