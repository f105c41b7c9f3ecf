//! Prediction service
//!
//! Immutable context built at startup and shared by every request.

use thiserror::Error;
use tracing::debug;

use crate::core::defense::DefenseAdjustment;
use crate::data::{DataStore, RecentGames};
use crate::models::{IndexResponse, PredictForm, PredictionResult, StatLine};

/// Prediction errors
#[derive(Debug, Error, PartialEq)]
pub enum PredictError {
    #[error("Unknown player: {0}")]
    UnknownPlayer(String),
}

pub struct PredictionService {
    store: DataStore,
    recent_games: RecentGames,
}

impl PredictionService {
    pub fn new(store: DataStore, recent_games: RecentGames) -> Self {
        Self {
            store,
            recent_games,
        }
    }

    pub fn store(&self) -> &DataStore {
        &self.store
    }

    pub fn recent_games(&self) -> &RecentGames {
        &self.recent_games
    }

    /// Resolve the defense adjustment for an opponent
    pub fn adjustment_for(&self, opponent: &str) -> DefenseAdjustment {
        DefenseAdjustment::resolve(self.store.team_rating(opponent), self.store.league_average())
    }

    /// Predict opponent-adjusted stats for one player
    ///
    /// `player` must be one of [`DataStore::players`]; unknown teams are
    /// treated as league average.
    pub fn predict(&self, player: &str, opponent: &str) -> Result<PredictionResult, PredictError> {
        let row = self
            .store
            .player(player)
            .ok_or_else(|| PredictError::UnknownPlayer(player.to_string()))?;

        let adjustment = self.adjustment_for(opponent);

        let stats = StatLine::from_fn(|target| {
            let raw = self.store.predictor(target).predict(&row.features);
            adjustment.apply(raw)
        });

        debug!(
            "{} vs {}: factor {:.3}, {}/{}/{}",
            player, opponent, adjustment.factor, stats.points, stats.rebounds, stats.assists
        );

        Ok(PredictionResult {
            name: row.name.clone(),
            opponent: opponent.to_string(),
            stats,
            actual_avg: row.actual,
            context: adjustment.context(),
        })
    }

    /// Form data with no submission
    pub fn index(&self) -> IndexResponse {
        IndexResponse {
            players: self.store.players().to_vec(),
            teams: self.store.teams().to_vec(),
            ..Default::default()
        }
    }

    /// Handle a form submission
    ///
    /// A submission missing either field yields the form with no prediction.
    pub fn submit(&self, form: &PredictForm) -> Result<IndexResponse, PredictError> {
        let mut response = IndexResponse {
            selected_player: form.player_name.clone(),
            selected_opponent: form.opponent_team.clone(),
            ..self.index()
        };

        if let Some((player, opponent)) = form.selection() {
            response.prediction = Some(self.predict(player, opponent)?);
            response.last_7_data = self.recent_games.series_for(player);
        }

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::defense::round_to;
    use crate::data::store::tests::sample_store;
    use crate::models::Target;
    use polars::prelude::*;

    fn sample_recent_games() -> RecentGames {
        let df = df!(
            "PlayerName" => &["Stephen Curry", "Stephen Curry"],
            "GAME_DATE" => &["2024-11-10", "2024-11-08"],
            "PTS" => &[31i64, 24],
            "REB" => &[5i64, 6],
            "AST" => &[8i64, 7]
        )
        .unwrap();
        RecentGames::from_dataframe(&df).unwrap()
    }

    fn service() -> PredictionService {
        PredictionService::new(sample_store(), sample_recent_games())
    }

    fn form(player: Option<&str>, opponent: Option<&str>) -> PredictForm {
        PredictForm {
            player_name: player.map(str::to_string),
            opponent_team: opponent.map(str::to_string),
        }
    }

    #[test]
    fn test_prediction_matches_scaled_model_output() {
        let service = service();
        let result = service.predict("Anthony Davis", "Washington Wizards").unwrap();

        let row = service.store().player("Anthony Davis").unwrap();
        let factor = 115.0 / 110.0;
        for target in Target::ALL {
            let raw = service.store().predictor(target).predict(&row.features);
            assert_eq!(result.stats.get(target), round_to(raw * factor, 1));
        }

        assert_eq!(result.context.opp_drtg, 115.0);
        assert_eq!(result.context.league_avg, 110.0);
        assert_eq!(result.context.factor, 1.05);
        assert_eq!(result.actual_avg.rebounds, 12.6);
    }

    #[test]
    fn test_unknown_opponent_is_unadjusted() {
        let service = service();
        let result = service.predict("Stephen Curry", "Seattle SuperSonics").unwrap();

        // 2.0 + 0.5 * 32 + 0.1 * 30 = 21.0
        assert_eq!(result.context.factor, 1.0);
        assert_eq!(result.stats.points, 21.0);
        assert_eq!(result.context.opp_drtg, 110.0);
    }

    #[test]
    fn test_unknown_player_is_error() {
        let err = service().predict("Michael Jordan", "Boston Celtics").unwrap_err();
        assert_eq!(err, PredictError::UnknownPlayer("Michael Jordan".to_string()));
    }

    #[test]
    fn test_index_lists_players_and_teams() {
        let response = service().index();
        assert_eq!(response.players, vec!["Anthony Davis", "Stephen Curry"]);
        assert_eq!(response.teams.len(), 3);
        assert!(response.prediction.is_none());
    }

    #[test]
    fn test_incomplete_submission_has_no_prediction() {
        let service = service();

        for f in [
            form(Some("Stephen Curry"), None),
            form(None, Some("Boston Celtics")),
            form(Some(""), Some("Boston Celtics")),
            form(None, None),
        ] {
            let response = service.submit(&f).unwrap();
            assert!(response.prediction.is_none());
            assert!(response.last_7_data.is_none());
            assert_eq!(response.players.len(), 2);
        }
    }

    #[test]
    fn test_submission_attaches_recent_games() {
        let response = service()
            .submit(&form(Some("Stephen Curry"), Some("Boston Celtics")))
            .unwrap();

        assert!(response.prediction.is_some());
        assert_eq!(response.selected_player.as_deref(), Some("Stephen Curry"));
        let series = response.last_7_data.unwrap();
        assert_eq!(series.dates, vec!["2024-11-08", "2024-11-10"]);
        assert_eq!(series.pts, vec![24, 31]);
    }

    #[test]
    fn test_submission_without_recent_games_omits_series() {
        let response = service()
            .submit(&form(Some("Anthony Davis"), Some("Boston Celtics")))
            .unwrap();

        assert!(response.prediction.is_some());
        assert!(response.last_7_data.is_none());
    }
}
