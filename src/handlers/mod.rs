pub mod health;
pub mod predict;

#[cfg(test)]
pub(crate) mod test_support {
    use actix_web::web;
    use polars::prelude::*;
    use std::sync::Arc;

    use crate::AppState;
    use nba_predict::{DataStore, PredictionService, RecentGames};

    const BUNDLE: &str = r#"{
        "models": {
            "PpG": {"kind": "linear", "intercept": 0.0, "coefficients": [1.0]},
            "RpG": {"kind": "linear", "intercept": 0.0, "coefficients": [0.25]},
            "ApG": {"kind": "linear", "intercept": 1.0, "coefficients": [0.1]}
        },
        "x_features": ["FGA"],
        "df_model": [
            {"NAME": "Jayson Tatum", "FGA": 20.0, "PpG": 26.9, "RpG": 8.1, "ApG": 4.9},
            {"NAME": "Jrue Holiday", "FGA": 10.0, "PpG": 12.5, "RpG": 5.4, "ApG": 4.8}
        ],
        "team_defense_ratings": {
            "Miami Heat": 115.0,
            "Orlando Magic": 105.0
        }
    }"#;

    pub(crate) fn app_state() -> web::Data<Arc<AppState>> {
        let store = DataStore::from_json_str(BUNDLE).unwrap();
        let games = df!(
            "PlayerName" => &["Jayson Tatum", "Jayson Tatum"],
            "GAME_DATE" => &["Jan 05, 2025", "Jan 03, 2025"],
            "PTS" => &[33i64, 21],
            "REB" => &[9i64, 7],
            "AST" => &[5i64, 6]
        )
        .unwrap();
        let recent = RecentGames::from_dataframe(&games).unwrap();

        web::Data::new(Arc::new(AppState {
            service: PredictionService::new(store, recent),
        }))
    }
}
