//! Server configuration from environment variables

use std::path::PathBuf;

pub const DEFAULT_BUNDLE_PATH: &str = "nba_model_data.json";
pub const DEFAULT_RECENT_GAMES_PATH: &str = "nba_player_last_7_games.csv";

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: String,
    pub bundle_path: PathBuf,
    pub recent_games_path: PathBuf,
}

impl ServerConfig {
    /// Read HOST, PORT, MODEL_BUNDLE and RECENT_GAMES_CSV
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: lookup("PORT").unwrap_or_else(|| "8080".to_string()),
            bundle_path: lookup("MODEL_BUNDLE")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_BUNDLE_PATH)),
            recent_games_path: lookup("RECENT_GAMES_CSV")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_RECENT_GAMES_PATH)),
        }
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
