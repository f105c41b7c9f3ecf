//! NBA Stat Predictor - opponent-adjusted player stat predictions
//!
//! This library provides:
//! - Loading of the trained model bundle (per-target regressors, feature
//!   schema, player feature table, team defense ratings)
//! - Defense adjustment of raw predictions by opponent rating
//! - Recent game history lookup for display
//! - A prediction service shared by the HTTP server and the CLI
//!
//! # Example
//!
//! ```no_run
//! use nba_predict::data::{DataStore, RecentGames};
//! use nba_predict::service::PredictionService;
//!
//! let store = DataStore::load("nba_model_data.json").unwrap();
//! let recent = RecentGames::load_or_empty("nba_player_last_7_games.csv");
//! let service = PredictionService::new(store, recent);
//!
//! let result = service.predict("Stephen Curry", "Boston Celtics").unwrap();
//! println!("{} PpG vs {}", result.stats.points, result.opponent);
//! ```

pub mod config;
pub mod core;
pub mod data;
pub mod models;
pub mod predictor;
pub mod service;

// API-specific modules (only available with api feature)
#[cfg(feature = "api")]
pub mod error;

// Re-export commonly used types
pub use data::{BundleError, DataStore, RecentGames};
pub use models::{IndexResponse, PredictForm, PredictionResult, StatLine, Target};
pub use predictor::{LinearModel, StatPredictor};
pub use service::{PredictError, PredictionService};
