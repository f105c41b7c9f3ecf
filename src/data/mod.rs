//! Data loading modules

pub mod bundle;
pub mod recent_games;
pub mod store;

// Re-export commonly used types
pub use bundle::{BundleError, ModelBundle, PlayerRecord};
pub use recent_games::{RecentGameRecord, RecentGames};
pub use store::{DataStore, PlayerFeatureRow};
