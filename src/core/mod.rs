//! Core business logic modules

pub mod defense;

// Re-export commonly used types
pub use defense::{defense_factor, league_average, round_to, DefenseAdjustment};
