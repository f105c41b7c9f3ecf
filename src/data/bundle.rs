//! Serialized model bundle produced by the training pipeline

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::predictor::ModelSpec;

/// Bundle loading errors
#[derive(Debug, Error)]
pub enum BundleError {
    #[error("Failed to read bundle {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed bundle: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Bundle lists no features")]
    NoFeatures,

    #[error("No model for target {0}")]
    MissingModel(&'static str),

    #[error("Model for {target} expects {actual} features, bundle lists {expected}")]
    FeatureCount {
        target: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Player {player:?} is missing numeric column {column:?}")]
    MissingColumn { player: String, column: String },

    #[error("Bundle has no team defense ratings")]
    NoTeams,

    #[error("League average defense rating must be positive, got {0}")]
    InvalidLeagueAverage(f64),
}

/// One row of the player feature table
///
/// Every column other than `NAME` is kept as raw JSON; only the feature and
/// target columns need to be numeric.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerRecord {
    #[serde(rename = "NAME")]
    pub name: String,
    #[serde(flatten)]
    pub columns: HashMap<String, serde_json::Value>,
}

impl PlayerRecord {
    /// Numeric value of a column
    pub fn numeric(&self, column: &str) -> Result<f64, BundleError> {
        self.columns
            .get(column)
            .and_then(|v| v.as_f64())
            .ok_or_else(|| BundleError::MissingColumn {
                player: self.name.clone(),
                column: column.to_string(),
            })
    }
}

/// Raw bundle contents
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelBundle {
    /// Target column ("PpG", "RpG", "ApG") -> model
    pub models: HashMap<String, ModelSpec>,
    /// Feature names in training order
    pub x_features: Vec<String>,
    /// Player feature table
    pub df_model: Vec<PlayerRecord>,
    /// Team name -> defensive rating
    pub team_defense_ratings: HashMap<String, f64>,
}

impl ModelBundle {
    /// Read a bundle from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, BundleError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| BundleError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json_str(&content)
    }

    pub fn from_json_str(json: &str) -> Result<Self, BundleError> {
        Ok(serde_json::from_str(json)?)
    }
}
