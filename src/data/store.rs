//! Read-only store of models, player features and defense ratings
//!
//! Built once from a [`ModelBundle`] at startup and never mutated.

use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

use crate::core::defense::league_average;
use crate::data::bundle::{BundleError, ModelBundle};
use crate::models::{StatLine, Target};
use crate::predictor::{StatPredictor, TargetModels};

/// Player row with features in bundle feature order
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerFeatureRow {
    pub name: String,
    pub features: Vec<f64>,
    pub actual: StatLine,
}

/// Process-wide prediction data
pub struct DataStore {
    feature_names: Vec<String>,
    models: TargetModels,
    players: HashMap<String, PlayerFeatureRow>,
    player_names: Vec<String>,
    ratings: HashMap<String, f64>,
    team_names: Vec<String>,
    league_average: f64,
}

impl DataStore {
    /// Load and validate a bundle from disk
    pub fn load<P: AsRef<Path>>(bundle_path: P) -> Result<Self, BundleError> {
        let bundle_path = bundle_path.as_ref();
        info!("Loading model bundle: {:?}", bundle_path);

        let store = Self::from_bundle(ModelBundle::load(bundle_path)?)?;

        info!(
            "Loaded {} players, {} teams, {} features (league avg DRtg {:.1})",
            store.player_names.len(),
            store.team_names.len(),
            store.feature_names.len(),
            store.league_average
        );
        Ok(store)
    }

    pub fn from_json_str(json: &str) -> Result<Self, BundleError> {
        Self::from_bundle(ModelBundle::from_json_str(json)?)
    }

    /// Validate a raw bundle and index it
    ///
    /// Every model must accept exactly `x_features.len()` inputs and every
    /// player row must carry each feature and target column as a number.
    pub fn from_bundle(bundle: ModelBundle) -> Result<Self, BundleError> {
        let ModelBundle {
            mut models,
            x_features,
            df_model,
            team_defense_ratings,
        } = bundle;

        if x_features.is_empty() {
            return Err(BundleError::NoFeatures);
        }

        let mut take_model = |target: Target| -> Result<Box<dyn StatPredictor>, BundleError> {
            let predictor = models
                .remove(target.column())
                .ok_or(BundleError::MissingModel(target.column()))?
                .into_predictor();

            if predictor.num_features() != x_features.len() {
                return Err(BundleError::FeatureCount {
                    target: target.column(),
                    expected: x_features.len(),
                    actual: predictor.num_features(),
                });
            }
            Ok(predictor)
        };

        let models = TargetModels {
            points: take_model(Target::Points)?,
            rebounds: take_model(Target::Rebounds)?,
            assists: take_model(Target::Assists)?,
        };

        let mut players = HashMap::with_capacity(df_model.len());
        for record in &df_model {
            if players.contains_key(&record.name) {
                // First row wins
                debug!("Skipping duplicate row for {}", record.name);
                continue;
            }

            let features = x_features
                .iter()
                .map(|column| record.numeric(column))
                .collect::<Result<Vec<f64>, _>>()?;

            let actual = StatLine {
                points: record.numeric(Target::Points.column())?,
                rebounds: record.numeric(Target::Rebounds.column())?,
                assists: record.numeric(Target::Assists.column())?,
            };

            players.insert(
                record.name.clone(),
                PlayerFeatureRow {
                    name: record.name.clone(),
                    features,
                    actual,
                },
            );
        }

        let league_average =
            league_average(team_defense_ratings.values().copied()).ok_or(BundleError::NoTeams)?;
        if !(league_average.is_finite() && league_average > 0.0) {
            return Err(BundleError::InvalidLeagueAverage(league_average));
        }

        let mut player_names: Vec<String> = players.keys().cloned().collect();
        player_names.sort();
        let mut team_names: Vec<String> = team_defense_ratings.keys().cloned().collect();
        team_names.sort();

        Ok(Self {
            feature_names: x_features,
            models,
            players,
            player_names,
            ratings: team_defense_ratings,
            team_names,
            league_average,
        })
    }

    /// Distinct player names, sorted
    pub fn players(&self) -> &[String] {
        &self.player_names
    }

    /// Distinct team names, sorted
    pub fn teams(&self) -> &[String] {
        &self.team_names
    }

    /// Feature row by exact, case-sensitive name
    pub fn player(&self, name: &str) -> Option<&PlayerFeatureRow> {
        self.players.get(name)
    }

    /// Defense rating by exact team name
    pub fn team_rating(&self, team: &str) -> Option<f64> {
        self.ratings.get(team).copied()
    }

    /// Feature names in the order predictors expect them
    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    /// Mean of all team ratings
    pub fn league_average(&self) -> f64 {
        self.league_average
    }

    pub fn predictor(&self, target: Target) -> &dyn StatPredictor {
        self.models.get(target)
    }
}
