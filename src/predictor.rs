use serde::{Deserialize, Serialize};

use crate::models::Target;

/// A trained regressor for one target statistic
pub trait StatPredictor: Send + Sync {
    /// Predict a raw value from a feature vector in bundle feature order
    fn predict(&self, features: &[f64]) -> f64;

    /// Number of features the model was trained on
    fn num_features(&self) -> usize;
}

/// Serialized model as it appears in the bundle
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelSpec {
    Linear(LinearModel),
}

impl ModelSpec {
    pub fn into_predictor(self) -> Box<dyn StatPredictor> {
        match self {
            ModelSpec::Linear(model) => Box::new(model),
        }
    }
}

/// Ordinary linear regression: `intercept + coefficients · x`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    pub intercept: f64,
    pub coefficients: Vec<f64>,
}

impl LinearModel {
    pub fn new(intercept: f64, coefficients: Vec<f64>) -> Self {
        Self {
            intercept,
            coefficients,
        }
    }
}

impl StatPredictor for LinearModel {
    fn predict(&self, features: &[f64]) -> f64 {
        debug_assert_eq!(features.len(), self.coefficients.len());
        self.intercept
            + self
                .coefficients
                .iter()
                .zip(features)
                .map(|(w, x)| w * x)
                .sum::<f64>()
    }

    fn num_features(&self) -> usize {
        self.coefficients.len()
    }
}

/// One predictor per target statistic
pub struct TargetModels {
    pub points: Box<dyn StatPredictor>,
    pub rebounds: Box<dyn StatPredictor>,
    pub assists: Box<dyn StatPredictor>,
}

impl TargetModels {
    pub fn get(&self, target: Target) -> &dyn StatPredictor {
        match target {
            Target::Points => self.points.as_ref(),
            Target::Rebounds => self.rebounds.as_ref(),
            Target::Assists => self.assists.as_ref(),
        }
    }
}
