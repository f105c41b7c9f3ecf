//! Opponent Defense Adjustment
//!
//! Scales raw stat predictions by the opponent's defensive rating relative to
//! the league average:
//!     factor = opponent_drtg / league_avg_drtg
//!
//! Raw predictions are multiplied by the factor directly, so a higher
//! opponent rating raises the prediction. An opponent without a rating is
//! treated as league average (factor = 1).

use crate::models::DefenseContext;

/// Calculate the defense adjustment factor
///
/// # Examples
/// ```
/// use nba_predict::core::defense::defense_factor;
/// let factor = defense_factor(115.0, 110.0);
/// assert!((factor - 1.04545).abs() < 0.0001);
/// ```
pub fn defense_factor(opponent_rating: f64, league_average: f64) -> f64 {
    opponent_rating / league_average
}

/// Arithmetic mean of all team ratings, `None` when there are no teams
pub fn league_average<I>(ratings: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = ratings
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), r| (sum + r, count + 1));

    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

/// Round to `decimals` places
///
/// Rounds the exact binary value with ties to even, so `round_to(4.35, 1)`
/// is 4.3 (4.35 is stored just below the midpoint).
pub fn round_to(value: f64, decimals: usize) -> f64 {
    format!("{:.*}", decimals, value)
        .parse()
        .unwrap_or(value)
}

/// Resolved adjustment for one opponent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DefenseAdjustment {
    pub opponent_rating: f64,
    pub league_average: f64,
    pub factor: f64,
}

impl DefenseAdjustment {
    /// Resolve the adjustment, substituting the league average for a missing rating
    pub fn resolve(opponent_rating: Option<f64>, league_average: f64) -> Self {
        let opponent_rating = opponent_rating.unwrap_or(league_average);

        Self {
            opponent_rating,
            league_average,
            factor: defense_factor(opponent_rating, league_average),
        }
    }

    /// Scale a raw prediction and round to 1 decimal
    pub fn apply(&self, raw_prediction: f64) -> f64 {
        round_to(raw_prediction * self.factor, 1)
    }

    /// Rounded values for display
    pub fn context(&self) -> DefenseContext {
        DefenseContext {
            opp_drtg: round_to(self.opponent_rating, 1),
            league_avg: round_to(self.league_average, 1),
            factor: round_to(self.factor, 2),
        }
    }
}
