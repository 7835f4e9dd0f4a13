use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::services::metrics::compute_composite;

/// A single grading event for one player on one play.
///
/// Sub-metrics are graded on a 1-10 scale and stay `None` until graded.
/// `per_10_score` is the stored composite; see [`Score::expected_composite`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Score {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub play_id: i64,
    pub player_id: i64,
    pub release_speed: Option<f64>,
    pub route_fidelity: Option<f64>,
    pub leverage: Option<f64>,
    pub per_10_score: Option<f64>,
    pub notes: Option<String>,
}

impl Score {
    /// Composite recomputed from the three sub-metrics, if all are graded.
    pub fn expected_composite(&self) -> Option<f64> {
        match (self.release_speed, self.route_fidelity, self.leverage) {
            (Some(release), Some(fidelity), Some(leverage)) => {
                Some(compute_composite(release, fidelity, leverage))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graded(release: Option<f64>, fidelity: Option<f64>, leverage: Option<f64>) -> Score {
        Score {
            id: 1,
            created_at: Utc::now(),
            play_id: 10,
            player_id: 5,
            release_speed: release,
            route_fidelity: fidelity,
            leverage,
            per_10_score: None,
            notes: None,
        }
    }

    #[test]
    fn test_expected_composite_when_fully_graded() {
        let score = graded(Some(9.0), Some(8.0), Some(7.0));
        let expected = score.expected_composite().unwrap();
        assert!((expected - 8.4).abs() < 1e-9);
    }

    #[test]
    fn test_expected_composite_missing_metric() {
        let score = graded(Some(9.0), None, Some(7.0));
        assert!(score.expected_composite().is_none());
    }
}
