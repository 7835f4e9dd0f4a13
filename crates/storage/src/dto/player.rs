use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::models::{Player, Position, Score};

const MAX_PERFORMANCE: f64 = 10.5;
const MAX_SEARCH_LENGTH: usize = 100;

/// A player together with the aggregates derived from their scores.
/// Recomputed from the score collection on every request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlayerWithAggregates {
    #[serde(flatten)]
    pub player: Player,
    /// Mean composite over graded scores, 0 when there are none.
    pub average_per_10: f64,
    pub average_iq: u8,
    pub score_count: usize,
}

impl PlayerWithAggregates {
    pub fn id(&self) -> i64 {
        self.player.id
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PlayerSort {
    #[default]
    #[serde(rename = "per_10")]
    Per10,
    AftersnapIq,
    Alphabetical,
}

/// Dashboard filter: position, minimum composite, free-text search and sort order.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PlayerFilter {
    pub position: Option<Position>,
    pub min_performance: Option<f64>,
    /// Matches a name substring, or a jersey number written as `12` or `#12`.
    pub search: Option<String>,
    #[serde(default)]
    pub sort: PlayerSort,
}

impl PlayerFilter {
    pub fn validate(&self) -> Result<(), String> {
        if let Some(min) = self.min_performance
            && !(0.0..=MAX_PERFORMANCE).contains(&min)
        {
            return Err(format!(
                "min_performance must be between 0 and {}",
                MAX_PERFORMANCE
            ));
        }

        if let Some(ref search) = self.search
            && search.chars().count() > MAX_SEARCH_LENGTH
        {
            return Err(format!(
                "search must be at most {} characters",
                MAX_SEARCH_LENGTH
            ));
        }

        Ok(())
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ComparisonQuery {
    pub left: i64,
    pub right: i64,
}

/// Side-by-side view of two ranked players. Deltas are `left - right`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PlayerComparison {
    pub left: PlayerWithAggregates,
    pub right: PlayerWithAggregates,
    pub per_10_delta: f64,
    pub iq_delta: i16,
    pub score_count_delta: i64,
}

impl PlayerComparison {
    pub fn new(left: PlayerWithAggregates, right: PlayerWithAggregates) -> Self {
        Self {
            per_10_delta: left.average_per_10 - right.average_per_10,
            iq_delta: i16::from(left.average_iq) - i16::from(right.average_iq),
            score_count_delta: left.score_count as i64 - right.score_count as i64,
            left,
            right,
        }
    }

    /// Id of the player with the higher average composite, `None` on a tie.
    pub fn leader(&self) -> Option<i64> {
        if self.per_10_delta > 0.0 {
            Some(self.left.id())
        } else if self.per_10_delta < 0.0 {
            Some(self.right.id())
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PlayerProfile {
    pub player: PlayerWithAggregates,
    /// 1-based position in the full ranking.
    pub rank: usize,
    pub total_ranked: usize,
    pub recent_scores: Vec<Score>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_validation() {
        let filter = PlayerFilter {
            min_performance: Some(11.0),
            ..PlayerFilter::default()
        };
        assert!(filter.validate().is_err());

        let filter = PlayerFilter {
            search: Some("x".repeat(101)),
            ..PlayerFilter::default()
        };
        assert!(filter.validate().is_err());

        let filter = PlayerFilter {
            min_performance: Some(7.5),
            search: Some("#11".to_string()),
            ..PlayerFilter::default()
        };
        assert!(filter.validate().is_ok());
    }

    #[test]
    fn test_sort_wire_names() {
        let sort: PlayerSort = serde_json::from_str("\"per_10\"").unwrap();
        assert_eq!(sort, PlayerSort::Per10);
        let sort: PlayerSort = serde_json::from_str("\"aftersnap_iq\"").unwrap();
        assert_eq!(sort, PlayerSort::AftersnapIq);
        let sort: PlayerSort = serde_json::from_str("\"alphabetical\"").unwrap();
        assert_eq!(sort, PlayerSort::Alphabetical);
    }
}
