use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::models::{Play, Score};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RecentScoresQuery {
    /// Non-positive values yield an empty feed.
    pub limit: Option<i64>,
}

impl RecentScoresQuery {
    pub fn effective_limit(&self, default_limit: usize) -> usize {
        match self.limit {
            Some(limit) => usize::try_from(limit).unwrap_or(0),
            None => default_limit,
        }
    }
}

/// Score feed item with the play it was graded on, when the play is known.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RecentScoreEntry {
    #[serde(flatten)]
    pub score: Score,
    pub play: Option<Play>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_limit() {
        assert_eq!(RecentScoresQuery { limit: None }.effective_limit(10), 10);
        assert_eq!(RecentScoresQuery { limit: Some(3) }.effective_limit(10), 3);
        assert_eq!(RecentScoresQuery { limit: Some(0) }.effective_limit(10), 0);
        assert_eq!(RecentScoresQuery { limit: Some(-4) }.effective_limit(10), 0);
    }
}
