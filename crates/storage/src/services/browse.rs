use crate::dto::player::{
    PlayerComparison, PlayerFilter, PlayerProfile, PlayerSort, PlayerWithAggregates,
};
use crate::models::{Player, Score};

use super::metrics::{descending, rank_players, recent_scores};

/// Applies the dashboard filter to an already ranked list and reorders it.
/// All sorts are stable, so `Per10` keeps the ranking order untouched.
pub fn filter_players(
    ranked: Vec<PlayerWithAggregates>,
    filter: &PlayerFilter,
) -> Vec<PlayerWithAggregates> {
    let query = filter
        .search
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .map(SearchQuery::parse);

    let mut players: Vec<PlayerWithAggregates> = ranked
        .into_iter()
        .filter(|p| filter.position.is_none_or(|pos| p.player.position == pos))
        .filter(|p| {
            filter
                .min_performance
                .is_none_or(|min| p.average_per_10 >= min)
        })
        .filter(|p| query.as_ref().is_none_or(|q| q.matches(&p.player)))
        .collect();

    match filter.sort {
        PlayerSort::Per10 => {
            players.sort_by(|a, b| descending(a.average_per_10, b.average_per_10))
        }
        PlayerSort::AftersnapIq => players.sort_by(|a, b| b.average_iq.cmp(&a.average_iq)),
        PlayerSort::Alphabetical => {
            players.sort_by_cached_key(|p| p.player.name.to_lowercase())
        }
    }

    players
}

enum SearchQuery {
    Number(i32),
    Text(String),
}

impl SearchQuery {
    fn parse(raw: &str) -> Self {
        let digits = raw.strip_prefix('#').unwrap_or(raw).trim();
        match digits.parse::<i32>() {
            Ok(number) => Self::Number(number),
            Err(_) => Self::Text(raw.to_lowercase()),
        }
    }

    fn matches(&self, player: &Player) -> bool {
        match self {
            Self::Number(number) => player.number == *number,
            Self::Text(text) => player.name.to_lowercase().contains(text),
        }
    }
}

pub fn compare_players(
    ranked: &[PlayerWithAggregates],
    left_id: i64,
    right_id: i64,
) -> Option<PlayerComparison> {
    let left = ranked.iter().find(|p| p.id() == left_id)?;
    let right = ranked.iter().find(|p| p.id() == right_id)?;

    Some(PlayerComparison::new(left.clone(), right.clone()))
}

pub fn player_profile(
    players: &[Player],
    scores: &[Score],
    player_id: i64,
    recent_limit: usize,
) -> Option<PlayerProfile> {
    let ranked = rank_players(players, scores);
    let total_ranked = ranked.len();
    let (index, player) = ranked
        .into_iter()
        .enumerate()
        .find(|(_, p)| p.id() == player_id)?;

    let own_scores: Vec<Score> = scores
        .iter()
        .filter(|s| s.player_id == player_id)
        .cloned()
        .collect();

    Some(PlayerProfile {
        player,
        rank: index + 1,
        total_ranked,
        recent_scores: recent_scores(&own_scores, recent_limit),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Position;
    use crate::services::metrics::tests::{player, score};

    fn roster() -> (Vec<Player>, Vec<Score>) {
        let players = vec![
            player(11, "Davante Adams", Position::WideReceiver),
            player(24, "Sauce Gardner", Position::DefensiveBack),
            player(17, "Amon-Ra St. Brown", Position::WideReceiver),
            player(2, "Jaire Alexander", Position::DefensiveBack),
        ];
        let scores = vec![
            score(1, 11, Some(8.4)),
            score(2, 24, Some(9.1)),
            score(3, 17, Some(6.3)),
            score(4, 11, Some(8.8)),
            score(5, 2, None),
        ];
        (players, scores)
    }

    fn ids(players: &[PlayerWithAggregates]) -> Vec<i64> {
        players.iter().map(|p| p.id()).collect()
    }

    #[test]
    fn test_filter_by_position_and_threshold() {
        let (players, scores) = roster();
        let ranked = rank_players(&players, &scores);

        let filter = PlayerFilter {
            position: Some(Position::WideReceiver),
            min_performance: Some(7.0),
            ..PlayerFilter::default()
        };
        assert_eq!(ids(&filter_players(ranked, &filter)), vec![11]);
    }

    #[test]
    fn test_search_by_name_and_number() {
        let (players, scores) = roster();

        let by_name = PlayerFilter {
            search: Some("  adams ".to_string()),
            ..PlayerFilter::default()
        };
        assert_eq!(
            ids(&filter_players(rank_players(&players, &scores), &by_name)),
            vec![11]
        );

        let by_number = PlayerFilter {
            search: Some("#24".to_string()),
            ..PlayerFilter::default()
        };
        assert_eq!(
            ids(&filter_players(rank_players(&players, &scores), &by_number)),
            vec![24]
        );
    }

    #[test]
    fn test_sort_orders() {
        let (players, scores) = roster();

        let alphabetical = PlayerFilter {
            sort: PlayerSort::Alphabetical,
            ..PlayerFilter::default()
        };
        assert_eq!(
            ids(&filter_players(rank_players(&players, &scores), &alphabetical)),
            vec![17, 11, 2, 24]
        );

        let by_iq = PlayerFilter {
            sort: PlayerSort::AftersnapIq,
            ..PlayerFilter::default()
        };
        assert_eq!(
            ids(&filter_players(rank_players(&players, &scores), &by_iq)),
            vec![24, 11, 17, 2]
        );
    }

    #[test]
    fn test_iq_sort_puts_corrupt_average_last() {
        let players = vec![
            player(1, "Corrupt Grade", Position::WideReceiver),
            player(2, "Steady Grade", Position::WideReceiver),
        ];
        let scores = vec![score(1, 1, Some(f64::NAN)), score(2, 2, Some(9.0))];

        let by_iq = PlayerFilter {
            sort: PlayerSort::AftersnapIq,
            ..PlayerFilter::default()
        };
        let sorted = filter_players(rank_players(&players, &scores), &by_iq);
        assert_eq!(ids(&sorted), vec![2, 1]);
        assert_eq!(sorted[0].average_iq, 97);
        assert_eq!(sorted[1].average_iq, 0);
    }

    #[test]
    fn test_compare_players() {
        let (players, scores) = roster();
        let ranked = rank_players(&players, &scores);

        let comparison = compare_players(&ranked, 11, 17).unwrap();
        assert!((comparison.per_10_delta - 2.3).abs() < 1e-9);
        assert_eq!(comparison.leader(), Some(11));
        assert_eq!(comparison.score_count_delta, 1);

        assert!(compare_players(&ranked, 11, 999).is_none());
    }

    #[test]
    fn test_player_profile() {
        let (players, scores) = roster();

        let profile = player_profile(&players, &scores, 11, 1).unwrap();
        assert_eq!(profile.rank, 2);
        assert_eq!(profile.total_ranked, 4);
        assert_eq!(profile.recent_scores.len(), 1);
        assert_eq!(profile.recent_scores[0].id, 4);

        assert!(player_profile(&players, &scores, 999, 5).is_none());
    }
}
