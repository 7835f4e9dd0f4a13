use std::collections::{HashMap, HashSet};

use crate::dto::summary::{CompositeMismatch, LeaderboardRow, SessionSummary};
use crate::models::{Player, Score};

use super::metrics::rank_players;

/// Composite at or above which a play earns a "quick instinct" tag.
pub const QUICK_INSTINCT_THRESHOLD: f64 = 9.0;

/// Composite below which a play is a red flag. Ungraded plays count as 0.
pub const RED_FLAG_THRESHOLD: f64 = 6.0;

pub const LEADERBOARD_SIZE: usize = 10;

/// Allowed drift between a stored composite and its recomputation.
pub const COMPOSITE_TOLERANCE: f64 = 0.005;

pub fn session_summary(players: &[Player], scores: &[Score]) -> SessionSummary {
    let unique_players: HashSet<i64> = scores.iter().map(|s| s.player_id).collect();

    let quick_instinct_count = scores
        .iter()
        .filter(|s| composite_or_zero(s) >= QUICK_INSTINCT_THRESHOLD)
        .count();

    let mut red_flags: HashMap<i64, usize> = HashMap::new();
    for score in scores.iter().filter(|s| is_red_flag(s)) {
        *red_flags.entry(score.player_id).or_default() += 1;
    }
    let red_flag_count = red_flags.values().sum();

    let leaderboard = rank_players(players, scores)
        .into_iter()
        .take(LEADERBOARD_SIZE)
        .map(|player| LeaderboardRow {
            red_flags: red_flags.get(&player.id()).copied().unwrap_or(0),
            player,
        })
        .collect();

    SessionSummary {
        plays_annotated: scores.len(),
        unique_players: unique_players.len(),
        quick_instinct_count,
        red_flag_count,
        leaderboard,
    }
}

/// Scores whose stored composite disagrees with the formula by more than
/// `tolerance`. Scores missing a sub-metric or the composite are skipped.
pub fn audit_composites(scores: &[Score], tolerance: f64) -> Vec<CompositeMismatch> {
    scores
        .iter()
        .filter_map(|score| {
            let stored = score.per_10_score?;
            let expected = score.expected_composite()?;
            let consistent = (stored - expected).abs() <= tolerance;

            (!consistent).then_some(CompositeMismatch {
                score_id: score.id,
                player_id: score.player_id,
                stored,
                expected,
            })
        })
        .collect()
}

fn composite_or_zero(score: &Score) -> f64 {
    score.per_10_score.unwrap_or(0.0)
}

fn is_red_flag(score: &Score) -> bool {
    composite_or_zero(score) < RED_FLAG_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Position;
    use crate::services::metrics::tests::{player, score};

    #[test]
    fn test_session_summary_counts() {
        let players = vec![
            player(1, "Adams", Position::WideReceiver),
            player(2, "Boyd", Position::WideReceiver),
            player(3, "Cole", Position::DefensiveBack),
        ];
        let scores = vec![
            score(1, 1, Some(9.4)),
            score(2, 1, Some(9.0)),
            score(3, 2, Some(5.2)),
            score(4, 2, None),
            score(5, 1, Some(7.7)),
        ];

        let summary = session_summary(&players, &scores);
        assert_eq!(summary.plays_annotated, 5);
        assert_eq!(summary.unique_players, 2);
        assert_eq!(summary.quick_instinct_count, 2);
        assert_eq!(summary.red_flag_count, 2);

        assert_eq!(summary.leaderboard.len(), 3);
        assert_eq!(summary.leaderboard[0].player.id(), 1);
        assert_eq!(summary.leaderboard[0].red_flags, 0);
        assert_eq!(summary.leaderboard[1].player.id(), 2);
        assert_eq!(summary.leaderboard[1].red_flags, 2);
    }

    #[test]
    fn test_session_summary_empty() {
        let summary = session_summary(&[], &[]);
        assert_eq!(summary.plays_annotated, 0);
        assert_eq!(summary.unique_players, 0);
        assert!(summary.leaderboard.is_empty());
    }

    #[test]
    fn test_leaderboard_is_capped() {
        let players: Vec<Player> = (1..=12)
            .map(|id| player(id, "Player", Position::DefensiveBack))
            .collect();
        let summary = session_summary(&players, &[]);
        assert_eq!(summary.leaderboard.len(), LEADERBOARD_SIZE);
    }

    #[test]
    fn test_audit_composites_flags_inconsistent_scores() {
        let mut consistent = score(1, 1, Some(8.4));
        consistent.release_speed = Some(9.0);
        consistent.route_fidelity = Some(8.0);
        consistent.leverage = Some(7.0);

        let mut corrupt = consistent.clone();
        corrupt.id = 2;
        corrupt.per_10_score = Some(9.9);

        let ungraded = score(3, 1, Some(4.0));

        let mismatches = audit_composites(&[consistent, corrupt, ungraded], COMPOSITE_TOLERANCE);
        assert_eq!(mismatches.len(), 1);
        assert_eq!(mismatches[0].score_id, 2);
        assert!((mismatches[0].expected - 8.4).abs() < 1e-9);
        assert!((mismatches[0].difference() - 1.5).abs() < 1e-9);
    }
}
