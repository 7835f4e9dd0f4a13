//! Pure aggregation over score snapshots.
//!
//! Nothing here validates input. A malformed sub-metric yields a NaN or a
//! sentinel in the output rather than an error, so one bad record never
//! blocks aggregation over the rest of the collection.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::dto::player::PlayerWithAggregates;
use crate::models::{Player, Score};

/// Scaling applied to the mean of the three sub-metrics to produce PER-10.
/// Tunable; a perfect 10/10/10 grade maps to 10.5.
pub const PER10_SCALE: f64 = 1.05;

/// Linear factor from a PER-10 composite to the AFTERSNAP IQ percentage.
pub const IQ_SCALE: f64 = 10.8;

pub const IQ_CAP: u8 = 100;

/// PER-10 composite: mean of the three sub-metrics times [`PER10_SCALE`].
///
/// No clamping. Inputs are nominally 0-10 but any finite value is accepted.
pub fn compute_composite(release_speed: f64, route_fidelity: f64, leverage: f64) -> f64 {
    ((release_speed + route_fidelity + leverage) / 3.0) * PER10_SCALE
}

/// Maps a composite onto a 0-100 percentage, rounding half away from zero.
///
/// Composites above ~9.26 saturate at [`IQ_CAP`]. Negative composites map
/// to 0, and so does NaN.
pub fn rating_to_iq_percent(composite: f64) -> u8 {
    if composite.is_nan() {
        return 0;
    }
    let percent = (composite * IQ_SCALE).round();
    // saturating cast: negatives become 0
    (percent as u8).min(IQ_CAP)
}

/// Mean composite over the player's graded scores, or `None` without any.
pub fn player_average(scores: &[Score], player_id: i64) -> Option<f64> {
    let (sum, count) = scores
        .iter()
        .filter(|s| s.player_id == player_id)
        .filter_map(|s| s.per_10_score)
        .fold((0.0, 0usize), |(sum, count), composite| {
            (sum + composite, count + 1)
        });

    (count > 0).then(|| sum / count as f64)
}

/// Mean composite over the player's graded scores.
///
/// Returns 0 when the player has no graded scores. Callers that need to
/// tell "no data" from a genuine zero should use [`player_average`].
pub fn average_composite_for_player(scores: &[Score], player_id: i64) -> f64 {
    player_average(scores, player_id).unwrap_or(0.0)
}

/// Every player with their aggregates, best average composite first.
///
/// Equal averages keep the input player order. Players whose average is
/// NaN sort after everyone else.
pub fn rank_players(players: &[Player], scores: &[Score]) -> Vec<PlayerWithAggregates> {
    let mut totals: HashMap<i64, (f64, usize)> = HashMap::with_capacity(players.len());
    for score in scores {
        if let Some(composite) = score.per_10_score {
            let entry = totals.entry(score.player_id).or_insert((0.0, 0));
            entry.0 += composite;
            entry.1 += 1;
        }
    }

    let mut ranked: Vec<PlayerWithAggregates> = players
        .iter()
        .map(|player| {
            let (sum, score_count) = totals.get(&player.id).copied().unwrap_or((0.0, 0));
            let average_per_10 = if score_count > 0 {
                sum / score_count as f64
            } else {
                0.0
            };

            PlayerWithAggregates {
                player: player.clone(),
                average_per_10,
                average_iq: rating_to_iq_percent(average_per_10),
                score_count,
            }
        })
        .collect();

    ranked.sort_by(|a, b| descending(a.average_per_10, b.average_per_10));
    ranked
}

pub fn top_player(players: &[Player], scores: &[Score]) -> Option<PlayerWithAggregates> {
    rank_players(players, scores).into_iter().next()
}

/// At most `limit` scores, newest first. Ties keep their original order.
pub fn recent_scores(scores: &[Score], limit: usize) -> Vec<Score> {
    if limit == 0 {
        return Vec::new();
    }

    let mut sorted: Vec<&Score> = scores.iter().collect();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    sorted.into_iter().take(limit).cloned().collect()
}

/// Total descending order on f64 with NaN sinking to the end.
pub(crate) fn descending(a: f64, b: f64) -> Ordering {
    sort_key(b).total_cmp(&sort_key(a))
}

fn sort_key(value: f64) -> f64 {
    if value.is_nan() {
        f64::NEG_INFINITY
    } else {
        value
    }
}
