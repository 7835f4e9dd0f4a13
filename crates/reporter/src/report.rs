//! Plain-text renderings of the scouting reports.

use storage::{
    dto::{
        player::{PlayerComparison, PlayerWithAggregates},
        summary::{CompositeMismatch, SessionSummary},
    },
    models::{CartSession, DataSnapshot, Score},
};

fn composite(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{:.2}", v))
}

pub fn format_ranking(players: &[PlayerWithAggregates]) -> String {
    let mut out = format!(
        "{:>3}  {:<24} {:<3} {:>3}  {:<14} {:>6} {:>4} {:>5}\n",
        "#", "NAME", "POS", "NO", "TEAM", "PER-10", "IQ%", "PLAYS"
    );

    for (index, p) in players.iter().enumerate() {
        out.push_str(&format!(
            "{:>3}  {:<24} {:<3} {:>3}  {:<14} {:>6.2} {:>4} {:>5}\n",
            index + 1,
            p.player.name,
            p.player.position,
            p.player.number,
            p.player.team,
            p.average_per_10,
            p.average_iq,
            p.score_count
        ));
    }

    out
}

/// Scores are listed as given; player names come from the snapshot.
pub fn format_recent(scores: &[Score], snapshot: &DataSnapshot) -> String {
    let mut out = String::new();

    for score in scores {
        let name = snapshot
            .player(score.player_id)
            .map_or("unknown player", |p| p.name.as_str());
        out.push_str(&format!(
            "{}  play {:<6} {:<24} {:>6}\n",
            score.created_at.format("%Y-%m-%d %H:%M"),
            score.play_id,
            name,
            composite(score.per_10_score)
        ));
    }

    if out.is_empty() {
        out.push_str("No scores recorded.\n");
    }
    out
}

pub fn format_summary(summary: &SessionSummary) -> String {
    let mut out = String::new();
    out.push_str(&format!("Plays annotated:  {}\n", summary.plays_annotated));
    out.push_str(&format!("Unique players:   {}\n", summary.unique_players));
    out.push_str(&format!("Quick instincts:  {}\n", summary.quick_instinct_count));
    out.push_str(&format!("Red flags:        {}\n", summary.red_flag_count));

    if summary.leaderboard.is_empty() {
        return out;
    }

    out.push_str("\nLeaderboard\n");
    for (index, row) in summary.leaderboard.iter().enumerate() {
        out.push_str(&format!(
            "{:>3}  {:<24} {:>6.2} {:>4}%  red flags: {}\n",
            index + 1,
            row.player.player.name,
            row.player.average_per_10,
            row.player.average_iq,
            row.red_flags
        ));
    }

    out
}

pub fn format_comparison(comparison: &PlayerComparison) -> String {
    let left = &comparison.left;
    let right = &comparison.right;

    let mut out = format!(
        "{:<12} {:>24} {:>24}\n",
        "", left.player.name, right.player.name
    );
    out.push_str(&format!(
        "{:<12} {:>24} {:>24}\n",
        "Position", left.player.position, right.player.position
    ));
    out.push_str(&format!(
        "{:<12} {:>24.2} {:>24.2}  ({:+.2})\n",
        "PER-10", left.average_per_10, right.average_per_10, comparison.per_10_delta
    ));
    out.push_str(&format!(
        "{:<12} {:>23}% {:>23}%  ({:+})\n",
        "IQ", left.average_iq, right.average_iq, comparison.iq_delta
    ));
    out.push_str(&format!(
        "{:<12} {:>24} {:>24}  ({:+})\n",
        "Plays", left.score_count, right.score_count, comparison.score_count_delta
    ));

    let verdict = match comparison.leader() {
        Some(id) if id == left.id() => format!("{} leads", left.player.name),
        Some(_) => format!("{} leads", right.player.name),
        None => "Dead even".to_string(),
    };
    out.push_str(&verdict);
    out.push('\n');

    out
}

pub fn format_audit(mismatches: &[CompositeMismatch]) -> String {
    if mismatches.is_empty() {
        return "All stored composites match their sub-metrics.\n".to_string();
    }

    let mut out = format!("{} mismatched composite(s)\n", mismatches.len());
    for m in mismatches {
        out.push_str(&format!(
            "score {:<6} player {:<6} stored {:.3} expected {:.3} (off by {:.3})\n",
            m.score_id,
            m.player_id,
            m.stored,
            m.expected,
            m.difference()
        ));
    }
    out
}

pub fn format_sessions(sessions: &[CartSession]) -> String {
    if sessions.is_empty() {
        return "No saved sessions.\n".to_string();
    }

    let mut out = String::new();
    for session in sessions {
        out.push_str(&format!(
            "{}  {}  {} ({} players)\n",
            session.created_at.format("%Y-%m-%d %H:%M"),
            session.id,
            session.name,
            session.players.len()
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use storage::dto::summary::LeaderboardRow;
    use storage::models::{Player, Position, SessionPlayer};

    fn ranked(id: i64, name: &str, average: f64, iq: u8, count: usize) -> PlayerWithAggregates {
        PlayerWithAggregates {
            player: Player {
                id,
                name: name.to_string(),
                team: "Chiefs".to_string(),
                position: Position::WideReceiver,
                number: 10 + id as i32,
                avatar_url: None,
            },
            average_per_10: average,
            average_iq: iq,
            score_count: count,
        }
    }

    #[test]
    fn test_ranking_lists_players_in_order() {
        let text = format_ranking(&[
            ranked(1, "Rashee Rice", 8.4, 91, 3),
            ranked(2, "Xavier Worthy", 7.0, 76, 2),
        ]);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("PER-10"));
        assert!(lines[1].trim_start().starts_with("1  Rashee Rice"));
        assert!(lines[1].contains("8.40"));
        assert!(lines[2].contains("Xavier Worthy"));
    }

    #[test]
    fn test_summary_counts_then_leaderboard() {
        let mut summary = SessionSummary {
            plays_annotated: 12,
            unique_players: 2,
            quick_instinct_count: 3,
            red_flag_count: 1,
            leaderboard: Vec::new(),
        };
        let text = format_summary(&summary);
        assert_eq!(text.lines().count(), 4);
        assert!(text.starts_with("Plays annotated:  12\n"));
        assert!(!text.contains("Leaderboard"));

        summary.leaderboard.push(LeaderboardRow {
            player: ranked(1, "Rashee Rice", 8.4, 91, 3),
            red_flags: 1,
        });
        let text = format_summary(&summary);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[5], "Leaderboard");
        assert!(lines[6].contains("Rashee Rice"));
        assert!(lines[6].ends_with("91%  red flags: 1"));
    }

    #[test]
    fn test_comparison_names_the_leader() {
        let comparison = PlayerComparison::new(
            ranked(1, "Rashee Rice", 8.4, 91, 3),
            ranked(2, "Xavier Worthy", 7.0, 76, 2),
        );
        let text = format_comparison(&comparison);

        assert!(text.contains("(+1.40)"));
        assert!(text.contains("(+15)"));
        assert!(text.ends_with("Rashee Rice leads\n"));

        let tie = PlayerComparison::new(ranked(1, "A", 7.0, 76, 1), ranked(2, "B", 7.0, 76, 1));
        assert!(format_comparison(&tie).ends_with("Dead even\n"));
    }

    #[test]
    fn test_recent_marks_ungraded_scores() {
        let snapshot = DataSnapshot::empty();
        let score = Score {
            id: 1,
            created_at: Utc::now(),
            play_id: 42,
            player_id: 9,
            release_speed: None,
            route_fidelity: None,
            leverage: None,
            per_10_score: None,
            notes: None,
        };

        let text = format_recent(&[score], &snapshot);
        assert!(text.contains("unknown player"));
        assert!(text.trim_end().ends_with('-'));
        assert_eq!(format_recent(&[], &snapshot), "No scores recorded.\n");
    }

    #[test]
    fn test_audit_and_sessions_empty_messages() {
        assert!(format_audit(&[]).starts_with("All stored composites"));
        assert_eq!(format_sessions(&[]), "No saved sessions.\n");

        let session = CartSession {
            id: "session_abc".to_string(),
            name: "Board".to_string(),
            players: vec![SessionPlayer {
                player_id: 1,
                notes: String::new(),
            }],
            created_at: Utc::now(),
        };
        assert!(format_sessions(&[session]).contains("session_abc  Board (1 players)"));
    }
}
