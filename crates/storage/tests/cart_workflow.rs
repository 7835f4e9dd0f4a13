use chrono::{Duration, TimeZone, Utc};
use storage::SESSION_NAMESPACE;
use storage::cart::{CartEntry, ScoutCart};
use storage::models::{DataSnapshot, Play, Player, Position, Score};
use storage::repository::memory::{InMemorySessionStore, StaticDataSource};
use storage::services::metrics::rank_players;
use storage::services::snapshot::load_snapshot;
use storage::traits::SessionStore;

fn snapshot() -> DataSnapshot {
    let players = vec![
        Player {
            id: 1,
            name: "Garrett Wilson".to_string(),
            team: "Jets".to_string(),
            position: Position::WideReceiver,
            number: 5,
            avatar_url: None,
        },
        Player {
            id: 2,
            name: "Patrick Surtain II".to_string(),
            team: "Broncos".to_string(),
            position: Position::DefensiveBack,
            number: 2,
            avatar_url: Some("https://img.example/surtain.png".to_string()),
        },
        Player {
            id: 3,
            name: "Puka Nacua".to_string(),
            team: "Rams".to_string(),
            position: Position::WideReceiver,
            number: 17,
            avatar_url: None,
        },
    ];

    let start = Utc.with_ymd_and_hms(2025, 10, 19, 17, 0, 0).unwrap();
    let plays = vec![Play {
        id: 100,
        game_id: 9,
        quarter: 2,
        time_remaining: "04:12".to_string(),
        down: 3,
        distance: 7,
        defensive_scheme: Some("Cover 3".to_string()),
        created_at: start,
    }];

    let grades = [(1, 9.0, 8.0, 9.0), (2, 8.0, 8.0, 7.0), (3, 6.0, 5.0, 6.0), (1, 7.0, 9.0, 8.0)];
    let scores = grades
        .iter()
        .enumerate()
        .map(|(i, &(player_id, release, fidelity, leverage))| Score {
            id: i as i64 + 1,
            created_at: start + Duration::seconds(i as i64),
            play_id: 100,
            player_id,
            release_speed: Some(release),
            route_fidelity: Some(fidelity),
            leverage: Some(leverage),
            per_10_score: Some(storage::services::metrics::compute_composite(
                release, fidelity, leverage,
            )),
            notes: None,
        })
        .collect();

    DataSnapshot::new(players, plays, scores)
}

fn entries_by_id(snapshot: &DataSnapshot) -> Vec<CartEntry> {
    rank_players(&snapshot.players, &snapshot.scores)
        .iter()
        .map(|p| CartEntry::from_ranked(p, vec![format!("{} archetype", p.player.position)]))
        .collect()
}

#[tokio::test]
async fn test_ranked_players_flow_into_saved_session() {
    let source = StaticDataSource::new(snapshot());
    let snapshot = load_snapshot(&source).await.unwrap();
    let entries = entries_by_id(&snapshot);

    let mut cart = ScoutCart::new();
    for entry in &entries {
        assert!(cart.add_player(entry.clone()));
    }
    cart.update_notes(2, "Shadow the WR1");
    cart.rename("Week 7 Board");

    let stats = cart.stats();
    assert_eq!(stats.total_players, 3);
    assert_eq!(stats.by_position.get(&Position::WideReceiver), Some(&2));

    let csv = cart.export_delimited().unwrap();
    assert_eq!(csv.lines().count(), 4);
    assert!(csv.lines().nth(1).unwrap().starts_with("\"Garrett Wilson\",\"WR\",\"5\",\"Jets\""));

    let store = InMemorySessionStore::new();
    let session_id = cart.save_session(&store).await.unwrap();
    let saved = store.list(SESSION_NAMESPACE).await.unwrap();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].id, session_id);
    assert_eq!(saved[0].name, "Week 7 Board");
    let notes: Vec<&str> = saved[0].players.iter().map(|p| p.notes.as_str()).collect();
    assert_eq!(notes, vec!["", "Shadow the WR1", ""]);
}

#[test]
fn test_state_depends_only_on_net_membership() {
    let snapshot = snapshot();
    let entries = entries_by_id(&snapshot);
    let entry = |id: i64| entries.iter().find(|e| e.id == id).unwrap().clone();

    let mut replayed = ScoutCart::new();
    replayed.add_player(entry(1));
    replayed.add_player(entry(2));
    replayed.remove_player(1);
    replayed.add_player(entry(3));
    replayed.add_player(entry(2));
    replayed.remove_player(3);
    replayed.remove_player(99);
    replayed.add_player(entry(1));

    let mut net = ScoutCart::new();
    net.add_player(entry(2));
    net.add_player(entry(1));

    let ids = |cart: &ScoutCart| cart.entries().iter().map(|e| e.id).collect::<Vec<_>>();
    assert_eq!(ids(&replayed), ids(&net));
    assert_eq!(replayed.stats(), net.stats());
}

#[test]
fn test_cart_snapshot_survives_new_scores() {
    let first = snapshot();
    let mut cart = ScoutCart::new();
    let top = rank_players(&first.players, &first.scores).remove(0);
    let original_average = top.average_per_10;
    cart.add_player(CartEntry::from_ranked(&top, Vec::new()));

    let mut scores = first.scores.to_vec();
    scores.push(Score {
        id: 99,
        created_at: Utc::now(),
        play_id: 100,
        player_id: top.id(),
        release_speed: Some(1.0),
        route_fidelity: Some(1.0),
        leverage: Some(1.0),
        per_10_score: Some(1.05),
        notes: None,
    });
    let refreshed = rank_players(&first.players, &scores);
    assert!(refreshed.iter().any(|p| p.average_per_10 < original_average));

    assert_eq!(cart.get(top.id()).unwrap().avg_per_10, original_average);
}
