use std::collections::HashMap;

use swiss_tournament::database::{Pairing, Player};
use swiss_tournament::{StoreError, TournamentStore};

fn fresh_store() -> TournamentStore {
    let store = TournamentStore::in_memory().expect("in-memory store");
    store.delete_matches().unwrap();
    store.delete_players().unwrap();
    store
}

fn register_all(store: &TournamentStore, names: &[&str]) -> Vec<Player> {
    names
        .iter()
        .map(|name| store.register_player(name).unwrap())
        .collect()
}

fn paired_ids(pairings: &[Pairing]) -> Vec<i32> {
    let mut ids: Vec<i32> = pairings
        .iter()
        .flat_map(|p| [p.player_id1, p.player_id2])
        .collect();
    ids.sort();
    ids
}

#[test]
fn reset_leaves_empty_tournament() {
    let store = fresh_store();

    assert_eq!(store.count_players().unwrap(), 0);
    assert!(store.player_standings().unwrap().is_empty());
    assert!(store.swiss_pairings().unwrap().is_empty());
}

#[test]
fn registration_counts_and_duplicate_names() {
    let store = fresh_store();

    let first = store.register_player("Chandra Nalaar").unwrap();
    assert_eq!(store.count_players().unwrap(), 1);

    let second = store.register_player("Chandra Nalaar").unwrap();
    assert_eq!(store.count_players().unwrap(), 2);
    assert_ne!(first.id, second.id);

    let standings = store.player_standings().unwrap();
    assert_eq!(standings.len(), 2);
    assert!(standings.iter().all(|s| s.wins == 0 && s.matches == 0));
}

#[test]
fn matches_equal_wins_plus_losses() {
    let store = fresh_store();
    let players = register_all(&store, &["A", "B", "C", "D", "E"]);
    let results = [(0, 1), (2, 3), (0, 2), (4, 1), (3, 4), (0, 4)];

    for (winner, loser) in results {
        store.report_match(players[winner].id, players[loser].id).unwrap();
    }

    let mut losses: HashMap<i32, i32> = HashMap::new();
    for recorded in store.matches().unwrap() {
        *losses.entry(recorded.loser_id).or_default() += 1;
    }

    let standings = store.player_standings().unwrap();
    assert_eq!(standings.len(), players.len());
    for standing in &standings {
        let lost = losses.get(&standing.player_id).copied().unwrap_or(0);
        assert_eq!(standing.matches, standing.wins + lost);
    }
    assert!(standings.windows(2).all(|pair| pair[0].wins >= pair[1].wins));
}

#[test]
fn first_round_pairs_everyone_once() {
    let store = fresh_store();
    let players = register_all(&store, &["Twilight Sparkle", "Fluttershy", "Applejack", "Pinkie Pie"]);

    let pairings = store.swiss_pairings().unwrap();

    assert_eq!(pairings.len(), 2);
    let mut expected: Vec<i32> = players.iter().map(|p| p.id).collect();
    expected.sort();
    assert_eq!(paired_ids(&pairings), expected);
}

#[test]
fn winners_each_meet_a_distinct_loser() {
    let store = fresh_store();
    let players = register_all(&store, &["A", "B", "C", "D"]);
    let (a, b, c, d) = (&players[0], &players[1], &players[2], &players[3]);

    store.report_match(a.id, b.id).unwrap();
    store.report_match(c.id, d.id).unwrap();

    let standings = store.player_standings().unwrap();
    let summary: Vec<(i32, i32, i32)> = standings
        .iter()
        .map(|s| (s.player_id, s.wins, s.matches))
        .collect();
    assert_eq!(
        summary,
        vec![(a.id, 1, 1), (c.id, 1, 1), (b.id, 0, 1), (d.id, 0, 1)]
    );

    let pairings = store.swiss_pairings().unwrap();
    let pairs: Vec<(i32, i32)> = pairings
        .iter()
        .map(|p| (p.player_id1, p.player_id2))
        .collect();
    assert_eq!(pairs, vec![(a.id, b.id), (c.id, d.id)]);
    assert_eq!(pairings[0].player_name2, "B");
    assert_eq!(pairings[1].player_name2, "D");
}

#[test]
fn invalid_reports_are_typed_and_harmless() {
    let store = fresh_store();
    let players = register_all(&store, &["A", "B"]);

    let err = store.report_match(players[0].id, players[0].id).unwrap_err();
    assert!(matches!(err, StoreError::SelfMatch(_)));
    assert!(err.is_validation());

    let err = store.report_match(players[1].id, 12_345).unwrap_err();
    assert!(matches!(err, StoreError::UnknownPlayer(12_345)));

    assert!(store.matches().unwrap().is_empty());
    assert!(store.player_standings().unwrap().iter().all(|s| s.matches == 0));
}

#[test]
fn store_persists_across_reopen() {
    let path = std::env::temp_dir().join(format!("swiss_tournament_test_{}.db", std::process::id()));
    let _ = std::fs::remove_file(&path);

    let mut config = swiss_tournament::config::AppConfig::new();
    config.store.database_path = path.to_string_lossy().into_owned();

    {
        let store = TournamentStore::open(&config).unwrap();
        let players = register_all(&store, &["Ann", "Ben"]);
        store.report_match(players[1].id, players[0].id).unwrap();
    }

    let reopened = TournamentStore::open(&config).unwrap();
    assert_eq!(reopened.count_players().unwrap(), 2);
    let leader = &reopened.player_standings().unwrap()[0];
    assert_eq!((leader.player_name.as_str(), leader.wins), ("Ben", 1));

    drop(reopened);
    let _ = std::fs::remove_file(&path);
}
