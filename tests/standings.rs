//! Integration tests for standings: ordering and tie-breaks.

mod common;

use common::player;
use swiss_tournament::{compute_standings, player_standings, MemoryRepository, Player};

fn ids(players: &[Player]) -> Vec<i64> {
    compute_standings(players).iter().map(|s| s.id).collect()
}

#[test]
fn sorted_by_wins_descending() {
    let players = vec![player(1, 0, 2), player(2, 2, 2), player(3, 1, 2), player(4, 2, 2)];
    assert_eq!(ids(&players), vec![2, 4, 3, 1]);
}

#[test]
fn equal_wins_broken_by_opponent_wins() {
    let mut a = player(1, 1, 2);
    a.opponent_wins = 1;
    let mut b = player(2, 1, 2);
    b.opponent_wins = 3;
    let c = player(3, 2, 2);
    assert_eq!(ids(&[a, b, c]), vec![3, 2, 1]);
}

#[test]
fn full_ties_keep_registration_order() {
    let players = vec![player(7, 1, 1), player(3, 1, 1), player(5, 1, 1)];
    assert_eq!(ids(&players), vec![7, 3, 5]);
}

#[test]
fn standings_are_ordered_for_mixed_records() {
    let mut players = Vec::new();
    for id in 1..=20 {
        let mut p = player(id, (id as u32 * 7) % 4, 3);
        p.opponent_wins = (id as u32 * 5) % 6;
        players.push(p);
    }
    let standings = compute_standings(&players);
    assert_eq!(standings.len(), players.len());
    for w in standings.windows(2) {
        assert!(w[0].wins >= w[1].wins);
        if w[0].wins == w[1].wins {
            assert!(w[0].opponent_wins >= w[1].opponent_wins);
        }
    }
}

#[test]
fn empty_roster_has_empty_standings() {
    assert!(compute_standings(&[]).is_empty());
}

#[test]
fn standings_copy_the_player_record() {
    let mut p = player(4, 2, 3);
    p.opponent_wins = 5;
    let s = &compute_standings(&[p])[0];
    assert_eq!((s.id, s.name.as_str(), s.wins, s.matches, s.opponent_wins), (4, "P4", 2, 3, 5));
}

#[test]
fn standings_read_from_the_store() {
    let mut repo = MemoryRepository::new();
    let ann = repo.register_player("Ann").unwrap();
    let ben = repo.register_player("Ben").unwrap();
    repo.report_match(ben, Some(ann)).unwrap();

    let standings = player_standings(&repo).unwrap();
    assert_eq!(standings[0].id, ben);
    assert_eq!(standings[0].wins, 1);
    assert_eq!(standings[1].id, ann);
    assert_eq!(standings[1].matches, 1);
}
