//! Shared fixtures: a repository built directly from player records and match history.

#![allow(dead_code)]

use std::cell::Cell;
use std::collections::HashSet;
use swiss_tournament::{MatchRecord, Player, PlayerId, Repository, RepositoryError};

pub fn player(id: PlayerId, wins: u32, matches: u32) -> Player {
    Player {
        id,
        name: format!("P{id}"),
        wins,
        matches,
        opponent_wins: 0,
    }
}

/// Repository over fixed records, so tests can set wins without replaying matches.
#[derive(Default)]
pub struct Fixture {
    pub players: Vec<Player>,
    pub matches: Vec<MatchRecord>,
    /// Number of `find_matches_between` calls answered.
    pub lookups: Cell<usize>,
}

impl Fixture {
    pub fn new(players: Vec<Player>) -> Self {
        Self {
            players,
            ..Self::default()
        }
    }

    pub fn played(mut self, winner: PlayerId, loser: PlayerId) -> Self {
        self.matches.push(MatchRecord::new(winner, loser));
        self
    }

    pub fn had_bye(mut self, winner: PlayerId) -> Self {
        self.matches.push(MatchRecord::bye(winner));
        self
    }
}

impl Repository for Fixture {
    fn list_players(&self) -> Result<Vec<Player>, RepositoryError> {
        Ok(self.players.clone())
    }

    fn find_matches_between(&self, a: PlayerId, b: PlayerId) -> Result<Vec<MatchRecord>, RepositoryError> {
        self.lookups.set(self.lookups.get() + 1);
        Ok(self.matches.iter().filter(|m| m.is_between(a, b)).copied().collect())
    }

    fn player_with_max_matches_least_wins(
        &self,
        excluding_prior_bye_recipients: bool,
    ) -> Result<Option<Player>, RepositoryError> {
        let byed: HashSet<PlayerId> = if excluding_prior_bye_recipients {
            self.matches.iter().filter(|m| m.is_bye()).map(|m| m.winner).collect()
        } else {
            HashSet::new()
        };
        let Some(max) = self.players.iter().map(|p| p.matches).max() else {
            return Ok(None);
        };
        Ok(self
            .players
            .iter()
            .filter(|p| p.matches == max && !byed.contains(&p.id))
            .min_by_key(|p| (p.wins, p.id))
            .cloned())
    }
}

/// Repository whose history lookups always fail.
pub struct Unreachable(pub Vec<Player>);

impl Repository for Unreachable {
    fn list_players(&self) -> Result<Vec<Player>, RepositoryError> {
        Ok(self.0.clone())
    }

    fn find_matches_between(&self, _a: PlayerId, _b: PlayerId) -> Result<Vec<MatchRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("history offline".to_string()))
    }

    fn player_with_max_matches_least_wins(&self, _excluding: bool) -> Result<Option<Player>, RepositoryError> {
        Err(RepositoryError::Unavailable("history offline".to_string()))
    }
}
