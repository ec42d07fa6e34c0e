//! In-memory roster and match history.

use crate::models::{MatchRecord, Player, PlayerId};
use crate::repository::{Repository, RepositoryError};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Players in registration order plus every reported result.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MemoryRepository {
    players: Vec<Player>,
    matches: Vec<MatchRecord>,
    /// Next id handed out by `register_player`. Never reused, even after `delete_players`.
    next_id: PlayerId,
}

impl Default for MemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self {
            players: Vec::new(),
            matches: Vec::new(),
            next_id: 1,
        }
    }

    /// Registered players, in registration order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Every reported result, oldest first.
    pub fn matches(&self) -> &[MatchRecord] {
        &self.matches
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    fn player_mut(&mut self, id: PlayerId) -> Result<&mut Player, RepositoryError> {
        self.players
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(RepositoryError::PlayerNotFound(id))
    }

    pub fn count_players(&self) -> usize {
        self.players.len()
    }

    /// Register a player and return the assigned id. Names are trimmed and need not be unique.
    pub fn register_player(&mut self, name: &str) -> Result<PlayerId, RepositoryError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RepositoryError::EmptyName);
        }
        let id = self.next_id;
        self.next_id += 1;
        self.players.push(Player::new(id, name));
        log::debug!("Registered player {} ({})", id, name);
        Ok(id)
    }

    /// Remove all match records. Player records keep their counters.
    pub fn delete_matches(&mut self) {
        let removed = self.matches.len();
        self.matches.clear();
        log::info!("Deleted {} match record(s)", removed);
    }

    /// Remove all players, and the match records that refer to them.
    pub fn delete_players(&mut self) {
        let removed = self.players.len();
        self.players.clear();
        self.matches.clear();
        log::info!("Deleted {} player(s)", removed);
    }

    /// Record the outcome of one match. `loser == None` reports a bye for `winner`.
    ///
    /// A played match adds a win and a match to the winner and a match to the loser; each side
    /// adds the other's win total from before the match to its opponent-win score. A bye adds
    /// a win only.
    pub fn report_match(&mut self, winner: PlayerId, loser: Option<PlayerId>) -> Result<(), RepositoryError> {
        let Some(loser) = loser else {
            self.player_mut(winner)?.record_bye();
            self.matches.push(MatchRecord::bye(winner));
            log::debug!("Player {} receives a bye", winner);
            return Ok(());
        };
        if winner == loser {
            return Err(RepositoryError::SelfMatch(winner));
        }
        // Both players must exist before either record changes.
        let winner_wins = self.player_mut(winner)?.wins;
        let loser_wins = self.player_mut(loser)?.wins;

        self.player_mut(winner)?.record_win(loser_wins);
        self.player_mut(loser)?.record_loss(winner_wins);
        self.matches.push(MatchRecord::new(winner, loser));
        log::debug!("Player {} beat player {}", winner, loser);
        Ok(())
    }

    /// Ids of every player who already received a bye.
    pub fn bye_recipients(&self) -> HashSet<PlayerId> {
        self.matches
            .iter()
            .filter(|m| m.is_bye())
            .map(|m| m.winner)
            .collect()
    }

    /// Most rounds any player has taken part in, a bye counting as a round.
    /// A round counts as soon as one of its results is reported.
    pub fn rounds_played(&self) -> u32 {
        let mut byes: HashMap<PlayerId, u32> = HashMap::new();
        for m in self.matches.iter().filter(|m| m.is_bye()) {
            *byes.entry(m.winner).or_default() += 1;
        }
        self.players
            .iter()
            .map(|p| p.matches + byes.get(&p.id).copied().unwrap_or(0))
            .max()
            .unwrap_or(0)
    }
}

impl Repository for MemoryRepository {
    fn list_players(&self) -> Result<Vec<Player>, RepositoryError> {
        Ok(self.players.clone())
    }

    fn find_matches_between(&self, a: PlayerId, b: PlayerId) -> Result<Vec<MatchRecord>, RepositoryError> {
        Ok(self
            .matches
            .iter()
            .filter(|m| m.is_between(a, b))
            .copied()
            .collect())
    }

    fn player_with_max_matches_least_wins(
        &self,
        excluding_prior_bye_recipients: bool,
    ) -> Result<Option<Player>, RepositoryError> {
        let Some(max_matches) = self.players.iter().map(|p| p.matches).max() else {
            return Ok(None);
        };
        let excluded = if excluding_prior_bye_recipients {
            self.bye_recipients()
        } else {
            HashSet::new()
        };
        Ok(self
            .players
            .iter()
            .filter(|p| p.matches == max_matches && !excluded.contains(&p.id))
            .min_by_key(|p| (p.wins, p.id))
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo_with(names: &[&str]) -> MemoryRepository {
        let mut repo = MemoryRepository::new();
        for name in names {
            repo.register_player(name).unwrap();
        }
        repo
    }

    #[test]
    fn ids_are_serial_and_not_reused() {
        let mut repo = repo_with(&["Ann", "Ben"]);
        assert_eq!(repo.players()[0].id, 1);
        assert_eq!(repo.players()[1].id, 2);
        repo.delete_players();
        assert_eq!(repo.register_player("Cat").unwrap(), 3);
    }

    #[test]
    fn report_rejects_unknown_loser_without_touching_winner() {
        let mut repo = repo_with(&["Ann"]);
        assert_eq!(
            repo.report_match(1, Some(9)),
            Err(RepositoryError::PlayerNotFound(9))
        );
        assert_eq!(repo.player(1).unwrap().wins, 0);
        assert!(repo.matches().is_empty());
    }

    #[test]
    fn bye_candidate_breaks_ties_by_lowest_id() {
        let repo = repo_with(&["Ann", "Ben", "Cat"]);
        let p = repo.player_with_max_matches_least_wins(true).unwrap().unwrap();
        assert_eq!(p.id, 1);
    }

    #[test]
    fn bye_candidate_skips_prior_recipients_only_when_asked() {
        let mut repo = repo_with(&["Ann", "Ben", "Cat"]);
        repo.report_match(3, None).unwrap();
        repo.report_match(1, Some(2)).unwrap();
        // Ann and Ben played one match; Cat played none, so only Ann and Ben are caught up.
        let p = repo.player_with_max_matches_least_wins(true).unwrap().unwrap();
        assert_eq!(p.id, 2);

        let mut repo = repo_with(&["Ann", "Ben"]);
        repo.report_match(2, None).unwrap();
        repo.report_match(1, None).unwrap();
        assert_eq!(repo.player_with_max_matches_least_wins(true).unwrap(), None);
        assert_eq!(
            repo.player_with_max_matches_least_wins(false).unwrap().map(|p| p.id),
            Some(1)
        );
    }

    #[test]
    fn empty_store_has_no_bye_candidate() {
        let repo = MemoryRepository::new();
        assert_eq!(repo.player_with_max_matches_least_wins(true).unwrap(), None);
    }
}
