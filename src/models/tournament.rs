//! A hosted tournament: its roster, match history, and round helpers.

use crate::logic::{compute_pairings, compute_standings};
use crate::models::pairing::Pairing;
use crate::models::player::PlayerId;
use crate::models::standing::Standing;
use crate::repository::{MemoryRepository, RepositoryError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// One Swiss tournament held in memory.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub created_at: DateTime<Utc>,
    pub repository: MemoryRepository,
}

impl Default for Tournament {
    fn default() -> Self {
        Self::new()
    }
}

/// Order-independent key for one result or pairing: the two ids, the bye as `None`.
fn result_key(a: PlayerId, b: Option<PlayerId>) -> (PlayerId, Option<PlayerId>) {
    match b {
        Some(b) if b < a => (b, Some(a)),
        _ => (a, b),
    }
}

impl Tournament {
    /// Create an empty tournament.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            repository: MemoryRepository::new(),
        }
    }

    /// Rounds played so far, taken from the match history.
    pub fn round(&self) -> u32 {
        self.repository.rounds_played()
    }

    pub fn add_player(&mut self, name: &str) -> Result<PlayerId, RepositoryError> {
        self.repository.register_player(name)
    }

    /// Report the results of the current round at once.
    ///
    /// `results` must cover exactly the current pairings (either side may be listed as the
    /// winner; a bye is reported with no loser). Nothing is applied otherwise.
    pub fn report_round(&mut self, results: &[(PlayerId, Option<PlayerId>)]) -> Result<(), RepositoryError> {
        let pairings = self.pairings()?;
        let mut expected: Vec<_> = pairings
            .iter()
            .map(|p| match p.ids() {
                (a, _) if p.is_bye() => (a, None),
                (a, b) => result_key(a, Some(b)),
            })
            .collect();
        let mut reported: Vec<_> = results.iter().map(|&(w, l)| result_key(w, l)).collect();
        expected.sort_unstable();
        reported.sort_unstable();
        if results.is_empty() || expected != reported {
            return Err(RepositoryError::RoundMismatch {
                expected: pairings.len(),
                reported: results.len(),
            });
        }

        let mut next = self.repository.clone();
        for &(winner, loser) in results {
            next.report_match(winner, loser)?;
        }
        self.repository = next;
        log::info!("Tournament {}: round {} reported ({} result(s))", self.id, self.round(), results.len());
        Ok(())
    }

    /// Report a single result, outside any round check.
    pub fn report_match(&mut self, winner: PlayerId, loser: Option<PlayerId>) -> Result<(), RepositoryError> {
        self.repository.report_match(winner, loser)
    }

    /// Clear players and history, back to an empty tournament with the same id.
    pub fn reset(&mut self) {
        self.repository.delete_players();
    }

    pub fn delete_matches(&mut self) {
        self.repository.delete_matches();
    }

    pub fn standings(&self) -> Vec<Standing> {
        compute_standings(self.repository.players())
    }

    pub fn pairings(&self) -> Result<Vec<Pairing>, RepositoryError> {
        compute_pairings(&self.standings(), &self.repository)
    }
}
