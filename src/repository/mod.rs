//! Data access for the pairing engine.
//!
//! The engine only ever reads through [`Repository`]. Mutations (registration,
//! result reporting, resets) live on the concrete stores:
//! - [`MemoryRepository`]: in-memory roster and match history
//! - [`FileStore`]: JSON snapshot on disk, mutated through scoped sessions

mod file;
mod memory;

pub use file::{FileStore, Snapshot};
pub use memory::MemoryRepository;

use crate::models::{MatchRecord, Player, PlayerId};

/// Errors raised by a store. The engine propagates them unchanged.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RepositoryError {
    /// No player with this id is registered.
    PlayerNotFound(PlayerId),
    /// A match was reported with the same player on both sides.
    SelfMatch(PlayerId),
    /// Player names must contain something other than whitespace.
    EmptyName,
    /// Round results do not match the current pairings one for one.
    RoundMismatch { expected: usize, reported: usize },
    /// Underlying file could not be read or written.
    Io(String),
    /// Stored snapshot could not be decoded.
    Corrupt(String),
    /// Roster import failed.
    Import(String),
    /// Store cannot answer right now (lock poisoned, backend gone).
    Unavailable(String),
}

impl std::fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RepositoryError::PlayerNotFound(id) => write!(f, "Player {} not found", id),
            RepositoryError::SelfMatch(id) => write!(f, "Player {} cannot play against themselves", id),
            RepositoryError::EmptyName => write!(f, "Player name must not be empty"),
            RepositoryError::RoundMismatch { expected, reported } => write!(
                f,
                "Round results must match the {} current pairing(s) (got {} result(s))",
                expected, reported
            ),
            RepositoryError::Io(e) => write!(f, "Storage I/O error: {}", e),
            RepositoryError::Corrupt(e) => write!(f, "Stored tournament is corrupt: {}", e),
            RepositoryError::Import(e) => write!(f, "Roster import failed: {}", e),
            RepositoryError::Unavailable(e) => write!(f, "Store unavailable: {}", e),
        }
    }
}

impl std::error::Error for RepositoryError {}

impl From<std::io::Error> for RepositoryError {
    fn from(e: std::io::Error) -> Self {
        RepositoryError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for RepositoryError {
    fn from(e: serde_json::Error) -> Self {
        RepositoryError::Corrupt(e.to_string())
    }
}

impl From<csv::Error> for RepositoryError {
    fn from(e: csv::Error) -> Self {
        RepositoryError::Import(e.to_string())
    }
}

/// Read-only queries the standings and pairing engines need.
pub trait Repository {
    /// All registered players, in registration order.
    fn list_players(&self) -> Result<Vec<Player>, RepositoryError>;

    /// Played matches between `a` and `b` in either direction. Bye records never match.
    fn find_matches_between(&self, a: PlayerId, b: PlayerId) -> Result<Vec<MatchRecord>, RepositoryError>;

    /// Among players with the highest matches-played count, the one with the fewest wins
    /// (lowest id on ties). With `excluding_prior_bye_recipients`, players who already had a
    /// bye are skipped. `None` when nobody qualifies.
    fn player_with_max_matches_least_wins(
        &self,
        excluding_prior_bye_recipients: bool,
    ) -> Result<Option<Player>, RepositoryError>;
}

impl<R: Repository + ?Sized> Repository for &R {
    fn list_players(&self) -> Result<Vec<Player>, RepositoryError> {
        (**self).list_players()
    }

    fn find_matches_between(&self, a: PlayerId, b: PlayerId) -> Result<Vec<MatchRecord>, RepositoryError> {
        (**self).find_matches_between(a, b)
    }

    fn player_with_max_matches_least_wins(
        &self,
        excluding_prior_bye_recipients: bool,
    ) -> Result<Option<Player>, RepositoryError> {
        (**self).player_with_max_matches_least_wins(excluding_prior_bye_recipients)
    }
}
