//! Swiss tournament organizer: library with models, stores and pairing logic.

pub mod logic;
pub mod models;
pub mod repository;

pub use logic::{compute_pairings, compute_standings, import_roster, player_standings, swiss_pairings};
pub use models::{
    MatchRecord, Opponent, Pairing, Player, PlayerId, Seat, Standing, Tournament, TournamentId, BYE_ID,
    BYE_NAME,
};
pub use repository::{FileStore, MemoryRepository, Repository, RepositoryError, Snapshot};
