//! Data structures for a Swiss tournament: players, results, standings, pairings.

mod match_record;
mod pairing;
mod player;
mod standing;
mod tournament;

pub use match_record::MatchRecord;
pub use pairing::{Opponent, Pairing, Seat, BYE_ID, BYE_NAME};
pub use player::{Player, PlayerId};
pub use standing::Standing;
pub use tournament::{Tournament, TournamentId};
