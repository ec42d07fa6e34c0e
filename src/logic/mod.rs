//! Tournament logic: standings, pairings, round entry points, roster setup.

mod pairings;
mod round;
mod setup;
mod standings;

pub use pairings::compute_pairings;
pub use round::{player_standings, swiss_pairings};
pub use setup::import_roster;
pub use standings::compute_standings;
