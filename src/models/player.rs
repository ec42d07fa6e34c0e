//! Player record as held by the store.

use serde::{Deserialize, Serialize};

/// Unique identifier for a player, assigned by the store (serial, starting at 1).
pub type PlayerId = i64;

/// A registered player and their running record.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub wins: u32,
    /// Matches actually played. A bye adds a win but not a match.
    pub matches: u32,
    /// Sum of the win totals of this player's opponents at the time each match was played.
    pub opponent_wins: u32,
}

impl Player {
    /// Create a new player with the given id and name. Counters start at zero.
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            wins: 0,
            matches: 0,
            opponent_wins: 0,
        }
    }

    /// Record a played match won against an opponent who had `opponent_wins` wins.
    pub fn record_win(&mut self, opponent_wins: u32) {
        self.wins += 1;
        self.matches += 1;
        self.opponent_wins += opponent_wins;
    }

    /// Record a played match lost against an opponent who had `opponent_wins` wins.
    pub fn record_loss(&mut self, opponent_wins: u32) {
        self.matches += 1;
        self.opponent_wins += opponent_wins;
    }

    /// Record a bye: a free win, no match played.
    pub fn record_bye(&mut self) {
        self.wins += 1;
    }
}
