//! Ranked, read-only view of a player.

use crate::models::player::{Player, PlayerId};
use serde::{Deserialize, Serialize};

/// A player's line in the standings table. Recomputed every round, never stored.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Standing {
    pub id: PlayerId,
    pub name: String,
    pub wins: u32,
    pub matches: u32,
    pub opponent_wins: u32,
}

impl Standing {
    pub fn from_player(p: &Player) -> Self {
        Self {
            id: p.id,
            name: p.name.clone(),
            wins: p.wins,
            matches: p.matches,
            opponent_wins: p.opponent_wins,
        }
    }
}

impl From<&Player> for Standing {
    fn from(p: &Player) -> Self {
        Self::from_player(p)
    }
}
