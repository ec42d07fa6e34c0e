//! Reported match outcomes.

use crate::models::player::PlayerId;
use serde::{Deserialize, Serialize};

/// One reported result. `loser == None` marks a bye.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub winner: PlayerId,
    pub loser: Option<PlayerId>,
}

impl MatchRecord {
    pub fn new(winner: PlayerId, loser: PlayerId) -> Self {
        Self {
            winner,
            loser: Some(loser),
        }
    }

    pub fn bye(winner: PlayerId) -> Self {
        Self {
            winner,
            loser: None,
        }
    }

    pub fn is_bye(&self) -> bool {
        self.loser.is_none()
    }

    /// True when this is a played match between `a` and `b`, in either direction.
    pub fn is_between(&self, a: PlayerId, b: PlayerId) -> bool {
        match self.loser {
            Some(loser) => (self.winner == a && loser == b) || (self.winner == b && loser == a),
            None => false,
        }
    }
}
