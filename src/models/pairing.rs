//! Pairings produced for a round.

use crate::models::player::PlayerId;
use crate::models::standing::Standing;
use serde::{Deserialize, Serialize};

/// Identifier reported for the bye "opponent". No player row carries it.
pub const BYE_ID: PlayerId = -1;

/// Display name reported for the bye "opponent".
pub const BYE_NAME: &str = "bye";

/// A player taking part in a pairing.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct Seat {
    pub id: PlayerId,
    pub name: String,
}

impl From<&Standing> for Seat {
    fn from(s: &Standing) -> Self {
        Self {
            id: s.id,
            name: s.name.clone(),
        }
    }
}

/// Who the first player faces this round.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Opponent {
    Player(Seat),
    Bye,
}

/// One pairing of the round: two players, or one player and the bye.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct Pairing {
    pub player: Seat,
    pub opponent: Opponent,
}

impl Pairing {
    pub fn new(first: &Standing, second: &Standing) -> Self {
        Self {
            player: first.into(),
            opponent: Opponent::Player(second.into()),
        }
    }

    pub fn bye(player: &Standing) -> Self {
        Self {
            player: player.into(),
            opponent: Opponent::Bye,
        }
    }

    pub fn is_bye(&self) -> bool {
        matches!(self.opponent, Opponent::Bye)
    }

    /// Both identifiers; the bye reports as [`BYE_ID`].
    pub fn ids(&self) -> (PlayerId, PlayerId) {
        match &self.opponent {
            Opponent::Player(o) => (self.player.id, o.id),
            Opponent::Bye => (self.player.id, BYE_ID),
        }
    }

    /// Flat `(id, name, id, name)` row, the bye reporting as ([`BYE_ID`], [`BYE_NAME`]).
    pub fn as_row(&self) -> (PlayerId, &str, PlayerId, &str) {
        match &self.opponent {
            Opponent::Player(o) => (self.player.id, &self.player.name, o.id, &o.name),
            Opponent::Bye => (self.player.id, &self.player.name, BYE_ID, BYE_NAME),
        }
    }
}
