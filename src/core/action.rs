//! Player actions and the per-game history.
//!
//! The front-end turns clicks into `Action`s. Accepted selections are
//! recorded so a game dealt from a fixed seed can be replayed exactly.

use serde::{Deserialize, Serialize};

use super::entity::CardId;

/// Something the player did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Flip a card.
    Select(CardId),
    /// Deal a new game.
    Reset,
}

/// A recorded action with the game it belonged to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The action taken.
    pub action: Action,

    /// Deal the action was applied to.
    pub epoch: u64,

    /// Position within the epoch's history.
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(action: Action, epoch: u64, sequence: u32) -> Self {
        Self {
            action,
            epoch,
            sequence,
        }
    }
}
