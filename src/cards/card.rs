//! Card state on the table.

use serde::{Deserialize, Serialize};

use super::token::TokenId;
use crate::core::entity::CardId;

/// A single card in the grid.
///
/// `face_up` and `matched` are independent flags, but the state machine
/// keeps matched cards face-up, so a matched card is never selectable.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Grid position and identity.
    pub id: CardId,

    /// Symbol on the face.
    pub token: TokenId,

    /// Is the face showing?
    pub face_up: bool,

    /// Has this card been paired?
    pub matched: bool,
}

impl Card {
    /// Create a face-down, unmatched card.
    #[must_use]
    pub fn new(id: CardId, token: TokenId) -> Self {
        Self {
            id,
            token,
            face_up: false,
            matched: false,
        }
    }

    /// Can a player flip this card right now?
    #[must_use]
    pub fn is_selectable(&self) -> bool {
        !self.face_up && !self.matched
    }

    /// Does this card show the same symbol as `other`?
    #[must_use]
    pub fn pairs_with(&self, other: &Card) -> bool {
        self.id != other.id && self.token == other.token
    }

    pub(crate) fn flip_up(&mut self) {
        self.face_up = true;
    }

    pub(crate) fn flip_down(&mut self) {
        self.face_up = false;
    }

    pub(crate) fn mark_matched(&mut self) {
        self.face_up = true;
        self.matched = true;
    }
}
