//! Card identification.
//!
//! Every card on the table has a unique `CardId`. Ids are assigned after the
//! deck is shuffled, so a card's id is also its position in the grid:
//!
//! ```
//! use memory_match::core::CardId;
//!
//! let id = CardId::new(5);
//! assert_eq!(id.index(), 5);
//! assert_eq!(id.to_string(), "Card(5)");
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a card in the current deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Grid position of this card.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<usize> for CardId {
    fn from(index: usize) -> Self {
        Self(index as u32)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id_index() {
        assert_eq!(CardId::new(0).index(), 0);
        assert_eq!(CardId::from(17usize), CardId(17));
    }

    #[test]
    fn test_card_id_ordering() {
        assert!(CardId(1) < CardId(2));
    }
}
