//! Pair evaluation and transition outcomes.
//!
//! `GameState::select_card` reports what happened through `SelectOutcome`.
//! A mismatch does not turn the cards back itself; it hands the caller a
//! `PendingRevert` to fire once the delay has passed.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::cards::Deck;
use crate::core::entity::CardId;

/// Result of comparing two face-up cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PairVerdict {
    /// Same token.
    Match,
    /// Different tokens.
    Mismatch,
}

/// Compare the tokens of two cards.
///
/// Unknown ids never match.
#[must_use]
pub fn evaluate_pair(deck: &Deck, first: CardId, second: CardId) -> PairVerdict {
    match (deck.get(first), deck.get(second)) {
        (Some(a), Some(b)) if a.pairs_with(b) => PairVerdict::Match,
        _ => PairVerdict::Mismatch,
    }
}

/// A deferred "turn these two back over", tagged with the deal it belongs to.
///
/// Reverts from an earlier epoch are ignored when applied, so a reset while
/// one is pending cannot touch the new deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingRevert {
    /// Epoch of the deck the mismatch happened in.
    pub epoch: u64,

    /// The two mismatched cards, in selection order.
    pub cards: [CardId; 2],

    /// How long to wait before applying.
    pub delay: Duration,
}

/// What a card selection did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Nothing changed: locked, card unavailable, or two already up.
    Ignored,
    /// First card of a pair is now face-up.
    Flipped,
    /// Second card matched the first. `won` is set on the final pair.
    Matched {
        /// Did this pair finish the game?
        won: bool,
    },
    /// Second card did not match. The state stays locked until the
    /// revert is applied.
    Mismatched(PendingRevert),
}

impl SelectOutcome {
    /// Did the selection change any state?
    #[must_use]
    pub fn is_ignored(&self) -> bool {
        matches!(self, SelectOutcome::Ignored)
    }

    /// The revert to schedule, if this was a mismatch.
    #[must_use]
    pub fn pending_revert(&self) -> Option<PendingRevert> {
        match self {
            SelectOutcome::Mismatched(revert) => Some(*revert),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::TokenId;
    use crate::core::GameRng;

    fn deck() -> Deck {
        let mut rng = GameRng::new(42);
        Deck::deal(&[TokenId(0), TokenId(1)], &mut rng)
    }

    #[test]
    fn test_evaluate_match() {
        let deck = deck();
        let pair = deck.positions_of(TokenId(0));

        assert_eq!(evaluate_pair(&deck, pair[0], pair[1]), PairVerdict::Match);
    }

    #[test]
    fn test_evaluate_mismatch() {
        let deck = deck();
        let a = deck.positions_of(TokenId(0))[0];
        let b = deck.positions_of(TokenId(1))[0];

        assert_eq!(evaluate_pair(&deck, a, b), PairVerdict::Mismatch);
    }

    #[test]
    fn test_evaluate_same_card_or_unknown() {
        let deck = deck();

        assert_eq!(evaluate_pair(&deck, CardId(0), CardId(0)), PairVerdict::Mismatch);
        assert_eq!(evaluate_pair(&deck, CardId(0), CardId(99)), PairVerdict::Mismatch);
    }

    #[test]
    fn test_outcome_helpers() {
        let revert = PendingRevert {
            epoch: 0,
            cards: [CardId(0), CardId(1)],
            delay: Duration::from_millis(1000),
        };

        assert!(SelectOutcome::Ignored.is_ignored());
        assert!(!SelectOutcome::Flipped.is_ignored());
        assert_eq!(SelectOutcome::Mismatched(revert).pending_revert(), Some(revert));
        assert_eq!(SelectOutcome::Matched { won: false }.pending_revert(), None);
    }
}
