//! Deck generation.
//!
//! Each token is dealt twice, the pairs are shuffled with Fisher-Yates,
//! then ids are assigned by position so `deck[id.index()].id == id`.

use serde::{Deserialize, Serialize};

use super::card::Card;
use super::token::TokenId;
use crate::core::entity::CardId;
use crate::core::rng::GameRng;

/// Ordered cards on the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Deal a fresh, face-down deck with two cards per token.
    ///
    /// The token slice is only read; calling this again with the same
    /// RNG produces a new order.
    pub fn deal(tokens: &[TokenId], rng: &mut GameRng) -> Self {
        let mut faces: Vec<TokenId> = tokens.iter().flat_map(|&t| [t, t]).collect();
        rng.shuffle(&mut faces);

        let cards = faces
            .into_iter()
            .enumerate()
            .map(|(index, token)| Card::new(CardId::from(index), token))
            .collect();

        Self { cards }
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the deck has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of pairs dealt.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.cards.len() / 2
    }

    /// Get a card by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id.index())
    }

    pub(crate) fn get_mut(&mut self, id: CardId) -> Option<&mut Card> {
        self.cards.get_mut(id.index())
    }

    /// All cards in grid order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Positions of the two cards showing `token`.
    #[must_use]
    pub fn positions_of(&self, token: TokenId) -> Vec<CardId> {
        self.cards
            .iter()
            .filter(|c| c.token == token)
            .map(|c| c.id)
            .collect()
    }

    /// Count of cards currently face-up.
    #[must_use]
    pub fn face_up_count(&self) -> usize {
        self.cards.iter().filter(|c| c.face_up).count()
    }

    /// Is every card matched?
    #[must_use]
    pub fn all_matched(&self) -> bool {
        self.cards.iter().all(|c| c.matched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn tokens(n: u16) -> Vec<TokenId> {
        (0..n).map(TokenId).collect()
    }

    #[test]
    fn test_deal_size() {
        let mut rng = GameRng::new(42);
        let deck = Deck::deal(&tokens(9), &mut rng);

        assert_eq!(deck.len(), 18);
        assert_eq!(deck.pair_count(), 9);
    }

    #[test]
    fn test_each_token_twice() {
        let mut rng = GameRng::new(42);
        let deck = Deck::deal(&tokens(6), &mut rng);

        let mut counts: HashMap<TokenId, usize> = HashMap::new();
        for card in deck.cards() {
            *counts.entry(card.token).or_default() += 1;
        }

        assert_eq!(counts.len(), 6);
        assert!(counts.values().all(|&n| n == 2));
    }

    #[test]
    fn test_ids_match_positions() {
        let mut rng = GameRng::new(1);
        let deck = Deck::deal(&tokens(4), &mut rng);

        for (index, card) in deck.cards().iter().enumerate() {
            assert_eq!(card.id.index(), index);
            assert_eq!(deck.get(card.id), Some(card));
        }
        assert!(deck.get(CardId(8)).is_none());
    }

    #[test]
    fn test_dealt_face_down() {
        let mut rng = GameRng::new(5);
        let deck = Deck::deal(&tokens(4), &mut rng);

        assert_eq!(deck.face_up_count(), 0);
        assert!(deck.cards().iter().all(|c| !c.matched));
        assert!(!deck.all_matched());
    }

    #[test]
    fn test_repeated_deals_differ() {
        let mut rng = GameRng::new(42);
        let input = tokens(9);

        let first = Deck::deal(&input, &mut rng);
        let second = Deck::deal(&input, &mut rng);

        assert_ne!(first, second);
        assert_eq!(input, tokens(9));
    }

    #[test]
    fn test_positions_of() {
        let mut rng = GameRng::new(42);
        let deck = Deck::deal(&tokens(3), &mut rng);

        let positions = deck.positions_of(TokenId(2));
        assert_eq!(positions.len(), 2);
        assert!(positions.iter().all(|&id| deck.get(id).map(|c| c.token) == Some(TokenId(2))));
    }

    #[test]
    fn test_empty_deal() {
        let mut rng = GameRng::new(42);
        let deck = Deck::deal(&[], &mut rng);

        assert!(deck.is_empty());
        assert_eq!(deck.pair_count(), 0);
    }
}
