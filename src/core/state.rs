//! Game state and its transitions.
//!
//! ## Phases
//!
//! - `Idle`: zero or one card face-up, accepting clicks
//! - `Evaluating`: two cards face-up, locked until the outcome is applied
//! - `Won`: every pair found
//!
//! A match is committed inside the same `select_card` call that flipped the
//! second card, so `Evaluating` is only observable while a mismatch revert
//! is pending.
//!
//! ## Epochs
//!
//! Each deal has an epoch number. `reset()` bumps it, and reverts carry the
//! epoch they were produced in, so a revert that outlives its deck is
//! dropped instead of flipping cards in the new one.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::action::{Action, ActionRecord};
use super::config::GameConfig;
use super::entity::CardId;
use super::error::ConfigError;
use super::rng::GameRng;
use crate::cards::{Card, Deck};
use crate::rules::{evaluate_pair, PairVerdict, PendingRevert, SelectOutcome};

/// Coarse state-machine position, derived from the flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for a click.
    Idle,
    /// Two cards up, locked.
    Evaluating,
    /// All pairs matched.
    Won,
}

/// Everything a renderer needs to draw one frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Cards in grid order.
    pub cards: Vec<Card>,
    /// Pairs found so far.
    pub matched_pairs: usize,
    /// Pairs in the deck.
    pub total_pairs: usize,
    /// Is input locked?
    pub locked: bool,
    /// Has every pair been found?
    pub won: bool,
    /// Current phase.
    pub phase: Phase,
    /// Current deal.
    pub epoch: u64,
}

/// Full game state.
#[derive(Clone, Debug)]
pub struct GameState {
    config: GameConfig,

    deck: Deck,

    /// Face-up, unmatched cards awaiting evaluation.
    selection: SmallVec<[CardId; 2]>,

    matched_pairs: usize,

    locked: bool,

    won: bool,

    epoch: u64,

    rng: GameRng,

    /// Accepted selections in the current epoch.
    history: Vec<ActionRecord>,
}

impl GameState {
    /// Validate the configuration and deal the first deck.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let deck = Deck::deal(&config.tokens.ids(), &mut rng);

        tracing::info!(
            pairs = deck.pair_count(),
            seed = rng.seed(),
            "dealt new game"
        );

        Ok(Self {
            config,
            deck,
            selection: SmallVec::new(),
            matched_pairs: 0,
            locked: false,
            won: false,
            epoch: 0,
            rng,
            history: Vec::new(),
        })
    }

    // === Transitions ===

    /// Flip a card.
    ///
    /// Ignored while locked, once two cards are up, or when the card is
    /// face-up, matched, or not in the deck.
    pub fn select_card(&mut self, id: CardId) -> SelectOutcome {
        if self.locked || self.selection.len() >= 2 {
            return SelectOutcome::Ignored;
        }

        match self.deck.get_mut(id) {
            Some(card) if card.is_selectable() => card.flip_up(),
            _ => return SelectOutcome::Ignored,
        }

        self.selection.push(id);
        self.record(Action::Select(id));
        tracing::debug!(card = %id, epoch = self.epoch, "card flipped");

        if self.selection.len() < 2 {
            return SelectOutcome::Flipped;
        }

        self.locked = true;
        let (first, second) = (self.selection[0], self.selection[1]);

        match evaluate_pair(&self.deck, first, second) {
            PairVerdict::Match => self.commit_match(first, second),
            PairVerdict::Mismatch => {
                tracing::debug!(%first, %second, epoch = self.epoch, "mismatch, revert pending");
                SelectOutcome::Mismatched(PendingRevert {
                    epoch: self.epoch,
                    cards: [first, second],
                    delay: self.config.mismatch_delay,
                })
            }
        }
    }

    fn commit_match(&mut self, first: CardId, second: CardId) -> SelectOutcome {
        for id in [first, second] {
            if let Some(card) = self.deck.get_mut(id) {
                card.mark_matched();
            }
        }

        self.matched_pairs += 1;
        self.selection.clear();
        self.locked = false;

        tracing::info!(
            matched = self.matched_pairs,
            total = self.total_pairs(),
            "pair matched"
        );

        if !self.won && self.matched_pairs == self.total_pairs() {
            self.won = true;
            tracing::info!(epoch = self.epoch, "all pairs found");
        }

        SelectOutcome::Matched { won: self.won }
    }

    /// Turn a mismatched pair back over and unlock.
    ///
    /// Returns false without touching anything if the revert belongs to an
    /// earlier deal or does not correspond to the pending selection.
    pub fn apply_revert(&mut self, revert: PendingRevert) -> bool {
        if revert.epoch != self.epoch {
            tracing::debug!(
                revert_epoch = revert.epoch,
                epoch = self.epoch,
                "stale revert ignored"
            );
            return false;
        }

        if !self.locked || self.selection.as_slice() != revert.cards.as_slice() {
            tracing::debug!(epoch = self.epoch, "revert does not match selection");
            return false;
        }

        for id in revert.cards {
            if let Some(card) = self.deck.get_mut(id) {
                card.flip_down();
            }
        }

        self.selection.clear();
        self.locked = false;
        true
    }

    /// Deal a new game. Always succeeds.
    pub fn reset(&mut self) {
        self.deck = Deck::deal(&self.config.tokens.ids(), &mut self.rng);
        self.selection.clear();
        self.matched_pairs = 0;
        self.locked = false;
        self.won = false;
        self.epoch += 1;
        self.history.clear();

        tracing::info!(epoch = self.epoch, "game reset");
    }

    fn record(&mut self, action: Action) {
        let sequence = self.history.len() as u32;
        self.history.push(ActionRecord::new(action, self.epoch, sequence));
    }

    // === Queries ===

    /// The configuration this game was created with.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The current deck.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Get a card by ID.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.deck.get(id)
    }

    /// Cards awaiting evaluation.
    #[must_use]
    pub fn selection(&self) -> &[CardId] {
        &self.selection
    }

    /// Pairs found in this deal.
    #[must_use]
    pub fn matched_pairs(&self) -> usize {
        self.matched_pairs
    }

    /// Pairs in the deck.
    #[must_use]
    pub fn total_pairs(&self) -> usize {
        self.deck.pair_count()
    }

    /// Is input locked by a pending evaluation?
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Has every pair been found?
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.won
    }

    /// Current deal number, starting at 0.
    #[must_use]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.won {
            Phase::Won
        } else if self.locked {
            Phase::Evaluating
        } else {
            Phase::Idle
        }
    }

    /// Accepted selections in this deal.
    #[must_use]
    pub fn history(&self) -> &[ActionRecord] {
        &self.history
    }

    /// Render input.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            cards: self.deck.cards().to_vec(),
            matched_pairs: self.matched_pairs,
            total_pairs: self.total_pairs(),
            locked: self.locked,
            won: self.won,
            phase: self.phase(),
            epoch: self.epoch,
        }
    }
}
