//! # memory-match
//!
//! Engine for the memory card game: a grid of face-down pairs, two flips
//! per turn, matches stay up, mismatches turn back after a delay.
//!
//! ## Design Principles
//!
//! 1. **Owned State**: One `GameState` value, mutated through its methods.
//!    Renderers read `Snapshot`s and never touch cards directly.
//!
//! 2. **No Hidden Timers**: A mismatch returns a `PendingRevert` instead of
//!    starting a callback. Whoever owns the clock decides when to apply it.
//!
//! 3. **Epoch Tagging**: Every deal has an epoch. Reverts from an earlier
//!    epoch are ignored, so `reset()` never needs to cancel anything.
//!
//! 4. **Silent Invalid Input**: Clicking a matched, face-up, or unknown card,
//!    or clicking while locked, is a no-op rather than an error.
//!
//! ## Modules
//!
//! - `core`: Card ids, RNG, configuration, errors, actions, game state
//! - `cards`: Tokens, cards, deck generation
//! - `rules`: Pair evaluation and selection outcomes
//! - `schedule`: Deadline-ordered queue of pending reverts
//! - `session`: State + scheduler + win banner, driven by a front-end

pub mod cards;
pub mod core;
pub mod rules;
pub mod schedule;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, CardId, ConfigError, GameConfig, GameRng, GameState, Phase, Snapshot,
    DEFAULT_MISMATCH_DELAY,
};

pub use crate::cards::{Card, Deck, TokenId, TokenSet};

pub use crate::rules::{evaluate_pair, PairVerdict, PendingRevert, SelectOutcome};

pub use crate::schedule::{RevertScheduler, ScheduledRevert};

pub use crate::session::Session;
