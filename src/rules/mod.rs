//! Matching rules.
//!
//! Decides whether two face-up cards form a pair and describes the outcome
//! of each selection, including the deferred revert a mismatch produces.

pub mod engine;

pub use engine::{evaluate_pair, PairVerdict, PendingRevert, SelectOutcome};
