//! Configuration errors.
//!
//! Gameplay itself never fails: invalid clicks are ignored. The only thing
//! that can be rejected is a configuration the deck cannot be dealt from.

use thiserror::Error;

/// Errors from validating a [`GameConfig`](super::GameConfig).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The token set has no tokens, so there is nothing to match.
    #[error("token set is empty")]
    NoTokens,

    /// More tokens than a `TokenId` can address.
    #[error("too many tokens: {count} (max {max})")]
    TooManyTokens {
        /// Tokens in the set.
        count: usize,
        /// Largest supported set.
        max: usize,
    },

    /// Two tokens point at the same asset, which would deal four
    /// indistinguishable cards.
    #[error("duplicate token asset: {path}")]
    DuplicateToken {
        /// The asset path that appears more than once.
        path: String,
    },
}
