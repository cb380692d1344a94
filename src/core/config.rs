//! Game configuration.
//!
//! A `GameConfig` names the token set to deal from, how long a mismatched
//! pair stays visible, and optionally a fixed RNG seed.

use std::collections::HashSet;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::cards::TokenSet;

/// How long a mismatched pair stays face-up before flipping back.
pub const DEFAULT_MISMATCH_DELAY: Duration = Duration::from_millis(1000);

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Tokens to deal, one pair each.
    pub tokens: TokenSet,

    /// Delay before a mismatched pair is turned back over.
    pub mismatch_delay: Duration,

    /// Fixed seed for reproducible deals. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Create a configuration with the default delay and a random seed.
    pub fn new(tokens: TokenSet) -> Self {
        Self {
            tokens,
            mismatch_delay: DEFAULT_MISMATCH_DELAY,
            seed: None,
        }
    }

    /// Set the mismatch delay.
    #[must_use]
    pub fn with_mismatch_delay(mut self, delay: Duration) -> Self {
        self.mismatch_delay = delay;
        self
    }

    /// Fix the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of pairs a deck from this config holds.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.tokens.len()
    }

    /// Check that a deck can be dealt from this configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tokens.is_empty() {
            return Err(ConfigError::NoTokens);
        }

        if self.tokens.len() > TokenSet::MAX_TOKENS {
            return Err(ConfigError::TooManyTokens {
                count: self.tokens.len(),
                max: TokenSet::MAX_TOKENS,
            });
        }

        let mut seen = HashSet::new();
        for path in self.tokens.assets() {
            if !seen.insert(path) {
                return Err(ConfigError::DuplicateToken {
                    path: path.to_string(),
                });
            }
        }

        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(TokenSet::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::TokenId;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();

        assert_eq!(config.pair_count(), 9);
        assert_eq!(config.mismatch_delay, Duration::from_millis(1000));
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::new(TokenSet::numbered(4))
            .with_mismatch_delay(Duration::from_millis(250))
            .with_seed(7);

        assert_eq!(config.pair_count(), 4);
        assert_eq!(config.mismatch_delay, Duration::from_millis(250));
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_empty_tokens_rejected() {
        let config = GameConfig::new(TokenSet::from_assets(Vec::<String>::new()));
        assert_eq!(config.validate(), Err(ConfigError::NoTokens));
    }

    #[test]
    fn test_oversized_token_set_rejected() {
        let count = TokenSet::MAX_TOKENS + 1;
        let config = GameConfig::new(TokenSet::numbered(count));

        assert_eq!(
            config.validate(),
            Err(ConfigError::TooManyTokens {
                count,
                max: TokenSet::MAX_TOKENS,
            })
        );
    }

    #[test]
    fn test_largest_token_set_deals_every_pair() {
        let config = GameConfig::new(TokenSet::numbered(TokenSet::MAX_TOKENS));

        assert!(config.validate().is_ok());
        assert_eq!(config.tokens.ids().len(), TokenSet::MAX_TOKENS);
        assert_eq!(config.tokens.ids().last(), Some(&TokenId(u16::MAX)));
    }

    #[test]
    fn test_duplicate_tokens_rejected() {
        let config = GameConfig::new(TokenSet::from_assets(["a.png", "b.png", "a.png"]));

        let err = config.validate().unwrap_err();
        assert_eq!(
            err,
            ConfigError::DuplicateToken {
                path: "a.png".to_string()
            }
        );
        assert_eq!(err.to_string(), "duplicate token asset: a.png");
    }

    #[test]
    fn test_config_serde() {
        let config = GameConfig::new(TokenSet::numbered(2)).with_seed(3);

        let json = serde_json::to_string(&config).unwrap();
        let restored: GameConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, restored);
    }
}
