//! Tokens: the symbols printed on card faces.
//!
//! A `TokenId` is an index into a `TokenSet`, which maps each token to a
//! static asset path. The engine never loads assets; it only compares
//! token ids and hands paths to whoever draws the cards.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Identifies which symbol a card shows. Exactly two cards share each token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TokenId(pub u16);

impl TokenId {
    /// Create a token ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for TokenId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token({})", self.0)
    }
}

/// Ordered list of token asset paths.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenSet {
    assets: Vec<String>,
}

impl TokenSet {
    /// Number of tokens in the stock image set.
    pub const STOCK_SIZE: usize = 9;

    /// Largest set a `TokenId` can address.
    pub const MAX_TOKENS: usize = u16::MAX as usize + 1;

    /// Build a token set from asset paths, in order.
    pub fn from_assets<I, S>(assets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            assets: assets.into_iter().map(Into::into).collect(),
        }
    }

    /// `/images/card1.png` through `/images/card{count}.png`.
    #[must_use]
    pub fn numbered(count: usize) -> Self {
        Self::from_assets((1..=count).map(|i| format!("/images/card{i}.png")))
    }

    /// Number of distinct tokens (= number of pairs in a deck).
    #[must_use]
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    /// Check if the set has no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// All token IDs in order.
    ///
    /// Stops at [`Self::MAX_TOKENS`]; configs reject larger sets.
    #[must_use]
    pub fn ids(&self) -> Vec<TokenId> {
        (0..self.assets.len())
            .map_while(|index| u16::try_from(index).ok())
            .map(TokenId)
            .collect()
    }

    /// Asset path for a token.
    #[must_use]
    pub fn asset_path(&self, token: TokenId) -> Option<&str> {
        self.assets.get(token.0 as usize).map(String::as_str)
    }

    /// Short display name: the asset's file stem, or the raw path if it
    /// has none.
    #[must_use]
    pub fn label(&self, token: TokenId) -> Option<&str> {
        self.asset_path(token).map(|path| {
            Path::new(path)
                .file_stem()
                .and_then(|stem| stem.to_str())
                .unwrap_or(path)
        })
    }

    /// Iterate over asset paths.
    pub fn assets(&self) -> impl Iterator<Item = &str> {
        self.assets.iter().map(String::as_str)
    }
}

impl Default for TokenSet {
    fn default() -> Self {
        Self::numbered(Self::STOCK_SIZE)
    }
}
