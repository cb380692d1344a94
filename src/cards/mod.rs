//! Card system: tokens, cards, and deck generation.
//!
//! ## Key Types
//!
//! - `TokenId`: Which symbol a card shows
//! - `TokenSet`: Token to asset-path mapping
//! - `Card`: Per-card flip/match state
//! - `Deck`: Shuffled pairs in grid order

pub mod card;
pub mod deck;
pub mod token;

pub use card::Card;
pub use deck::Deck;
pub use token::{TokenId, TokenSet};
