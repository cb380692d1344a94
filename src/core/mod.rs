//! Core engine types: card ids, RNG, configuration, actions, state.

pub mod action;
pub mod config;
pub mod entity;
pub mod error;
pub mod rng;
pub mod state;

pub use action::{Action, ActionRecord};
pub use config::{GameConfig, DEFAULT_MISMATCH_DELAY};
pub use entity::CardId;
pub use error::ConfigError;
pub use rng::GameRng;
pub use state::{GameState, Phase, Snapshot};
