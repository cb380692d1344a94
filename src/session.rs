//! A playable session: game state, its revert queue, and the win banner.
//!
//! The front-end owns exactly one `Session`. It forwards clicks and resets,
//! calls `tick` when the clock advances, and draws from `snapshot`.
//!
//! ```
//! use std::time::Instant;
//! use memory_match::{CardId, GameConfig, Session, TokenSet};
//!
//! let config = GameConfig::new(TokenSet::numbered(4)).with_seed(1);
//! let mut session = Session::new(config).unwrap();
//!
//! session.click(CardId::new(0), Instant::now());
//! assert_eq!(session.snapshot().cards.iter().filter(|c| c.face_up).count(), 1);
//! ```

use std::time::Instant;

use crate::core::{Action, CardId, ConfigError, GameConfig, GameState, Snapshot};
use crate::rules::SelectOutcome;
use crate::schedule::RevertScheduler;

/// Game state plus the machinery around it.
#[derive(Clone, Debug)]
pub struct Session {
    state: GameState,
    scheduler: RevertScheduler,
    /// Win banner showing; cleared by the next interaction.
    celebrating: bool,
}

impl Session {
    /// Start a session with a freshly dealt game.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            state: GameState::new(config)?,
            scheduler: RevertScheduler::new(),
            celebrating: false,
        })
    }

    /// Handle a click on a card.
    ///
    /// While the win banner is up the click only dismisses it.
    pub fn click(&mut self, card: CardId, now: Instant) -> SelectOutcome {
        if self.celebrating {
            self.dismiss();
            return SelectOutcome::Ignored;
        }

        let outcome = self.state.select_card(card);
        match outcome {
            SelectOutcome::Mismatched(revert) => {
                self.scheduler.schedule(revert, now);
            }
            SelectOutcome::Matched { won: true } => {
                self.celebrating = true;
            }
            _ => {}
        }
        outcome
    }

    /// Apply a recorded action.
    pub fn apply(&mut self, action: Action, now: Instant) -> SelectOutcome {
        match action {
            Action::Select(card) => self.click(card, now),
            Action::Reset => {
                self.reset();
                SelectOutcome::Ignored
            }
        }
    }

    /// Fire every revert due by `now`. Returns how many took effect.
    pub fn tick(&mut self, now: Instant) -> usize {
        let mut applied = 0;
        for revert in self.scheduler.drain_due(now) {
            if self.state.apply_revert(revert) {
                applied += 1;
            }
        }
        applied
    }

    /// Deal a new game and drop the win banner.
    ///
    /// Pending reverts stay queued; they belong to the old epoch and are
    /// ignored when they fire.
    pub fn reset(&mut self) {
        self.state.reset();
        self.celebrating = false;
    }

    /// Hide the win banner.
    pub fn dismiss(&mut self) {
        self.celebrating = false;
    }

    /// Is the win banner showing?
    #[must_use]
    pub fn is_celebrating(&self) -> bool {
        self.celebrating
    }

    /// When the next revert fires, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.scheduler.next_deadline()
    }

    /// Number of reverts waiting to fire.
    #[must_use]
    pub fn pending_reverts(&self) -> usize {
        self.scheduler.len()
    }

    /// The underlying game state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Render input.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{TokenId, TokenSet};
    use std::time::Duration;

    fn session() -> Session {
        Session::new(GameConfig::new(TokenSet::numbered(2)).with_seed(9)).unwrap()
    }

    fn pair(session: &Session, token: u16) -> [CardId; 2] {
        let ids = session.state().deck().positions_of(TokenId(token));
        [ids[0], ids[1]]
    }

    #[test]
    fn test_mismatch_schedules_revert() {
        let mut session = session();
        let now = Instant::now();
        let a = pair(&session, 0)[0];
        let b = pair(&session, 1)[0];

        session.click(a, now);
        session.click(b, now);

        assert_eq!(session.pending_reverts(), 1);
        assert_eq!(session.next_deadline(), Some(now + Duration::from_millis(1000)));

        assert_eq!(session.tick(now + Duration::from_millis(500)), 0);
        assert!(session.state().is_locked());

        assert_eq!(session.tick(now + Duration::from_millis(1000)), 1);
        assert!(!session.state().is_locked());
        assert_eq!(session.pending_reverts(), 0);
    }

    #[test]
    fn test_win_raises_banner_and_click_dismisses() {
        let mut session = session();
        let now = Instant::now();

        for token in 0..2 {
            let [a, b] = pair(&session, token);
            session.click(a, now);
            session.click(b, now);
        }

        assert!(session.is_celebrating());
        assert!(session.state().is_won());

        assert_eq!(session.click(CardId(0), now), SelectOutcome::Ignored);
        assert!(!session.is_celebrating());
        assert!(session.state().is_won());
    }

    #[test]
    fn test_reset_keeps_stale_revert_harmless() {
        let mut session = session();
        let now = Instant::now();
        let a = pair(&session, 0)[0];
        let b = pair(&session, 1)[0];
        session.click(a, now);
        session.click(b, now);

        session.reset();
        assert_eq!(session.pending_reverts(), 1);

        let first = CardId(0);
        session.click(first, now);

        assert_eq!(session.tick(now + Duration::from_secs(2)), 0);
        assert!(session.state().card(first).unwrap().face_up);
        assert_eq!(session.state().epoch(), 1);
    }

    #[test]
    fn test_apply_reset_action() {
        let mut session = session();
        let now = Instant::now();
        session.apply(Action::Select(CardId(0)), now);

        assert_eq!(session.apply(Action::Reset, now), SelectOutcome::Ignored);
        assert_eq!(session.snapshot().epoch, 1);
        assert!(session.snapshot().cards.iter().all(|c| !c.face_up));
    }
}
