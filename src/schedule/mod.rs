//! Deferred reverts.
//!
//! A mismatch leaves its two cards face-up for a while. The state machine
//! hands back a `PendingRevert`; the `RevertScheduler` holds it until its
//! deadline and then gives it back to be applied.
//!
//! Time is always passed in, never read, so the queue behaves the same
//! under test as in the terminal loop.
//!
//! ## Example Usage
//!
//! ```
//! use std::time::{Duration, Instant};
//! use memory_match::core::CardId;
//! use memory_match::rules::PendingRevert;
//! use memory_match::schedule::RevertScheduler;
//!
//! let mut scheduler = RevertScheduler::new();
//! let start = Instant::now();
//!
//! scheduler.schedule(
//!     PendingRevert {
//!         epoch: 0,
//!         cards: [CardId::new(0), CardId::new(1)],
//!         delay: Duration::from_millis(1000),
//!     },
//!     start,
//! );
//!
//! assert!(scheduler.drain_due(start).is_empty());
//! assert_eq!(scheduler.drain_due(start + Duration::from_millis(1000)).len(), 1);
//! ```

mod queue;

pub use queue::{RevertScheduler, ScheduledRevert};
