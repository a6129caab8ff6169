//! Status update handlers.
//!
//! A [`StatusAccumulator`](crate::StatusAccumulator) reports every status
//! line it recognizes to a [`StatusHandler`]. Handlers receive the slot's
//! value after the line was applied.
//!
//! # Example
//!
//! ```
//! use headerwise_imap::{StatusAccumulator, StatusHandler};
//!
//! struct NewMail {
//!     count: u32,
//! }
//!
//! impl StatusHandler for NewMail {
//!     fn on_exists(&mut self, count: u32) {
//!         self.count = count;
//!     }
//! }
//!
//! let mut accumulator = StatusAccumulator::with_handler(NewMail { count: 0 });
//! accumulator.feed("* 18 EXISTS");
//! assert_eq!(accumulator.handler().count, 18);
//! ```

/// Receives mailbox status updates.
///
/// All methods default to doing nothing.
pub trait StatusHandler {
    /// Called after an `EXISTS` line.
    fn on_exists(&mut self, count: u32) {
        let _ = count;
    }

    /// Called after a `RECENT` line.
    fn on_recent(&mut self, count: u32) {
        let _ = count;
    }

    /// Called after an `UNSEEN` response code.
    fn on_unseen(&mut self, seq: u32) {
        let _ = seq;
    }

    /// Called after an `UIDVALIDITY` response code.
    fn on_uid_validity(&mut self, uid_validity: &str) {
        let _ = uid_validity;
    }

    /// Called after an `UIDNEXT` response code.
    fn on_uid_next(&mut self, uid: u32) {
        let _ = uid;
    }
}

/// A handler that ignores all updates.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopHandler;

impl StatusHandler for NoopHandler {}

/// A handler that logs updates using tracing.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingHandler;

impl StatusHandler for LoggingHandler {
    fn on_exists(&mut self, count: u32) {
        tracing::debug!(count, "EXISTS");
    }

    fn on_recent(&mut self, count: u32) {
        tracing::debug!(count, "RECENT");
    }

    fn on_unseen(&mut self, seq: u32) {
        tracing::debug!(seq, "UNSEEN");
    }

    fn on_uid_validity(&mut self, uid_validity: &str) {
        tracing::info!(uid_validity, "UIDVALIDITY");
    }

    fn on_uid_next(&mut self, uid: u32) {
        tracing::debug!(uid, "UIDNEXT");
    }
}

/// A handler that collects updates for later processing.
#[derive(Debug, Default, Clone)]
pub struct CollectingHandler {
    /// Collected events.
    pub events: Vec<StatusEvent>,
}

impl CollectingHandler {
    /// Creates a new collecting handler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes all collected events, leaving the handler empty.
    pub fn take(&mut self) -> Vec<StatusEvent> {
        std::mem::take(&mut self.events)
    }
}

impl StatusHandler for CollectingHandler {
    fn on_exists(&mut self, count: u32) {
        self.events.push(StatusEvent::Exists(count));
    }

    fn on_recent(&mut self, count: u32) {
        self.events.push(StatusEvent::Recent(count));
    }

    fn on_unseen(&mut self, seq: u32) {
        self.events.push(StatusEvent::Unseen(seq));
    }

    fn on_uid_validity(&mut self, uid_validity: &str) {
        self.events
            .push(StatusEvent::UidValidity(uid_validity.to_string()));
    }

    fn on_uid_next(&mut self, uid: u32) {
        self.events.push(StatusEvent::UidNext(uid));
    }
}

/// A status update collected by [`CollectingHandler`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusEvent {
    /// EXISTS count.
    Exists(u32),
    /// RECENT count.
    Recent(u32),
    /// First unseen sequence number.
    Unseen(u32),
    /// UIDVALIDITY token.
    UidValidity(String),
    /// Next UID.
    UidNext(u32),
}
