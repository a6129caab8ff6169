//! Line-by-line mailbox status accumulation.

use crate::handler::{NoopHandler, StatusHandler};
use crate::status::{scan_exists, scan_recent, scan_uid_next, scan_uid_validity, scan_unseen};
use crate::types::MailboxStatus;

/// Feeds untagged response lines through every status scanner.
///
/// Typically driven with the lines returned by SELECT or EXAMINE.
///
/// ```
/// use headerwise_imap::StatusAccumulator;
///
/// let mut accumulator = StatusAccumulator::new();
/// accumulator.feed_all([
///     "* 172 EXISTS",
///     "* 1 RECENT",
///     "* OK [UNSEEN 12] Message 12 is first unseen",
///     "* OK [UIDVALIDITY 3857529045] UIDs valid",
///     "* OK [UIDNEXT 4392] Predicted next UID",
/// ]);
///
/// let status = accumulator.into_status();
/// assert_eq!(status.exists, 172);
/// assert_eq!(status.uid_validity, "3857529045");
/// ```
#[derive(Debug, Clone, Default)]
pub struct StatusAccumulator<H = NoopHandler> {
    status: MailboxStatus,
    handler: H,
}

impl StatusAccumulator {
    /// Creates an accumulator without a handler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<H: StatusHandler> StatusAccumulator<H> {
    /// Creates an accumulator that reports updates to `handler`.
    pub fn with_handler(handler: H) -> Self {
        Self {
            status: MailboxStatus::default(),
            handler,
        }
    }

    /// Applies one response line, returning whether any scanner matched.
    pub fn feed(&mut self, line: &str) -> bool {
        let status = &mut self.status;
        let handler = &mut self.handler;
        let mut matched = false;

        if scan_exists(line, &mut status.exists) {
            handler.on_exists(status.exists);
            matched = true;
        }
        if scan_recent(line, &mut status.recent) {
            handler.on_recent(status.recent);
            matched = true;
        }
        if scan_unseen(line, &mut status.unseen) {
            handler.on_unseen(status.unseen);
            matched = true;
        }
        if scan_uid_validity(line, &mut status.uid_validity) {
            handler.on_uid_validity(&status.uid_validity);
            matched = true;
        }
        if scan_uid_next(line, &mut status.uid_next) {
            handler.on_uid_next(status.uid_next);
            matched = true;
        }

        matched
    }

    /// Applies each line in turn, returning how many matched.
    pub fn feed_all<'a>(&mut self, lines: impl IntoIterator<Item = &'a str>) -> usize {
        lines.into_iter().filter(|line| self.feed(line)).count()
    }

    /// Returns the status gathered so far.
    #[must_use]
    pub const fn status(&self) -> &MailboxStatus {
        &self.status
    }

    /// Returns the handler.
    #[must_use]
    pub const fn handler(&self) -> &H {
        &self.handler
    }

    /// Returns the handler mutably.
    pub const fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }

    /// Consumes the accumulator, returning the gathered status.
    #[must_use]
    pub fn into_status(self) -> MailboxStatus {
        self.status
    }
}
