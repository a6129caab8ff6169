//! Mailbox status types.

/// Mailbox counters gathered from untagged responses.
///
/// Every field starts at zero (or empty) and is only overwritten by a line
/// carrying a readable value for it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MailboxStatus {
    /// Number of messages in the mailbox.
    pub exists: u32,
    /// Number of recent messages.
    pub recent: u32,
    /// First unseen message sequence number.
    pub unseen: u32,
    /// UIDVALIDITY value, kept as sent by the server.
    pub uid_validity: String,
    /// Next UID to be assigned.
    pub uid_next: u32,
}

impl MailboxStatus {
    /// Creates an empty status.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks whether the server has reported a UIDVALIDITY.
    #[must_use]
    pub fn has_uid_validity(&self) -> bool {
        !self.uid_validity.is_empty()
    }
}
