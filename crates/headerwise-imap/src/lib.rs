//! # headerwise-imap
//!
//! Mailbox counter extraction from IMAP untagged responses.
//!
//! The scanners here work on single response lines that the surrounding
//! client has already read off the connection. They never fail: a line
//! either carries the keyword they look for or it does not, and a value
//! that cannot be read leaves the previous one in place.
//!
//! ## Quick Start
//!
//! ```
//! use headerwise_imap::{scan_exists, scan_unseen};
//!
//! let mut exists = 0;
//! assert!(scan_exists("* 172 EXISTS", &mut exists));
//! assert_eq!(exists, 172);
//!
//! let mut unseen = 0;
//! assert!(scan_unseen("* OK [UNSEEN 17]", &mut unseen));
//! assert_eq!(unseen, 17);
//! ```
//!
//! ## Modules
//!
//! - [`status`]: Per-keyword line scanners
//! - [`handler`]: Callbacks for recognized status lines
//! - [`types`]: The gathered [`MailboxStatus`]

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod accumulator;
pub mod handler;
pub mod status;
pub mod types;

pub use accumulator::StatusAccumulator;
pub use handler::{CollectingHandler, LoggingHandler, NoopHandler, StatusEvent, StatusHandler};
pub use status::{
    StatusKeyword, scan_exists, scan_message_property, scan_recent, scan_uid_next,
    scan_uid_validity, scan_unseen,
};
pub use types::MailboxStatus;
