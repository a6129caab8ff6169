//! Untagged status line scanners.
//!
//! Each scanner checks one response line for its keyword and, if present,
//! stores the value it finds at a fixed space-separated position:
//!
//! ```text
//! * 172 EXISTS                  field 1
//! * 1 RECENT                    field 1
//! * OK [UNSEEN 12] ...          field 3, `]` stripped
//! * OK [UIDVALIDITY 3857529045] field 3, `]` stripped
//! * OK [UIDNEXT 4392] ...       field 3, `]` stripped
//! ```
//!
//! A scanner reports `true` whenever its keyword is present. If the value
//! is missing or not a number the target is left as it was.

use std::fmt;

/// Keywords recognized by the status scanners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKeyword {
    /// `* n EXISTS`
    Exists,
    /// `* n RECENT`
    Recent,
    /// `* OK [UNSEEN n]`
    Unseen,
    /// `* OK [UIDVALIDITY n]`
    UidValidity,
    /// `* OK [UIDNEXT n]`
    UidNext,
}

impl StatusKeyword {
    /// All keywords, in scanning order.
    pub const ALL: [Self; 5] = [
        Self::Exists,
        Self::Recent,
        Self::Unseen,
        Self::UidValidity,
        Self::UidNext,
    ];

    /// Returns the keyword as it appears on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Exists => "EXISTS",
            Self::Recent => "RECENT",
            Self::Unseen => "UNSEEN",
            Self::UidValidity => "UIDVALIDITY",
            Self::UidNext => "UIDNEXT",
        }
    }

    /// Checks whether `line` mentions this keyword (case-sensitive).
    #[must_use]
    pub fn matches(self, line: &str) -> bool {
        line.contains(self.as_str())
    }

    /// Returns the value token for this keyword, without any checks that
    /// the keyword is present.
    #[must_use]
    pub fn token(self, line: &str) -> Option<&str> {
        let field = line.split(' ').nth(self.field_index())?.trim();
        if self.in_response_code() {
            Some(field.trim_end_matches(']'))
        } else {
            Some(field)
        }
    }

    const fn field_index(self) -> usize {
        match self {
            Self::Exists | Self::Recent => 1,
            Self::Unseen | Self::UidValidity | Self::UidNext => 3,
        }
    }

    const fn in_response_code(self) -> bool {
        !matches!(self, Self::Exists | Self::Recent)
    }
}

impl fmt::Display for StatusKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scans an `EXISTS` line into `property`.
pub fn scan_exists(line: &str, property: &mut u32) -> bool {
    scan_number(StatusKeyword::Exists, line, property)
}

/// Scans a `RECENT` line into `property`.
pub fn scan_recent(line: &str, property: &mut u32) -> bool {
    scan_number(StatusKeyword::Recent, line, property)
}

/// Scans an `UNSEEN` response code into `property`.
pub fn scan_unseen(line: &str, property: &mut u32) -> bool {
    scan_number(StatusKeyword::Unseen, line, property)
}

/// Scans an `UIDNEXT` response code into `property`.
pub fn scan_uid_next(line: &str, property: &mut u32) -> bool {
    scan_number(StatusKeyword::UidNext, line, property)
}

/// Scans an `UIDVALIDITY` response code into `property`.
///
/// The value is kept as an opaque token.
pub fn scan_uid_validity(line: &str, property: &mut String) -> bool {
    let keyword = StatusKeyword::UidValidity;
    if !keyword.matches(line) {
        return false;
    }

    match keyword.token(line) {
        Some(token) => {
            tracing::trace!(%keyword, token, "Status token");
            token.clone_into(property);
        }
        None => tracing::warn!(%keyword, line, "Status line without value"),
    }
    true
}

/// Copies `value` into `property` when `key` names `header`.
///
/// `key` is trimmed and compared case-insensitively.
pub fn scan_message_property(key: &str, value: &str, header: &str, property: &mut String) -> bool {
    if key.trim().to_lowercase() != header.to_lowercase() {
        return false;
    }

    value.clone_into(property);
    true
}

fn scan_number(keyword: StatusKeyword, line: &str, property: &mut u32) -> bool {
    if !keyword.matches(line) {
        return false;
    }

    match keyword.token(line).and_then(|token| token.parse::<u32>().ok()) {
        Some(value) => {
            tracing::trace!(%keyword, value, "Status counter");
            *property = value;
        }
        None => tracing::warn!(%keyword, line, "Unparsable status counter"),
    }
    true
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::unreadable_literal)]
mod tests {
    use super::*;

    #[test]
    fn test_exists() {
        let mut exists = 0;
        assert!(scan_exists("* 172 EXISTS", &mut exists));
        assert_eq!(exists, 172);
    }

    #[test]
    fn test_exists_no_match() {
        let mut exists = 5;
        assert!(!scan_exists("* OK", &mut exists));
        assert_eq!(exists, 5);
    }

    #[test]
    fn test_exists_with_line_ending() {
        let mut exists = 0;
        assert!(scan_exists("* 23 EXISTS\r\n", &mut exists));
        assert_eq!(exists, 23);
    }

    #[test]
    fn test_exists_unparsable_keeps_value() {
        let mut exists = 9;
        assert!(scan_exists("* many EXISTS", &mut exists));
        assert_eq!(exists, 9);

        assert!(scan_exists("EXISTS", &mut exists));
        assert_eq!(exists, 9);
    }

    #[test]
    fn test_recent() {
        let mut recent = 0;
        assert!(scan_recent("* 5 RECENT", &mut recent));
        assert_eq!(recent, 5);
        assert!(!scan_recent("* 5 EXISTS", &mut recent));
    }

    #[test]
    fn test_unseen() {
        let mut unseen = 0;
        assert!(scan_unseen("* OK [UNSEEN 17]", &mut unseen));
        assert_eq!(unseen, 17);

        assert!(scan_unseen(
            "* OK [UNSEEN 12] Message 12 is first unseen",
            &mut unseen
        ));
        assert_eq!(unseen, 12);
    }

    #[test]
    fn test_unseen_short_line() {
        let mut unseen = 3;
        assert!(scan_unseen("* UNSEEN", &mut unseen));
        assert_eq!(unseen, 3);
    }

    #[test]
    fn test_uid_next() {
        let mut uid_next = 0;
        assert!(scan_uid_next("* OK [UIDNEXT 4392] Predicted next UID", &mut uid_next));
        assert_eq!(uid_next, 4392);
    }

    #[test]
    fn test_uid_validity() {
        let mut uid_validity = String::new();
        assert!(scan_uid_validity(
            "* OK [UIDVALIDITY 3857529045] UIDs valid",
            &mut uid_validity
        ));
        assert_eq!(uid_validity, "3857529045");
    }

    #[test]
    fn test_uid_validity_short_line_keeps_value() {
        let mut uid_validity = "3857529045".to_string();
        assert!(scan_uid_validity("* UIDVALIDITY", &mut uid_validity));
        assert!(scan_uid_validity("* OK [UIDVALIDITY", &mut uid_validity));
        assert_eq!(uid_validity, "3857529045");
    }

    #[test]
    fn test_uid_validity_no_match() {
        let mut uid_validity = "old".to_string();
        assert!(!scan_uid_validity("* OK [UIDNEXT 4392]", &mut uid_validity));
        assert_eq!(uid_validity, "old");
    }

    #[test]
    fn test_keyword_is_case_sensitive() {
        let mut exists = 1;
        assert!(!scan_exists("* 4 exists", &mut exists));
        assert_eq!(exists, 1);
    }

    #[test]
    fn test_message_property() {
        let mut subject = String::new();
        assert!(scan_message_property(" Subject ", "Hello", "subject", &mut subject));
        assert_eq!(subject, "Hello");

        assert!(!scan_message_property("From", "a@b.c", "subject", &mut subject));
        assert_eq!(subject, "Hello");
    }

    #[test]
    fn test_keyword_token() {
        assert_eq!(StatusKeyword::Exists.token("* 10 EXISTS"), Some("10"));
        assert_eq!(StatusKeyword::UidNext.token("* OK [UIDNEXT 7]"), Some("7"));
        assert_eq!(StatusKeyword::Unseen.token("* OK"), None);
        assert_eq!(StatusKeyword::UidValidity.to_string(), "UIDVALIDITY");
    }
}
