//! Charset label resolution.
//!
//! Labels come straight out of headers and are frequently aliases,
//! misspelled, or unknown. Resolution never fails: an unrecognized label
//! yields the caller's default.

use encoding_rs::{Encoding, UTF_8};

/// A resolved text codec.
pub type Charset = &'static Encoding;

/// Resolves a charset label, falling back to `default` when the label is
/// not recognized.
///
/// Labels follow the WHATWG Encoding Standard, so `iso-8859-1`, `latin1`
/// and `us-ascii` resolve to windows-1252 and bytes `0x80..=0x9F` decode to
/// its printable characters (e.g., `0x80` is `€`, not U+0080).
///
/// Returns `None` only when the label is unknown and no default was given.
#[must_use]
pub fn resolve_charset(name: &str, default: Option<Charset>) -> Option<Charset> {
    match Encoding::for_label_no_replacement(name.trim().as_bytes()) {
        Some(encoding) => Some(encoding),
        None => {
            tracing::debug!(charset = name, "Unknown charset label, using default");
            default
        }
    }
}

/// Resolves a charset label with UTF-8 as the default.
#[must_use]
pub fn resolve_charset_or_utf8(name: &str) -> Charset {
    resolve_charset(name, Some(UTF_8)).unwrap_or(UTF_8)
}

/// Decodes `bytes` as text in `charset`, replacing malformed sequences.
pub(crate) fn decode_bytes(bytes: &[u8], charset: Option<Charset>) -> String {
    let (text, had_errors) = charset
        .unwrap_or(UTF_8)
        .decode_without_bom_handling(bytes);
    if had_errors {
        tracing::trace!("Replaced malformed byte sequences while decoding");
    }
    text.into_owned()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use encoding_rs::{ISO_8859_2, SHIFT_JIS, WINDOWS_1252};

    #[test]
    fn test_resolve_known_labels() {
        assert_eq!(resolve_charset("utf-8", None), Some(UTF_8));
        assert_eq!(resolve_charset("UTF-8", None), Some(UTF_8));
        assert_eq!(resolve_charset("iso-8859-2", None), Some(ISO_8859_2));
        assert_eq!(resolve_charset("Shift_JIS", None), Some(SHIFT_JIS));
    }

    #[test]
    fn test_resolve_alias() {
        // Latin-1 labels map onto windows-1252, its superset.
        assert_eq!(resolve_charset("latin1", None), Some(WINDOWS_1252));
        assert_eq!(resolve_charset("iso-8859-1", None), Some(WINDOWS_1252));
    }

    #[test]
    fn test_latin1_decodes_c1_range_as_windows_1252() {
        let latin1 = resolve_charset("iso-8859-1", None);
        assert_eq!(decode_bytes(&[0x80, 0x41], latin1), "\u{20ac}A");
    }

    #[test]
    fn test_resolve_unknown_returns_default() {
        assert_eq!(resolve_charset("x-no-such-charset", None), None);
        assert_eq!(
            resolve_charset("x-no-such-charset", Some(ISO_8859_2)),
            Some(ISO_8859_2)
        );
        assert_eq!(resolve_charset("", Some(UTF_8)), Some(UTF_8));
    }

    #[test]
    fn test_resolve_or_utf8() {
        assert_eq!(resolve_charset_or_utf8("utf-7"), UTF_8);
        assert_eq!(resolve_charset_or_utf8(" windows-1252 "), WINDOWS_1252);
    }

    #[test]
    fn test_decode_bytes() {
        assert_eq!(decode_bytes(&[0x48, 0xE9], Some(WINDOWS_1252)), "Hé");
        assert_eq!(decode_bytes("Hé".as_bytes(), None), "Hé");
        assert_eq!(decode_bytes(&[0x41, 0xFF], None), "A\u{FFFD}");
    }
}
