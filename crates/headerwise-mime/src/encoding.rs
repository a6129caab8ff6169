//! Payload byte decoders for encoded-words.
//!
//! Supports the two RFC 2047 encodings: `B` (Base64) and `Q` (a
//! quoted-printable variant with `_` standing in for space). Both decoders
//! turn the payload into raw bytes and then interpret those bytes with the
//! word's charset.

use std::borrow::Cow;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::charset::{Charset, decode_bytes};
use crate::error::{Error, Result};

/// Decodes a Base64 payload and interprets the bytes in `charset`.
///
/// An absent charset means UTF-8. An empty payload decodes to an empty
/// string.
///
/// # Errors
///
/// Returns an error if the payload is not valid standard Base64.
pub fn decode_base64(payload: &str, charset: Option<Charset>) -> Result<String> {
    if payload.is_empty() {
        return Ok(String::new());
    }

    let bytes = STANDARD.decode(payload)?;
    Ok(decode_bytes(&bytes, charset))
}

/// Decodes a quoted-printable payload and interprets the bytes in `charset`.
///
/// When the payload contains `_` but no literal space, every `_` is read as
/// a space first. `=` followed by CR or LF is a soft line break and produces
/// nothing; `=XX` produces the byte `0xXX`; a trailing lone `=` is kept.
///
/// # Errors
///
/// Returns an error if an escape is not followed by two hex digits. No
/// partial output is produced in that case.
pub fn decode_quoted_printable(payload: &str, charset: Option<Charset>) -> Result<String> {
    let payload = if payload.contains('_') && !payload.contains(' ') {
        Cow::Owned(payload.replace('_', " "))
    } else {
        Cow::Borrowed(payload)
    };

    let bytes = unescape(payload.as_bytes())?;
    Ok(decode_bytes(&bytes, charset))
}

/// Resolves `=` escapes in place, returning the emitted bytes.
fn unescape(payload: &[u8]) -> Result<Vec<u8>> {
    let mut data = payload.to_vec();
    let mut written = 0;
    let mut i = 0;

    while i < data.len() {
        let byte = data[i];

        if byte == b'=' && i + 1 < data.len() {
            if is_line_break(data[i + 1]) {
                // Soft line break, optionally CRLF or LFCR
                i += 2;
                if data.get(i).copied().is_some_and(is_line_break) {
                    i += 1;
                }
                continue;
            }

            let Some(&[high, low]) = data.get(i + 1..i + 3) else {
                return Err(Error::TruncatedEscape { position: i });
            };
            let (Some(high_value), Some(low_value)) = (hex_digit(high), hex_digit(low)) else {
                return Err(Error::InvalidEscape {
                    position: i,
                    sequence: String::from_utf8_lossy(&[high, low]).into_owned(),
                });
            };

            data[written] = (high_value << 4) | low_value;
            written += 1;
            i += 3;
        } else {
            data[written] = byte;
            written += 1;
            i += 1;
        }
    }

    data.truncate(written);
    Ok(data)
}

const fn is_line_break(byte: u8) -> bool {
    byte == b'\r' || byte == b'\n'
}

const fn hex_digit(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}
