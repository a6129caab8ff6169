//! RFC 2047 encoded-word decoding.
//!
//! Header values carry non-ASCII text as `=?charset?encoding?payload?=`
//! tokens mixed with plain text. [`segments`] splits a value into literal
//! and encoded pieces; [`decode_encoded_words`] reassembles the decoded
//! text.
//!
//! Decoding is all-or-nothing per call: if any word in a value fails to
//! decode, [`decode_encoded_words`] returns the input exactly as given.
//!
//! ```
//! use headerwise_mime::decode_encoded_words;
//!
//! assert_eq!(decode_encoded_words("=?UTF-8?B?SGVsbG8=?="), "Hello");
//! assert_eq!(decode_encoded_words("Re: =?utf-8?Q?caf=C3=A9?="), "Re: café");
//! ```

use crate::charset::resolve_charset_or_utf8;
use crate::encoding::{decode_base64, decode_quoted_printable};
use crate::error::{Error, Result};

/// Payload encoding of an encoded-word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordEncoding {
    /// `B` encoding.
    Base64,
    /// `Q` encoding.
    QuotedPrintable,
}

impl TryFrom<u8> for WordEncoding {
    type Error = Error;

    fn try_from(flag: u8) -> Result<Self> {
        match flag {
            b'B' | b'b' => Ok(Self::Base64),
            b'Q' | b'q' => Ok(Self::QuotedPrintable),
            _ => Err(Error::UnknownEncoding(char::from(flag).to_string())),
        }
    }
}

/// An encoded-word located inside a header value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodedWord<'a> {
    /// Charset label, as written.
    pub charset: &'a str,
    /// Payload encoding.
    pub encoding: WordEncoding,
    /// Encoded text between the encoding flag and the closing `?=`.
    pub payload: &'a str,
}

impl EncodedWord<'_> {
    /// Decodes the payload, reading unknown charsets as UTF-8.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload is malformed for its encoding.
    pub fn decode(&self) -> Result<String> {
        let charset = Some(resolve_charset_or_utf8(self.charset));
        match self.encoding {
            WordEncoding::Base64 => decode_base64(self.payload, charset),
            WordEncoding::QuotedPrintable => decode_quoted_printable(self.payload, charset),
        }
    }
}

/// A piece of a header value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Text outside any encoded-word, kept verbatim.
    Literal(&'a str),
    /// An encoded-word.
    Encoded(EncodedWord<'a>),
}

/// Iterator over the [`Segment`]s of a header value.
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    rest: &'a str,
    pending: Option<EncodedWord<'a>>,
}

/// Splits `text` into literal and encoded-word segments.
///
/// Each step takes the leftmost encoded-word in the remaining text,
/// yields the literal text before it (if any) and then the word, and
/// resumes right after the word's closing `?=`. Once no word remains the
/// rest is yielded as a single literal.
#[must_use]
pub const fn segments(text: &str) -> Segments<'_> {
    Segments {
        rest: text,
        pending: None,
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(word) = self.pending.take() {
            return Some(Segment::Encoded(word));
        }
        if self.rest.is_empty() {
            return None;
        }

        let Some(found) = locate(self.rest) else {
            let literal = self.rest;
            self.rest = "";
            return Some(Segment::Literal(literal));
        };

        let literal = &self.rest[..found.start];
        self.rest = &self.rest[found.end..];
        if literal.is_empty() {
            Some(Segment::Encoded(found.word))
        } else {
            self.pending = Some(found.word);
            Some(Segment::Literal(literal))
        }
    }
}

/// Decodes every encoded-word in `text`.
///
/// Tab characters are removed before scanning, since some encoders fold
/// adjacent words with tabs. Text outside encoded-words is kept verbatim.
///
/// # Errors
///
/// Returns the first payload error encountered.
pub fn try_decode_encoded_words(text: &str) -> Result<String> {
    let text = text.replace('\t', "");
    let mut decoded = String::with_capacity(text.len());

    for segment in segments(&text) {
        match segment {
            Segment::Literal(literal) => decoded.push_str(literal),
            Segment::Encoded(word) => decoded.push_str(&word.decode()?),
        }
    }

    Ok(decoded)
}

/// Decodes every encoded-word in `text`, never failing.
///
/// On any decoding error the original `text` is returned unchanged,
/// including its tabs. Empty input yields an empty string.
#[must_use]
pub fn decode_encoded_words(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    match try_decode_encoded_words(text) {
        Ok(decoded) => decoded,
        Err(error) => {
            tracing::debug!(%error, "Encoded-word decoding failed, keeping original text");
            text.to_string()
        }
    }
}

#[derive(Debug)]
struct Located<'a> {
    start: usize,
    end: usize,
    word: EncodedWord<'a>,
}

/// Finds the leftmost encoded-word, including an optional leading `=`.
fn locate(text: &str) -> Option<Located<'_>> {
    let bytes = text.as_bytes();
    let mut start = 0;

    while start < bytes.len() {
        let open = match bytes[start] {
            b'=' if bytes.get(start + 1) == Some(&b'?') => start + 1,
            b'?' => start,
            _ => {
                start += 1;
                continue;
            }
        };
        if let Some((word, end)) = match_at(text, open) {
            return Some(Located { start, end, word });
        }

        // A later opening on the same line only sees a subset of the charset
        // ends and terminators just tried, so resume after the line feed.
        start = open + bytes[open..].iter().position(|&b| b == b'\n')? + 1;
    }

    None
}

/// Matches `?charset?flag?payload?=` starting at the `?` at `open`.
///
/// The charset is the shortest run ending in `?B?` or `?Q?`, the payload
/// the shortest run ending in `?=`. Neither may span a line feed.
fn match_at(text: &str, open: usize) -> Option<(EncodedWord<'_>, usize)> {
    let bytes = text.as_bytes();
    let mut from = open + 1;

    loop {
        let q = from + bytes[from..].iter().position(|&b| b == b'?' || b == b'\n')?;
        if bytes[q] == b'\n' {
            return None;
        }

        if let (Some(&flag), Some(&b'?')) = (bytes.get(q + 1), bytes.get(q + 2))
            && let Ok(encoding) = WordEncoding::try_from(flag)
        {
            // A later charset end only shrinks the payload search, so a
            // missing terminator here is final.
            let close = find_terminator(bytes, q + 3)?;
            let word = EncodedWord {
                charset: &text[open + 1..q],
                encoding,
                payload: &text[q + 3..close],
            };
            return Some((word, close + 2));
        }

        from = q + 1;
    }
}

/// Position of the first `?=` at or after `from`, unless a line feed comes
/// first.
fn find_terminator(bytes: &[u8], from: usize) -> Option<usize> {
    let mut i = from;
    while i + 1 < bytes.len() {
        match bytes[i] {
            b'\n' => return None,
            b'?' if bytes[i + 1] == b'=' => return Some(i),
            _ => {}
        }
        i += 1;
    }
    None
}
