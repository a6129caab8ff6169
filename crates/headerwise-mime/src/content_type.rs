//! `Content-Type` media type and charset extraction.

use std::fmt;

use encoding_rs::UTF_8;

use crate::charset::{Charset, resolve_charset_or_utf8};

/// Media type and charset read from a `Content-Type` value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentTypeInfo {
    /// Lowercase media type (e.g., "text/plain"), empty if none was found.
    pub media_type: String,
    /// Resolved charset, UTF-8 when absent or unknown.
    pub charset: Charset,
}

impl ContentTypeInfo {
    /// Checks if this is a text media type.
    #[must_use]
    pub fn is_text(&self) -> bool {
        self.media_type.starts_with("text/")
    }

    /// Checks if this is a multipart media type.
    #[must_use]
    pub fn is_multipart(&self) -> bool {
        self.media_type.starts_with("multipart/")
    }

    /// Checks if this is an embedded message (`message/rfc822`).
    #[must_use]
    pub fn is_rfc822(&self) -> bool {
        self.media_type == "message/rfc822"
    }
}

impl Default for ContentTypeInfo {
    fn default() -> Self {
        Self {
            media_type: String::new(),
            charset: UTF_8,
        }
    }
}

impl fmt::Display for ContentTypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let media_type = &self.media_type;
        let charset = self.charset.name().to_lowercase();
        write!(f, "{media_type}; charset={charset}")
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ContentTypeInfo {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("ContentTypeInfo", 2)?;
        state.serialize_field("media_type", &self.media_type)?;
        state.serialize_field("charset", self.charset.name())?;
        state.end()
    }
}

/// Parses a `Content-Type` value into its media type and charset.
///
/// The value is lowercased and trimmed, with quotes, line feeds and tabs
/// removed. When a `charset=` parameter follows a `;`, the media type is the
/// text before the first `;` and the charset is resolved from the parameter
/// (UTF-8 if unknown). Otherwise, a value containing `/` is taken as the
/// media type with its `;` characters dropped, and the charset is UTF-8.
///
/// ```
/// use headerwise_mime::parse_content_type;
///
/// let info = parse_content_type("Text/HTML; charset=\"UTF-8\"");
/// assert_eq!(info.media_type, "text/html");
/// assert_eq!(info.charset.name(), "UTF-8");
/// ```
#[must_use]
pub fn parse_content_type(value: &str) -> ContentTypeInfo {
    if value.is_empty() {
        return ContentTypeInfo::default();
    }

    let value: String = value
        .to_lowercase()
        .trim()
        .chars()
        .filter(|c| !matches!(c, '"' | '\'' | '\n' | '\t'))
        .collect();

    if let Some(marker) = value.rfind("charset=")
        && value[..marker].contains(';')
    {
        let media_type = first_segment(&value).to_string();
        let label = first_segment(&value[marker + "charset=".len()..]);
        return ContentTypeInfo {
            media_type,
            charset: resolve_charset_or_utf8(label),
        };
    }

    let media_type = if value.contains('/') {
        value.replace(';', "").trim_end().to_string()
    } else {
        String::new()
    };

    ContentTypeInfo {
        media_type,
        charset: UTF_8,
    }
}

/// Returns the first `;`-separated segment of `value` that looks like a
/// media type, or `value` itself if none does.
///
/// ```
/// use headerwise_mime::extract_file_type;
///
/// assert_eq!(extract_file_type("application/pdf; name=a.pdf"), "application/pdf");
/// assert_eq!(extract_file_type("inline"), "inline");
/// ```
#[must_use]
pub fn extract_file_type(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }

    value
        .split(';')
        .map(str::trim)
        .find(|segment| segment.contains('/'))
        .unwrap_or(value)
        .to_string()
}

fn first_segment(value: &str) -> &str {
    value.split(';').next().unwrap_or_default().trim()
}
