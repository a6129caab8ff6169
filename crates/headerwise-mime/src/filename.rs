//! Attachment file name handling.
//!
//! Names come from `Content-Disposition`/`Content-Type` parameters, or for
//! embedded messages from their `Subject` header. Generating a fallback
//! name needs to know which names are taken; that check is supplied by the
//! caller through [`NameProbe`], so everything else here stays pure.

use std::path::PathBuf;

use crate::config::FileNameConfig;
use crate::encoded_word::decode_encoded_words;

const SUBJECT_MARKER: &str = "Subject:";

/// Characters replaced by [`sanitize_file_name`].
pub const ILLEGAL_FILE_NAME_CHARS: [char; 16] = [
    '\u{8}', '\r', '\n', '\u{c}', '\0', '"', '\t', '\u{b}', '\\', '/', ':', '*', '?', '<', '>',
    '|',
];

/// Answers whether a candidate file name is already taken.
pub trait NameProbe {
    /// Returns `true` if `name` is in use.
    fn exists(&self, name: &str) -> bool;
}

impl<F> NameProbe for F
where
    F: Fn(&str) -> bool,
{
    fn exists(&self, name: &str) -> bool {
        self(name)
    }
}

/// Probes for existing files in a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FsProbe {
    dir: PathBuf,
}

impl FsProbe {
    /// Creates a probe over `dir`.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl NameProbe for FsProbe {
    fn exists(&self, name: &str) -> bool {
        self.dir.join(name).exists()
    }
}

/// Extracts the `name` or `filename` parameter from a header value.
///
/// Parameters are separated by `;` and written as `field=value` or
/// `field:value`. Field names are case-insensitive; the first match wins
/// and its value has quotes stripped and encoded-words decoded. Returns an
/// empty string when there is no such parameter.
///
/// ```
/// use headerwise_mime::extract_file_name;
///
/// assert_eq!(extract_file_name("attachment; filename=\"report.pdf\""), "report.pdf");
/// assert_eq!(extract_file_name("name==?utf-8?Q?r=C3=A9sum=C3=A9.txt?="), "résumé.txt");
/// ```
#[must_use]
pub fn extract_file_name(params: &str) -> String {
    for segment in params.split(';') {
        let Some(separator) = segment.find([':', '=']) else {
            continue;
        };

        let field = segment[..separator].trim().to_lowercase();
        if field != "name" && field != "filename" {
            continue;
        }

        let value = segment[separator + 1..]
            .trim()
            .trim_matches('"')
            .trim_end_matches(';')
            .trim_matches('"')
            .trim_matches('\'');
        return decode_encoded_words(value);
    }

    String::new()
}

/// Derives a file name for an embedded `message/rfc822` part.
///
/// The name is the decoded `Subject` of `raw` with the configured
/// extension. The subject ends at the configured line separator or at the
/// first line feed, whichever comes first, so mismatched line endings never
/// pull the body into the name. Without a subject, a free generated name is
/// picked with [`default_file_name`]. Empty input yields an empty string.
#[must_use]
pub fn rfc822_file_name(raw: &str, config: &FileNameConfig, probe: &impl NameProbe) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let Some(marker) = raw.find(SUBJECT_MARKER) else {
        tracing::debug!("Embedded message has no subject, generating a name");
        return default_file_name(config, probe);
    };

    let subject = &raw[marker + SUBJECT_MARKER.len()..];
    let separator = config.line_separator.as_str();
    let end = [separator, "\n"]
        .into_iter()
        .filter(|terminator| !terminator.is_empty())
        .filter_map(|terminator| subject.find(terminator))
        .min()
        .unwrap_or(subject.len());
    let subject = &subject[..end];

    let extension = &config.extension;
    let subject = decode_encoded_words(subject);
    format!("{}.{extension}", subject.trim())
}

/// Picks the first free name among `ATT.eml`, `ATT0.eml`, `ATT1.eml`, ...
///
/// Stem and extension come from `config`. Each candidate is checked with
/// `probe`, so this is only as race-free as the probe's backing store.
#[must_use]
pub fn default_file_name(config: &FileNameConfig, probe: &impl NameProbe) -> String {
    let stem = &config.default_stem;
    let extension = &config.extension;

    let mut candidate = format!("{stem}.{extension}");
    let mut counter: u64 = 0;
    while probe.exists(&candidate) {
        candidate = format!("{stem}{counter}.{extension}");
        counter += 1;
    }

    candidate
}

/// Replaces characters that are illegal in common file systems with spaces.
///
/// A CRLF pair becomes a single space; every character in
/// [`ILLEGAL_FILE_NAME_CHARS`] becomes one space.
#[must_use]
pub fn sanitize_file_name(name: &str) -> String {
    name.replace("\r\n", " ")
        .chars()
        .map(|c| if ILLEGAL_FILE_NAME_CHARS.contains(&c) { ' ' } else { c })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashSet;

    fn taken(names: &[&str]) -> impl Fn(&str) -> bool {
        let names: HashSet<String> = names.iter().map(ToString::to_string).collect();
        move |name| names.contains(name)
    }

    #[test]
    fn test_extract_file_name() {
        assert_eq!(extract_file_name("name=\"report.pdf\""), "report.pdf");
        assert_eq!(
            extract_file_name("attachment; filename=report.pdf"),
            "report.pdf"
        );
        assert_eq!(
            extract_file_name("attachment; FileName = 'notes.txt'"),
            "notes.txt"
        );
    }

    #[test]
    fn test_extract_file_name_colon_separator() {
        assert_eq!(extract_file_name("filename: data.csv"), "data.csv");
    }

    #[test]
    fn test_extract_file_name_first_match_wins() {
        assert_eq!(
            extract_file_name("inline; name=\"a.txt\"; filename=\"b.txt\""),
            "a.txt"
        );
    }

    #[test]
    fn test_extract_file_name_encoded() {
        assert_eq!(
            extract_file_name("attachment; filename=\"=?UTF-8?B?0J7RgtGH0LXRgi5kb2N4?=\""),
            "Отчет.docx"
        );
    }

    #[test]
    fn test_extract_file_name_missing() {
        assert_eq!(extract_file_name("attachment; size=1024"), "");
        assert_eq!(extract_file_name("inline"), "");
        assert_eq!(extract_file_name(""), "");
    }

    #[test]
    fn test_rfc822_file_name_from_subject() {
        let raw = "From: a@example.com\r\nSubject: Weekly status\r\nTo: b@example.com\r\n";
        let name = rfc822_file_name(raw, &FileNameConfig::new(), &taken(&[]));
        assert_eq!(name, "Weekly status.eml");
    }

    #[test]
    fn test_rfc822_file_name_encoded_subject() {
        let raw = "Subject: =?utf-8?Q?Caf=C3=A9_menu?=\nDate: today\n";
        let config = FileNameConfig::builder().line_separator("\n").build();
        assert_eq!(rfc822_file_name(raw, &config, &taken(&[])), "Café menu.eml");
    }

    #[test]
    fn test_rfc822_file_name_subject_without_terminator() {
        let raw = "X-Header: 1\r\nSubject: Last line";
        let name = rfc822_file_name(raw, &FileNameConfig::new(), &taken(&[]));
        assert_eq!(name, "Last line.eml");
    }

    #[test]
    fn test_rfc822_file_name_stops_at_line_feed() {
        let raw = "Subject: Hi\nFrom: x@y\n\nbody text";
        let name = rfc822_file_name(raw, &FileNameConfig::new(), &taken(&[]));
        assert_eq!(name, "Hi.eml");
    }

    #[test]
    fn test_rfc822_file_name_without_subject() {
        let raw = "From: a@example.com\r\n\r\nbody";
        let config = FileNameConfig::new();
        assert_eq!(rfc822_file_name(raw, &config, &taken(&[])), "ATT.eml");
        assert_eq!(
            rfc822_file_name(raw, &config, &taken(&["ATT.eml", "ATT0.eml"])),
            "ATT1.eml"
        );
    }

    #[test]
    fn test_rfc822_file_name_empty() {
        assert_eq!(
            rfc822_file_name("", &FileNameConfig::new(), &taken(&["ATT.eml"])),
            ""
        );
    }

    #[test]
    fn test_default_file_name_probe_order() {
        let probed = RefCell::new(Vec::new());
        let probe = |name: &str| {
            probed.borrow_mut().push(name.to_string());
            probed.borrow().len() < 3
        };

        let config = FileNameConfig::builder().default_stem("part").build();
        assert_eq!(default_file_name(&config, &probe), "part1.eml");
        assert_eq!(
            probed.into_inner(),
            vec!["part.eml", "part0.eml", "part1.eml"]
        );
    }

    #[test]
    fn test_fs_probe() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("ATT.eml"), b"").unwrap();

        let probe = FsProbe::new(dir.path());
        assert!(probe.exists("ATT.eml"));
        assert!(!probe.exists("ATT0.eml"));
        assert_eq!(default_file_name(&FileNameConfig::new(), &probe), "ATT0.eml");
    }

    #[test]
    fn test_sanitize_file_name() {
        assert_eq!(sanitize_file_name("a/b\\c:d*e?f"), "a b c d e f");
        assert_eq!(sanitize_file_name("<x>|\"y\""), " x   y ");
        assert_eq!(sanitize_file_name("line\r\nbreak"), "line break");
        assert_eq!(sanitize_file_name("tab\there\0"), "tab here ");
        assert_eq!(sanitize_file_name("report.pdf"), "report.pdf");
    }
}
