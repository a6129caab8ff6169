//! # headerwise-mime
//!
//! Decoding of MIME header metadata for mail clients.
//!
//! ## Features
//!
//! - **Encoded-words**: RFC 2047 `=?charset?B|Q?payload?=` decoding that never
//!   fails outward
//! - **Charsets**: Label resolution with fallback to a default codec
//! - **Content types**: Media type and charset from `Content-Type` values
//! - **Attachment names**: `name`/`filename` parameters, names for embedded
//!   messages, and file name sanitizing
//!
//! ## Quick Start
//!
//! ```
//! use headerwise_mime::{decode_encoded_words, extract_file_name, parse_content_type};
//!
//! let subject = decode_encoded_words("=?UTF-8?Q?Hello_World?=");
//! assert_eq!(subject, "Hello World");
//!
//! let info = parse_content_type("text/plain; charset=iso-8859-1");
//! assert_eq!(info.media_type, "text/plain");
//!
//! let name = extract_file_name("attachment; filename=\"report.pdf\"");
//! assert_eq!(name, "report.pdf");
//! ```
//!
//! ### Embedded messages
//!
//! ```
//! use headerwise_mime::{FileNameConfig, FsProbe, rfc822_file_name, sanitize_file_name};
//!
//! let config = FileNameConfig::builder().line_separator("\n").build();
//! let probe = FsProbe::new(std::env::temp_dir());
//! let name = rfc822_file_name("Subject: Q3: plans\nFrom: a@b.c\n", &config, &probe);
//! assert_eq!(sanitize_file_name(&name), "Q3  plans.eml");
//! ```
//!
//! ### Error handling
//!
//! The decoding entry points never fail. Each has a fallible counterpart
//! (e.g. [`try_decode_encoded_words`]) that reports why decoding failed.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod config;
mod content_type;
mod error;
mod filename;

pub mod charset;
pub mod encoded_word;
pub mod encoding;

pub use charset::{Charset, resolve_charset, resolve_charset_or_utf8};
pub use config::{FileNameConfig, FileNameConfigBuilder};
pub use content_type::{ContentTypeInfo, extract_file_type, parse_content_type};
pub use encoded_word::{
    EncodedWord, Segment, Segments, WordEncoding, decode_encoded_words, segments,
    try_decode_encoded_words,
};
pub use error::{Error, Result};
pub use filename::{
    FsProbe, ILLEGAL_FILE_NAME_CHARS, NameProbe, default_file_name, extract_file_name,
    rfc822_file_name, sanitize_file_name,
};
