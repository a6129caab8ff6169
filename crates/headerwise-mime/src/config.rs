//! Attachment naming configuration.

/// Settings for deriving attachment file names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileNameConfig {
    /// Line terminator used in raw message text.
    pub line_separator: String,
    /// Stem of generated names (e.g., "ATT" for "ATT.eml", "ATT0.eml").
    pub default_stem: String,
    /// Extension given to embedded messages, without the dot.
    pub extension: String,
}

impl FileNameConfig {
    /// Creates the default configuration: CRLF lines, `ATT` stem, `eml`
    /// extension.
    #[must_use]
    pub fn new() -> Self {
        Self {
            line_separator: "\r\n".to_string(),
            default_stem: "ATT".to_string(),
            extension: "eml".to_string(),
        }
    }

    /// Creates a configuration builder.
    #[must_use]
    pub fn builder() -> FileNameConfigBuilder {
        FileNameConfigBuilder::new()
    }
}

impl Default for FileNameConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for [`FileNameConfig`].
#[derive(Debug, Clone)]
pub struct FileNameConfigBuilder {
    line_separator: String,
    default_stem: String,
    extension: String,
}

impl FileNameConfigBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        let FileNameConfig {
            line_separator,
            default_stem,
            extension,
        } = FileNameConfig::new();
        Self {
            line_separator,
            default_stem,
            extension,
        }
    }

    /// Sets the line terminator.
    #[must_use]
    pub fn line_separator(mut self, separator: impl Into<String>) -> Self {
        self.line_separator = separator.into();
        self
    }

    /// Sets the stem of generated names.
    #[must_use]
    pub fn default_stem(mut self, stem: impl Into<String>) -> Self {
        self.default_stem = stem.into();
        self
    }

    /// Sets the extension, with or without a leading dot.
    #[must_use]
    pub fn extension(mut self, extension: impl Into<String>) -> Self {
        let extension: String = extension.into();
        self.extension = extension.trim_start_matches('.').to_string();
        self
    }

    /// Builds the configuration.
    #[must_use]
    pub fn build(self) -> FileNameConfig {
        FileNameConfig {
            line_separator: self.line_separator,
            default_stem: self.default_stem,
            extension: self.extension,
        }
    }
}

impl Default for FileNameConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
