//! Extractor configuration.
//!
//! Configuration is fixed when an extractor is constructed. It can be built
//! in code or loaded from TOML:
//!
//! ```toml
//! base_url = "https://example.com/blog/"
//! format = "front-matter"
//! strict_html = false
//! ```

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The input conventions a blog post can be authored in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentFormat {
    /// Markdown with a `---` delimited front matter block.
    #[default]
    FrontMatter,
    /// Markdown with a leading MultiMarkdown key/value header.
    MultiMarkdown,
    /// HTML with `data-bdsm` marker attributes.
    Html,
}

impl DocumentFormat {
    /// Guess the format from a file extension (case-insensitive).
    ///
    /// ```rust
    /// use std::path::Path;
    /// use postdex_core::DocumentFormat;
    ///
    /// assert_eq!(DocumentFormat::from_path(Path::new("post.md")), Some(DocumentFormat::FrontMatter));
    /// assert_eq!(DocumentFormat::from_path(Path::new("post.HTML")), Some(DocumentFormat::Html));
    /// assert_eq!(DocumentFormat::from_path(Path::new("post.txt")), None);
    /// ```
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "md" | "markdown" => Some(DocumentFormat::FrontMatter),
            "mmd" | "multimarkdown" => Some(DocumentFormat::MultiMarkdown),
            "html" | "htm" => Some(DocumentFormat::Html),
            _ => None,
        }
    }

    /// Stable name, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentFormat::FrontMatter => "front-matter",
            DocumentFormat::MultiMarkdown => "multi-markdown",
            DocumentFormat::Html => "html",
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Settings for constructing an extractor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExtractorConfig {
    /// Prefix of every document URL. One trailing `/` is dropped.
    pub base_url: String,

    /// Input convention of the documents.
    #[serde(default)]
    pub format: DocumentFormat,

    /// Treat any HTML parse error reported by the tree builder as a parse
    /// failure (url-only record). Only blank input fails otherwise.
    #[serde(default)]
    pub strict_html: bool,
}

impl ExtractorConfig {
    /// Config for `format` with default options.
    pub fn new(base_url: impl Into<String>, format: DocumentFormat) -> Self {
        Self {
            base_url: base_url.into(),
            format,
            strict_html: false,
        }
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: ExtractorConfig = toml::from_str(content)
            .map_err(|e| Error::config(format!("Failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        log::debug!("Loaded extractor config from {}", path.display());
        Self::from_toml_str(&content)
    }

    /// Serialize to pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Check invariants that serde cannot express.
    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(Error::config("base_url must not be empty"));
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
