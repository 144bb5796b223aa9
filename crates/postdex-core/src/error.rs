//! Error types for the Postdex extraction engine.
//!
//! Two regimes exist. [`MarkupError`] is raised by the tag stripper when a
//! field contains malformed markup; it propagates out of a `parse` call and
//! means the document could not be indexed. Structural absence of data
//! (missing metadata, unparsable dates, unparsable HTML) is never an error.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for Postdex operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Malformed markup found while stripping tags.
///
/// Every variant carries the byte offset into the scanned text at which the
/// problem was detected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MarkupError {
    /// A `<` with no tag after it, or a tag with no matching `>`.
    #[error("Malformed HTML/XML text: tag starting at byte {position} is never terminated by '>'")]
    UnterminatedTag {
        /// Offset of the scan start.
        position: usize,
    },

    /// `<` or `</` not immediately followed by a tag name.
    #[error("Malformed HTML/XML text: a valid tag name must follow '<' (byte {position})")]
    InvalidTagName {
        /// Offset where the name was expected.
        position: usize,
    },

    /// A closing tag with no open tag to close.
    #[error("Malformed HTML/XML text: closing tag </{name}> at byte {position} has no opening match")]
    UnmatchedClosingTag {
        /// Name of the closing tag.
        name: String,
        /// Offset of the closing tag's `<`.
        position: usize,
    },

    /// A closing tag whose name differs from the innermost open tag.
    #[error("Malformed HTML/XML text: mismatched tags {{ open: {open}, close: {close} }} at byte {position}")]
    MismatchedTag {
        /// Innermost open tag.
        open: String,
        /// Closing tag actually found.
        close: String,
        /// Offset of the closing tag's `<`.
        position: usize,
    },

    /// Input ended while a tag was still open.
    #[error("Malformed HTML/XML text: tag <{name}> is never closed")]
    UnclosedTag {
        /// Name of the innermost unclosed tag.
        name: String,
        /// Length of the input, where the scan ended.
        position: usize,
    },
}

impl MarkupError {
    /// Byte offset at which the problem was detected.
    pub fn position(&self) -> usize {
        match self {
            MarkupError::UnterminatedTag { position }
            | MarkupError::InvalidTagName { position }
            | MarkupError::UnmatchedClosingTag { position, .. }
            | MarkupError::MismatchedTag { position, .. }
            | MarkupError::UnclosedTag { position, .. } => *position,
        }
    }
}

/// Errors that can occur in Postdex.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Malformed markup inside an extracted field.
    #[error(transparent)]
    Markup(#[from] MarkupError),

    /// Invalid or unreadable configuration.
    #[error("Configuration error: {message}")]
    Config {
        /// What is wrong with the configuration.
        message: String,
    },

    /// I/O failure on a specific path.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// Path being read or written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A CSS selector supplied to the markup tree could not be parsed.
    #[error("Invalid selector '{selector}': {message}")]
    Selector {
        /// The offending selector.
        selector: String,
        /// Parser diagnostic.
        message: String,
    },
}

impl Error {
    /// Whether this error means "the document could not be indexed" because
    /// of malformed markup, as opposed to a setup or programmer error.
    pub fn is_malformed_markup(&self) -> bool {
        matches!(self, Error::Markup(_))
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Creates an I/O error tied to the path that was being accessed.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates a selector error.
    pub fn selector<S, M>(selector: S, message: M) -> Self
    where
        S: Into<String>,
        M: Into<String>,
    {
        Error::Selector {
            selector: selector.into(),
            message: message.into(),
        }
    }
}
