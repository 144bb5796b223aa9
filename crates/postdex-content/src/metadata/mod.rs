//! Metadata header extraction for text formats.
//!
//! Two header conventions are supported:
//!
//! - [`frontmatter`]: a block between two `---` lines at the top of the file
//! - [`multimarkdown`]: leading `key: value` lines ending at the first blank line
//!
//! Both split a document into its [`Metadata`] and the body that field
//! extraction runs over. A missing or unusable header is not an error; it
//! yields empty metadata and the whole document as body.
//!
//! # Example
//!
//! ```rust
//! use postdex_content::metadata::MetadataConvention;
//!
//! let split = MetadataConvention::MultiMarkdown.split("title: Hello\n\nBody text");
//! assert_eq!(split.metadata().get("title"), Some("Hello"));
//! assert_eq!(split.body(), "Body text");
//! ```

pub mod frontmatter;
pub mod multimarkdown;

use postdex_core::Metadata;

/// Header conventions for text documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetadataConvention {
    /// `---` delimited front matter.
    FrontMatter,
    /// MultiMarkdown leading key/value lines.
    MultiMarkdown,
}

impl MetadataConvention {
    /// Split `document` into metadata and body using this convention.
    pub fn split(self, document: &str) -> HeaderSplit<'_> {
        match self {
            MetadataConvention::FrontMatter => frontmatter::split(document),
            MetadataConvention::MultiMarkdown => multimarkdown::split(document),
        }
    }

    /// Only the metadata of `document`.
    pub fn extract_metadata(self, document: &str) -> Metadata {
        self.split(document).into_parts().0
    }
}

/// A document divided into its header metadata and its body.
#[derive(Debug, Clone)]
pub struct HeaderSplit<'a> {
    metadata: Metadata,
    body: &'a str,
    had_header: bool,
}

impl<'a> HeaderSplit<'a> {
    fn with_header(metadata: Metadata, body: &'a str) -> Self {
        Self {
            metadata,
            body,
            had_header: true,
        }
    }

    fn without_header(body: &'a str) -> Self {
        Self {
            metadata: Metadata::new(),
            body,
            had_header: false,
        }
    }

    /// Whether a header block was recognized (it may still be empty).
    pub fn had_header(&self) -> bool {
        self.had_header
    }

    /// The parsed metadata.
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// The body following the header.
    pub fn body(&self) -> &'a str {
        self.body
    }

    /// Take the metadata and body.
    pub fn into_parts(self) -> (Metadata, &'a str) {
        (self.metadata, self.body)
    }
}

/// One line of a text plus its byte span, line terminator included.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LineSpan<'a> {
    pub text: &'a str,
    pub end: usize,
}

/// Lines of `text` with `\n` / `\r\n` stripped and the offset just past each.
pub(crate) fn line_spans(text: &str) -> impl Iterator<Item = LineSpan<'_>> {
    let mut offset = 0;
    text.split_inclusive('\n').map(move |raw| {
        offset += raw.len();
        LineSpan {
            text: raw.trim_end_matches(['\n', '\r']),
            end: offset,
        }
    })
}

pub(crate) fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}
