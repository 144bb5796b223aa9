//! Canonical document representation.
//!
//! `CanonicalDocument` is the record produced once per blog post and handed
//! to a search/indexing backend as an opaque payload. Only `url` is
//! mandatory; every other field falls back to an empty value when the
//! source document does not provide it.
//!
//! ```rust
//! use postdex_core::CanonicalDocument;
//!
//! let doc = CanonicalDocument::builder("https://example.com/blog/hello")
//!     .title("Hello")
//!     .tags(vec!["rust".to_string()])
//!     .build();
//!
//! assert_eq!(doc.url(), "https://example.com/blog/hello");
//! assert_eq!(doc.title(), "Hello");
//! assert!(doc.date().is_none());
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The structured, indexable record extracted from one blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalDocument {
    url: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    date: Option<DateTime<Utc>>,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    sections: Vec<String>,
    #[serde(default)]
    summary: String,
    #[serde(default)]
    paragraphs: Vec<String>,
    #[serde(default)]
    snippets: Vec<String>,
}

impl CanonicalDocument {
    /// Create a builder for a document with the given URL.
    pub fn builder(url: impl Into<String>) -> CanonicalDocumentBuilder {
        CanonicalDocumentBuilder::new(url)
    }

    /// A document carrying only its URL.
    pub fn empty(url: impl Into<String>) -> Self {
        Self::builder(url).build()
    }

    /// Document URL, `{base_url}/{document_id}`.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Post title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Publication date, if one was found and parsed.
    pub fn date(&self) -> Option<DateTime<Utc>> {
        self.date
    }

    /// Tags in extraction order.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Section headings in document order.
    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    /// Summary or introduction.
    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// Body paragraphs in document order.
    pub fn paragraphs(&self) -> &[String] {
        &self.paragraphs
    }

    /// Code snippets in document order.
    pub fn snippets(&self) -> &[String] {
        &self.snippets
    }

    /// Whether every field other than `url` is at its default.
    pub fn is_empty(&self) -> bool {
        self.title.is_empty()
            && self.date.is_none()
            && self.tags.is_empty()
            && self.sections.is_empty()
            && self.summary.is_empty()
            && self.paragraphs.is_empty()
            && self.snippets.is_empty()
    }
}

/// Builder for [`CanonicalDocument`].
#[derive(Debug)]
pub struct CanonicalDocumentBuilder {
    doc: CanonicalDocument,
}

impl CanonicalDocumentBuilder {
    fn new(url: impl Into<String>) -> Self {
        Self {
            doc: CanonicalDocument {
                url: url.into(),
                title: String::new(),
                date: None,
                tags: Vec::new(),
                sections: Vec::new(),
                summary: String::new(),
                paragraphs: Vec::new(),
                snippets: Vec::new(),
            },
        }
    }

    /// Set the title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.doc.title = title.into();
        self
    }

    /// Set the publication date.
    pub fn date(mut self, date: Option<DateTime<Utc>>) -> Self {
        self.doc.date = date;
        self
    }

    /// Set the tags.
    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.doc.tags = tags;
        self
    }

    /// Set the section headings.
    pub fn sections(mut self, sections: Vec<String>) -> Self {
        self.doc.sections = sections;
        self
    }

    /// Set the summary.
    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.doc.summary = summary.into();
        self
    }

    /// Set the paragraphs.
    pub fn paragraphs(mut self, paragraphs: Vec<String>) -> Self {
        self.doc.paragraphs = paragraphs;
        self
    }

    /// Set the code snippets.
    pub fn snippets(mut self, snippets: Vec<String>) -> Self {
        self.doc.snippets = snippets;
        self
    }

    /// Build the document.
    pub fn build(self) -> CanonicalDocument {
        self.doc
    }
}

// ============================================================================
// Tests
// ============================================================================
