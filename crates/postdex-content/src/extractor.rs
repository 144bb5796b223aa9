//! Document assembly.
//!
//! An [`Extractor`] turns raw post content into a [`CanonicalDocument`]. The
//! text conventions split the document into metadata and body and hand both
//! to a [`TextFieldSet`]; HTML is parsed into an [`HtmlTree`] for an
//! [`HtmlFieldSet`].
//!
//! # Example
//!
//! ```rust
//! use postdex_content::Extractor;
//! use postdex_content::markdown::TextFieldOverrides;
//!
//! let extractor = Extractor::front_matter("https://example.com/blog/", TextFieldOverrides::new());
//! let doc = extractor
//!     .parse("---\ntitle: Hello\n---\n\nFirst paragraph.\n", "hello")
//!     .unwrap();
//!
//! assert_eq!(doc.url(), "https://example.com/blog/hello");
//! assert_eq!(doc.title(), "Hello");
//! assert_eq!(doc.paragraphs(), ["First paragraph."]);
//! ```

use std::io;
use std::path::Path;

use postdex_core::{
    CanonicalDocument, DocumentFormat, Error, ExtractorConfig, Result, id_from_path,
};

use crate::html::{HtmlFieldOverrides, HtmlFieldSet, HtmlTree};
use crate::markdown::{TextFieldOverrides, TextFieldSet};
use crate::metadata::MetadataConvention;

fn normalize_base_url(base_url: &str) -> String {
    base_url.strip_suffix('/').unwrap_or(base_url).to_string()
}

fn document_url(base_url: &str, document_id: &str) -> String {
    format!("{base_url}/{document_id}")
}

// ============================================================================
// MarkdownExtractor
// ============================================================================

/// Extractor for Markdown with a text metadata header.
#[derive(Debug, Clone)]
pub struct MarkdownExtractor {
    base_url: String,
    convention: MetadataConvention,
    fields: TextFieldSet,
}

impl MarkdownExtractor {
    /// Create an extractor; `overrides` are merged onto the default fields.
    pub fn new(
        base_url: &str,
        convention: MetadataConvention,
        overrides: TextFieldOverrides,
    ) -> Self {
        Self {
            base_url: normalize_base_url(base_url),
            convention,
            fields: TextFieldSet::with_overrides(overrides),
        }
    }

    /// Base URL without its trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Header convention used to split documents.
    pub fn convention(&self) -> MetadataConvention {
        self.convention
    }

    /// Field functions in use.
    pub fn fields(&self) -> &TextFieldSet {
        &self.fields
    }

    /// Extract the record for `content`.
    ///
    /// Only malformed inline markup fails; missing data yields empty fields.
    pub fn parse(&self, content: &str, document_id: &str) -> Result<CanonicalDocument> {
        log::trace!(
            "Extracting {document_id} with {:?} metadata",
            self.convention
        );
        let (metadata, body) = self.convention.split(content).into_parts();
        let fields = &self.fields;

        Ok(
            CanonicalDocument::builder(document_url(&self.base_url, document_id))
                .title((fields.title)(&metadata, body)?)
                .date((fields.date)(&metadata, body)?)
                .tags((fields.tags)(&metadata, body)?)
                .sections((fields.sections)(&metadata, body)?)
                .summary((fields.summary)(&metadata, body)?)
                .paragraphs((fields.paragraphs)(&metadata, body)?)
                .snippets((fields.snippets)(&metadata, body)?)
                .build(),
        )
    }
}

// ============================================================================
// HtmlExtractor
// ============================================================================

/// Extractor for HTML posts using `data-bdsm` markers.
#[derive(Debug, Clone)]
pub struct HtmlExtractor {
    base_url: String,
    fields: HtmlFieldSet,
    strict: bool,
}

impl HtmlExtractor {
    /// Create a lenient extractor; `overrides` are merged onto the defaults.
    pub fn new(base_url: &str, overrides: HtmlFieldOverrides) -> Self {
        Self {
            base_url: normalize_base_url(base_url),
            fields: HtmlFieldSet::with_overrides(overrides),
            strict: false,
        }
    }

    /// In strict mode any parse error reported by the tree builder counts
    /// as a parse failure.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Whether strict mode is on.
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Base URL without its trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Field functions in use.
    pub fn fields(&self) -> &HtmlFieldSet {
        &self.fields
    }

    /// Extract the record for `content`.
    ///
    /// A document that fails to parse yields the url-only record.
    pub fn parse(&self, content: &str, document_id: &str) -> Result<CanonicalDocument> {
        log::trace!("Extracting {document_id} as HTML");
        let url = document_url(&self.base_url, document_id);

        let Some(tree) = self.parse_tree(content, document_id) else {
            return Ok(CanonicalDocument::empty(url));
        };
        let fields = &self.fields;

        Ok(CanonicalDocument::builder(url)
            .title((fields.title)(&tree)?)
            .date((fields.date)(&tree)?)
            .tags((fields.tags)(&tree)?)
            .sections((fields.sections)(&tree)?)
            .summary((fields.summary)(&tree)?)
            .paragraphs((fields.paragraphs)(&tree)?)
            .snippets((fields.snippets)(&tree)?)
            .build())
    }

    fn parse_tree(&self, content: &str, document_id: &str) -> Option<HtmlTree> {
        if content.trim().is_empty() {
            log::debug!("HTML document {document_id} is blank");
            return None;
        }

        let tree = HtmlTree::parse(content);
        if self.strict && !tree.is_clean() {
            let first = tree.errors().next().unwrap_or_default();
            log::debug!(
                "HTML document {document_id} has {} parse errors (first: {first})",
                tree.errors().count()
            );
            return None;
        }
        Some(tree)
    }
}

// ============================================================================
// Extractor
// ============================================================================

/// Counts from [`Extractor::parse_batch`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Documents extracted successfully.
    pub documents: usize,
    /// Documents that failed.
    pub failures: usize,
}

/// A configured extractor for one input format.
#[derive(Debug, Clone)]
pub enum Extractor {
    /// Markdown with `---` front matter.
    FrontMatter(MarkdownExtractor),
    /// Markdown with a MultiMarkdown header.
    MultiMarkdown(MarkdownExtractor),
    /// HTML with `data-bdsm` markers.
    Html(HtmlExtractor),
}

impl Extractor {
    /// Front matter extractor.
    pub fn front_matter(base_url: &str, overrides: TextFieldOverrides) -> Self {
        Extractor::FrontMatter(MarkdownExtractor::new(
            base_url,
            MetadataConvention::FrontMatter,
            overrides,
        ))
    }

    /// MultiMarkdown extractor.
    pub fn multimarkdown(base_url: &str, overrides: TextFieldOverrides) -> Self {
        Extractor::MultiMarkdown(MarkdownExtractor::new(
            base_url,
            MetadataConvention::MultiMarkdown,
            overrides,
        ))
    }

    /// Lenient HTML extractor.
    pub fn html(base_url: &str, overrides: HtmlFieldOverrides) -> Self {
        Extractor::Html(HtmlExtractor::new(base_url, overrides))
    }

    /// Default-field extractor described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the config is invalid.
    pub fn from_config(config: &ExtractorConfig) -> Result<Self> {
        config.validate()?;
        let base_url = config.base_url.as_str();
        Ok(match config.format {
            DocumentFormat::FrontMatter => Self::front_matter(base_url, TextFieldOverrides::new()),
            DocumentFormat::MultiMarkdown => {
                Self::multimarkdown(base_url, TextFieldOverrides::new())
            }
            DocumentFormat::Html => Extractor::Html(
                HtmlExtractor::new(base_url, HtmlFieldOverrides::new()).strict(config.strict_html),
            ),
        })
    }

    /// Input format handled by this extractor.
    pub fn format(&self) -> DocumentFormat {
        match self {
            Extractor::FrontMatter(_) => DocumentFormat::FrontMatter,
            Extractor::MultiMarkdown(_) => DocumentFormat::MultiMarkdown,
            Extractor::Html(_) => DocumentFormat::Html,
        }
    }

    /// Base URL without its trailing slash.
    pub fn base_url(&self) -> &str {
        match self {
            Extractor::FrontMatter(e) | Extractor::MultiMarkdown(e) => e.base_url(),
            Extractor::Html(e) => e.base_url(),
        }
    }

    /// Extract the record for `content`, published at
    /// `{base_url}/{document_id}`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Markup`] if a field contains malformed markup.
    pub fn parse(&self, content: &str, document_id: &str) -> Result<CanonicalDocument> {
        match self {
            Extractor::FrontMatter(e) | Extractor::MultiMarkdown(e) => {
                e.parse(content, document_id)
            }
            Extractor::Html(e) => e.parse(content, document_id),
        }
    }

    /// Read and extract the file at `path`, using its slugified file stem as
    /// the document identifier.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read or has no usable
    /// name, [`Error::Markup`] as for [`parse`](Self::parse).
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<CanonicalDocument> {
        let path = path.as_ref();
        let document_id = id_from_path(path).ok_or_else(|| {
            Error::io_with_path(
                io::Error::new(io::ErrorKind::InvalidInput, "no usable file name"),
                path,
            )
        })?;
        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        self.parse(&content, &document_id)
    }

    /// Extract many `(document_id, content)` pairs.
    ///
    /// Every document gets its own result; a failure is logged and counted
    /// but does not stop the batch.
    pub fn parse_batch<I, K, C>(&self, documents: I) -> (Vec<Result<CanonicalDocument>>, BatchReport)
    where
        I: IntoIterator<Item = (K, C)>,
        K: AsRef<str>,
        C: AsRef<str>,
    {
        let mut report = BatchReport::default();
        let results = documents
            .into_iter()
            .map(|(id, content)| {
                let id = id.as_ref();
                let result = self.parse(content.as_ref(), id);
                match &result {
                    Ok(_) => report.documents += 1,
                    Err(e) => {
                        log::warn!("Skipping document {id}: {e}");
                        report.failures += 1;
                    }
                }
                result
            })
            .collect();

        log::debug!(
            "Batch complete: {} extracted, {} failed",
            report.documents,
            report.failures
        );
        (results, report)
    }
}

// ============================================================================
// Tests
// ============================================================================
