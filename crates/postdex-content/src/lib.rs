//! Postdex Content — tag stripping and per-format field extraction.
//!
//! This crate turns raw blog-post content into a
//! [`CanonicalDocument`](postdex_core::CanonicalDocument). Three input
//! conventions are supported: Markdown with `---` front matter, Markdown
//! with a MultiMarkdown header, and HTML with `data-bdsm` markers.
//!
//! # Modules
//!
//! - [`strip`]: the well-formedness checking tag stripper
//! - [`metadata`]: header extraction for the two text conventions
//!   - [`metadata::frontmatter`]: `---` delimited front matter
//!   - [`metadata::multimarkdown`]: MultiMarkdown key/value header
//! - [`markdown`]: default field functions over metadata and body
//! - [`html`]: the HTML query interface and its default field functions
//! - [`date`]: publication date parsing
//! - [`extractor`]: [`Extractor`], which assembles the record
//!
//! # Errors
//!
//! Only malformed inline markup fails a document. Missing metadata, missing
//! fields, unparsable dates and unparsable HTML all yield empty fields.
//!
//! # Example
//!
//! ```rust
//! use postdex_content::Extractor;
//! use postdex_content::markdown::TextFieldOverrides;
//!
//! let extractor = Extractor::multimarkdown("https://example.com", TextFieldOverrides::new());
//! let doc = extractor
//!     .parse("title: Hello\ntags: rust | blog\n\n## Intro\n\nBody.\n", "hello")
//!     .unwrap();
//!
//! assert_eq!(doc.tags(), ["rust", "blog"]);
//! assert_eq!(doc.sections(), ["Intro"]);
//! ```

#![doc = include_str!("../README.md")]

pub mod date;
pub mod extractor;
pub mod html;
pub mod markdown;
pub mod metadata;
pub mod strip;

#[cfg(test)]
mod proptests;

// Re-export commonly used types
pub use extractor::{BatchReport, Extractor, HtmlExtractor, MarkdownExtractor};
pub use html::{HtmlFieldOverrides, HtmlFieldSet, HtmlNode, HtmlTree};
pub use markdown::{TextFieldOverrides, TextFieldSet};
pub use metadata::{HeaderSplit, MetadataConvention};
pub use strip::strip_tags;
