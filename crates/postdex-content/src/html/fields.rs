//! Default field extractors for HTML documents.
//!
//! HTML posts mark their metadata with `data-bdsm` roles:
//!
//! ```html
//! <h1 data-bdsm="title">Sample title</h1>
//! <time data-bdsm="date">2025-01-01</time>
//! <ul data-bdsm="tags"><li>tag</li><li>test</li></ul>
//! <p data-bdsm="summary">Sample summary</p>
//! ```
//!
//! Body fields come from plain elements: headings (except the title) are
//! sections, every `p` is a paragraph and every `code` is a snippet.

use std::fmt;
use std::sync::{Arc, LazyLock};

use chrono::{DateTime, Utc};
use postdex_core::Result;
use scraper::Selector;

use super::tree::{HtmlNode, HtmlTree};
use crate::date::parse_date;

/// A field function over a parsed tree.
pub type HtmlField<T> = Arc<dyn Fn(&HtmlTree) -> Result<T> + Send + Sync>;

static LIST_ITEM_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("li").expect("Failed to parse list item selector - this is a bug")
});

static HEADING_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("h1, h2, h3, h4, h5, h6")
        .expect("Failed to parse heading selector - this is a bug")
});

static PARAGRAPH_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("p").expect("Failed to parse paragraph selector - this is a bug")
});

static CODE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("code").expect("Failed to parse code selector - this is a bug")
});

/// The seven field functions used for an HTML document.
#[derive(Clone)]
pub struct HtmlFieldSet {
    /// Post title.
    pub title: HtmlField<String>,
    /// Publication date.
    pub date: HtmlField<Option<DateTime<Utc>>>,
    /// Tags.
    pub tags: HtmlField<Vec<String>>,
    /// Section headings.
    pub sections: HtmlField<Vec<String>>,
    /// Summary.
    pub summary: HtmlField<String>,
    /// Body paragraphs.
    pub paragraphs: HtmlField<Vec<String>>,
    /// Code snippets.
    pub snippets: HtmlField<Vec<String>>,
}

impl Default for HtmlFieldSet {
    fn default() -> Self {
        Self {
            title: Arc::new(parse_title),
            date: Arc::new(parse_date_field),
            tags: Arc::new(parse_tags),
            sections: Arc::new(parse_sections),
            summary: Arc::new(parse_summary),
            paragraphs: Arc::new(parse_paragraphs),
            snippets: Arc::new(parse_snippets),
        }
    }
}

impl HtmlFieldSet {
    /// Defaults with `overrides` applied field by field.
    pub fn with_overrides(overrides: HtmlFieldOverrides) -> Self {
        let defaults = Self::default();
        Self {
            title: overrides.title.unwrap_or(defaults.title),
            date: overrides.date.unwrap_or(defaults.date),
            tags: overrides.tags.unwrap_or(defaults.tags),
            sections: overrides.sections.unwrap_or(defaults.sections),
            summary: overrides.summary.unwrap_or(defaults.summary),
            paragraphs: overrides.paragraphs.unwrap_or(defaults.paragraphs),
            snippets: overrides.snippets.unwrap_or(defaults.snippets),
        }
    }
}

impl fmt::Debug for HtmlFieldSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HtmlFieldSet").finish_non_exhaustive()
    }
}

/// Replacement HTML field functions; unset fields keep the default.
#[derive(Clone, Default)]
pub struct HtmlFieldOverrides {
    title: Option<HtmlField<String>>,
    date: Option<HtmlField<Option<DateTime<Utc>>>>,
    tags: Option<HtmlField<Vec<String>>>,
    sections: Option<HtmlField<Vec<String>>>,
    summary: Option<HtmlField<String>>,
    paragraphs: Option<HtmlField<Vec<String>>>,
    snippets: Option<HtmlField<Vec<String>>>,
}

impl HtmlFieldOverrides {
    /// No overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the title extractor.
    pub fn title<F>(mut self, f: F) -> Self
    where
        F: Fn(&HtmlTree) -> Result<String> + Send + Sync + 'static,
    {
        self.title = Some(Arc::new(f));
        self
    }

    /// Override the date extractor.
    pub fn date<F>(mut self, f: F) -> Self
    where
        F: Fn(&HtmlTree) -> Result<Option<DateTime<Utc>>> + Send + Sync + 'static,
    {
        self.date = Some(Arc::new(f));
        self
    }

    /// Override the tags extractor.
    pub fn tags<F>(mut self, f: F) -> Self
    where
        F: Fn(&HtmlTree) -> Result<Vec<String>> + Send + Sync + 'static,
    {
        self.tags = Some(Arc::new(f));
        self
    }

    /// Override the sections extractor.
    pub fn sections<F>(mut self, f: F) -> Self
    where
        F: Fn(&HtmlTree) -> Result<Vec<String>> + Send + Sync + 'static,
    {
        self.sections = Some(Arc::new(f));
        self
    }

    /// Override the summary extractor.
    pub fn summary<F>(mut self, f: F) -> Self
    where
        F: Fn(&HtmlTree) -> Result<String> + Send + Sync + 'static,
    {
        self.summary = Some(Arc::new(f));
        self
    }

    /// Override the paragraphs extractor.
    pub fn paragraphs<F>(mut self, f: F) -> Self
    where
        F: Fn(&HtmlTree) -> Result<Vec<String>> + Send + Sync + 'static,
    {
        self.paragraphs = Some(Arc::new(f));
        self
    }

    /// Override the snippets extractor.
    pub fn snippets<F>(mut self, f: F) -> Self
    where
        F: Fn(&HtmlTree) -> Result<Vec<String>> + Send + Sync + 'static,
    {
        self.snippets = Some(Arc::new(f));
        self
    }
}

impl fmt::Debug for HtmlFieldOverrides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HtmlFieldOverrides")
            .field("title", &self.title.is_some())
            .field("date", &self.date.is_some())
            .field("tags", &self.tags.is_some())
            .field("sections", &self.sections.is_some())
            .field("summary", &self.summary.is_some())
            .field("paragraphs", &self.paragraphs.is_some())
            .field("snippets", &self.snippets.is_some())
            .finish()
    }
}

// ============================================================================
// Default field functions
// ============================================================================

fn marked_text(tree: &HtmlTree, role: &str) -> Result<String> {
    match tree.marked(role) {
        Some(node) => node.text(),
        None => Ok(String::new()),
    }
}

fn texts(nodes: &[HtmlNode<'_>]) -> Result<Vec<String>> {
    nodes.iter().map(HtmlNode::text).collect()
}

/// Text of the element marked `title`.
pub fn parse_title(tree: &HtmlTree) -> Result<String> {
    marked_text(tree, "title")
}

/// Text of the element marked `summary`.
pub fn parse_summary(tree: &HtmlTree) -> Result<String> {
    marked_text(tree, "summary")
}

/// Text of the element marked `date`, as a date/time.
pub fn parse_date_field(tree: &HtmlTree) -> Result<Option<DateTime<Utc>>> {
    Ok(parse_date(&marked_text(tree, "date")?))
}

/// Text of every `li` inside the element marked `tags`.
pub fn parse_tags(tree: &HtmlTree) -> Result<Vec<String>> {
    match tree.marked("tags") {
        Some(list) => texts(&list.select_with(&LIST_ITEM_SELECTOR)),
        None => Ok(Vec::new()),
    }
}

/// Text of every heading not marked as the title.
pub fn parse_sections(tree: &HtmlTree) -> Result<Vec<String>> {
    let headings: Vec<_> = tree
        .select_with(&HEADING_SELECTOR)
        .into_iter()
        .filter(|heading| heading.role() != Some("title"))
        .collect();
    texts(&headings)
}

/// Text of every `p`.
pub fn parse_paragraphs(tree: &HtmlTree) -> Result<Vec<String>> {
    texts(&tree.select_with(&PARAGRAPH_SELECTOR))
}

/// Text of every `code`.
pub fn parse_snippets(tree: &HtmlTree) -> Result<Vec<String>> {
    texts(&tree.select_with(&CODE_SELECTOR))
}

// ============================================================================
// Tests
// ============================================================================
