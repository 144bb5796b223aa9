//! Default field extractors for Markdown bodies.
//!
//! Every field function receives the document [`Metadata`] and the body as
//! explicit arguments. `title`, `date`, `tags` and `summary` come from the
//! metadata; `sections`, `paragraphs` and `snippets` come from the body.
//! Inline markup in any extracted value is removed with
//! [`strip_tags`](crate::strip::strip_tags), so malformed markup surfaces as
//! an error.
//!
//! A [`TextFieldSet`] bundles the seven functions. Callers replace any subset
//! through [`TextFieldOverrides`]:
//!
//! ```rust
//! use postdex_content::markdown::{TextFieldOverrides, TextFieldSet};
//! use postdex_core::Metadata;
//!
//! let fields = TextFieldSet::with_overrides(
//!     TextFieldOverrides::new().title(|_, _| Ok("My own title".to_string())),
//! );
//! let metadata: Metadata = [("title", "Ignored")].into_iter().collect();
//! assert_eq!((fields.title)(&metadata, "").unwrap(), "My own title");
//! assert_eq!((fields.summary)(&metadata, "").unwrap(), "");
//! ```

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use postdex_core::{Metadata, Result};

use super::{heading, is_fence};
use crate::date::parse_date;
use crate::metadata::is_blank;
use crate::strip::strip_tags;

/// A field function over `(metadata, body)`.
pub type TextField<T> = Arc<dyn Fn(&Metadata, &str) -> Result<T> + Send + Sync>;

/// The seven field functions used for a text document.
#[derive(Clone)]
pub struct TextFieldSet {
    /// Post title.
    pub title: TextField<String>,
    /// Publication date.
    pub date: TextField<Option<DateTime<Utc>>>,
    /// Tags.
    pub tags: TextField<Vec<String>>,
    /// Section headings.
    pub sections: TextField<Vec<String>>,
    /// Summary.
    pub summary: TextField<String>,
    /// Body paragraphs.
    pub paragraphs: TextField<Vec<String>>,
    /// Code snippets.
    pub snippets: TextField<Vec<String>>,
}

impl Default for TextFieldSet {
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

impl TextFieldSet {
    /// Defaults with `overrides` applied field by field.
    pub fn with_overrides(overrides: TextFieldOverrides) -> Self {
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

impl fmt::Debug for TextFieldSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextFieldSet").finish_non_exhaustive()
    }
}

/// Replacement field functions; unset fields keep the default.
#[derive(Clone, Default)]
pub struct TextFieldOverrides {
    title: Option<TextField<String>>,
    date: Option<TextField<Option<DateTime<Utc>>>>,
    tags: Option<TextField<Vec<String>>>,
    sections: Option<TextField<Vec<String>>>,
    summary: Option<TextField<String>>,
    paragraphs: Option<TextField<Vec<String>>>,
    snippets: Option<TextField<Vec<String>>>,
}

impl TextFieldOverrides {
    /// No overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the title extractor.
    pub fn title<F>(mut self, f: F) -> Self
    where
        F: Fn(&Metadata, &str) -> Result<String> + Send + Sync + 'static,
    {
        self.title = Some(Arc::new(f));
        self
    }

    /// Override the date extractor.
    pub fn date<F>(mut self, f: F) -> Self
    where
        F: Fn(&Metadata, &str) -> Result<Option<DateTime<Utc>>> + Send + Sync + 'static,
    {
        self.date = Some(Arc::new(f));
        self
    }

    /// Override the tags extractor.
    pub fn tags<F>(mut self, f: F) -> Self
    where
        F: Fn(&Metadata, &str) -> Result<Vec<String>> + Send + Sync + 'static,
    {
        self.tags = Some(Arc::new(f));
        self
    }

    /// Override the sections extractor.
    pub fn sections<F>(mut self, f: F) -> Self
    where
        F: Fn(&Metadata, &str) -> Result<Vec<String>> + Send + Sync + 'static,
    {
        self.sections = Some(Arc::new(f));
        self
    }

    /// Override the summary extractor.
    pub fn summary<F>(mut self, f: F) -> Self
    where
        F: Fn(&Metadata, &str) -> Result<String> + Send + Sync + 'static,
    {
        self.summary = Some(Arc::new(f));
        self
    }

    /// Override the paragraphs extractor.
    pub fn paragraphs<F>(mut self, f: F) -> Self
    where
        F: Fn(&Metadata, &str) -> Result<Vec<String>> + Send + Sync + 'static,
    {
        self.paragraphs = Some(Arc::new(f));
        self
    }

    /// Override the snippets extractor.
    pub fn snippets<F>(mut self, f: F) -> Self
    where
        F: Fn(&Metadata, &str) -> Result<Vec<String>> + Send + Sync + 'static,
    {
        self.snippets = Some(Arc::new(f));
        self
    }
}

impl fmt::Debug for TextFieldOverrides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextFieldOverrides")
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

fn metadata_text(metadata: &Metadata, key: &str) -> Result<String> {
    let value = metadata.get(key).unwrap_or("");
    Ok(strip_tags(value)?.trim().to_string())
}

/// The `title` metadata value.
pub fn parse_title(metadata: &Metadata, _body: &str) -> Result<String> {
    metadata_text(metadata, "title")
}

/// The `summary` metadata value.
pub fn parse_summary(metadata: &Metadata, _body: &str) -> Result<String> {
    metadata_text(metadata, "summary")
}

/// The `date` metadata value as a date/time; `None` if missing or unparsable.
pub fn parse_date_field(metadata: &Metadata, _body: &str) -> Result<Option<DateTime<Utc>>> {
    let value = metadata_text(metadata, "date")?;
    Ok(parse_date(&value))
}

/// The `tags` metadata value, split on `|`.
///
/// Every segment is kept, blank ones included, so `a || b` has three tags.
/// A missing or empty value has none.
pub fn parse_tags(metadata: &Metadata, _body: &str) -> Result<Vec<String>> {
    let raw = metadata.get("tags").unwrap_or("");
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }

    raw.split('|')
        .map(|segment| -> Result<String> {
            Ok(strip_tags(segment.trim())?.trim().to_string())
        })
        .collect()
}

/// Text of every body line that is a heading of level two or deeper.
///
/// Fenced code is not special here: a `## comment` line inside a fence
/// counts as a section.
pub fn parse_sections(_metadata: &Metadata, body: &str) -> Result<Vec<String>> {
    let mut sections = Vec::new();

    for line in body.lines() {
        if let Some((level, text)) = heading(line) {
            if level >= 2 {
                push_stripped(&mut sections, text)?;
            }
        }
    }
    Ok(sections)
}

/// Blank-line separated text blocks of the body.
///
/// Headings end the current paragraph and the lines right after a heading,
/// up to the next blank line, are not paragraph text. Fenced code is skipped
/// entirely.
pub fn parse_paragraphs(_metadata: &Metadata, body: &str) -> Result<Vec<String>> {
    let mut paragraphs = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut after_heading = false;
    let mut lines = body.lines();

    while let Some(line) = lines.next() {
        if is_fence(line) {
            flush_paragraph(&mut paragraphs, &mut current)?;
            // Unterminated fences run to the end of the body
            for code_line in lines.by_ref() {
                if is_fence(code_line) {
                    break;
                }
            }
            after_heading = false;
        } else if heading(line).is_some() {
            flush_paragraph(&mut paragraphs, &mut current)?;
            after_heading = true;
        } else if is_blank(line) {
            flush_paragraph(&mut paragraphs, &mut current)?;
            after_heading = false;
        } else if !after_heading {
            current.push(line);
        }
    }
    flush_paragraph(&mut paragraphs, &mut current)?;

    Ok(paragraphs)
}

/// Contents of every complete fenced code block.
pub fn parse_snippets(_metadata: &Metadata, body: &str) -> Result<Vec<String>> {
    let mut snippets = Vec::new();
    let mut snippet: Option<Vec<&str>> = None;

    for line in body.lines() {
        if is_fence(line) {
            match snippet.take() {
                Some(code) => push_stripped(&mut snippets, &code.join("\n"))?,
                None => snippet = Some(Vec::new()),
            }
        } else if let Some(code) = snippet.as_mut() {
            code.push(line);
        }
    }
    Ok(snippets)
}

fn flush_paragraph(paragraphs: &mut Vec<String>, current: &mut Vec<&str>) -> Result<()> {
    if !current.is_empty() {
        push_stripped(paragraphs, &current.join("\n"))?;
        current.clear();
    }
    Ok(())
}

/// Push the stripped, trimmed `raw` unless `raw` itself is blank. Markup-only
/// blocks become empty strings, matching the HTML fields.
fn push_stripped(values: &mut Vec<String>, raw: &str) -> Result<()> {
    if raw.trim().is_empty() {
        return Ok(());
    }
    values.push(strip_tags(raw)?.trim().to_string());
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
