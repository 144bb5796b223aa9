//! Markdown field extraction.
//!
//! This module holds the default field extractors shared by the two text
//! conventions (front matter and MultiMarkdown):
//!
//! - [`fields`]: the seven default field functions and [`TextFieldSet`]
//!
//! plus the line classification they are built on. Markdown bodies are
//! scanned line by line; only ATX headings (`#`, `##`, ...) and backtick
//! fences are recognized.
//!
//! # Example
//!
//! ```rust
//! use postdex_content::markdown::{heading, is_fence};
//!
//! assert_eq!(heading("## Section 1"), Some((2, "Section 1")));
//! assert_eq!(heading("plain text"), None);
//! assert!(is_fence("```rust"));
//! ```

pub mod fields;

use std::sync::LazyLock;

use regex::Regex;

pub use fields::{TextField, TextFieldOverrides, TextFieldSet};

static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(#+)(.*)$").expect("Failed to compile heading regex - this is a bug")
});

static FENCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*```").expect("Failed to compile fence regex - this is a bug")
});

/// Level and raw text of a heading line, or `None` if `line` isn't one.
///
/// The text is trimmed but still contains any inline markup.
pub fn heading(line: &str) -> Option<(usize, &str)> {
    let caps = HEADING_RE.captures(line)?;
    let level = caps.get(1)?.as_str().len();
    let text = caps.get(2)?.as_str().trim();
    if text.is_empty() {
        return None;
    }
    Some((level, text))
}

/// Whether `line` opens or closes a fenced code block.
pub fn is_fence(line: &str) -> bool {
    FENCE_RE.is_match(line)
}
