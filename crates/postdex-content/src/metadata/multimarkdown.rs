//! MultiMarkdown metadata headers.
//!
//! The header is every line before the first blank line:
//!
//! ```text
//! title:  Sample title
//! date:   2025-01-03
//! summary: A summary that wraps
//!     onto a second line
//!
//! Markdown document after the first blank line.
//! ```
//!
//! A line whose first character is alphanumeric and that contains a `:`
//! starts a new key. Any other line continues the previous key's value and
//! is concatenated onto it as-is (after trimming). Lines starting with `---`
//! or `...` are format markers and are skipped.

use postdex_core::Metadata;

use super::{HeaderSplit, is_blank, line_spans};

const MARKERS: [&str; 2] = ["---", "..."];

/// Extract the MultiMarkdown header of `document`.
///
/// A document without any blank line has no header.
///
/// ```rust
/// use postdex_content::metadata::multimarkdown::extract_metadata;
///
/// let metadata = extract_metadata("title: Hello\nsummary: one\n  two\n\nBody");
/// assert_eq!(metadata.get("title"), Some("Hello"));
/// assert_eq!(metadata.get("summary"), Some("onetwo"));
/// ```
pub fn extract_metadata(document: &str) -> Metadata {
    split(document).into_parts().0
}

/// Split `document` into header metadata and body.
///
/// When metadata was found the body starts right after the first blank line;
/// otherwise the body is the whole document.
pub fn split(document: &str) -> HeaderSplit<'_> {
    let mut header_lines = Vec::new();
    let mut header_end = None;
    for line in line_spans(document) {
        if is_blank(line.text) {
            header_end = Some(line.end);
            break;
        }
        header_lines.push(line.text);
    }

    let Some(header_end) = header_end else {
        return HeaderSplit::without_header(document);
    };

    let metadata = parse_header(&header_lines);
    if metadata.is_empty() {
        return HeaderSplit::without_header(document);
    }
    HeaderSplit::with_header(metadata, &document[header_end..])
}

fn parse_header(lines: &[&str]) -> Metadata {
    let mut metadata = Metadata::new();
    let mut key: Option<&str> = None;

    for &line in lines {
        if MARKERS.iter().any(|marker| line.starts_with(marker)) {
            continue;
        }

        let colon = line.find(':');
        let (line_key, value) = match colon {
            Some(pos) if starts_with_alphanumeric(line) => (Some(&line[..pos]), &line[pos + 1..]),
            Some(pos) => (None, &line[pos + 1..]),
            None => (None, line),
        };

        if line_key.is_some() {
            key = line_key;
        }
        // Continuation lines with no key before them are dropped
        if let Some(key) = key {
            metadata.append(key.trim(), value);
        }
    }

    metadata
}

fn starts_with_alphanumeric(line: &str) -> bool {
    line.chars().next().is_some_and(|c| c.is_ascii_alphanumeric())
}

// ============================================================================
// Tests
// ============================================================================
