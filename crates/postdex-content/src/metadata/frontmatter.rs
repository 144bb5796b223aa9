//! YAML-style front matter.
//!
//! Front matter is a metadata block at the very start of a document,
//! delimited by lines containing only `---`:
//!
//! ```markdown
//! ---
//! title: Sample title
//! date: 2025-01-01
//! tags: tag | test
//! ---
//!
//! The body starts after the first blank line.
//! ```
//!
//! Each block line is split on its first `:` into a key and a value. Values
//! are kept as flat strings; nested YAML is not interpreted.
//!
//! ```rust
//! use postdex_content::metadata::frontmatter::extract_metadata;
//!
//! let metadata = extract_metadata("---\ntitle: Test\n---\n\nBody");
//! assert_eq!(metadata.get("title"), Some("Test"));
//! ```

use postdex_core::Metadata;

use super::{HeaderSplit, is_blank, line_spans};

const DELIMITER: &str = "---";

/// Extract the front matter of `document`.
///
/// Returns an empty mapping when there is no complete `---` block.
pub fn extract_metadata(document: &str) -> Metadata {
    split(document).into_parts().0
}

/// Split `document` into front matter and body.
///
/// # Behavior
///
/// - No opening `---` line: empty metadata, body is the whole document
/// - Opening `---` without a closing one: logs a warning, same as above
/// - Complete block: body begins after the first blank line following the
///   closing `---` (or right after the closing line if there is none)
pub fn split(document: &str) -> HeaderSplit<'_> {
    let mut lines = line_spans(document);

    match lines.next() {
        Some(first) if is_delimiter(first.text) => {}
        _ => return HeaderSplit::without_header(document),
    }

    let mut metadata = Metadata::new();
    let mut block_end = None;
    for line in lines.by_ref() {
        if is_delimiter(line.text) {
            block_end = Some(line.end);
            break;
        }
        parse_line(&mut metadata, line.text);
    }

    let Some(block_end) = block_end else {
        log::warn!("Front matter opening delimiter found but no closing delimiter");
        return HeaderSplit::without_header(document);
    };

    let rest = &document[block_end..];
    let body = line_spans(rest)
        .find(|line| is_blank(line.text))
        .map(|line| &rest[line.end..])
        .unwrap_or(rest);

    HeaderSplit::with_header(metadata, body)
}

fn is_delimiter(line: &str) -> bool {
    line.trim_end() == DELIMITER
}

/// `key: value` on the first colon; a line without a colon is a key with an
/// empty value. Lines with an empty key are dropped.
fn parse_line(metadata: &mut Metadata, line: &str) {
    let (key, value) = line.split_once(':').unwrap_or((line, ""));
    metadata.insert(key, value);
}

// ============================================================================
// Tests
// ============================================================================
