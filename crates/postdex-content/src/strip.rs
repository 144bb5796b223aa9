//! Tag stripping for inline HTML/XML markup.
//!
//! [`strip_tags`] removes every tag from a fragment and keeps the text
//! between them, validating that the tags nest properly:
//!
//! ```rust
//! use postdex_content::strip::strip_tags;
//!
//! let text = strip_tags("<div>This is <em>important</em>!</div>").unwrap();
//! assert_eq!(text, "This is important!");
//!
//! assert!(strip_tags("This is <em>important!").is_err());
//! ```
//!
//! The scan is a single left-to-right pass, linear in the input length, with
//! a stack as deep as the deepest nesting. Double-quoted attribute values may
//! contain `<` and `>`.

use postdex_core::MarkupError;

/// Bytes that end a tag name.
const TAG_NAME_END: &[u8] = b"\t\n\x0B\r\x0C />";

/// Remove all tags from `text`, returning the concatenated text runs.
///
/// Self-closing tags (`<img src="x"/>`) need no matching close. Any other
/// opening tag must be closed by a tag of the same name, innermost first.
///
/// # Errors
///
/// - [`MarkupError::UnterminatedTag`]: `<` at end of input, or a tag without `>`
/// - [`MarkupError::InvalidTagName`]: no name right after `<` or `</`
/// - [`MarkupError::UnmatchedClosingTag`]: a close with nothing open
/// - [`MarkupError::MismatchedTag`]: a close that isn't the innermost open tag
/// - [`MarkupError::UnclosedTag`]: input ends with tags still open
pub fn strip_tags(text: &str) -> Result<String, MarkupError> {
    let bytes = text.as_bytes();
    let mut open_tags: Vec<&str> = Vec::new();
    let mut output = String::with_capacity(text.len());
    let mut index = 0;
    let mut run_start = 0;

    while index < bytes.len() {
        if bytes[index] != b'<' {
            index += 1;
            continue;
        }

        output.push_str(&text[run_start..index]);

        if index + 1 >= bytes.len() {
            return Err(MarkupError::UnterminatedTag { position: index });
        }

        if bytes[index + 1] == b'/' {
            let name = tag_name(text, index + 2)?;
            let Some(open) = open_tags.pop() else {
                return Err(MarkupError::UnmatchedClosingTag {
                    name: name.to_string(),
                    position: index,
                });
            };
            if open != name {
                return Err(MarkupError::MismatchedTag {
                    open: open.to_string(),
                    close: name.to_string(),
                    position: index,
                });
            }
            index = matching_end(text, index + 2)?;
        } else {
            let name = tag_name(text, index + 1)?;
            let end = matching_end(text, index + 1 + name.len())?;
            if bytes[end - 1] != b'/' {
                open_tags.push(name);
            }
            index = end;
        }

        // Step past the '>'
        index += 1;
        run_start = index;
    }

    if let Some(name) = open_tags.last() {
        return Err(MarkupError::UnclosedTag {
            name: (*name).to_string(),
            position: text.len(),
        });
    }

    output.push_str(&text[run_start..]);
    Ok(output)
}

/// Byte offset of the `>` that ends the tag being scanned from `start`.
///
/// Double quotes toggle an inside-quotes state; a `>` inside quotes does not
/// count.
///
/// ```rust
/// use postdex_content::strip::matching_end;
///
/// assert_eq!(matching_end("<div>", 0).unwrap(), 4);
/// assert_eq!(matching_end("<img class=\">\"/> self closing", 0).unwrap(), 15);
/// ```
pub fn matching_end(text: &str, start: usize) -> Result<usize, MarkupError> {
    let mut inside_quotes = false;
    for (offset, &byte) in text.as_bytes().iter().enumerate().skip(start) {
        match byte {
            b'"' => inside_quotes = !inside_quotes,
            b'>' if !inside_quotes => return Ok(offset),
            _ => {}
        }
    }
    Err(MarkupError::UnterminatedTag { position: start })
}

/// The tag name beginning at byte offset `start`.
///
/// The name runs until whitespace, `/`, `>`, or end of input.
///
/// ```rust
/// use postdex_content::strip::tag_name;
///
/// assert_eq!(tag_name("<div><test", 6).unwrap(), "test");
/// assert_eq!(tag_name("<img/>", 1).unwrap(), "img");
/// assert!(tag_name("<   div>", 1).is_err());
/// ```
pub fn tag_name(text: &str, start: usize) -> Result<&str, MarkupError> {
    let rest = text.get(start..).unwrap_or("");
    let len = rest
        .bytes()
        .position(|b| TAG_NAME_END.contains(&b))
        .unwrap_or(rest.len());
    if len == 0 {
        return Err(MarkupError::InvalidTagName { position: start });
    }
    Ok(&rest[..len])
}

// ============================================================================
// Tests
// ============================================================================
