//! A narrow query interface over a parsed HTML document.
//!
//! [`HtmlTree`] wraps a `scraper` document and exposes CSS selection plus a
//! helper for the `data-bdsm` role convention. Selected elements come back as
//! [`HtmlNode`]s whose [`text`](HtmlNode::text) runs the inner markup through
//! the tag stripper.

use std::sync::LazyLock;

use postdex_core::{Error, Result};
use scraper::{ElementRef, Html, Node, Selector};

use crate::strip::strip_tags;

/// Attribute naming the role of a marked element.
pub const MARKER_ATTR: &str = "data-bdsm";

/// Elements rendered as self-closing tags.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "keygen", "link", "meta", "param",
    "source", "track", "wbr",
];

static MARKED_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("[data-bdsm]").expect("Failed to parse marker selector - this is a bug")
});

/// A parsed HTML document.
#[derive(Debug)]
pub struct HtmlTree {
    document: Html,
}

impl HtmlTree {
    /// Parse `content` as a full HTML document.
    ///
    /// Parsing is error tolerant; problems are collected in
    /// [`errors`](Self::errors) instead of failing.
    pub fn parse(content: &str) -> Self {
        Self {
            document: Html::parse_document(content),
        }
    }

    /// Parse errors reported by the tree builder.
    pub fn errors(&self) -> impl Iterator<Item = &str> {
        self.document.errors.iter().map(|e| &**e)
    }

    /// Whether the tree builder reported no errors.
    pub fn is_clean(&self) -> bool {
        self.document.errors.is_empty()
    }

    /// All elements matching `css`, in document order.
    pub fn select(&self, css: &str) -> Result<Vec<HtmlNode<'_>>> {
        let selector = parse_selector(css)?;
        Ok(self.select_with(&selector))
    }

    /// All elements matching a pre-parsed selector, in document order.
    pub fn select_with(&self, selector: &Selector) -> Vec<HtmlNode<'_>> {
        self.document.select(selector).map(HtmlNode::new).collect()
    }

    /// The first element matching `css`.
    pub fn first(&self, css: &str) -> Result<Option<HtmlNode<'_>>> {
        let selector = parse_selector(css)?;
        Ok(self.document.select(&selector).next().map(HtmlNode::new))
    }

    /// The first element whose `data-bdsm` attribute equals `role`.
    pub fn marked(&self, role: &str) -> Option<HtmlNode<'_>> {
        self.document
            .select(&MARKED_SELECTOR)
            .find(|element| element.value().attr(MARKER_ATTR) == Some(role))
            .map(HtmlNode::new)
    }
}

/// One element of an [`HtmlTree`].
#[derive(Debug, Clone, Copy)]
pub struct HtmlNode<'a> {
    element: ElementRef<'a>,
}

impl<'a> HtmlNode<'a> {
    fn new(element: ElementRef<'a>) -> Self {
        Self { element }
    }

    /// Lowercase element name.
    pub fn name(&self) -> &'a str {
        self.element.value().name()
    }

    /// Value of attribute `name`.
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.element.value().attr(name)
    }

    /// The `data-bdsm` role of this element, if any.
    pub fn role(&self) -> Option<&'a str> {
        self.attr(MARKER_ATTR)
    }

    /// Descendants matching `css`, in document order.
    pub fn select(&self, css: &str) -> Result<Vec<HtmlNode<'a>>> {
        let selector = parse_selector(css)?;
        Ok(self.select_with(&selector))
    }

    /// Descendants matching a pre-parsed selector, in document order.
    pub fn select_with(&self, selector: &Selector) -> Vec<HtmlNode<'a>> {
        self.element.select(selector).map(HtmlNode::new).collect()
    }

    /// Inner text with all markup removed, trimmed.
    ///
    /// The children are rendered back to markup and passed through
    /// [`strip_tags`], so the result follows the same tag-removal rules as
    /// the text formats.
    pub fn text(&self) -> Result<String> {
        let mut markup = String::new();
        render_children(self.element, &mut markup);
        let stripped = strip_tags(&markup)?;
        Ok(unescape(&stripped).trim().to_string())
    }
}

fn parse_selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| Error::selector(css, e.to_string()))
}

fn render_children(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => escape_into(text, out),
            Node::Element(_) => {
                if let Some(child) = ElementRef::wrap(child) {
                    render_element(child, out);
                }
            }
            _ => {}
        }
    }
}

fn render_element(element: ElementRef<'_>, out: &mut String) {
    let name = element.value().name();
    if VOID_ELEMENTS.contains(&name) {
        out.push('<');
        out.push_str(name);
        out.push_str("/>");
        return;
    }
    out.push('<');
    out.push_str(name);
    out.push('>');
    render_children(element, out);
    out.push_str("</");
    out.push_str(name);
    out.push('>');
}

fn escape_into(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}

// `&amp;` last so escaped entity text comes back unchanged
fn unescape(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

// ============================================================================
// Tests
// ============================================================================
