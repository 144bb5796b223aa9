//! HTML field extraction.
//!
//! - [`tree`]: [`HtmlTree`] / [`HtmlNode`], the query interface over a parsed document
//! - [`fields`]: the default field functions and [`HtmlFieldSet`]

pub mod fields;
pub mod tree;

pub use fields::{HtmlField, HtmlFieldOverrides, HtmlFieldSet};
pub use tree::{HtmlNode, HtmlTree, MARKER_ATTR};
