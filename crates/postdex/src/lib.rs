//! Postdex blog-post extraction engine — umbrella crate.
//!
//! This crate re-exports all Postdex components for convenience.

#![doc = include_str!("../README.md")]

pub use postdex_content as content;
pub use postdex_core as core;

pub use postdex_content::{
    BatchReport, Extractor, HtmlFieldOverrides, TextFieldOverrides, strip_tags,
};
pub use postdex_core::{CanonicalDocument, DocumentFormat, Error, ExtractorConfig, Result};
