//! Postdex Core — shared types, errors, and configuration.
//!
//! This crate provides the foundational types used by the Postdex
//! extraction engine. It has no internal Postdex dependencies.
//!
//! # Modules
//!
//! - [`error`]: `MarkupError`, `Error`, and the `Result` alias
//! - [`document`]: `CanonicalDocument`, the record handed to an indexer
//! - [`metadata`]: the key/value header of a document
//! - [`config`]: `ExtractorConfig` and `DocumentFormat`
//! - [`ids`]: document identifier helpers

#![doc = include_str!("../README.md")]

pub mod config;
pub mod document;
pub mod error;
pub mod ids;
pub mod metadata;

// Re-export key types at crate root for convenience
pub use config::{DocumentFormat, ExtractorConfig};
pub use document::{CanonicalDocument, CanonicalDocumentBuilder};
pub use error::{Error, MarkupError, Result};
pub use ids::{id_from_path, slugify};
pub use metadata::Metadata;
