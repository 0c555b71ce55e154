#![allow(clippy::doc_markdown)] // README uses "OpenAPI" proper noun throughout
#![doc = include_str!("../README.md")]
//!
//! ---
//!
//! ## API Reference

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod config;
mod document;
mod error;
mod flatten;
mod synthesize;

pub use config::{OutputFormat, ProjectConfig, DEFAULT_ATTRIBUTES};
pub use document::{load_document, parse_document, render, select_schema};
pub use error::{Error, Result};
pub use flatten::{child_path, element_path, flatten, PathEntry, PathMap, ARRAY_SEGMENT};
pub use synthesize::{format_example, synthesize, GENERIC_STRING, MAX_SAFE_INTEGER};

/// The shared normalization step, re-exported from `schema-mock-core`.
pub use schema_mock_core::{composition, merge_deep, normalize, resolve, Composition};
