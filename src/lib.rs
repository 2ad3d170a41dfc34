//! # AcademiaHub
//!
//! A library for searching, browsing, and citing a static catalog of
//! academic documents.
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`models`]: Core data structures (Document, SearchFilters, etc.)
//! - [`catalog`]: Query engine, derived views, and the built-in collection
//! - [`utils`]: Citation formatting, corpus validation, display helpers
//! - [`config`]: Configuration management
//! - [`ui`]: Terminal output helpers for the CLI
//!
//! The corpus is an immutable snapshot loaded once; every operation is a
//! pure, deterministic function over it, so the whole library is safe to
//! call concurrently without locking.

pub mod catalog;
pub mod config;
pub mod models;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use catalog::search;
pub use models::{Document, SearchFilters};
pub use utils::{format_citation, CitationStyle};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
