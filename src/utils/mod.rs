//! Utility modules supporting catalog operations.
//!
//! - [`format_citation`]: Render a document citation in APA, MLA, Chicago,
//!   IEEE, or BibTeX format
//! - [`structured_citation`]: Citation plus key metadata for JSON output
//! - [`validate_corpus`]: Check a corpus against the catalog invariants
//!   before serving it
//! - [`truncate_with_ellipsis`]: Unicode-aware truncation for table cells
//!
//! # Citations
//!
//! ```rust
//! use academia_hub::catalog::builtin;
//! use academia_hub::utils::{format_citation, CitationStyle};
//!
//! let doc = &builtin()[0];
//! let apa = format_citation(doc, CitationStyle::Apa)?;
//! assert!(apa.contains("(2024)"));
//! # Ok::<(), academia_hub::utils::CiteError>(())
//! ```

mod cite;
mod display;
mod validate;

pub use cite::{
    format_citation, structured_citation, CitationStyle, CiteError, ParseCitationStyleError,
    StructuredCitation,
};
pub use display::{terminal_width, truncate_with_ellipsis, DEFAULT_WIDTH};
pub use validate::{validate_corpus, ValidateError};
