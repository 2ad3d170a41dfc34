//! Core data models for catalog documents and search filters.

mod document;
mod filters;

pub use document::{
    Author, Document, DocumentBuilder, DocumentType, ParseDocumentTypeError, ParseSubjectError,
    Subject,
};
pub use filters::{SearchFilters, YearRange};
