//! Corpus invariant validation.
//!
//! A corpus is only served after it passes these checks; the search and
//! citation layers assume them (citation formatting in particular requires a
//! non-empty author list).

use std::collections::HashSet;

use thiserror::Error;

use crate::models::Document;

/// Validation error types
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidateError {
    #[error("document has an empty id")]
    EmptyId,

    #[error("duplicate document id: {0}")]
    DuplicateId(String),

    #[error("document {0} has no authors")]
    NoAuthors(String),

    #[error("document {0} has an author with an empty name")]
    EmptyAuthorName(String),
}

/// Validate a corpus against the catalog invariants: every document has a
/// non-empty id unique within the corpus, and a non-empty author list with
/// non-empty names.
pub fn validate_corpus(documents: &[Document]) -> Result<(), ValidateError> {
    let mut seen = HashSet::new();

    for doc in documents {
        if doc.id.is_empty() {
            return Err(ValidateError::EmptyId);
        }
        if !seen.insert(doc.id.as_str()) {
            return Err(ValidateError::DuplicateId(doc.id.clone()));
        }
        if doc.authors.is_empty() {
            return Err(ValidateError::NoAuthors(doc.id.clone()));
        }
        if doc.authors.iter().any(|a| a.name.trim().is_empty()) {
            return Err(ValidateError::EmptyAuthorName(doc.id.clone()));
        }
    }

    Ok(())
}
