//! Search filter models.

use serde::{Deserialize, Serialize};

use crate::models::{DocumentType, Subject};

/// Inclusive publication-year bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRange {
    pub min: i32,
    pub max: i32,
}

impl YearRange {
    /// Create a range with inclusive bounds. A range with `min > max`
    /// matches no year; that is the caller's responsibility to avoid.
    pub fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    /// A range matching every publication year.
    pub fn unbounded() -> Self {
        Self {
            min: i32::MIN,
            max: i32::MAX,
        }
    }

    /// Whether the year falls within the bounds.
    pub fn contains(&self, year: i32) -> bool {
        year >= self.min && year <= self.max
    }
}

impl Default for YearRange {
    fn default() -> Self {
        Self::unbounded()
    }
}

/// Search criteria for one query interaction
///
/// All criteria are conjunctive: a document must satisfy every active one.
/// An empty query, an empty subject set, or an empty type set deactivates
/// that criterion; the year range is always applied. The default value
/// matches the whole corpus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchFilters {
    /// Free-text query matched against title, abstract, keywords,
    /// author names, and subject
    pub query: String,

    /// Subjects to restrict to (empty = no restriction)
    pub subjects: Vec<Subject>,

    /// Document types to restrict to (empty = no restriction)
    pub document_types: Vec<DocumentType>,

    /// Publication-year bounds, always applied
    pub year_range: YearRange,

    /// Author names to restrict to. Reserved: carried through the model but
    /// consumed by no predicate, matching the original search contract.
    pub authors: Vec<String>,
}

impl Default for SearchFilters {
    fn default() -> Self {
        Self {
            query: String::new(),
            subjects: Vec::new(),
            document_types: Vec::new(),
            year_range: YearRange::unbounded(),
            authors: Vec::new(),
        }
    }
}

impl SearchFilters {
    /// Create filters with a free-text query
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }

    /// Restrict to a subject (may be called repeatedly)
    pub fn subject(mut self, subject: Subject) -> Self {
        self.subjects.push(subject);
        self
    }

    /// Restrict to a document type (may be called repeatedly)
    pub fn document_type(mut self, doc_type: DocumentType) -> Self {
        self.document_types.push(doc_type);
        self
    }

    /// Set the publication-year bounds
    pub fn year_range(mut self, min: i32, max: i32) -> Self {
        self.year_range = YearRange::new(min, max);
        self
    }
}
