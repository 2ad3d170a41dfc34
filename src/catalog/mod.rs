//! Catalog query engine.
//!
//! Pure, order-preserving operations over an immutable document corpus:
//! conjunctive search/filter, the derived trending/recent/related views, and
//! per-subject and per-type counters for the browse surface. The corpus is a
//! read-only snapshot; nothing here mutates, caches, or refreshes it.

mod builtin;

pub use builtin::builtin;

use std::fs;
use std::path::Path;

use crate::models::{Document, DocumentType, SearchFilters, Subject};
use crate::utils::{validate_corpus, ValidateError};

/// Maximum number of entries returned by [`related`].
pub const RELATED_LIMIT: usize = 5;

/// Errors that can occur when loading an external corpus file
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// IO error reading the file
    #[error("failed to read corpus file: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not a valid JSON document array
    #[error("failed to parse corpus file: {0}")]
    Parse(#[from] serde_json::Error),

    /// The documents violate a corpus invariant
    #[error(transparent)]
    Invalid(#[from] ValidateError),
}

/// Load a corpus from a JSON dataset file.
///
/// The file must contain a JSON array of documents in the catalog schema.
/// The loaded snapshot is validated against the corpus invariants (unique
/// ids, non-empty author lists) before it is returned.
pub fn load_corpus(path: impl AsRef<Path>) -> Result<Vec<Document>, CatalogError> {
    let raw = fs::read_to_string(path.as_ref())?;
    let documents: Vec<Document> = serde_json::from_str(&raw)?;
    validate_corpus(&documents)?;
    tracing::debug!(
        documents = documents.len(),
        path = %path.as_ref().display(),
        "loaded corpus"
    );
    Ok(documents)
}

/// Search the corpus with the given filters.
///
/// All active criteria are conjunctive. Results preserve corpus order (stable
/// filter, no re-ranking) and the full matching set is returned; callers
/// apply display limits. An empty result is a valid outcome, never an error.
pub fn search<'a>(corpus: &'a [Document], filters: &SearchFilters) -> Vec<&'a Document> {
    let query = filters.query.trim().to_lowercase();

    corpus
        .iter()
        .filter(|doc| matches_text(doc, &query))
        .filter(|doc| filters.subjects.is_empty() || filters.subjects.contains(&doc.subject))
        .filter(|doc| {
            filters.document_types.is_empty() || filters.document_types.contains(&doc.doc_type)
        })
        .filter(|doc| filters.year_range.contains(doc.publication_year))
        .collect()
}

/// Case-insensitive substring match against title, abstract, keywords,
/// author names, and the subject display name. Author affiliations are
/// deliberately not matched.
fn matches_text(doc: &Document, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    doc.title.to_lowercase().contains(query)
        || doc.r#abstract.to_lowercase().contains(query)
        || doc.keywords.iter().any(|k| k.to_lowercase().contains(query))
        || doc.authors.iter().any(|a| a.name.to_lowercase().contains(query))
        || doc.subject.name().to_lowercase().contains(query)
}

/// The most-viewed documents, up to `limit`.
///
/// Ties keep their corpus order (stable sort), so the output is
/// deterministic for a given snapshot.
pub fn trending<'a>(corpus: &'a [Document], limit: usize) -> Vec<&'a Document> {
    let mut documents: Vec<&Document> = corpus.iter().collect();
    documents.sort_by(|a, b| b.views.cmp(&a.views));
    documents.truncate(limit);
    documents
}

/// The most recently published documents, up to `limit`.
pub fn recent<'a>(corpus: &'a [Document], limit: usize) -> Vec<&'a Document> {
    let mut documents: Vec<&Document> = corpus.iter().collect();
    documents.sort_by(|a, b| b.publication_year.cmp(&a.publication_year));
    documents.truncate(limit);
    documents
}

/// Find a document by id.
pub fn find_by_id<'a>(corpus: &'a [Document], id: &str) -> Option<&'a Document> {
    corpus.iter().find(|doc| doc.id == id)
}

/// Documents related to the one with the given id: same subject or at least
/// one shared keyword, excluding the document itself, capped at
/// [`RELATED_LIMIT`]. Matches keep corpus order; overlap strength is not
/// ranked. An unknown id yields an empty list.
pub fn related<'a>(corpus: &'a [Document], id: &str) -> Vec<&'a Document> {
    let Some(reference) = find_by_id(corpus, id) else {
        return Vec::new();
    };

    corpus
        .iter()
        .filter(|doc| doc.id != reference.id)
        .filter(|doc| {
            doc.subject == reference.subject
                || doc.keywords.iter().any(|k| reference.keywords.contains(k))
        })
        .take(RELATED_LIMIT)
        .collect()
}

/// Document counts per subject, in enumeration order. Subjects with no
/// documents are included with a zero count.
pub fn subject_counts(corpus: &[Document]) -> Vec<(Subject, usize)> {
    Subject::ALL
        .iter()
        .map(|&subject| {
            let count = corpus.iter().filter(|doc| doc.subject == subject).count();
            (subject, count)
        })
        .collect()
}

/// Document counts per document type, in enumeration order.
pub fn type_counts(corpus: &[Document]) -> Vec<(DocumentType, usize)> {
    DocumentType::ALL
        .iter()
        .map(|&doc_type| {
            let count = corpus.iter().filter(|doc| doc.doc_type == doc_type).count();
            (doc_type, count)
        })
        .collect()
}
