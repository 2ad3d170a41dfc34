//! Document model representing a single entry in the catalog.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Subject area classifying a document's field of study.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Subject {
    #[serde(rename = "Computer Science")]
    ComputerScience,
    Engineering,
    Medicine,
    Physics,
    Chemistry,
    Biology,
    Mathematics,
    Management,
    #[serde(rename = "Social Sciences")]
    SocialSciences,
    Literature,
}

impl Subject {
    /// All subject areas, in display order.
    pub const ALL: [Subject; 10] = [
        Subject::ComputerScience,
        Subject::Engineering,
        Subject::Medicine,
        Subject::Physics,
        Subject::Chemistry,
        Subject::Biology,
        Subject::Mathematics,
        Subject::Management,
        Subject::SocialSciences,
        Subject::Literature,
    ];

    /// Returns the display name of the subject
    pub fn name(&self) -> &str {
        match self {
            Subject::ComputerScience => "Computer Science",
            Subject::Engineering => "Engineering",
            Subject::Medicine => "Medicine",
            Subject::Physics => "Physics",
            Subject::Chemistry => "Chemistry",
            Subject::Biology => "Biology",
            Subject::Mathematics => "Mathematics",
            Subject::Management => "Management",
            Subject::SocialSciences => "Social Sciences",
            Subject::Literature => "Literature",
        }
    }

    /// Returns the subject identifier (for CLI flags and config files)
    pub fn id(&self) -> &str {
        match self {
            Subject::ComputerScience => "computer-science",
            Subject::Engineering => "engineering",
            Subject::Medicine => "medicine",
            Subject::Physics => "physics",
            Subject::Chemistry => "chemistry",
            Subject::Biology => "biology",
            Subject::Mathematics => "mathematics",
            Subject::Management => "management",
            Subject::SocialSciences => "social-sciences",
            Subject::Literature => "literature",
        }
    }
}

impl std::fmt::Display for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Error returned when parsing an unknown subject identifier.
#[derive(Debug, thiserror::Error)]
#[error("unknown subject: {0}")]
pub struct ParseSubjectError(String);

impl FromStr for Subject {
    type Err = ParseSubjectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Subject::ALL
            .iter()
            .find(|subject| subject.id() == s)
            .copied()
            .ok_or_else(|| ParseSubjectError(s.to_string()))
    }
}

/// Publication form of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentType {
    ResearchPaper,
    JournalArticle,
    Book,
    BookChapter,
    Thesis,
    Dissertation,
    ProjectReport,
    ReviewPaper,
    TechnicalDocument,
    Synopsis,
}

impl DocumentType {
    /// All document types, in display order.
    pub const ALL: [DocumentType; 10] = [
        DocumentType::ResearchPaper,
        DocumentType::JournalArticle,
        DocumentType::Book,
        DocumentType::BookChapter,
        DocumentType::Thesis,
        DocumentType::Dissertation,
        DocumentType::ProjectReport,
        DocumentType::ReviewPaper,
        DocumentType::TechnicalDocument,
        DocumentType::Synopsis,
    ];

    /// Returns the display name of the document type
    pub fn name(&self) -> &str {
        match self {
            DocumentType::ResearchPaper => "Research Paper",
            DocumentType::JournalArticle => "Journal Article",
            DocumentType::Book => "Book",
            DocumentType::BookChapter => "Book Chapter",
            DocumentType::Thesis => "Thesis",
            DocumentType::Dissertation => "Dissertation",
            DocumentType::ProjectReport => "Project Report",
            DocumentType::ReviewPaper => "Review Paper",
            DocumentType::TechnicalDocument => "Technical Document",
            DocumentType::Synopsis => "Synopsis",
        }
    }

    /// Returns the type identifier (for CLI flags and dataset files)
    pub fn id(&self) -> &str {
        match self {
            DocumentType::ResearchPaper => "research-paper",
            DocumentType::JournalArticle => "journal-article",
            DocumentType::Book => "book",
            DocumentType::BookChapter => "book-chapter",
            DocumentType::Thesis => "thesis",
            DocumentType::Dissertation => "dissertation",
            DocumentType::ProjectReport => "project-report",
            DocumentType::ReviewPaper => "review-paper",
            DocumentType::TechnicalDocument => "technical-document",
            DocumentType::Synopsis => "synopsis",
        }
    }
}

impl std::fmt::Display for DocumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Error returned when parsing an unknown document-type identifier.
#[derive(Debug, thiserror::Error)]
#[error("unknown document type: {0}")]
pub struct ParseDocumentTypeError(String);

impl FromStr for DocumentType {
    type Err = ParseDocumentTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DocumentType::ALL
            .iter()
            .find(|doc_type| doc_type.id() == s)
            .copied()
            .ok_or_else(|| ParseDocumentTypeError(s.to_string()))
    }
}

/// An author of a document. Authors have no identity beyond their name;
/// two entries with the same name are distinct authors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Author name as printed on the document
    pub name: String,

    /// Institutional affiliation, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affiliation: Option<String>,
}

impl Author {
    /// Create an author with no affiliation.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            affiliation: None,
        }
    }

    /// Create an author with an affiliation.
    pub fn with_affiliation(name: impl Into<String>, affiliation: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            affiliation: Some(affiliation.into()),
        }
    }
}

/// A document in the catalog
///
/// This struct is the standardized record for every catalog entry, whether it
/// comes from the built-in collection or an external dataset file. Documents
/// are immutable once loaded; the search and citation layers only ever read
/// them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Unique identifier within the corpus
    pub id: String,

    /// Document title
    pub title: String,

    /// Publication form
    #[serde(rename = "type")]
    pub doc_type: DocumentType,

    /// Authors in citation order; the first author is distinguished by
    /// several citation styles. Never empty on a valid document.
    pub authors: Vec<Author>,

    /// Abstract text
    pub r#abstract: String,

    /// Keyword tags, insertion order preserved for display
    pub keywords: Vec<String>,

    /// Subject area
    pub subject: Subject,

    /// Year of publication
    pub publication_year: i32,

    /// Journal name, for published articles
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub journal: Option<String>,

    /// Journal volume
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<String>,

    /// Page range within the volume
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<String>,

    /// Digital Object Identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,

    /// Direct PDF URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pdf_url: Option<String>,

    /// View count, read-only metric
    #[serde(default)]
    pub views: u64,

    /// Citation count, read-only metric
    #[serde(default)]
    pub citations: u64,
}

impl Document {
    /// Returns the author names as a vector
    pub fn author_names(&self) -> Vec<&str> {
        self.authors.iter().map(|a| a.name.as_str()).collect()
    }

    /// Check if the document has a downloadable PDF
    pub fn has_pdf(&self) -> bool {
        self.pdf_url.is_some()
    }
}

/// Builder for constructing Document records
#[derive(Debug, Clone)]
pub struct DocumentBuilder {
    document: Document,
}

impl DocumentBuilder {
    /// Create a new builder with required fields
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        doc_type: DocumentType,
        subject: Subject,
        publication_year: i32,
    ) -> Self {
        Self {
            document: Document {
                id: id.into(),
                title: title.into(),
                doc_type,
                authors: Vec::new(),
                r#abstract: String::new(),
                keywords: Vec::new(),
                subject,
                publication_year,
                journal: None,
                volume: None,
                pages: None,
                doi: None,
                pdf_url: None,
                views: 0,
                citations: 0,
            },
        }
    }

    /// Add an author
    pub fn author(mut self, author: Author) -> Self {
        self.document.authors.push(author);
        self
    }

    /// Set abstract
    pub fn abstract_text(mut self, abstract_text: impl Into<String>) -> Self {
        self.document.r#abstract = abstract_text.into();
        self
    }

    /// Set keywords
    pub fn keywords(mut self, keywords: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.document.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Set journal name
    pub fn journal(mut self, journal: impl Into<String>) -> Self {
        self.document.journal = Some(journal.into());
        self
    }

    /// Set journal volume
    pub fn volume(mut self, volume: impl Into<String>) -> Self {
        self.document.volume = Some(volume.into());
        self
    }

    /// Set page range
    pub fn pages(mut self, pages: impl Into<String>) -> Self {
        self.document.pages = Some(pages.into());
        self
    }

    /// Set DOI
    pub fn doi(mut self, doi: impl Into<String>) -> Self {
        self.document.doi = Some(doi.into());
        self
    }

    /// Set PDF URL
    pub fn pdf_url(mut self, url: impl Into<String>) -> Self {
        self.document.pdf_url = Some(url.into());
        self
    }

    /// Set view count
    pub fn views(mut self, views: u64) -> Self {
        self.document.views = views;
        self
    }

    /// Set citation count
    pub fn citations(mut self, citations: u64) -> Self {
        self.document.citations = citations;
        self
    }

    /// Build the Document
    pub fn build(self) -> Document {
        self.document
    }
}
