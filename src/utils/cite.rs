//! Citation formatting in various styles.
//!
//! Supports APA, MLA, Chicago, IEEE, and BibTeX formats.
//!
//! Author names are decomposed with a textual heuristic: the name is split on
//! whitespace, the last token is the surname, and every preceding token is a
//! given name. Initials take the first character of each given-name token.
//! The heuristic is part of the output contract and is applied literally, so
//! embedded titles ("Dr.", "Prof.") become given-name tokens and multi-word
//! surnames are not recognized.

use crate::models::Document;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Citation style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CitationStyle {
    /// APA
    Apa,
    /// MLA
    Mla,
    /// Chicago (author-date)
    Chicago,
    /// IEEE
    Ieee,
    /// BibTeX entry
    Bibtex,
}

impl CitationStyle {
    /// All supported styles, in display order.
    pub const ALL: [CitationStyle; 5] = [
        CitationStyle::Apa,
        CitationStyle::Mla,
        CitationStyle::Chicago,
        CitationStyle::Ieee,
        CitationStyle::Bibtex,
    ];

    /// Returns the style identifier (for CLI flags and config files)
    pub fn id(&self) -> &str {
        match self {
            CitationStyle::Apa => "apa",
            CitationStyle::Mla => "mla",
            CitationStyle::Chicago => "chicago",
            CitationStyle::Ieee => "ieee",
            CitationStyle::Bibtex => "bibtex",
        }
    }
}

impl fmt::Display for CitationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CitationStyle::Apa => write!(f, "APA"),
            CitationStyle::Mla => write!(f, "MLA"),
            CitationStyle::Chicago => write!(f, "Chicago"),
            CitationStyle::Ieee => write!(f, "IEEE"),
            CitationStyle::Bibtex => write!(f, "BibTeX"),
        }
    }
}

/// Error returned when parsing an unknown citation-style identifier.
#[derive(Debug, thiserror::Error)]
#[error("unknown citation style: {0} (expected apa, mla, chicago, ieee, or bibtex)")]
pub struct ParseCitationStyleError(String);

impl FromStr for CitationStyle {
    type Err = ParseCitationStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CitationStyle::ALL
            .iter()
            .find(|style| style.id() == s)
            .copied()
            .ok_or_else(|| ParseCitationStyleError(s.to_string()))
    }
}

/// Errors that can occur when formatting a citation
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum CiteError {
    /// The document has no authors; a citation would be misleading
    #[error("document has no authors")]
    NoAuthors,
}

/// Format a document citation in the specified style.
///
/// Fails only when the document violates the non-empty-authors invariant.
pub fn format_citation(document: &Document, style: CitationStyle) -> Result<String, CiteError> {
    if document.authors.is_empty() {
        return Err(CiteError::NoAuthors);
    }

    Ok(match style {
        CitationStyle::Apa => format_apa(document),
        CitationStyle::Mla => format_mla(document),
        CitationStyle::Chicago => format_chicago(document),
        CitationStyle::Ieee => format_ieee(document),
        CitationStyle::Bibtex => format_bibtex(document),
    })
}

/// Split a name on whitespace into (given-name tokens, surname).
fn split_name(name: &str) -> (Vec<&str>, &str) {
    let tokens: Vec<&str> = name.split_whitespace().collect();
    match tokens.split_last() {
        Some((surname, given)) => (given.to_vec(), surname),
        None => (Vec::new(), ""),
    }
}

/// "John Michael" -> "J. M."
fn initials(given: &[&str]) -> String {
    given
        .iter()
        .filter_map(|token| token.chars().next())
        .map(|c| format!("{c}."))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format: `Authors (Year). Title. Journal, Volume, Pages. https://doi.org/DOI`
/// with every author as `Surname, I. I.`
fn format_apa(document: &Document) -> String {
    let authors = document
        .authors
        .iter()
        .map(|a| {
            let (given, surname) = split_name(&a.name);
            format!("{}, {}", surname, initials(&given))
        })
        .collect::<Vec<_>>()
        .join(", ");

    let mut citation = format!(
        "{} ({}). {}.",
        authors, document.publication_year, document.title
    );
    if let Some(journal) = &document.journal {
        citation.push(' ');
        citation.push_str(journal);
        if let Some(volume) = &document.volume {
            citation.push_str(&format!(", {volume}"));
        }
    }
    if let Some(pages) = &document.pages {
        citation.push_str(&format!(", {pages}"));
    }
    if let Some(doi) = &document.doi {
        citation.push_str(&format!(". https://doi.org/{doi}"));
    }
    citation
}

/// Format: `Author "Title." Journal, vol. Volume, Year, pp. Pages.` with the
/// first author as `Surname, Given` and `, et al.` when more than one.
fn format_mla(document: &Document) -> String {
    let (given, surname) = split_name(&document.authors[0].name);
    let given_names = given.join(" ");
    let author = if document.authors.len() > 1 {
        format!("{surname}, {given_names}, et al.")
    } else {
        format!("{surname}, {given_names}.")
    };

    let mut citation = format!("{} \"{}.\"", author, document.title);
    if let Some(journal) = &document.journal {
        citation.push(' ');
        citation.push_str(journal);
    }
    if let Some(volume) = &document.volume {
        citation.push_str(&format!(", vol. {volume}"));
    }
    citation.push_str(&format!(", {}", document.publication_year));
    if let Some(pages) = &document.pages {
        citation.push_str(&format!(", pp. {pages}"));
    }
    citation.push('.');
    citation
}

/// Format: `Authors. "Title." Journal Volume (Year): Pages.` with the first
/// author as `Surname, Given` and every later author verbatim.
fn format_chicago(document: &Document) -> String {
    let authors = document
        .authors
        .iter()
        .enumerate()
        .map(|(idx, a)| {
            if idx == 0 {
                let (given, surname) = split_name(&a.name);
                format!("{}, {}", surname, given.join(" "))
            } else {
                a.name.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(", ");

    let mut citation = format!("{}. \"{}.\"", authors, document.title);
    if let Some(journal) = &document.journal {
        citation.push(' ');
        citation.push_str(journal);
    }
    if let Some(volume) = &document.volume {
        citation.push_str(&format!(" {volume}"));
    }
    citation.push_str(&format!(" ({})", document.publication_year));
    if let Some(pages) = &document.pages {
        citation.push_str(&format!(": {pages}"));
    }
    citation.push('.');
    citation
}

/// Format: `Authors, "Title," Journal, vol. Volume, pp. Pages, Year.` with
/// every author as `I. I. Surname`.
fn format_ieee(document: &Document) -> String {
    let authors = document
        .authors
        .iter()
        .map(|a| {
            let (given, surname) = split_name(&a.name);
            format!("{} {}", initials(&given), surname)
        })
        .collect::<Vec<_>>()
        .join(", ");

    let mut citation = format!("{}, \"{},\"", authors, document.title);
    if let Some(journal) = &document.journal {
        citation.push(' ');
        citation.push_str(journal);
    }
    if let Some(volume) = &document.volume {
        citation.push_str(&format!(", vol. {volume}"));
    }
    if let Some(pages) = &document.pages {
        citation.push_str(&format!(", pp. {pages}"));
    }
    citation.push_str(&format!(", {}.", document.publication_year));
    citation
}

/// Generate a BibTeX `@article` entry.
///
/// The key is the lowercased surname of the first author followed by the
/// publication year. Absent optional fields render the literal `N/A`.
fn format_bibtex(document: &Document) -> String {
    let (_, surname) = split_name(&document.authors[0].name);
    let key = format!("{}{}", surname.to_lowercase(), document.publication_year);

    let authors = document
        .authors
        .iter()
        .map(|a| a.name.as_str())
        .collect::<Vec<_>>()
        .join(" and ");

    format!(
        "@article{{{key},\n  title={{{title}}},\n  author={{{authors}}},\n  journal={{{journal}}},\n  volume={{{volume}}},\n  pages={{{pages}}},\n  year={{{year}}},\n  doi={{{doi}}}\n}}",
        title = document.title,
        journal = document.journal.as_deref().unwrap_or("N/A"),
        volume = document.volume.as_deref().unwrap_or("N/A"),
        pages = document.pages.as_deref().unwrap_or("N/A"),
        year = document.publication_year,
        doi = document.doi.as_deref().unwrap_or("N/A"),
    )
}

/// Structured citation data for JSON output
#[derive(Debug, Serialize)]
pub struct StructuredCitation {
    pub style: String,
    pub formatted: String,
    pub authors: Vec<String>,
    pub title: String,
    pub year: i32,
    pub journal: Option<String>,
    pub doi: Option<String>,
}

/// Get structured citation data
pub fn structured_citation(
    document: &Document,
    style: CitationStyle,
) -> Result<StructuredCitation, CiteError> {
    Ok(StructuredCitation {
        style: style.to_string(),
        formatted: format_citation(document, style)?,
        authors: document.authors.iter().map(|a| a.name.clone()).collect(),
        title: document.title.clone(),
        year: document.publication_year,
        journal: document.journal.clone(),
        doi: document.doi.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Author, DocumentBuilder, DocumentType, Subject};

    fn survey_paper() -> Document {
        DocumentBuilder::new(
            "1",
            "Deep Learning Approaches for Natural Language Processing: A Comprehensive Survey",
            DocumentType::ResearchPaper,
            Subject::ComputerScience,
            2024,
        )
        .author(Author::with_affiliation("Dr. Sarah Chen", "MIT Computer Science"))
        .author(Author::with_affiliation("Prof. Michael Zhang", "Stanford AI Lab"))
        .journal("Journal of Artificial Intelligence Research")
        .volume("78")
        .pages("145-198")
        .doi("10.1613/jair.1.12345")
        .build()
    }

    fn bare_book() -> Document {
        DocumentBuilder::new(
            "2",
            "Quantum Computing: Principles, Algorithms, and Applications",
            DocumentType::Book,
            Subject::Physics,
            2023,
        )
        .author(Author::new("Dr. Robert Williams"))
        .build()
    }

    #[test]
    fn test_apa_full() {
        let citation = format_citation(&survey_paper(), CitationStyle::Apa).unwrap();
        assert_eq!(
            citation,
            "Chen, D. S., Zhang, P. M. (2024). Deep Learning Approaches for Natural Language \
             Processing: A Comprehensive Survey. Journal of Artificial Intelligence Research, \
             78, 145-198. https://doi.org/10.1613/jair.1.12345"
        );
    }

    #[test]
    fn test_apa_title_tokens_become_initials() {
        // "Dr." and "Prof." are given-name tokens under the splitting rule,
        // so they contribute initials.
        let citation = format_citation(&survey_paper(), CitationStyle::Apa).unwrap();
        assert!(citation.starts_with("Chen, D. S., Zhang, P. M. (2024)."));
    }

    #[test]
    fn test_apa_omits_absent_fields() {
        let citation = format_citation(&bare_book(), CitationStyle::Apa).unwrap();
        assert_eq!(
            citation,
            "Williams, D. R. (2023). Quantum Computing: Principles, Algorithms, and Applications."
        );
    }

    #[test]
    fn test_mla_multiple_authors_et_al() {
        let citation = format_citation(&survey_paper(), CitationStyle::Mla).unwrap();
        assert_eq!(
            citation,
            "Chen, Dr. Sarah, et al. \"Deep Learning Approaches for Natural Language \
             Processing: A Comprehensive Survey.\" Journal of Artificial Intelligence Research, \
             vol. 78, 2024, pp. 145-198."
        );
    }

    #[test]
    fn test_mla_single_author() {
        let citation = format_citation(&bare_book(), CitationStyle::Mla).unwrap();
        assert_eq!(
            citation,
            "Williams, Dr. Robert. \"Quantum Computing: Principles, Algorithms, and \
             Applications.\", 2023."
        );
    }

    #[test]
    fn test_chicago_first_author_inverted_rest_verbatim() {
        let citation = format_citation(&survey_paper(), CitationStyle::Chicago).unwrap();
        assert_eq!(
            citation,
            "Chen, Dr. Sarah, Prof. Michael Zhang. \"Deep Learning Approaches for Natural \
             Language Processing: A Comprehensive Survey.\" Journal of Artificial Intelligence \
             Research 78 (2024): 145-198."
        );
    }

    #[test]
    fn test_ieee_initials_before_surname() {
        let citation = format_citation(&survey_paper(), CitationStyle::Ieee).unwrap();
        assert_eq!(
            citation,
            "D. S. Chen, P. M. Zhang, \"Deep Learning Approaches for Natural Language \
             Processing: A Comprehensive Survey,\" Journal of Artificial Intelligence Research, \
             vol. 78, pp. 145-198, 2024."
        );
    }

    #[test]
    fn test_bibtex_key_and_fields() {
        let entry = format_citation(&survey_paper(), CitationStyle::Bibtex).unwrap();
        assert!(entry.starts_with("@article{chen2024,\n"));
        assert!(entry.contains("  author={Dr. Sarah Chen and Prof. Michael Zhang},\n"));
        assert!(entry.contains("  journal={Journal of Artificial Intelligence Research},\n"));
        assert!(entry.contains("  volume={78},\n"));
        assert!(entry.contains("  year={2024},\n"));
        assert!(entry.ends_with("}"));
    }

    #[test]
    fn test_bibtex_absent_fields_render_na() {
        let entry = format_citation(&bare_book(), CitationStyle::Bibtex).unwrap();
        assert!(entry.starts_with("@article{williams2023,\n"));
        assert!(entry.contains("  journal={N/A},\n"));
        assert!(entry.contains("  volume={N/A},\n"));
        assert!(entry.contains("  pages={N/A},\n"));
        assert!(entry.contains("  doi={N/A}\n"));
    }

    #[test]
    fn test_no_authors_is_an_error() {
        let doc = DocumentBuilder::new(
            "99",
            "Orphan Document",
            DocumentType::Synopsis,
            Subject::Literature,
            2020,
        )
        .build();

        for style in CitationStyle::ALL {
            assert_eq!(format_citation(&doc, style), Err(CiteError::NoAuthors));
        }
    }

    #[test]
    fn test_single_token_name_heuristic() {
        // A single-token name has no given names; the initials come out
        // empty, exactly as the splitting rule dictates.
        let doc = DocumentBuilder::new(
            "7",
            "Mononym Study",
            DocumentType::ResearchPaper,
            Subject::SocialSciences,
            2021,
        )
        .author(Author::new("Teller"))
        .build();

        let apa = format_citation(&doc, CitationStyle::Apa).unwrap();
        assert!(apa.starts_with("Teller, "));

        let bibtex = format_citation(&doc, CitationStyle::Bibtex).unwrap();
        assert!(bibtex.starts_with("@article{teller2021,"));
    }

    #[test]
    fn test_style_parse_and_display() {
        assert_eq!("apa".parse::<CitationStyle>().unwrap(), CitationStyle::Apa);
        assert_eq!(
            "bibtex".parse::<CitationStyle>().unwrap(),
            CitationStyle::Bibtex
        );
        assert!("harvard".parse::<CitationStyle>().is_err());
        assert_eq!(CitationStyle::Ieee.to_string(), "IEEE");
        assert_eq!(CitationStyle::Chicago.id(), "chicago");
    }

    #[test]
    fn test_structured_citation() {
        let structured = structured_citation(&survey_paper(), CitationStyle::Apa).unwrap();
        assert_eq!(structured.style, "APA");
        assert_eq!(structured.year, 2024);
        assert_eq!(structured.authors.len(), 2);
        assert!(structured.formatted.starts_with("Chen, D. S."));
    }
}
