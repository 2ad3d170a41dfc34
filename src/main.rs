use anyhow::{bail, Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::borrow::Cow;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use academia_hub::catalog::{self, builtin, load_corpus};
use academia_hub::config::{find_config_file, load_config, Config};
use academia_hub::models::{Document, DocumentType, SearchFilters, Subject, YearRange};
use academia_hub::ui;
use academia_hub::utils::{
    format_citation, structured_citation, terminal_width, truncate_with_ellipsis, CitationStyle,
};

/// AcademiaHub - Search, browse, and cite a static catalog of academic documents
#[derive(Parser, Debug)]
#[command(name = "academia-hub")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Search, browse, and cite a static catalog of academic documents", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose logging (can be used multiple times for more verbosity: -v, -vv, -vvv)
    #[arg(long, short, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(long, short)]
    quiet: bool,

    /// Output format
    #[arg(long, short, value_enum, global = true, default_value_t = OutputFormat::Auto)]
    output: OutputFormat,

    /// Configuration file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// External corpus dataset (JSON array of documents); overrides the
    /// config file setting
    #[arg(long, global = true)]
    corpus: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Output format for results
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    /// Automatic based on terminal (table if TTY, JSON otherwise)
    Auto,
    /// Table format (human-readable)
    Table,
    /// JSON format (machine-readable)
    Json,
    /// Plain text format
    Plain,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Search documents by query string and filters
    #[command(alias = "s")]
    Search {
        /// Query text, matched against title, abstract, keywords, author
        /// names, and subject (empty = filters only)
        #[arg(default_value = "")]
        query: String,

        /// Restrict to a subject (repeatable, e.g. --subject computer-science)
        #[arg(long = "subject")]
        subjects: Vec<String>,

        /// Restrict to a document type (repeatable, e.g. --doc-type thesis)
        #[arg(long = "doc-type")]
        doc_types: Vec<String>,

        /// Earliest publication year to include
        #[arg(long)]
        year_from: Option<i32>,

        /// Latest publication year to include
        #[arg(long)]
        year_to: Option<i32>,

        /// Maximum number of results (default from config)
        #[arg(long, short)]
        max_results: Option<usize>,
    },

    /// Browse the catalog by subject and document type
    #[command(alias = "b")]
    Browse {
        /// Show the documents of one subject instead of the overview
        #[arg(long)]
        subject: Option<String>,
    },

    /// Most viewed documents
    Trending {
        /// Number of documents to show
        #[arg(long, short = 'n', default_value_t = 6)]
        limit: usize,
    },

    /// Most recently published documents
    Recent {
        /// Number of documents to show
        #[arg(long, short = 'n', default_value_t = 6)]
        limit: usize,
    },

    /// Documents related to the given document (same subject or shared keywords)
    Related {
        /// Document id
        id: String,
    },

    /// Show a document's full metadata
    Show {
        /// Document id
        id: String,
    },

    /// Generate a citation for a document
    #[command(alias = "c")]
    Cite {
        /// Document id
        id: String,

        /// Citation style: apa, mla, chicago, ieee, or bibtex
        /// (default from config)
        #[arg(long, short)]
        style: Option<String>,

        /// Print the citation in every style
        #[arg(long, conflicts_with = "style")]
        all: bool,
    },

    /// List the subject areas
    Subjects,

    /// List the document types
    Types,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity
    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let env_filter = if cli.quiet { "error" } else { log_level };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| format!("academia_hub={}", env_filter)),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Completions need neither config nor corpus
    if let Commands::Completions { shell } = &cli.command {
        let mut command = Cli::command();
        clap_complete::generate(*shell, &mut command, "academia-hub", &mut std::io::stdout());
        return Ok(());
    }

    // Load configuration from file if specified or found in default locations
    let config = if let Some(config_path) = &cli.config {
        load_config(config_path)?
    } else if let Some(config_path) = find_config_file() {
        tracing::info!("Using config file: {}", config_path.display());
        load_config(&config_path)?
    } else {
        Config::default()
    };

    // Resolve the corpus snapshot: CLI flag, then config, then built-in
    let corpus: Cow<'static, [Document]> = match cli.corpus.as_ref().or(config.corpus.as_ref()) {
        Some(path) => Cow::Owned(
            load_corpus(path)
                .with_context(|| format!("failed to load corpus from {}", path.display()))?,
        ),
        None => Cow::Borrowed(builtin()),
    };

    match cli.command {
        Commands::Search {
            query,
            subjects,
            doc_types,
            year_from,
            year_to,
            max_results,
        } => {
            let mut filters = SearchFilters::new(query);
            filters.subjects = parse_subjects(&subjects)?;
            filters.document_types = parse_doc_types(&doc_types)?;
            filters.year_range = YearRange::new(
                year_from.unwrap_or(i32::MIN),
                year_to.unwrap_or(i32::MAX),
            );

            let results = catalog::search(&corpus, &filters);
            let total = results.len();
            let limit = max_results.unwrap_or(config.display.max_results);
            let shown: Vec<&Document> = results.into_iter().take(limit).collect();

            output_documents(&shown, cli.output);
            if shown.len() < total && resolve_format(cli.output) != OutputFormat::Json {
                ui::info_line(&format!(
                    "Showing {} of {} results (use --max-results to see more)",
                    shown.len(),
                    total
                ));
            }
        }

        Commands::Browse { subject } => match subject {
            Some(raw) => {
                let subject: Subject = raw
                    .parse()
                    .with_context(|| format!("invalid --subject value: {raw}"))?;
                let filters = SearchFilters::default().subject(subject);
                let documents = catalog::search(&corpus, &filters);
                output_documents(&documents, cli.output);
            }
            None => output_overview(&corpus, cli.output),
        },

        Commands::Trending { limit } => {
            let documents = catalog::trending(&corpus, limit);
            output_documents(&documents, cli.output);
        }

        Commands::Recent { limit } => {
            let documents = catalog::recent(&corpus, limit);
            output_documents(&documents, cli.output);
        }

        Commands::Related { id } => {
            if catalog::find_by_id(&corpus, &id).is_none() {
                bail!("document not found: {id}");
            }
            let documents = catalog::related(&corpus, &id);
            output_documents(&documents, cli.output);
        }

        Commands::Show { id } => {
            let Some(document) = catalog::find_by_id(&corpus, &id) else {
                bail!("document not found: {id}");
            };
            output_document_detail(document, cli.output);
        }

        Commands::Cite { id, style, all } => {
            let Some(document) = catalog::find_by_id(&corpus, &id) else {
                bail!("document not found: {id}");
            };

            let styles: Vec<CitationStyle> = if all {
                CitationStyle::ALL.to_vec()
            } else {
                let raw = style.unwrap_or_else(|| config.display.citation_style.clone());
                vec![raw.parse()?]
            };

            output_citations(document, &styles, cli.output)?;
        }

        Commands::Subjects => {
            let rows: Vec<(String, String)> = Subject::ALL
                .iter()
                .map(|s| (s.id().to_string(), s.name().to_string()))
                .collect();
            output_enumeration("Subjects", &rows, cli.output);
        }

        Commands::Types => {
            let rows: Vec<(String, String)> = DocumentType::ALL
                .iter()
                .map(|t| (t.id().to_string(), t.name().to_string()))
                .collect();
            output_enumeration("Document types", &rows, cli.output);
        }

        Commands::Completions { .. } => unreachable!("handled above"),
    }

    Ok(())
}

fn parse_subjects(raw: &[String]) -> Result<Vec<Subject>> {
    raw.iter()
        .map(|s| {
            s.parse::<Subject>()
                .with_context(|| format!("invalid --subject value: {s}"))
        })
        .collect()
}

fn parse_doc_types(raw: &[String]) -> Result<Vec<DocumentType>> {
    raw.iter()
        .map(|s| {
            s.parse::<DocumentType>()
                .with_context(|| format!("invalid --doc-type value: {s}"))
        })
        .collect()
}

fn resolve_format(format: OutputFormat) -> OutputFormat {
    if format == OutputFormat::Auto {
        if ui::is_terminal() {
            OutputFormat::Table
        } else {
            OutputFormat::Json
        }
    } else {
        format
    }
}

fn output_documents(documents: &[&Document], format: OutputFormat) {
    match resolve_format(format) {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(documents).unwrap());
        }
        OutputFormat::Plain => {
            for doc in documents {
                println!(
                    "{} - {} ({})",
                    doc.title,
                    doc.author_names().join("; "),
                    doc.publication_year
                );
                println!("  ID: {}", doc.id);
                println!("  Subject: {} | Type: {}", doc.subject, doc.doc_type);
                if let Some(ref doi) = doc.doi {
                    println!("  DOI: {}", doi);
                }
                println!();
            }
        }
        OutputFormat::Table => {
            use comfy_table::{Attribute, Cell, Table};
            let mut table = Table::new();
            table.load_preset(comfy_table::presets::UTF8_FULL);
            table.set_header(vec![
                "ID", "Title", "Authors", "Type", "Subject", "Year", "Views",
            ]);

            // Give the title whatever is left after the fixed columns.
            let title_width = terminal_width().saturating_sub(70).clamp(30, 80);

            for doc in documents {
                let title = truncate_with_ellipsis(&doc.title, title_width);
                let authors = truncate_with_ellipsis(&doc.author_names().join("; "), 30);

                table.add_row(vec![
                    Cell::new(&doc.id),
                    Cell::new(title).add_attribute(Attribute::Bold),
                    Cell::new(authors),
                    Cell::new(doc.doc_type.name()),
                    Cell::new(doc.subject.name()),
                    Cell::new(doc.publication_year),
                    Cell::new(ui::format_count(doc.views)),
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Auto => unreachable!(),
    }
}

fn output_document_detail(document: &Document, format: OutputFormat) {
    match resolve_format(format) {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(document).unwrap());
        }
        _ => {
            ui::section(&document.title);
            println!();
            for author in &document.authors {
                match &author.affiliation {
                    Some(affiliation) => println!("  {} ({})", author.name, affiliation),
                    None => println!("  {}", author.name),
                }
            }
            println!();
            println!(
                "  {} {} | {} | {}",
                ui::subject_icon(document.subject),
                document.subject,
                document.doc_type,
                document.publication_year
            );
            if let Some(journal) = &document.journal {
                let volume = document
                    .volume
                    .as_ref()
                    .map(|v| format!(", vol. {v}"))
                    .unwrap_or_default();
                let pages = document
                    .pages
                    .as_ref()
                    .map(|p| format!(", pp. {p}"))
                    .unwrap_or_default();
                println!("  {journal}{volume}{pages}");
            }
            if let Some(doi) = &document.doi {
                println!("  DOI: {doi}");
            }
            println!(
                "  {} views | {} citations",
                ui::format_count(document.views),
                ui::format_count(document.citations)
            );
            println!();
            println!("{}", document.r#abstract);
            if !document.keywords.is_empty() {
                println!();
                println!("Keywords: {}", document.keywords.join(", "));
            }
        }
    }
}

fn output_citations(
    document: &Document,
    styles: &[CitationStyle],
    format: OutputFormat,
) -> Result<()> {
    match resolve_format(format) {
        OutputFormat::Json => {
            let structured = styles
                .iter()
                .map(|&style| structured_citation(document, style))
                .collect::<Result<Vec<_>, _>>()?;
            println!("{}", serde_json::to_string_pretty(&structured).unwrap());
        }
        _ => {
            for &style in styles {
                let citation = format_citation(document, style)?;
                if styles.len() > 1 {
                    ui::section(&style.to_string());
                }
                println!("{citation}");
                if styles.len() > 1 {
                    println!();
                }
            }
        }
    }
    Ok(())
}

fn output_overview(corpus: &[Document], format: OutputFormat) {
    let subjects = catalog::subject_counts(corpus);
    let types = catalog::type_counts(corpus);

    match resolve_format(format) {
        OutputFormat::Json => {
            let value = serde_json::json!({
                "total": corpus.len(),
                "subjects": subjects
                    .iter()
                    .map(|(s, n)| serde_json::json!({ "id": s.id(), "name": s.name(), "count": n }))
                    .collect::<Vec<_>>(),
                "types": types
                    .iter()
                    .map(|(t, n)| serde_json::json!({ "id": t.id(), "name": t.name(), "count": n }))
                    .collect::<Vec<_>>(),
            });
            println!("{}", serde_json::to_string_pretty(&value).unwrap());
        }
        OutputFormat::Plain => {
            println!("{} documents", corpus.len());
            println!();
            for (subject, count) in &subjects {
                println!("{}: {}", subject.name(), count);
            }
            println!();
            for (doc_type, count) in &types {
                println!("{}: {}", doc_type.name(), count);
            }
        }
        OutputFormat::Table => {
            use comfy_table::Table;

            ui::section("Subjects");
            let mut table = Table::new();
            table.load_preset(comfy_table::presets::UTF8_FULL);
            table.set_header(vec!["Subject", "Documents"]);
            for (subject, count) in &subjects {
                table.add_row(vec![
                    format!("{} {}", ui::subject_icon(*subject), subject.name()),
                    count.to_string(),
                ]);
            }
            println!("{table}");

            ui::section("Document types");
            let mut table = Table::new();
            table.load_preset(comfy_table::presets::UTF8_FULL);
            table.set_header(vec!["Type", "Documents"]);
            for (doc_type, count) in &types {
                table.add_row(vec![doc_type.name().to_string(), count.to_string()]);
            }
            println!("{table}");
        }
        OutputFormat::Auto => unreachable!(),
    }
}

fn output_enumeration(title: &str, rows: &[(String, String)], format: OutputFormat) {
    match resolve_format(format) {
        OutputFormat::Json => {
            let value: Vec<_> = rows
                .iter()
                .map(|(id, name)| serde_json::json!({ "id": id, "name": name }))
                .collect();
            println!("{}", serde_json::to_string_pretty(&value).unwrap());
        }
        OutputFormat::Plain => {
            for (id, name) in rows {
                println!("{id}\t{name}");
            }
        }
        OutputFormat::Table => {
            use comfy_table::Table;

            ui::section(title);
            let mut table = Table::new();
            table.load_preset(comfy_table::presets::UTF8_FULL);
            table.set_header(vec!["ID", "Name"]);
            for (id, name) in rows {
                table.add_row(vec![id.clone(), name.clone()]);
            }
            println!("{table}");
        }
        OutputFormat::Auto => unreachable!(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_version() {
        let version = env!("CARGO_PKG_VERSION");
        assert!(!version.is_empty());
        let parts: Vec<&str> = version.split('.').collect();
        assert!(parts.len() >= 2);
        assert!(parts[0].parse::<u32>().is_ok());
    }

    #[test]
    fn test_cli_default_values() {
        let cli = Cli::parse_from(["academia-hub", "search", "bert"]);
        assert_eq!(cli.verbose, 0);
        assert!(!cli.quiet);
        assert_eq!(cli.output, OutputFormat::Auto);
        assert!(cli.config.is_none());
        assert!(cli.corpus.is_none());
    }

    #[test]
    fn test_cli_verbose_flag() {
        let cli = Cli::parse_from(["academia-hub", "-v", "trending"]);
        assert_eq!(cli.verbose, 1);

        let cli = Cli::parse_from(["academia-hub", "-vv", "trending"]);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_cli_search_filters() {
        let cli = Cli::parse_from([
            "academia-hub",
            "search",
            "neural",
            "--subject",
            "computer-science",
            "--subject",
            "engineering",
            "--doc-type",
            "thesis",
            "--year-from",
            "2020",
            "--year-to",
            "2024",
        ]);

        match cli.command {
            Commands::Search {
                query,
                subjects,
                doc_types,
                year_from,
                year_to,
                ..
            } => {
                assert_eq!(query, "neural");
                assert_eq!(subjects, vec!["computer-science", "engineering"]);
                assert_eq!(doc_types, vec!["thesis"]);
                assert_eq!(year_from, Some(2020));
                assert_eq!(year_to, Some(2024));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_search_alias() {
        let cli = Cli::parse_from(["academia-hub", "s", "quantum"]);
        assert!(matches!(cli.command, Commands::Search { .. }));
    }

    #[test]
    fn test_cli_cite_style_conflicts_with_all() {
        let result =
            Cli::try_parse_from(["academia-hub", "cite", "1", "--style", "apa", "--all"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_subject_list() {
        let parsed = parse_subjects(&["medicine".to_string(), "physics".to_string()]).unwrap();
        assert_eq!(parsed, vec![Subject::Medicine, Subject::Physics]);
        assert!(parse_subjects(&["astrology".to_string()]).is_err());
    }

    #[test]
    fn test_parse_doc_type_list() {
        let parsed = parse_doc_types(&["book".to_string()]).unwrap();
        assert_eq!(parsed, vec![DocumentType::Book]);
        assert!(parse_doc_types(&["scroll".to_string()]).is_err());
    }
}
