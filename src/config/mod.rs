//! Configuration management.
//!
//! Settings come from an optional TOML file with environment variable
//! overrides (prefix `ACADEMIA_HUB`).
//!
//! # Configuration File Format
//!
//! ```toml
//! # Path to an external corpus dataset (JSON array of documents).
//! # When unset, the built-in catalog is served.
//! corpus = "./corpus.json"
//!
//! [display]
//! max_results = 10
//! citation_style = "apa"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Path to an external corpus dataset; the built-in catalog is used
    /// when unset
    #[serde(default)]
    pub corpus: Option<PathBuf>,

    /// Display settings
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Default maximum number of results shown by search
    #[serde(default = "default_max_results")]
    pub max_results: usize,

    /// Default citation style id for the `cite` command
    #[serde(default = "default_citation_style")]
    pub citation_style: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            max_results: default_max_results(),
            citation_style: default_citation_style(),
        }
    }
}

fn default_max_results() -> usize {
    10
}

fn default_citation_style() -> String {
    "apa".to_string()
}

/// Load configuration from a file, with environment overrides
pub fn load_config(path: &PathBuf) -> Result<Config, config::ConfigError> {
    let settings = config::Config::builder()
        .add_source(config::File::from(path.as_path()))
        .add_source(config::Environment::with_prefix("ACADEMIA_HUB"))
        .build()?;

    settings.try_deserialize()
}

/// Look for a config file in the default locations: `academia-hub.toml` in
/// the working directory, then `academia-hub/config.toml` under the
/// platform config directory.
pub fn find_config_file() -> Option<PathBuf> {
    let local = PathBuf::from("academia-hub.toml");
    if local.is_file() {
        return Some(local);
    }

    if let Some(config_dir) = dirs::config_dir() {
        let global = config_dir.join("academia-hub").join("config.toml");
        if global.is_file() {
            return Some(global);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.corpus.is_none());
        assert_eq!(config.display.max_results, 10);
        assert_eq!(config.display.citation_style, "apa");
    }

    #[test]
    fn test_config_from_toml() {
        let parsed: Config = toml::from_str(
            r#"
                corpus = "./data/corpus.json"

                [display]
                max_results = 25
                citation_style = "ieee"
            "#,
        )
        .unwrap();

        assert_eq!(parsed.corpus, Some(PathBuf::from("./data/corpus.json")));
        assert_eq!(parsed.display.max_results, 25);
        assert_eq!(parsed.display.citation_style, "ieee");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let parsed: Config = toml::from_str("[display]\nmax_results = 3\n").unwrap();
        assert_eq!(parsed.display.max_results, 3);
        assert_eq!(parsed.display.citation_style, "apa");
        assert!(parsed.corpus.is_none());
    }
}
