/*!
 * Application configuration module.
 *
 * This module handles the application configuration including loading,
 * validating and merging configuration settings from a JSON file and
 * environment variable overrides.
 */

use anyhow::{anyhow, Context, Result};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Concept-analytics service credentials and endpoint
    #[serde(default)]
    pub provider: ProviderConfig,

    /// Explicit corpus id (e.g. `/corpora/public/TEDTalks`). When unset, the
    /// corpus id is derived at startup from the account id and `corpus_name`.
    #[serde(default)]
    pub corpus_id: Option<String>,

    /// Corpus name used when deriving the corpus id from the account
    #[serde(default = "default_corpus_name")]
    pub corpus_name: String,

    /// Concept graph used for text annotation
    #[serde(default = "default_graph_id")]
    pub graph_id: String,

    /// Default result limit for search operations
    #[serde(default = "default_search_limit")]
    pub search_limit: usize,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Provider connection configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ProviderConfig {
    /// Service username for basic auth
    #[serde(default = "String::new")]
    pub username: String,

    /// Service password for basic auth
    #[serde(default = "String::new")]
    pub password: String,

    /// Service URL; empty means the public endpoint
    #[serde(default = "String::new")]
    pub endpoint: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            username: String::new(),
            password: String::new(),
            endpoint: String::new(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            provider: ProviderConfig::default(),
            corpus_id: None,
            corpus_name: default_corpus_name(),
            graph_id: default_graph_id(),
            search_limit: default_search_limit(),
            log_level: LogLevel::default(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Convert to the log crate's level filter
    pub fn to_level_filter(&self) -> LevelFilter {
        match self {
            Self::Error => LevelFilter::Error,
            Self::Warn => LevelFilter::Warn,
            Self::Info => LevelFilter::Info,
            Self::Debug => LevelFilter::Debug,
            Self::Trace => LevelFilter::Trace,
        }
    }
}

impl Config {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())
            .with_context(|| format!("Failed to open config file {:?}", path.as_ref()))?;
        let reader = BufReader::new(file);
        let config: Self =
            serde_json::from_reader(reader).context("Failed to parse config file")?;
        Ok(config)
    }

    /// Apply environment variable overrides on top of the loaded values.
    ///
    /// Recognized variables: `CONCEPT_USERNAME`, `CONCEPT_PASSWORD`,
    /// `CONCEPT_ENDPOINT`, `CORPUS_ID`, `GRAPH_ID`.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(username) = std::env::var("CONCEPT_USERNAME") {
            self.provider.username = username;
        }
        if let Ok(password) = std::env::var("CONCEPT_PASSWORD") {
            self.provider.password = password;
        }
        if let Ok(endpoint) = std::env::var("CONCEPT_ENDPOINT") {
            self.provider.endpoint = endpoint;
        }
        if let Ok(corpus_id) = std::env::var("CORPUS_ID") {
            self.corpus_id = Some(corpus_id);
        }
        if let Ok(graph_id) = std::env::var("GRAPH_ID") {
            self.graph_id = graph_id;
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.provider.username.is_empty() {
            return Err(anyhow!("Provider username must not be empty"));
        }
        if self.provider.password.is_empty() {
            return Err(anyhow!("Provider password must not be empty"));
        }
        if !self.provider.endpoint.is_empty() {
            url::Url::parse(&self.provider.endpoint)
                .map_err(|e| anyhow!("Invalid provider endpoint: {}", e))?;
        }
        if self.graph_id.is_empty() {
            return Err(anyhow!("Graph id must not be empty"));
        }
        if self.search_limit == 0 {
            return Err(anyhow!("Search limit must be greater than zero"));
        }
        Ok(())
    }
}

fn default_corpus_name() -> String {
    "solutionExplorer".to_string()
}

fn default_graph_id() -> String {
    "/graphs/wikipedia/en-20120601".to_string()
}

fn default_search_limit() -> usize {
    10
}
