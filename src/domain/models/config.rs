use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default wording for the response template.
///
/// `{context}` and `{question}` are substituted by the formatter.
pub const DEFAULT_RESPONSE_TEMPLATE: &str = "Based on the most relevant information found, \
which is: '{context}' ... answering your question '{question}' would typically involve a \
call to a Large Language Model. This demo simulates that step by providing the retrieved context.";

/// Context used when no chunk can be retrieved.
pub const DEFAULT_NO_MATCH_MESSAGE: &str = "No relevant information found.";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Corpus location
    #[serde(default)]
    pub corpus: CorpusConfig,

    /// Vectorizer settings
    #[serde(default)]
    pub embedding: EmbeddingConfig,

    /// Retrieval and response settings
    #[serde(default)]
    pub retrieval: RetrievalConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Corpus configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CorpusConfig {
    /// Path to the plain-text corpus file
    #[serde(default = "default_corpus_path")]
    pub path: PathBuf,
}

fn default_corpus_path() -> PathBuf {
    PathBuf::from("documents/sample.txt")
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            path: default_corpus_path(),
        }
    }
}

/// Embedding configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct EmbeddingConfig {
    /// Vector dimension, which is also the size of the character-code alphabet
    #[serde(default = "default_dimensions")]
    pub dimensions: usize,
}

const fn default_dimensions() -> usize {
    256
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            dimensions: default_dimensions(),
        }
    }
}

/// Retrieval configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RetrievalConfig {
    /// Context passed to the formatter when nothing is retrieved
    #[serde(default = "default_no_match_message")]
    pub no_match_message: String,

    /// Response template with `{question}` and `{context}` placeholders
    #[serde(default = "default_response_template")]
    pub response_template: String,
}

fn default_no_match_message() -> String {
    DEFAULT_NO_MATCH_MESSAGE.to_string()
}

fn default_response_template() -> String {
    DEFAULT_RESPONSE_TEMPLATE.to_string()
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            no_match_message: default_no_match_message(),
            response_template: default_response_template(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Directory for rolling log files (stderr only when unset)
    #[serde(default)]
    pub log_dir: Option<PathBuf>,

    /// File rotation: daily, hourly, never
    #[serde(default = "default_rotation")]
    pub rotation: String,

    /// Write logs to stderr as well as any log directory
    #[serde(default = "default_true")]
    pub stderr: bool,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_rotation() -> String {
    "daily".to_string()
}

const fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            log_dir: None,
            rotation: default_rotation(),
            stderr: true,
        }
    }
}
