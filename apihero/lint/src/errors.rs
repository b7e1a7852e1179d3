//! Error types for the linter.

use apihero_define::CatalogError;
use thiserror::Error;

/// Errors that stop a lint run before or after the checks themselves.
#[derive(Debug, Error)]
pub enum LintError {
    /// The config file could not be read.
    #[error("Failed to read config file '{path}': {source}")]
    ReadConfig {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML or has unknown keys.
    #[error("Invalid config file '{path}': {source}")]
    ParseConfig {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    /// The catalog could not be indexed.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// No descriptor has the requested id.
    #[error("Unknown endpoint id '{0}'")]
    UnknownEndpoint(String),

    /// JSON output could not be produced.
    #[error("Failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),

    /// An output file could not be written.
    #[error("Failed to write '{path}': {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
