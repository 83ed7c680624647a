//! Unified error type definition

use std::path::PathBuf;

use thiserror::Error;

// Re-export library error type
pub use domain_renewer_provider::ProviderError;

/// Fatal configuration error.
///
/// Raised before any API call is made; the run is aborted and no report is produced.
/// Messages never include credential values.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Required environment variable is unset or blank
    #[error("Environment variable {0} is not set")]
    MissingVariable(&'static str),

    /// Account list is not JSON at all
    #[error("Account list is not valid JSON (line {line}, column {column})")]
    InvalidJson { line: usize, column: usize },

    /// Account list is JSON but not an array
    #[error("Account list must be a JSON array, got {0}")]
    NotAnArray(&'static str),

    /// Account list is an empty array
    #[error("Account list is empty")]
    EmptyAccountList,

    /// One entry does not match `{"key": "...", "secret": "..."}`
    #[error("Account #{index}: {reason}")]
    InvalidAccount { index: usize, reason: String },

    /// API base override is not an http(s) URL
    #[error("Invalid API base URL '{value}': {reason}")]
    InvalidApiBase { value: String, reason: String },
}

/// Config layer Result type alias
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Fatal error of a whole run.
///
/// Per-domain and per-account failures never surface here; they are recorded in
/// the run report instead.
#[derive(Error, Debug)]
pub enum RenewerError {
    /// Configuration could not be loaded
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Registrar client could not be constructed
    #[error("Failed to create provider: {0}")]
    Provider(#[from] ProviderError),

    /// Summary could not be written
    #[error("Failed to write summary to {path}: {source}")]
    SummaryWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Summary could not be written to standard output
    #[error("Failed to write summary to stdout: {0}")]
    Stdout(#[source] std::io::Error),
}

/// Run-level Result type alias
pub type RenewerResult<T> = std::result::Result<T, RenewerError>;
