//! Error types for the fallible edges of the crate.
//!
//! Tokenization itself never fails; problems in the input become `ERROR` tokens. Only
//! reading documents and loading configuration can go wrong.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Reading a document failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration file or override could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Serializing tokens for output failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
