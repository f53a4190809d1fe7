//! Document loading utilities
//!
//! This module provides `DocumentLoader`, a small utility that reads a test data document
//! from a file or string and runs the lexer over it. It is used by the CLI and by tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use rflex::loader::DocumentLoader;
//!
//! let tokens: Vec<_> = DocumentLoader::from_path("suite.robot")?
//!     .tokenize(false)
//!     .collect();
//! ```

use crate::config::LexerConfig;
use crate::error::Result;
use crate::lexing::{RobotLexer, TokenStream};
use std::fs;
use std::path::Path;
use tracing::debug;

pub struct DocumentLoader {
    source: String,
}

impl DocumentLoader {
    /// Load from a file path.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path)?;
        debug!(path = %path.display(), bytes = source.len(), "loaded document");
        Ok(DocumentLoader { source })
    }

    /// Load from a string.
    pub fn from_string<S: Into<String>>(source: S) -> Self {
        DocumentLoader {
            source: source.into(),
        }
    }

    /// Tokenize the source in the given mode.
    pub fn tokenize(&self, data_only: bool) -> TokenStream {
        let mut lexer = RobotLexer::new(data_only);
        lexer.input(&self.source);
        lexer.get_tokens()
    }

    /// Tokenize the source with the mode taken from configuration.
    pub fn tokenize_with(&self, config: &LexerConfig) -> TokenStream {
        self.tokenize(config.data_only)
    }

    pub fn source(&self) -> &str {
        &self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::token::formatting::detokenize;
    use std::io::Write;

    #[test]
    fn test_from_string() {
        let loader = DocumentLoader::from_string("*** Comments ***\n");
        assert_eq!(loader.source(), "*** Comments ***\n");
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "*** Test Cases ***\nExample\n    Log    hi\n").expect("write document");

        let loader = DocumentLoader::from_path(file.path()).expect("document to load");
        let tokens: Vec<_> = loader.tokenize(false).collect();
        assert_eq!(detokenize(&tokens), loader.source());
    }

    #[test]
    fn test_missing_file() {
        let result = DocumentLoader::from_path("/nonexistent/suite.robot");
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_tokenize_with_config() {
        let loader = DocumentLoader::from_string("*** Comments ***\nnote\n");
        let config = LexerConfig { data_only: true };
        assert_eq!(loader.tokenize_with(&config).count(), 0);
    }
}
