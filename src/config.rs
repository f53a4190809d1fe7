//! Configuration loader for rflex.
//!
//! The shipped defaults live in `defaults/rflex.default.toml` and are compiled in. The CLI
//! layers an optional `--config` file and its own flags over them with [`Loader`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use crate::error::Result;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/rflex.default.toml");

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct RflexConfig {
    pub lexer: LexerConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LexerConfig {
    pub data_only: bool,
}

/// Controls how the CLI prints tokens.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub include_eos: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// `Text` in full mode, `Repr` in data-only mode
    Auto,
    /// Bare token values; reproduces the source in full mode
    Text,
    /// One `Token(TYPE, "value", line, column)` per line
    Repr,
    /// A JSON array of tokens
    Json,
}

impl OutputFormat {
    /// Resolve `Auto` for the given mode.
    pub fn resolve(self, data_only: bool) -> OutputFormat {
        match self {
            OutputFormat::Auto if data_only => OutputFormat::Repr,
            OutputFormat::Auto => OutputFormat::Text,
            other => other,
        }
    }
}

/// Builds an [`RflexConfig`] from the embedded defaults, an optional TOML file and the
/// command line, later layers winning.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        Loader {
            builder: Config::builder()
                .add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml)),
        }
    }

    /// Layer a TOML file on top of the defaults. The file must exist.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        self.builder = self
            .builder
            .add_source(File::from(path.as_ref()).format(FileFormat::Toml).required(true));
        self
    }

    /// Force data-only lexing, whatever the files say.
    pub fn data_only(self) -> Result<Self> {
        self.set("lexer.data_only", true)
    }

    /// Force an output format by name (`auto`, `text`, `repr` or `json`).
    ///
    /// Unknown names are only rejected by [`Loader::build`].
    pub fn format(self, name: &str) -> Result<Self> {
        self.set("output.format", name)
    }

    fn set(mut self, key: &str, value: impl Into<ValueKind>) -> Result<Self> {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<RflexConfig> {
        Ok(self.builder.build()?.try_deserialize()?)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}
