//! Command-line interface for rflex
//! Prints the tokens of a test data file, for manual inspection of the lexer.
//!
//! Usage:
//!   rflex `<path>`          - Full mode: print token values, reproducing the file
//!   rflex `<path>` `<mode>` - Data-only mode: print one token per line (any mode value)
//!
//! Options:
//!   --format `<format>`  auto | text | repr | json
//!   --config `<file>`    layer a TOML configuration file over the defaults
//!   -v                   more logging on stderr (repeatable); RUST_LOG takes precedence

use clap::{Arg, ArgAction, Command};
use rflex::config::{Loader, OutputFormat, RflexConfig};
use rflex::loader::DocumentLoader;
use rflex::{Token, TokenType};
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

fn main() {
    let matches = Command::new("rflex")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Tokenize tabular test data files")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the test data file")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("mode")
                .help("Any value selects data-only mode")
                .index(2),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format")
                .value_parser(["auto", "text", "repr", "json"]),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the defaults"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase logging verbosity")
                .action(ArgAction::Count),
        )
        .get_matches();

    init_tracing(matches.get_count("verbose"));

    let path = matches
        .get_one::<String>("path")
        .expect("path is a required argument");
    let data_only = matches.contains_id("mode");
    let format = matches.get_one::<String>("format").map(String::as_str);
    let config_file = matches.get_one::<String>("config").map(String::as_str);

    let config = load_config(config_file, data_only, format).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    if let Err(e) = handle_tokenize_command(path, &config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(directive_for_verbosity(verbose))),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn directive_for_verbosity(v: u8) -> &'static str {
    match v {
        0 => "rflex=warn",
        1 => "rflex=debug",
        _ => "rflex=trace",
    }
}

fn load_config(
    config_file: Option<&str>,
    data_only: bool,
    format: Option<&str>,
) -> rflex::Result<RflexConfig> {
    let mut loader = Loader::new();
    if let Some(file) = config_file {
        loader = loader.with_file(file);
    }
    if data_only {
        loader = loader.data_only()?;
    }
    if let Some(format) = format {
        loader = loader.format(format)?;
    }
    loader.build()
}

/// Tokenize `path` and print the tokens in the configured format.
fn handle_tokenize_command(path: &str, config: &RflexConfig) -> rflex::Result<()> {
    let loader = DocumentLoader::from_path(path)?;
    let tokens = loader.tokenize_with(&config.lexer);
    let include_eos = config.output.include_eos;
    let visible = tokens.filter(|t| include_eos || t.token_type != TokenType::Eos);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match config.output.format.resolve(config.lexer.data_only) {
        OutputFormat::Text | OutputFormat::Auto => {
            for token in visible {
                write!(out, "{}", token)?;
            }
        }
        OutputFormat::Repr => {
            for token in visible {
                writeln!(out, "{}", token.to_repr())?;
            }
        }
        OutputFormat::Json => {
            let tokens: Vec<Token> = visible.collect();
            serde_json::to_writer_pretty(&mut out, &tokens)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directive_for_verbosity() {
        assert_eq!(directive_for_verbosity(0), "rflex=warn");
        assert_eq!(directive_for_verbosity(1), "rflex=debug");
        assert_eq!(directive_for_verbosity(2), "rflex=trace");
        assert_eq!(directive_for_verbosity(5), "rflex=trace");
    }

    #[test]
    fn test_mode_argument_overrides_config() {
        let config = load_config(None, true, Some("json")).expect("config to build");
        assert!(config.lexer.data_only);
        assert_eq!(config.output.format, OutputFormat::Json);
    }
}
