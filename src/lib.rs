//! # rflex
//!
//! A tokenizer for tabular, keyword-driven test data.
//!
//! File Layout
//!
//!     The crate is organized around the tokenization pipeline. Shared token types live in
//!     [token], the pipeline stages in [lexing], and the edges that touch the outside world
//!     (files, configuration) in [loader] and [config].
//!
//!     src
//!       ├── token       Token, TokenType and Statement
//!       ├── lexing      splitter, classification, transformations, token stream
//!       ├── config      layered configuration
//!       ├── loader      reading documents and running the pipeline
//!       └── testing     factories used by unit and integration tests
//!
//! Quick Start
//!
//!     ```rust,ignore
//!     use rflex::lexing::tokenize;
//!
//!     for token in tokenize("*** Test Cases ***\nExample\n    Log    Hello\n", true) {
//!         println!("{}", token.to_repr());
//!     }
//!     ```

pub mod config;
pub mod error;
pub mod lexing;
pub mod loader;
pub mod testing;
pub mod token;

pub use error::{Error, Result};
pub use lexing::{tokenize, RobotLexer, TokenStream};
pub use token::{Statement, Token, TokenType};
