//! Core token types shared across the splitter, the lexer and tooling.
//!
//! Token Layers
//!
//!     Even though classification operates over statements, a token goes through several
//!     layers during one run:
//!
//!     Raw Tokens:
//!         Produced by the splitter. Content cells are typed `DATA`, layout is typed
//!         `SEPARATOR`, `EOL`, `CONTINUATION` or `COMMENT`. See
//!         [splitter](crate::lexing::splitter).
//!
//!     Classified Tokens:
//!         The lexer replaces the `DATA` type of every content cell with a semantic type
//!         valid for the current section (`KEYWORD`, `ARGUMENT`, `SETTING_HEADER`, ...), or
//!         with `ERROR` when the context can not explain the cell. See
//!         [classification](crate::lexing::classification).
//!
//!     Synthetic Tokens:
//!         Tokens that never appear in the source. `END` statements closing old-style FOR
//!         loops are inserted by the [transformations](crate::lexing::transformations), and
//!         `EOS` markers by the [token stream](crate::lexing::stream). Both take their
//!         position from the token they follow and carry an empty value.

pub mod core;
pub mod formatting;

pub use self::core::{Statement, Token, TokenType, NON_DATA_TOKENS};
