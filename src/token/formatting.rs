//! Token formatting
//!
//! This module provides the textual renderings of tokens used by the CLI and by tests:
//!
//! - `Display` writes the bare value, so printing every token of a full-mode stream with no
//!   separator reproduces the source text (see [detokenize]).
//! - [Token::to_repr] writes type, value and position on one line, which is what the
//!   data-only listing prints.

use super::core::{Token, TokenType};
use std::fmt;

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl Token {
    /// `Token(KEYWORD, "Log", 3, 4)`
    pub fn to_repr(&self) -> String {
        format!(
            "Token({}, {:?}, {}, {})",
            self.token_type, self.value, self.lineno, self.columnno
        )
    }
}

/// Convert a token stream back to source text.
///
/// Only a full-mode stream keeps separators and line ends; for those the result is the
/// original document. Synthetic tokens have empty values and add nothing.
pub fn detokenize<'a, I>(tokens: I) -> String
where
    I: IntoIterator<Item = &'a Token>,
{
    tokens.into_iter().map(|t| t.value.as_str()).collect()
}

/// One `TYPE value` line per token, `EOS` rendered as a bare marker.
///
/// Handy for eyeballing a stream in tests and debug logs.
pub fn render_types<'a, I>(tokens: I) -> String
where
    I: IntoIterator<Item = &'a Token>,
{
    tokens
        .into_iter()
        .map(|t| match t.token_type {
            TokenType::Eos => "EOS".to_string(),
            _ => format!("{} {}", t.token_type, t.value),
        })
        .collect::<Vec<_>>()
        .join("\n")
}
