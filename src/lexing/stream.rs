//! Token stream
//!
//!     Flattens the normalized statements into one sequence of tokens. Tokens whose type is
//!     in the ignore set of the active mode are skipped, and an `EOS` token follows every
//!     statement that produced at least one token. `EOS` has an empty value and sits right
//!     after the last token emitted for the statement.
//!
//!     The stream is a plain [Iterator]: the next token is computed when it is asked for, so a
//!     consumer can stop early and nothing past that point is produced.

use crate::token::{Statement, Token, TokenType};
use std::collections::HashSet;

/// Lazy iterator over the tokens of a document.
#[derive(Debug)]
pub struct TokenStream {
    statements: std::vec::IntoIter<Statement>,
    current: std::vec::IntoIter<Token>,
    ignore: HashSet<TokenType>,
    /// End position of the last token yielded for the current statement
    last_end: Option<(usize, usize)>,
}

impl TokenStream {
    pub fn new(statements: Vec<Statement>, data_only: bool) -> Self {
        TokenStream {
            statements: statements.into_iter(),
            current: Vec::new().into_iter(),
            ignore: ignored_types(data_only).into_iter().collect(),
            last_end: None,
        }
    }

    /// A stream that yields nothing.
    pub fn empty() -> Self {
        Self::new(Vec::new(), false)
    }
}

/// Token types never surfaced in the given mode.
pub fn ignored_types(data_only: bool) -> Vec<TokenType> {
    if data_only {
        vec![
            TokenType::Ignore,
            TokenType::CommentsHeader,
            TokenType::Comment,
            TokenType::Error,
            TokenType::OldForIndent,
        ]
    } else {
        vec![TokenType::Ignore]
    }
}

impl Iterator for TokenStream {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        loop {
            if let Some(token) = self.current.next() {
                if self.ignore.contains(&token.token_type) {
                    continue;
                }
                self.last_end = Some((token.lineno, token.end_columnno()));
                return Some(token);
            }
            if let Some((lineno, columnno)) = self.last_end.take() {
                return Some(Token::eos(lineno, columnno));
            }
            self.current = self.statements.next()?.into_iter();
        }
    }
}
