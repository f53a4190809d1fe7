//! Testing utilities
//!
//! Factories for building tokens and statements by hand, and small helpers for asserting on
//! token streams. Used by unit tests next to the code and by the integration tests.

use crate::token::{Token, TokenType};

// Public submodule path: crate::testing::factories
pub mod factories {
    use crate::token::{Statement, Token, TokenType};

    pub fn mk_token(token_type: TokenType, value: &str, lineno: usize, columnno: usize) -> Token {
        Token::new(token_type, value, lineno, columnno)
    }

    /// Raw `DATA` cells on line 1, placed next to each other.
    pub fn mk_data_cells(values: &[&str]) -> Vec<Token> {
        mk_statement(
            1,
            &values
                .iter()
                .map(|v| (TokenType::Data, *v))
                .collect::<Vec<_>>(),
        )
        .tokens
    }

    /// A statement on one line. Columns are assigned as if the values were written with no
    /// separator between them.
    pub fn mk_statement(lineno: usize, cells: &[(TokenType, &str)]) -> Statement {
        let mut columnno = 0;
        let tokens = cells
            .iter()
            .map(|(token_type, value)| {
                let token = Token::new(*token_type, *value, lineno, columnno);
                columnno = token.end_columnno();
                token
            })
            .collect();
        Statement::new(tokens)
    }

    pub fn types_and_values(tokens: &[Token]) -> Vec<(TokenType, &str)> {
        tokens
            .iter()
            .map(|t| (t.token_type, t.value.as_str()))
            .collect()
    }
}

/// The types of a token sequence, in order.
pub fn token_types<'a, I>(tokens: I) -> Vec<TokenType>
where
    I: IntoIterator<Item = &'a Token>,
{
    tokens.into_iter().map(|t| t.token_type).collect()
}

/// Splits a stream at its `EOS` markers, dropping the markers.
pub fn statements_of(tokens: &[Token]) -> Vec<Vec<Token>> {
    tokens
        .split(|t| t.token_type == TokenType::Eos)
        .filter(|group| !group.is_empty())
        .map(<[Token]>::to_vec)
        .collect()
}

/// Whether line numbers never decrease and columns never decrease within a line.
pub fn positions_are_monotonic(tokens: &[Token]) -> bool {
    tokens.windows(2).all(|pair| {
        let (a, b) = (&pair[0], &pair[1]);
        a.lineno < b.lineno || (a.lineno == b.lineno && a.columnno <= b.columnno)
    })
}
