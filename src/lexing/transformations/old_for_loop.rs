//! Old-style FOR loop terminator
//!
//! Old-style FOR loops mark each body row with a `\` cell and have no closing keyword: the
//! loop ends at the first row without the marker. Consumers expect every loop to be closed
//! by an `END` statement, so this transformation synthesizes one.
//!
//! For each statement the marker (its first data token, ignoring `IGNORE`) decides:
//! - `OLD_FOR_INDENT`: an old-style loop body row; the loop is open.
//! - `END` while a loop is open: the document closes the loop itself; nothing is added.
//! - anything else while a loop is open: an `END` statement is inserted before it.
//! - statements without a marker (blank or comment-only) are passed through.
//!
//! A loop still open at the end of the document gets its `END` after the last statement.
//!
//! The synthetic `END` token has an empty value and sits right after the last visible data
//! token of the statement before it, the same spot in both modes. Layout trailing that token
//! (comments, line ends, blank lines that joined the body row) is moved into its own
//! statement after the `END`, so positions stay monotonic.

use super::Transformation;
use crate::lexing::stream::ignored_types;
use crate::token::{Statement, Token, TokenType};
use tracing::debug;

pub struct OldForLoopTerminator;

impl OldForLoopTerminator {
    pub fn new() -> Self {
        Self
    }

    /// Close the loop after the last statement in `result`.
    fn close_loop(result: &mut Vec<Statement>) {
        let hidden = ignored_types(true);
        let split = result.last_mut().and_then(|previous| {
            let anchor = previous
                .tokens
                .iter()
                .rposition(|t| t.token_type.is_data() && !hidden.contains(&t.token_type))?;
            let last = &previous.tokens[anchor];
            let position = (last.lineno, last.end_columnno());
            Some((position, previous.tokens.split_off(anchor + 1)))
        });
        let ((lineno, columnno), trailing) = match split {
            Some(found) => found,
            None => {
                let position = result
                    .last()
                    .and_then(Statement::last)
                    .map(|t| (t.lineno, t.end_columnno()))
                    .unwrap_or((1, 0));
                (position, Vec::new())
            }
        };
        debug!(lineno, columnno, "synthesized END for old-style FOR loop");
        result.push(Statement::new(vec![Token::new(
            TokenType::End,
            "",
            lineno,
            columnno,
        )]));
        if !trailing.is_empty() {
            result.push(Statement::new(trailing));
        }
    }
}

impl Default for OldForLoopTerminator {
    fn default() -> Self {
        Self::new()
    }
}

impl Transformation for OldForLoopTerminator {
    fn name(&self) -> &str {
        "old_for_loop_terminator"
    }

    fn description(&self) -> &str {
        "Inserts an END statement after the body of every old-style FOR loop"
    }

    fn transform(&self, statements: Vec<Statement>) -> Vec<Statement> {
        let mut result = Vec::with_capacity(statements.len());
        let mut old_for = false;

        for statement in statements {
            let marker = statement.marker().map(|t| t.token_type);
            match marker {
                Some(TokenType::OldForIndent) => old_for = true,
                Some(TokenType::End) if old_for => old_for = false,
                Some(_) if old_for => {
                    Self::close_loop(&mut result);
                    old_for = false;
                }
                _ => {}
            }
            result.push(statement);
        }
        if old_for {
            Self::close_loop(&mut result);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::factories::mk_statement;

    fn row(lineno: usize, cells: &[(TokenType, &str)]) -> Statement {
        mk_statement(lineno, cells)
    }

    fn markers(statements: &[Statement]) -> Vec<Option<TokenType>> {
        statements
            .iter()
            .map(|s| s.marker().map(|t| t.token_type))
            .collect()
    }

    #[test]
    fn test_metadata() {
        let transformation = OldForLoopTerminator::new();
        assert_eq!(transformation.name(), "old_for_loop_terminator");
        assert!(!transformation.description().is_empty());
    }

    #[test]
    fn test_no_loop_is_unchanged() {
        let statements = vec![
            row(1, &[(TokenType::TestCaseName, "Test")]),
            row(2, &[(TokenType::Ignore, ""), (TokenType::Keyword, "Log")]),
        ];
        let result = OldForLoopTerminator::new().transform(statements.clone());
        assert_eq!(result, statements);
    }

    #[test]
    fn test_end_inserted_before_next_statement() {
        let statements = vec![
            row(1, &[(TokenType::For, ":FOR")]),
            row(2, &[(TokenType::Ignore, ""), (TokenType::OldForIndent, "\\")]),
            row(3, &[(TokenType::Ignore, ""), (TokenType::Keyword, "Log")]),
        ];
        let result = OldForLoopTerminator::new().transform(statements);
        assert_eq!(
            markers(&result),
            vec![
                Some(TokenType::For),
                Some(TokenType::OldForIndent),
                Some(TokenType::End),
                Some(TokenType::Keyword),
            ]
        );
        let end = &result[2].tokens[0];
        assert_eq!(end.value, "");
        assert_eq!((end.lineno, end.columnno), (2, 1));
    }

    #[test]
    fn test_end_appended_at_end_of_document() {
        let statements = vec![
            row(1, &[(TokenType::For, ":FOR")]),
            row(2, &[(TokenType::OldForIndent, "\\"), (TokenType::Keyword, "Log")]),
        ];
        let result = OldForLoopTerminator::new().transform(statements);
        assert_eq!(result.len(), 3);
        assert_eq!(result[2].len(), 1);
        assert_eq!(result[2].tokens[0].token_type, TokenType::End);
        assert_eq!(
            (result[2].tokens[0].lineno, result[2].tokens[0].columnno),
            (2, 4)
        );
    }

    #[test]
    fn test_explicit_end_is_not_duplicated() {
        let statements = vec![
            row(1, &[(TokenType::OldForIndent, "\\")]),
            row(2, &[(TokenType::Ignore, ""), (TokenType::End, "END")]),
            row(3, &[(TokenType::Keyword, "Log")]),
        ];
        let result = OldForLoopTerminator::new().transform(statements);
        let ends = result
            .iter()
            .filter(|s| s.marker().map(|t| t.token_type) == Some(TokenType::End))
            .count();
        assert_eq!(ends, 1);
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn test_statements_without_marker_keep_loop_open() {
        let statements = vec![
            row(1, &[(TokenType::OldForIndent, "\\")]),
            row(2, &[(TokenType::Comment, "# note")]),
            row(3, &[(TokenType::OldForIndent, "\\")]),
        ];
        let result = OldForLoopTerminator::new().transform(statements);
        assert_eq!(result.len(), 4);
        assert_eq!(result[3].tokens[0].token_type, TokenType::End);
    }

    #[test]
    fn test_two_loops_get_two_ends() {
        let statements = vec![
            row(1, &[(TokenType::OldForIndent, "\\")]),
            row(2, &[(TokenType::Keyword, "Log")]),
            row(3, &[(TokenType::OldForIndent, "\\")]),
        ];
        let result = OldForLoopTerminator::new().transform(statements);
        assert_eq!(
            markers(&result),
            vec![
                Some(TokenType::OldForIndent),
                Some(TokenType::End),
                Some(TokenType::Keyword),
                Some(TokenType::OldForIndent),
                Some(TokenType::End),
            ]
        );
    }

    #[test]
    fn test_trailing_layout_moves_after_end() {
        let mut body = row(
            2,
            &[
                (TokenType::OldForIndent, "\\"),
                (TokenType::Keyword, "Log"),
            ],
        );
        body.tokens.push(Token::new(TokenType::Eol, "\n", 2, 4));
        body.tokens.push(Token::new(TokenType::Eol, "\n", 3, 0));
        let statements = vec![body, row(4, &[(TokenType::Keyword, "Log")])];

        let result = OldForLoopTerminator::new().transform(statements);
        assert_eq!(result.len(), 4);
        assert_eq!(result[0].last().map(|t| t.value.as_str()), Some("Log"));
        let end = &result[1].tokens[0];
        assert_eq!(end.token_type, TokenType::End);
        assert_eq!((end.lineno, end.columnno), (2, 4));
        assert!(result[2].iter().all(|t| t.token_type == TokenType::Eol));
        assert_eq!(result[2].len(), 2);
        assert_eq!(markers(&result)[3], Some(TokenType::Keyword));
    }
}
