//! Lexing pipeline
//!
//!     [RobotLexer] ties the stages together. Text is split into statements as soon as it is
//!     fed with [RobotLexer::input]; classification and transformations run when the tokens
//!     are requested, and the returned [TokenStream] produces tokens on demand.
//!
//!     Every lexer owns its statements and creates a fresh [Context] for its run, so separate
//!     lexers never share state.

use super::classification::lex_statement;
use super::context::Context;
use super::splitter::{line_count, split_from_line};
use super::stream::TokenStream;
use super::transformations::{default_transformations, Transformation};
use crate::config::LexerConfig;
use crate::token::Statement;
use tracing::debug;

pub struct RobotLexer {
    data_only: bool,
    statements: Vec<Statement>,
    /// Physical lines consumed by earlier `input` calls
    lines: usize,
    transformations: Vec<Box<dyn Transformation>>,
}

impl RobotLexer {
    pub fn new(data_only: bool) -> Self {
        RobotLexer {
            data_only,
            statements: Vec::new(),
            lines: 0,
            transformations: default_transformations(),
        }
    }

    pub fn from_config(config: &LexerConfig) -> Self {
        Self::new(config.data_only)
    }

    pub fn data_only(&self) -> bool {
        self.data_only
    }

    /// Split `content` and queue its statements.
    ///
    /// May be called more than once with consecutive chunks of whole lines; the chunks are
    /// lexed as one document and line numbers keep counting across them.
    pub fn input(&mut self, content: &str) {
        let statements = split_from_line(content, self.data_only, self.lines + 1);
        self.lines += line_count(content);
        debug!(statements = statements.len(), lines = self.lines, "queued input");
        self.statements.extend(statements);
    }

    /// Classify the queued statements and return the token stream.
    pub fn get_tokens(self) -> TokenStream {
        let RobotLexer {
            data_only,
            mut statements,
            transformations,
            ..
        } = self;

        let mut context = Context::new();
        for statement in statements.iter_mut() {
            // In data-only mode the splitter left nothing but data in the statement
            let mut data = if data_only {
                statement.all_mut()
            } else {
                statement.raw_data_mut()
            };
            context = lex_statement(context, &mut data);
        }
        debug!(
            statements = statements.len(),
            data_only, "classified statements"
        );

        for transformation in &transformations {
            let before = statements.len();
            statements = transformation.transform(statements);
            debug!(
                transformation = transformation.name(),
                inserted = statements.len().saturating_sub(before),
                "applied transformation"
            );
        }

        TokenStream::new(statements, data_only)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenType;

    #[test]
    fn test_input_can_be_called_repeatedly() {
        let mut lexer = RobotLexer::new(true);
        lexer.input("*** Test Cases ***\n");
        lexer.input("Example\n    Log    hi\n");
        let types: Vec<TokenType> = lexer.get_tokens().map(|t| t.token_type).collect();
        assert_eq!(
            types,
            vec![
                TokenType::TestCaseHeader,
                TokenType::Eos,
                TokenType::TestCaseName,
                TokenType::Eos,
                TokenType::Keyword,
                TokenType::Argument,
                TokenType::Eos,
            ]
        );
    }

    #[test]
    fn test_line_numbers_continue_across_inputs() {
        let mut lexer = RobotLexer::new(true);
        lexer.input("*** Test Cases ***\n");
        lexer.input("Example\n");
        let linenos: Vec<usize> = lexer.get_tokens().map(|t| t.lineno).collect();
        assert_eq!(linenos, vec![1, 1, 2, 2]);
    }

    #[test]
    fn test_no_input_yields_nothing() {
        assert_eq!(RobotLexer::new(false).get_tokens().count(), 0);
    }

    #[test]
    fn test_from_config() {
        let config = LexerConfig { data_only: true };
        assert!(RobotLexer::from_config(&config).data_only());
    }

    #[test]
    fn test_full_mode_classifies_only_data() {
        let mut lexer = RobotLexer::new(false);
        lexer.input("*** Test Cases ***\nExample\n    Log    hi    # note\n");
        let tokens: Vec<_> = lexer.get_tokens().collect();
        let comment = tokens
            .iter()
            .find(|t| t.value == "# note")
            .map(|t| t.token_type);
        assert_eq!(comment, Some(TokenType::Comment));
        assert!(tokens.iter().all(|t| t.token_type != TokenType::Data));
    }
}
