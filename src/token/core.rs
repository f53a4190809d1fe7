//! Token, token types and statements
//!
//!     A token is a typed piece of text with the position where it starts in the original
//!     document. Line numbers are 1-based, columns are 0-based and count characters, not
//!     bytes, so editor tooling can use them directly.
//!
//!     A statement is the ordered list of tokens of one logical line: the line itself, its
//!     continuation lines and any blank or comment-only lines that follow. Statements are
//!     never reordered; the lexer only changes token types in place and transformations only
//!     insert whole statements.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The type of a token.
///
/// The set is closed. Raw tokens coming out of the splitter are `Data` (content) or one of
/// the layout types; classification replaces `Data` with one of the semantic types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenType {
    // Section headers
    SettingHeader,
    VariableHeader,
    #[serde(rename = "TESTCASE_HEADER")]
    TestCaseHeader,
    KeywordHeader,
    CommentsHeader,

    // Names defining tests and keywords
    #[serde(rename = "TESTCASE_NAME")]
    TestCaseName,
    KeywordName,

    // Suite level settings
    Documentation,
    SuiteSetup,
    SuiteTeardown,
    Metadata,
    TestSetup,
    TestTeardown,
    TestTemplate,
    TestTimeout,
    ForceTags,
    DefaultTags,
    Library,
    Resource,
    Variables,

    // Test and keyword level settings
    Setup,
    Teardown,
    Template,
    Timeout,
    Tags,
    Arguments,
    Return,

    // Content
    Name,
    Variable,
    Argument,
    Assign,
    Keyword,
    WithName,
    For,
    ForSeparator,
    OldForIndent,
    End,

    // Layout
    Separator,
    Comment,
    Continuation,
    Eol,
    Eos,

    Error,
    /// Raw content cell that has not been classified yet
    Data,
    /// Structurally present but never surfaced to consumers
    Ignore,
}

/// Layout tokens. Everything else carries data.
pub const NON_DATA_TOKENS: [TokenType; 5] = [
    TokenType::Separator,
    TokenType::Comment,
    TokenType::Continuation,
    TokenType::Eol,
    TokenType::Eos,
];

impl TokenType {
    /// The canonical upper-case name, e.g. `TESTCASE_NAME`.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenType::SettingHeader => "SETTING_HEADER",
            TokenType::VariableHeader => "VARIABLE_HEADER",
            TokenType::TestCaseHeader => "TESTCASE_HEADER",
            TokenType::KeywordHeader => "KEYWORD_HEADER",
            TokenType::CommentsHeader => "COMMENTS_HEADER",
            TokenType::TestCaseName => "TESTCASE_NAME",
            TokenType::KeywordName => "KEYWORD_NAME",
            TokenType::Documentation => "DOCUMENTATION",
            TokenType::SuiteSetup => "SUITE_SETUP",
            TokenType::SuiteTeardown => "SUITE_TEARDOWN",
            TokenType::Metadata => "METADATA",
            TokenType::TestSetup => "TEST_SETUP",
            TokenType::TestTeardown => "TEST_TEARDOWN",
            TokenType::TestTemplate => "TEST_TEMPLATE",
            TokenType::TestTimeout => "TEST_TIMEOUT",
            TokenType::ForceTags => "FORCE_TAGS",
            TokenType::DefaultTags => "DEFAULT_TAGS",
            TokenType::Library => "LIBRARY",
            TokenType::Resource => "RESOURCE",
            TokenType::Variables => "VARIABLES",
            TokenType::Setup => "SETUP",
            TokenType::Teardown => "TEARDOWN",
            TokenType::Template => "TEMPLATE",
            TokenType::Timeout => "TIMEOUT",
            TokenType::Tags => "TAGS",
            TokenType::Arguments => "ARGUMENTS",
            TokenType::Return => "RETURN",
            TokenType::Name => "NAME",
            TokenType::Variable => "VARIABLE",
            TokenType::Argument => "ARGUMENT",
            TokenType::Assign => "ASSIGN",
            TokenType::Keyword => "KEYWORD",
            TokenType::WithName => "WITH_NAME",
            TokenType::For => "FOR",
            TokenType::ForSeparator => "FOR_SEPARATOR",
            TokenType::OldForIndent => "OLD_FOR_INDENT",
            TokenType::End => "END",
            TokenType::Separator => "SEPARATOR",
            TokenType::Comment => "COMMENT",
            TokenType::Continuation => "CONTINUATION",
            TokenType::Eol => "EOL",
            TokenType::Eos => "EOS",
            TokenType::Error => "ERROR",
            TokenType::Data => "DATA",
            TokenType::Ignore => "IGNORE",
        }
    }

    /// Layout and comment tokens are not data.
    pub fn is_data(&self) -> bool {
        !NON_DATA_TOKENS.contains(self)
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed piece of source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    #[serde(rename = "type")]
    pub token_type: TokenType,
    pub value: String,
    /// 1-based line of the first character of `value`
    pub lineno: usize,
    /// 0-based column, in characters, of the first character of `value`
    pub columnno: usize,
    /// Why the lexer could not classify this token. Only set on `ERROR` tokens.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Token {
    pub fn new(
        token_type: TokenType,
        value: impl Into<String>,
        lineno: usize,
        columnno: usize,
    ) -> Self {
        Token {
            token_type,
            value: value.into(),
            lineno,
            columnno,
            error: None,
        }
    }

    /// A synthetic end-of-statement marker.
    pub fn eos(lineno: usize, columnno: usize) -> Self {
        Token::new(TokenType::Eos, "", lineno, columnno)
    }

    /// Column right after the last character of the value.
    pub fn end_columnno(&self) -> usize {
        self.columnno + self.value.chars().count()
    }

    /// Turn this token into an `ERROR` token explaining what went wrong.
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.token_type = TokenType::Error;
        self.error = Some(message.into());
    }
}

/// One logical line of the document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statement {
    pub tokens: Vec<Token>,
}

impl Statement {
    pub fn new(tokens: Vec<Token>) -> Self {
        Statement { tokens }
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// The first token that carries data, skipping layout and ignored tokens.
    ///
    /// Transformations use it to decide what kind of statement this is.
    pub fn marker(&self) -> Option<&Token> {
        self.tokens
            .iter()
            .find(|t| t.token_type.is_data() && t.token_type != TokenType::Ignore)
    }

    /// Mutable references to the raw content cells still waiting for classification.
    pub fn raw_data_mut(&mut self) -> Vec<&mut Token> {
        self.tokens
            .iter_mut()
            .filter(|t| t.token_type == TokenType::Data)
            .collect()
    }

    /// Mutable references to every token, for statements that only contain data.
    pub fn all_mut(&mut self) -> Vec<&mut Token> {
        self.tokens.iter_mut().collect()
    }

    pub fn last(&self) -> Option<&Token> {
        self.tokens.last()
    }
}

impl IntoIterator for Statement {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_column_counts_characters() {
        let token = Token::new(TokenType::Argument, "äö${x}", 3, 4);
        assert_eq!(token.end_columnno(), 10);
    }

    #[test]
    fn test_set_error_keeps_value_and_position() {
        let mut token = Token::new(TokenType::Data, "!!!invalid!!!", 2, 4);
        token.set_error("Invalid keyword name '!!!invalid!!!'.");
        assert_eq!(token.token_type, TokenType::Error);
        assert_eq!(token.value, "!!!invalid!!!");
        assert_eq!((token.lineno, token.columnno), (2, 4));
        assert!(token.error.is_some());
    }

    #[test]
    fn test_marker_skips_layout_and_ignored_tokens() {
        let statement = Statement::new(vec![
            Token::new(TokenType::Separator, "    ", 1, 0),
            Token::new(TokenType::Ignore, "", 1, 0),
            Token::new(TokenType::Separator, "    ", 1, 0),
            Token::new(TokenType::OldForIndent, "\\", 1, 4),
            Token::new(TokenType::Keyword, "Log", 1, 9),
        ]);
        assert_eq!(
            statement.marker().map(|t| t.token_type),
            Some(TokenType::OldForIndent)
        );
    }

    #[test]
    fn test_marker_of_comment_only_statement() {
        let statement = Statement::new(vec![
            Token::new(TokenType::Comment, "# note", 1, 0),
            Token::new(TokenType::Eol, "\n", 1, 6),
        ]);
        assert!(statement.marker().is_none());
    }

    #[test]
    fn test_type_names_match_serialized_names() {
        for token_type in [
            TokenType::TestCaseHeader,
            TokenType::TestCaseName,
            TokenType::OldForIndent,
            TokenType::ForSeparator,
            TokenType::CommentsHeader,
            TokenType::Eos,
        ] {
            let json = serde_json::to_string(&token_type).unwrap();
            assert_eq!(json, format!("\"{}\"", token_type.as_str()));
        }
    }

    #[test]
    fn test_non_data_tokens() {
        assert!(!TokenType::Separator.is_data());
        assert!(!TokenType::Eos.is_data());
        assert!(TokenType::Keyword.is_data());
        assert!(TokenType::Ignore.is_data());
    }
}
