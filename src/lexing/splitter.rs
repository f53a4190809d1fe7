//! Splitter
//!
//!     Converts document text into an ordered list of statements. A statement is started by a
//!     line that has data; continuation lines (first data cell `...`), comment-only lines and
//!     blank lines are appended to the statement before them. This keeps every token of the
//!     document, in source order, inside exactly one statement.
//!
//!     Per line the splitter:
//!         1. scans the line into data and separator cells (see
//!            [base_tokenization](super::base_tokenization)),
//!         2. adds an `EOL` token holding the trailing whitespace and the line terminator,
//!         3. marks comments (`#` and everything after it) and the continuation marker,
//!         4. drops empty cells that carry no meaning (trailing ones, and indentation in
//!            front of a continuation marker).
//!
//!     In data-only mode separators, line ends, comments and continuation markers are dropped
//!     right away, since nothing downstream needs them.
//!
//!     Malformed input never fails: a continuation marker with nothing before it just starts
//!     the first statement, and a statement still open at the end of the text is closed there.

use super::base_tokenization::split_line;
use crate::token::{Statement, Token, TokenType};
use tracing::debug;

/// Split `content` into statements.
pub fn split(content: &str, data_only: bool) -> Vec<Statement> {
    split_from_line(content, data_only, 1)
}

/// Split `content` whose first line is line `first_lineno` of the document.
pub fn split_from_line(content: &str, data_only: bool, first_lineno: usize) -> Vec<Statement> {
    let mut statements = Vec::new();
    let mut current: Vec<Token> = Vec::new();

    for (index, line) in physical_lines(content).into_iter().enumerate() {
        let tokens = tokenize_line(line, first_lineno + index, !data_only);
        let (tokens, starts_new) = cleanup_tokens(tokens, data_only);
        if starts_new {
            if !current.is_empty() {
                statements.push(Statement::new(std::mem::take(&mut current)));
            }
            current = tokens;
        } else {
            current.extend(tokens);
        }
    }
    if !current.is_empty() {
        statements.push(Statement::new(current));
    }

    debug!(
        statements = statements.len(),
        data_only, "split document into statements"
    );
    statements
}

/// Number of physical lines in `content`.
pub fn line_count(content: &str) -> usize {
    physical_lines(content).len()
}

/// Physical lines including their terminators (`\n`, `\r\n` or `\r`).
fn physical_lines(content: &str) -> Vec<&str> {
    let bytes = content.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&content[start..=i]);
                start = i + 1;
            }
            b'\r' => {
                let end = if bytes.get(i + 1) == Some(&b'\n') {
                    i + 2
                } else {
                    i + 1
                };
                lines.push(&content[start..end]);
                start = end;
                i = end;
                continue;
            }
            _ => {}
        }
        i += 1;
    }
    if start < content.len() {
        lines.push(&content[start..]);
    }
    lines
}

/// Raw tokens of one physical line.
fn tokenize_line(line: &str, lineno: usize, include_separators: bool) -> Vec<Token> {
    let content = line.trim_end();
    let mut tokens = Vec::new();
    let mut offset = 0;

    for (value, is_data) in split_line(content) {
        if is_data {
            tokens.push(Token::new(TokenType::Data, value, lineno, offset));
        } else if include_separators {
            tokens.push(Token::new(TokenType::Separator, value, lineno, offset));
        }
        offset += value.chars().count();
    }
    if include_separators {
        let trailing = &line[content.len()..];
        tokens.push(Token::new(TokenType::Eol, trailing, lineno, offset));
    }
    tokens
}

/// Returns the cleaned tokens and whether the line starts a new statement.
fn cleanup_tokens(mut tokens: Vec<Token>, data_only: bool) -> (Vec<Token>, bool) {
    let (has_data, continues) = handle_comments_and_continuation(&mut tokens);
    remove_trailing_empty(&mut tokens);
    if continues {
        remove_leading_empty(&mut tokens);
        if !has_data {
            ensure_data_after_continuation(&mut tokens);
        }
    }
    if data_only {
        tokens.retain(|t| t.token_type == TokenType::Data);
    }
    (tokens, has_data && !continues)
}

/// Marks comments and the continuation marker. Returns `(has_data, continues)`.
fn handle_comments_and_continuation(tokens: &mut [Token]) -> (bool, bool) {
    let mut has_data = false;
    let mut commented = false;
    let mut continues = false;

    for token in tokens
        .iter_mut()
        .filter(|t| t.token_type == TokenType::Data)
    {
        // The first cell may keep a single leading space; others were consumed as separators
        let value = token.value.trim_start();
        let is_empty = value.is_empty();
        let is_comment = value.starts_with('#');
        let is_marker = value == "...";

        if commented {
            token.token_type = TokenType::Comment;
        } else if !is_empty {
            if is_comment {
                token.token_type = TokenType::Comment;
                commented = true;
            } else if !has_data {
                if is_marker && !continues {
                    token.token_type = TokenType::Continuation;
                    continues = true;
                } else {
                    has_data = true;
                }
            }
        }
    }
    (has_data, continues)
}

fn remove_trailing_empty(tokens: &mut Vec<Token>) {
    let mut index = tokens.len();
    while index > 0 {
        index -= 1;
        let token = &tokens[index];
        if token.value.is_empty() && token.token_type != TokenType::Eol {
            tokens.remove(index);
        } else if token.token_type == TokenType::Data {
            break;
        }
    }
}

fn remove_leading_empty(tokens: &mut Vec<Token>) {
    let mut index = 0;
    while index < tokens.len() {
        let token = &tokens[index];
        if token.value.is_empty() {
            tokens.remove(index);
        } else if matches!(
            token.token_type,
            TokenType::Data | TokenType::Continuation
        ) {
            break;
        } else {
            index += 1;
        }
    }
}

/// A continuation line without data still contributes one (empty) cell.
fn ensure_data_after_continuation(tokens: &mut Vec<Token>) {
    if tokens.iter().any(|t| t.token_type == TokenType::Data) {
        return;
    }
    if let Some(index) = tokens
        .iter()
        .position(|t| t.token_type == TokenType::Continuation)
    {
        let marker = &tokens[index];
        let cell = Token::new(
            TokenType::Data,
            "",
            marker.lineno,
            marker.end_columnno(),
        );
        tokens.insert(index + 1, cell);
    }
}
