//! Base tokenization of a single physical line
//!
//! This module provides the raw scan of one line into cells. It is the entry point where
//! source text becomes pieces; everything after it operates on tokens.
//!
//! Two formats are supported:
//!
//! - Space separated: two or more whitespace characters, or a single tab, separate cells.
//!   A single space is part of the cell. The scan is done with the logos [Piece] lexer.
//! - Pipe separated: a line starting with `|` followed by whitespace (or nothing) uses
//!   ` | ` as the separator.
//!
//! Both splits alternate data and separator pieces and always start with data. A line that
//! starts with a separator therefore yields an empty first cell, which is how indentation is
//! represented downstream.

use logos::Logos;
use once_cell::sync::Lazy;
use regex::Regex;

/// Pieces of a space separated line.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Piece {
    // Two or more whitespace characters, or one tab
    #[regex(r"\s\s+|\t", priority = 3)]
    Separator,

    #[regex(r"[^\s]+")]
    Word,

    // A single whitespace inside a cell
    #[regex(r"\s", priority = 1)]
    Space,
}

static PIPE_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:\A|\s+)\|(?:\s+|\z)").expect("valid pipe separator regex"));

/// One scanned piece of a line: its text and whether it is data.
pub type Cell<'a> = (&'a str, bool);

/// Whether a line uses the pipe separated format.
pub fn is_pipe_line(line: &str) -> bool {
    let mut chars = line.chars();
    chars.next() == Some('|') && chars.next().map_or(true, char::is_whitespace)
}

/// Split a line without its trailing whitespace into alternating data and separator cells.
///
/// Concatenating the returned values yields the input.
pub fn split_line(line: &str) -> Vec<Cell<'_>> {
    if is_pipe_line(line) {
        split_from_pipes(line)
    } else {
        split_from_spaces(line)
    }
}

/// Space separated format, scanned with logos.
pub fn split_from_spaces(line: &str) -> Vec<Cell<'_>> {
    let mut cells = Vec::new();
    let mut lexer = Piece::lexer(line);
    let mut data_start = 0;

    while let Some(result) = lexer.next() {
        // Word and Space cover every character, errors are kept as data
        if let Ok(Piece::Separator) = result {
            let span = lexer.span();
            cells.push((&line[data_start..span.start], true));
            cells.push((&line[span.clone()], false));
            data_start = span.end;
        }
    }
    cells.push((&line[data_start..], true));
    cells
}

/// Pipe separated format.
pub fn split_from_pipes(line: &str) -> Vec<Cell<'_>> {
    let mut cells = Vec::new();
    let Some(first) = PIPE_SEPARATOR.find(line) else {
        cells.push((line, true));
        return cells;
    };
    cells.push((&line[..first.end()], false));

    let mut rest = &line[first.end()..];
    while let Some(separator) = PIPE_SEPARATOR.find(rest) {
        cells.push((&rest[..separator.start()], true));
        cells.push((separator.as_str(), false));
        rest = &rest[separator.end()..];
    }
    cells.push((rest, true));
    cells
}
