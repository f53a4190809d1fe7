//! Property-based tests for the lexer
//!
//! Documents are generated from a vocabulary of cells that covers headers, settings, loops,
//! continuation markers and comments, joined with the separators the splitter understands.
//! Arbitrary text is also thrown at the lexer to make sure it never panics.

use proptest::prelude::*;
use rflex::lexing::stream::ignored_types;
use rflex::testing::{positions_are_monotonic, statements_of};
use rflex::token::formatting::detokenize;
use rflex::{tokenize, Token, TokenType};

fn cell() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "*** Settings ***",
        "*** Variables ***",
        "*** Test Cases ***",
        "*** Keywords ***",
        "*** Comments ***",
        "*** Bogus ***",
        "Example",
        "Log",
        "Library",
        "Test Template",
        "${i}",
        "${x} =",
        "@{items}",
        ":FOR",
        "FOR",
        "IN RANGE",
        "IN",
        "\\",
        "END",
        "...",
        "# comment",
        "[Tags]",
        "[Template]",
        "NONE",
        "!!!",
        "",
    ])
}

fn separator() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["    ", "  ", "\t", "  \t "])
}

fn line() -> impl Strategy<Value = String> {
    (
        prop::bool::ANY,
        prop::collection::vec((cell(), separator()), 0..5),
        prop::sample::select(vec!["", " ", "  "]),
    )
        .prop_map(|(indented, cells, trailing)| {
            let mut line = String::new();
            if indented {
                line.push_str("    ");
            }
            let values: Vec<String> = cells
                .iter()
                .enumerate()
                .map(|(i, (cell, sep))| {
                    if i == 0 {
                        cell.to_string()
                    } else {
                        format!("{sep}{cell}")
                    }
                })
                .collect();
            line.push_str(&values.concat());
            line.push_str(trailing);
            line
        })
}

fn document() -> impl Strategy<Value = String> {
    (
        prop::collection::vec(line(), 0..20),
        prop::sample::select(vec!["\n", "\r\n"]),
        prop::bool::ANY,
    )
        .prop_map(|(lines, newline, final_newline)| {
            let mut content = lines.join(newline);
            if final_newline && !content.is_empty() {
                content.push_str(newline);
            }
            content
        })
}

fn comparable_statements(tokens: &[Token]) -> usize {
    let ignored = ignored_types(true);
    statements_of(tokens)
        .iter()
        .filter(|group| {
            group
                .iter()
                .any(|t| t.token_type.is_data() && !ignored.contains(&t.token_type))
        })
        .count()
}

proptest! {
    #[test]
    fn full_mode_reproduces_source(content in document()) {
        let tokens: Vec<Token> = tokenize(&content, false).collect();
        prop_assert_eq!(detokenize(&tokens), content);
    }

    #[test]
    fn positions_never_go_backwards(content in document(), data_only in prop::bool::ANY) {
        let tokens: Vec<Token> = tokenize(&content, data_only).collect();
        prop_assert!(positions_are_monotonic(&tokens));
    }

    #[test]
    fn modes_agree_on_statement_boundaries(content in document()) {
        let full: Vec<Token> = tokenize(&content, false).collect();
        let data_only: Vec<Token> = tokenize(&content, true).collect();
        let eos = data_only.iter().filter(|t| t.token_type == TokenType::Eos).count();
        prop_assert_eq!(eos, comparable_statements(&full));
    }

    #[test]
    fn every_statement_ends_with_eos(content in document(), data_only in prop::bool::ANY) {
        let tokens: Vec<Token> = tokenize(&content, data_only).collect();
        if let Some(last) = tokens.last() {
            prop_assert_eq!(last.token_type, TokenType::Eos);
        }
        prop_assert!(tokens.iter().all(|t| t.token_type != TokenType::Data));
        prop_assert!(tokens.iter().all(|t| t.token_type != TokenType::Ignore));
    }

    #[test]
    fn old_style_loops_are_closed_once(content in document()) {
        let tokens: Vec<Token> = tokenize(&content, false).collect();
        let mut open = false;
        for group in statements_of(&tokens) {
            let marker = group
                .iter()
                .find(|t| t.token_type.is_data())
                .map(|t| t.token_type);
            match marker {
                Some(TokenType::OldForIndent) => open = true,
                Some(TokenType::End) => open = false,
                Some(_) => {
                    prop_assert!(!open, "statement after old-style loop body without END");
                }
                None => {}
            }
        }
        prop_assert!(!open, "old-style loop left open at end of document");
    }

    #[test]
    fn arbitrary_text_never_panics(content in "\\PC*", data_only in prop::bool::ANY) {
        let tokens: Vec<Token> = tokenize(&content, data_only).collect();
        if !data_only {
            prop_assert_eq!(detokenize(&tokens), content);
        }
    }
}
