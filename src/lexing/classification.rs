//! Classification
//!
//!     Gives every data cell of a statement its semantic type. The same cell means different
//!     things in different places: `Log` is a keyword call inside a test, a setting error in
//!     the Settings section and a comment before the first header. The decision is an explicit
//!     dispatch over the [Section] of the current [Context].
//!
//!     The lexer only sees the data cells. Separators, line ends and comments were typed by
//!     the splitter and are never passed in.
//!
//! Recovery
//!
//!     Classification never fails. A cell that does not fit where it appears becomes an
//!     `ERROR` token carrying a message, cells that only make sense after it become
//!     `COMMENT`, and lexing continues with the next statement.
//!
//! Cross-statement state
//!
//!     Everything that outlives a statement lives in the [Context]: the open section, the
//!     settings already used, the current test or keyword, and an open FOR loop. It is passed
//!     in by value and the updated context is returned.

use super::context::{BodyKind, Context, ForLoop, Section};
use super::settings::{self, SettingKind, ValueLayout};
use crate::token::{Token, TokenType};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;
use tracing::trace;

static VARIABLE_DECLARATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[$@&]\{.+\}\s?=?$").expect("valid variable regex"));

static LOOP_VARIABLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\$\{.+\}$").expect("valid loop variable regex"));

/// A keyword name needs at least one letter or digit somewhere.
static KEYWORD_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\p{Alphabetic}\p{Nd}]").expect("valid keyword regex"));

/// Classify the data cells of one statement and return the context for the next one.
pub fn lex_statement(context: Context, data: &mut [&mut Token]) -> Context {
    let Some(first) = data.first() else {
        return context;
    };
    if first.value.starts_with('*') {
        return lex_header(context, data);
    }

    match context.section {
        section if section.is_commented() => {
            let rest = skip_indentation(data);
            mark(rest, TokenType::Comment);
            context
        }
        Section::Settings => lex_setting_row(context, skip_indentation(data)),
        Section::Variables => {
            lex_variable_row(skip_indentation(data));
            context
        }
        Section::TestCases => lex_body_statement(context, data, BodyKind::TestCase),
        _ => lex_body_statement(context, data, BodyKind::Keyword),
    }
}

fn lex_header(context: Context, data: &mut [&mut Token]) -> Context {
    let name = header_name(&data[0].value);
    match section_for_header(&name) {
        Some((section, token_type)) => {
            mark(data, token_type);
            trace!(?section, "entering section");
            context.enter_section(section)
        }
        None => {
            if let Some((header, rest)) = data.split_first_mut() {
                let message = format!("Unrecognized section header '{}'.", header.value);
                header.set_error(message);
                mark(rest, TokenType::Comment);
            }
            trace!(name = %name, "entering invalid section");
            context.enter_section(Section::Invalid)
        }
    }
}

/// `*** Test  Cases ***` -> `test cases`
fn header_name(value: &str) -> String {
    value
        .trim_matches('*')
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

fn section_for_header(name: &str) -> Option<(Section, TokenType)> {
    let found = match name {
        "setting" | "settings" => (Section::Settings, TokenType::SettingHeader),
        "variable" | "variables" => (Section::Variables, TokenType::VariableHeader),
        "test case" | "test cases" | "task" | "tasks" => {
            (Section::TestCases, TokenType::TestCaseHeader)
        }
        "keyword" | "keywords" | "user keyword" | "user keywords" => {
            (Section::Keywords, TokenType::KeywordHeader)
        }
        "comment" | "comments" => (Section::Comments, TokenType::CommentsHeader),
        _ => return None,
    };
    Some(found)
}

fn lex_setting_row(mut context: Context, row: &mut [&mut Token]) -> Context {
    let Some(first) = row.first() else {
        return context;
    };
    match settings::suite_setting(&first.value) {
        Some(kind) => {
            let accepted = lex_setting(kind, &mut context.settings, row);
            if accepted && kind == SettingKind::TestTemplate {
                context.template = row
                    .get(1)
                    .is_some_and(|t| settings::is_active_template(&t.value));
            }
        }
        None => error_row(row, |name| format!("Non-existing setting '{name}'.")),
    }
    context
}

/// Type a setting and its values. Returns false when the setting was rejected.
fn lex_setting(
    kind: SettingKind,
    seen: &mut BTreeSet<SettingKind>,
    row: &mut [&mut Token],
) -> bool {
    let Some((setting, values)) = row.split_first_mut() else {
        return false;
    };
    let error = if !kind.is_repeatable() && !seen.insert(kind) {
        Some(format!(
            "Setting '{}' is allowed only once. Only the first value is used.",
            kind.name()
        ))
    } else if kind.is_single_value() && values.len() > 1 {
        Some(format!(
            "Setting '{}' accepts only one value, got {}.",
            kind.name(),
            values.len()
        ))
    } else {
        None
    };
    if let Some(message) = error {
        setting.set_error(message);
        mark(values, TokenType::Comment);
        return false;
    }

    setting.token_type = kind.token_type();
    match kind.layout() {
        ValueLayout::Arguments => mark(values, TokenType::Argument),
        ValueLayout::Name => mark(values, TokenType::Name),
        ValueLayout::NameAndArguments => lex_name_and_arguments(values),
        ValueLayout::Import => lex_import(values),
    }
    true
}

fn lex_name_and_arguments(values: &mut [&mut Token]) {
    if let Some((name, arguments)) = values.split_first_mut() {
        name.token_type = TokenType::Name;
        mark(arguments, TokenType::Argument);
    }
}

/// `Library  Name  arg  WITH NAME  Alias`
fn lex_import(values: &mut [&mut Token]) {
    lex_name_and_arguments(values);
    let count = values.len();
    if count >= 3 && values[count - 2].value == "WITH NAME" {
        values[count - 2].token_type = TokenType::WithName;
        values[count - 1].token_type = TokenType::Name;
    }
}

fn lex_variable_row(row: &mut [&mut Token]) {
    let Some((variable, values)) = row.split_first_mut() else {
        return;
    };
    if VARIABLE_DECLARATION.is_match(&variable.value) {
        variable.token_type = TokenType::Variable;
        mark(values, TokenType::Argument);
    } else {
        let message = format!("Invalid variable name '{}'.", variable.value);
        variable.set_error(message);
        mark(values, TokenType::Comment);
    }
}

/// A statement in the Test Cases or Keywords section.
///
/// A non-indented first cell names a new test or keyword; everything else is a body row.
fn lex_body_statement(context: Context, data: &mut [&mut Token], kind: BodyKind) -> Context {
    let Some((first, rest)) = data.split_first_mut() else {
        return context;
    };

    if !first.value.is_empty() {
        first.token_type = match kind {
            BodyKind::TestCase => TokenType::TestCaseName,
            BodyKind::Keyword => TokenType::KeywordName,
        };
        if context.for_loop.is_some() {
            trace!("FOR loop closed by new body");
        }
        return lex_body_row(context.start_body(kind), rest);
    }

    first.token_type = TokenType::Ignore;
    let row = skip_indentation(rest);
    if row.is_empty() {
        return context;
    }
    if context.body.is_none() {
        let message = match kind {
            BodyKind::TestCase => "Statement outside of a test case.",
            BodyKind::Keyword => "Statement outside of a keyword.",
        };
        error_row(row, |_| message.to_string());
        return context;
    }
    lex_body_row(context, row)
}

fn lex_body_row(mut context: Context, row: &mut [&mut Token]) -> Context {
    let Some(first) = row.first() else {
        return context;
    };

    if let Some(for_loop) = context.for_loop {
        if first.value == "\\" {
            let Some((indent, rest)) = row.split_first_mut() else {
                return context;
            };
            indent.token_type = TokenType::OldForIndent;
            if for_loop != ForLoop::OldStyle {
                trace!("FOR loop uses old-style body");
                context.for_loop = Some(ForLoop::OldStyle);
            }
            return lex_row_content(context, skip_indentation(rest));
        }
        if first.value == "END" {
            lex_end(row);
            trace!(?for_loop, "FOR loop closed by END");
            context.for_loop = None;
            return context;
        }
        if for_loop == ForLoop::OldStyle {
            trace!("old-style FOR loop closed");
            context.for_loop = None;
        }
    }
    lex_row_content(context, row)
}

/// A body row once loop bookkeeping is done.
fn lex_row_content(mut context: Context, row: &mut [&mut Token]) -> Context {
    let Some(first) = row.first() else {
        return context;
    };

    if is_setting_cell(&first.value) {
        return lex_body_setting(context, row);
    }
    if is_for_header(&first.value) {
        lex_for_header(row);
        trace!("FOR loop opened");
        context.for_loop = Some(ForLoop::Modern);
        return context;
    }
    if first.value == "END" {
        error_row(row, |_| "END is not allowed in this context.".to_string());
        return context;
    }
    lex_keyword_call(context.in_template(), row);
    context
}

fn lex_end(row: &mut [&mut Token]) {
    if let Some((end, extra)) = row.split_first_mut() {
        end.token_type = TokenType::End;
        for token in extra.iter_mut() {
            let message = format!("END does not accept arguments, got '{}'.", token.value);
            token.set_error(message);
        }
    }
}

fn is_setting_cell(value: &str) -> bool {
    value.len() >= 2 && value.starts_with('[') && value.ends_with(']')
}

fn lex_body_setting(mut context: Context, row: &mut [&mut Token]) -> Context {
    let Some(body) = context.body.as_mut() else {
        return context;
    };
    let value = &row[0].value;
    let name = &value[1..value.len() - 1];

    match settings::body_setting(name, body.kind) {
        Some(kind) => {
            let accepted = lex_setting(kind, &mut body.settings, row);
            if accepted && kind == SettingKind::Template {
                body.template = row
                    .get(1)
                    .is_some_and(|t| settings::is_active_template(&t.value));
            }
        }
        None => error_row(row, |name| format!("Non-existing setting '{name}'.")),
    }
    context
}

/// `FOR`, or the old `:FOR` / `: FOR` spelling.
fn is_for_header(value: &str) -> bool {
    if value == "FOR" {
        return true;
    }
    value.starts_with(':')
        && value
            .chars()
            .filter(|c| *c != ':' && !c.is_whitespace())
            .collect::<String>()
            .to_uppercase()
            == "FOR"
}

fn is_for_separator(value: &str) -> bool {
    let normalized: String = value
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase();
    matches!(
        normalized.as_str(),
        "IN" | "INRANGE" | "INENUMERATE" | "INZIP"
    )
}

/// `FOR  ${i}  IN RANGE  10`
fn lex_for_header(row: &mut [&mut Token]) {
    let Some((header, rest)) = row.split_first_mut() else {
        return;
    };
    let separator = rest.iter().position(|t| is_for_separator(&t.value));
    let split = separator.unwrap_or(rest.len());
    let (variables, tail) = rest.split_at_mut(split);

    header.token_type = TokenType::For;
    if separator.is_none() {
        header.set_error("FOR loop has no 'IN' or other valid separator.");
    }
    for variable in variables.iter_mut() {
        if LOOP_VARIABLE.is_match(&variable.value) {
            variable.token_type = TokenType::Variable;
        } else {
            let message = format!("Invalid FOR loop variable '{}'.", variable.value);
            variable.set_error(message);
        }
    }
    if let Some((separator, values)) = tail.split_first_mut() {
        separator.token_type = TokenType::ForSeparator;
        mark(values, TokenType::Argument);
    }
}

/// `${result} =  Keyword  arg`
fn lex_keyword_call(template: bool, row: &mut [&mut Token]) {
    if template {
        mark(row, TokenType::Argument);
        return;
    }
    let assigns = row
        .iter()
        .take_while(|t| VARIABLE_DECLARATION.is_match(&t.value))
        .count();
    let (assign, rest) = row.split_at_mut(assigns);
    mark(assign, TokenType::Assign);

    if let Some((keyword, arguments)) = rest.split_first_mut() {
        if KEYWORD_NAME.is_match(&keyword.value) {
            keyword.token_type = TokenType::Keyword;
        } else {
            let message = format!("Invalid keyword name '{}'.", keyword.value);
            keyword.set_error(message);
        }
        mark(arguments, TokenType::Argument);
    }
}

/// First cell `ERROR`, the rest `COMMENT`.
fn error_row(row: &mut [&mut Token], message: impl FnOnce(&str) -> String) {
    if let Some((first, rest)) = row.split_first_mut() {
        let message = message(&first.value);
        first.set_error(message);
        mark(rest, TokenType::Comment);
    }
}

/// Marks leading empty cells `IGNORE` and returns the cells after them.
fn skip_indentation<'a, 'b>(data: &'a mut [&'b mut Token]) -> &'a mut [&'b mut Token] {
    let count = data.iter().take_while(|t| t.value.is_empty()).count();
    let (indentation, rest) = data.split_at_mut(count);
    mark(indentation, TokenType::Ignore);
    rest
}

fn mark(tokens: &mut [&mut Token], token_type: TokenType) {
    for token in tokens.iter_mut() {
        token.token_type = token_type;
    }
}
