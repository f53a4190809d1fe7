//! Lexing context
//!
//!     The structural state carried from one statement to the next: which section is open,
//!     which settings were already used, whether we are inside a test or keyword, and whether
//!     a FOR loop is open.
//!
//!     The context is a plain value. [lex_statement](super::classification::lex_statement)
//!     takes it by value and returns the next one, so a tokenization run owns its state and
//!     two runs can never interfere.

use super::settings::SettingKind;
use std::collections::BTreeSet;

/// The section a statement belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    /// Content before the first section header
    #[default]
    Implicit,
    Settings,
    Variables,
    TestCases,
    Keywords,
    Comments,
    /// After an unrecognized section header
    Invalid,
}

impl Section {
    /// Sections whose statements are only comments.
    pub fn is_commented(&self) -> bool {
        matches!(self, Section::Implicit | Section::Comments | Section::Invalid)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    TestCase,
    Keyword,
}

/// The test or keyword whose rows are being lexed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Body {
    pub kind: BodyKind,
    pub settings: BTreeSet<SettingKind>,
    /// Keyword calls are template data: every cell is an argument
    pub template: bool,
}

impl Body {
    pub fn new(kind: BodyKind, template: bool) -> Self {
        Body {
            kind,
            settings: BTreeSet::new(),
            template,
        }
    }
}

/// An open FOR loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForLoop {
    /// Closed by an explicit `END`
    Modern,
    /// Body rows start with `\`, closed by the first row without it
    OldStyle,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Context {
    pub section: Section,
    /// Suite level settings already used
    pub settings: BTreeSet<SettingKind>,
    /// Set by a `Test Template` setting
    pub template: bool,
    pub body: Option<Body>,
    pub for_loop: Option<ForLoop>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch to another section, leaving any body or loop behind.
    pub fn enter_section(self, section: Section) -> Self {
        Context {
            section,
            body: None,
            for_loop: None,
            ..self
        }
    }

    /// Start a new test or keyword.
    pub fn start_body(self, kind: BodyKind) -> Self {
        let template = kind == BodyKind::TestCase && self.template;
        Context {
            body: Some(Body::new(kind, template)),
            for_loop: None,
            ..self
        }
    }

    pub fn in_template(&self) -> bool {
        self.body.as_ref().is_some_and(|b| b.template)
    }
}
