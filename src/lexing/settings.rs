//! Settings
//!
//!     Tables of the settings accepted in the Settings section and inside tests and keywords
//!     (`[Tags]`, `[Setup]`, ...), and how the values following a setting are typed.
//!
//!     Names are matched case and space insensitively, and a trailing `:` is allowed, so
//!     `Suite Setup`, `suitesetup` and `SUITE SETUP:` are the same setting.

use super::context::BodyKind;
use crate::token::TokenType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SettingKind {
    Documentation,
    Metadata,
    SuiteSetup,
    SuiteTeardown,
    TestSetup,
    TestTeardown,
    TestTemplate,
    TestTimeout,
    ForceTags,
    DefaultTags,
    Library,
    Resource,
    Variables,
    Tags,
    Setup,
    Teardown,
    Template,
    Timeout,
    Arguments,
    Return,
}

/// How the cells after the setting name are typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueLayout {
    /// `ARGUMENT` for every value
    Arguments,
    /// `NAME` followed by `ARGUMENT`s
    NameAndArguments,
    /// `NAME` for every value
    Name,
    /// Library import: `NAME`, `ARGUMENT`s and an optional `WITH NAME` alias
    Import,
}

impl SettingKind {
    /// The canonical name used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            SettingKind::Documentation => "Documentation",
            SettingKind::Metadata => "Metadata",
            SettingKind::SuiteSetup => "Suite Setup",
            SettingKind::SuiteTeardown => "Suite Teardown",
            SettingKind::TestSetup => "Test Setup",
            SettingKind::TestTeardown => "Test Teardown",
            SettingKind::TestTemplate => "Test Template",
            SettingKind::TestTimeout => "Test Timeout",
            SettingKind::ForceTags => "Force Tags",
            SettingKind::DefaultTags => "Default Tags",
            SettingKind::Library => "Library",
            SettingKind::Resource => "Resource",
            SettingKind::Variables => "Variables",
            SettingKind::Tags => "Tags",
            SettingKind::Setup => "Setup",
            SettingKind::Teardown => "Teardown",
            SettingKind::Template => "Template",
            SettingKind::Timeout => "Timeout",
            SettingKind::Arguments => "Arguments",
            SettingKind::Return => "Return",
        }
    }

    pub fn token_type(&self) -> TokenType {
        match self {
            SettingKind::Documentation => TokenType::Documentation,
            SettingKind::Metadata => TokenType::Metadata,
            SettingKind::SuiteSetup => TokenType::SuiteSetup,
            SettingKind::SuiteTeardown => TokenType::SuiteTeardown,
            SettingKind::TestSetup => TokenType::TestSetup,
            SettingKind::TestTeardown => TokenType::TestTeardown,
            SettingKind::TestTemplate => TokenType::TestTemplate,
            SettingKind::TestTimeout => TokenType::TestTimeout,
            SettingKind::ForceTags => TokenType::ForceTags,
            SettingKind::DefaultTags => TokenType::DefaultTags,
            SettingKind::Library => TokenType::Library,
            SettingKind::Resource => TokenType::Resource,
            SettingKind::Variables => TokenType::Variables,
            SettingKind::Tags => TokenType::Tags,
            SettingKind::Setup => TokenType::Setup,
            SettingKind::Teardown => TokenType::Teardown,
            SettingKind::Template => TokenType::Template,
            SettingKind::Timeout => TokenType::Timeout,
            SettingKind::Arguments => TokenType::Arguments,
            SettingKind::Return => TokenType::Return,
        }
    }

    pub fn layout(&self) -> ValueLayout {
        match self {
            SettingKind::Metadata
            | SettingKind::SuiteSetup
            | SettingKind::SuiteTeardown
            | SettingKind::TestSetup
            | SettingKind::TestTeardown
            | SettingKind::Variables
            | SettingKind::Setup
            | SettingKind::Teardown => ValueLayout::NameAndArguments,
            SettingKind::TestTemplate | SettingKind::Template | SettingKind::Resource => {
                ValueLayout::Name
            }
            SettingKind::Library => ValueLayout::Import,
            _ => ValueLayout::Arguments,
        }
    }

    /// Settings that may appear more than once.
    pub fn is_repeatable(&self) -> bool {
        matches!(
            self,
            SettingKind::Metadata
                | SettingKind::Library
                | SettingKind::Resource
                | SettingKind::Variables
        )
    }

    /// Settings that accept at most one value.
    pub fn is_single_value(&self) -> bool {
        matches!(
            self,
            SettingKind::TestTemplate
                | SettingKind::TestTimeout
                | SettingKind::Template
                | SettingKind::Timeout
                | SettingKind::Resource
        )
    }
}

/// `Suite Setup:` -> `suitesetup`
pub fn normalize(name: &str) -> String {
    name.trim_end()
        .trim_end_matches(':')
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// A setting of the Settings section.
pub fn suite_setting(name: &str) -> Option<SettingKind> {
    let kind = match normalize(name).as_str() {
        "documentation" => SettingKind::Documentation,
        "metadata" => SettingKind::Metadata,
        "suitesetup" => SettingKind::SuiteSetup,
        "suiteteardown" => SettingKind::SuiteTeardown,
        "testsetup" => SettingKind::TestSetup,
        "testteardown" => SettingKind::TestTeardown,
        "testtemplate" => SettingKind::TestTemplate,
        "testtimeout" => SettingKind::TestTimeout,
        "forcetags" => SettingKind::ForceTags,
        "defaulttags" => SettingKind::DefaultTags,
        "library" => SettingKind::Library,
        "resource" => SettingKind::Resource,
        "variables" => SettingKind::Variables,
        _ => return None,
    };
    Some(kind)
}

/// A `[Setting]` of a test or keyword, given the name between the brackets.
pub fn body_setting(name: &str, body: BodyKind) -> Option<SettingKind> {
    let kind = match (normalize(name).as_str(), body) {
        ("documentation", _) => SettingKind::Documentation,
        ("tags", _) => SettingKind::Tags,
        ("teardown", _) => SettingKind::Teardown,
        ("timeout", _) => SettingKind::Timeout,
        ("setup", BodyKind::TestCase) => SettingKind::Setup,
        ("template", BodyKind::TestCase) => SettingKind::Template,
        ("arguments", BodyKind::Keyword) => SettingKind::Arguments,
        ("return", BodyKind::Keyword) => SettingKind::Return,
        _ => return None,
    };
    Some(kind)
}

/// Whether a template value turns templating on. `NONE` and empty values turn it off.
pub fn is_active_template(value: &str) -> bool {
    !value.is_empty() && !value.eq_ignore_ascii_case("NONE")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Suite Setup", Some(SettingKind::SuiteSetup))]
    #[case("suitesetup", Some(SettingKind::SuiteSetup))]
    #[case("SUITE SETUP:", Some(SettingKind::SuiteSetup))]
    #[case("Library", Some(SettingKind::Library))]
    #[case("Force  Tags", Some(SettingKind::ForceTags))]
    #[case("Tags", None)]
    #[case("Bogus", None)]
    fn test_suite_setting(#[case] name: &str, #[case] expected: Option<SettingKind>) {
        assert_eq!(suite_setting(name), expected);
    }

    #[rstest]
    #[case("Setup", BodyKind::TestCase, Some(SettingKind::Setup))]
    #[case("Setup", BodyKind::Keyword, None)]
    #[case("Arguments", BodyKind::Keyword, Some(SettingKind::Arguments))]
    #[case("Arguments", BodyKind::TestCase, None)]
    #[case("Template", BodyKind::TestCase, Some(SettingKind::Template))]
    #[case("Return", BodyKind::Keyword, Some(SettingKind::Return))]
    #[case("tags", BodyKind::Keyword, Some(SettingKind::Tags))]
    fn test_body_setting(
        #[case] name: &str,
        #[case] body: BodyKind,
        #[case] expected: Option<SettingKind>,
    ) {
        assert_eq!(body_setting(name, body), expected);
    }

    #[test]
    fn test_layouts() {
        assert_eq!(SettingKind::Library.layout(), ValueLayout::Import);
        assert_eq!(SettingKind::TestTemplate.layout(), ValueLayout::Name);
        assert_eq!(SettingKind::Tags.layout(), ValueLayout::Arguments);
        assert_eq!(SettingKind::Setup.layout(), ValueLayout::NameAndArguments);
    }

    #[test]
    fn test_templates() {
        assert!(is_active_template("Log"));
        assert!(!is_active_template("NONE"));
        assert!(!is_active_template("none"));
        assert!(!is_active_template(""));
    }
}
