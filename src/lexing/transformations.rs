//! Statement transformations
//!
//! A transformation rewrites the classified statement sequence before it is flattened into
//! the token stream. Transformations only insert or reorder whole statements in ways that
//! keep source order; they never touch the tokens of an existing statement.
//!
//! Design principles:
//! - Transformations are pure: same input always produces same output
//! - Transformations operate on statements: `Vec<Statement> -> Vec<Statement>`
//! - Transformations have metadata: name and description for debugging
//! - Transformations are composable: the pipeline runs them in order

pub mod old_for_loop;

pub use old_for_loop::OldForLoopTerminator;

use crate::token::Statement;

/// A pass over the classified statements of a document.
///
/// # Examples
///
/// ```ignore
/// struct Identity;
///
/// impl Transformation for Identity {
///     fn name(&self) -> &str {
///         "identity"
///     }
///
///     fn description(&self) -> &str {
///         "Returns the statements unchanged"
///     }
///
///     fn transform(&self, statements: Vec<Statement>) -> Vec<Statement> {
///         statements
///     }
/// }
/// ```
pub trait Transformation {
    /// Lowercase with underscores, e.g. `old_for_loop_terminator`
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    fn transform(&self, statements: Vec<Statement>) -> Vec<Statement>;
}

/// The transformations run on every document, in order.
pub fn default_transformations() -> Vec<Box<dyn Transformation>> {
    vec![Box::new(OldForLoopTerminator::new())]
}
