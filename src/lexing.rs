//! Lexer
//!
//!     This module orchestrates the complete tokenization pipeline. The document is first split
//!     into statements, statements are classified one by one against a structural context,
//!     statement-level transformations run over the classified sequence, and finally the
//!     statements are flattened into a lazy token stream.
//!
//! The Lexing Pipeline
//!
//!     The pipeline consists of:
//!         1. Splitting. See [splitter](splitter). Each physical line is scanned into cells
//!            (logos for the space separated format, a regex for the pipe format, see
//!            [base_tokenization](base_tokenization)). Lines are grouped into statements
//!            honoring the `...` continuation marker, and comments are recognized.
//!
//!         2. Classification. See [classification](classification). The data cells of every
//!            statement get a semantic type depending on the current [Context](context::Context):
//!            which section is open, whether we are inside a test or keyword, whether a FOR
//!            loop is open.
//!
//!         3. Transformations. See [transformations](transformations). Old-style FOR loops
//!            have no closing marker, so an `END` statement is synthesized after their body.
//!
//!         4. Token stream. See [stream](stream). Statements are flattened, ignorable tokens
//!            are dropped and an `EOS` marker follows each statement.
//!
//!     Steps 1 to 3 are eager: the terminator can only be placed once the statement after a
//!     loop body is known. Step 4 is lazy and computes tokens on demand.
//!
//! Modes
//!
//!     Full mode keeps every token, including separators, line ends and comments, so the
//!     token values reproduce the source. Data-only mode drops layout already in the splitter
//!     and hides comments, errors and old FOR loop markers from the stream. Both modes run the
//!     same classification over the same data cells, so they agree on statement boundaries.

pub mod base_tokenization;
pub mod classification;
pub mod context;
pub mod pipeline;
pub mod settings;
pub mod splitter;
pub mod stream;
pub mod transformations;

pub use context::Context;
pub use pipeline::RobotLexer;
pub use splitter::split;
pub use stream::TokenStream;

/// Tokenize a whole document in one call.
///
/// Equivalent to feeding `content` to a fresh [RobotLexer] and asking for its tokens.
pub fn tokenize(content: &str, data_only: bool) -> TokenStream {
    let mut lexer = RobotLexer::new(data_only);
    lexer.input(content);
    lexer.get_tokens()
}
