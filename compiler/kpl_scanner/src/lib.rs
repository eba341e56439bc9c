//! Disambiguation scanner for KPL.
//!
//! The grammar-driven parser consults this scanner only when its current
//! state admits more than one interpretation of the upcoming input. Each
//! call either confirms one zero-width contextual token or declines, in which
//! case ordinary tokenization resumes at the unchanged position.
//!
//! # Contextual Tokens
//!
//! | Token                  | Decision                                          |
//! |------------------------|---------------------------------------------------|
//! | `VAR_DECLARATOR_START` | identifier followed by `,` or `:` starts a declarator |
//! | `SAME_LINE_STAR`       | `*` on the previous token's line is infix multiply |
//! | `SAME_LINE_LPAREN`     | `(` on the previous token's line opens an argument list |
//!
//! # Entry Points
//!
//! - [`Scanner::scan`] over any [`Lexer`] (the host cursor contract)
//! - [`Scanner::scan_source`] over a [`SourceBuffer`](kpl_lexer_core::SourceBuffer)
//! - `tree_sitter_kpl_external_scanner_*` C functions (feature `ffi`)

mod declarator;
mod lexer;
mod same_line;
mod scanner;
mod source_lexer;
mod state;
mod token;
mod trivia;

#[cfg(feature = "ffi")]
#[allow(
    unsafe_code,
    reason = "C ABI entry points for the tree-sitter runtime"
)]
pub mod ffi;

pub use lexer::Lexer;
pub use scanner::{Decision, Scanner};
pub use source_lexer::{SourceLexer, TokenSpan};
pub use state::{ScannerState, StateError};
pub use token::{ExternalToken, Request, ValidTokens};
pub use trivia::skip_trivia;
