//! Host cursor contract.

/// Forward-only character cursor supplied by the host for one decision.
///
/// Mirrors the tree-sitter lexer interface. The scanner never stores the
/// cursor or copies source text out of it.
///
/// # Token Boundaries
///
/// An advance with `skip == true` marks the consumed character as trivia: it
/// moves the start of the token being decided past it. [`mark_end`] fixes the
/// token's end at the current position. Anything read after the last
/// `mark_end` is disposable lookahead; the host rewinds to the marked end
/// once the decision returns.
///
/// [`mark_end`]: Lexer::mark_end
pub trait Lexer {
    /// The character at the cursor, or `'\0'` at end of input.
    fn lookahead(&self) -> char;

    /// Move past the current character. `skip` marks it as trivia.
    fn advance(&mut self, skip: bool);

    /// Fix the end of the token being decided at the current position.
    fn mark_end(&mut self);

    /// Returns `true` once the cursor has consumed all input.
    fn is_eof(&self) -> bool;
}
