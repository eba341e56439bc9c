//! `SAME_LINE_STAR` / `SAME_LINE_LPAREN`: line-sensitive operator roles.
//!
//! `*` and `(` are ambiguous between a prefix role (pointer dereference, a
//! parenthesized expression starting a new statement) and an infix role
//! (multiplication, call argument list). KPL treats them as infix only when
//! they sit on the same line as the previous token.

use tracing::trace;

use crate::{skip_trivia, ExternalToken, Lexer, ScannerState};

/// Decide whether a requested operator follows on the same line.
///
/// Records whether the trivia skip crossed a newline in
/// `state.newline_before`. On success the end is re-marked at the operator,
/// giving a zero-width marker directly before it; on failure the end mark
/// stays at the decision point, before the trivia.
pub(crate) fn scan_same_line<L: Lexer + ?Sized>(
    lexer: &mut L,
    state: &mut ScannerState,
    star: bool,
    lparen: bool,
) -> Option<ExternalToken> {
    lexer.mark_end();
    let crossed = skip_trivia(lexer);
    state.newline_before = crossed;

    if crossed {
        trace!("same-line: newline before operator");
        return None;
    }

    let token = match lexer.lookahead() {
        '*' if star => ExternalToken::SameLineStar,
        '(' if lparen => ExternalToken::SameLineLParen,
        other => {
            trace!(lookahead = ?other, "same-line: no requested operator");
            return None;
        }
    };

    lexer.mark_end();
    Some(token)
}

#[cfg(test)]
mod tests;
