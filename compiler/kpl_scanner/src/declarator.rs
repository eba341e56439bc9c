//! `VAR_DECLARATOR_START`: two-token lookahead for variable declarators.
//!
//! A declaration list such as `var a, b: int  c: bool` repeats declarators
//! without a separator, so after `int` the parser cannot tell whether `c`
//! starts another declarator or an expression statement. Looking one token
//! further settles it: an identifier followed by `,` or `:` is a declarator.

use tracing::trace;

use crate::{skip_trivia, Lexer};

/// Returns `true` if the input at the decision point is `identifier` then
/// `,` or `:`.
///
/// The token end is marked before any lookahead, so the marker is
/// zero-width at the decision point and the identifier is still tokenized
/// normally afterward. A `:` immediately followed by `=` does not count.
pub(crate) fn scan_var_declarator_start<L: Lexer + ?Sized>(lexer: &mut L) -> bool {
    lexer.mark_end();
    skip_trivia(lexer);

    if !is_ident_start(lexer.lookahead()) {
        trace!(lookahead = ?lexer.lookahead(), "declarator: no identifier");
        return false;
    }
    while !lexer.is_eof() && is_ident_continue(lexer.lookahead()) {
        lexer.advance(true);
    }

    skip_trivia(lexer);

    let follows = lexer.lookahead();
    let found = match follows {
        ',' => true,
        ':' => {
            lexer.advance(true);
            lexer.lookahead() != '='
        }
        _ => false,
    };
    trace!(?follows, found, "declarator: after identifier");
    found
}

#[inline]
fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

#[inline]
fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests;
