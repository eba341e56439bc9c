//! Whitespace and comment skipping.
//!
//! KPL trivia is spaces, tabs, newlines, `--` line comments and `/* */`
//! block comments. Every advance here is a skip-advance, so nothing consumed
//! becomes part of a token span as long as the caller marked the token end
//! before entry.
//!
//! # Limitation
//!
//! A lone `-` or `/` that does not start a comment is consumed by the
//! one-character peek and cannot be un-consumed; the caller then sees the
//! character after it. Callers only skip trivia after `mark_end`, so the
//! stray character is disposable lookahead and never lands in a token. A
//! recognizer that must inspect the character right after an unmatched `-`
//! or `/` cannot use this skipper as-is.

use crate::Lexer;

/// Skip a maximal run of trivia.
///
/// Returns `true` if a `\n` or `\r` was crossed anywhere in the run,
/// including inside block comments. End of input inside a comment ends the
/// skip without error.
pub fn skip_trivia<L: Lexer + ?Sized>(lexer: &mut L) -> bool {
    let mut saw_newline = false;

    while !lexer.is_eof() {
        match lexer.lookahead() {
            '\n' | '\r' => {
                saw_newline = true;
                lexer.advance(true);
            }
            ' ' | '\t' => lexer.advance(true),
            '-' => {
                lexer.advance(true);
                if lexer.lookahead() != '-' {
                    return saw_newline;
                }
                lexer.advance(true);
                skip_line_comment(lexer);
            }
            '/' => {
                lexer.advance(true);
                if lexer.lookahead() != '*' {
                    return saw_newline;
                }
                lexer.advance(true);
                saw_newline |= skip_block_comment(lexer);
            }
            _ => break,
        }
    }

    saw_newline
}

/// Skip a line comment body, stopping before the terminating `\n`.
fn skip_line_comment<L: Lexer + ?Sized>(lexer: &mut L) {
    while !lexer.is_eof() && lexer.lookahead() != '\n' {
        lexer.advance(true);
    }
}

/// Skip a block comment body through the closing `*/`.
///
/// Returns `true` if the body contains a newline. Block comments do not nest.
fn skip_block_comment<L: Lexer + ?Sized>(lexer: &mut L) -> bool {
    let mut saw_newline = false;
    while !lexer.is_eof() {
        match lexer.lookahead() {
            '\n' | '\r' => {
                saw_newline = true;
                lexer.advance(true);
            }
            '*' => {
                lexer.advance(true);
                if lexer.lookahead() == '/' {
                    lexer.advance(true);
                    break;
                }
            }
            _ => lexer.advance(true),
        }
    }
    saw_newline
}
