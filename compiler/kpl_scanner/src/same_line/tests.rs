use super::*;
use crate::{SourceLexer, TokenSpan};
use kpl_lexer_core::SourceBuffer;
use pretty_assertions::assert_eq;

struct Outcome {
    token: Option<ExternalToken>,
    span: TokenSpan,
    newline_before: bool,
}

/// Helper: decide at `pos` with both operators requested.
fn decide(source: &str, pos: u32) -> Outcome {
    decide_with(source, pos, true, true)
}

fn decide_with(source: &str, pos: u32, star: bool, lparen: bool) -> Outcome {
    let buf = SourceBuffer::new(source);
    let mut lexer = SourceLexer::new(buf.cursor_at(pos));
    let mut state = ScannerState::default();
    let token = scan_same_line(&mut lexer, &mut state, star, lparen);
    Outcome {
        token,
        span: lexer.finish(),
        newline_before: state.newline_before,
    }
}

// === Star ===

#[test]
fn star_on_same_line() {
    let outcome = decide("x * y", 1);
    assert_eq!(outcome.token, Some(ExternalToken::SameLineStar));
    assert!(!outcome.newline_before);
}

#[test]
fn star_marker_sits_before_the_operator() {
    let outcome = decide("x   * y", 1);
    assert_eq!(outcome.span, TokenSpan { start: 4, end: 4 });
}

#[test]
fn star_adjacent() {
    assert_eq!(decide("x*y", 1).token, Some(ExternalToken::SameLineStar));
}

#[test]
fn star_after_newline() {
    let outcome = decide("x\n* y", 1);
    assert_eq!(outcome.token, None);
    assert!(outcome.newline_before);
}

#[test]
fn star_after_line_comment() {
    let outcome = decide("x -- comment\n* y", 1);
    assert_eq!(outcome.token, None);
    assert!(outcome.newline_before);
}

#[test]
fn star_after_single_line_block_comment() {
    assert_eq!(
        decide("x /* note */ * y", 1).token,
        Some(ExternalToken::SameLineStar)
    );
}

#[test]
fn star_after_multiline_block_comment() {
    let outcome = decide("x /* a\nb */ * y", 1);
    assert_eq!(outcome.token, None);
    assert!(outcome.newline_before);
}

#[test]
fn star_not_requested() {
    let outcome = decide_with("x * y", 1, false, true);
    assert_eq!(outcome.token, None);
    assert!(!outcome.newline_before);
}

// === Left Paren ===

#[test]
fn lparen_on_same_line() {
    let outcome = decide("f (a, b)", 1);
    assert_eq!(outcome.token, Some(ExternalToken::SameLineLParen));
    assert_eq!(outcome.span, TokenSpan { start: 2, end: 2 });
}

#[test]
fn lparen_adjacent() {
    assert_eq!(
        decide("obj.meth(1)", 8).token,
        Some(ExternalToken::SameLineLParen)
    );
}

#[test]
fn lparen_on_next_line() {
    let outcome = decide("f\n(a + b)", 1);
    assert_eq!(outcome.token, None);
    assert!(outcome.newline_before);
}

#[test]
fn lparen_not_requested() {
    assert_eq!(decide_with("f (a)", 1, true, false).token, None);
}

// === Declines ===

#[test]
fn other_character() {
    let outcome = decide("x + y", 1);
    assert_eq!(outcome.token, None);
    assert!(!outcome.newline_before);
}

#[test]
fn end_of_input() {
    assert_eq!(decide("x", 1).token, None);
    assert_eq!(decide("x   ", 1).token, None);
}

#[test]
fn decline_keeps_mark_before_trivia() {
    let outcome = decide("x \n * y", 1);
    assert_eq!(outcome.token, None);
    assert_eq!(outcome.span, TokenSpan { start: 1, end: 1 });
}

#[test]
fn carriage_return_counts_as_newline() {
    assert_eq!(decide("x\r* y", 1).token, None);
    assert_eq!(decide("x\r\n( y", 1).token, None);
}

#[test]
fn newline_flag_tracks_latest_skip() {
    let buf = SourceBuffer::new("a\n* b * c");
    let mut state = ScannerState::default();

    let mut first = SourceLexer::new(buf.cursor_at(1));
    assert_eq!(scan_same_line(&mut first, &mut state, true, false), None);
    assert!(state.newline_before);

    let mut second = SourceLexer::new(buf.cursor_at(5));
    assert_eq!(
        scan_same_line(&mut second, &mut state, true, false),
        Some(ExternalToken::SameLineStar)
    );
    assert!(!state.newline_before);
}
