use super::*;
use crate::{SourceLexer, TokenSpan};
use kpl_lexer_core::SourceBuffer;

/// Helper: run the declarator check from the start of `source`.
fn check(source: &str) -> bool {
    check_at(source, 0).0
}

/// Helper: run the declarator check at `pos`, returning the result and span.
fn check_at(source: &str, pos: u32) -> (bool, TokenSpan) {
    let buf = SourceBuffer::new(source);
    let mut lexer = SourceLexer::new(buf.cursor_at(pos));
    let found = scan_var_declarator_start(&mut lexer);
    (found, lexer.finish())
}

// === Accepts ===

#[test]
fn identifier_then_comma() {
    assert!(check("a, b: int"));
}

#[test]
fn identifier_then_colon() {
    assert!(check("count: int"));
}

#[test]
fn underscore_and_digits() {
    assert!(check("_tmp2 , x: int"));
    assert!(check("x_1_y:ptr to int"));
}

#[test]
fn trivia_between_identifier_and_separator() {
    assert!(check("a  \t, b: int"));
    assert!(check("a -- trailing note\n  : int"));
    assert!(check("a /* c */ : int"));
    assert!(check("a /* multi\nline */ , b: int"));
}

#[test]
fn trivia_before_identifier() {
    assert!(check("  \n\t-- lead\n/* c */ a: int"));
}

#[test]
fn marker_is_zero_width_at_decision_point() {
    let (found, span) = check_at("int  c: bool", 3);
    assert!(found);
    assert_eq!(span, TokenSpan { start: 3, end: 3 });
}

// === Declines ===

#[test]
fn expression_statement() {
    assert!(!check("a = b + 1"));
    assert!(!check("foo(1)"));
    assert!(!check("x.y"));
}

#[test]
fn identifier_then_identifier() {
    assert!(!check("a b: int"));
}

#[test]
fn identifier_at_eof() {
    assert!(!check("a"));
    assert!(!check("a  -- comment"));
}

#[test]
fn no_identifier() {
    assert!(!check(""));
    assert!(!check("1, 2"));
    assert!(!check(", a"));
    assert!(!check("(a): int"));
}

#[test]
fn non_ascii_is_not_an_identifier() {
    assert!(!check("\u{e9}, x: int"));
    assert!(!check("a\u{e9}: int"));
}

#[test]
fn colon_equals_is_not_a_declarator() {
    assert!(!check("a := b"));
    assert!(!check("a:=b"));
}

#[test]
fn spaced_colon_equals_still_counts_as_colon() {
    // Only the adjacent pair `:=` is excluded.
    assert!(check("a : = b"));
}

#[test]
fn decline_keeps_mark_at_decision_point() {
    let (found, span) = check_at("x a b", 1);
    assert!(!found);
    assert_eq!(span, TokenSpan { start: 1, end: 1 });
}
