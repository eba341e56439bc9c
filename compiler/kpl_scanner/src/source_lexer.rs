//! [`Lexer`] implementation over an in-memory [`SourceBuffer`].
//!
//! Reproduces the tree-sitter runtime's token-boundary bookkeeping so Rust
//! callers (tests, the probe CLI, editors embedding the scanner directly) get
//! the same spans the runtime would produce.
//!
//! [`SourceBuffer`]: kpl_lexer_core::SourceBuffer

use kpl_lexer_core::Cursor;

use crate::Lexer;

/// Byte range of a decided token.
///
/// Contextual tokens are zero-width, so `start == end` for every token the
/// scanner emits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TokenSpan {
    pub start: u32,
    pub end: u32,
}

impl TokenSpan {
    /// Zero for a reversed span.
    #[inline]
    pub fn len(self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }
}

/// Host cursor for one decision.
///
/// `Copy`: taking a snapshot before a decision and dropping the copy
/// afterward is how a caller rewinds.
#[derive(Clone, Copy, Debug)]
pub struct SourceLexer<'a> {
    cursor: Cursor<'a>,
    /// Start of the token being decided; moved forward by skip-advances.
    token_start: u32,
    /// Position recorded by the last `mark_end`, if any.
    token_end: Option<u32>,
}

impl<'a> SourceLexer<'a> {
    /// Start a decision at the cursor's position.
    pub fn new(cursor: Cursor<'a>) -> Self {
        Self {
            cursor,
            token_start: cursor.pos(),
            token_end: None,
        }
    }

    /// Current read position (end of the lookahead consumed so far).
    #[inline]
    pub fn pos(&self) -> u32 {
        self.cursor.pos()
    }

    /// The span the host would emit if the decision succeeded now.
    ///
    /// Without a `mark_end` the token ends at the read position. When the
    /// end mark precedes skipped trivia the start collapses onto the mark,
    /// giving a zero-width token at the decision point.
    pub fn finish(&self) -> TokenSpan {
        let end = self.token_end.unwrap_or_else(|| self.cursor.pos());
        TokenSpan {
            start: self.token_start.min(end),
            end,
        }
    }
}

impl Lexer for SourceLexer<'_> {
    #[inline]
    fn lookahead(&self) -> char {
        self.cursor.current_char()
    }

    fn advance(&mut self, skip: bool) {
        self.cursor.advance_char();
        if skip {
            self.token_start = self.cursor.pos();
        }
    }

    fn mark_end(&mut self) {
        self.token_end = Some(self.cursor.pos());
    }

    #[inline]
    fn is_eof(&self) -> bool {
        self.cursor.is_eof()
    }
}
