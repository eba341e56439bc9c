//! The decision entry point.

use kpl_lexer_core::SourceBuffer;
use tracing::trace;

use crate::declarator::scan_var_declarator_start;
use crate::same_line::scan_same_line;
use crate::{ExternalToken, Lexer, Request, ScannerState, SourceLexer, TokenSpan, ValidTokens};

/// A successful decision over a [`SourceBuffer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decision {
    pub token: ExternalToken,
    pub span: TokenSpan,
}

/// Disambiguation scanner for one parse session.
///
/// Owns the only state that crosses decisions. Hosts that save and restore
/// parser state must round-trip it through [`serialize`](Self::serialize)
/// and [`deserialize`](Self::deserialize).
#[derive(Clone, Debug, Default)]
pub struct Scanner {
    state: ScannerState,
}

impl Scanner {
    /// Create a scanner with zero-initialized state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current persistent state.
    #[inline]
    pub fn state(&self) -> ScannerState {
        self.state
    }

    /// Whether the last same-line decision crossed a line boundary.
    #[inline]
    pub fn newline_before(&self) -> bool {
        self.state.newline_before
    }

    /// Write the persistent state into `buffer`; returns bytes written (0 or 1).
    pub fn serialize(&self, buffer: &mut [u8]) -> usize {
        self.state.serialize(buffer)
    }

    /// Restore persistent state. An empty buffer restores the default.
    pub fn deserialize(&mut self, buffer: &[u8]) {
        self.state = ScannerState::restore(buffer);
    }

    /// Run at most one recognizer for the admissible tokens in `valid`.
    ///
    /// Returns the recognized token, with the lexer's end mark at the
    /// token's (zero-width) end, or `None` to let ordinary tokenization
    /// resume at the decision point. Never returns a token outside `valid`.
    pub fn scan<L: Lexer + ?Sized>(
        &mut self,
        lexer: &mut L,
        valid: ValidTokens,
    ) -> Option<ExternalToken> {
        let request = Request::from_valid(valid);
        let found = match request {
            Request::VarDeclaratorStart => {
                scan_var_declarator_start(lexer).then_some(ExternalToken::VarDeclaratorStart)
            }
            Request::SameLine { star, lparen } => {
                scan_same_line(lexer, &mut self.state, star, lparen)
            }
            Request::Nothing => None,
        };
        trace!(?request, ?found, newline_before = self.state.newline_before, "scan");
        found
    }

    /// Run one decision over `source` starting at byte offset `pos`.
    ///
    /// The lookahead runs on a throwaway [`SourceLexer`]; nothing about
    /// `source` changes and the caller's position is untouched.
    pub fn scan_source(
        &mut self,
        source: &SourceBuffer,
        pos: u32,
        valid: ValidTokens,
    ) -> Option<Decision> {
        let mut lexer = SourceLexer::new(source.cursor_at(pos));
        let token = self.scan(&mut lexer, valid)?;
        Some(Decision {
            token,
            span: lexer.finish(),
        })
    }
}
