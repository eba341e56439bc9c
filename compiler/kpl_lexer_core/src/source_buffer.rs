//! Owned KPL source with a zero terminator.
//!
//! Storage is zero-filled up to a multiple of 64 bytes, so a cursor can read
//! one byte past the last character without a bounds branch.

use std::fmt;

use crate::Cursor;

const ALIGN: usize = 64;

/// A KPL source file held for scanning.
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// Source bytes, then zeros through the next 64-byte boundary.
    buf: Vec<u8>,
    source_len: u32,
}

/// One-based line and column of a byte offset.
///
/// Columns count characters, not bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineCol {
    pub line: u32,
    pub col: u32,
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

impl SourceBuffer {
    /// Copy `source` into a terminated buffer.
    ///
    /// Content beyond `u32::MAX` bytes is dropped.
    pub fn new(source: &str) -> Self {
        let len = source.len().min(u32::MAX as usize);
        let mut buf = vec![0u8; (len / ALIGN + 1) * ALIGN];
        buf[..len].copy_from_slice(&source.as_bytes()[..len]);
        Self {
            buf,
            source_len: u32::try_from(len).unwrap_or(u32::MAX),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    pub fn cursor(&self) -> Cursor<'_> {
        self.cursor_at(0)
    }

    /// A cursor at byte offset `pos`, clamped to the end of the source.
    ///
    /// `pos` should fall on a character boundary.
    pub fn cursor_at(&self, pos: u32) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len, pos.min(self.source_len))
    }

    /// Source length in bytes.
    pub fn len(&self) -> u32 {
        self.source_len
    }

    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }

    /// Line and column of byte offset `pos`.
    ///
    /// Lines break at `\n`. Offsets past the end resolve to the position
    /// just after the last character.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "counts are bounded by source_len which fits in u32"
    )]
    pub fn line_col(&self, pos: u32) -> LineCol {
        let prefix = &self.as_bytes()[..pos.min(self.source_len) as usize];
        let line = memchr::memchr_iter(b'\n', prefix).count() + 1;
        let line_start = memchr::memrchr(b'\n', prefix).map_or(0, |nl| nl + 1);
        let col = prefix[line_start..]
            .iter()
            .filter(|&&b| b & 0xC0 != 0x80)
            .count()
            + 1;
        LineCol {
            line: line as u32,
            col: col as u32,
        }
    }
}

const _: () = assert!(std::mem::size_of::<SourceBuffer>() <= 32);
