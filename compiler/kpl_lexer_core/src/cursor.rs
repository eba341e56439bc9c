//! Character cursor over a [`SourceBuffer`](crate::SourceBuffer).
//!
//! Reads are unchecked against the source end: the buffer's trailing zero
//! byte doubles as the end-of-input marker. A zero byte before `source_len`
//! is a literal U+0000 in the source, not the end.

/// Read position in a KPL source.
///
/// Cheap to copy. Scanning ahead on a copy and throwing it away leaves the
/// original where it was.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Source bytes followed by at least one zero byte.
    buf: &'a [u8],
    pos: u32,
    source_len: u32,
}

const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    /// `buf[source_len]` must be zero and `pos` must not exceed `source_len`.
    pub(crate) fn new(buf: &'a [u8], source_len: u32, pos: u32) -> Self {
        debug_assert_eq!(buf.get(source_len as usize), Some(&0), "missing terminator");
        debug_assert!(pos <= source_len, "cursor start {pos} past source end");
        Self {
            buf,
            pos,
            source_len,
        }
    }

    /// The byte under the cursor; `0` at end of input.
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf[self.pos as usize]
    }

    /// The character under the cursor; `'\0'` at end of input.
    ///
    /// A position inside a multi-byte character reads as U+FFFD.
    pub fn current_char(&self) -> char {
        let lead = self.current();
        if lead.is_ascii() {
            return char::from(lead);
        }
        let start = self.pos as usize;
        let end = (start + Self::utf8_char_width(lead) as usize).min(self.source_len as usize);
        match std::str::from_utf8(&self.buf[start..end]) {
            Ok(text) => text.chars().next().unwrap_or(char::REPLACEMENT_CHARACTER),
            Err(_) => char::REPLACEMENT_CHARACTER,
        }
    }

    /// Step over the character under the cursor. Stays put at end of input.
    #[inline]
    pub fn advance_char(&mut self) {
        if !self.is_eof() {
            let width = Self::utf8_char_width(self.current());
            self.pos = (self.pos + width).min(self.source_len);
        }
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    /// Byte offset of the cursor.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// Byte length of the UTF-8 sequence introduced by `lead`.
    ///
    /// Continuation and invalid bytes count as one.
    #[inline]
    pub fn utf8_char_width(lead: u8) -> u32 {
        match lead {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }
}
