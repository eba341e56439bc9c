//! C ABI for the tree-sitter runtime.
//!
//! Exports the five `tree_sitter_kpl_external_scanner_*` functions the
//! generated parser calls. The payload pointer is a boxed [`Scanner`]; the
//! runtime's `TSLexer` is adapted to [`Lexer`] without copying any input.
//!
//! The grammar's `externals` list must declare the contextual tokens in
//! [`ExternalToken`] order: the runtime's `valid_symbols` array is read for
//! exactly [`ExternalToken::COUNT`] entries.

use std::ffi::{c_char, c_uint, c_void};

use crate::{ExternalToken, Lexer, Scanner, ValidTokens};

/// Size of the buffer the runtime passes to `serialize`.
pub const SERIALIZATION_BUFFER_SIZE: usize = 1024;

/// Lexer interface of the tree-sitter runtime (`tree_sitter/parser.h`).
///
/// Only the leading fields are declared; the scanner never touches the
/// runtime's trailing logging hook.
#[repr(C)]
pub struct TSLexer {
    pub lookahead: i32,
    pub result_symbol: u16,
    pub advance: unsafe extern "C" fn(*mut TSLexer, bool),
    pub mark_end: unsafe extern "C" fn(*mut TSLexer),
    pub get_column: unsafe extern "C" fn(*mut TSLexer) -> u32,
    pub is_at_included_range_start: unsafe extern "C" fn(*const TSLexer) -> bool,
    pub eof: unsafe extern "C" fn(*const TSLexer) -> bool,
}

/// [`Lexer`] over a runtime-owned `TSLexer`.
struct RuntimeLexer {
    raw: *mut TSLexer,
}

impl Lexer for RuntimeLexer {
    fn lookahead(&self) -> char {
        // SAFETY: `raw` is the live lexer passed to `scan` for this call.
        let code = unsafe { (*self.raw).lookahead };
        u32::try_from(code)
            .ok()
            .and_then(char::from_u32)
            .unwrap_or(char::REPLACEMENT_CHARACTER)
    }

    fn advance(&mut self, skip: bool) {
        // SAFETY: as above; the callback is supplied by the runtime.
        unsafe { ((*self.raw).advance)(self.raw, skip) }
    }

    fn mark_end(&mut self) {
        // SAFETY: as above.
        unsafe { ((*self.raw).mark_end)(self.raw) }
    }

    fn is_eof(&self) -> bool {
        // SAFETY: as above.
        unsafe { ((*self.raw).eof)(self.raw) }
    }
}

/// Allocate a scanner for a new parse session.
#[no_mangle]
pub extern "C" fn tree_sitter_kpl_external_scanner_create() -> *mut c_void {
    Box::into_raw(Box::new(Scanner::new())).cast()
}

/// Release a scanner created by [`tree_sitter_kpl_external_scanner_create`].
///
/// # Safety
///
/// `payload` must be null or a pointer returned by `create` that has not
/// been destroyed.
#[no_mangle]
pub unsafe extern "C" fn tree_sitter_kpl_external_scanner_destroy(payload: *mut c_void) {
    if !payload.is_null() {
        // SAFETY: caller guarantees `payload` came from `Box::into_raw` in `create`.
        drop(unsafe { Box::from_raw(payload.cast::<Scanner>()) });
    }
}

/// Write the scanner state into the runtime's buffer.
///
/// # Safety
///
/// `payload` must be a live scanner; `buffer` must be null or point to
/// [`SERIALIZATION_BUFFER_SIZE`] writable bytes.
#[no_mangle]
pub unsafe extern "C" fn tree_sitter_kpl_external_scanner_serialize(
    payload: *mut c_void,
    buffer: *mut c_char,
) -> c_uint {
    // SAFETY: caller guarantees `payload` is null or a live scanner.
    let Some(scanner) = (unsafe { payload.cast::<Scanner>().as_ref() }) else {
        return 0;
    };
    if buffer.is_null() {
        return 0;
    }
    // SAFETY: caller guarantees the buffer size.
    let buffer =
        unsafe { std::slice::from_raw_parts_mut(buffer.cast::<u8>(), SERIALIZATION_BUFFER_SIZE) };
    c_uint::try_from(scanner.serialize(buffer)).unwrap_or(0)
}

/// Restore the scanner state from bytes previously written by `serialize`.
///
/// # Safety
///
/// `payload` must be a live scanner; `buffer` must be null or point to
/// `length` readable bytes.
#[no_mangle]
pub unsafe extern "C" fn tree_sitter_kpl_external_scanner_deserialize(
    payload: *mut c_void,
    buffer: *const c_char,
    length: c_uint,
) {
    // SAFETY: caller guarantees `payload` is null or a live scanner.
    let Some(scanner) = (unsafe { payload.cast::<Scanner>().as_mut() }) else {
        return;
    };
    let bytes: &[u8] = if buffer.is_null() || length == 0 {
        &[]
    } else {
        // SAFETY: caller guarantees `length` readable bytes.
        unsafe { std::slice::from_raw_parts(buffer.cast::<u8>(), length as usize) }
    };
    scanner.deserialize(bytes);
}

/// Decide one contextual token.
///
/// On success writes the token's symbol to `lexer.result_symbol`.
///
/// # Safety
///
/// `payload` must be a live scanner, `lexer` the runtime's lexer for this
/// call, and `valid_symbols` must point to [`ExternalToken::COUNT`] flags.
#[no_mangle]
pub unsafe extern "C" fn tree_sitter_kpl_external_scanner_scan(
    payload: *mut c_void,
    lexer: *mut TSLexer,
    valid_symbols: *const bool,
) -> bool {
    // SAFETY: caller guarantees `payload` is null or a live scanner.
    let Some(scanner) = (unsafe { payload.cast::<Scanner>().as_mut() }) else {
        return false;
    };
    if lexer.is_null() || valid_symbols.is_null() {
        return false;
    }
    // SAFETY: caller guarantees the flag array length.
    let flags = unsafe { std::slice::from_raw_parts(valid_symbols, ExternalToken::COUNT) };
    let valid = ValidTokens::from_flags(flags);

    let mut runtime = RuntimeLexer { raw: lexer };
    match scanner.scan(&mut runtime, valid) {
        Some(token) => {
            // SAFETY: `lexer` is live for this call.
            unsafe { (*lexer).result_symbol = token.symbol() };
            true
        }
        None => false,
    }
}
