//! Low-level source access for the KPL disambiguation scanner.
//!
//! Provides a sentinel-terminated [`SourceBuffer`] and a [`Cursor`] over it.
//! The cursor is `Copy`, so a lookahead can be taken on a snapshot and
//! discarded without touching the original position.
//!
//! This crate has no `kpl_*` dependencies. Tools that only need to walk KPL
//! source (highlighters, probes) can depend on it alone.

mod cursor;
mod source_buffer;

pub use cursor::Cursor;
pub use source_buffer::{LineCol, SourceBuffer};
