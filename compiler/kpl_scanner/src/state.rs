//! Persistent scanner state.
//!
//! The host saves and restores this state around incremental reparses and
//! speculative branches. It is a single bit, so it serializes to at most one
//! byte; an empty buffer means "default".

use thiserror::Error;
use tracing::warn;

/// State carried across decisions within one parse session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ScannerState {
    /// Whether the last same-line trivia skip crossed a line boundary.
    pub newline_before: bool,
}

/// Failure decoding serialized [`ScannerState`] bytes.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum StateError {
    #[error("serialized scanner state is {len} bytes, expected at most {max}", max = ScannerState::MAX_SERIALIZED_LEN)]
    TooLong { len: usize },
    #[error("serialized newline flag must be 0 or 1, found {0:#04x}")]
    InvalidFlag(u8),
}

impl ScannerState {
    /// Upper bound on [`serialize`](Self::serialize) output.
    pub const MAX_SERIALIZED_LEN: usize = 1;

    /// Write the state into `buffer`, returning the number of bytes written.
    ///
    /// The default state writes nothing. A non-default state needs one byte;
    /// if `buffer` is empty nothing is written and the state will restore as
    /// default.
    pub fn serialize(self, buffer: &mut [u8]) -> usize {
        if !self.newline_before {
            return 0;
        }
        match buffer.first_mut() {
            Some(byte) => {
                *byte = 1;
                1
            }
            None => 0,
        }
    }

    /// Decode state written by [`serialize`](Self::serialize).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, StateError> {
        match *bytes {
            [] => Ok(Self::default()),
            [flag @ (0 | 1)] => Ok(Self {
                newline_before: flag == 1,
            }),
            [flag] => Err(StateError::InvalidFlag(flag)),
            _ => Err(StateError::TooLong { len: bytes.len() }),
        }
    }

    /// Decode state, falling back to the default on malformed input.
    pub fn restore(bytes: &[u8]) -> Self {
        Self::from_bytes(bytes).unwrap_or_else(|err| {
            warn!(%err, "discarding malformed scanner state");
            Self::default()
        })
    }
}

#[cfg(test)]
mod tests;
