//! Command handlers for the `kpl` CLI.
//!
//! Each submodule implements one command. The shared error type and
//! `read_file` live here in the module root.

use thiserror::Error;

mod probe;

pub use probe::{
    decision_boundaries, parse_probe_args, probe_file, probe_source, Hit, ProbeArgs, ProbeReport,
    TokenKind,
};

/// Errors reported by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("error reading '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{0}")]
    Usage(String),
    #[error(
        "unknown token kind '{0}' (expected var-declarator-start, same-line-star, \
         same-line-lparen or all)"
    )]
    UnknownTokenKind(String),
}

/// Read a source file, attaching the path to any I/O error.
pub(crate) fn read_file(path: &str) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_string(),
        source,
    })
}
