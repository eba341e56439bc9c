//! `kpl probe`: run one scanner session over a file and report decisions.

use std::fmt;

use kpl_lexer_core::{LineCol, SourceBuffer};
use kpl_scanner::{ExternalToken, Scanner, ValidTokens};
use tracing::debug;

use super::{read_file, CliError};

/// Candidate set offered at every decision boundary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TokenKind {
    VarDeclaratorStart,
    SameLineStar,
    SameLineLParen,
    /// Every kind; the scanner's own priority decides.
    #[default]
    All,
}

impl TokenKind {
    /// Parse a `--token=` value.
    pub fn parse(name: &str) -> Result<Self, CliError> {
        match name {
            "var-declarator-start" => Ok(Self::VarDeclaratorStart),
            "same-line-star" => Ok(Self::SameLineStar),
            "same-line-lparen" => Ok(Self::SameLineLParen),
            "all" => Ok(Self::All),
            _ => Err(CliError::UnknownTokenKind(name.to_string())),
        }
    }

    pub fn valid_tokens(self) -> ValidTokens {
        match self {
            Self::VarDeclaratorStart => ExternalToken::VarDeclaratorStart.into(),
            Self::SameLineStar => ExternalToken::SameLineStar.into(),
            Self::SameLineLParen => ExternalToken::SameLineLParen.into(),
            Self::All => ValidTokens::all(),
        }
    }
}

/// Parsed arguments of `kpl probe`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProbeArgs {
    pub path: String,
    pub kind: TokenKind,
}

/// Parse the arguments following `probe`.
///
/// Flags may come before or after the path.
pub fn parse_probe_args(args: &[String]) -> Result<ProbeArgs, CliError> {
    let mut path = None;
    let mut kind = TokenKind::default();

    for arg in args {
        if let Some(name) = arg.strip_prefix("--token=") {
            kind = TokenKind::parse(name)?;
        } else if arg.starts_with('-') {
            return Err(CliError::Usage(format!("unknown option '{arg}'")));
        } else if path.is_none() {
            path = Some(arg.clone());
        } else {
            return Err(CliError::Usage(format!("unexpected argument '{arg}'")));
        }
    }

    let path = path.ok_or_else(|| CliError::Usage("missing file path".to_string()))?;
    Ok(ProbeArgs { path, kind })
}

/// An accepted decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hit {
    pub at: LineCol,
    pub token: ExternalToken,
}

impl fmt::Display for Hit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.at, self.token)
    }
}

/// Outcome of probing one source.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProbeReport {
    pub hits: Vec<Hit>,
    pub declined: usize,
}

impl ProbeReport {
    pub fn accepted(&self) -> usize {
        self.hits.len()
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Byte offsets where the host could ask for a decision.
///
/// Offset 0, then every offset whose previous character is not whitespace
/// and which does not fall inside an identifier. The end of input counts.
pub fn decision_boundaries(source: &str) -> Vec<u32> {
    let mut boundaries = Vec::new();
    let mut prev: Option<char> = None;
    let chars = source
        .char_indices()
        .map(|(i, c)| (i, Some(c)))
        .chain(std::iter::once((source.len(), None)));

    for (offset, current) in chars {
        let keep = match prev {
            None => true,
            Some(p) => {
                let after_space = p.is_whitespace();
                let inside_ident = is_ident_char(p) && current.is_some_and(is_ident_char);
                !(after_space || inside_ident)
            }
        };
        if keep {
            if let Ok(offset) = u32::try_from(offset) {
                boundaries.push(offset);
            }
        }
        prev = current;
    }
    boundaries
}

/// Probe `source` with one scanner session.
///
/// Scanner state carries from one boundary to the next the way it does
/// across decisions in a real parse.
pub fn probe_source(source: &str, kind: TokenKind) -> ProbeReport {
    let buf = SourceBuffer::new(source);
    let valid = kind.valid_tokens();
    let mut scanner = Scanner::new();
    let mut report = ProbeReport::default();

    for pos in decision_boundaries(source) {
        match scanner.scan_source(&buf, pos, valid) {
            Some(decision) => report.hits.push(Hit {
                at: buf.line_col(decision.span.start),
                token: decision.token,
            }),
            None => report.declined += 1,
        }
    }
    report
}

/// Probe a file and print every accepted decision plus a summary.
pub fn probe_file(args: &ProbeArgs) -> Result<(), CliError> {
    let _span = tracing::debug_span!("probe", path = %args.path).entered();
    let content = read_file(&args.path)?;
    debug!(bytes = content.len(), kind = ?args.kind, "probing");

    let report = probe_source(&content, args.kind);
    for hit in &report.hits {
        println!("{hit}");
    }
    println!("{} accepted, {} declined", report.accepted(), report.declined);
    Ok(())
}
