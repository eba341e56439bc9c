//! Contextual token kinds and candidate sets.
//!
//! The host passes the admissible tokens positionally, one flag per kind in
//! the order of [`ExternalToken`]. That order is fixed by the grammar's
//! `externals` list and must not change.

use std::fmt;

use bitflags::bitflags;

/// A contextual token the scanner can emit.
///
/// Discriminants are the host's external symbol indices.
#[repr(u16)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExternalToken {
    /// Zero-width marker before `name, name, ... : Type`.
    VarDeclaratorStart = 0,
    /// Zero-width marker before a `*` on the previous token's line.
    SameLineStar = 1,
    /// Zero-width marker before a `(` on the previous token's line.
    SameLineLParen = 2,
}

impl ExternalToken {
    /// Number of contextual token kinds.
    pub const COUNT: usize = 3;

    /// All kinds in host enumeration order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::VarDeclaratorStart,
        Self::SameLineStar,
        Self::SameLineLParen,
    ];

    /// The host's external symbol index for this token.
    #[inline]
    pub const fn symbol(self) -> u16 {
        self as u16
    }

    /// Look up a token by its external symbol index.
    pub fn from_symbol(symbol: u16) -> Option<Self> {
        Self::ALL.get(usize::from(symbol)).copied()
    }

    /// Grammar-facing name of the token.
    pub const fn name(self) -> &'static str {
        match self {
            Self::VarDeclaratorStart => "VAR_DECLARATOR_START",
            Self::SameLineStar => "SAME_LINE_STAR",
            Self::SameLineLParen => "SAME_LINE_LPAREN",
        }
    }

    const fn flag(self) -> ValidTokens {
        match self {
            Self::VarDeclaratorStart => ValidTokens::VAR_DECLARATOR_START,
            Self::SameLineStar => ValidTokens::SAME_LINE_STAR,
            Self::SameLineLParen => ValidTokens::SAME_LINE_LPAREN,
        }
    }
}

impl fmt::Display for ExternalToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

bitflags! {
    /// Contextual tokens admissible in the host's current parse state.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct ValidTokens: u8 {
        const VAR_DECLARATOR_START = 1 << 0;
        const SAME_LINE_STAR = 1 << 1;
        const SAME_LINE_LPAREN = 1 << 2;
    }
}

impl ValidTokens {
    /// Build a set from the host's positional flag array.
    ///
    /// Index `i` corresponds to `ExternalToken::ALL[i]`. Missing trailing
    /// flags read as `false`; extra flags are ignored.
    pub fn from_flags(flags: &[bool]) -> Self {
        ExternalToken::ALL
            .iter()
            .zip(flags)
            .filter(|&(_, &valid)| valid)
            .fold(Self::empty(), |set, (token, _)| set | token.flag())
    }

    /// Returns `true` if `token` is admissible.
    #[inline]
    pub fn admits(self, token: ExternalToken) -> bool {
        self.contains(token.flag())
    }
}

impl From<ExternalToken> for ValidTokens {
    fn from(token: ExternalToken) -> Self {
        token.flag()
    }
}

/// Which recognizer a decision runs, derived from the candidate set.
///
/// At most one recognizer runs per decision. The declarator check takes
/// priority over the same-line operators; the two same-line operators share
/// one trivia skip and are tested against the same character.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Request {
    /// Look for `identifier` followed by `,` or `:`.
    VarDeclaratorStart,
    /// Look for a same-line `*` and/or `(`.
    SameLine { star: bool, lparen: bool },
    /// Nothing admissible; decline immediately.
    Nothing,
}

impl Request {
    /// Select the recognizer for a candidate set.
    pub fn from_valid(valid: ValidTokens) -> Self {
        if valid.admits(ExternalToken::VarDeclaratorStart) {
            return Self::VarDeclaratorStart;
        }
        let star = valid.admits(ExternalToken::SameLineStar);
        let lparen = valid.admits(ExternalToken::SameLineLParen);
        if star || lparen {
            Self::SameLine { star, lparen }
        } else {
            Self::Nothing
        }
    }
}
