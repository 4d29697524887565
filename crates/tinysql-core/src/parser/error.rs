//! Parser error types.

use crate::lexer::{Span, TokenKind};

/// A parse error.
///
/// Parsing stops at the first error; the display string is the whole
/// user-facing message and never includes the position.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The lexer could not scan the input.
    #[error("{message}")]
    Lex {
        /// The lexer's message.
        message: String,
        /// The location of the malformed input.
        span: Span,
    },

    /// A token did not fit the grammar at this point.
    #[error("expected {}, but got {found}: {text:?}", join_kinds(.expected))]
    Unexpected {
        /// Kinds that would have been accepted, in the order tried.
        expected: Vec<TokenKind>,
        /// The kind actually found.
        found: TokenKind,
        /// The text actually found.
        text: String,
        /// The location of the offending token.
        span: Span,
    },

    /// An INSERT listed a different number of columns and values.
    #[error("expected {columns} values, but got {values}")]
    ValueCount {
        /// Number of columns listed.
        columns: usize,
        /// Number of values listed.
        values: usize,
        /// The location of the value list's closing parenthesis.
        span: Span,
    },
}

impl ParseError {
    /// Creates an "unexpected token" error.
    #[must_use]
    pub fn unexpected(
        expected: &[TokenKind],
        found: TokenKind,
        text: impl Into<String>,
        span: Span,
    ) -> Self {
        Self::Unexpected {
            expected: expected.to_vec(),
            found,
            text: text.into(),
            span,
        }
    }

    /// Creates an error from a lexer-reported message.
    #[must_use]
    pub fn lex(message: impl Into<String>, span: Span) -> Self {
        Self::Lex {
            message: message.into(),
            span,
        }
    }

    /// Returns the location of the error in the query.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Lex { span, .. }
            | Self::Unexpected { span, .. }
            | Self::ValueCount { span, .. } => *span,
        }
    }
}

fn join_kinds(kinds: &[TokenKind]) -> String {
    kinds
        .iter()
        .map(TokenKind::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
