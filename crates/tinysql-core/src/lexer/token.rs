//! Token types for the lexer.

use std::borrow::Cow;
use std::fmt;

use super::Span;

/// The kind of token.
///
/// Keyword kinds are matched case-insensitively by the lexer; the
/// original spelling stays available in [`Token::text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TokenKind {
    /// Scanning failed; the token text holds the message.
    Error,
    /// A contiguous run of whitespace.
    Space,
    /// Identifier (table or column name).
    Identifier,
    /// End of input. Emitted once, then repeated forever.
    End,
    /// `==`
    Equals,
    /// `=`
    Assign,
    /// `,`
    Comma,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// Integer literal, digits only.
    Integer,
    /// Quoted string literal, quotes included.
    String,

    // Keywords
    /// `SELECT`
    Select,
    /// `FROM`
    From,
    /// `WHERE`
    Where,
    /// `LIMIT`
    Limit,
    /// `INSERT`
    Insert,
    /// `INTO`
    Into,
    /// `UPDATE`
    Update,
    /// `DELETE`
    Delete,
    /// `CREATE`
    Create,
    /// `DROP`
    Drop,
    /// `TABLE`
    Table,
    /// `SET`
    Set,
    /// `VALUES`
    Values,
    /// `AND`
    And,
    /// `INTEGER` column type.
    TypeInteger,
    /// `STRING` column type.
    TypeString,
}

impl TokenKind {
    /// Every keyword kind, in keyword-table order.
    pub const KEYWORDS: [Self; 16] = [
        Self::Select,
        Self::From,
        Self::Where,
        Self::Limit,
        Self::Insert,
        Self::Into,
        Self::Update,
        Self::Delete,
        Self::Create,
        Self::Drop,
        Self::Table,
        Self::Set,
        Self::Values,
        Self::And,
        Self::TypeInteger,
        Self::TypeString,
    ];

    /// Looks up a keyword by spelling (case-insensitive).
    #[must_use]
    pub fn keyword(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "SELECT" => Some(Self::Select),
            "FROM" => Some(Self::From),
            "WHERE" => Some(Self::Where),
            "LIMIT" => Some(Self::Limit),
            "INSERT" => Some(Self::Insert),
            "INTO" => Some(Self::Into),
            "UPDATE" => Some(Self::Update),
            "DELETE" => Some(Self::Delete),
            "CREATE" => Some(Self::Create),
            "DROP" => Some(Self::Drop),
            "TABLE" => Some(Self::Table),
            "SET" => Some(Self::Set),
            "VALUES" => Some(Self::Values),
            "AND" => Some(Self::And),
            "INTEGER" => Some(Self::TypeInteger),
            "STRING" => Some(Self::TypeString),
            _ => None,
        }
    }

    /// Returns true for the kinds produced by the keyword table.
    #[must_use]
    pub const fn is_keyword(&self) -> bool {
        matches!(
            self,
            Self::Select
                | Self::From
                | Self::Where
                | Self::Limit
                | Self::Insert
                | Self::Into
                | Self::Update
                | Self::Delete
                | Self::Create
                | Self::Drop
                | Self::Table
                | Self::Set
                | Self::Values
                | Self::And
                | Self::TypeInteger
                | Self::TypeString
        )
    }

    /// Returns the name used for this kind in error messages.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Space => "space",
            Self::Identifier => "identifier",
            Self::End => "end",
            Self::Equals => "==",
            Self::Assign => "=",
            Self::Comma => "delimiter",
            Self::LeftParen => "left parenthesis",
            Self::RightParen => "right parenthesis",
            Self::Integer => "integer",
            Self::String => "string",
            Self::Select => "SELECT",
            Self::From => "FROM",
            Self::Where => "WHERE",
            Self::Limit => "LIMIT",
            Self::Insert => "INSERT",
            Self::Into => "INTO",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
            Self::Create => "CREATE",
            Self::Drop => "DROP",
            Self::Table => "TABLE",
            Self::Set => "SET",
            Self::Values => "VALUES",
            Self::And => "AND",
            Self::TypeInteger => "INTEGER",
            Self::TypeString => "STRING",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A token with its text and span in the query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    /// The kind of token.
    pub kind: TokenKind,
    /// The matched input, or the message for [`TokenKind::Error`].
    pub text: Cow<'a, str>,
    /// The location in the query.
    pub span: Span,
}

impl<'a> Token<'a> {
    /// Creates a token backed by a slice of the input.
    #[must_use]
    pub const fn new(kind: TokenKind, text: &'a str, span: Span) -> Self {
        Self {
            kind,
            text: Cow::Borrowed(text),
            span,
        }
    }

    /// Creates an error token carrying `message`.
    #[must_use]
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self {
            kind: TokenKind::Error,
            text: Cow::Owned(message.into()),
            span,
        }
    }

    /// Returns true if this is the end-of-input token.
    #[must_use]
    pub const fn is_end(&self) -> bool {
        matches!(self.kind, TokenKind::End)
    }

    /// Returns true once no further tokens can follow.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self.kind, TokenKind::End | TokenKind::Error)
    }

    /// Copies the text out of the input buffer.
    #[must_use]
    pub fn into_owned(self) -> String {
        self.text.into_owned()
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?} @{}..{}", self.kind, self.text, self.span.start, self.span.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_lookup() {
        assert_eq!(TokenKind::keyword("SELECT"), Some(TokenKind::Select));
        assert_eq!(TokenKind::keyword("select"), Some(TokenKind::Select));
        assert_eq!(TokenKind::keyword("SeLeCt"), Some(TokenKind::Select));
        assert_eq!(TokenKind::keyword("integer"), Some(TokenKind::TypeInteger));
        assert_eq!(TokenKind::keyword("String"), Some(TokenKind::TypeString));
        assert_eq!(TokenKind::keyword("selects"), None);
        assert_eq!(TokenKind::keyword("AS"), None);
    }

    #[test]
    fn test_keyword_table_round_trips() {
        for kind in TokenKind::KEYWORDS {
            assert!(kind.is_keyword());
            assert_eq!(TokenKind::keyword(kind.as_str()), Some(kind));
        }
        assert!(!TokenKind::Identifier.is_keyword());
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(TokenKind::Comma.to_string(), "delimiter");
        assert_eq!(TokenKind::End.to_string(), "end");
        assert_eq!(TokenKind::Identifier.to_string(), "identifier");
        assert_eq!(TokenKind::Equals.to_string(), "==");
        assert_eq!(TokenKind::Assign.to_string(), "=");
    }

    #[test]
    fn test_error_token_owns_message() {
        let token = Token::error("expected =", Span::point(3));
        assert_eq!(token.kind, TokenKind::Error);
        assert_eq!(token.text, "expected =");
        assert!(token.is_terminal());
        assert!(!token.is_end());
    }
}
