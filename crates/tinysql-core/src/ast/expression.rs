//! Expression AST types.

use core::fmt;

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Operator {
    /// `==`
    Equals,
    /// `AND`
    And,
}

impl Operator {
    /// Returns the dialect representation of the operator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Equals => "==",
            Self::And => "AND",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An expression, as found after `WHERE`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Expr {
    /// A column reference.
    Identifier(String),
    /// An integer literal, digits only.
    IntegerLiteral(String),
    /// A string literal, surrounding quotes included.
    StringLiteral(String),
    /// A binary expression.
    BinaryOp {
        /// Left operand.
        left: Box<Expr>,
        /// Operator.
        op: Operator,
        /// Right operand.
        right: Box<Expr>,
    },
}

impl Expr {
    /// Creates a column reference.
    #[must_use]
    pub fn identifier(name: impl Into<String>) -> Self {
        Self::Identifier(name.into())
    }

    /// Creates an integer literal.
    #[must_use]
    pub fn integer(text: impl Into<String>) -> Self {
        Self::IntegerLiteral(text.into())
    }

    /// Creates a string literal. `text` keeps its quotes.
    #[must_use]
    pub fn string(text: impl Into<String>) -> Self {
        Self::StringLiteral(text.into())
    }

    /// Creates a binary expression.
    #[must_use]
    pub fn binary(self, op: Operator, right: Self) -> Self {
        Self::BinaryOp {
            left: Box::new(self),
            op,
            right: Box::new(right),
        }
    }

    /// Creates an equality comparison.
    #[must_use]
    pub fn equals(self, right: Self) -> Self {
        self.binary(Operator::Equals, right)
    }

    /// Returns true for identifiers and literals.
    #[must_use]
    pub const fn is_operand(&self) -> bool {
        !matches!(self, Self::BinaryOp { .. })
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier(text) | Self::IntegerLiteral(text) | Self::StringLiteral(text) => {
                f.write_str(text)
            }
            Self::BinaryOp { left, op, right } => write!(f, "{left} {op} {right}"),
        }
    }
}

/// The condition of a `WHERE` clause.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct WhereClause {
    /// The condition.
    pub expr: Expr,
}

impl WhereClause {
    /// Wraps an expression.
    #[must_use]
    pub const fn new(expr: Expr) -> Self {
        Self { expr }
    }
}

impl fmt::Display for WhereClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WHERE {}", self.expr)
    }
}
