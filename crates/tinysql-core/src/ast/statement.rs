//! Statement AST types.
//!
//! Every statement renders back to canonical query text through
//! [`Display`](core::fmt::Display); parsing the rendered text yields the
//! same tree.

use core::fmt;

use super::expression::WhereClause;
use super::types::ColumnDefinition;

/// A SELECT statement.
///
/// ```text
/// SELECT columns[0], ..., columns[n] FROM table [WHERE ... | LIMIT n]
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Select {
    /// Table name.
    pub table: String,
    /// Selected columns, never empty.
    pub columns: Vec<String>,
    /// WHERE clause.
    #[cfg_attr(feature = "serde", serde(rename = "where"))]
    pub where_clause: Option<WhereClause>,
    /// LIMIT, as written.
    pub limit: Option<String>,
}

/// An INSERT statement.
///
/// ```text
/// INSERT [INTO] table (columns[0], ..., columns[n]) VALUES (values[0], ..., values[n])
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Insert {
    /// Table name.
    pub table: String,
    /// Column names.
    pub columns: Vec<String>,
    /// Literal values, parallel to `columns`.
    pub values: Vec<String>,
}

/// An UPDATE statement.
///
/// ```text
/// UPDATE table SET columns[0] = values[0], ..., columns[n] = values[n]
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Update {
    /// Table name.
    pub table: String,
    /// Assigned columns.
    pub columns: Vec<String>,
    /// Literal values, parallel to `columns`.
    pub values: Vec<String>,
    /// WHERE clause. The grammar does not accept one yet, so the parser
    /// always leaves this unset.
    #[cfg_attr(feature = "serde", serde(rename = "where"))]
    pub where_clause: Option<WhereClause>,
}

impl Update {
    /// Iterates over `(column, value)` pairs.
    pub fn assignments(&self) -> impl Iterator<Item = (&str, &str)> {
        self.columns
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().map(String::as_str))
    }
}

/// A DELETE statement.
///
/// ```text
/// DELETE FROM table
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Delete {
    /// Table name.
    pub table: String,
    /// WHERE clause. Always unset after parsing, as for [`Update`].
    #[cfg_attr(feature = "serde", serde(rename = "where"))]
    pub where_clause: Option<WhereClause>,
}

/// A CREATE TABLE statement.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CreateTable {
    /// Table name.
    pub name: String,
    /// Column definitions.
    pub columns: Vec<ColumnDefinition>,
}

/// A DROP TABLE statement.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DropTable {
    /// Table name.
    pub table: String,
}

/// A parsed statement.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Statement {
    /// SELECT statement.
    Select(Select),
    /// INSERT statement.
    Insert(Insert),
    /// UPDATE statement.
    Update(Update),
    /// DELETE statement.
    Delete(Delete),
    /// CREATE TABLE statement.
    CreateTable(CreateTable),
    /// DROP TABLE statement.
    DropTable(DropTable),
}

impl Statement {
    /// Returns the leading keyword(s) of the statement.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Select(_) => "SELECT",
            Self::Insert(_) => "INSERT",
            Self::Update(_) => "UPDATE",
            Self::Delete(_) => "DELETE",
            Self::CreateTable(_) => "CREATE TABLE",
            Self::DropTable(_) => "DROP TABLE",
        }
    }

    /// Returns the table the statement targets.
    #[must_use]
    pub fn table(&self) -> &str {
        match self {
            Self::Select(s) => &s.table,
            Self::Insert(i) => &i.table,
            Self::Update(u) => &u.table,
            Self::Delete(d) => &d.table,
            Self::CreateTable(c) => &c.name,
            Self::DropTable(d) => &d.table,
        }
    }
}

impl fmt::Display for Select {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SELECT {} FROM {}", self.columns.join(", "), self.table)?;
        if let Some(where_clause) = &self.where_clause {
            write!(f, " {where_clause}")?;
        }
        if let Some(limit) = &self.limit {
            write!(f, " LIMIT {limit}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Insert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "INSERT INTO {} ({}) VALUES ({})",
            self.table,
            self.columns.join(", "),
            self.values.join(", ")
        )
    }
}

impl fmt::Display for Update {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UPDATE {} SET ", self.table)?;
        for (i, (column, value)) in self.assignments().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{column} = {value}")?;
        }
        if let Some(where_clause) = &self.where_clause {
            write!(f, " {where_clause}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Delete {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DELETE FROM {}", self.table)?;
        if let Some(where_clause) = &self.where_clause {
            write!(f, " {where_clause}")?;
        }
        Ok(())
    }
}

impl fmt::Display for CreateTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CREATE TABLE {} (", self.name)?;
        for (i, column) in self.columns.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{column}")?;
        }
        f.write_str(")")
    }
}

impl fmt::Display for DropTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DROP TABLE {}", self.table)
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Select(s) => fmt::Display::fmt(s, f),
            Self::Insert(i) => fmt::Display::fmt(i, f),
            Self::Update(u) => fmt::Display::fmt(u, f),
            Self::Delete(d) => fmt::Display::fmt(d, f),
            Self::CreateTable(c) => fmt::Display::fmt(c, f),
            Self::DropTable(d) => fmt::Display::fmt(d, f),
        }
    }
}
