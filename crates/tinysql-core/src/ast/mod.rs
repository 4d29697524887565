//! Abstract Syntax Tree (AST) types for parsed statements.
//!
//! The tree owns all of its strings and holds no references into the query
//! text it was parsed from.

mod expression;
mod statement;
mod types;

pub use expression::{Expr, Operator, WhereClause};
pub use statement::{CreateTable, Delete, DropTable, Insert, Select, Statement, Update};
pub use types::{ColumnDefinition, ColumnType};
