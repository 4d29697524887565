//! # tinysql-core
//!
//! A lexer and recursive descent parser for a small SQL-like dialect.
//!
//! This crate provides:
//! - A hand-written, single-pass lexer producing typed tokens
//! - A parser for six statement forms: `SELECT`, `INSERT`, `UPDATE`,
//!   `DELETE`, `CREATE TABLE` and `DROP TABLE`
//! - An owned, strongly-typed AST that renders back to query text
//!
//! ## Parsing
//!
//! ```rust
//! use tinysql_core::{Statement, parse};
//!
//! let stmt = parse("SELECT id, name FROM users LIMIT 10").unwrap();
//! let Statement::Select(select) = stmt else { unreachable!() };
//! assert_eq!(select.columns, vec!["id", "name"]);
//! assert_eq!(select.limit.as_deref(), Some("10"));
//! ```
//!
//! ## Errors
//!
//! Parsing stops at the first problem and reports what was expected:
//!
//! ```rust
//! use tinysql_core::parse;
//!
//! let err = parse("DROP users").unwrap_err();
//! assert_eq!(err.to_string(), "expected TABLE, but got identifier: \"users\"");
//! ```

pub mod ast;
pub mod lexer;
pub mod parser;

pub use ast::{ColumnDefinition, ColumnType, Expr, Operator, Statement, WhereClause};
pub use lexer::{Lexer, Span, Token, TokenKind, lex};
pub use parser::{ParseError, Parser, parse};
