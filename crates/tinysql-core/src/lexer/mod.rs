//! Query Lexer/Tokenizer
//!
//! This module provides a hand-written, single-pass lexer that produces a
//! stream of tokens. Whitespace is reported as [`TokenKind::Space`] and left
//! for the parser to skip; scanning errors are reported in-band as
//! [`TokenKind::Error`] tokens.

mod span;
mod token;
mod tokenizer;

pub use span::Span;
pub use token::{Token, TokenKind};
pub use tokenizer::{Lexer, lex};
