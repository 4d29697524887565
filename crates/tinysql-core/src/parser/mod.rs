//! Statement Parser
//!
//! A hand-written recursive descent parser. Each grammar production is a
//! method returning `Result`, and the first error aborts the parse.

mod error;
#[allow(clippy::module_inception)]
mod parser;

pub use error::ParseError;
pub use parser::{Parser, parse};
