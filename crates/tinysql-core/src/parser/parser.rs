//! Recursive descent parser implementation.

use tracing::{debug, trace};

use super::error::ParseError;
use crate::ast::{
    ColumnDefinition, ColumnType, CreateTable, Delete, DropTable, Expr, Insert, Operator, Select,
    Statement, Update, WhereClause,
};
use crate::lexer::{Lexer, Token, TokenKind};

/// Keywords that may start a statement, in dispatch order.
const STATEMENT_KEYWORDS: [TokenKind; 6] = [
    TokenKind::Select,
    TokenKind::Insert,
    TokenKind::Update,
    TokenKind::Delete,
    TokenKind::Create,
    TokenKind::Drop,
];

/// Tokens that may start a WHERE operand.
const OPERAND_KINDS: [TokenKind; 3] =
    [TokenKind::Identifier, TokenKind::Integer, TokenKind::String];

/// Parser for a single statement.
///
/// The parser pulls tokens from its [`Lexer`] on demand and stops at the
/// first error. Whatever the outcome, the lexer is drained before
/// [`Parser::parse_statement`] returns.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
}

impl<'a> Parser<'a> {
    /// Creates a new parser for the given input.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            lexer: Lexer::new(input),
        }
    }

    /// Parses a single statement.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` describing the first token that does not fit
    /// the grammar, or the lexer's message if the input cannot be scanned.
    pub fn parse_statement(&mut self) -> Result<Statement, ParseError> {
        let result = self.parse_statement_inner();
        self.lexer.drain();

        match &result {
            Ok(statement) => debug!(
                kind = statement.kind(),
                table = statement.table(),
                "parsed statement"
            ),
            Err(err) => debug!(error = %err, at = err.span().start, "parse failed"),
        }

        result
    }

    fn parse_statement_inner(&mut self) -> Result<Statement, ParseError> {
        let token = self.expect(&STATEMENT_KEYWORDS)?;
        match token.kind {
            TokenKind::Select => Ok(Statement::Select(self.parse_select()?)),
            TokenKind::Insert => Ok(Statement::Insert(self.parse_insert()?)),
            TokenKind::Update => Ok(Statement::Update(self.parse_update()?)),
            TokenKind::Delete => Ok(Statement::Delete(self.parse_delete()?)),
            TokenKind::Create => Ok(Statement::CreateTable(self.parse_create_table()?)),
            _ => Ok(Statement::DropTable(self.parse_drop_table()?)),
        }
    }

    /// Parses the rest of a SELECT statement.
    fn parse_select(&mut self) -> Result<Select, ParseError> {
        let mut columns = vec![];
        loop {
            columns.push(self.expect_identifier()?);
            if self.expect(&[TokenKind::From, TokenKind::Comma])?.kind == TokenKind::From {
                break;
            }
        }

        let table = self.expect_identifier()?;

        // WHERE and LIMIT are alternatives; at most one may follow the table.
        let mut where_clause = None;
        let mut limit = None;
        match self
            .expect(&[TokenKind::Where, TokenKind::Limit, TokenKind::End])?
            .kind
        {
            TokenKind::Where => {
                where_clause = Some(WhereClause::new(self.parse_expression()?));
                self.expect_end()?;
            }
            TokenKind::Limit => {
                limit = Some(self.expect(&[TokenKind::Integer])?.into_owned());
                self.expect_end()?;
            }
            _ => {}
        }

        Ok(Select {
            table,
            columns,
            where_clause,
            limit,
        })
    }

    /// Parses the rest of an INSERT statement.
    fn parse_insert(&mut self) -> Result<Insert, ParseError> {
        let token = self.expect(&[TokenKind::Identifier, TokenKind::Into])?;
        let table = if token.kind == TokenKind::Into {
            self.expect_identifier()?
        } else {
            token.into_owned()
        };

        self.expect(&[TokenKind::LeftParen])?;
        let mut columns = vec![];
        loop {
            columns.push(self.expect_identifier()?);
            if self.expect_list_separator()? {
                break;
            }
        }

        self.expect(&[TokenKind::Values])?;
        self.expect(&[TokenKind::LeftParen])?;
        let mut values = vec![];
        let closing = loop {
            values.push(
                self.expect(&[TokenKind::Integer, TokenKind::String])?
                    .into_owned(),
            );
            let separator = self.expect(&[TokenKind::Comma, TokenKind::RightParen])?;
            if separator.kind == TokenKind::RightParen {
                break separator;
            }
        };

        if columns.len() != values.len() {
            return Err(ParseError::ValueCount {
                columns: columns.len(),
                values: values.len(),
                span: closing.span,
            });
        }

        self.expect_end()?;

        Ok(Insert {
            table,
            columns,
            values,
        })
    }

    /// Parses the rest of an UPDATE statement.
    fn parse_update(&mut self) -> Result<Update, ParseError> {
        let table = self.expect_identifier()?;
        self.expect(&[TokenKind::Set])?;

        let mut columns = vec![];
        let mut values = vec![];
        loop {
            columns.push(self.expect_identifier()?);
            self.expect(&[TokenKind::Assign])?;
            values.push(
                self.expect(&[TokenKind::String, TokenKind::Integer])?
                    .into_owned(),
            );
            if self.expect(&[TokenKind::Comma, TokenKind::End])?.kind == TokenKind::End {
                break;
            }
        }

        Ok(Update {
            table,
            columns,
            values,
            where_clause: None,
        })
    }

    /// Parses the rest of a DELETE statement.
    fn parse_delete(&mut self) -> Result<Delete, ParseError> {
        self.expect(&[TokenKind::From])?;
        let table = self.expect_identifier()?;
        self.expect_end()?;

        Ok(Delete {
            table,
            where_clause: None,
        })
    }

    /// Parses the rest of a CREATE TABLE statement.
    fn parse_create_table(&mut self) -> Result<CreateTable, ParseError> {
        self.expect(&[TokenKind::Table])?;
        let name = self.expect_identifier()?;

        self.expect(&[TokenKind::LeftParen])?;
        let mut columns = vec![];
        loop {
            let column = self.expect_identifier()?;
            let column_type = self.parse_column_type()?;
            columns.push(ColumnDefinition::new(column, column_type));
            if self.expect_list_separator()? {
                break;
            }
        }

        self.expect_end()?;

        Ok(CreateTable { name, columns })
    }

    fn parse_column_type(&mut self) -> Result<ColumnType, ParseError> {
        let token = self.expect(&[TokenKind::TypeInteger, TokenKind::TypeString])?;
        Ok(if token.kind == TokenKind::TypeInteger {
            ColumnType::Integer
        } else {
            ColumnType::String
        })
    }

    /// Parses the rest of a DROP TABLE statement.
    fn parse_drop_table(&mut self) -> Result<DropTable, ParseError> {
        self.expect(&[TokenKind::Table])?;
        let table = self.expect_identifier()?;
        self.expect_end()?;

        Ok(DropTable { table })
    }

    /// Parses a WHERE condition: a single `==` comparison of two operands.
    fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        let left = self.parse_operand()?;
        self.expect(&[TokenKind::Equals])?;
        let right = self.parse_operand()?;

        Ok(left.binary(Operator::Equals, right))
    }

    fn parse_operand(&mut self) -> Result<Expr, ParseError> {
        let token = self.expect(&OPERAND_KINDS)?;
        let kind = token.kind;
        let text = token.into_owned();

        Ok(match kind {
            TokenKind::Identifier => Expr::Identifier(text),
            TokenKind::Integer => Expr::IntegerLiteral(text),
            _ => Expr::StringLiteral(text),
        })
    }

    // --- Helper methods ---

    /// Pulls the next token, skipping whitespace if `skip_space` is set.
    fn advance(&mut self, skip_space: bool) -> Token<'a> {
        loop {
            let token = self.lexer.next_token();
            if !(skip_space && token.kind == TokenKind::Space) {
                trace!(kind = %token.kind, text = %token.text, "token");
                return token;
            }
        }
    }

    /// Pulls the next significant token and checks it against `expected`.
    ///
    /// A lexer error takes precedence over the kind check and is reported
    /// with its own message.
    fn expect(&mut self, expected: &[TokenKind]) -> Result<Token<'a>, ParseError> {
        let token = self.advance(true);

        if token.kind == TokenKind::Error {
            return Err(ParseError::lex(token.text, token.span));
        }

        if expected.contains(&token.kind) {
            Ok(token)
        } else {
            Err(ParseError::unexpected(
                expected,
                token.kind,
                token.text,
                token.span,
            ))
        }
    }

    /// Expects and returns an identifier.
    fn expect_identifier(&mut self) -> Result<String, ParseError> {
        self.expect(&[TokenKind::Identifier]).map(Token::into_owned)
    }

    /// Expects the end of input.
    fn expect_end(&mut self) -> Result<(), ParseError> {
        self.expect(&[TokenKind::End]).map(|_| ())
    }

    /// Expects `,` or `)` inside a parenthesized list. Returns true on `)`.
    fn expect_list_separator(&mut self) -> Result<bool, ParseError> {
        let token = self.expect(&[TokenKind::Comma, TokenKind::RightParen])?;
        Ok(token.kind == TokenKind::RightParen)
    }
}

/// Parses `input` into a [`Statement`].
///
/// # Errors
///
/// Returns a `ParseError` if the input is not a valid statement.
pub fn parse(input: &str) -> Result<Statement, ParseError> {
    Parser::new(input).parse_statement()
}
