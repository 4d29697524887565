//! Tokenizer implementation.

use tracing::trace;

use super::{Span, Token, TokenKind};

/// A pull-based lexer over a query string.
///
/// Tokens are produced strictly left to right, one per call to
/// [`Lexer::next_token`]. Once the input is exhausted, or a scanning error
/// has been reported, every further call returns [`TokenKind::End`].
pub struct Lexer<'a> {
    /// The input source code.
    input: &'a str,
    /// The current byte position.
    pos: usize,
    /// The byte position of the start of the current token.
    start: usize,
    /// Set once `End` or `Error` has been produced.
    finished: bool,
    /// Set once the iterator has yielded `End`.
    end_yielded: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            start: 0,
            finished: false,
            end_yielded: false,
        }
    }

    /// Returns the input this lexer scans.
    #[must_use]
    pub const fn input(&self) -> &'a str {
        self.input
    }

    /// Returns true once the lexer can only produce `End`.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.finished
    }

    /// Returns the current character without advancing.
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Advances to the next character and returns it.
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Advances while `pred` holds.
    fn advance_while(&mut self, pred: impl Fn(char) -> bool) {
        while self.peek().is_some_and(&pred) {
            self.advance();
        }
    }

    fn make_span(&self) -> Span {
        Span::new(self.start, self.pos)
    }

    fn make_token(&self, kind: TokenKind) -> Token<'a> {
        Token::new(kind, &self.input[self.start..self.pos], self.make_span())
    }

    fn make_error(&mut self, message: impl Into<String>) -> Token<'a> {
        self.finished = true;
        let token = Token::error(message, self.make_span());
        trace!(message = %token.text, at = token.span.start, "scan error");
        token
    }

    fn make_end(&mut self) -> Token<'a> {
        self.finished = true;
        let span = Span::point(self.input.len());
        Token::new(TokenKind::End, "", span)
    }

    /// Scans a word: keyword, integer literal or identifier.
    fn scan_word(&mut self) -> Token<'a> {
        self.advance_while(|c| c.is_alphanumeric() || c == '_');

        let text = &self.input[self.start..self.pos];

        if let Some(keyword) = TokenKind::keyword(text) {
            self.make_token(keyword)
        } else if text.bytes().all(|b| b.is_ascii_digit()) {
            self.make_token(TokenKind::Integer)
        } else {
            self.make_token(TokenKind::Identifier)
        }
    }

    /// Scans a string literal; the opening quote is already consumed.
    fn scan_string(&mut self, quote: char) -> Token<'a> {
        loop {
            match self.advance() {
                Some(c) if c == quote => return self.make_token(TokenKind::String),
                Some(_) => {}
                None => return self.make_error("unterminated string literal"),
            }
        }
    }

    /// Scans the next token.
    #[must_use]
    pub fn next_token(&mut self) -> Token<'a> {
        if self.finished {
            return self.make_end();
        }

        self.start = self.pos;

        let Some(c) = self.advance() else {
            return self.make_end();
        };

        match c {
            c if c.is_alphanumeric() || c == '_' => self.scan_word(),
            c if c.is_whitespace() => {
                self.advance_while(char::is_whitespace);
                self.make_token(TokenKind::Space)
            }
            ',' => self.make_token(TokenKind::Comma),
            '(' => self.make_token(TokenKind::LeftParen),
            ')' => self.make_token(TokenKind::RightParen),
            '=' => match self.peek() {
                Some('=') => {
                    self.advance();
                    self.make_token(TokenKind::Equals)
                }
                None => self.make_error("expected ="),
                Some(_) => self.make_token(TokenKind::Assign),
            },
            '"' | '\'' => self.scan_string(c),
            _ => self.make_error(format!("unexpected character: {c:?}")),
        }
    }

    /// Consumes and discards the remaining tokens until the lexer reaches
    /// its terminal state. Returns the number of tokens discarded, not
    /// counting the final `End`.
    pub fn drain(&mut self) -> usize {
        let mut discarded = 0;
        while !self.next_token().is_end() {
            discarded += 1;
        }
        self.end_yielded = true;
        if discarded > 0 {
            trace!(discarded, "drained unconsumed tokens");
        }
        discarded
    }

    /// Tokenizes the entire input, up to and including `End`.
    #[must_use]
    pub fn tokenize(&mut self) -> Vec<Token<'a>> {
        self.collect()
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.end_yielded {
            return None;
        }
        let token = self.next_token();
        if token.is_end() {
            self.end_yielded = true;
        }
        Some(token)
    }
}

/// Starts lexing `input`.
#[must_use]
pub const fn lex(input: &str) -> Lexer<'_> {
    Lexer::new(input)
}
