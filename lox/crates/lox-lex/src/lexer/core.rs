//! Core lexer implementation.
//!
//! This module contains the main Lexer struct and its core methods.

use std::iter::FusedIterator;

use lox_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};

use crate::chars::{is_digit, is_ident_start};
use crate::cursor::Cursor;
use crate::literal::Literal;
use crate::token::{Token, TokenKind};

/// Lexer for the Lox programming language.
///
/// The lexer transforms source code text into a stream of tokens in a
/// single left-to-right pass. Lexical errors never stop it: each one is
/// reported to the [`Handler`], the offending text produces no token, and
/// scanning resumes with the next character.
///
/// # Example
///
/// ```
/// use lox_lex::{Lexer, TokenKind};
/// use lox_util::Handler;
///
/// let mut handler = Handler::new();
/// let kinds: Vec<TokenKind> = Lexer::new("a >= 1", &mut handler)
///     .map(|token| token.kind())
///     .collect();
///
/// assert_eq!(
///     kinds,
///     [TokenKind::Identifier, TokenKind::GreaterEqual, TokenKind::Number, TokenKind::Eof]
/// );
/// assert!(!handler.has_errors());
/// ```
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(super) cursor: Cursor<'a>,

    /// Error handler for reporting lexical errors.
    handler: &'a mut Handler,

    /// Starting position of the current token (byte offset).
    pub(super) token_start: usize,

    /// Whether the `EOF` token has been produced.
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given source code.
    pub fn new(source: &'a str, handler: &'a mut Handler) -> Self {
        Self {
            cursor: Cursor::new(source),
            handler,
            token_start: 0,
            finished: false,
        }
    }

    /// Returns the next token from the source code.
    ///
    /// Skips whitespace, comments and erroneous characters, then dispatches
    /// on the current character. At end of input an `EOF` token is returned,
    /// and is returned again on every later call.
    pub fn next_token(&mut self) -> Token {
        loop {
            self.skip_whitespace_and_comments();
            self.token_start = self.cursor.position();

            if self.cursor.is_at_end() {
                self.finished = true;
                return Token::eof(self.cursor.line());
            }

            if let Some(token) = self.scan_token() {
                tracing::trace!(line = token.line(), "{}", token);
                return token;
            }
        }
    }

    /// Scans the whole source, returning every token up to and including
    /// the single `EOF`.
    pub fn scan_tokens(mut self) -> Vec<Token> {
        let tokens: Vec<Token> = self.by_ref().collect();
        tracing::debug!(
            tokens = tokens.len(),
            errors = self.handler.error_count(),
            lines = self.cursor.line(),
            "scan finished"
        );
        tokens
    }

    /// Recognises one token starting at the current character.
    ///
    /// Returns `None` when the text was consumed without producing a token,
    /// which only happens after an error has been reported.
    fn scan_token(&mut self) -> Option<Token> {
        match self.cursor.current_char() {
            '"' => self.lex_string(),
            c if is_digit(c) => self.lex_number(),
            c if is_ident_start(c) => Some(self.lex_identifier()),
            c => {
                if let Some(token) = self.lex_operator() {
                    return Some(token);
                }
                self.cursor.advance();
                self.report_error(
                    DiagnosticCode::E_LEXER_UNEXPECTED_CHAR,
                    format!("Unexpected character: {}", c),
                );
                None
            },
        }
    }

    /// Builds a token of `kind` whose lexeme runs from the token start to
    /// the current position.
    pub(crate) fn make_token(&self, kind: TokenKind, literal: Literal) -> Token {
        Token::new(
            kind,
            self.cursor.slice_from(self.token_start),
            literal,
            self.cursor.line(),
        )
    }

    /// Reports a lexical error covering the current token.
    pub(crate) fn report_error(&mut self, code: DiagnosticCode, message: String) {
        let span = Span::new(self.token_start, self.cursor.position(), self.cursor.line());
        DiagnosticBuilder::error(message)
            .code(code)
            .span(span)
            .emit(self.handler);
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            None
        } else {
            Some(self.next_token())
        }
    }
}

impl<'a> FusedIterator for Lexer<'a> {}
