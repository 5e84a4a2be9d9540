//! Number literal lexing.
//!
//! Lox numbers are decimal only: a run of digits, optionally followed by a
//! `.` and another run of digits. There are no signs, exponents or radix
//! prefixes; `-1` is a `MINUS` followed by a `NUMBER`.

use lox_util::DiagnosticCode;

use crate::chars::is_digit;
use crate::literal::Literal;
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a number literal.
    ///
    /// A `.` is only part of the number when a digit follows it, so `1.`
    /// lexes as `NUMBER` then `DOT`.
    ///
    /// # Returns
    ///
    /// `Some` number token, or `None` if the text could not be converted,
    /// which is reported as an error.
    pub fn lex_number(&mut self) -> Option<Token> {
        self.cursor.eat_while(is_digit);

        if self.cursor.current_char() == '.' && is_digit(self.cursor.peek_char(1)) {
            self.cursor.advance();
            self.cursor.eat_while(is_digit);
        }

        let text = self.cursor.slice_from(self.token_start);
        match text.parse::<f64>() {
            Ok(value) => Some(self.make_token(TokenKind::Number, Literal::Number(value))),
            Err(err) => {
                tracing::error!(lexeme = text, error = %err, "number literal rejected");
                self.report_error(
                    DiagnosticCode::E_LEXER_INVALID_NUMBER,
                    format!("Invalid number literal: {}", text),
                );
                None
            },
        }
    }
}
