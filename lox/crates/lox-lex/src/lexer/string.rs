//! String literal lexing.

use lox_util::DiagnosticCode;

use crate::literal::Literal;
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a string literal.
    ///
    /// Strings run from `"` to the next `"` and may span lines. There are no
    /// escape sequences: a backslash is kept as-is. The token's line is the
    /// line the closing quote is on.
    ///
    /// # Returns
    ///
    /// `Some(STRING)` with the text between the quotes as its literal, or
    /// `None` after reporting `Unterminated string.` when the input ends
    /// first.
    pub fn lex_string(&mut self) -> Option<Token> {
        self.cursor.advance();
        self.cursor.eat_while(|c| c != '"');

        if self.cursor.is_at_end() {
            self.report_error(
                DiagnosticCode::E_LEXER_UNTERMINATED_STRING,
                "Unterminated string.".to_string(),
            );
            return None;
        }

        self.cursor.advance();

        let lexeme = self.cursor.slice_from(self.token_start);
        let value = &lexeme[1..lexeme.len() - 1];
        Some(self.make_token(TokenKind::String, Literal::from(value)))
    }
}
