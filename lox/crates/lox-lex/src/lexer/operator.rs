//! Operator and punctuation lexing.

use crate::literal::Literal;
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes punctuation or an operator at the current character.
    ///
    /// `!`, `=`, `<` and `>` become their two-character form when directly
    /// followed by `=`. Returns `None` without consuming anything if the
    /// current character is not punctuation.
    pub fn lex_operator(&mut self) -> Option<Token> {
        let kind = match self.cursor.current_char() {
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            '{' => TokenKind::LeftBrace,
            '}' => TokenKind::RightBrace,
            ',' => TokenKind::Comma,
            '.' => TokenKind::Dot,
            '-' => TokenKind::Minus,
            '+' => TokenKind::Plus,
            ';' => TokenKind::Semicolon,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '!' => return Some(self.lex_with_equal(TokenKind::Bang, TokenKind::BangEqual)),
            '=' => return Some(self.lex_with_equal(TokenKind::Equal, TokenKind::EqualEqual)),
            '<' => return Some(self.lex_with_equal(TokenKind::Less, TokenKind::LessEqual)),
            '>' => return Some(self.lex_with_equal(TokenKind::Greater, TokenKind::GreaterEqual)),
            _ => return None,
        };

        self.cursor.advance();
        Some(self.make_token(kind, Literal::Nil))
    }

    /// Lexes `single`, or `double` if the next character is `=`.
    fn lex_with_equal(&mut self, single: TokenKind, double: TokenKind) -> Token {
        self.cursor.advance();
        let kind = if self.cursor.match_char('=') {
            double
        } else {
            single
        };
        self.make_token(kind, Literal::Nil)
    }
}
