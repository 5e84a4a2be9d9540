//! Identifier and keyword lexing.

use crate::chars::is_ident_continue;
use crate::literal::Literal;
use crate::token::{keyword_from_ident, Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier or keyword.
    ///
    /// Consumes the longest run of letters, digits and underscores, then
    /// checks whether the whole word is a reserved keyword. A keyword that is
    /// only a prefix of the word (`for` in `forest`) does not count.
    pub fn lex_identifier(&mut self) -> Token {
        self.cursor.eat_while(is_ident_continue);

        let text = self.cursor.slice_from(self.token_start);
        let kind = keyword_from_ident(text).unwrap_or(TokenKind::Identifier);

        self.make_token(kind, Literal::Nil)
    }
}
