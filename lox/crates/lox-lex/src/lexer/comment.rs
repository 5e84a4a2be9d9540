//! Whitespace and comment skipping.
//!
//! Lox only has line comments: `//` up to, but not including, the next
//! newline. The newline itself is left for the whitespace loop so the cursor
//! counts it.

use crate::chars::is_whitespace;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Skips whitespace and comments.
    ///
    /// This is called before lexing each token.
    pub fn skip_whitespace_and_comments(&mut self) {
        while !self.cursor.is_at_end() {
            let c = self.cursor.current_char();
            if is_whitespace(c) {
                self.cursor.advance();
            } else if c == '/' && self.cursor.peek_char(1) == '/' {
                self.skip_line_comment();
            } else {
                return;
            }
        }
    }

    /// Skips a line comment (from `//` to end of line).
    fn skip_line_comment(&mut self) {
        self.cursor.eat_while(|c| c != '\n');
    }
}

#[cfg(test)]
mod tests {
    use crate::token::TokenKind;
    use lox_util::Handler;

    #[test]
    fn test_skip_whitespace() {
        let mut handler = Handler::new();
        let mut lexer = crate::Lexer::new(" \t\r hello", &mut handler);
        lexer.skip_whitespace_and_comments();
        assert_eq!(lexer.cursor.position(), 4);
        assert_eq!(lexer.next_token().lexeme(), "hello");
    }

    #[test]
    fn test_skip_line_comment() {
        let mut handler = Handler::new();
        let mut lexer = crate::Lexer::new("// comment\nhello", &mut handler);
        let token = lexer.next_token();
        assert_eq!(token.lexeme(), "hello");
        assert_eq!(token.line(), 2);
    }

    #[test]
    fn test_comment_at_end_without_newline() {
        let mut handler = Handler::new();
        let mut lexer = crate::Lexer::new("// trailing", &mut handler);
        let token = lexer.next_token();
        assert!(token.is_eof());
        assert_eq!(token.line(), 1);
    }

    #[test]
    fn test_comment_hides_operators() {
        let mut handler = Handler::new();
        let mut lexer = crate::Lexer::new("//(){}\"!=", &mut handler);
        assert!(lexer.next_token().is_eof());
        drop(lexer);
        assert!(!handler.has_errors());
    }

    #[test]
    fn test_single_slash_is_not_a_comment() {
        let mut handler = Handler::new();
        let mut lexer = crate::Lexer::new("/ /", &mut handler);
        assert_eq!(lexer.next_token().kind(), TokenKind::Slash);
        assert_eq!(lexer.next_token().kind(), TokenKind::Slash);
        assert!(lexer.next_token().is_eof());
    }

    #[test]
    fn test_slash_before_comment() {
        let mut handler = Handler::new();
        let mut lexer = crate::Lexer::new("///", &mut handler);
        // The first two slashes open the comment, which eats the third.
        assert!(lexer.next_token().is_eof());
    }
}
