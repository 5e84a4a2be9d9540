//! lox-lex - Lexical Analyzer for the Lox Programming Language
//!
//! This crate turns Lox source text into an ordered list of tokens, ending
//! with exactly one `EOF` token. Lexical errors are reported to a
//! [`lox_util::Handler`] and never stop the scan.
//!
//! # Example Usage
//!
//! ```
//! use lox_lex::{tokenize, TokenKind};
//! use lox_util::Handler;
//!
//! let mut handler = Handler::new();
//! let tokens = tokenize("var x = 12;", &mut handler);
//!
//! let dump: Vec<String> = tokens.iter().map(ToString::to_string).collect();
//! assert_eq!(
//!     dump,
//!     [
//!         "VAR var null",
//!         "IDENTIFIER x null",
//!         "EQUAL = null",
//!         "NUMBER 12 12",
//!         "SEMICOLON ; null",
//!         "EOF  null",
//!     ]
//! );
//! assert!(!handler.has_errors());
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token and token kind definitions
//! - [`literal`] - Literal values carried by tokens
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - Character cursor for source traversal
//! - [`chars`] - Character classes
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! `and`, `class`, `else`, `false`, `for`, `fun`, `if`, `nil`, `or`, `print`,
//! `return`, `super`, `this`, `true`, `var`, `while`
//!
//! ## Identifiers
//!
//! Pattern: `[a-zA-Z_][a-zA-Z0-9_]*`
//!
//! ## Literals
//!
//! - **Number**: `42`, `3.14` (no sign, no exponent)
//! - **String**: `"hello"`, may span lines, no escapes
//!
//! ## Operators and Delimiters
//!
//! `( ) { } , . - + ; / *` and `! != = == < <= > >=`
//!
//! ## Comments
//!
//! `//` to end of line.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod chars;
pub mod cursor;
pub mod lexer;
pub mod literal;
pub mod token;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use lexer::Lexer;
pub use literal::Literal;
pub use token::{keyword_from_ident, Token, TokenKind};

use lox_util::Handler;

/// Scans `source` into tokens, reporting lexical errors to `handler`.
///
/// Never fails: the result always ends with exactly one `EOF` token whose
/// line is the last line of the source.
pub fn tokenize(source: &str, handler: &mut Handler) -> Vec<Token> {
    Lexer::new(source, handler).scan_tokens()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper to render every token the way the `tokenize` command prints it.
    fn dump(source: &str) -> (Vec<String>, Handler) {
        let mut handler = Handler::new();
        let lines = tokenize(source, &mut handler)
            .iter()
            .map(ToString::to_string)
            .collect();
        (lines, handler)
    }

    #[test]
    fn test_empty_source() {
        let (lines, handler) = dump("");
        assert_eq!(lines, vec!["EOF  null"]);
        assert!(!handler.has_errors());
    }

    #[test]
    fn test_var_declaration() {
        let (lines, _) = dump("var x = 12;");
        assert_eq!(
            lines,
            vec![
                "VAR var null",
                "IDENTIFIER x null",
                "EQUAL = null",
                "NUMBER 12 12",
                "SEMICOLON ; null",
                "EOF  null",
            ]
        );
    }

    #[test]
    fn test_comment_then_number() {
        let mut handler = Handler::new();
        let tokens = tokenize("// comment only\n42", &mut handler);
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].to_string(), "NUMBER 42 42");
        assert_eq!(tokens[0].line(), 2);
        assert_eq!(tokens[1].to_string(), "EOF  null");
    }

    #[test]
    fn test_unterminated_string_produces_no_token() {
        let (lines, handler) = dump("\"unterminated");
        assert_eq!(lines, vec!["EOF  null"]);
        assert_eq!(handler.error_count(), 1);
        assert_eq!(
            handler.diagnostics()[0].to_string(),
            "[line 1] Error: Unterminated string."
        );
    }

    #[test]
    fn test_errors_and_tokens_interleave() {
        let (lines, handler) = dump(",.$(#");
        assert_eq!(
            lines,
            vec!["COMMA , null", "DOT . null", "LEFT_PAREN ( null", "EOF  null"]
        );
        let rendered: Vec<String> = handler
            .diagnostics()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(
            rendered,
            vec![
                "[line 1] Error: Unexpected character: $",
                "[line 1] Error: Unexpected character: #",
            ]
        );
    }

    #[test]
    fn test_expression() {
        let (lines, _) = dump("(1 + 2.5) * \"x\" <= nil");
        assert_eq!(
            lines,
            vec![
                "LEFT_PAREN ( null",
                "NUMBER 1 1",
                "PLUS + null",
                "NUMBER 2.5 2.5",
                "RIGHT_PAREN ) null",
                "STAR * null",
                "STRING \"x\" \"x\"",
                "LESS_EQUAL <= null",
                "NIL nil null",
                "EOF  null",
            ]
        );
    }
}
