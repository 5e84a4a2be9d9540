//! Character classes recognised by the Lox lexer.
//!
//! Lox identifiers, numbers and whitespace are all ASCII. Any other character,
//! including non-ASCII letters, is reported as unexpected.

/// Checks if a character can start an identifier.
///
/// # Example
///
/// ```
/// use lox_lex::chars::is_ident_start;
///
/// assert!(is_ident_start('a'));
/// assert!(is_ident_start('_'));
/// assert!(!is_ident_start('α'));
/// assert!(!is_ident_start('1'));
/// ```
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Checks if a character can continue an identifier.
///
/// # Example
///
/// ```
/// use lox_lex::chars::is_ident_continue;
///
/// assert!(is_ident_continue('a'));
/// assert!(is_ident_continue('9'));
/// assert!(!is_ident_continue('-'));
/// ```
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Checks if a character is a decimal digit.
#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Checks if a character is insignificant whitespace.
///
/// Only space, tab, carriage return and newline count; form feeds and
/// Unicode spaces are unexpected characters.
#[inline]
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ident_start() {
        for c in ['a', 'z', 'A', 'Z', '_'] {
            assert!(is_ident_start(c), "{c:?}");
        }
        for c in ['0', '9', '-', ' ', 'é', '\0'] {
            assert!(!is_ident_start(c), "{c:?}");
        }
    }

    #[test]
    fn test_ident_continue() {
        for c in ['a', 'Z', '_', '0', '9'] {
            assert!(is_ident_continue(c), "{c:?}");
        }
        for c in ['.', '"', 'ß', '\n'] {
            assert!(!is_ident_continue(c), "{c:?}");
        }
    }

    #[test]
    fn test_digits_are_ascii_only() {
        assert!(is_digit('0'));
        assert!(is_digit('9'));
        assert!(!is_digit('٣'));
        assert!(!is_digit('a'));
    }

    #[test]
    fn test_whitespace() {
        for c in [' ', '\t', '\r', '\n'] {
            assert!(is_whitespace(c), "{c:?}");
        }
        for c in ['\u{0C}', '\u{A0}', '\u{2003}', 'x'] {
            assert!(!is_whitespace(c), "{c:?}");
        }
    }
}
