//! Diagnostic codes for categorizing errors.
//!
//! Codes follow the format `E{number:04}`. The `1xxx` range belongs to the
//! scanner.

use std::fmt;

/// A unique code identifying a diagnostic message
///
/// # Examples
///
/// ```
/// use lox_util::diagnostic::DiagnosticCode;
///
/// assert_eq!(DiagnosticCode::E_LEXER_UNTERMINATED_STRING.to_string(), "E1002");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode(u32);

impl DiagnosticCode {
    /// E1001: Lexer - Unexpected character
    pub const E_LEXER_UNEXPECTED_CHAR: Self = Self(1001);
    /// E1002: Lexer - Unterminated string literal
    pub const E_LEXER_UNTERMINATED_STRING: Self = Self(1002);
    /// E1003: Lexer - Numeric text the number grammar accepted but `f64` did not
    pub const E_LEXER_INVALID_NUMBER: Self = Self(1003);
}

impl fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DiagnosticCode({})", self)
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.0)
    }
}
