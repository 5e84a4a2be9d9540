//! Literal values carried by tokens.

use std::fmt;

/// The value payload of a token.
///
/// Every token carries exactly one literal. Punctuation, identifiers and
/// keywords carry [`Literal::Nil`]; string and number tokens carry their
/// decoded value.
///
/// # Examples
///
/// ```
/// use lox_lex::Literal;
///
/// assert_eq!(Literal::Number(1234.0).to_string(), "1234");
/// assert_eq!(Literal::Number(0.5).to_string(), "0.5");
/// assert_eq!(Literal::from("hi").to_string(), "\"hi\"");
/// assert_eq!(Literal::Nil.to_string(), "null");
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Literal {
    /// Text between the quotes of a string token
    String(String),
    /// Numeric value of a number token
    Number(f64),
    /// `true` or `false`
    Boolean(bool),
    /// No value
    #[default]
    Nil,
}

impl Literal {
    /// Name of the value's type, as used in runtime error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Literal::String(_) => "string",
            Literal::Number(_) => "number",
            Literal::Boolean(_) => "boolean",
            Literal::Nil => "nil",
        }
    }

    /// Returns the number if this is a [`Literal::Number`]
    #[inline]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Literal::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::String(s) => write!(f, "{:?}", s),
            // Display for f64 is the shortest round-trippable form and drops
            // a zero fraction: 1234.0 -> "1234".
            Literal::Number(n) => write!(f, "{}", n),
            Literal::Boolean(b) => write!(f, "{}", b),
            Literal::Nil => f.write_str("null"),
        }
    }
}

impl From<f64> for Literal {
    fn from(value: f64) -> Self {
        Literal::Number(value)
    }
}

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        Literal::Boolean(value)
    }
}

impl From<String> for Literal {
    fn from(value: String) -> Self {
        Literal::String(value)
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Literal::String(value.to_string())
    }
}
