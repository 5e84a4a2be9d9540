//! Expression tree.

use std::fmt;

use lox_lex::{Literal, Token};

/// An expression node.
///
/// The set of node kinds is closed; code that walks the tree matches on it
/// exhaustively instead of dispatching through a visitor.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// A constant value
    Literal(Literal),

    /// An infix operation
    Binary {
        /// Left operand
        left: Box<Expr>,
        /// Operator token, kept whole so errors can cite its lexeme and line
        operator: Token,
        /// Right operand
        right: Box<Expr>,
    },
}

impl Expr {
    /// Creates a literal expression.
    pub fn literal(value: impl Into<Literal>) -> Self {
        Expr::Literal(value.into())
    }

    /// Creates a binary expression.
    pub fn binary(left: Expr, operator: Token, right: Expr) -> Self {
        Expr::Binary {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }
}

impl From<Literal> for Expr {
    fn from(value: Literal) -> Self {
        Expr::Literal(value)
    }
}

/// Renders the tree in parenthesized prefix form, e.g. `(* (+ 1 2) 3)`.
///
/// String literals print without quotes and `nil` prints as `nil`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal(Literal::String(s)) => f.write_str(s),
            Expr::Literal(Literal::Nil) => f.write_str("nil"),
            Expr::Literal(value) => write!(f, "{}", value),
            Expr::Binary {
                left,
                operator,
                right,
            } => write!(f, "({} {} {})", operator.lexeme(), left, right),
        }
    }
}
