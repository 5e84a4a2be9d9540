//! lox-eval - Expression Tree and Evaluator for the Lox Programming Language
//!
//! This crate holds the expression stub a parser will build on: a closed
//! [`Expr`] tree of literals and binary operations, and an [`Evaluator`]
//! that reduces it to a [`Literal`] value.
//!
//! # Example Usage
//!
//! ```
//! use lox_eval::{Evaluator, Expr};
//! use lox_lex::{Literal, Token, TokenKind};
//!
//! let plus = Token::new(TokenKind::Plus, "+", Literal::Nil, 1);
//! let expr = Expr::binary(Expr::literal(1.0), plus, Expr::literal(2.0));
//!
//! assert_eq!(expr.to_string(), "(+ 1 2)");
//! assert_eq!(Evaluator::new().evaluate(&expr), Ok(Literal::Number(3.0)));
//! ```
//!
//! # Errors
//!
//! Evaluation never panics. A non-number operand or an operator with no
//! arithmetic meaning comes back as an [`EvalError`].

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod evaluator;
pub mod expr;

pub use error::{EvalError, Result};
pub use evaluator::Evaluator;
pub use expr::Expr;
pub use lox_lex::Literal;
