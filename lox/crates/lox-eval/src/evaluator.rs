//! Tree-walking evaluator.

use lox_lex::{Literal, Token, TokenKind};

use crate::error::{EvalError, Result};
use crate::expr::Expr;

/// Evaluates expression trees.
///
/// Arithmetic follows IEEE 754 doubles, so `1 / 0` is infinity rather than
/// an error.
#[derive(Debug, Default, Clone, Copy)]
pub struct Evaluator;

impl Evaluator {
    /// Creates an evaluator.
    pub fn new() -> Self {
        Self
    }

    /// Evaluates `expr` to a value.
    ///
    /// Operands are evaluated left before right, and the first error found
    /// is returned.
    ///
    /// # Errors
    ///
    /// [`EvalError::UnknownOperator`] if a binary operator is not one of
    /// `+ - * /`, and [`EvalError::OperandType`] if an operand of one of
    /// those is not a number.
    pub fn evaluate(&self, expr: &Expr) -> Result<Literal> {
        match expr {
            Expr::Literal(value) => Ok(value.clone()),
            Expr::Binary {
                left,
                operator,
                right,
            } => {
                let left = self.evaluate(left)?;
                let right = self.evaluate(right)?;
                self.binary(operator, &left, &right)
            },
        }
    }

    fn binary(&self, operator: &Token, left: &Literal, right: &Literal) -> Result<Literal> {
        let apply: fn(f64, f64) -> f64 = match operator.kind() {
            TokenKind::Plus => |a: f64, b: f64| a + b,
            TokenKind::Minus => |a: f64, b: f64| a - b,
            TokenKind::Star => |a: f64, b: f64| a * b,
            TokenKind::Slash => |a: f64, b: f64| a / b,
            _ => {
                return Err(EvalError::UnknownOperator {
                    operator: operator.lexeme().to_string(),
                    line: operator.line(),
                })
            },
        };

        let left = number_operand(operator, left)?;
        let right = number_operand(operator, right)?;
        Ok(Literal::Number(apply(left, right)))
    }
}

fn number_operand(operator: &Token, value: &Literal) -> Result<f64> {
    value.as_number().ok_or_else(|| EvalError::OperandType {
        operator: operator.lexeme().to_string(),
        expected: "number",
        found: value.type_name(),
        line: operator.line(),
    })
}
