//! Evaluation errors.

use thiserror::Error;

/// An error raised while evaluating an expression.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    /// An operand had the wrong type for its operator.
    #[error("[line {line}] Operand of '{operator}' must be a {expected}, found {found}.")]
    OperandType {
        /// Operator lexeme
        operator: String,
        /// Type the operator requires
        expected: &'static str,
        /// Type the operand actually had
        found: &'static str,
        /// Line of the operator
        line: u32,
    },

    /// The operator has no meaning for binary evaluation.
    #[error("[line {line}] Unknown operator '{operator}'.")]
    UnknownOperator {
        /// Operator lexeme
        operator: String,
        /// Line of the operator
        line: u32,
    },
}

impl EvalError {
    /// The line of the operator the error points at.
    pub fn line(&self) -> u32 {
        match self {
            EvalError::OperandType { line, .. } | EvalError::UnknownOperator { line, .. } => *line,
        }
    }
}

/// Result type alias using EvalError.
pub type Result<T> = std::result::Result<T, EvalError>;
