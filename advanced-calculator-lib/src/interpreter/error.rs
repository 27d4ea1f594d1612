//! Errors raised while evaluating an expression.

use crate::interpreter::token::Token;
use std::fmt;
use std::fmt::Formatter;
use thiserror::Error;

/// What the evaluator was waiting for when it met an unexpected token.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Expected {
    Number,
    Operator,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Number => write!(f, "a number"),
            Expected::Operator => write!(f, "an operator"),
        }
    }
}

/// Errors from expression evaluation. None of them leave a partial result behind.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvaluationError {
    #[error("Empty expression.")]
    EmptyExpression,

    #[error("Expected {expected}, got '{found}'.")]
    MalformedExpression { expected: Expected, found: Token },

    #[error("Expression ends with an operator.")]
    TrailingOperator,

    #[error("No numbers found.")]
    NoOperands,

    #[error("Division by zero.")]
    DivisionByZero,

    #[error("Modulus by zero.")]
    ModulusByZero,
}

impl EvaluationError {
    /// Whether the error came from the arithmetic itself rather than the shape of the expression.
    pub fn is_arithmetic(&self) -> bool {
        matches!(
            self,
            EvaluationError::DivisionByZero | EvaluationError::ModulusByZero
        )
    }
}
