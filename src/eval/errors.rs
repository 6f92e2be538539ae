//! Evaluation error types
//!
//! All errors here are terminal for the current input: the caller reports
//! them and discards the attempt. [`EvalError`] covers postfix evaluation,
//! [`OpError`] covers the guarded menu operations.

use std::fmt;

/// Errors raised while evaluating a postfix expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EvalError {
    /// An operator had fewer than two operands, or operands were left over
    /// when evaluation finished.
    InsufficientOperands,

    /// Division with a zero right operand.
    DivisionByZero,
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::InsufficientOperands => {
                write!(
                    f,
                    "Malformed expression: operator and operand counts do not match"
                )
            }
            EvalError::DivisionByZero => write!(f, "Division by zero"),
        }
    }
}

impl std::error::Error for EvalError {}

/// Errors raised by the guarded menu operations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OpError {
    /// Division with a zero divisor.
    DivisionByZero,

    /// Modulo with a zero divisor.
    ModuloByZero,

    /// Square root of a negative number.
    NegativeSquareRoot { value: f64 },
}

impl fmt::Display for OpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpError::DivisionByZero => write!(f, "Cannot divide by zero"),
            OpError::ModuloByZero => write!(f, "Cannot take modulo by zero"),
            OpError::NegativeSquareRoot { value } => {
                write!(
                    f,
                    "Cannot take the square root of negative number {}",
                    value
                )
            }
        }
    }
}

impl std::error::Error for OpError {}
