//! Postfix expression evaluation
//!
//! Runs a [`PostfixExpr`] left to right against an operand stack. Numbers
//! push; operators pop their right operand first, then their left, and push
//! the result. A well-formed expression leaves exactly one value behind.

use crate::eval::errors::EvalError;
use crate::eval::ops;
use crate::parser::lexer::BinOp;
use crate::parser::shunting::{PostfixExpr, PostfixToken};

/// Evaluate a postfix expression.
///
/// Fails with [`EvalError::InsufficientOperands`] when operator and operand
/// counts do not line up, and [`EvalError::DivisionByZero`] when `/` sees a
/// zero right operand. The expression is not consumed; evaluating it again
/// gives the same result.
pub fn evaluate(expr: &PostfixExpr) -> Result<f64, EvalError> {
    let mut operands: Vec<f64> = Vec::new();

    for token in expr.tokens() {
        match *token {
            PostfixToken::Number(value) => operands.push(value),
            PostfixToken::Op(op) => {
                // The first pop is the right operand
                let right =
                    operands.pop().ok_or(EvalError::InsufficientOperands)?;
                let left =
                    operands.pop().ok_or(EvalError::InsufficientOperands)?;
                operands.push(apply(op, left, right)?);
            }
        }
    }

    let value = operands.pop().ok_or(EvalError::InsufficientOperands)?;
    if !operands.is_empty() {
        // Leftover operands mean the expression was missing operators
        return Err(EvalError::InsufficientOperands);
    }

    Ok(value)
}

fn apply(op: BinOp, left: f64, right: f64) -> Result<f64, EvalError> {
    match op {
        BinOp::Add => Ok(ops::add(left, right)),
        BinOp::Sub => Ok(ops::subtract(left, right)),
        BinOp::Mul => Ok(ops::multiply(left, right)),
        BinOp::Div => {
            if right == 0.0 {
                return Err(EvalError::DivisionByZero);
            }
            Ok(ops::divide(left, right))
        }
    }
}
