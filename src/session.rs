//! Calculator session state
//!
//! A [`Session`] owns everything a running calculator accumulates: the
//! [`History`] of menu operations and a [`Transcript`] of rendered output
//! lines (what the output pane shows). The TUI and the one-shot CLI mode
//! both drive the calculator through this type, so nothing here is global.

use crate::eval::errors::{EvalError, OpError};
use crate::eval::ops::Operation;
use crate::eval::postfix::evaluate;
use crate::history::{History, Record};
use crate::parser::shunting::{to_postfix, ParseError, PostfixExpr};
use std::fmt;

/// Error from evaluating an infix expression end to end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExprError {
    Parse(ParseError),
    Eval(EvalError),
}

impl fmt::Display for ExprError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExprError::Parse(err) => write!(f, "{}", err),
            ExprError::Eval(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ExprError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExprError::Parse(err) => Some(err),
            ExprError::Eval(err) => Some(err),
        }
    }
}

impl From<ParseError> for ExprError {
    fn from(err: ParseError) -> Self {
        ExprError::Parse(err)
    }
}

impl From<EvalError> for ExprError {
    fn from(err: EvalError) -> Self {
        ExprError::Eval(err)
    }
}

/// Result of a successful expression evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub postfix: PostfixExpr,
    pub value: f64,
}

/// Accumulated output lines for the session output pane.
#[derive(Debug, Clone)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    pub fn new() -> Self {
        Transcript { lines: Vec::new() }
    }

    /// Append one output line.
    pub fn push(&mut self, line: String) {
        self.lines.push(line);
    }

    /// All lines, oldest first.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

/// A running calculator session.
pub struct Session {
    history: History,
    transcript: Transcript,
}

impl Session {
    /// Start a session with no prior history.
    pub fn new() -> Self {
        Session {
            history: History::new(),
            transcript: Transcript::new(),
        }
    }

    /// Start a session over previously saved history.
    pub fn with_history(history: History) -> Self {
        Session {
            history,
            transcript: Transcript::new(),
        }
    }

    /// Run a menu operation, record it, and append a transcript line.
    ///
    /// A failed operation is reported to the caller and recorded nowhere.
    pub fn apply(
        &mut self,
        op: Operation,
        lhs: f64,
        rhs: f64,
    ) -> Result<f64, OpError> {
        let result = op.apply(lhs, rhs)?;
        let record = Record {
            lhs,
            rhs,
            result,
            op,
        };

        self.transcript.push(record.to_string());
        self.history.push(record);

        Ok(result)
    }

    /// Evaluate an infix expression and append transcript lines echoing the
    /// input, its postfix form and the value.
    ///
    /// Expression evaluations appear in the transcript only; the history
    /// file format has no way to carry them.
    pub fn eval_expression(
        &mut self,
        expr: &str,
    ) -> Result<Evaluation, ExprError> {
        let postfix = to_postfix(expr)?;
        let value = evaluate(&postfix)?;

        self.transcript.push(format!("> {}", expr.trim()));
        self.transcript.push(format!("  postfix: {}", postfix));
        self.transcript.push(format!("  = {}", value));

        Ok(Evaluation { postfix, value })
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut History {
        &mut self.history
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_records_history_and_transcript() {
        let mut session = Session::new();
        let result = session.apply(Operation::Add, 3.0, 4.0).unwrap();

        assert_eq!(result, 7.0);
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.history().records()[0].result, 7.0);
        assert_eq!(session.transcript().lines(), ["3 + 4 = 7"]);
    }

    #[test]
    fn test_failed_apply_records_nothing() {
        let mut session = Session::new();
        let err = session.apply(Operation::Divide, 1.0, 0.0).unwrap_err();

        assert_eq!(err, OpError::DivisionByZero);
        assert!(session.history().is_empty());
        assert!(session.transcript().is_empty());
    }

    #[test]
    fn test_square_root_records_zero_rhs() {
        let mut session = Session::new();
        session.apply(Operation::SquareRoot, 9.0, 0.0).unwrap();

        let record = session.history().records()[0];
        assert_eq!(record.rhs, 0.0);
        assert_eq!(record.result, 3.0);
    }

    #[test]
    fn test_eval_expression_transcript() {
        let mut session = Session::new();
        let evaluation = session.eval_expression("3 + 4 * 2").unwrap();

        assert_eq!(evaluation.value, 11.0);
        assert_eq!(evaluation.postfix.to_string(), "3 4 2 * +");
        assert_eq!(
            session.transcript().lines(),
            ["> 3 + 4 * 2", "  postfix: 3 4 2 * +", "  = 11"]
        );
        // Expressions never touch the persistent history
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_eval_expression_error_wrapping() {
        let mut session = Session::new();

        let err = session.eval_expression("(1 + 2").unwrap_err();
        assert_eq!(err, ExprError::Parse(ParseError::MismatchedParentheses));

        let err = session.eval_expression("+").unwrap_err();
        assert_eq!(err, ExprError::Eval(EvalError::InsufficientOperands));

        assert!(session.transcript().is_empty());
    }
}
