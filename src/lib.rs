//! # Introduction
//!
//! Tally is a scientific terminal calculator. Menu operations cover basic
//! arithmetic plus power, modulo and square root; an expression mode converts
//! infix input to postfix with the shunting yard algorithm and evaluates the
//! postfix form with an operand stack. Finished calculations land in a
//! history that persists across runs, all driven through a terminal UI built
//! with [ratatui](https://docs.rs/ratatui).
//!
//! ## Expression pipeline
//!
//! ```text
//! Input line → Lexer → Shunting yard → PostfixExpr → Evaluator → f64
//! ```
//!
//! 1. [`parser`]: tokenises the input and reorders it into postfix.
//! 2. [`eval`]: evaluates postfix expressions and applies menu operations.
//! 3. [`history`]: persisted calculation records and their on-disk format.
//! 4. [`session`]: ties evaluation, history and the output transcript together.
//! 5. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! ## Supported grammar
//!
//! Numbers: non-negative decimal literals with at most one decimal point.
//! Operators: `+`, `-`, `*`, `/` with the usual precedence, plus parentheses.
//! Power, modulo and square root are menu operations, not expression syntax.

pub mod eval;
pub mod history;
pub mod parser;
pub mod session;
pub mod ui;
