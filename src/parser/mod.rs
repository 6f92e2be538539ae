//! Infix expression parser
//!
//! This module turns an infix expression string into postfix order:
//! - [`lexer`]: Tokenization (expression text → tokens)
//! - [`shunting`]: Conversion (tokens → [`PostfixExpr`] via shunting yard)
//!
//! # Supported grammar
//!
//! Non-negative decimal literals (multi-digit, at most one decimal point),
//! the four binary operators `+ - * /`, and parentheses. No unary minus, no
//! functions, no variables; a negative left operand must be written as
//! `(0 - n)`.

pub mod lexer;
pub mod shunting;

pub use lexer::{BinOp, Lexer, Token};
pub use shunting::{to_postfix, ParseError, PostfixExpr, PostfixToken};
