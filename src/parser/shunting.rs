//! Infix-to-postfix conversion
//!
//! This module implements the shunting-yard algorithm: numbers are emitted as
//! they appear, operators wait on a stack until an operator of lower
//! precedence (or a parenthesis boundary) forces them out. The result is a
//! [`PostfixExpr`] that the evaluator runs left to right with a plain operand
//! stack.

use crate::parser::lexer::{BinOp, LexError, Lexer, Token};
use std::fmt;

/// Parser error type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParseError {
    /// A `(` without a matching `)`, or a `)` without a matching `(`.
    MismatchedParentheses,

    /// The input contained a character outside the token set.
    UnrecognizedCharacter { ch: char, column: usize },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::MismatchedParentheses => {
                write!(f, "Mismatched parentheses in expression")
            }
            ParseError::UnrecognizedCharacter { ch, column } => {
                write!(
                    f,
                    "Unrecognized character '{}' at column {}",
                    ch, column
                )
            }
        }
    }
}

impl std::error::Error for ParseError {}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        ParseError::UnrecognizedCharacter {
            ch: err.ch,
            column: err.column,
        }
    }
}

/// A token in postfix order.
///
/// Parentheses never survive conversion, so the evaluator's input cannot
/// contain them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PostfixToken {
    Number(f64),
    Op(BinOp),
}

/// An expression in postfix (reverse Polish) order.
///
/// Produced by [`to_postfix`]. Evaluation does not consume it, so one
/// conversion can be evaluated any number of times. `Display` renders the
/// space-separated form, e.g. `3 4 2 * +`.
#[derive(Debug, Clone, PartialEq)]
pub struct PostfixExpr {
    tokens: Vec<PostfixToken>,
}

impl PostfixExpr {
    /// Build a postfix expression directly from tokens.
    pub fn new(tokens: Vec<PostfixToken>) -> Self {
        Self { tokens }
    }

    /// The tokens in evaluation order.
    pub fn tokens(&self) -> &[PostfixToken] {
        &self.tokens
    }
}

impl fmt::Display for PostfixExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            match token {
                PostfixToken::Number(n) => write!(f, "{}", n)?,
                PostfixToken::Op(op) => write!(f, "{}", op)?,
            }
        }
        Ok(())
    }
}

/// Entries held on the operator stack during conversion.
enum StackEntry {
    Op(BinOp),
    OpenParen,
}

/// Convert an infix expression string to postfix order.
///
/// Tokenizes the input, then runs the shunting yard over the token stream.
/// Fails with [`ParseError::UnrecognizedCharacter`] on the first bad input
/// character and [`ParseError::MismatchedParentheses`] on unbalanced parens.
pub fn to_postfix(expr: &str) -> Result<PostfixExpr, ParseError> {
    let mut lexer = Lexer::new(expr);
    let tokens = lexer.tokenize()?;

    let mut output = Vec::new();
    let mut stack: Vec<StackEntry> = Vec::new();

    for token in tokens {
        match token {
            Token::Number(value) => output.push(PostfixToken::Number(value)),
            Token::LeftParen => stack.push(StackEntry::OpenParen),
            Token::RightParen => {
                // Pop operators back to the matching open paren; the paren
                // pair itself is discarded
                loop {
                    match stack.pop() {
                        Some(StackEntry::Op(op)) => {
                            output.push(PostfixToken::Op(op));
                        }
                        Some(StackEntry::OpenParen) => break,
                        None => {
                            return Err(ParseError::MismatchedParentheses);
                        }
                    }
                }
            }
            Token::Op(op) => {
                // Equal precedence pops too, which keeps `-` and `/` chains
                // left associative
                while let Some(&StackEntry::Op(top)) = stack.last() {
                    if top.precedence() < op.precedence() {
                        break;
                    }
                    output.push(PostfixToken::Op(top));
                    stack.pop();
                }
                stack.push(StackEntry::Op(op));
            }
        }
    }

    // Flush what remains; an open paren here was never closed
    while let Some(entry) = stack.pop() {
        match entry {
            StackEntry::Op(op) => output.push(PostfixToken::Op(op)),
            StackEntry::OpenParen => {
                return Err(ParseError::MismatchedParentheses);
            }
        }
    }

    Ok(PostfixExpr::new(output))
}
