//! Lexer (tokenizer) for infix arithmetic expressions
//!
//! Converts an expression string into a flat [`Token`] stream consumed by the
//! infix-to-postfix converter. Whitespace separates tokens and is otherwise
//! ignored; any character outside the supported set aborts the scan.

use std::fmt;

/// Binary arithmetic operators recognized inside expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinOp {
    /// Binding strength used by the converter.
    ///
    /// `*` and `/` bind tighter than `+` and `-`; equal precedence resolves
    /// left to right.
    pub fn precedence(self) -> u8 {
        match self {
            BinOp::Mul | BinOp::Div => 2,
            BinOp::Add | BinOp::Sub => 1,
        }
    }

    /// The character this operator is written as.
    pub fn symbol(self) -> char {
        match self {
            BinOp::Add => '+',
            BinOp::Sub => '-',
            BinOp::Mul => '*',
            BinOp::Div => '/',
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// All token variants produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    Number(f64),
    Op(BinOp),
    LeftParen,
    RightParen,
}

/// Lexer error type: the input contained a character outside the token set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LexError {
    pub ch: char,
    pub column: usize,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unrecognized character '{}' at column {}",
            self.ch, self.column
        )
    }
}

impl std::error::Error for LexError {}

/// Lexer for infix expressions.
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    column: usize,
}

impl Lexer {
    /// Create a new lexer for the given expression string.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            column: 1,
        }
    }

    /// Tokenize the entire input.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        loop {
            self.skip_whitespace();

            let column = self.column;
            let ch = match self.advance() {
                Some(ch) => ch,
                None => break,
            };

            let token = match ch {
                '0'..='9' => self.number_literal(ch)?,
                // A dot starts a number only when a digit follows (".5")
                '.' if self.peek().is_some_and(|c| c.is_ascii_digit()) => {
                    self.number_literal(ch)?
                }
                '+' => Token::Op(BinOp::Add),
                '-' => Token::Op(BinOp::Sub),
                '*' => Token::Op(BinOp::Mul),
                '/' => Token::Op(BinOp::Div),
                '(' => Token::LeftParen,
                ')' => Token::RightParen,
                _ => return Err(LexError { ch, column }),
            };

            tokens.push(token);
        }

        Ok(tokens)
    }

    /// Scan a numeric literal: digits with at most one decimal point.
    ///
    /// A second decimal point ends the literal rather than joining it, so
    /// `1.2.3` scans as `1.2` followed by `.3`.
    fn number_literal(&mut self, first_char: char) -> Result<Token, LexError> {
        let column = self.column - 1;
        let mut num_str = String::new();
        num_str.push(first_char);
        let mut seen_dot = first_char == '.';

        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() {
                num_str.push(ch);
                self.advance();
            } else if ch == '.' && !seen_dot {
                seen_dot = true;
                num_str.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        // Digit/dot runs are always a valid float literal
        let value = num_str.parse::<f64>().map_err(|_| LexError {
            ch: first_char,
            column,
        })?;

        Ok(Token::Number(value))
    }

    /// Skip whitespace between tokens.
    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(|c| c.is_whitespace()) {
            self.advance();
        }
    }

    /// Peek at current character without consuming.
    fn peek(&self) -> Option<char> {
        if self.position < self.input.len() {
            Some(self.input[self.position])
        } else {
            None
        }
    }

    /// Advance to next character.
    fn advance(&mut self) -> Option<char> {
        if self.position >= self.input.len() {
            return None;
        }

        let ch = self.input[self.position];
        self.position += 1;
        self.column += 1;

        Some(ch)
    }
}
