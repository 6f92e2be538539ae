//! Arithmetic operations
//!
//! The primitives are pure and unguarded, following IEEE float semantics
//! (`divide(x, 0.0)` is infinity). The checks the calculator actually wants
//! live in [`Operation::apply`], which is what the menu and session layers
//! call.

use crate::eval::errors::OpError;
use std::fmt;

/// Add two numbers.
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

/// Subtract the second number from the first.
pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

/// Multiply two numbers.
pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Divide the first number by the second.
pub fn divide(a: f64, b: f64) -> f64 {
    a / b
}

/// Raise the first number to the power of the second.
pub fn power(base: f64, exponent: f64) -> f64 {
    base.powf(exponent)
}

/// Square root.
pub fn square_root(x: f64) -> f64 {
    x.sqrt()
}

/// Floating-point remainder of the first number divided by the second.
pub fn modulo(a: f64, b: f64) -> f64 {
    a % b
}

/// The calculator's menu operations.
///
/// `SquareRoot` is unary; everything else is binary. Distinct from [`BinOp`],
/// which is the smaller operator set allowed inside expressions.
///
/// [`BinOp`]: crate::parser::lexer::BinOp
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    Modulo,
    SquareRoot,
}

impl Operation {
    /// All operations in menu order.
    pub const ALL: [Operation; 7] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::Power,
        Operation::Modulo,
        Operation::SquareRoot,
    ];

    /// Number of operands the operation takes.
    pub fn arity(self) -> usize {
        match self {
            Operation::SquareRoot => 1,
            _ => 2,
        }
    }

    /// Menu label.
    pub fn label(self) -> &'static str {
        match self {
            Operation::Add => "Addition",
            Operation::Subtract => "Subtraction",
            Operation::Multiply => "Multiplication",
            Operation::Divide => "Division",
            Operation::Power => "Power",
            Operation::Modulo => "Modulo",
            Operation::SquareRoot => "Square root",
        }
    }

    /// Symbol used when rendering a record, e.g. `7 % 3 = 1`.
    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
            Operation::Divide => "/",
            Operation::Power => "^",
            Operation::Modulo => "%",
            Operation::SquareRoot => "sqrt",
        }
    }

    /// Short tag stored in the history file.
    pub fn tag(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "sub",
            Operation::Multiply => "mul",
            Operation::Divide => "div",
            Operation::Power => "pow",
            Operation::Modulo => "mod",
            Operation::SquareRoot => "sqrt",
        }
    }

    /// Inverse of [`Operation::tag`], used when loading a history file.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "add" => Some(Operation::Add),
            "sub" => Some(Operation::Subtract),
            "mul" => Some(Operation::Multiply),
            "div" => Some(Operation::Divide),
            "pow" => Some(Operation::Power),
            "mod" => Some(Operation::Modulo),
            "sqrt" => Some(Operation::SquareRoot),
            _ => None,
        }
    }

    /// Run the operation with the calculator's guards.
    ///
    /// `rhs` is ignored for [`Operation::SquareRoot`].
    pub fn apply(self, lhs: f64, rhs: f64) -> Result<f64, OpError> {
        match self {
            Operation::Add => Ok(add(lhs, rhs)),
            Operation::Subtract => Ok(subtract(lhs, rhs)),
            Operation::Multiply => Ok(multiply(lhs, rhs)),
            Operation::Divide => {
                if rhs == 0.0 {
                    return Err(OpError::DivisionByZero);
                }
                Ok(divide(lhs, rhs))
            }
            Operation::Power => Ok(power(lhs, rhs)),
            Operation::Modulo => {
                if rhs == 0.0 {
                    return Err(OpError::ModuloByZero);
                }
                Ok(modulo(lhs, rhs))
            }
            Operation::SquareRoot => {
                if lhs < 0.0 {
                    return Err(OpError::NegativeSquareRoot { value: lhs });
                }
                Ok(square_root(lhs))
            }
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitives() {
        assert_eq!(add(2.0, 3.0), 5.0);
        assert_eq!(subtract(2.0, 3.0), -1.0);
        assert_eq!(multiply(4.0, 2.5), 10.0);
        assert_eq!(divide(9.0, 2.0), 4.5);
        assert_eq!(power(2.0, 10.0), 1024.0);
        assert_eq!(square_root(9.0), 3.0);
        assert_eq!(modulo(7.5, 2.0), 1.5);
    }

    #[test]
    fn test_unguarded_divide_follows_float_semantics() {
        assert!(divide(1.0, 0.0).is_infinite());
        assert!(modulo(1.0, 0.0).is_nan());
    }

    #[test]
    fn test_apply_guards_zero_divisors() {
        assert_eq!(
            Operation::Divide.apply(4.0, 0.0),
            Err(OpError::DivisionByZero)
        );
        assert_eq!(
            Operation::Modulo.apply(4.0, 0.0),
            Err(OpError::ModuloByZero)
        );
    }

    #[test]
    fn test_apply_guards_negative_square_root() {
        assert_eq!(
            Operation::SquareRoot.apply(-9.0, 0.0),
            Err(OpError::NegativeSquareRoot { value: -9.0 })
        );
    }

    #[test]
    fn test_square_root_ignores_rhs() {
        assert_eq!(Operation::SquareRoot.apply(16.0, 123.0), Ok(4.0));
    }

    #[test]
    fn test_tag_round_trip() {
        for op in Operation::ALL {
            assert_eq!(Operation::from_tag(op.tag()), Some(op));
        }
    }

    #[test]
    fn test_unknown_tag_rejected() {
        assert_eq!(Operation::from_tag("cbrt"), None);
    }
}
