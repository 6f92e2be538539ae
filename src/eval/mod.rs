//! Expression evaluation and arithmetic
//!
//! - [`postfix`]: postfix (reverse Polish) evaluation over an operand stack
//! - [`ops`]: arithmetic primitives and the guarded menu [`Operation`]s
//! - [`errors`]: evaluation and operation error types
//!
//! [`Operation`]: ops::Operation

pub mod errors;
pub mod ops;
pub mod postfix;

pub use errors::{EvalError, OpError};
pub use ops::Operation;
pub use postfix::evaluate;
