//! Expression node model and algebraic combinators.
//!
//! This crate is the symbolic substrate the transform engine rewrites over:
//! immutable `multiplier * base^power` nodes, normalizing arithmetic
//! combinators, expansion, decomposition into additive terms and
//! multiplicative factors, substitution, and a small differentiator.

pub mod arith;
pub mod calculus;
pub mod display;
pub mod error;
pub mod expand;
pub mod expression;
pub mod ordering;
pub mod substitute;

pub use arith::{add, div, mul, neg, pow, sub};
pub use calculus::diff;
pub use error::AstError;
pub use expand::expand;
pub use expression::{Constant, Expr, Kind};
pub use substitute::substitute;
