//! Error types for sig_ast.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AstError {
    /// An operation the node model cannot express (non-integer exponent,
    /// underivable function, ...).
    #[error("unsupported operation: {0}")]
    Unsupported(String),

    /// Internal invariant violation.
    #[error("internal error: {0}")]
    InternalError(String),
}
