//! Error types for the transform engine.
//!
//! Only precondition failures are errors. An unmatched pattern inside a
//! transform is *not* an error: the sub-expression passes through unchanged
//! (see the crate docs), so callers can detect it by looking for residual
//! occurrences of the input variable.

use sig_ast::AstError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A precondition on the call arguments failed.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Registry dispatch to a name nothing was registered under.
    #[error("unknown function: {0}")]
    UnknownFunction(String),

    /// Registry dispatch with the wrong number of arguments.
    #[error("{name} expects {expected} argument(s), got {got}")]
    BadArity {
        name: String,
        expected: usize,
        got: usize,
    },

    #[error(transparent)]
    Ast(#[from] AstError),
}
