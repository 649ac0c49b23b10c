use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("parse error: {0}")]
    Syntax(String),
    #[error("unconsumed input: {0}")]
    UnconsumedInput(String),
    /// The node model only carries integer powers.
    #[error("exponent must be an integer literal, got {0}")]
    NonIntegerExponent(String),
}
