//! Symbolic Fourier-transform rewriting engine.
//!
//! The core is [`fourier::fourier_transform`]: term rewriting over the
//! `sig_ast` expression tree against a table of known transform pairs and
//! the transform theorems (linearity, time shift, frequency shift,
//! modulation). Around it: a single-variable Taylor-series utility, a
//! placeholder Dirac-delta evaluator, and a [`registry::Registry`] exposing
//! all three as named callables.
//!
//! # Unmatched patterns
//!
//! Precondition violations raise [`error::EngineError::InvalidArgument`];
//! everything else is pass-through: an input shape with no rewrite rule
//! comes back unchanged, embedded in the otherwise-transformed result, and
//! is logged at `warn` level. Check the result for residual occurrences of
//! the input variable to detect a partial transform.

pub mod delta;
pub mod error;
pub mod fourier;
pub mod registry;
mod table;
pub mod taylor;

pub use error::EngineError;
pub use fourier::fourier_transform;
pub use registry::Registry;
pub use taylor::taylor_series;
