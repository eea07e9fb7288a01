//! Public error type for the arbor API.
//!
//! Wraps [`EvalError`] with diagnostic codes and help text so host
//! applications can render it with miette.

use arbor_core::evaluator::EvalError;

/// Error returned by [`eval`](crate::eval).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum Error {
    /// Integer overflow under `OverflowPolicy::Checked`.
    #[error("{0}")]
    #[diagnostic(
        code(arbor::overflow),
        help("use a wrapping or saturating overflow policy, or keep operands within i64")
    )]
    Overflow(EvalError),

    /// A resource limit was exceeded (e.g. recursion depth).
    #[error("{0}")]
    #[diagnostic(
        code(arbor::stack_overflow),
        help("raise max_depth, or evaluate with the work-list or auto strategy")
    )]
    ResourceExceeded(EvalError),
}

impl Error {
    /// The underlying evaluator error.
    pub fn eval_error(&self) -> &EvalError {
        match self {
            Error::Overflow(e) | Error::ResourceExceeded(e) => e,
        }
    }
}

impl From<EvalError> for Error {
    fn from(e: EvalError) -> Self {
        if e.is_resource_exceeded() {
            Error::ResourceExceeded(e)
        } else {
            Error::Overflow(e)
        }
    }
}
