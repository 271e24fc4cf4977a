use thiserror::Error;

use super::{BracketError, InputError};

/// Errors that abort a root search.
///
/// Hitting `max_iters` is not an error; it ends with
/// [`Status::MaxIters`](super::Status::MaxIters).
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),

    #[error("invalid interval: {0}")]
    InvalidBracket(#[from] BracketError),

    #[error("derivative near zero at x = {x}")]
    DerivativeNearZero { x: f64 },

    #[error("denominator near zero between {left} and {right}")]
    DenominatorNearZero { left: f64, right: f64 },

    #[error("non-finite estimate {x} at iteration {iter}")]
    NonFiniteEstimate { iter: usize, x: f64 },
}
