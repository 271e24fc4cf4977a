use std::{fmt, time::Duration};

use super::iterate::Estimate;

/// Indicates how a root search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The error measure dropped to `tol` or below.
    Converged,
    /// Reached `max_iters` with the error still above `tol`.
    MaxIters,
    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Status::Converged => "converged",
            Status::MaxIters => "maximum iterations reached",
            Status::StoppedByObserver => "stopped by observer",
        })
    }
}

/// The result of a root search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,
    /// Latest estimate of the root.
    pub x: f64,
    /// Function value at `x`.
    pub fx: f64,
    /// Error measure of the latest iteration.
    pub error: f64,
    /// Number of completed iterations.
    pub iters: usize,
    /// Wall-clock time spent iterating.
    pub elapsed: Duration,
}

impl Solution {
    pub(super) fn from_estimate(
        estimate: Estimate,
        status: Status,
        iters: usize,
        elapsed: Duration,
    ) -> Self {
        Self {
            status,
            x: estimate.x,
            fx: estimate.fx,
            error: estimate.error,
            iters,
            elapsed,
        }
    }
}
