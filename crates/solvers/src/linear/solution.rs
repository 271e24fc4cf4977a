use std::time::Duration;

use ndarray::Array1;

use super::{Status, StepTrace};

/// The result of a linear solve.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Solution vector; `None` when the solve failed.
    pub x: Option<Array1<f64>>,
    /// Wall-clock time spent inside the solver.
    pub elapsed: Duration,
    /// Outcome classification, always present.
    pub status: Status,
    /// Recorded steps, present only when requested.
    pub steps: Option<StepTrace>,
}
