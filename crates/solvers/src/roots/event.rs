/// Iteration event emitted once per completed iteration.
///
/// The values are exactly the ones written to the trace line for `iter`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter, 1-based.
    pub iter: usize,
    /// New estimate of the root.
    pub x: f64,
    /// Function value at `x`.
    pub fx: f64,
    /// Method-specific error measure for this iteration.
    pub error: f64,
}
