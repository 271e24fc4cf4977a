/// Control actions an observer can return to a root finder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop iterating and return the latest estimate.
    StopEarly,
}
