//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, enabling
//! observers to work generically across different solvers.
//!
//! # Event traits
//!
//! - [`HasIteration`] — events numbered by iteration
//! - [`HasEstimate`] — events that carry the current estimate
//! - [`HasError`] — events that carry an error measure
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use numeth_core::Observer;
//! use numeth_observers::traits::{CanStopEarly, HasError};
//!
//! struct GoodEnough {
//!     tolerance: f64,
//! }
//!
//! impl<E: HasError, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.error() < self.tolerance).then(A::stop_early)
//!     }
//! }
//! ```

use numeth_solvers::roots;

/// An event numbered by iteration.
pub trait HasIteration {
    /// Returns the 1-based iteration number.
    fn iter(&self) -> usize;
}

/// An event that carries the current estimate.
pub trait HasEstimate {
    /// Returns the estimate.
    fn estimate(&self) -> f64;

    /// Returns the function value at the estimate.
    fn value(&self) -> f64;
}

/// An event that carries an error measure.
pub trait HasError {
    /// Returns the error measure; smaller is closer to convergence.
    fn error(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl HasIteration for roots::Event {
    fn iter(&self) -> usize {
        self.iter
    }
}

impl HasEstimate for roots::Event {
    fn estimate(&self) -> f64 {
        self.x
    }

    fn value(&self) -> f64 {
        self.fx
    }
}

impl HasError for roots::Event {
    fn error(&self) -> f64 {
        self.error
    }
}

impl CanStopEarly for roots::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
