//! Core traits shared by the numeth engines.
//!
//! - [`Observer`] — receives solver events and optionally returns control actions
//! - [`ScalarFunction`], [`Differentiable`], [`FixedPointForm`] — capabilities
//!   a root finder needs from the function it works on
//! - [`Functions`] — adapts plain closures to those capabilities

mod function;
mod observer;

pub use function::{Differentiable, FixedPointForm, Functions, ScalarFunction};
pub use observer::Observer;
