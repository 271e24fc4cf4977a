//! Reusable observers for the numeth root finders.
//!
//! This crate provides [`Observer`] implementations and the capability traits
//! they are written against, so the same observer works with any event that
//! exposes the values it needs.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for events and actions
//!   ([`HasIteration`], [`HasEstimate`], [`HasError`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`LogObserver`] — logs every event through the `log` facade
//! - [`StallGuard`] — stops a search whose error stops improving
//! - [`Chain`] — feeds each event to two observers in turn
//!
//! [`Observer`]: numeth_core::Observer
//! [`HasIteration`]: traits::HasIteration
//! [`HasEstimate`]: traits::HasEstimate
//! [`HasError`]: traits::HasError
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod chain;
mod logger;
mod stall;

pub use chain::Chain;
pub use logger::LogObserver;
pub use stall::StallGuard;
