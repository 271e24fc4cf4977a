//! Root finders for scalar equations `f(x) = 0`.
//!
//! # Methods
//!
//! | Id | [`Method`] | Needs | Error measure |
//! |----|------------|-------|---------------|
//! | 1 | [`bisection`] | `f`, sign change on `[a, b]` | half-width of the bracket |
//! | 2 | [`fixed_point`] | `phi`, start `x0` | `\|x_{k+1} − x_k\|` |
//! | 3 | [`newton`] | `f`, `f'`, start `x0` | `\|x_{k+1} − x_k\|` |
//! | 4 | [`secant`] | `f`, starts `x0`, `x1` | `\|x_{k+1} − x_k\|` |
//! | 5 | [`regula_falsi`] | `f`, sign change on `[a, b]` | `\|f(x_k)\|` |
//!
//! Every method iterates while `error > tol` and fewer than `max_iters`
//! iterations have run. Reaching the cap ends with [`Status::MaxIters`], not
//! an error.
//!
//! # Observer Events
//!
//! Each completed iteration emits one [`Event`] carrying the iteration
//! number, the estimate, `f` at the estimate and the error measure.
//! Returning [`Action::StopEarly`] ends the search with
//! [`Status::StoppedByObserver`].
//!
//! [`run`] records the events into a [`RootTrace`], whose
//! [`render`](RootTrace::render) method produces the text report;
//! [`run_observed`] does the same while forwarding each event to an observer.
//!
//! # Example
//!
//! ```
//! use numeth_solvers::roots::{self, Cubic, Method, RootInput};
//!
//! let trace = roots::run(Method::Newton, &Cubic, &RootInput::default());
//!
//! assert!(trace.converged());
//! assert!(trace.render().starts_with("Selected method: NEWTON-RAPHSON"));
//! ```

pub mod bisection;
pub mod fixed_point;
pub mod newton;
pub mod regula_falsi;
pub mod secant;

mod action;
mod bracket;
mod cubic;
mod error;
mod event;
mod input;
mod iterate;
mod method;
mod solution;
mod trace;


pub use action::Action;
pub use bracket::BracketError;
pub use cubic::Cubic;
pub use error::Error;
pub use event::Event;
pub use input::{InputError, RootInput};
pub use iterate::MIN_DIVISOR;
pub use method::{Method, UnknownMethod};
pub use solution::{Solution, Status};
pub use trace::{Record, RootTrace};

use numeth_core::{Differentiable, FixedPointForm, Observer};

/// Finds a root of `function` with the selected method.
///
/// The dispatch needs every capability a method might use, so `function`
/// must provide both `f'` and `phi`. Call the per-method `solve` functions
/// directly for functions that only provide some of them.
///
/// # Errors
///
/// Returns an error if the input is invalid or the method aborts; see
/// [`Error`].
pub fn find_root<F, Obs>(
    method: Method,
    function: &F,
    input: &RootInput,
    observer: Obs,
) -> Result<Solution, Error>
where
    F: Differentiable + FixedPointForm,
    Obs: Observer<Event, Action>,
{
    log::debug!("{method}: starting with {input:?}");
    let result = match method {
        Method::Bisection => bisection::solve(function, input, observer),
        Method::FixedPoint => fixed_point::solve(function, input, observer),
        Method::Newton => newton::solve(function, input, observer),
        Method::Secant => secant::solve(function, input, observer),
        Method::RegulaFalsi => regula_falsi::solve(function, input, observer),
    };
    if let Err(error) = &result {
        log::warn!("{method}: aborted: {error}");
    }
    result
}

/// Runs the selected method and records every iteration into a trace.
#[must_use]
pub fn run<F>(method: Method, function: &F, input: &RootInput) -> RootTrace
where
    F: Differentiable + FixedPointForm,
{
    run_observed(method, function, input, ())
}

/// Like [`run`], but also forwards every event to `observer`.
///
/// The event is recorded before the observer sees it, so a stop requested by
/// the observer still leaves that iteration in the trace.
pub fn run_observed<F, Obs>(
    method: Method,
    function: &F,
    input: &RootInput,
    mut observer: Obs,
) -> RootTrace
where
    F: Differentiable + FixedPointForm,
    Obs: Observer<Event, Action>,
{
    let mut records = Vec::new();
    let recorder = |event: &Event| -> Option<Action> {
        records.push(Record {
            iter: event.iter,
            x: event.x,
            fx: event.fx,
            error: event.error,
        });
        observer.observe(event)
    };
    let outcome = find_root(method, function, input, recorder);
    RootTrace::new(method, *input, records, outcome)
}
