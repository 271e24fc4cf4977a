//! The iteration loop shared by every root-finding method.

use std::time::Instant;

use numeth_core::Observer;

use super::{Action, Error, Event, RootInput, Solution, Status};

/// Divisors below this magnitude abort Newton, secant and regula falsi.
pub const MIN_DIVISOR: f64 = 1e-12;

/// One point of a root search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Estimate {
    pub(super) x: f64,
    pub(super) fx: f64,
    pub(super) error: f64,
}

/// A root-finding method reduced to its update rule.
pub(super) trait Iteration {
    /// Estimate before the first step.
    ///
    /// Its `error` decides whether the loop runs at all; methods without a
    /// meaningful starting error report infinity.
    fn start(&self) -> Estimate;

    /// Computes the next estimate and advances the method state.
    fn step(&mut self) -> Result<Estimate, Error>;
}

/// Runs `method` while `error > tol` and fewer than `max_iters` steps were
/// taken, reporting each step to the observer.
///
/// A non-finite `x` or `f(x)` aborts the run before it is reported.
pub(super) fn iterate<I, Obs>(
    mut method: I,
    input: &RootInput,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    I: Iteration,
    Obs: Observer<Event, Action>,
{
    let start = Instant::now();
    let mut latest = method.start();
    let mut iter = 0;

    while latest.error > input.tol && iter < input.max_iters {
        let next = method.step()?;
        iter += 1;

        if !next.x.is_finite() || !next.fx.is_finite() {
            log::warn!("iteration {iter}: non-finite estimate x = {}", next.x);
            return Err(Error::NonFiniteEstimate { iter, x: next.x });
        }
        latest = next;
        log::debug!(
            "iteration {iter}: x = {:.8}, f(x) = {:.8e}, error = {:.3e}",
            latest.x,
            latest.fx,
            latest.error
        );

        let event = Event {
            iter,
            x: latest.x,
            fx: latest.fx,
            error: latest.error,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution::from_estimate(
                latest,
                Status::StoppedByObserver,
                iter,
                start.elapsed(),
            ));
        }
    }

    let status = if latest.error > input.tol {
        log::warn!("no convergence after {iter} iterations (error = {:e})", latest.error);
        Status::MaxIters
    } else {
        log::info!("converged in {iter} iterations: x = {}", latest.x);
        Status::Converged
    };

    Ok(Solution::from_estimate(latest, status, iter, start.elapsed()))
}
