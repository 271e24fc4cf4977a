use numeth_core::Observer;

use crate::traits::{CanStopEarly, HasError};

/// Stops a search once the error has failed to improve for `patience`
/// consecutive events.
///
/// An event counts as an improvement when its error is below
/// `factor` times the best error seen so far. Non-finite errors never
/// improve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StallGuard {
    patience: usize,
    factor: f64,
    best: f64,
    stalled: usize,
}

impl StallGuard {
    /// Creates a guard that requires any strict improvement.
    #[must_use]
    pub fn new(patience: usize) -> Self {
        Self::with_factor(patience, 1.0)
    }

    /// Creates a guard that requires the error to shrink below
    /// `factor · best`.
    #[must_use]
    pub fn with_factor(patience: usize, factor: f64) -> Self {
        Self {
            patience,
            factor,
            best: f64::INFINITY,
            stalled: 0,
        }
    }

    /// Number of consecutive events without improvement.
    #[must_use]
    pub fn stalled(&self) -> usize {
        self.stalled
    }
}

impl<E, A> Observer<E, A> for StallGuard
where
    E: HasError,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        let error = event.error();
        if error.is_finite() && (self.best.is_infinite() || error < self.factor * self.best) {
            self.best = error;
            self.stalled = 0;
            return None;
        }

        self.stalled += 1;
        if self.stalled >= self.patience {
            log::warn!(
                "error has not improved for {} iterations (best {:e}); stopping",
                self.stalled,
                self.best
            );
            return Some(A::stop_early());
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use numeth_core::Functions;
    use numeth_solvers::roots::{self, Action, Cubic, Method, RootInput, Status};

    #[test]
    fn stops_an_oscillating_fixed_point_iteration() {
        // phi(x) = 1 - x bounces between 0 and 1 with a constant error of 1.
        let bounce = Functions::new(|x: f64| 2.0 * x - 1.0)
            .with_derivative(|_| 2.0)
            .with_phi(|x: f64| 1.0 - x);

        let solution = roots::find_root(
            Method::FixedPoint,
            &bounce,
            &RootInput::default(),
            StallGuard::new(3),
        )
        .expect("should stop cleanly");

        assert_eq!(solution.status, Status::StoppedByObserver);
        // The first event sets the best error; three more fail to beat it.
        assert_eq!(solution.iters, 4);
    }

    #[test]
    fn stopped_report_carries_a_warning() {
        let bounce = Functions::new(|x: f64| 2.0 * x - 1.0)
            .with_derivative(|_| 2.0)
            .with_phi(|x: f64| 1.0 - x);

        let trace = roots::run_observed(
            Method::FixedPoint,
            &bounce,
            &RootInput::default(),
            StallGuard::new(2),
        );
        let solution = trace.solution().expect("stops without aborting");

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert!(
            trace
                .warnings()
                .contains(&"Stopped by observer before reaching the tolerance.")
        );
        let text = trace.render();
        let warning = text
            .find("Stopped by observer")
            .expect("warning rendered");
        let time = text.find("Execution time").expect("time rendered");
        assert!(warning < time);
    }

    #[test]
    fn leaves_converging_runs_alone() {
        let solution = roots::find_root(
            Method::Bisection,
            &Cubic,
            &RootInput::default(),
            StallGuard::new(2),
        )
        .expect("should solve");

        assert_eq!(solution.status, Status::Converged);
    }

    #[test]
    fn factor_demands_real_progress() {
        let mut guard = StallGuard::with_factor(2, 0.5);
        let events = [1.0, 0.9, 0.8];
        let actions: Vec<Option<Action>> = events
            .iter()
            .enumerate()
            .map(|(index, &error)| {
                let event = roots::Event {
                    iter: index + 1,
                    x: 0.0,
                    fx: 0.0,
                    error,
                };
                guard.observe(&event)
            })
            .collect();

        assert_eq!(actions, vec![None, None, Some(Action::StopEarly)]);
        assert_eq!(guard.stalled(), 2);
    }
}
