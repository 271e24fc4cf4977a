//! Bisection: halve a sign-changing bracket until its half-width is small.

use numeth_core::{Observer, ScalarFunction};

use super::{
    Action, Error, Event, RootInput, Solution,
    bracket::Bracket,
    iterate::{Estimate, Iteration, iterate},
};

struct Bisection<'f, F> {
    f: &'f F,
    bracket: Bracket,
}

impl<F: ScalarFunction> Iteration for Bisection<'_, F> {
    fn start(&self) -> Estimate {
        let x = self.bracket.midpoint();
        Estimate {
            x,
            fx: self.f.value(x),
            error: self.bracket.half_width(),
        }
    }

    fn step(&mut self) -> Result<Estimate, Error> {
        // The error is the half-width before this step halves the bracket.
        let error = self.bracket.half_width();
        let x = self.bracket.midpoint();
        let fx = self.f.value(x);
        self.bracket.split(x, fx);
        Ok(Estimate { x, fx, error })
    }
}

/// Finds a root of `f` in `[input.a, input.b]` by bisection.
///
/// Each iteration reports the midpoint and the half-width of the bracket it
/// came from, so the error shrinks by exactly half per step.
///
/// # Errors
///
/// Returns an error if the input is invalid, the interval does not bracket a
/// sign change, or an evaluation is non-finite.
pub fn solve<F, Obs>(f: &F, input: &RootInput, observer: Obs) -> Result<Solution, Error>
where
    F: ScalarFunction,
    Obs: Observer<Event, Action>,
{
    input.validate()?;
    let bracket = Bracket::new(f, input.a, input.b)?;
    iterate(Bisection { f, bracket }, input, observer)
}

/// Runs bisection without observation.
///
/// # Errors
///
/// Same as [`solve`].
pub fn solve_unobserved<F: ScalarFunction>(f: &F, input: &RootInput) -> Result<Solution, Error> {
    solve(f, input, ())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use numeth_core::Functions;

    use crate::roots::{BracketError, Cubic, Status};

    #[test]
    fn finds_cubic_root_in_unit_interval() {
        let solution = solve_unobserved(&Cubic, &RootInput::default()).expect("should solve");

        assert_eq!(solution.status, Status::Converged);
        assert!(solution.error <= 1e-6);
        assert!(solution.iters < 100);
        assert_relative_eq!(solution.x, 0.337_608_955_965_837_7, epsilon = 1e-6);
    }

    #[test]
    fn error_halves_each_iteration() {
        let mut errors = Vec::new();
        let observer = |event: &Event| -> Option<Action> {
            errors.push(event.error);
            None
        };
        let input = RootInput {
            max_iters: 4,
            ..RootInput::default()
        };

        solve(&Cubic, &input, observer).expect("should run");

        assert_eq!(errors, vec![0.5, 0.25, 0.125, 0.0625]);
    }

    #[test]
    fn first_midpoint_comes_from_the_input_bracket() {
        let mut first = None;
        let observer = |event: &Event| -> Option<Action> {
            first = Some(event.x);
            Some(Action::StopEarly)
        };

        let solution = solve(&Cubic, &RootInput::default(), observer).expect("should stop");

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(first, Some(0.5));
    }

    #[test]
    fn rejects_interval_without_sign_change() {
        let input = RootInput::default().with_bracket(1.0, 2.0);
        assert_eq!(
            solve_unobserved(&Cubic, &input),
            Err(Error::InvalidBracket(BracketError::NoSignChange))
        );
    }

    #[test]
    fn rejects_invalid_input() {
        let input = RootInput {
            tol: 0.0,
            ..RootInput::default()
        };
        assert!(matches!(
            solve_unobserved(&Cubic, &input),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn wide_tolerance_needs_no_iterations() {
        let line = Functions::new(|x: f64| x - 0.3);
        let input = RootInput {
            tol: 1.0,
            ..RootInput::default()
        };

        let solution = solve_unobserved(&line, &input).expect("should solve");

        assert_eq!(solution.status, Status::Converged);
        assert_eq!(solution.iters, 0);
        assert_relative_eq!(solution.x, 0.5);
    }

    #[test]
    fn hits_the_iteration_cap() {
        let input = RootInput {
            tol: 1e-15,
            max_iters: 10,
            ..RootInput::default()
        };

        let solution = solve_unobserved(&Cubic, &input).expect("should run");

        assert_eq!(solution.status, Status::MaxIters);
        assert_eq!(solution.iters, 10);
    }
}
