//! Newton-Raphson: follow the tangent line to its zero.

use numeth_core::{Differentiable, Observer};

use super::{
    Action, Error, Event, RootInput, Solution,
    iterate::{Estimate, Iteration, MIN_DIVISOR, iterate},
};

struct Newton<'f, F> {
    f: &'f F,
    x: f64,
}

impl<F: Differentiable> Iteration for Newton<'_, F> {
    fn start(&self) -> Estimate {
        Estimate {
            x: self.x,
            fx: self.f.value(self.x),
            error: f64::INFINITY,
        }
    }

    fn step(&mut self) -> Result<Estimate, Error> {
        let slope = self.f.derivative(self.x);
        if slope.abs() < MIN_DIVISOR {
            return Err(Error::DerivativeNearZero { x: self.x });
        }
        let next = self.x - self.f.value(self.x) / slope;
        let error = (next - self.x).abs();
        self.x = next;
        Ok(Estimate {
            x: next,
            fx: self.f.value(next),
            error,
        })
    }
}

/// Applies `x_{k+1} = x_k − f(x_k)/f'(x_k)` from `input.x0`.
///
/// # Errors
///
/// Returns [`Error::DerivativeNearZero`] as soon as `|f'(x_k)|` drops below
/// [`MIN_DIVISOR`](super::MIN_DIVISOR), before the update. Also fails on
/// invalid input or a non-finite iterate.
pub fn solve<F, Obs>(f: &F, input: &RootInput, observer: Obs) -> Result<Solution, Error>
where
    F: Differentiable,
    Obs: Observer<Event, Action>,
{
    input.validate()?;
    iterate(Newton { f, x: input.x0 }, input, observer)
}

/// Runs Newton-Raphson without observation.
///
/// # Errors
///
/// Same as [`solve`].
pub fn solve_unobserved<F: Differentiable>(f: &F, input: &RootInput) -> Result<Solution, Error> {
    solve(f, input, ())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use numeth_core::Functions;

    use crate::roots::{Cubic, Status};

    #[test]
    fn converges_quadratically_from_zero() {
        let mut errors = Vec::new();
        let observer = |event: &Event| -> Option<Action> {
            errors.push(event.error);
            None
        };

        let solution = solve(&Cubic, &RootInput::default(), observer).expect("should solve");

        assert_eq!(solution.status, Status::Converged);
        assert_eq!(solution.iters, 4);
        assert_relative_eq!(solution.x, 0.337_608_955_965_837_7, epsilon = 1e-12);
        // Each error is roughly the square of the previous one.
        for pair in errors.windows(2).skip(1) {
            assert!(pair[1] < pair[0] * pair[0] * 10.0);
        }
    }

    #[test]
    fn first_step_is_the_tangent_zero() {
        let mut first = None;
        let observer = |event: &Event| -> Option<Action> {
            first = Some(event.x);
            Some(Action::StopEarly)
        };

        solve(&Cubic, &RootInput::default(), observer).expect("should stop");

        // x1 = 0 - 3 / (-9)
        assert_relative_eq!(first.expect("one event"), 1.0 / 3.0);
    }

    #[test]
    fn flat_tangent_aborts_immediately() {
        // f'(sqrt(3)) = 3·3 - 9 = 0.
        let input = RootInput {
            x0: 3.0_f64.sqrt(),
            ..RootInput::default()
        };
        let flat = Functions::new(|x: f64| x * x + 1.0).with_derivative(|x: f64| 2.0 * x);

        assert!(matches!(
            solve_unobserved(&Cubic, &input),
            Err(Error::DerivativeNearZero { .. })
        ));
        assert!(matches!(
            solve_unobserved(&flat, &RootInput::default()),
            Err(Error::DerivativeNearZero { x }) if x == 0.0
        ));
    }
}
