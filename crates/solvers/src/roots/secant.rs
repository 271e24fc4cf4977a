//! Secant method: Newton with the derivative replaced by a finite difference
//! through the last two iterates.

use numeth_core::{Observer, ScalarFunction};

use super::{
    Action, Error, Event, RootInput, Solution,
    iterate::{Estimate, Iteration, MIN_DIVISOR, iterate},
};

struct Secant<'f, F> {
    f: &'f F,
    previous: f64,
    current: f64,
}

impl<F: ScalarFunction> Iteration for Secant<'_, F> {
    fn start(&self) -> Estimate {
        Estimate {
            x: self.current,
            fx: self.f.value(self.current),
            error: f64::INFINITY,
        }
    }

    fn step(&mut self) -> Result<Estimate, Error> {
        let (x0, x1) = (self.previous, self.current);
        let (f0, f1) = (self.f.value(x0), self.f.value(x1));
        if (f1 - f0).abs() < MIN_DIVISOR {
            return Err(Error::DenominatorNearZero {
                left: x0,
                right: x1,
            });
        }
        let next = x1 - f1 * (x1 - x0) / (f1 - f0);
        self.previous = x1;
        self.current = next;
        Ok(Estimate {
            x: next,
            fx: self.f.value(next),
            error: (next - x1).abs(),
        })
    }
}

/// Starts from `input.x0` and `input.x1`, with error `|x_{k+1} − x_k|`.
///
/// # Errors
///
/// Returns [`Error::DenominatorNearZero`] when `|f(x_k) − f(x_{k−1})|` drops
/// below [`MIN_DIVISOR`](super::MIN_DIVISOR). Also fails on invalid input or
/// a non-finite iterate.
pub fn solve<F, Obs>(f: &F, input: &RootInput, observer: Obs) -> Result<Solution, Error>
where
    F: ScalarFunction,
    Obs: Observer<Event, Action>,
{
    input.validate()?;
    let secant = Secant {
        f,
        previous: input.x0,
        current: input.x1,
    };
    iterate(secant, input, observer)
}

/// Runs the secant method without observation.
///
/// # Errors
///
/// Same as [`solve`].
pub fn solve_unobserved<F: ScalarFunction>(f: &F, input: &RootInput) -> Result<Solution, Error> {
    solve(f, input, ())
}
