//! Fixed-point iteration `x_{k+1} = phi(x_k)`.

use numeth_core::{FixedPointForm, Observer};

use super::{
    Action, Error, Event, RootInput, Solution,
    iterate::{Estimate, Iteration, iterate},
};

struct FixedPoint<'f, F> {
    f: &'f F,
    x: f64,
}

impl<F: FixedPointForm> Iteration for FixedPoint<'_, F> {
    fn start(&self) -> Estimate {
        Estimate {
            x: self.x,
            fx: self.f.value(self.x),
            error: f64::INFINITY,
        }
    }

    fn step(&mut self) -> Result<Estimate, Error> {
        let next = self.f.phi(self.x);
        let error = (next - self.x).abs();
        self.x = next;
        Ok(Estimate {
            x: next,
            fx: self.f.value(next),
            error,
        })
    }
}

/// Iterates `phi` from `input.x0`, with error `|x_{k+1} − x_k|`.
///
/// Convergence is not guaranteed; it needs `|phi'(x)| < 1` near the fixed
/// point. A run that ends above `tol` returns [`Status::MaxIters`].
///
/// [`Status::MaxIters`]: super::Status::MaxIters
///
/// # Errors
///
/// Returns an error if the input is invalid or an iterate is non-finite.
pub fn solve<F, Obs>(f: &F, input: &RootInput, observer: Obs) -> Result<Solution, Error>
where
    F: FixedPointForm,
    Obs: Observer<Event, Action>,
{
    input.validate()?;
    iterate(FixedPoint { f, x: input.x0 }, input, observer)
}

/// Runs fixed-point iteration without observation.
///
/// # Errors
///
/// Same as [`solve`].
pub fn solve_unobserved<F: FixedPointForm>(f: &F, input: &RootInput) -> Result<Solution, Error> {
    solve(f, input, ())
}
