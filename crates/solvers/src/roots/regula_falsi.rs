//! Regula falsi (false position): bisection with the midpoint replaced by the
//! zero of the chord through the bracket ends.

use numeth_core::{Observer, ScalarFunction};

use super::{
    Action, Error, Event, RootInput, Solution,
    bracket::Bracket,
    iterate::{Estimate, Iteration, MIN_DIVISOR, iterate},
};

struct RegulaFalsi<'f, F> {
    f: &'f F,
    bracket: Bracket,
}

impl<F: ScalarFunction> Iteration for RegulaFalsi<'_, F> {
    fn start(&self) -> Estimate {
        let Bracket { a, b, fa, fb } = self.bracket;
        let (x, fx) = if fa.abs() <= fb.abs() { (a, fa) } else { (b, fb) };
        Estimate {
            x,
            fx,
            error: f64::INFINITY,
        }
    }

    fn step(&mut self) -> Result<Estimate, Error> {
        let Bracket { a, b, fa, fb } = self.bracket;
        if (fb - fa).abs() < MIN_DIVISOR {
            return Err(Error::DenominatorNearZero { left: a, right: b });
        }
        let x = (a * fb - b * fa) / (fb - fa);
        let fx = self.f.value(x);
        self.bracket.split(x, fx);
        Ok(Estimate {
            x,
            fx,
            error: fx.abs(),
        })
    }
}

/// Finds a root of `f` in `[input.a, input.b]` by false position.
///
/// The error is `|f(x_k)|`, not the bracket width: one end of the bracket
/// often stays fixed, so the width need not shrink to zero.
///
/// # Errors
///
/// Returns an error if the input is invalid, the interval does not bracket a
/// sign change, `|f(b) − f(a)|` drops below
/// [`MIN_DIVISOR`](super::MIN_DIVISOR), or an evaluation is non-finite.
pub fn solve<F, Obs>(f: &F, input: &RootInput, observer: Obs) -> Result<Solution, Error>
where
    F: ScalarFunction,
    Obs: Observer<Event, Action>,
{
    input.validate()?;
    let bracket = Bracket::new(f, input.a, input.b)?;
    iterate(RegulaFalsi { f, bracket }, input, observer)
}

/// Runs regula falsi without observation.
///
/// # Errors
///
/// Same as [`solve`].
pub fn solve_unobserved<F: ScalarFunction>(f: &F, input: &RootInput) -> Result<Solution, Error> {
    solve(f, input, ())
}
