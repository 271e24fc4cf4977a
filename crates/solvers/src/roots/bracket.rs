//! Sign-change brackets shared by bisection and regula falsi.

use thiserror::Error;

use numeth_core::ScalarFunction;

/// Errors that can occur when creating a [`Bracket`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BracketError {
    /// An endpoint or its function value is non-finite.
    #[error("non-finite endpoint or function value")]
    NonFinite,
    /// `f(a)·f(b) > 0`, so the interval does not bracket a root.
    #[error("f(a)*f(b) > 0")]
    NoSignChange,
}

/// Interval `[a, b]` with the function values at both ends.
///
/// The endpoints are kept in the order given; `a > b` is allowed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Bracket {
    pub(super) a: f64,
    pub(super) b: f64,
    pub(super) fa: f64,
    pub(super) fb: f64,
}

impl Bracket {
    /// Evaluates both endpoints and checks for a sign change.
    ///
    /// A zero at either endpoint counts as a sign change.
    ///
    /// # Errors
    ///
    /// Returns `BracketError::NonFinite` for non-finite endpoints or values,
    /// and `BracketError::NoSignChange` when `f(a)·f(b) > 0`.
    pub(super) fn new<F: ScalarFunction>(f: &F, a: f64, b: f64) -> Result<Self, BracketError> {
        if !a.is_finite() || !b.is_finite() {
            return Err(BracketError::NonFinite);
        }
        let (fa, fb) = (f.value(a), f.value(b));
        if !fa.is_finite() || !fb.is_finite() {
            return Err(BracketError::NonFinite);
        }
        if fa * fb > 0.0 {
            return Err(BracketError::NoSignChange);
        }
        Ok(Self { a, b, fa, fb })
    }

    pub(super) fn midpoint(&self) -> f64 {
        0.5 * (self.a + self.b)
    }

    pub(super) fn half_width(&self) -> f64 {
        (self.b - self.a).abs() / 2.0
    }

    /// Replaces `b` when the root lies in `[a, x]`, and `a` otherwise.
    pub(super) fn split(&mut self, x: f64, fx: f64) {
        if self.fa * fx < 0.0 {
            self.b = x;
            self.fb = fx;
        } else {
            self.a = x;
            self.fa = fx;
        }
    }
}
