//! Parameters of a root search and their validation.

use thiserror::Error;

/// Errors from validating a [`RootInput`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum InputError {
    #[error("tol must be finite and positive, got {0}")]
    Tolerance(f64),

    #[error("max_iters must be positive")]
    MaxIters,

    #[error("{name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },
}

/// Parameters shared by every root-finding method.
///
/// Each method reads only the fields it needs: the bracketing methods use
/// `a` and `b`, fixed point and Newton start from `x0`, and the secant
/// method starts from `x0` and `x1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootInput {
    pub a: f64,
    pub b: f64,
    pub x0: f64,
    pub x1: f64,
    pub tol: f64,
    pub max_iters: usize,
}

impl Default for RootInput {
    fn default() -> Self {
        Self {
            a: 0.0,
            b: 1.0,
            x0: 0.0,
            x1: 1.0,
            tol: 1e-6,
            max_iters: 100,
        }
    }
}

impl RootInput {
    /// Creates a validated input.
    ///
    /// # Errors
    ///
    /// Returns an error if any value is non-finite, `tol` is not positive,
    /// or `max_iters` is zero.
    pub fn new(
        a: f64,
        b: f64,
        x0: f64,
        x1: f64,
        tol: f64,
        max_iters: usize,
    ) -> Result<Self, InputError> {
        let input = Self {
            a,
            b,
            x0,
            x1,
            tol,
            max_iters,
        };
        input.validate()?;
        Ok(input)
    }

    /// Returns a copy with a different bracket.
    #[must_use]
    pub fn with_bracket(self, a: f64, b: f64) -> Self {
        Self { a, b, ..self }
    }

    /// Returns a copy with different starting points.
    #[must_use]
    pub fn with_guesses(self, x0: f64, x1: f64) -> Self {
        Self { x0, x1, ..self }
    }

    /// Checks every field.
    ///
    /// # Errors
    ///
    /// Returns the first problem found, checking the values in field order.
    pub fn validate(&self) -> Result<(), InputError> {
        for (name, value) in [("a", self.a), ("b", self.b), ("x0", self.x0), ("x1", self.x1)] {
            if !value.is_finite() {
                return Err(InputError::NonFinite { name, value });
            }
        }
        if !self.tol.is_finite() || self.tol <= 0.0 {
            return Err(InputError::Tolerance(self.tol));
        }
        if self.max_iters == 0 {
            return Err(InputError::MaxIters);
        }
        Ok(())
    }
}
