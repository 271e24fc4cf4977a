use ndarray::Array1;

use super::OptionsError;

/// Caller-selected options for [`solve`](super::solve).
///
/// The step flags only matter when `return_steps` is set; otherwise no
/// [`StepTrace`](super::StepTrace) is built at all. `x0`, `tol` and
/// `max_iter` only apply to the iterative methods.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    pub return_steps: bool,
    pub show_matrices: bool,
    pub show_lu: bool,
    pub show_permutation: bool,
    pub record_iterations: bool,
    /// Initial guess; defaults to the zero vector.
    pub x0: Option<Array1<f64>>,
    pub tol: f64,
    pub max_iter: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            return_steps: false,
            show_matrices: false,
            show_lu: false,
            show_permutation: false,
            record_iterations: false,
            x0: None,
            tol: 1e-8,
            max_iter: 100,
        }
    }
}

impl Options {
    /// Enables step recording with every detail flag turned on.
    #[must_use]
    pub fn with_all_steps(self) -> Self {
        Self {
            return_steps: true,
            show_matrices: true,
            show_lu: true,
            show_permutation: true,
            record_iterations: true,
            ..self
        }
    }

    /// Validates the tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if `tol` is negative or non-finite.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if !self.tol.is_finite() || self.tol < 0.0 {
            return Err(OptionsError::Tolerance(self.tol));
        }
        Ok(())
    }

    /// Returns the starting iterate for a system with `n` unknowns.
    ///
    /// # Errors
    ///
    /// Returns an error if `x0` is set with the wrong length.
    pub(super) fn initial_guess(&self, n: usize) -> Result<Array1<f64>, OptionsError> {
        match &self.x0 {
            None => Ok(Array1::zeros(n)),
            Some(x0) if x0.len() == n => Ok(x0.clone()),
            Some(x0) => Err(OptionsError::InitialGuessLength {
                expected: n,
                got: x0.len(),
            }),
        }
    }
}
