//! Dense solvers for the linear system `A·x = b`.
//!
//! # Methods
//!
//! | [`Method`] | Kind | Requirement |
//! |------------|------|-------------|
//! | [`Gauss`](Method::Gauss) | direct | nonzero pivots in natural order |
//! | [`PartialPivoting`](Method::PartialPivoting) | direct | nonsingular |
//! | [`CompletePivoting`](Method::CompletePivoting) | direct | nonsingular |
//! | [`Lu`](Method::Lu) | direct | nonzero pivots in natural order |
//! | [`Cholesky`](Method::Cholesky) | direct | symmetric positive-definite |
//! | [`Jacobi`](Method::Jacobi) | iterative | nonzero diagonal |
//! | [`Seidel`](Method::Seidel) | iterative | nonzero diagonal |
//!
//! # Failure reporting
//!
//! Expected numerical failures (shape mismatch, near-zero pivot, matrix not
//! positive-definite, zero diagonal) never surface as `Err`. They come back
//! as [`Status::Failed`] with `x = None`. Hitting the iteration cap is
//! [`Status::NotConverged`] and still returns the last iterate. Only
//! malformed [`Options`] produce an [`OptionsError`].
//!
//! Every pivot is compared against [`EPS`] before it is used as a divisor.
//!
//! # Example
//!
//! ```
//! use ndarray::array;
//! use numeth_solvers::linear::{self, Method, Options, Status};
//!
//! let a = array![[4.0, 1.0], [1.0, 3.0]];
//! let b = array![1.0, 2.0];
//!
//! let solution = linear::solve(Method::Cholesky, &a, &b, &Options::default())?;
//!
//! assert_eq!(solution.status, Status::Solved(Method::Cholesky));
//! assert!(linear::residual_norm(&a, &solution.x.unwrap(), &b) < 1e-12);
//! # Ok::<(), linear::OptionsError>(())
//! ```

mod cholesky;
mod error;
mod gauss;
mod iterative;
mod lu;
mod method;
mod options;
mod solution;
mod status;
mod steps;
mod system;


pub use error::{Error, OptionsError};
pub use method::{Method, UnknownMethod};
pub use options::Options;
pub use solution::Solution;
pub use status::Status;
pub use steps::StepTrace;
pub use system::{EPS, residual_norm};

use std::time::Instant;

use ndarray::{Array1, Array2};

use steps::Recorder;

/// Solves `A·x = b` with the selected method.
///
/// The caller's `a` and `b` are never modified; direct methods work on a
/// private augmented copy.
///
/// # Errors
///
/// Returns an error only for malformed options: a negative or non-finite
/// `tol`, or an `x0` whose length differs from the system size. Numerical
/// failures are reported through [`Solution::status`].
pub fn solve(
    method: Method,
    a: &Array2<f64>,
    b: &Array1<f64>,
    options: &Options,
) -> Result<Solution, OptionsError> {
    options.validate()?;

    let start = Instant::now();
    let mut rec = Recorder::new(options);

    let n = match system::check_shape(a, b) {
        Ok(n) => n,
        Err(error) => return Ok(failed(method, error, start, rec)),
    };

    let outcome = match method {
        Method::Gauss => gauss::no_pivoting(a, b, &mut rec).map(direct),
        Method::PartialPivoting => gauss::partial_pivoting(a, b, &mut rec).map(direct),
        Method::CompletePivoting => gauss::complete_pivoting(a, b, &mut rec).map(direct),
        Method::Lu => lu::solve(a, b, &mut rec).map(direct),
        Method::Cholesky => cholesky::solve(a, b, &mut rec).map(direct),
        Method::Jacobi => {
            let x0 = options.initial_guess(n)?;
            iterative::jacobi(a, b, x0, options.tol, options.max_iter, &mut rec)
        }
        Method::Seidel => {
            let x0 = options.initial_guess(n)?;
            iterative::seidel(a, b, x0, options.tol, options.max_iter, &mut rec)
        }
    };

    let solution = match outcome {
        Ok(iterative::Iterated { x, converged_at }) => {
            let status = match converged_at {
                Some(iters) => Status::Converged { method, iters },
                None if method.is_iterative() => Status::NotConverged { method },
                None => Status::Solved(method),
            };
            if let Status::NotConverged { .. } = status {
                log::warn!("{method}: no convergence after {} sweeps", options.max_iter);
            } else {
                log::info!("{method}: {status}");
            }
            Solution {
                x: Some(x),
                elapsed: start.elapsed(),
                status,
                steps: rec.finish(),
            }
        }
        Err(error) => failed(method, error, start, rec),
    };

    Ok(solution)
}

/// Wraps a direct solution in the shape shared with the iterative methods.
///
/// Direct methods have no sweep count, so `converged_at` stays `None`.
fn direct(x: Array1<f64>) -> iterative::Iterated {
    iterative::Iterated {
        x,
        converged_at: None,
    }
}

fn failed(method: Method, error: Error, start: Instant, rec: Recorder) -> Solution {
    log::warn!("{method}: {error}");
    Solution {
        x: None,
        elapsed: start.elapsed(),
        status: Status::Failed(error),
        steps: rec.finish(),
    }
}
