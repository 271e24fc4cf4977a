//! Stationary iterative methods: Gauss-Jacobi and Gauss-Seidel.
//!
//! Both stop when the infinity norm of the change between sweeps drops below
//! `tol`, or after `max_iter` sweeps. Running out of sweeps is not an error:
//! the last iterate is returned with `converged_at = None`.

use ndarray::{Array1, Array2, s};

use super::{
    Error,
    steps::Recorder,
    system::{EPS, diagonal, max_abs, off_diagonal},
};

/// Result of an iterative run.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct Iterated {
    pub(super) x: Array1<f64>,
    /// The 1-based sweep that met the tolerance, if any.
    pub(super) converged_at: Option<usize>,
}

/// Gauss-Jacobi: `x_{k+1} = D⁻¹(b − R·x_k)`, all components updated together.
///
/// A zero diagonal entry is rejected before the first sweep.
pub(super) fn jacobi(
    a: &Array2<f64>,
    b: &Array1<f64>,
    x0: Array1<f64>,
    tol: f64,
    max_iter: usize,
    rec: &mut Recorder,
) -> Result<Iterated, Error> {
    let d = diagonal(a);
    if let Some(row) = d.iter().position(|value| value.abs() < EPS) {
        return Err(Error::ZeroDiagonal { row });
    }
    let r = off_diagonal(a);

    let mut x = x0;
    for k in 1..=max_iter {
        let next = (b - &r.dot(&x)) / &d;
        rec.iteration(k, &next);

        let change = max_abs((&next - &x).view());
        log::debug!("jacobi sweep {k}: change = {change:e}");
        if change < tol {
            return Ok(Iterated {
                x: next,
                converged_at: Some(k),
            });
        }
        x = next;
    }

    Ok(Iterated {
        x,
        converged_at: None,
    })
}

/// Gauss-Seidel: rows are updated in place, so each row already sees the
/// components updated earlier in the same sweep.
///
/// A zero diagonal entry aborts the sweep in which it is reached.
pub(super) fn seidel(
    a: &Array2<f64>,
    b: &Array1<f64>,
    x0: Array1<f64>,
    tol: f64,
    max_iter: usize,
    rec: &mut Recorder,
) -> Result<Iterated, Error> {
    let n = b.len();
    let mut x = x0;

    for k in 1..=max_iter {
        let previous = x.clone();
        for i in 0..n {
            let diagonal = a[[i, i]];
            if diagonal.abs() < EPS {
                return Err(Error::ZeroDiagonal { row: i });
            }
            let updated = a.slice(s![i, ..i]).dot(&x.slice(s![..i]));
            let pending = a.slice(s![i, i + 1..]).dot(&previous.slice(s![i + 1..]));
            x[i] = (b[i] - updated - pending) / diagonal;
        }
        rec.iteration(k, &x);

        let change = max_abs((&x - &previous).view());
        log::debug!("gauss-seidel sweep {k}: change = {change:e}");
        if change < tol {
            return Ok(Iterated {
                x,
                converged_at: Some(k),
            });
        }
    }

    Ok(Iterated {
        x,
        converged_at: None,
    })
}
