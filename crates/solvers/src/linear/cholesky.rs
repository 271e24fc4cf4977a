//! Cholesky factorization `A = L·Lᵗ` for symmetric positive-definite systems.

use ndarray::{Array1, Array2, s};

use super::{
    Error,
    steps::Recorder,
    system::{EPS, forward_substitute, upper_substitute},
};

/// Computes the lower-triangular `L` with `A = L·Lᵗ`.
///
/// Only the lower triangle of `a` is read. A radicand below [`EPS`] (or NaN)
/// on the diagonal means `a` is not positive-definite.
pub(super) fn factor(a: &Array2<f64>) -> Result<Array2<f64>, Error> {
    let n = a.nrows();
    let mut l = Array2::<f64>::zeros((n, n));

    for j in 0..n {
        let head = l.slice(s![j, ..j]);
        let radicand = a[[j, j]] - head.dot(&head);
        if radicand.is_nan() || radicand < EPS {
            return Err(Error::NotPositiveDefinite { column: j });
        }
        let diagonal = radicand.sqrt();
        l[[j, j]] = diagonal;

        for i in j + 1..n {
            let dot = l.slice(s![i, ..j]).dot(&l.slice(s![j, ..j]));
            l[[i, j]] = (a[[i, j]] - dot) / diagonal;
        }
    }

    Ok(l)
}

/// Solves `A·x = b` through `L·y = b` and `Lᵗ·x = y`.
pub(super) fn solve(
    a: &Array2<f64>,
    b: &Array1<f64>,
    rec: &mut Recorder,
) -> Result<Array1<f64>, Error> {
    let l = factor(a)?;
    let y = forward_substitute(&l, b, false);
    let x = upper_substitute(&l.t().to_owned(), &y);
    rec.factors(&l, None);
    Ok(x)
}
