//! Shape checks and triangular kernels shared by the linear solvers.

use ndarray::{Array1, Array2, ArrayView1, Zip, s};

use super::Error;

/// Numerical floor for pivots and diagonal entries.
pub const EPS: f64 = 1e-18;

/// Checks that `a` is square and matches the length of `b`.
///
/// Returns the system size on success.
pub(super) fn check_shape(a: &Array2<f64>, b: &Array1<f64>) -> Result<usize, Error> {
    let (rows, cols) = a.dim();
    if rows != cols || rows != b.len() {
        return Err(Error::Shape {
            rows,
            cols,
            len: b.len(),
        });
    }
    Ok(rows)
}

/// Builds the augmented matrix `[A | b]`.
pub(super) fn augment(a: &Array2<f64>, b: &Array1<f64>) -> Array2<f64> {
    let n = a.nrows();
    let mut m = Array2::zeros((n, n + 1));
    m.slice_mut(s![.., ..n]).assign(a);
    m.column_mut(n).assign(b);
    m
}

/// Subtracts `multiplier` times row `pivot` from row `target`, from column
/// `from` onward.
pub(super) fn eliminate_row(
    m: &mut Array2<f64>,
    target: usize,
    pivot: usize,
    from: usize,
    multiplier: f64,
) {
    let (pivot_row, mut target_row) = m.multi_slice_mut((s![pivot, from..], s![target, from..]));
    target_row.scaled_add(-multiplier, &pivot_row);
}

/// Swaps two rows in place.
pub(super) fn swap_rows(m: &mut Array2<f64>, i: usize, j: usize) {
    if i == j {
        return;
    }
    let (mut first, mut second) = m.multi_slice_mut((s![i, ..], s![j, ..]));
    Zip::from(&mut first)
        .and(&mut second)
        .for_each(std::mem::swap);
}

/// Swaps two columns in place.
pub(super) fn swap_columns(m: &mut Array2<f64>, i: usize, j: usize) {
    if i == j {
        return;
    }
    let (mut first, mut second) = m.multi_slice_mut((s![.., i], s![.., j]));
    Zip::from(&mut first)
        .and(&mut second)
        .for_each(std::mem::swap);
}

/// Index of the first entry with the largest magnitude.
pub(super) fn first_max_abs(values: ArrayView1<'_, f64>) -> usize {
    let mut best = 0;
    for (index, value) in values.iter().enumerate() {
        if value.abs() > values[best].abs() {
            best = index;
        }
    }
    best
}

/// Back substitution on an upper-triangular augmented matrix.
///
/// The right-hand side is the last column of `m`. Each diagonal entry is
/// checked against [`EPS`] before dividing.
pub(super) fn back_substitute(m: &Array2<f64>) -> Result<Array1<f64>, Error> {
    let n = m.nrows();
    let mut x = Array1::zeros(n);
    for i in (0..n).rev() {
        let diagonal = m[[i, i]];
        if diagonal.abs() < EPS {
            return Err(Error::ZeroPivotInBackSubstitution { row: i });
        }
        let tail = m.slice(s![i, i + 1..n]).dot(&x.slice(s![i + 1..]));
        x[i] = (m[[i, n]] - tail) / diagonal;
    }
    Ok(x)
}

/// Solves `L·y = b` for lower-triangular `L`.
///
/// With `unit_diagonal` the diagonal of `L` is taken as ones.
pub(super) fn forward_substitute(
    l: &Array2<f64>,
    b: &Array1<f64>,
    unit_diagonal: bool,
) -> Array1<f64> {
    let n = b.len();
    let mut y = Array1::zeros(n);
    for i in 0..n {
        let head = l.slice(s![i, ..i]).dot(&y.slice(s![..i]));
        y[i] = b[i] - head;
        if !unit_diagonal {
            y[i] /= l[[i, i]];
        }
    }
    y
}

/// Solves `U·x = y` for upper-triangular `U` with nonzero diagonal.
pub(super) fn upper_substitute(u: &Array2<f64>, y: &Array1<f64>) -> Array1<f64> {
    let n = y.len();
    let mut x = Array1::zeros(n);
    for i in (0..n).rev() {
        let tail = u.slice(s![i, i + 1..]).dot(&x.slice(s![i + 1..]));
        x[i] = (y[i] - tail) / u[[i, i]];
    }
    x
}

/// Infinity norm of `v`.
pub(super) fn max_abs(v: ArrayView1<'_, f64>) -> f64 {
    v.iter().fold(0.0, |acc: f64, value| acc.max(value.abs()))
}

/// Returns `‖A·x − b‖∞`, the largest absolute residual.
///
/// # Panics
///
/// Panics if the shapes of `a`, `x` and `b` are incompatible.
#[must_use]
pub fn residual_norm(a: &Array2<f64>, x: &Array1<f64>, b: &Array1<f64>) -> f64 {
    let residual = a.dot(x) - b;
    max_abs(residual.view())
}

/// Returns the diagonal of `a` as an owned vector.
pub(super) fn diagonal(a: &Array2<f64>) -> Array1<f64> {
    a.diag().to_owned()
}

/// Returns `a` with its diagonal zeroed.
pub(super) fn off_diagonal(a: &Array2<f64>) -> Array2<f64> {
    let mut r = a.clone();
    r.diag_mut().fill(0.0);
    r
}
