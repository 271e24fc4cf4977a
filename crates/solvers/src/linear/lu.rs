//! Doolittle LU factorization without pivoting.

use ndarray::{Array1, Array2};

use super::{
    Error,
    steps::Recorder,
    system::{EPS, forward_substitute, upper_substitute},
};

/// Doolittle factors `A = L·U` with unit-lower `L`.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct Factors {
    pub(super) l: Array2<f64>,
    pub(super) u: Array2<f64>,
}

/// Factors `a` without pivoting.
///
/// Fails as soon as a diagonal entry of `U` falls below [`EPS`].
pub(super) fn factor(a: &Array2<f64>) -> Result<Factors, Error> {
    let n = a.nrows();
    let mut l = Array2::eye(n);
    let mut u = a.clone();

    for k in 0..n {
        let pivot = u[[k, k]];
        if pivot.abs() < EPS {
            return Err(Error::ZeroPivotInU { k });
        }
        for i in k + 1..n {
            let multiplier = u[[i, k]] / pivot;
            l[[i, k]] = multiplier;
            for j in k..n {
                u[[i, j]] -= multiplier * u[[k, j]];
            }
        }
    }

    Ok(Factors { l, u })
}

/// Solves `A·x = b` through `L·y = b` and `U·x = y`.
pub(super) fn solve(
    a: &Array2<f64>,
    b: &Array1<f64>,
    rec: &mut Recorder,
) -> Result<Array1<f64>, Error> {
    let Factors { l, u } = factor(a)?;
    let y = forward_substitute(&l, b, true);
    let x = upper_substitute(&u, &y);
    rec.factors(&l, Some(&u));
    Ok(x)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use ndarray::array;

    use crate::linear::Options;

    #[test]
    fn factors_reproduce_matrix() {
        let a = array![[4.0, 3.0, 2.0], [2.0, 1.0, 3.0], [3.0, 2.0, 1.0]];
        let Factors { l, u } = factor(&a).expect("nonzero pivots");

        for i in 0..3 {
            assert_relative_eq!(l[[i, i]], 1.0);
            for j in 0..i {
                assert_relative_eq!(u[[i, j]], 0.0);
            }
            for j in i + 1..3 {
                assert_relative_eq!(l[[i, j]], 0.0);
            }
        }

        let product = l.dot(&u);
        for (got, want) in product.iter().zip(a.iter()) {
            assert_relative_eq!(*got, *want, epsilon = 1e-12);
        }
    }

    #[test]
    fn zero_pivot_is_reported() {
        let a = array![[1.0, 2.0], [2.0, 4.0]];
        assert_eq!(factor(&a), Err(Error::ZeroPivotInU { k: 1 }));
    }

    #[test]
    fn solve_records_factors_on_request() {
        let a = array![[2.0, 1.0], [4.0, 5.0]];
        let b = array![3.0, 9.0];
        let options = Options {
            return_steps: true,
            show_lu: true,
            ..Options::default()
        };
        let mut rec = Recorder::new(&options);

        let x = solve(&a, &b, &mut rec).expect("nonzero pivots");
        assert_relative_eq!(x[0], 1.0, epsilon = 1e-12);
        assert_relative_eq!(x[1], 1.0, epsilon = 1e-12);

        let steps = rec.finish().expect("steps requested");
        assert_eq!(steps.l, Some(array![[1.0, 0.0], [2.0, 1.0]]));
        assert_eq!(steps.u, Some(array![[2.0, 1.0], [0.0, 3.0]]));
    }
}
