//! Gaussian elimination on the augmented matrix, with three pivoting rules.

use ndarray::{Array1, Array2, s};

use super::{
    Error,
    steps::Recorder,
    system::{
        EPS, augment, back_substitute, eliminate_row, first_max_abs, swap_columns, swap_rows,
    },
};

/// Gaussian elimination using each diagonal entry as the pivot.
pub(super) fn no_pivoting(
    a: &Array2<f64>,
    b: &Array1<f64>,
    rec: &mut Recorder,
) -> Result<Array1<f64>, Error> {
    let n = b.len();
    let mut m = augment(a, b);
    rec.matrix(|| "Initial (A|b)".to_owned(), &m);

    for i in 0..n {
        if m[[i, i]].abs() < EPS {
            return Err(Error::NearZeroPivot { row: i });
        }
        for j in i + 1..n {
            let multiplier = m[[j, i]] / m[[i, i]];
            eliminate_row(&mut m, j, i, i, multiplier);
            if rec.shows_matrices() {
                rec.action(|| eliminated(j, i, multiplier));
                rec.matrix(|| format!("After elimination i={i}, j={j}"), &m);
            }
        }
    }

    back_substitute(&m)
}

/// Gaussian elimination with row swaps toward the largest pivot in each column.
pub(super) fn partial_pivoting(
    a: &Array2<f64>,
    b: &Array1<f64>,
    rec: &mut Recorder,
) -> Result<Array1<f64>, Error> {
    let n = b.len();
    let mut m = augment(a, b);
    rec.matrix(|| "Initial (A|b)".to_owned(), &m);

    for i in 0..n {
        let pivot_row = i + first_max_abs(m.slice(s![i.., i]));
        log::debug!("partial pivoting: column {i} pivots on row {pivot_row}");
        rec.action(|| format!("Pivot chosen (row {pivot_row}) for column {i}"));

        if m[[pivot_row, i]].abs() < EPS {
            return Err(Error::ZeroPivotInColumn { column: i });
        }

        if pivot_row != i {
            swap_rows(&mut m, i, pivot_row);
            rec.action(|| format!("Swapped row {i} with {pivot_row}"));
            rec.matrix(|| format!("After swap {i}<->{pivot_row}"), &m);
        }

        for j in i + 1..n {
            let multiplier = m[[j, i]] / m[[i, i]];
            eliminate_row(&mut m, j, i, i, multiplier);
            rec.action(|| eliminated(j, i, multiplier));
            rec.matrix(|| format!("After elimination i={i}, j={j}"), &m);
        }
    }

    back_substitute(&m)
}

/// Gaussian elimination with row and column swaps toward the largest entry
/// of the trailing submatrix.
///
/// Column swaps reorder the unknowns; the solution is mapped back to the
/// original variable order before returning.
pub(super) fn complete_pivoting(
    a: &Array2<f64>,
    b: &Array1<f64>,
    rec: &mut Recorder,
) -> Result<Array1<f64>, Error> {
    let n = b.len();
    let mut m = augment(a, b);
    let mut permutation: Vec<usize> = (0..n).collect();
    rec.matrix(|| "Initial (A|b)".to_owned(), &m);

    for i in 0..n {
        let (pivot_row, pivot_col) = max_abs_position(&m, i);
        log::debug!("complete pivoting: stage {i} pivots on ({pivot_row},{pivot_col})");
        rec.action(|| format!("Absolute pivot at ({pivot_row},{pivot_col}) in stage {i}"));

        if m[[pivot_row, pivot_col]].abs() < EPS {
            return Err(Error::SingularAtStage { stage: i + 1 });
        }

        if pivot_row != i {
            swap_rows(&mut m, i, pivot_row);
            rec.action(|| format!("Swapped rows {i} <-> {pivot_row}"));
        }
        if pivot_col != i {
            swap_columns(&mut m, i, pivot_col);
            permutation.swap(i, pivot_col);
            rec.action(|| format!("Swapped columns {i} <-> {pivot_col}"));
        }

        for j in i + 1..n {
            let multiplier = m[[j, i]] / m[[i, i]];
            eliminate_row(&mut m, j, i, i, multiplier);
            rec.action(|| eliminated(j, i, multiplier));
        }
    }

    let permuted = back_substitute(&m)?;
    rec.permutation(&permutation);
    Ok(unpermute(&permuted, &permutation))
}

/// Position of the first largest-magnitude entry in `m[stage.., stage..n]`,
/// scanning row by row.
fn max_abs_position(m: &Array2<f64>, stage: usize) -> (usize, usize) {
    let n = m.nrows();
    let mut best = (stage, stage);
    for row in stage..n {
        for col in stage..n {
            if m[[row, col]].abs() > m[best].abs() {
                best = (row, col);
            }
        }
    }
    best
}

/// Maps a solution in pivoted column order back to the original order.
pub(super) fn unpermute(permuted: &Array1<f64>, permutation: &[usize]) -> Array1<f64> {
    let mut x = Array1::zeros(permuted.len());
    for (position, &original) in permutation.iter().enumerate() {
        x[original] = permuted[position];
    }
    x
}

fn eliminated(row: usize, pivot: usize, multiplier: f64) -> String {
    format!("Eliminated row {row} using row {pivot} (m={multiplier:.6})")
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use ndarray::array;

    use crate::linear::Options;

    fn quiet() -> Recorder {
        Recorder::new(&Options::default())
    }

    fn verbose() -> Recorder {
        Recorder::new(&Options::default().with_all_steps())
    }

    fn system() -> (Array2<f64>, Array1<f64>) {
        // Solution is [1, 2, 3].
        let a = array![[2.0, 1.0, -1.0], [-3.0, -1.0, 2.0], [-2.0, 1.0, 2.0]];
        let b = array![1.0, 1.0, 6.0];
        (a, b)
    }

    #[test]
    fn no_pivoting_solves_regular_system() {
        let (a, b) = system();
        let x = no_pivoting(&a, &b, &mut quiet()).expect("regular system");
        assert_relative_eq!(x[0], 1.0, epsilon = 1e-12);
        assert_relative_eq!(x[1], 2.0, epsilon = 1e-12);
        assert_relative_eq!(x[2], 3.0, epsilon = 1e-12);
    }

    #[test]
    fn no_pivoting_fails_on_zero_leading_entry() {
        let a = array![[0.0, 1.0], [1.0, 0.0]];
        let b = array![1.0, 2.0];
        assert_eq!(
            no_pivoting(&a, &b, &mut quiet()),
            Err(Error::NearZeroPivot { row: 0 })
        );
    }

    #[test]
    fn partial_pivoting_handles_zero_leading_entry() {
        let a = array![[0.0, 1.0], [1.0, 0.0]];
        let b = array![1.0, 2.0];
        let mut rec = verbose();
        let x = partial_pivoting(&a, &b, &mut rec).expect("row swap fixes the pivot");
        assert_relative_eq!(x[0], 2.0);
        assert_relative_eq!(x[1], 1.0);

        let steps = rec.finish().expect("steps requested");
        assert!(steps.actions.contains(&"Swapped row 0 with 1".to_owned()));
        assert_eq!(steps.matrices[0].0, "Initial (A|b)");
    }

    #[test]
    fn partial_pivoting_reports_singular_column() {
        let a = array![[1.0, 2.0], [2.0, 4.0]];
        let b = array![1.0, 2.0];
        assert_eq!(
            partial_pivoting(&a, &b, &mut quiet()),
            Err(Error::ZeroPivotInColumn { column: 1 })
        );
    }

    #[test]
    fn complete_pivoting_restores_variable_order() {
        let (a, b) = system();
        let mut rec = verbose();
        let x = complete_pivoting(&a, &b, &mut rec).expect("regular system");
        assert_relative_eq!(x[0], 1.0, epsilon = 1e-12);
        assert_relative_eq!(x[1], 2.0, epsilon = 1e-12);
        assert_relative_eq!(x[2], 3.0, epsilon = 1e-12);

        let steps = rec.finish().expect("steps requested");
        let permutation = steps.column_permutation.expect("permutation requested");
        let mut sorted = permutation.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, vec![0, 1, 2]);
        assert_eq!(permutation[0], 0, "largest entry |-3| sits in column 0");
    }

    #[test]
    fn complete_pivoting_reports_stage_of_singularity() {
        let a = array![[1.0, 2.0], [2.0, 4.0]];
        let b = array![1.0, 2.0];
        assert_eq!(
            complete_pivoting(&a, &b, &mut quiet()),
            Err(Error::SingularAtStage { stage: 2 })
        );
    }

    #[test]
    fn max_abs_position_scans_row_major() {
        let m = array![[1.0, 5.0, 0.0], [-5.0, 2.0, 0.0]];
        assert_eq!(max_abs_position(&m, 0), (0, 1));
        assert_eq!(max_abs_position(&m, 1), (1, 1));
    }

    #[test]
    fn unpermute_inverts_column_order() {
        let permuted = array![10.0, 20.0, 30.0];
        let x = unpermute(&permuted, &[2, 0, 1]);
        assert_eq!(x, array![20.0, 30.0, 10.0]);
    }
}
