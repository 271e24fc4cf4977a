use thiserror::Error;

/// Expected numerical failures of the linear solvers.
///
/// These never escape [`solve`](super::solve) as `Err`; they are reported
/// through [`Status::Failed`](super::Status::Failed) with `x = None`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error(
        "A is not square or its dimensions are incompatible with b \
         (A is {rows}x{cols}, b has {len} entries)"
    )]
    Shape { rows: usize, cols: usize, len: usize },

    #[error("pivot (row {row}) too close to zero; pivoting required")]
    NearZeroPivot { row: usize },

    #[error("zero pivot during back substitution (row {row})")]
    ZeroPivotInBackSubstitution { row: usize },

    #[error("zero (or near-zero) pivot in column {column}")]
    ZeroPivotInColumn { column: usize },

    #[error("zero (or near-zero) pivot at stage {stage}; singular matrix")]
    SingularAtStage { stage: usize },

    #[error("zero pivot at U[{k},{k}]")]
    ZeroPivotInU { k: usize },

    #[error("Cholesky not applicable; matrix is not positive-definite (column {column})")]
    NotPositiveDefinite { column: usize },

    #[error("zero on the diagonal (row {row})")]
    ZeroDiagonal { row: usize },
}

/// Malformed solver options.
///
/// Unlike [`Error`], these indicate a caller mistake and are returned as
/// `Err` from [`solve`](super::solve).
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum OptionsError {
    #[error("tol must be finite and non-negative, got {0}")]
    Tolerance(f64),

    #[error("x0 has {got} entries but the system has {expected} unknowns")]
    InitialGuessLength { expected: usize, got: usize },
}
