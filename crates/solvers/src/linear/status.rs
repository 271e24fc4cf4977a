//! Status lines of a linear solve.

use std::fmt;

use super::{Error, Method};

/// Outcome classification of a linear solve.
///
/// `Display` renders the short human-readable status line shown to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// A direct method produced a solution.
    Solved(Method),
    /// An iterative method met the tolerance after `iters` sweeps.
    Converged { method: Method, iters: usize },
    /// An iterative method exhausted `max_iter`; `x` holds the last iterate.
    NotConverged { method: Method },
    /// A precondition or numerical check failed; `x` is `None`.
    Failed(Error),
}

impl Status {
    /// Returns true unless the solve failed.
    ///
    /// Non-convergence still counts as a result, because an estimate exists.
    #[must_use]
    pub fn has_solution(&self) -> bool {
        !matches!(self, Status::Failed(_))
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Solved(method) => write!(f, "Success ({}).", method.success_label()),
            Status::Converged { method, iters } => write!(
                f,
                "Converged in {iters} iterations ({}).",
                method.success_label()
            ),
            Status::NotConverged { method } => write!(
                f,
                "Attention: no convergence within the maximum number of iterations ({}).",
                method.short_label()
            ),
            Status::Failed(error) => write!(f, "ERROR: {error}."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_status_lines() {
        assert_eq!(
            Status::Solved(Method::Gauss).to_string(),
            "Success (Gauss elimination without pivoting)."
        );
        assert_eq!(
            Status::Converged {
                method: Method::Jacobi,
                iters: 12
            }
            .to_string(),
            "Converged in 12 iterations (Gauss-Jacobi)."
        );
        assert_eq!(
            Status::NotConverged {
                method: Method::Jacobi
            }
            .to_string(),
            "Attention: no convergence within the maximum number of iterations (Jacobi)."
        );
        assert_eq!(
            Status::Failed(Error::ZeroPivotInU { k: 1 }).to_string(),
            "ERROR: zero pivot at U[1,1]."
        );
    }

    #[test]
    fn only_failures_lack_a_solution() {
        assert!(Status::Solved(Method::Lu).has_solution());
        assert!(
            Status::NotConverged {
                method: Method::Seidel
            }
            .has_solution()
        );
        assert!(!Status::Failed(Error::ZeroDiagonal { row: 0 }).has_solution());
    }
}
