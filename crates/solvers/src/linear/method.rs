use std::{fmt, str::FromStr};

use thiserror::Error;

/// The linear-system algorithms available through [`solve`](super::solve).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// Gaussian elimination without pivoting.
    Gauss,
    /// Gaussian elimination with row (partial) pivoting.
    PartialPivoting,
    /// Gaussian elimination with row and column (complete) pivoting.
    CompletePivoting,
    /// LU factorization without pivoting.
    Lu,
    /// Cholesky factorization for symmetric positive-definite matrices.
    Cholesky,
    /// Gauss-Jacobi stationary iteration.
    Jacobi,
    /// Gauss-Seidel stationary iteration.
    Seidel,
}

/// Error returned when a method name is not recognized.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown linear method: {0:?}")]
pub struct UnknownMethod(pub String);

impl Method {
    /// Every method, in menu order.
    pub const ALL: [Method; 7] = [
        Method::Gauss,
        Method::PartialPivoting,
        Method::CompletePivoting,
        Method::Lu,
        Method::Cholesky,
        Method::Jacobi,
        Method::Seidel,
    ];

    /// Returns the human-readable name used to select the method.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Method::Gauss => "Gauss without pivoting",
            Method::PartialPivoting => "Gauss with partial pivoting",
            Method::CompletePivoting => "Gauss with complete pivoting",
            Method::Lu => "LU factorization",
            Method::Cholesky => "Cholesky factorization",
            Method::Jacobi => "Iterative method - Gauss-Jacobi",
            Method::Seidel => "Iterative method - Gauss-Seidel",
        }
    }

    /// Returns the short command-line slug for the method.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Method::Gauss => "gauss",
            Method::PartialPivoting => "partial",
            Method::CompletePivoting => "complete",
            Method::Lu => "lu",
            Method::Cholesky => "cholesky",
            Method::Jacobi => "jacobi",
            Method::Seidel => "seidel",
        }
    }

    /// Returns true for the stationary iterative methods.
    #[must_use]
    pub fn is_iterative(self) -> bool {
        matches!(self, Method::Jacobi | Method::Seidel)
    }

    /// Label used in success messages.
    pub(super) fn success_label(self) -> &'static str {
        match self {
            Method::Gauss => "Gauss elimination without pivoting",
            Method::PartialPivoting => "Gauss with partial pivoting",
            Method::CompletePivoting => "Gauss with complete pivoting",
            Method::Lu => "LU factorization without pivoting",
            Method::Cholesky => "Cholesky factorization",
            Method::Jacobi => "Gauss-Jacobi",
            Method::Seidel => "Gauss-Seidel",
        }
    }

    /// Label used in non-convergence warnings.
    pub(super) fn short_label(self) -> &'static str {
        match self {
            Method::Jacobi => "Jacobi",
            other => other.success_label(),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = UnknownMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Method::ALL
            .into_iter()
            .find(|method| {
                method.name().eq_ignore_ascii_case(trimmed)
                    || method.slug().eq_ignore_ascii_case(trimmed)
            })
            .ok_or_else(|| UnknownMethod(s.to_owned()))
    }
}
