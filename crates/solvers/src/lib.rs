//! Numerical engines for dense linear systems and scalar roots.
//!
//! # Modules
//!
//! - [`linear`] — direct (Gaussian elimination, LU, Cholesky) and stationary
//!   iterative (Gauss-Jacobi, Gauss-Seidel) solvers for `A·x = b`
//! - [`roots`] — bracketing and open methods for `f(x) = 0`, with a
//!   per-call iteration trace
//!
//! The two engines share no state. Every call owns its working copies and
//! its trace, so independent calls can run concurrently.

pub mod linear;
pub mod roots;
