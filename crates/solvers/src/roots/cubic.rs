use numeth_core::{Differentiable, FixedPointForm, ScalarFunction};

/// The default test function `f(x) = x³ − 9x + 3`.
///
/// It has three real roots, near −3.1545, 0.3376 and 2.8169. The iteration
/// function `phi(x) = ∛(9x − 3)` uses a sign-preserving cube root.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cubic;

impl ScalarFunction for Cubic {
    fn value(&self, x: f64) -> f64 {
        x * x * x - 9.0 * x + 3.0
    }
}

impl Differentiable for Cubic {
    fn derivative(&self, x: f64) -> f64 {
        3.0 * x * x - 9.0
    }
}

impl FixedPointForm for Cubic {
    fn phi(&self, x: f64) -> f64 {
        (9.0 * x - 3.0).cbrt()
    }
}
