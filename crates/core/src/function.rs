/// A real function of one real variable.
///
/// Root finders evaluate the function through this trait, so any type that
/// can produce `f(x)` can be solved without changing solver code.
pub trait ScalarFunction {
    /// Evaluates `f(x)`.
    fn value(&self, x: f64) -> f64;
}

/// A scalar function that also provides its first derivative.
pub trait Differentiable: ScalarFunction {
    /// Evaluates `f'(x)`.
    fn derivative(&self, x: f64) -> f64;
}

/// A scalar function paired with an iteration function `phi`.
///
/// The roots of `f` are expected to coincide with the fixed points
/// `phi(x) = x`.
pub trait FixedPointForm: ScalarFunction {
    /// Evaluates `phi(x)`.
    fn phi(&self, x: f64) -> f64;
}

impl<T: ScalarFunction + ?Sized> ScalarFunction for &T {
    fn value(&self, x: f64) -> f64 {
        (**self).value(x)
    }
}

impl<T: Differentiable + ?Sized> Differentiable for &T {
    fn derivative(&self, x: f64) -> f64 {
        (**self).derivative(x)
    }
}

impl<T: FixedPointForm + ?Sized> FixedPointForm for &T {
    fn phi(&self, x: f64) -> f64 {
        (**self).phi(x)
    }
}

/// Adapts closures to the function capability traits.
///
/// Start from `f` with [`Functions::new`], then attach the derivative and the
/// iteration function as needed:
///
/// ```
/// use numeth_core::{Differentiable, Functions, ScalarFunction};
///
/// let square = Functions::new(|x| x * x - 2.0).with_derivative(|x| 2.0 * x);
///
/// assert_eq!(square.value(2.0), 2.0);
/// assert_eq!(square.derivative(2.0), 4.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Functions<F, D = (), P = ()> {
    f: F,
    derivative: D,
    phi: P,
}

impl<F> Functions<F>
where
    F: Fn(f64) -> f64,
{
    /// Wraps `f` without a derivative or iteration function.
    pub fn new(f: F) -> Self {
        Self {
            f,
            derivative: (),
            phi: (),
        }
    }
}

impl<F, D, P> Functions<F, D, P> {
    /// Attaches the derivative `f'`.
    pub fn with_derivative<D2>(self, derivative: D2) -> Functions<F, D2, P>
    where
        D2: Fn(f64) -> f64,
    {
        Functions {
            f: self.f,
            derivative,
            phi: self.phi,
        }
    }

    /// Attaches the iteration function `phi`.
    pub fn with_phi<P2>(self, phi: P2) -> Functions<F, D, P2>
    where
        P2: Fn(f64) -> f64,
    {
        Functions {
            f: self.f,
            derivative: self.derivative,
            phi,
        }
    }
}

impl<F, D, P> ScalarFunction for Functions<F, D, P>
where
    F: Fn(f64) -> f64,
{
    fn value(&self, x: f64) -> f64 {
        (self.f)(x)
    }
}

impl<F, D, P> Differentiable for Functions<F, D, P>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    fn derivative(&self, x: f64) -> f64 {
        (self.derivative)(x)
    }
}

impl<F, D, P> FixedPointForm for Functions<F, D, P>
where
    F: Fn(f64) -> f64,
    P: Fn(f64) -> f64,
{
    fn phi(&self, x: f64) -> f64 {
        (self.phi)(x)
    }
}
