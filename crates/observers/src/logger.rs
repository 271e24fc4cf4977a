use log::Level;
use numeth_core::Observer;

use crate::traits::{HasError, HasEstimate, HasIteration};

/// Logs one record per event and never intervenes.
///
/// Records go to the `numeth::iterations` target, so they can be filtered
/// separately from the solvers' own logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogObserver {
    level: Level,
}

impl LogObserver {
    pub const TARGET: &'static str = "numeth::iterations";

    #[must_use]
    pub fn new(level: Level) -> Self {
        Self { level }
    }

    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }
}

impl Default for LogObserver {
    fn default() -> Self {
        Self::new(Level::Debug)
    }
}

impl<E, A> Observer<E, A> for LogObserver
where
    E: HasIteration + HasEstimate + HasError,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        log::log!(
            target: Self::TARGET,
            self.level,
            "iter {:4}: x = {:.8}, f(x) = {:.3e}, error = {:.3e}",
            event.iter(),
            event.estimate(),
            event.value(),
            event.error()
        );
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use numeth_solvers::roots::{self, Cubic, Method, RootInput, Status};

    #[test]
    fn never_changes_the_outcome() {
        let logged = roots::find_root(
            Method::Newton,
            &Cubic,
            &RootInput::default(),
            LogObserver::new(Level::Info),
        )
        .expect("should solve");
        let plain = roots::find_root(Method::Newton, &Cubic, &RootInput::default(), ())
            .expect("should solve");

        assert_eq!(logged.status, Status::Converged);
        assert_eq!(logged.iters, plain.iters);
        assert_eq!(logged.x.to_bits(), plain.x.to_bits());
    }

    #[test]
    fn defaults_to_debug() {
        assert_eq!(LogObserver::default().level(), Level::Debug);
    }
}
