use numeth_core::Observer;

/// Feeds each event to `first`, then to `second`.
///
/// Both observers always see the event. When both return an action, the one
/// from `first` wins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Chain<O1, O2> {
    pub first: O1,
    pub second: O2,
}

impl<O1, O2> Chain<O1, O2> {
    pub fn new(first: O1, second: O2) -> Self {
        Self { first, second }
    }
}

impl<E, A, O1, O2> Observer<E, A> for Chain<O1, O2>
where
    O1: Observer<E, A>,
    O2: Observer<E, A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        let first = self.first.observe(event);
        let second = self.second.observe(event);
        first.or(second)
    }
}
