use crate::interval::Interval;

/// A member of a [`DisjointIntervalSet`](super::DisjointIntervalSet) together
/// with its position in the set's canonical order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Entry<'a, T> {
    pub(crate) index: usize,
    pub(crate) interval: &'a Interval<T>,
}

impl<'a, T: 'a> Entry<'a, T> {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn interval(&self) -> &'a Interval<T> {
        self.interval
    }
}
