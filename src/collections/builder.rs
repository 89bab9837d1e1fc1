use std::mem;

use log::{debug, trace};

use crate::algebra::IntervalAlgebra;
use crate::interval::Interval;

use super::DisjointIntervalSet;

/// Accumulates intervals into a [`DisjointIntervalSet`].
///
/// Every included interval is coalesced with the members it intersects or
/// adjoins, so the working collection is disjoint and maximally merged after
/// each call, whatever the order of inclusion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Builder<T> {
    working: Vec<Interval<T>>,
}

impl<T> Default for Builder<T> {
    fn default() -> Self {
        Self {
            working: Vec::new(),
        }
    }
}

impl<T: Ord + Clone> Builder<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds every value of `interval` to the set under construction.
    ///
    /// Empty intervals add nothing and are dropped. An interval already
    /// covered by a member leaves the builder unchanged.
    pub fn include<K: Into<Interval<T>>>(&mut self, interval: K) -> &mut Self {
        let mut pending = interval.into();

        if pending.is_empty() {
            trace!("dropping empty interval");
            return self;
        }

        if self.working.iter().any(|member| member.includes_interval(&pending)) {
            trace!("interval absorbed by existing member");
            return self;
        }

        while let Some(union) = self.take_mergeable(&pending) {
            pending = union;
        }

        self.working.push(pending);
        trace!("included interval; {} members", self.working.len());
        self
    }

    pub fn include_set(&mut self, set: &DisjointIntervalSet<T>) -> &mut Self {
        self.include_all(set)
    }

    pub fn include_all<I, K>(&mut self, intervals: I) -> &mut Self
    where
        I: IntoIterator<Item = K>,
        K: Into<Interval<T>>,
    {
        for interval in intervals {
            self.include(interval);
        }
        self
    }

    pub fn len(&self) -> usize {
        self.working.len()
    }

    pub fn is_empty(&self) -> bool {
        self.working.is_empty()
    }

    /// Freezes the working collection into a set, leaving this builder empty.
    pub fn build(&mut self) -> DisjointIntervalSet<T> {
        let mut intervals = mem::take(&mut self.working);
        intervals.sort();
        debug!("built disjoint interval set with {} members", intervals.len());
        DisjointIntervalSet::from_sorted(intervals)
    }

    /// Removes the first member that can be merged with `pending` and returns
    /// their union.
    fn take_mergeable(&mut self, pending: &Interval<T>) -> Option<Interval<T>> {
        let (index, union) = self
            .working
            .iter()
            .enumerate()
            .find_map(|(index, member)| member.union(pending).map(|union| (index, union)))?;

        self.working.swap_remove(index);
        trace!("coalesced member {} into included interval", index);
        Some(union)
    }
}

impl<T: Ord + Clone, K: Into<Interval<T>>> Extend<K> for Builder<T> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        self.include_all(iter);
    }
}
