//! Membership, containment, intersection and union.
//!
//! Every operation is a provided method on [`IntervalAlgebra`], so any
//! representation that can hand out its two endpoints gets the whole algebra.
//! Pairwise operations first put their operands in canonical order (see
//! [`crate::ordering`]) and then only deal with the case where the first
//! interval starts no later than the second.

use std::cmp::Ordering;

use crate::endpoint::{Endpoint, Mode};
use crate::interval::Interval;
use crate::ordering::{cmp_upper, Bounds, Pair};

pub trait IntervalAlgebra<T: Ord> {
    fn lower(&self) -> &Endpoint<T>;

    fn upper(&self) -> &Endpoint<T>;

    /// Whether the interval admits no value at all.
    ///
    /// An interval with an unbounded side is never empty. An open interval
    /// between two distinct values is never empty either, even when `T` has no
    /// value strictly between them.
    fn is_empty(&self) -> bool {
        is_empty(Bounds::of(self))
    }

    /// Whether `value` is a member of the interval.
    fn includes(&self, value: &T) -> bool {
        lower_admits(self.lower(), value) && upper_admits(self.upper(), value)
    }

    /// Whether every member of `other` is a member of this interval.
    fn includes_interval<I>(&self, other: &I) -> bool
    where
        I: IntervalAlgebra<T> + ?Sized,
    {
        let lower_admitted = match (self.lower(), other.lower()) {
            (Endpoint::Unbounded, _) => true,
            (Endpoint::Bounded(..), Endpoint::Unbounded) => false,
            (Endpoint::Bounded(x, xm), Endpoint::Bounded(y, ym)) => match x.cmp(y) {
                Ordering::Less => true,
                Ordering::Equal => xm.is_closed() || ym.is_open(),
                Ordering::Greater => false,
            },
        };

        let upper_admitted = match (self.upper(), other.upper()) {
            (Endpoint::Unbounded, _) => true,
            (Endpoint::Bounded(..), Endpoint::Unbounded) => false,
            (Endpoint::Bounded(x, xm), Endpoint::Bounded(y, ym)) => match x.cmp(y) {
                Ordering::Greater => true,
                Ordering::Equal => xm.is_closed() || ym.is_open(),
                Ordering::Less => false,
            },
        };

        lower_admitted && upper_admitted
    }

    /// Whether the two intervals share at least one member.
    fn intersects<I>(&self, other: &I) -> bool
    where
        I: IntervalAlgebra<T> + ?Sized,
    {
        let (a, b) = (Bounds::of(self), Bounds::of(other));
        if is_empty(a) || is_empty(b) {
            return false;
        }
        Pair::new(a, b).overlaps()
    }

    /// The members shared by both intervals.
    ///
    /// When nothing is shared the result is a degenerate open interval
    /// `(v, v)`, for which [`is_empty`](IntervalAlgebra::is_empty) holds. The
    /// placeholder `v` is this interval's lower value when bounded, and
    /// otherwise a bounded value taken from the operand that caused the
    /// emptiness.
    fn intersection<I>(&self, other: &I) -> Interval<T>
    where
        T: Clone,
        I: IntervalAlgebra<T> + ?Sized,
    {
        let (a, b) = (Bounds::of(self), Bounds::of(other));

        if is_empty(a) {
            return empty_near(a, a);
        }
        if is_empty(b) {
            return empty_near(a, b);
        }

        let pair = Pair::new(a, b);
        if pair.is_identical() {
            return a.to_interval();
        }
        if !pair.overlaps() {
            return empty_near(a, pair.second);
        }

        // the later-starting interval holds the tighter lower endpoint
        let upper = if cmp_upper(pair.first.upper, pair.second.upper) == Ordering::Less {
            pair.first.upper
        } else {
            pair.second.upper
        };

        Interval::from_endpoints(pair.second.lower.clone(), upper.clone())
    }

    /// The single interval holding exactly the members of both, if one
    /// exists.
    ///
    /// `None` means the two cannot be expressed as one interval: either
    /// operand is empty, or they are separated by a gap, or they meet at a
    /// value that both of them exclude.
    fn union<I>(&self, other: &I) -> Option<Interval<T>>
    where
        T: Clone,
        I: IntervalAlgebra<T> + ?Sized,
    {
        let (a, b) = (Bounds::of(self), Bounds::of(other));
        if is_empty(a) || is_empty(b) {
            return None;
        }

        let pair = Pair::new(a, b);
        if pair.overlaps() {
            let upper = if cmp_upper(pair.first.upper, pair.second.upper) == Ordering::Greater {
                pair.first.upper
            } else {
                pair.second.upper
            };
            return Some(Interval::from_endpoints(
                pair.first.lower.clone(),
                upper.clone(),
            ));
        }

        if pair.gap() == Ordering::Equal && pair.boundary_touches() {
            return Some(Interval::from_endpoints(
                pair.first.lower.clone(),
                pair.second.upper.clone(),
            ));
        }

        None
    }
}

impl<T: Ord> IntervalAlgebra<T> for Interval<T> {
    fn lower(&self) -> &Endpoint<T> {
        Interval::lower(self)
    }

    fn upper(&self) -> &Endpoint<T> {
        Interval::upper(self)
    }
}

fn is_empty<T: Ord>(bounds: Bounds<'_, T>) -> bool {
    match (bounds.lower, bounds.upper) {
        (Endpoint::Bounded(l, lm), Endpoint::Bounded(u, um)) => match l.cmp(u) {
            Ordering::Less => false,
            Ordering::Greater => true,
            Ordering::Equal => lm.is_open() || um.is_open(),
        },
        _ => false,
    }
}

pub(crate) fn lower_admits<T: Ord>(lower: &Endpoint<T>, value: &T) -> bool {
    match lower {
        Endpoint::Unbounded => true,
        Endpoint::Bounded(bound, Mode::Closed) => bound <= value,
        Endpoint::Bounded(bound, Mode::Open) => bound < value,
    }
}

fn upper_admits<T: Ord>(upper: &Endpoint<T>, value: &T) -> bool {
    match upper {
        Endpoint::Unbounded => true,
        Endpoint::Bounded(bound, Mode::Closed) => bound >= value,
        Endpoint::Bounded(bound, Mode::Open) => bound > value,
    }
}

/// The canonical empty interval, placed at `preferred`'s lower value when it
/// is bounded and at a bounded value of `fallback` otherwise.
///
/// `fallback` is always either an empty interval or the second interval of a
/// pair that failed the gap test, and both have a bounded lower endpoint.
fn empty_near<T: Ord + Clone>(preferred: Bounds<'_, T>, fallback: Bounds<'_, T>) -> Interval<T> {
    let value = preferred
        .lower
        .value()
        .or_else(|| fallback.lower.value())
        .or_else(|| fallback.upper.value());
    match value {
        Some(value) => Interval::empty_at(value.clone()),
        None => unreachable!("empty or separated interval must have a bounded endpoint"),
    }
}
