//! Total order over intervals of the same basis type.
//!
//! The order sorts first by how early an interval starts and then by how
//! early it ends. An unbounded lower endpoint starts before every bounded
//! one; at the same value a closed lower endpoint starts before an open one.
//! An unbounded upper endpoint ends after every bounded one; at the same
//! value an open upper endpoint ends before a closed one.

use std::cmp::Ordering;

use crate::algebra::IntervalAlgebra;
use crate::endpoint::{Endpoint, Mode};
use crate::interval::Interval;

/// Compares two lower endpoints by how early they start.
pub fn cmp_lower<T: Ord>(a: &Endpoint<T>, b: &Endpoint<T>) -> Ordering {
    match (a, b) {
        (Endpoint::Unbounded, Endpoint::Unbounded) => Ordering::Equal,
        (Endpoint::Unbounded, Endpoint::Bounded(..)) => Ordering::Less,
        (Endpoint::Bounded(..), Endpoint::Unbounded) => Ordering::Greater,
        (Endpoint::Bounded(x, xm), Endpoint::Bounded(y, ym)) => {
            x.cmp(y).then_with(|| match (xm, ym) {
                (Mode::Closed, Mode::Open) => Ordering::Less,
                (Mode::Open, Mode::Closed) => Ordering::Greater,
                _ => Ordering::Equal,
            })
        }
    }
}

/// Compares two upper endpoints by how late they end.
pub fn cmp_upper<T: Ord>(a: &Endpoint<T>, b: &Endpoint<T>) -> Ordering {
    match (a, b) {
        (Endpoint::Unbounded, Endpoint::Unbounded) => Ordering::Equal,
        (Endpoint::Unbounded, Endpoint::Bounded(..)) => Ordering::Greater,
        (Endpoint::Bounded(..), Endpoint::Unbounded) => Ordering::Less,
        (Endpoint::Bounded(x, xm), Endpoint::Bounded(y, ym)) => {
            x.cmp(y).then_with(|| match (xm, ym) {
                (Mode::Open, Mode::Closed) => Ordering::Less,
                (Mode::Closed, Mode::Open) => Ordering::Greater,
                _ => Ordering::Equal,
            })
        }
    }
}

/// Compares the value of a lower endpoint against the value of an upper
/// endpoint, ignoring modes.
///
/// An unbounded endpoint on either side leaves no gap, so the result is
/// `Less` whenever either endpoint is unbounded.
pub(crate) fn cmp_lower_to_upper<T: Ord>(lower: &Endpoint<T>, upper: &Endpoint<T>) -> Ordering {
    match (lower, upper) {
        (Endpoint::Bounded(l, _), Endpoint::Bounded(u, _)) => l.cmp(u),
        _ => Ordering::Less,
    }
}

/// Orders two intervals, possibly of different representations.
pub fn compare<T, A, B>(a: &A, b: &B) -> Ordering
where
    T: Ord,
    A: IntervalAlgebra<T> + ?Sized,
    B: IntervalAlgebra<T> + ?Sized,
{
    Bounds::of(a).cmp(&Bounds::of(b))
}

/// Orders two intervals by their upper endpoints alone.
pub fn upper_endpoint_value_compare<T, A, B>(a: &A, b: &B) -> Ordering
where
    T: Ord,
    A: IntervalAlgebra<T> + ?Sized,
    B: IntervalAlgebra<T> + ?Sized,
{
    cmp_upper(a.upper(), b.upper())
}

/// Borrowed endpoints of an interval, independent of its representation.
pub(crate) struct Bounds<'a, T> {
    pub(crate) lower: &'a Endpoint<T>,
    pub(crate) upper: &'a Endpoint<T>,
}

impl<'a, T> Clone for Bounds<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for Bounds<'a, T> {}

impl<'a, T: Ord> Bounds<'a, T> {
    pub(crate) fn of<I: IntervalAlgebra<T> + ?Sized>(interval: &'a I) -> Self {
        Self {
            lower: interval.lower(),
            upper: interval.upper(),
        }
    }

    pub(crate) fn cmp(&self, other: &Self) -> Ordering {
        cmp_lower(self.lower, other.lower).then_with(|| cmp_upper(self.upper, other.upper))
    }

    pub(crate) fn to_interval(self) -> Interval<T>
    where
        T: Clone,
    {
        Interval::from_endpoints(self.lower.clone(), self.upper.clone())
    }
}

/// The canonical `(first, second)` selection shared by the pairwise
/// operations: `first` never sorts after `second`.
pub(crate) struct Pair<'a, T> {
    pub(crate) first: Bounds<'a, T>,
    pub(crate) second: Bounds<'a, T>,
    pub(crate) ordering: Ordering,
}

impl<'a, T: Ord> Pair<'a, T> {
    pub(crate) fn new(a: Bounds<'a, T>, b: Bounds<'a, T>) -> Self {
        let ordering = a.cmp(&b);
        if ordering == Ordering::Greater {
            Self {
                first: b,
                second: a,
                ordering,
            }
        } else {
            Self {
                first: a,
                second: b,
                ordering,
            }
        }
    }

    pub(crate) fn is_identical(&self) -> bool {
        self.ordering == Ordering::Equal
    }

    /// Where the second interval starts relative to where the first ends.
    pub(crate) fn gap(&self) -> Ordering {
        cmp_lower_to_upper(self.second.lower, self.first.upper)
    }

    /// Whether the two boundary endpoints facing each other across the gap
    /// are both closed.
    pub(crate) fn boundary_closed(&self) -> bool {
        self.first.upper.is_closed() && self.second.lower.is_closed()
    }

    /// Whether at least one of the boundary endpoints is closed.
    pub(crate) fn boundary_touches(&self) -> bool {
        self.first.upper.is_closed() || self.second.lower.is_closed()
    }

    /// Whether the pair shares at least one member, assuming neither
    /// interval is empty.
    pub(crate) fn overlaps(&self) -> bool {
        if self.is_identical() {
            return true;
        }
        match self.gap() {
            Ordering::Greater => false,
            Ordering::Equal => self.boundary_closed(),
            Ordering::Less => true,
        }
    }
}

impl<T: Ord> PartialOrd for Interval<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Ord> Ord for Interval<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(Endpoint::Unbounded, Endpoint::closed(0), Ordering::Less)]
    #[case(Endpoint::closed(0), Endpoint::Unbounded, Ordering::Greater)]
    #[case(Endpoint::Unbounded, Endpoint::Unbounded, Ordering::Equal)]
    #[case(Endpoint::closed(1), Endpoint::open(1), Ordering::Less)]
    #[case(Endpoint::open(1), Endpoint::closed(2), Ordering::Less)]
    #[case(Endpoint::open(3), Endpoint::open(3), Ordering::Equal)]
    fn test_cmp_lower(#[case] a: Endpoint<i32>, #[case] b: Endpoint<i32>, #[case] expected: Ordering) {
        assert_eq!(cmp_lower(&a, &b), expected);
    }

    #[rstest]
    #[case(Endpoint::Unbounded, Endpoint::closed(0), Ordering::Greater)]
    #[case(Endpoint::closed(0), Endpoint::Unbounded, Ordering::Less)]
    #[case(Endpoint::Unbounded, Endpoint::Unbounded, Ordering::Equal)]
    #[case(Endpoint::open(1), Endpoint::closed(1), Ordering::Less)]
    #[case(Endpoint::closed(2), Endpoint::open(1), Ordering::Greater)]
    fn test_cmp_upper(#[case] a: Endpoint<i32>, #[case] b: Endpoint<i32>, #[case] expected: Ordering) {
        assert_eq!(cmp_upper(&a, &b), expected);
    }

    #[rstest]
    fn test_sort_order() {
        let mut intervals = vec![
            Interval::closed(1, 3).unwrap(),
            Interval::open(1, 3).unwrap(),
            Interval::closed_open(1, 3).unwrap(),
            Interval::less_than(2),
            Interval::at_least(1),
            Interval::unbounded(),
            Interval::closed(0, 5).unwrap(),
        ];
        intervals.sort();

        let expected = vec![
            Interval::less_than(2),
            Interval::unbounded(),
            Interval::closed(0, 5).unwrap(),
            Interval::closed_open(1, 3).unwrap(),
            Interval::closed(1, 3).unwrap(),
            Interval::at_least(1),
            Interval::open(1, 3).unwrap(),
        ];
        assert_eq!(intervals, expected);
    }

    #[rstest]
    fn test_identical_intervals_compare_equal() {
        let a = Interval::open_closed(2, 4).unwrap();
        let b = Interval::open_closed(2, 4).unwrap();
        assert_eq!(compare(&a, &b), Ordering::Equal);
    }

    #[rstest]
    fn test_upper_endpoint_value_compare_ignores_lower() {
        let a = Interval::closed(0, 4).unwrap();
        let b = Interval::closed_open(3, 4).unwrap();
        assert_eq!(upper_endpoint_value_compare(&a, &b), Ordering::Greater);
        assert_eq!(upper_endpoint_value_compare(&b, &Interval::at_least(9)), Ordering::Less);
    }

    #[rstest]
    #[case(Endpoint::closed(1), Endpoint::closed(1), Ordering::Equal)]
    #[case(Endpoint::open(2), Endpoint::closed(1), Ordering::Greater)]
    #[case(Endpoint::Unbounded, Endpoint::closed(1), Ordering::Less)]
    #[case(Endpoint::closed(7), Endpoint::Unbounded, Ordering::Less)]
    fn test_cmp_lower_to_upper(
        #[case] lower: Endpoint<i32>,
        #[case] upper: Endpoint<i32>,
        #[case] expected: Ordering,
    ) {
        assert_eq!(cmp_lower_to_upper(&lower, &upper), expected);
    }

    #[rstest]
    fn test_pair_puts_earlier_interval_first() {
        let a = Interval::closed(5, 6).unwrap();
        let b = Interval::closed(0, 1).unwrap();
        let pair = Pair::new(Bounds::of(&a), Bounds::of(&b));
        assert_eq!(pair.first.lower, &Endpoint::closed(0));
        assert_eq!(pair.second.lower, &Endpoint::closed(5));
        assert_eq!(pair.gap(), Ordering::Greater);
        assert_eq!(pair.overlaps(), false);
    }
}
