use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;
use std::slice;
use std::vec;

use crate::algebra::{lower_admits, IntervalAlgebra};
use crate::interval::Interval;

use super::{Builder, Entry};

/// An immutable set of pairwise-disjoint intervals.
///
/// No two members share a value and no two members could be replaced by a
/// single interval, so the members are the maximal runs of the set. They are
/// kept sorted by the interval ordering, which makes equality and hashing
/// independent of the order in which intervals were included.
///
/// Sets are produced by a [`Builder`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde_derive", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(
    feature = "serde_derive",
    serde(
        from = "RawSet<T>",
        bound(deserialize = "T: Ord + Clone + serde::Deserialize<'de>")
    )
)]
pub struct DisjointIntervalSet<T> {
    intervals: Vec<Interval<T>>,
}

// members of a deserialised set are re-included so the disjointness holds
#[cfg(feature = "serde_derive")]
#[derive(serde::Deserialize)]
#[serde(bound(deserialize = "T: Ord + serde::Deserialize<'de>"))]
struct RawSet<T> {
    intervals: Vec<Interval<T>>,
}

#[cfg(feature = "serde_derive")]
impl<T: Ord + Clone> From<RawSet<T>> for DisjointIntervalSet<T> {
    fn from(raw: RawSet<T>) -> Self {
        Self::from(raw.intervals)
    }
}

impl<T> Default for DisjointIntervalSet<T> {
    #[inline(always)]
    fn default() -> Self {
        Self {
            intervals: Vec::new(),
        }
    }
}

impl<T, K> FromIterator<K> for DisjointIntervalSet<T>
where
    K: Into<Interval<T>>,
    T: Ord + Clone,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Builder::new().include_all(iter).build()
    }
}

impl<T: Ord + Clone> From<Vec<Interval<T>>> for DisjointIntervalSet<T> {
    fn from(intervals: Vec<Interval<T>>) -> Self {
        intervals.into_iter().collect()
    }
}

impl<T> DisjointIntervalSet<T> {
    #[inline(always)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Callers must pass members that are sorted, disjoint and not mergeable.
    pub(crate) fn from_sorted(intervals: Vec<Interval<T>>) -> Self {
        Self { intervals }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    #[inline(always)]
    pub fn get(&self, index: usize) -> Option<&Interval<T>> {
        self.intervals.get(index)
    }

    #[inline(always)]
    pub fn iter(&self) -> slice::Iter<'_, Interval<T>> {
        self.intervals.iter()
    }

    #[inline(always)]
    pub fn as_slice(&self) -> &[Interval<T>] {
        &self.intervals
    }
}

impl<T: Ord + Clone> DisjointIntervalSet<T> {
    #[inline(always)]
    pub fn builder() -> Builder<T> {
        Builder::new()
    }
}

impl<T: Ord> DisjointIntervalSet<T> {
    /// Whether some member includes `value`.
    pub fn includes(&self, value: &T) -> bool {
        self.position(value).is_some()
    }

    /// Whether `interval` is exactly one of the members. This is not an
    /// inclusion test: `[1, 2]` is not contained in `{[0, 5]}`.
    pub fn contains(&self, interval: &Interval<T>) -> bool {
        self.intervals.binary_search(interval).is_ok()
    }

    /// The member including `value`, if any.
    pub fn find(&self, value: &T) -> Option<Entry<'_, T>> {
        self.position(value).map(|index| Entry {
            index,
            interval: &self.intervals[index],
        })
    }

    fn position(&self, value: &T) -> Option<usize> {
        self.intervals
            .binary_search_by(|member| {
                if member.includes(value) {
                    Ordering::Equal
                } else if lower_admits(member.lower(), value) {
                    Ordering::Less
                } else {
                    Ordering::Greater
                }
            })
            .ok()
    }
}

impl<T> IntoIterator for DisjointIntervalSet<T> {
    type Item = Interval<T>;
    type IntoIter = vec::IntoIter<Interval<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a DisjointIntervalSet<T> {
    type Item = &'a Interval<T>;
    type IntoIter = slice::Iter<'a, Interval<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}

impl<T: fmt::Display> fmt::Display for DisjointIntervalSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, interval) in self.intervals.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", interval)?;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    #[fixture]
    fn set() -> DisjointIntervalSet<i32> {
        DisjointIntervalSet::builder()
            .include(Interval::closed(5, 6).unwrap())
            .include(Interval::less_than(-10))
            .include(Interval::open_closed(0, 2).unwrap())
            .include(Interval::greater_than(20))
            .build()
    }

    #[rstest]
    fn test_members_are_sorted(set: DisjointIntervalSet<i32>) {
        assert_eq!(set.len(), 4);
        assert_eq!(set.to_string(), "{(−∞, -10), (0, 2], [5, 6], (20, +∞)}");
    }

    #[rstest]
    #[case(-100, true)]
    #[case(-10, false)]
    #[case(0, false)]
    #[case(1, true)]
    #[case(2, true)]
    #[case(3, false)]
    #[case(5, true)]
    #[case(6, true)]
    #[case(20, false)]
    #[case(21, true)]
    fn test_includes(set: DisjointIntervalSet<i32>, #[case] value: i32, #[case] expected: bool) {
        assert_eq!(set.includes(&value), expected);
    }

    #[rstest]
    fn test_contains_is_exact(set: DisjointIntervalSet<i32>) {
        assert_eq!(set.contains(&Interval::closed(5, 6).unwrap()), true);
        assert_eq!(set.contains(&Interval::point(5)), false);
        assert_eq!(set.contains(&Interval::open(5, 6).unwrap()), false);
        assert_eq!(set.contains(&Interval::less_than(-10)), true);
    }

    #[rstest]
    fn test_find(set: DisjointIntervalSet<i32>) {
        let entry = set.find(&5).unwrap();
        assert_eq!(entry.index(), 2);
        assert_eq!(entry.interval(), &Interval::closed(5, 6).unwrap());
        assert_eq!(set.find(&4), None);
    }

    #[rstest]
    fn test_empty_set() {
        let set: DisjointIntervalSet<i32> = DisjointIntervalSet::new();
        assert_eq!(set.is_empty(), true);
        assert_eq!(set.includes(&0), false);
        assert_eq!(set.to_string(), "{}");
        assert_eq!(set, DisjointIntervalSet::builder().build());
    }

    #[rstest]
    fn test_collect_merges() {
        let set: DisjointIntervalSet<i32> = vec![
            Interval::closed(4, 5).unwrap(),
            Interval::closed(0, 1).unwrap(),
            Interval::closed(1, 2).unwrap(),
        ]
        .into_iter()
        .collect();

        let members: Vec<Interval<i32>> = set.into_iter().collect();
        assert_eq!(
            members,
            vec![Interval::closed(0, 2).unwrap(), Interval::closed(4, 5).unwrap()]
        );
    }

    #[rstest]
    fn test_insertion_order_does_not_affect_equality() {
        let a = DisjointIntervalSet::from(vec![
            Interval::closed(0, 1).unwrap(),
            Interval::closed(3, 4).unwrap(),
        ]);
        let b = DisjointIntervalSet::from(vec![
            Interval::closed(3, 4).unwrap(),
            Interval::closed(0, 1).unwrap(),
        ]);
        assert_eq!(a, b);
    }

    #[cfg(feature = "serde_derive")]
    #[rstest]
    fn test_deserialize_coalesces(set: DisjointIntervalSet<i32>) {
        let json = serde_json::to_string(&set).unwrap();
        let back: DisjointIntervalSet<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);

        let overlapping = r#"{"intervals":[
            {"lower":{"Bounded":[0,"Closed"]},"upper":{"Bounded":[2,"Closed"]}},
            {"lower":{"Bounded":[1,"Closed"]},"upper":{"Bounded":[3,"Open"]}}
        ]}"#;
        let merged: DisjointIntervalSet<i32> = serde_json::from_str(overlapping).unwrap();
        assert_eq!(merged.as_slice(), &[Interval::closed_open(0, 3).unwrap()]);
    }
}
