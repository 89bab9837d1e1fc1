use std::ops::Bound;

/// Whether a bounded endpoint admits its own value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde_derive", derive(serde::Deserialize, serde::Serialize))]
pub enum Mode {
    Open,
    Closed,
}

impl Mode {
    pub fn is_open(self) -> bool {
        self == Mode::Open
    }

    pub fn is_closed(self) -> bool {
        self == Mode::Closed
    }
}

/// One side of an interval.
///
/// `Unbounded` stands for negative infinity when used as a lower endpoint and
/// positive infinity when used as an upper endpoint. It has no mode: it never
/// admits or excludes a particular value, it admits everything in its
/// direction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde_derive", derive(serde::Deserialize, serde::Serialize))]
pub enum Endpoint<T> {
    Unbounded,
    Bounded(T, Mode),
}

impl<T> Endpoint<T> {
    pub fn unbounded() -> Self {
        Endpoint::Unbounded
    }

    pub fn bounded(value: T, mode: Mode) -> Self {
        Endpoint::Bounded(value, mode)
    }

    pub fn open(value: T) -> Self {
        Endpoint::Bounded(value, Mode::Open)
    }

    pub fn closed(value: T) -> Self {
        Endpoint::Bounded(value, Mode::Closed)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Endpoint::Bounded(value, _) => Some(value),
            Endpoint::Unbounded => None,
        }
    }

    pub fn mode(&self) -> Option<Mode> {
        match self {
            Endpoint::Bounded(_, mode) => Some(*mode),
            Endpoint::Unbounded => None,
        }
    }

    pub fn is_bounded(&self) -> bool {
        matches!(self, Endpoint::Bounded(..))
    }

    pub fn is_unbounded(&self) -> bool {
        matches!(self, Endpoint::Unbounded)
    }

    pub fn is_closed(&self) -> bool {
        matches!(self, Endpoint::Bounded(_, Mode::Closed))
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Endpoint::Bounded(_, Mode::Open))
    }

    pub fn as_bound(&self) -> Bound<&T> {
        match self {
            Endpoint::Bounded(value, Mode::Closed) => Bound::Included(value),
            Endpoint::Bounded(value, Mode::Open) => Bound::Excluded(value),
            Endpoint::Unbounded => Bound::Unbounded,
        }
    }

    pub fn into_value(self) -> Option<T> {
        match self {
            Endpoint::Bounded(value, _) => Some(value),
            Endpoint::Unbounded => None,
        }
    }
}

impl<T> From<Bound<T>> for Endpoint<T> {
    fn from(bound: Bound<T>) -> Self {
        match bound {
            Bound::Included(value) => Endpoint::closed(value),
            Bound::Excluded(value) => Endpoint::open(value),
            Bound::Unbounded => Endpoint::Unbounded,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::{assert_eq, assert_ne};
    use rstest::rstest;

    #[rstest]
    fn test_unbounded_endpoints_are_equal() {
        assert_eq!(Endpoint::<u32>::unbounded(), Endpoint::Unbounded);
        assert_eq!(Endpoint::<u32>::Unbounded.mode(), None);
        assert_eq!(Endpoint::<u32>::Unbounded.value(), None);
    }

    #[rstest]
    #[case(Endpoint::closed(1), Endpoint::open(1))]
    #[case(Endpoint::closed(1), Endpoint::closed(2))]
    #[case(Endpoint::open(1), Endpoint::Unbounded)]
    fn test_bounded_endpoint_equality_needs_value_and_mode(
        #[case] a: Endpoint<u32>,
        #[case] b: Endpoint<u32>,
    ) {
        assert_ne!(a, b);
        assert_eq!(a.clone(), a);
    }

    #[rstest]
    #[case(Bound::Included(3), Endpoint::closed(3))]
    #[case(Bound::Excluded(3), Endpoint::open(3))]
    #[case(Bound::Unbounded, Endpoint::Unbounded)]
    fn test_from_bound(#[case] bound: Bound<u32>, #[case] expected: Endpoint<u32>) {
        let endpoint = Endpoint::from(bound);
        assert_eq!(endpoint.as_bound(), expected.as_bound());
        assert_eq!(endpoint, expected);
    }

    #[rstest]
    fn test_mode_accessors() {
        let endpoint = Endpoint::open('a');
        assert_eq!(endpoint.mode(), Some(Mode::Open));
        assert_eq!(endpoint.value(), Some(&'a'));
        assert_eq!(endpoint.is_open(), true);
        assert_eq!(endpoint.is_closed(), false);
        assert_eq!(endpoint.is_bounded(), true);
        assert_eq!(endpoint.into_value(), Some('a'));
    }
}
