use std::convert::TryFrom;
use std::fmt;
use std::ops::{
    Bound, Range, RangeBounds, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive,
};

use crate::endpoint::{Endpoint, Mode};
use crate::error::IntervalError;

/// An interval over a totally ordered basis type `T`.
///
/// Both endpoints may be bounded (open or closed) or unbounded. When both are
/// bounded the lower value never exceeds the upper value; every public
/// constructor checks this.
///
/// The algebra relies only on `T`'s order and never on a notion of "next
/// value". An open interval such as `(1, 2)` over integers is therefore
/// reported as non-empty even though no integer lies inside it. Callers
/// working over discrete types should prefer closed endpoints.
///
/// Intervals are immutable. If `T` allows interior mutation that changes its
/// order, the interval's behaviour after such a mutation is unspecified.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde_derive", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(
    feature = "serde_derive",
    serde(
        try_from = "RawInterval<T>",
        bound(deserialize = "T: Ord + serde::Deserialize<'de>")
    )
)]
pub struct Interval<T> {
    lower: Endpoint<T>,
    upper: Endpoint<T>,
}

#[cfg(feature = "serde_derive")]
#[derive(serde::Deserialize)]
struct RawInterval<T> {
    lower: Endpoint<T>,
    upper: Endpoint<T>,
}

#[cfg(feature = "serde_derive")]
impl<T: Ord> TryFrom<RawInterval<T>> for Interval<T> {
    type Error = IntervalError;

    fn try_from(raw: RawInterval<T>) -> Result<Self, Self::Error> {
        Self::new(raw.lower, raw.upper)
    }
}

impl<T> Interval<T> {
    /// Builds an interval without checking endpoint order. Callers must have
    /// established `lower <= upper` already.
    pub(crate) fn from_endpoints(lower: Endpoint<T>, upper: Endpoint<T>) -> Self {
        Self { lower, upper }
    }

    pub fn lower(&self) -> &Endpoint<T> {
        &self.lower
    }

    pub fn upper(&self) -> &Endpoint<T> {
        &self.upper
    }

    pub fn into_inner(self) -> (Endpoint<T>, Endpoint<T>) {
        (self.lower, self.upper)
    }

    /// `(−∞, +∞)`.
    pub fn unbounded() -> Self {
        Self::from_endpoints(Endpoint::Unbounded, Endpoint::Unbounded)
    }

    /// `[lower, +∞)`.
    pub fn at_least(lower: T) -> Self {
        Self::from_endpoints(Endpoint::closed(lower), Endpoint::Unbounded)
    }

    /// `(lower, +∞)`.
    pub fn greater_than(lower: T) -> Self {
        Self::from_endpoints(Endpoint::open(lower), Endpoint::Unbounded)
    }

    /// `(−∞, upper]`.
    pub fn at_most(upper: T) -> Self {
        Self::from_endpoints(Endpoint::Unbounded, Endpoint::closed(upper))
    }

    /// `(−∞, upper)`.
    pub fn less_than(upper: T) -> Self {
        Self::from_endpoints(Endpoint::Unbounded, Endpoint::open(upper))
    }
}

impl<T: Clone> Interval<T> {
    /// The degenerate interval `[value, value]`.
    pub fn point(value: T) -> Self {
        Self::from_endpoints(Endpoint::closed(value.clone()), Endpoint::closed(value))
    }

    /// The canonical empty interval `(value, value)`.
    pub fn empty_at(value: T) -> Self {
        Self::from_endpoints(Endpoint::open(value.clone()), Endpoint::open(value))
    }
}

impl<T: Ord> Interval<T> {
    pub fn new(lower: Endpoint<T>, upper: Endpoint<T>) -> Result<Self, IntervalError> {
        if let (Endpoint::Bounded(l, _), Endpoint::Bounded(u, _)) = (&lower, &upper) {
            if u < l {
                return Err(IntervalError::Inverted);
            }
        }
        Ok(Self::from_endpoints(lower, upper))
    }

    /// Builds an interval from a mode and optional value per side; `None`
    /// marks that side unbounded and its mode is ignored.
    pub fn with_modes(
        lower_mode: Mode,
        lower: Option<T>,
        upper: Option<T>,
        upper_mode: Mode,
    ) -> Result<Self, IntervalError> {
        let lower = lower.map_or(Endpoint::Unbounded, |v| Endpoint::bounded(v, lower_mode));
        let upper = upper.map_or(Endpoint::Unbounded, |v| Endpoint::bounded(v, upper_mode));
        Self::new(lower, upper)
    }

    /// `[lower, upper]`.
    pub fn closed(lower: T, upper: T) -> Result<Self, IntervalError> {
        Self::new(Endpoint::closed(lower), Endpoint::closed(upper))
    }

    /// `(lower, upper)`.
    pub fn open(lower: T, upper: T) -> Result<Self, IntervalError> {
        Self::new(Endpoint::open(lower), Endpoint::open(upper))
    }

    /// `[lower, upper)`.
    pub fn closed_open(lower: T, upper: T) -> Result<Self, IntervalError> {
        Self::new(Endpoint::closed(lower), Endpoint::open(upper))
    }

    /// `(lower, upper]`.
    pub fn open_closed(lower: T, upper: T) -> Result<Self, IntervalError> {
        Self::new(Endpoint::open(lower), Endpoint::closed(upper))
    }
}

impl<T: Ord> TryFrom<Range<T>> for Interval<T> {
    type Error = IntervalError;

    fn try_from(range: Range<T>) -> Result<Self, Self::Error> {
        Self::closed_open(range.start, range.end)
    }
}

impl<T: Ord> TryFrom<RangeInclusive<T>> for Interval<T> {
    type Error = IntervalError;

    fn try_from(range: RangeInclusive<T>) -> Result<Self, Self::Error> {
        let (start, end) = range.into_inner();
        Self::closed(start, end)
    }
}

impl<T: Ord> TryFrom<(Bound<T>, Bound<T>)> for Interval<T> {
    type Error = IntervalError;

    fn try_from((lower, upper): (Bound<T>, Bound<T>)) -> Result<Self, Self::Error> {
        Self::new(lower.into(), upper.into())
    }
}

impl<T> From<RangeFrom<T>> for Interval<T> {
    fn from(range: RangeFrom<T>) -> Self {
        Self::at_least(range.start)
    }
}

impl<T> From<RangeTo<T>> for Interval<T> {
    fn from(range: RangeTo<T>) -> Self {
        Self::less_than(range.end)
    }
}

impl<T> From<RangeToInclusive<T>> for Interval<T> {
    fn from(range: RangeToInclusive<T>) -> Self {
        Self::at_most(range.end)
    }
}

impl<T> From<RangeFull> for Interval<T> {
    fn from(_: RangeFull) -> Self {
        Self::unbounded()
    }
}

impl<T: Clone> From<&'_ Interval<T>> for Interval<T> {
    fn from(interval: &Interval<T>) -> Self {
        interval.clone()
    }
}

impl<T> RangeBounds<T> for Interval<T> {
    fn start_bound(&self) -> Bound<&T> {
        self.lower.as_bound()
    }

    fn end_bound(&self) -> Bound<&T> {
        self.upper.as_bound()
    }
}

impl<T: fmt::Display> fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.lower {
            Endpoint::Bounded(value, Mode::Closed) => write!(f, "[{}", value)?,
            Endpoint::Bounded(value, Mode::Open) => write!(f, "({}", value)?,
            Endpoint::Unbounded => f.write_str("(−∞")?,
        }
        f.write_str(", ")?;
        match &self.upper {
            Endpoint::Bounded(value, Mode::Closed) => write!(f, "{}]", value),
            Endpoint::Bounded(value, Mode::Open) => write!(f, "{})", value),
            Endpoint::Unbounded => f.write_str("+∞)"),
        }
    }
}
