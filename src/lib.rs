//! Intervals over any totally ordered type, with an algebra for membership,
//! intersection and union, and a set type that keeps its members disjoint.
//!
//! ```rust
//! use interval_algebra::{DisjointIntervalSet, Interval, IntervalAlgebra};
//!
//! let a = Interval::open(0, 1).unwrap();
//! let b = Interval::closed(1, 2).unwrap();
//!
//! assert!(!a.intersects(&b));
//! assert_eq!(a.union(&b), Some(Interval::open_closed(0, 2).unwrap()));
//!
//! let set = DisjointIntervalSet::builder()
//!     .include(a)
//!     .include(b)
//!     .include(Interval::at_least(5))
//!     .build();
//!
//! assert_eq!(set.to_string(), "{(0, 2], [5, +∞)}");
//! assert!(set.includes(&2));
//! assert!(!set.includes(&0));
//! ```
//!
//! Only the order of the basis type is used, never arithmetic on it. One
//! consequence is that open intervals over discrete types may be reported as
//! non-empty while holding no values, e.g. `(1, 2)` over integers.

pub mod algebra;
pub mod collections;
pub mod endpoint;
pub mod error;
pub mod interval;
pub mod ordering;

pub use algebra::IntervalAlgebra;
pub use collections::{Builder, DisjointIntervalSet, Entry};
pub use endpoint::{Endpoint, Mode};
pub use error::IntervalError;
pub use interval::Interval;
