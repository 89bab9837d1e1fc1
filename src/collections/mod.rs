mod builder;
pub use builder::Builder;

mod entry;
pub use entry::Entry;

pub mod set;
pub use set::DisjointIntervalSet;
