//! Re-exports of performance-oriented collection types.

pub use rustc_hash::{FxHashMap, FxHashSet};
pub use smallvec::SmallVec;
pub use std::collections::{BTreeMap, BTreeSet};

/// SmallVec for per-keyword slot indices (sketches rarely need more than 8).
pub type SmallVec8<T> = SmallVec<[T; 8]>;

/// SmallVec for short adjacency lists in the matcher.
pub type SmallVec4<T> = SmallVec<[T; 4]>;
