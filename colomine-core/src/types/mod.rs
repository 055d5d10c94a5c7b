//! Data model for co-location mining.
//! Points and catalogs, sketches and count semantics, instances and patterns.

pub mod catalog;
pub mod collections;
pub mod identifiers;
pub mod instance;
pub mod layout;
pub mod pattern;
pub mod point;
pub mod sketch;

pub use catalog::SpatialCatalog;
pub use collections::{FxHashMap, FxHashSet};
pub use identifiers::{KeywordId, PointId};
pub use instance::{Instance, Slot};
pub use layout::SlotLayout;
pub use pattern::{FrequentPattern, PatternSlot};
pub use point::{Bounds, Point};
pub use sketch::{CountSemantics, KeywordCounts, Sketch};
