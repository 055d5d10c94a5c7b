//! Tolerant bijective matching between slot layouts.

pub mod kuhn;
pub mod matcher;

pub use matcher::{InstanceMatcher, Mapping};
