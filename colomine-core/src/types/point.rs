//! Points and axis-aligned bounds.

use serde::{Deserialize, Serialize};

use super::identifiers::{KeywordId, PointId};

/// A keyword-labeled point in the projected plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub id: PointId,
    pub x: f64,
    pub y: f64,
    pub keyword: KeywordId,
}

impl Point {
    #[inline]
    pub const fn new(id: PointId, x: f64, y: f64, keyword: KeywordId) -> Self {
        Self { id, x, y, keyword }
    }
}

/// Axis-aligned bounding box of a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Default for Bounds {
    fn default() -> Self {
        Self::empty()
    }
}

impl Bounds {
    #[inline]
    pub const fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Create an empty (inverted) box that expands to fit any point.
    #[inline]
    pub fn empty() -> Self {
        Self {
            x_min: f64::INFINITY,
            x_max: f64::NEG_INFINITY,
            y_min: f64::INFINITY,
            y_max: f64::NEG_INFINITY,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x_min > self.x_max || self.y_min > self.y_max
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    #[inline]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x_min && x <= self.x_max && y >= self.y_min && y <= self.y_max
    }

    #[inline]
    pub fn expand_to_include(&mut self, x: f64, y: f64) {
        self.x_min = self.x_min.min(x);
        self.x_max = self.x_max.max(x);
        self.y_min = self.y_min.min(y);
        self.y_max = self.y_max.max(y);
    }

    /// Smallest box covering both.
    #[inline]
    pub fn union(&self, other: &Bounds) -> Bounds {
        Bounds {
            x_min: self.x_min.min(other.x_min),
            x_max: self.x_max.max(other.x_max),
            y_min: self.y_min.min(other.y_min),
            y_max: self.y_max.max(other.y_max),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_bounds_expand_to_fit() {
        let mut b = Bounds::empty();
        assert!(b.is_empty());
        b.expand_to_include(1.0, 2.0);
        b.expand_to_include(-1.0, 5.0);
        assert!(!b.is_empty());
        assert_eq!(b, Bounds::new(-1.0, 1.0, 2.0, 5.0));
        assert_eq!(b.width(), 2.0);
        assert_eq!(b.height(), 3.0);
        assert!(b.contains(0.0, 3.0));
        assert!(!b.contains(0.0, 6.0));
    }
}
