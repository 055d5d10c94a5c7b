//! Geometry seen by the instance matcher.

use super::identifiers::KeywordId;

/// A fixed-size window holding keyword slots.
///
/// Implemented by concrete instances and by abstract patterns so either can
/// be matched against the other.
pub trait SlotLayout {
    fn width(&self) -> f64;

    fn height(&self) -> f64;

    fn slot_count(&self) -> usize;

    fn slot_keyword(&self, index: usize) -> KeywordId;

    /// Slot position relative to the window's minimum corner.
    fn slot_position(&self, index: usize) -> (f64, f64);

    /// Slot position relative to the window centre, the matching anchor.
    fn anchor_offset(&self, index: usize) -> (f64, f64) {
        let (x, y) = self.slot_position(index);
        (x - self.width() / 2.0, y - self.height() / 2.0)
    }
}
