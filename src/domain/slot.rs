//! Rendered row slots.

use serde::{Deserialize, Serialize};

use crate::geometry::Rect;

/// One visual row in the scrollable list.
///
/// Slots are owned by the host and recycled: the same slot shows different
/// entries as the list scrolls, so slot identity never implies entry
/// identity. `entry_index` is whatever logical entry the host currently
/// renders in this row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    /// Raw screen rectangle as reported by the host, decorative padding
    /// included.
    pub bounds: Rect,
    /// Logical entry index currently displayed in this slot.
    pub entry_index: usize,
}

impl Slot {
    /// Create a slot from its raw host rectangle.
    pub fn new(bounds: Rect, entry_index: usize) -> Self {
        Self {
            bounds,
            entry_index,
        }
    }
}
