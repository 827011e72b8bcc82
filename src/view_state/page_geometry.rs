//! Derived slot geometry for one visible page.
//!
//! This module provides [`PageGeometry`], a view-only snapshot derived from
//! the host's raw slot rectangles. It is rebuilt whenever the host list is
//! (re)initialized or resized and is immutable in between; callers must not
//! cache it across a rebuild.

use crate::config::PageMetrics;
use crate::domain::Slot;
use crate::geometry::Rect;

/// Geometry snapshot for the currently visible page.
///
/// Holds the uniform slot height, the margin pair trimming each raw slot
/// rectangle down to its interactive hit area, and the bounding rectangle of
/// one full page of slots (the cheap reject test for hover resolution).
///
/// When the host has not produced enough geometry to measure a slot — no
/// slots at all, or fewer than two adjacent real slots — the snapshot is
/// "not ready": slot height 0, empty page bounds, and every hit test misses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageGeometry {
    metrics: PageMetrics,
    slot_height: i32,
    page_bounds: Rect,
}

impl PageGeometry {
    /// Geometry for a host that has not laid out its list yet.
    pub fn not_ready(metrics: PageMetrics) -> Self {
        Self {
            metrics,
            slot_height: 0,
            page_bounds: Rect::EMPTY,
        }
    }

    /// Derive the page geometry from a snapshot of raw slot rectangles.
    ///
    /// `first_real_index` is the index of the first slot showing a real
    /// (selectable) entry; the slot height is measured between that slot and
    /// the one immediately after it, and is assumed uniform thereafter.
    ///
    /// An empty snapshot is an expected transient state and degrades
    /// silently; an insufficient one (no adjacent real slot pair) degrades
    /// with a debug diagnostic. Neither is an error.
    pub fn from_slots(slots: &[Slot], first_real_index: usize, metrics: PageMetrics) -> Self {
        if slots.is_empty() {
            tracing::trace!("host list not laid out yet, geometry not ready");
            return Self::not_ready(metrics);
        }

        let (anchor, next) = match (slots.get(first_real_index), slots.get(first_real_index + 1)) {
            (Some(anchor), Some(next)) => (anchor, next),
            _ => {
                tracing::debug!(
                    slot_count = slots.len(),
                    first_real_index,
                    "cannot measure slot height: no adjacent real slot pair"
                );
                return Self::not_ready(metrics);
            }
        };

        let slot_height = next.bounds.y - anchor.bounds.y;
        if slot_height <= 0 {
            tracing::debug!(
                slot_height,
                "host slot rectangles are not stacked top-to-bottom"
            );
            return Self::not_ready(metrics);
        }

        let mut geometry = Self {
            metrics,
            slot_height,
            page_bounds: Rect::EMPTY,
        };

        // Page bounds: the first real slot's hit rect, stretched to cover a
        // full page of rows.
        let mut bounds = geometry.slot_hit_rect(anchor);
        bounds.height = slot_height * metrics.slots_per_page as i32;
        geometry.page_bounds = bounds;
        geometry
    }

    /// Whether enough geometry was available to derive a slot height.
    pub fn is_ready(&self) -> bool {
        self.slot_height > 0
    }

    /// Uniform slot height in pixels, 0 when not ready.
    pub fn slot_height(&self) -> i32 {
        self.slot_height
    }

    /// Bounding rectangle of one full page of slots, empty when not ready.
    pub fn page_bounds(&self) -> Rect {
        self.page_bounds
    }

    /// The exact rectangle used for pointer containment tests on a slot.
    ///
    /// The raw slot rectangle includes decorative padding, so the hit corner
    /// moves inward by the margin pair: a pointer on the raw top-left corner
    /// is *not* over the row. The width drops one tile (trailing decorative
    /// region) and the height is the derived slot height minus the vertical
    /// margin (the border shared with the next slot).
    pub fn slot_hit_rect(&self, slot: &Slot) -> Rect {
        Rect::new(
            slot.bounds.x + self.metrics.margin_x(),
            slot.bounds.y + self.metrics.margin_y(),
            slot.bounds.width - self.metrics.tile_size,
            self.slot_height - self.metrics.margin_y(),
        )
    }
}
