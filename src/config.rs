//! Host layout constants for the hover engine.
//!
//! The host supplies two facts about its list widget — the base tile unit
//! its layout is built on, and how many rows it renders per page — and the
//! engine derives the hit-test margins from them. The margin defaults were
//! tuned against a real host list rather than derived from a layout rule,
//! so they stay overridable for recalibration.

use serde::{Deserialize, Serialize};

/// Default base tile unit in pixels.
pub const DEFAULT_TILE_SIZE: i32 = 64;

/// Default number of rows visible at once.
pub const DEFAULT_SLOTS_PER_PAGE: usize = 5;

/// Layout constants describing the host's list widget.
///
/// The margins trim the decorative padding baked into the host's raw slot
/// rectangles so the hit area matches what is visually perceived as "inside
/// the row". Unless overridden they derive from the tile unit: width margin
/// `tile_size / 4`, height margin `tile_size / 8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageMetrics {
    /// Base tile unit of the host layout, in pixels.
    pub tile_size: i32,
    /// Number of rows the host renders per visible page.
    pub slots_per_page: usize,
    /// Recalibrated horizontal inset, when the derived one is off.
    #[serde(skip_serializing_if = "Option::is_none")]
    margin_x: Option<i32>,
    /// Recalibrated vertical inset, when the derived one is off.
    #[serde(skip_serializing_if = "Option::is_none")]
    margin_y: Option<i32>,
}

impl Default for PageMetrics {
    fn default() -> Self {
        Self::for_tile(DEFAULT_TILE_SIZE, DEFAULT_SLOTS_PER_PAGE)
    }
}

impl PageMetrics {
    /// Create metrics for a host layout, with margins derived from the tile
    /// unit.
    pub fn for_tile(tile_size: i32, slots_per_page: usize) -> Self {
        Self {
            tile_size,
            slots_per_page,
            margin_x: None,
            margin_y: None,
        }
    }

    /// Override the derived margins with recalibrated values.
    pub fn with_margins(mut self, margin_x: i32, margin_y: i32) -> Self {
        self.margin_x = Some(margin_x);
        self.margin_y = Some(margin_y);
        self
    }

    /// Horizontal inset from a raw slot rectangle to its hit area.
    pub fn margin_x(&self) -> i32 {
        self.margin_x.unwrap_or(self.tile_size / 4)
    }

    /// Vertical inset from a raw slot rectangle to its hit area.
    pub fn margin_y(&self) -> i32 {
        self.margin_y.unwrap_or(self.tile_size / 8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_margins_derived_from_tile() {
        let metrics = PageMetrics::for_tile(16, 2);
        assert_eq!(metrics.margin_x(), 4);
        assert_eq!(metrics.margin_y(), 2);
        assert_eq!(metrics.slots_per_page, 2);
    }

    #[test]
    fn test_default_metrics() {
        let metrics = PageMetrics::default();
        assert_eq!(metrics.tile_size, DEFAULT_TILE_SIZE);
        assert_eq!(metrics.slots_per_page, DEFAULT_SLOTS_PER_PAGE);
        assert_eq!(metrics.margin_x(), 16);
        assert_eq!(metrics.margin_y(), 8);
    }

    #[test]
    fn test_with_margins_override() {
        let metrics = PageMetrics::for_tile(64, 5).with_margins(10, 3);
        assert_eq!(metrics.margin_x(), 10);
        assert_eq!(metrics.margin_y(), 3);
        // Tile unit untouched
        assert_eq!(metrics.tile_size, 64);
    }

    #[test]
    fn test_partial_config_rederives_margins() {
        // A host config that only names the layout facts gets the derived
        // margins for its own tile unit, not the crate default's.
        let metrics: PageMetrics =
            serde_json::from_str(r#"{"tile_size": 32, "slots_per_page": 3}"#).unwrap();
        assert_eq!(metrics.margin_x(), 8);
        assert_eq!(metrics.margin_y(), 4);
        assert_eq!(metrics.slots_per_page, 3);
    }

    #[test]
    fn test_config_round_trip() {
        let metrics = PageMetrics::for_tile(16, 2).with_margins(5, 1);
        let json = serde_json::to_string(&metrics).unwrap();
        let back: PageMetrics = serde_json::from_str(&json).unwrap();
        assert_eq!(back, metrics);
        assert_eq!(back.margin_x(), 5);
    }
}
