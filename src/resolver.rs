//! Pointer-to-entry hover resolution.
//!
//! [`HoverResolver`] reconciles three independently-changing coordinates —
//! pointer position, scroll offset, and per-slot screen geometry — into a
//! single stable logical entry. It owns the derived [`PageGeometry`] and the
//! last observed scroll offset for one open page, and nothing else.
//!
//! The contract is total: resolution always returns an `Option`, never an
//! error. Transient host states degrade to "no hover" with a recorded
//! diagnostic (see [`HoverIssue`]).

use crate::config::PageMetrics;
use crate::domain::{first_real_index, Entry};
use crate::error::HoverIssue;
use crate::geometry::Point;
use crate::traits::ListSnapshot;
use crate::view_state::PageGeometry;

/// The polled scroll offset differs from the last observed value.
///
/// Carries no payload: the only correct reaction is to re-resolve hover with
/// the last known pointer position, since the entry under a stationary
/// pointer changes as the list scrolls beneath it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollChanged;

/// Resolves pointer positions to logical entries for one open page.
#[derive(Debug)]
pub struct HoverResolver {
    metrics: PageMetrics,
    geometry: PageGeometry,
    last_offset: i32,
    last_issue: Option<HoverIssue>,
}

impl HoverResolver {
    /// Create a resolver for a page that has not been laid out yet.
    pub fn new(metrics: PageMetrics) -> Self {
        Self {
            metrics,
            geometry: PageGeometry::not_ready(metrics),
            last_offset: 0,
            last_issue: None,
        }
    }

    /// Rebuild the geometry from a fresh host snapshot.
    ///
    /// Call on list (re)initialization and on every viewport resize. The
    /// current scroll offset is captured here so the first post-reset
    /// [`poll_scroll_offset`](Self::poll_scroll_offset) stays quiet.
    pub fn reset(&mut self, snapshot: &dyn ListSnapshot, entries: &[Entry]) {
        let slots = snapshot.slots();
        self.last_issue = None;

        self.geometry = match first_real_index(entries) {
            Some(index) => {
                let geometry = PageGeometry::from_slots(slots, index, self.metrics);
                if !geometry.is_ready() && !slots.is_empty() {
                    self.last_issue = Some(HoverIssue::NotReady {
                        slot_count: slots.len(),
                        first_real_index: index,
                    });
                }
                geometry
            }
            None => {
                tracing::trace!("no real entries in list, geometry not ready");
                PageGeometry::not_ready(self.metrics)
            }
        };

        self.last_offset = snapshot.scroll_offset();
    }

    /// Resolve a pointer position to the entry it rests over.
    ///
    /// Scans forward from the scroll offset for up to one page of slots.
    /// The first containing hit rectangle wins; slots never overlap
    /// vertically by construction, so first-match is also only-match. The
    /// visible-row to logical-entry mapping is `scroll_offset + scan_offset`.
    pub fn resolve<'e>(
        &mut self,
        pointer: Point,
        snapshot: &dyn ListSnapshot,
        entries: &'e [Entry],
    ) -> Option<&'e str> {
        // Early out if the pointer isn't within the page bounds
        if !self.geometry.page_bounds().contains(pointer) {
            return None;
        }

        let slots = snapshot.slots();
        let offset = snapshot.scroll_offset();
        if offset < 0 || offset as usize >= slots.len() {
            let issue = HoverIssue::InconsistentScroll {
                offset,
                slot_count: slots.len(),
            };
            tracing::warn!(%issue, "hover resolution degraded");
            self.last_issue = Some(issue);
            return None;
        }

        let start = offset as usize;
        let end = (start + self.metrics.slots_per_page)
            .min(slots.len())
            .min(entries.len());
        for index in start..end {
            if self.geometry.slot_hit_rect(&slots[index]).contains(pointer) {
                return Some(entries[index].id.as_str());
            }
        }

        tracing::debug!(x = pointer.x, y = pointer.y, "no slot claimed the pointer");
        self.last_issue = Some(HoverIssue::LookupMiss);
        None
    }

    /// Edge-triggered scroll detection; call once per update tick.
    ///
    /// This is the sole mechanism for noticing scrolling that happens
    /// without pointer movement (scrollbar drag, wheel, keyboard).
    pub fn poll_scroll_offset(&mut self, current: i32) -> Option<ScrollChanged> {
        if current == self.last_offset {
            return None;
        }
        tracing::trace!(from = self.last_offset, to = current, "scroll offset changed");
        self.last_offset = current;
        Some(ScrollChanged)
    }

    /// The geometry derived at the last reset.
    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    /// Most recent degradation diagnostic, if any.
    pub fn last_issue(&self) -> Option<&HoverIssue> {
        self.last_issue.as_ref()
    }
}
