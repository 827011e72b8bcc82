//! Tooltip-driving hover controller.
//!
//! [`HoverController`] is the downstream consumer the resolver was built
//! for: it remembers the last pointer position, re-resolves on pointer moves
//! and on scroll changes, and gates targets through a [`ContentProvider`] so
//! the host only shows a tooltip when there is something to show.
//!
//! The host calls these methods on its own cadence — `on_tick` once per
//! update, `on_pointer_moved` per pointer notification, `on_open`/`on_resize`
//! when its layout changes. Each returns whether the hover target changed,
//! which is the host's cue to redraw.

use crate::config::PageMetrics;
use crate::domain::Entry;
use crate::geometry::Point;
use crate::resolver::HoverResolver;
use crate::traits::{ContentProvider, ListSnapshot};

/// Tracks the current content-bearing hover target for one open page.
#[derive(Debug)]
pub struct HoverController<C> {
    resolver: HoverResolver,
    content: C,
    last_pointer: Option<Point>,
    hovered: Option<String>,
}

impl<C: ContentProvider> HoverController<C> {
    /// Create a controller for a page that has not opened yet.
    pub fn new(metrics: PageMetrics, content: C) -> Self {
        Self {
            resolver: HoverResolver::new(metrics),
            content,
            last_pointer: None,
            hovered: None,
        }
    }

    /// The page opened: build fresh geometry and start with no hover.
    pub fn on_open(&mut self, snapshot: &dyn ListSnapshot, entries: &[Entry]) {
        self.last_pointer = None;
        self.hovered = None;
        self.resolver.reset(snapshot, entries);
    }

    /// The viewport resized: rebuild geometry, then re-evaluate the hover
    /// under the pointer we last saw. Returns true if the target changed.
    pub fn on_resize(&mut self, snapshot: &dyn ListSnapshot, entries: &[Entry]) -> bool {
        self.resolver.reset(snapshot, entries);
        match self.last_pointer {
            Some(pointer) => self.update_hover(pointer, snapshot, entries),
            None => false,
        }
    }

    /// The pointer moved. Returns true if the hover target changed.
    pub fn on_pointer_moved(
        &mut self,
        pointer: Point,
        snapshot: &dyn ListSnapshot,
        entries: &[Entry],
    ) -> bool {
        self.last_pointer = Some(pointer);
        self.update_hover(pointer, snapshot, entries)
    }

    /// One update tick: poll for scrolling that happened without pointer
    /// movement, and re-resolve under the stationary pointer when it did.
    /// Returns true if the hover target changed.
    pub fn on_tick(&mut self, snapshot: &dyn ListSnapshot, entries: &[Entry]) -> bool {
        if self
            .resolver
            .poll_scroll_offset(snapshot.scroll_offset())
            .is_none()
        {
            return false;
        }
        match self.last_pointer {
            Some(pointer) => self.update_hover(pointer, snapshot, entries),
            None => false,
        }
    }

    /// The current hover target with tooltip content, if any.
    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    /// The resolver backing this controller, for diagnostics.
    pub fn resolver(&self) -> &HoverResolver {
        &self.resolver
    }

    fn update_hover(
        &mut self,
        pointer: Point,
        snapshot: &dyn ListSnapshot,
        entries: &[Entry],
    ) -> bool {
        let target = self
            .resolver
            .resolve(pointer, snapshot, entries)
            .filter(|id| self.content.has_content(id))
            .map(str::to_owned);

        if target == self.hovered {
            return false;
        }
        tracing::debug!(from = ?self.hovered, to = ?target, "hover target changed");
        self.hovered = target;
        true
    }
}
