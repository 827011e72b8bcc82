//! Prelude module for convenient imports.
//!
//! ```
//! use rowhover::prelude::*;
//!
//! let metrics = PageMetrics::for_tile(64, 5);
//! let mut resolver = HoverResolver::new(metrics);
//! let snapshot = PageSnapshot::default();
//! resolver.reset(&snapshot, &[]);
//! assert_eq!(resolver.resolve(Point::new(0, 0), &snapshot, &[]), None);
//! ```

// Configuration
pub use crate::config::PageMetrics;

// Domain types
pub use crate::domain::{Entry, Slot};

// Geometry primitives
pub use crate::geometry::{Point, Rect};

// Core engine
pub use crate::resolver::{HoverResolver, ScrollChanged};
pub use crate::view_state::PageGeometry;

// Host seams and the downstream controller
pub use crate::controller::HoverController;
pub use crate::traits::{ContentProvider, ListSnapshot, PageSnapshot};

// Diagnostics
pub use crate::error::HoverIssue;
