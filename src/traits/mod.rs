//! Trait abstractions for the host seams.
//!
//! The engine never reaches into the host; everything it observes arrives
//! through these traits, injected at the call site. This keeps the
//! algorithm independent of however the host actually exposes its state,
//! and makes the whole engine drivable from plain test fixtures.
//!
//! # Traits
//!
//! - [`ListSnapshot`] - the host list widget's slot rectangles and scroll offset
//! - [`ContentProvider`] - whether an entry has tooltip content to show

pub mod content;
pub mod host;

pub use content::ContentProvider;
pub use host::{ListSnapshot, PageSnapshot};
