//! Diagnostic taxonomy for non-fatal hover failures.
//!
//! Nothing in this crate returns a `Result`: every failure path degrades to
//! "no hover", because transient host states (not yet laid out, mid-resize,
//! scrolled past the end) are normal during layout transitions. [`HoverIssue`]
//! records *why* the last resolution degraded, for logs and for hosts that
//! fold diagnostics into their own reporting.

use thiserror::Error;

/// Why a hover resolution or geometry reset degraded to "no hover".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HoverIssue {
    /// Host geometry was insufficient to derive the slot height: fewer than
    /// two adjacent real slots were visible.
    #[error("slot geometry not ready: {slot_count} slot(s), first real index {first_real_index}")]
    NotReady {
        slot_count: usize,
        first_real_index: usize,
    },

    /// The host's scroll offset disagrees with the tracked geometry.
    #[error("scroll offset {offset} outside valid range 0..{slot_count}")]
    InconsistentScroll { offset: i32, slot_count: usize },

    /// The pointer was inside the page bounds but no slot claimed it, e.g.
    /// fewer real entries than rendered slots.
    #[error("pointer inside page bounds but over no slot")]
    LookupMiss,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let issue = HoverIssue::InconsistentScroll {
            offset: -1,
            slot_count: 12,
        };
        assert_eq!(
            issue.to_string(),
            "scroll offset -1 outside valid range 0..12"
        );

        let issue = HoverIssue::NotReady {
            slot_count: 1,
            first_real_index: 0,
        };
        assert!(issue.to_string().contains("not ready"));
    }
}
