//! Logical list entries.

use serde::{Deserialize, Serialize};

/// A logical list item with a stable identity, independent of which slot
/// currently renders it.
///
/// Entries are ordered. Lists may carry leading placeholder rows (headers,
/// the viewer's own row) that are rendered but not selectable; those have
/// `is_real = false`, and geometry derivation starts at the first real
/// entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Stable identifier, preserved as the entry moves between slots.
    pub id: String,
    /// Whether this is a selectable entry rather than a leading placeholder.
    pub is_real: bool,
}

impl Entry {
    /// Create a selectable entry.
    pub fn real(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            is_real: true,
        }
    }

    /// Create a leading placeholder entry.
    pub fn placeholder(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            is_real: false,
        }
    }
}

/// Index of the first real entry, if any.
pub fn first_real_index(entries: &[Entry]) -> Option<usize> {
    entries.iter().position(|entry| entry.is_real)
}
