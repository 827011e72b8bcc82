//! Entry metadata lookup seam.

/// Decides whether a tooltip has anything to show for an entry.
///
/// The actual metadata store lives with the host; the hover controller only
/// needs a yes/no answer to gate hover targets. Placeholder rows simply
/// never have content.
pub trait ContentProvider {
    /// Whether tooltip content exists for the given entry.
    fn has_content(&self, entry_id: &str) -> bool;
}

/// Blanket impl so closures can serve as providers in simple hosts and in
/// tests.
impl<F> ContentProvider for F
where
    F: Fn(&str) -> bool,
{
    fn has_content(&self, entry_id: &str) -> bool {
        self(entry_id)
    }
}
