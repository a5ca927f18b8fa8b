//! Newest-wins tagging for page loads.
//!
//! A page keeps one `RequestGeneration` in a `StoredValue`, starts every load
//! with `begin` and applies a response only while `is_current` still holds.
//! A disposed page has no stored value left, so late responses are dropped
//! through `try_get_value` as well.

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RequestGeneration(u64);

impl RequestGeneration {
    /// Start a new load; every earlier one becomes stale.
    pub fn begin(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }

    pub fn is_current(&self, request: u64) -> bool {
        self.0 == request
    }
}

/// Whether a response tagged `request` may still be applied.
pub fn accepts(stored: Option<RequestGeneration>, request: u64) -> bool {
    stored.map(|generation| generation.is_current(request)).unwrap_or(false)
}
