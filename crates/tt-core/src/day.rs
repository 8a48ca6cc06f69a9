//! Canonical weekday labels.
//!
//! Session day labels are stored as free-form upper-cased strings; any token
//! is structurally valid.  The canonical MON..FRI list matters only where
//! exact-match semantics are required (the rendering column lookup).  A
//! label outside the canonical set never matches a rendering column, and a
//! blocked-day comparison elsewhere is a plain string equality check.

/// The five weekday labels, in rendering column order.
pub const DAYS: [&str; 5] = ["MON", "TUE", "WED", "THU", "FRI"];

/// Rendering column for `label`, or `None` for labels outside [`DAYS`].
pub fn day_column(label: &str) -> Option<usize> {
    DAYS.iter().position(|d| *d == label)
}
