//! Catalog types: `Session` and `Course`.
//!
//! # Day labels
//!
//! A session's day is stored as a free-form upper-cased string, kept
//! verbatim from the input.  No enumeration check happens here: `"SAT"` or
//! a typo like `"MONN"` is structurally valid.  Only the consumers that
//! need exact-match semantics (blocked-day filtering, the rendering column
//! lookup) compare against concrete labels, where an off-list label simply
//! never matches.

use tt_core::TimeRange;

use crate::{CatalogError, CatalogResult};

// ── Session ───────────────────────────────────────────────────────────────────

/// One weekly meeting of a course.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Session {
    /// Upper-cased day label, stored verbatim.
    pub day: String,
    /// Meeting interval `[start, end)`; `end` after `start` is assumed.
    pub slot: TimeRange,
}

impl Session {
    /// Parse a `"DAY HH:MM-HH:MM"` string.
    ///
    /// Leading/trailing whitespace is trimmed first.  Empty or
    /// whitespace-only input yields `Ok(None)` ("no session") — this is how
    /// a course with a single meeting leaves its second session field blank.
    ///
    /// Fails when the token count is not exactly two (day, range), the range
    /// cannot be split on `-`, or either time fails `HH:MM` parsing.  The
    /// error carries the offending text.
    pub fn parse(text: &str) -> CatalogResult<Option<Session>> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }

        let session_error = |reason: String| CatalogError::Session {
            text:   text.to_string(),
            reason,
        };

        let tokens: Vec<&str> = text.split_whitespace().collect();
        let [day, range] = tokens[..] else {
            return Err(session_error("expected a day and a time range".to_string()));
        };

        let slot = TimeRange::parse(range).map_err(|e| session_error(e.to_string()))?;
        Ok(Some(Session {
            day: day.to_ascii_uppercase(),
            slot,
        }))
    }
}

// ── Course ────────────────────────────────────────────────────────────────────

/// An immutable course offering.
///
/// Constructed once from an input record and read-only thereafter.  The
/// sessions field is private to uphold the group invariant: a course has one
/// or two sessions, never zero, never more.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Course {
    /// Unique identifier within the catalog.
    pub name: String,
    /// Where every session of this course meets.
    pub location: String,
    /// Credit value; positive.
    pub credits: u32,
    sessions: Vec<Session>,
}

impl Course {
    /// Construct a course.
    ///
    /// # Panics
    ///
    /// Panics in debug mode unless `sessions` has length 1 or 2.
    pub fn new(name: String, location: String, credits: u32, sessions: Vec<Session>) -> Self {
        debug_assert!(
            (1..=2).contains(&sessions.len()),
            "a course must have 1 or 2 sessions"
        );
        Self { name, location, credits, sessions }
    }

    /// Read-only slice of this course's session group.
    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }
}
