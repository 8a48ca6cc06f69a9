//! Time-of-day model.
//!
//! # Design
//!
//! All schedule arithmetic happens in whole minutes since midnight.  A
//! [`TimeOfDay`] is parsed once from a strict `HH:MM` 24-hour string and
//! converted with [`TimeOfDay::minutes`]; comparisons and overlap math stay
//! in integer space, so there is no floating point and no timezone handling
//! anywhere in the core.
//!
//! A [`TimeRange`] is a half-open interval `[start, end)` within a single
//! day.  `end` after `start` is assumed by construction, not validated; a
//! reversed range simply never overlaps anything.

use std::fmt;

use crate::{TtError, TtResult};

// ── TimeOfDay ─────────────────────────────────────────────────────────────────

/// A wall-clock time of day with minute resolution.
///
/// Ordering is chronological (derived from the `(hour, minute)` field order).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeOfDay {
    hour:   u8,
    minute: u8,
}

impl TimeOfDay {
    /// Construct from validated components.
    ///
    /// Returns [`TtError::Time`] if `hour > 23` or `minute > 59`.
    pub fn new(hour: u8, minute: u8) -> TtResult<Self> {
        if hour > 23 || minute > 59 {
            return Err(TtError::Time(format!("{hour}:{minute:02}")));
        }
        Ok(Self { hour, minute })
    }

    /// Parse a strict `HH:MM` 24-hour string.
    ///
    /// Fails on a wrong separator, non-numeric digits, or an out-of-range
    /// hour/minute.
    pub fn parse(text: &str) -> TtResult<Self> {
        let err = || TtError::Time(text.to_string());
        let (h, m) = text.split_once(':').ok_or_else(err)?;
        let hour = parse_component(h).ok_or_else(err)?;
        let minute = parse_component(m).ok_or_else(err)?;
        Self::new(hour, minute).map_err(|_| err())
    }

    pub fn hour(self) -> u8 {
        self.hour
    }

    pub fn minute(self) -> u8 {
        self.minute
    }

    /// Minutes since midnight: `hour * 60 + minute`.
    #[inline]
    pub fn minutes(self) -> u32 {
        self.hour as u32 * 60 + self.minute as u32
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Parse one `HH`/`MM` component: 1–2 ASCII digits, nothing else.
fn parse_component(text: &str) -> Option<u8> {
    if text.is_empty() || text.len() > 2 || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

// ── TimeRange ─────────────────────────────────────────────────────────────────

/// A half-open interval `[start, end)` within one day.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeRange {
    pub start: TimeOfDay,
    pub end:   TimeOfDay,
}

impl TimeRange {
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Self {
        Self { start, end }
    }

    /// Parse a `HH:MM-HH:MM` string (split once on `-`).
    pub fn parse(text: &str) -> TtResult<Self> {
        let (start, end) = text
            .split_once('-')
            .ok_or_else(|| TtError::Range(text.to_string()))?;
        Ok(Self {
            start: TimeOfDay::parse(start)?,
            end:   TimeOfDay::parse(end)?,
        })
    }

    /// Minutes shared by `self` and `other`, assuming both fall on the same
    /// day: `max(0, min(end_a, end_b) - max(start_a, start_b))`.
    ///
    /// Returns 0 for disjoint or merely adjacent ranges.  Symmetric in its
    /// arguments.
    pub fn overlap_minutes(&self, other: &TimeRange) -> u32 {
        let latest_start = self.start.minutes().max(other.start.minutes());
        let earliest_end = self.end.minutes().min(other.end.minutes());
        earliest_end.saturating_sub(latest_start)
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}
