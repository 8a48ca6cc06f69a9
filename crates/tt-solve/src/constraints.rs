//! Pass/fail validation of a candidate schedule.
//!
//! # Rules
//!
//! 1. No session may fall on a blocked day (exact string comparison against
//!    upper-cased labels).
//! 2. On each day, every unordered pair of sessions must overlap by at most
//!    `allowed_overlap_mins`.
//! 3. On each day, every pair at *different locations* must leave a travel
//!    gap of at least `min_travel_gap_mins`, tried in both orderings since
//!    the pair is unordered.  A negative gap (the pair overlaps) is not a
//!    travel-gap violation under this rule; overlap is rule 2's concern.
//! 4. The same different-location pairs are then re-examined with a
//!    one-directional gap test in list order: for `i < j`, reject when
//!    `start(j) - end(i) < min_travel_gap_mins`, negative gaps included.
//!
//! Rules 3 and 4 are deliberately independent and are not unified into one
//! test.  Rule 4 is asymmetric: its verdict can depend on the order sessions
//! were flattened in, and it rejects overlapping different-location pairs
//! that rule 2 tolerates.  Tests flag this seam; the validator preserves it.

use std::collections::HashMap;

use crate::schedule::PlacedSession;

pub const DEFAULT_ALLOWED_OVERLAP_MINS: u32 = 30;
pub const DEFAULT_MIN_TRAVEL_GAP_MINS: u32 = 30;

// ── ConstraintSet ─────────────────────────────────────────────────────────────

/// The hard rules a candidate schedule is validated against.
#[derive(Clone, Debug)]
pub struct ConstraintSet {
    /// Upper-cased day labels on which no session may fall.
    pub blocked_days: Vec<String>,
    /// Largest tolerated same-day overlap between two sessions, in minutes.
    pub allowed_overlap_mins: u32,
    /// Smallest tolerated gap between same-day sessions at different
    /// locations, in minutes.
    pub min_travel_gap_mins: u32,
}

impl ConstraintSet {
    /// Default tolerances with the given blocked days.
    pub fn with_blocked_days(blocked_days: Vec<String>) -> Self {
        Self { blocked_days, ..Self::default() }
    }
}

impl Default for ConstraintSet {
    fn default() -> Self {
        Self {
            blocked_days:         Vec::new(),
            allowed_overlap_mins: DEFAULT_ALLOWED_OVERLAP_MINS,
            min_travel_gap_mins:  DEFAULT_MIN_TRAVEL_GAP_MINS,
        }
    }
}

// ── Validation ────────────────────────────────────────────────────────────────

/// Decide whether the flattened session list of a candidate schedule
/// satisfies every rule in `rules`.
///
/// Pure deterministic predicate: same inputs, same verdict, no retries.
pub fn is_valid(sessions: &[PlacedSession], rules: &ConstraintSet) -> bool {
    // Group by day, short-circuiting on the first blocked-day hit.
    let mut by_day: HashMap<&str, Vec<&PlacedSession>> = HashMap::new();
    for sess in sessions {
        if rules.blocked_days.iter().any(|d| *d == sess.day) {
            return false;
        }
        by_day.entry(sess.day.as_str()).or_default().push(sess);
    }

    for day_sessions in by_day.values() {
        if !day_passes(day_sessions, rules) {
            return false;
        }
    }
    true
}

/// Pairwise checks for the sessions of a single day.
fn day_passes(sessions: &[&PlacedSession], rules: &ConstraintSet) -> bool {
    let min_gap = rules.min_travel_gap_mins as i64;

    // Overlap cap and the symmetric travel-gap rule.
    for (i, a) in sessions.iter().enumerate() {
        for b in &sessions[i + 1..] {
            if a.slot.overlap_minutes(&b.slot) > rules.allowed_overlap_mins {
                return false;
            }

            if a.location != b.location {
                // The pair is unordered, so the gap is tried both ways.
                let gap_ab = gap_minutes(a, b);
                let gap_ba = gap_minutes(b, a);
                if (0..min_gap).contains(&gap_ab) || (0..min_gap).contains(&gap_ba) {
                    return false;
                }
            }
        }
    }

    // One-directional re-check in list order.  Unlike the rule above this
    // one also rejects negative gaps, so an overlapping different-location
    // pair fails here even when the overlap cap tolerates it.
    for (i, a) in sessions.iter().enumerate() {
        for b in &sessions[i + 1..] {
            if a.location != b.location && gap_minutes(a, b) < min_gap {
                return false;
            }
        }
    }

    true
}

/// Signed minutes from the end of `earlier` to the start of `later`.
fn gap_minutes(earlier: &PlacedSession, later: &PlacedSession) -> i64 {
    later.slot.start.minutes() as i64 - earlier.slot.end.minutes() as i64
}
