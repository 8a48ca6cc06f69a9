//! Candidate schedule types.

use tt_core::TimeRange;

// ── PlacedSession ─────────────────────────────────────────────────────────────

/// One session flattened into a candidate schedule.
///
/// Carries a copy of the owning course's name and location (a weak
/// back-reference for validation and display, never ownership of the
/// `Course` itself).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlacedSession {
    pub course:   String,
    pub location: String,
    pub day:      String,
    pub slot:     TimeRange,
}

// ── Schedule ──────────────────────────────────────────────────────────────────

/// A weekly schedule: the flattened sessions of `k` distinct courses.
///
/// Both sessions of a two-session course are always present together; the
/// course is the atomic unit of choice.  Schedules are produced, validated,
/// and either kept or discarded within one generation pass — never mutated
/// afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Schedule {
    /// Flattened sessions, in course enumeration order.
    pub sessions: Vec<PlacedSession>,
    /// Credit sum of the chosen courses.
    pub total_credits: u32,
}

impl Schedule {
    /// Distinct course names, in first-seen order.
    pub fn course_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for sess in &self.sessions {
            if !names.contains(&sess.course.as_str()) {
                names.push(&sess.course);
            }
        }
        names
    }
}
