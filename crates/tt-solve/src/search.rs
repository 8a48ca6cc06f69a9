//! Combination search over the course catalog.
//!
//! # Algorithm
//!
//! Every `take`-sized subset of the catalog is enumerated in lexicographic
//! index order over the input list, so output order is deterministic and
//! reproducible given a fixed catalog order.  Each subset passes through
//! three gates: the required-name inclusion filter, the credit floor, and
//! the constraint validator over its flattened session list.
//!
//! Complexity is combinatorial: `C(n, take)` candidates, each with O(s²)
//! pairwise checks where `s ≤ 2·take`.  No pruning or early termination
//! across subsets; the catalogs this tool targets stay small.
//!
//! With the `parallel` feature, candidate evaluation runs on Rayon.
//! Evaluation is a pure function of the candidate, results are collected in
//! enumeration order, and observer callbacks stay sequential, so the output
//! is bit-identical with the feature on or off.

use tt_catalog::Course;

use crate::constraints::{ConstraintSet, is_valid};
use crate::observer::SearchObserver;
use crate::schedule::{PlacedSession, Schedule};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Minimum credit total for an acceptable schedule.
pub const MIN_TOTAL_CREDITS: u32 = 20;

// ── Public API ────────────────────────────────────────────────────────────────

/// Enumerate all valid schedules of exactly `take` courses.
///
/// Every accepted schedule contains each name in `required`, sums to at
/// least [`MIN_TOTAL_CREDITS`] credits, and satisfies `rules`.  Accepted
/// schedules are reported to `observer` in enumeration order and returned
/// in the same order.
pub fn generate<O: SearchObserver>(
    courses: &[Course],
    take: usize,
    rules: &ConstraintSet,
    required: &[String],
    observer: &mut O,
) -> Vec<Schedule> {
    #[cfg(not(feature = "parallel"))]
    let accepted: Vec<Schedule> = Combinations::new(courses.len(), take)
        .filter_map(|combo| evaluate(courses, &combo, rules, required))
        .collect();

    #[cfg(feature = "parallel")]
    let accepted: Vec<Schedule> = {
        let combos: Vec<Vec<usize>> = Combinations::new(courses.len(), take).collect();
        combos
            .into_par_iter()
            .filter_map(|combo| evaluate(courses, &combo, rules, required))
            .collect()
    };

    for (index, schedule) in accepted.iter().enumerate() {
        observer.on_schedule(index, schedule);
    }
    observer.on_search_end(accepted.len());

    accepted
}

// ── Candidate evaluation ──────────────────────────────────────────────────────

/// Run one candidate subset through the inclusion, credit, and validity
/// gates.  Pure function of its arguments; safe to call from any thread.
fn evaluate(
    courses: &[Course],
    combo: &[usize],
    rules: &ConstraintSet,
    required: &[String],
) -> Option<Schedule> {
    let includes = |name: &String| combo.iter().any(|&i| courses[i].name == *name);
    if !required.iter().all(includes) {
        return None;
    }

    let total_credits: u32 = combo.iter().map(|&i| courses[i].credits).sum();
    if total_credits < MIN_TOTAL_CREDITS {
        return None;
    }

    let sessions = flatten(courses, combo);
    is_valid(&sessions, rules).then_some(Schedule { sessions, total_credits })
}

/// Flatten a subset into its session list, stamping each session with the
/// owning course's name and location.
fn flatten(courses: &[Course], combo: &[usize]) -> Vec<PlacedSession> {
    let mut sessions = Vec::with_capacity(combo.len() * 2);
    for &i in combo {
        let course = &courses[i];
        for sess in course.sessions() {
            sessions.push(PlacedSession {
                course:   course.name.clone(),
                location: course.location.clone(),
                day:      sess.day.clone(),
                slot:     sess.slot,
            });
        }
    }
    sessions
}

// ── Combination enumeration ───────────────────────────────────────────────────

/// Lexicographic enumeration of all `k`-element index subsets of `0..n`.
///
/// Yields `C(n, k)` sorted index vectors; nothing when `k > n`, and the
/// single empty subset when `k == 0`.
struct Combinations {
    n:       usize,
    k:       usize,
    indices: Vec<usize>,
    started: bool,
}

impl Combinations {
    fn new(n: usize, k: usize) -> Self {
        Self { n, k, indices: Vec::new(), started: false }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if self.k > self.n {
            return None;
        }
        if !self.started {
            self.started = true;
            self.indices = (0..self.k).collect();
            return Some(self.indices.clone());
        }

        // Find the rightmost index that can still move, then reset the
        // suffix to the values directly after it.
        let mut i = self.k;
        loop {
            if i == 0 {
                return None;
            }
            i -= 1;
            if self.indices[i] != i + self.n - self.k {
                break;
            }
        }
        self.indices[i] += 1;
        for j in i + 1..self.k {
            self.indices[j] = self.indices[j - 1] + 1;
        }
        Some(self.indices.clone())
    }
}
