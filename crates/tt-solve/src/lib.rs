//! `tt-solve` — the schedule search core.
//!
//! # Crate layout
//!
//! | Module          | Contents                                       |
//! |-----------------|------------------------------------------------|
//! | [`schedule`]    | `PlacedSession`, `Schedule`                    |
//! | [`constraints`] | `ConstraintSet`, `is_valid`                    |
//! | [`search`]      | `generate`, `MIN_TOTAL_CREDITS`                |
//! | [`observer`]    | `SearchObserver` sink trait, `NoopObserver`    |
//!
//! # Purity
//!
//! The whole core is a pure function from `(courses, k, constraints)` to the
//! set of valid schedules.  Nothing here performs I/O or holds state across
//! invocations; reporting and rendering are injected through
//! [`SearchObserver`] and live in other crates.  Search-time failures do not
//! exist: the validator and the search are total over well-formed `Course`
//! data, so this crate defines no error type.

pub mod constraints;
pub mod observer;
pub mod schedule;
pub mod search;


pub use constraints::{ConstraintSet, is_valid};
pub use observer::{NoopObserver, SearchObserver};
pub use schedule::{PlacedSession, Schedule};
pub use search::{MIN_TOTAL_CREDITS, generate};
