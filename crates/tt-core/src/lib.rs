//! `tt-core` — foundational types for the `rust_tt` timetable toolkit.
//!
//! This crate is a dependency of every other `tt-*` crate.  It intentionally
//! has no `tt-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                  |
//! |-----------|-------------------------------------------|
//! | [`time`]  | `TimeOfDay`, `TimeRange`, interval overlap |
//! | [`day`]   | `DAYS` canonical weekday table            |
//! | [`error`] | `TtError`, `TtResult`                     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod day;
pub mod error;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use day::{DAYS, day_column};
pub use error::{TtError, TtResult};
pub use time::{TimeOfDay, TimeRange};
