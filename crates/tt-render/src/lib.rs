//! `tt-render` — reporting and rendering sinks for accepted schedules.
//!
//! # Crate layout
//!
//! | Module       | Contents                                        |
//! |--------------|-------------------------------------------------|
//! | [`writer`]   | `ScheduleWriter` trait, tuple forwarding impl   |
//! | [`text`]     | `TextReporter` (human-readable listing)         |
//! | [`svg`]      | `SvgRenderer` (one weekly-grid image per schedule) |
//! | [`observer`] | `SearchOutputObserver` (search → writer bridge) |
//! | [`error`]    | `RenderError`, `RenderResult<T>`                |
//!
//! The search core never sees any of this: it reports accepted schedules
//! through `tt_solve::SearchObserver`, and [`SearchOutputObserver`] adapts
//! that trait to whatever [`ScheduleWriter`] backends the application
//! plugs in.

pub mod error;
pub mod observer;
pub mod svg;
pub mod text;
pub mod writer;


pub use error::{RenderError, RenderResult};
pub use observer::SearchOutputObserver;
pub use svg::SvgRenderer;
pub use text::TextReporter;
pub use writer::ScheduleWriter;
