//! `tt-catalog` — course offerings and the CSV catalog loader.
//!
//! # Crate layout
//!
//! | Module     | Contents                                   |
//! |------------|--------------------------------------------|
//! | [`course`] | `Session`, `Course`                        |
//! | [`loader`] | `load_courses_csv`, `load_courses_reader`  |
//! | [`error`]  | `CatalogError`, `CatalogResult<T>`         |
//!
//! # Session groups
//!
//! A course meets once or twice a week.  Its sessions form one group that is
//! scheduled atomically: a candidate schedule either contains every session
//! of a course or none of them.  The course, not the session, is the unit of
//! choice downstream.

pub mod course;
pub mod error;
pub mod loader;


pub use course::{Course, Session};
pub use error::{CatalogError, CatalogResult};
pub use loader::{load_courses_csv, load_courses_reader};
