//! CSV catalog loader.
//!
//! # CSV format
//!
//! One row per course, five ordered fields, no header required:
//!
//! ```csv
//! name,session1,session2,location,credits
//! Algorithms,MON 09:00-11:00,WED 09:00-10:00,Main Hall,8
//! Statistics,TUE 13:00-15:00,,Annex,7
//! ```
//!
//! A row whose `name` field case-insensitively equals `"name"` is treated as
//! a header and skipped, so files exported with or without a header line
//! both load.  Every field is trimmed.  `session1`/`session2` are either
//! empty or `"DAY HH:MM-HH:MM"`; a row with both empty is rejected because a
//! course must keep at least one meeting.
//!
//! All failures surface as a single [`CatalogError`] naming the offending
//! text; the search core only ever receives fully validated [`Course`]
//! records.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::course::{Course, Session};
use crate::{CatalogError, CatalogResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct CourseRecord {
    name:     String,
    session1: String,
    session2: String,
    location: String,
    credits:  String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load the course catalog from a CSV file.
pub fn load_courses_csv(path: &Path) -> CatalogResult<Vec<Course>> {
    let file = std::fs::File::open(path).map_err(CatalogError::Io)?;
    load_courses_reader(file)
}

/// Like [`load_courses_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`).
pub fn load_courses_reader<R: Read>(reader: R) -> CatalogResult<Vec<Course>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(reader);

    let mut courses = Vec::new();

    for result in csv_reader.deserialize::<CourseRecord>() {
        let row = result.map_err(|e| CatalogError::Csv(e.to_string()))?;
        if row.name.trim().eq_ignore_ascii_case("name") {
            continue; // header row
        }
        courses.push(course_from_record(row)?);
    }

    Ok(courses)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn course_from_record(row: CourseRecord) -> CatalogResult<Course> {
    let name = row.name.trim().to_string();
    let location = row.location.trim().to_string();
    let credits = parse_credits(row.credits.trim())?;

    let mut sessions = Vec::with_capacity(2);
    if let Some(s) = Session::parse(&row.session1)? {
        sessions.push(s);
    }
    if let Some(s) = Session::parse(&row.session2)? {
        sessions.push(s);
    }
    if sessions.is_empty() {
        return Err(CatalogError::Sessions(name));
    }

    Ok(Course::new(name, location, credits, sessions))
}

fn parse_credits(text: &str) -> CatalogResult<u32> {
    text.parse::<u32>()
        .ok()
        .filter(|c| *c > 0)
        .ok_or_else(|| CatalogError::Credits(text.to_string()))
}
