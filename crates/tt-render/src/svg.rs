//! Weekly-grid SVG renderer.
//!
//! One image per accepted schedule, written as `schedule_N.svg` (numbered
//! from 1) into the target directory.  The grid shows the five canonical
//! weekday columns against a 08:00–20:00 vertical axis; each session is a
//! sky-blue box labeled with the course name and `@location`.  Sessions
//! whose day label has no rendering column are skipped.

use std::path::{Path, PathBuf};

use tt_core::{DAYS, day_column};
use tt_solve::{PlacedSession, Schedule};

use crate::RenderResult;
use crate::writer::ScheduleWriter;

// ── Grid geometry (pixels) ────────────────────────────────────────────────────

const COL_WIDTH:  f64 = 160.0;
const HOUR_HEIGHT: f64 = 45.0;
const MARGIN_LEFT: f64 = 60.0;
const MARGIN_TOP:  f64 = 50.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_BOTTOM: f64 = 20.0;

/// Vertical axis window: school day from 8 AM to 8 PM.
const FIRST_HOUR: u32 = 8;
const LAST_HOUR:  u32 = 20;

const GRID_WIDTH:  f64 = COL_WIDTH * DAYS.len() as f64;
const GRID_HEIGHT: f64 = HOUR_HEIGHT * (LAST_HOUR - FIRST_HOUR) as f64;
const CANVAS_WIDTH:  f64 = MARGIN_LEFT + GRID_WIDTH + MARGIN_RIGHT;
const CANVAS_HEIGHT: f64 = MARGIN_TOP + GRID_HEIGHT + MARGIN_BOTTOM;

// ── SvgRenderer ───────────────────────────────────────────────────────────────

/// Writes one `schedule_N.svg` per accepted schedule into `dir`.
pub struct SvgRenderer {
    dir: PathBuf,
}

impl SvgRenderer {
    /// Create the renderer, creating `dir` (and any missing parents) first.
    pub fn new(dir: &Path) -> RenderResult<Self> {
        std::fs::create_dir_all(dir)?;
        Ok(Self { dir: dir.to_path_buf() })
    }
}

impl ScheduleWriter for SvgRenderer {
    fn write_schedule(&mut self, index: usize, schedule: &Schedule) -> RenderResult<()> {
        let number = index + 1;
        let path = self.dir.join(format!("schedule_{number}.svg"));
        std::fs::write(path, render_svg(schedule, number))?;
        Ok(())
    }
}

// ── SVG assembly ──────────────────────────────────────────────────────────────

fn render_svg(schedule: &Schedule, number: usize) -> String {
    let mut svg = String::with_capacity(4096);

    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{CANVAS_WIDTH}\" \
         height=\"{CANVAS_HEIGHT}\" viewBox=\"0 0 {CANVAS_WIDTH} {CANVAS_HEIGHT}\" \
         font-family=\"sans-serif\">\n"
    ));
    svg.push_str("<rect width=\"100%\" height=\"100%\" fill=\"white\"/>\n");

    svg.push_str(&format!(
        "<text x=\"{x}\" y=\"24\" text-anchor=\"middle\" font-size=\"18\">Schedule {number}</text>\n",
        x = MARGIN_LEFT + GRID_WIDTH / 2.0,
    ));

    push_grid(&mut svg);
    for sess in &schedule.sessions {
        push_session(&mut svg, sess);
    }

    svg.push_str("</svg>\n");
    svg
}

fn push_grid(svg: &mut String) {
    // Hour lines and labels.
    for hour in FIRST_HOUR..=LAST_HOUR {
        let y = MARGIN_TOP + (hour - FIRST_HOUR) as f64 * HOUR_HEIGHT;
        svg.push_str(&format!(
            "<line x1=\"{MARGIN_LEFT}\" y1=\"{y}\" x2=\"{x2}\" y2=\"{y}\" stroke=\"#ccc\"/>\n",
            x2 = MARGIN_LEFT + GRID_WIDTH,
        ));
        svg.push_str(&format!(
            "<text x=\"{x}\" y=\"{ty}\" text-anchor=\"end\" font-size=\"11\">{hour}:00</text>\n",
            x = MARGIN_LEFT - 6.0,
            ty = y + 4.0,
        ));
    }

    // Day columns and labels.
    for (col, day) in DAYS.iter().enumerate() {
        let x = MARGIN_LEFT + col as f64 * COL_WIDTH;
        svg.push_str(&format!(
            "<line x1=\"{x}\" y1=\"{MARGIN_TOP}\" x2=\"{x}\" y2=\"{y2}\" stroke=\"#ccc\"/>\n",
            y2 = MARGIN_TOP + GRID_HEIGHT,
        ));
        svg.push_str(&format!(
            "<text x=\"{tx}\" y=\"{ty}\" text-anchor=\"middle\" font-size=\"13\">{day}</text>\n",
            tx = x + COL_WIDTH / 2.0,
            ty = MARGIN_TOP - 8.0,
        ));
    }
    svg.push_str(&format!(
        "<line x1=\"{x}\" y1=\"{MARGIN_TOP}\" x2=\"{x}\" y2=\"{y2}\" stroke=\"#ccc\"/>\n",
        x = MARGIN_LEFT + GRID_WIDTH,
        y2 = MARGIN_TOP + GRID_HEIGHT,
    ));
}

fn push_session(svg: &mut String, sess: &PlacedSession) {
    // Off-table day labels have no column and are not drawn.
    let Some(col) = day_column(&sess.day) else {
        return;
    };

    let x = MARGIN_LEFT + col as f64 * COL_WIDTH;
    let y = minute_y(sess.slot.start.minutes());
    let height = minute_y(sess.slot.end.minutes()) - y;
    let center_x = x + COL_WIDTH / 2.0;
    let center_y = y + height / 2.0;

    svg.push_str(&format!(
        "<rect x=\"{x}\" y=\"{y}\" width=\"{COL_WIDTH}\" height=\"{height}\" \
         fill=\"skyblue\" fill-opacity=\"0.8\" stroke=\"black\" stroke-width=\"1.5\"/>\n"
    ));
    svg.push_str(&format!(
        "<text x=\"{center_x}\" y=\"{ty}\" text-anchor=\"middle\" font-size=\"11\">{name}</text>\n",
        ty = center_y - 2.0,
        name = xml_escape(&sess.course),
    ));
    svg.push_str(&format!(
        "<text x=\"{center_x}\" y=\"{ty}\" text-anchor=\"middle\" font-size=\"10\">@{loc}</text>\n",
        ty = center_y + 11.0,
        loc = xml_escape(&sess.location),
    ));
}

/// Vertical pixel position of a minutes-since-midnight value.
fn minute_y(minutes: u32) -> f64 {
    MARGIN_TOP + (minutes as f64 - (FIRST_HOUR * 60) as f64) * (HOUR_HEIGHT / 60.0)
}

fn xml_escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
