//! Human-readable schedule listing.

use std::io::Write;

use tt_solve::Schedule;

use crate::RenderResult;
use crate::writer::ScheduleWriter;

/// Writes one text block per accepted schedule:
///
/// ```text
/// Schedule 1:
///   Algorithms at Main Hall on MON from 09:00 to 11:00
///   Statistics at Annex on TUE from 13:00 to 15:00
///   (18 credits)
/// ```
pub struct TextReporter<W: Write> {
    out: W,
}

impl<W: Write> TextReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Unwrap the inner writer (e.g. to inspect a buffer in tests).
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ScheduleWriter for TextReporter<W> {
    fn write_schedule(&mut self, index: usize, schedule: &Schedule) -> RenderResult<()> {
        writeln!(self.out, "Schedule {}:", index + 1)?;
        for sess in &schedule.sessions {
            writeln!(
                self.out,
                "  {} at {} on {} from {} to {}",
                sess.course, sess.location, sess.day, sess.slot.start, sess.slot.end
            )?;
        }
        writeln!(self.out, "  ({} credits)", schedule.total_credits)?;
        writeln!(self.out)?;
        Ok(())
    }

    fn finish(&mut self) -> RenderResult<()> {
        self.out.flush()?;
        Ok(())
    }
}
