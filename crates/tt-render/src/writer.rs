//! The `ScheduleWriter` trait implemented by all schedule sinks.

use tt_solve::Schedule;

use crate::RenderResult;

/// Trait implemented by the text reporter and the SVG renderer.
pub trait ScheduleWriter {
    /// Write one accepted schedule.
    ///
    /// `index` is 0-based; human-facing numbering starts at 1.
    fn write_schedule(&mut self, index: usize, schedule: &Schedule) -> RenderResult<()>;

    /// Flush and close any underlying handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> RenderResult<()> {
        Ok(())
    }
}

/// Forward to two writers in sequence, so a text report and an image
/// renderer can share one observer.
impl<A: ScheduleWriter, B: ScheduleWriter> ScheduleWriter for (A, B) {
    fn write_schedule(&mut self, index: usize, schedule: &Schedule) -> RenderResult<()> {
        self.0.write_schedule(index, schedule)?;
        self.1.write_schedule(index, schedule)
    }

    fn finish(&mut self) -> RenderResult<()> {
        self.0.finish()?;
        self.1.finish()
    }
}
