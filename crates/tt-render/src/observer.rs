//! `SearchOutputObserver<W>` — bridges `SearchObserver` to a `ScheduleWriter`.

use tt_solve::{Schedule, SearchObserver};

use crate::RenderError;
use crate::writer::ScheduleWriter;

/// A [`SearchObserver`] that forwards every accepted schedule to a
/// [`ScheduleWriter`] backend (text report, SVG files, or both via the
/// tuple impl).
///
/// Writer errors are stored internally because observer methods have no
/// return value.  After the search returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SearchOutputObserver<W: ScheduleWriter> {
    writer:     W,
    last_error: Option<RenderError>,
}

impl<W: ScheduleWriter> SearchOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after the search returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<RenderError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect a buffer after the search).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::RenderResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: ScheduleWriter> SearchObserver for SearchOutputObserver<W> {
    fn on_schedule(&mut self, index: usize, schedule: &Schedule) {
        let result = self.writer.write_schedule(index, schedule);
        self.store_err(result);
    }

    fn on_search_end(&mut self, _accepted: usize) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
