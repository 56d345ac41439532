//! `FlightOutputObserver<W>` — bridges `DispatchObserver` to an `OutputWriter`.

use tracing::debug;

use ld_core::LngLat;
use ld_dispatch::{DeliveryRecord, DispatchObserver, RunSummary};
use ld_drone::StepRecord;

use crate::row::{DeliveryRow, FlightPathRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// Flight-path rows are buffered and written in batches of this size.
const FLIGHTPATH_BATCH: usize = 256;

/// A [`DispatchObserver`] that writes every step and delivery to any
/// [`OutputWriter`] backend.
///
/// Observer callbacks cannot fail, so writer errors are stored.  A run that
/// aborts never reaches `on_run_end`, so call [`finish`][Self::finish] after
/// `dispatcher.run()` whatever it returned: it writes the buffered steps and
/// reports the first error.
pub struct FlightOutputObserver<W: OutputWriter> {
    writer:     W,
    pending:    Vec<FlightPathRow>,
    steps:      usize,
    deliveries: usize,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> FlightOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pending:    Vec::with_capacity(FLIGHTPATH_BATCH),
            steps:      0,
            deliveries: 0,
            last_error: None,
        }
    }

    /// Write any buffered steps, close the writer and return the first
    /// error seen during the run.  Safe to call more than once.
    pub fn finish(&mut self) -> OutputResult<()> {
        self.close();
        self.take_error().map_or(Ok(()), Err)
    }

    /// Take the first write error, if any.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn flush_pending(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let result = self.writer.write_flightpath(&self.pending);
        self.pending.clear();
        self.store_err(result);
    }

    fn close(&mut self) {
        self.flush_pending();
        let result = self.writer.finish();
        self.store_err(result);
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> DispatchObserver for FlightOutputObserver<W> {
    fn on_step(&mut self, step: &StepRecord) {
        self.steps += 1;
        self.pending.push(FlightPathRow::from(step));
        if self.pending.len() >= FLIGHTPATH_BATCH {
            self.flush_pending();
        }
    }

    fn on_delivery(&mut self, delivery: &DeliveryRecord) {
        self.deliveries += 1;
        let result = self.writer.write_delivery(&DeliveryRow::from(delivery));
        self.store_err(result);
    }

    fn on_run_end(&mut self, _summary: &RunSummary, _path: &[LngLat]) {
        self.close();
        debug!(steps = self.steps, deliveries = self.deliveries, "flight log closed");
    }
}
