//! The `OutputWriter` trait implemented by all backend writers.

use crate::{DeliveryRow, FlightPathRow, OutputResult};

/// Trait implemented by the CSV and SQLite writers.
///
/// Errors are not surfaced to the dispatcher: the observer stores them and
/// hands them out through [`FlightOutputObserver::finish`][crate::FlightOutputObserver::finish].
pub trait OutputWriter {
    /// Append a batch of flight-path rows.
    fn write_flightpath(&mut self, rows: &[FlightPathRow]) -> OutputResult<()>;

    fn write_delivery(&mut self, row: &DeliveryRow) -> OutputResult<()>;

    /// Flush and close all underlying handles.  Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
