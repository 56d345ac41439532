//! CSV output backend.
//!
//! Creates `flightpath.csv` and `deliveries.csv` in the output directory.

use std::fs::File;
use std::path::Path;

use csv::{Writer, WriterBuilder};

use crate::writer::OutputWriter;
use crate::{DeliveryRow, FlightPathRow, OutputResult};

pub const FLIGHTPATH_HEADER: [&str; 6] =
    ["order_no", "from_lng", "from_lat", "angle", "to_lng", "to_lat"];
pub const DELIVERIES_HEADER: [&str; 3] = ["order_no", "delivered_to", "cost_in_pence"];

/// Writes run output to two CSV files.
pub struct CsvWriter {
    flightpath: Writer<File>,
    deliveries: Writer<File>,
    finished:   bool,
}

impl CsvWriter {
    /// Create the two CSV files in `dir` and write their header rows, so an
    /// empty run still leaves well-formed files.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let open = |name: &str, header: &[&str]| -> OutputResult<Writer<File>> {
            let mut w = WriterBuilder::new().has_headers(false).from_path(dir.join(name))?;
            w.write_record(header)?;
            Ok(w)
        };
        Ok(Self {
            flightpath: open("flightpath.csv", &FLIGHTPATH_HEADER)?,
            deliveries: open("deliveries.csv", &DELIVERIES_HEADER)?,
            finished:   false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_flightpath(&mut self, rows: &[FlightPathRow]) -> OutputResult<()> {
        for row in rows {
            self.flightpath.serialize(row)?;
        }
        Ok(())
    }

    fn write_delivery(&mut self, row: &DeliveryRow) -> OutputResult<()> {
        self.deliveries.serialize(row)?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.flightpath.flush()?;
        self.deliveries.flush()?;
        Ok(())
    }
}
