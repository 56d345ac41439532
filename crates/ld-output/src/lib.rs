//! `ld-output` — flight-log writers for the lunch-drone planner.
//!
//! Two tabular backends are provided, the second behind a Cargo feature:
//!
//! | Feature   | Backend | Files created                          |
//! |-----------|---------|----------------------------------------|
//! | *(none)*  | CSV     | `flightpath.csv`, `deliveries.csv`     |
//! | `sqlite`  | SQLite  | `output.db`                            |
//!
//! Both implement [`OutputWriter`] and are driven by
//! [`FlightOutputObserver`], which implements
//! `ld_dispatch::DispatchObserver`.  The final path is written separately
//! as a GeoJSON line trace by [`write_path_geojson`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use ld_output::{CsvWriter, FlightOutputObserver, RunDate, write_path_geojson};
//!
//! let mut obs = FlightOutputObserver::new(CsvWriter::new(out_dir)?);
//! let run = dispatcher.run(orders, &mut obs);
//! obs.finish()?;            // also after an aborted run
//! let outcome = run?;
//! write_path_geojson(out_dir, date, &outcome.path)?;
//! ```

pub mod csv;
pub mod error;
pub mod geojson;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use self::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use geojson::{RunDate, path_feature_collection, write_path_geojson};
pub use observer::FlightOutputObserver;
pub use row::{DeliveryRow, FlightPathRow, NO_ORDER};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
