//! SQLite output backend (feature `sqlite`).
//!
//! Creates `output.db` in the output directory with two tables,
//! `flightpath` and `deliveries`, holding the same columns as the CSV files.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{DeliveryRow, FlightPathRow, OutputResult};

/// Writes run output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and reset both tables.
    ///
    /// Each run replaces the previous day's rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             DROP TABLE IF EXISTS flightpath;
             DROP TABLE IF EXISTS deliveries;
             CREATE TABLE flightpath (
                 order_no TEXT    NOT NULL,
                 from_lng REAL    NOT NULL,
                 from_lat REAL    NOT NULL,
                 angle    INTEGER NOT NULL,
                 to_lng   REAL    NOT NULL,
                 to_lat   REAL    NOT NULL
             );
             CREATE TABLE deliveries (
                 order_no      TEXT    NOT NULL,
                 delivered_to  TEXT    NOT NULL,
                 cost_in_pence INTEGER NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_flightpath(&mut self, rows: &[FlightPathRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO flightpath (order_no, from_lng, from_lat, angle, to_lng, to_lat) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.order_no,
                    row.from_lng,
                    row.from_lat,
                    row.angle,
                    row.to_lng,
                    row.to_lat,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_delivery(&mut self, row: &DeliveryRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO deliveries (order_no, delivered_to, cost_in_pence) VALUES (?1, ?2, ?3)",
            rusqlite::params![row.order_no, row.delivered_to, row.cost_in_pence],
        )?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
