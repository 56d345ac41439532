//! GeoJSON line trace of the final path.
//!
//! The output is a `FeatureCollection` with a single `LineString` feature
//! whose coordinates are `[lng, lat]` pairs in flight order.

use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde_json::{Value, json};
use tracing::info;

use ld_core::LngLat;

use crate::{OutputError, OutputResult};

/// The calendar day a run is for.  Written as `DD-MM-YYYY`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RunDate {
    pub day:   u8,
    pub month: u8,
    pub year:  u16,
}

impl RunDate {
    pub fn new(day: u8, month: u8, year: u16) -> OutputResult<Self> {
        let date = Self { day, month, year };
        if month == 0 || month > 12 || day == 0 || day > days_in_month(month, year) {
            return Err(OutputError::InvalidDate(date.to_string()));
        }
        Ok(date)
    }

    /// `drone-DD-MM-YYYY.geojson`
    pub fn geojson_file_name(&self) -> String {
        format!("drone-{self}.geojson")
    }
}

fn days_in_month(month: u8, year: u16) -> u8 {
    match month {
        2 if year % 4 == 0 && (year % 100 != 0 || year % 400 == 0) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

impl fmt::Display for RunDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}-{:04}", self.day, self.month, self.year)
    }
}

impl FromStr for RunDate {
    type Err = OutputError;

    fn from_str(s: &str) -> OutputResult<Self> {
        let invalid = || OutputError::InvalidDate(s.to_owned());
        let mut parts = s.trim().split('-');
        let (Some(d), Some(m), Some(y), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid());
        };
        let day = d.parse().map_err(|_| invalid())?;
        let month = m.parse().map_err(|_| invalid())?;
        let year = y.parse().map_err(|_| invalid())?;
        RunDate::new(day, month, year).map_err(|_| invalid())
    }
}

/// Build the `FeatureCollection` for `path`.
pub fn path_feature_collection(path: &[LngLat]) -> Value {
    let coordinates: Vec<[f64; 2]> = path.iter().map(|p| [p.lng, p.lat]).collect();
    json!({
        "type": "FeatureCollection",
        "features": [{
            "type": "Feature",
            "properties": {},
            "geometry": {
                "type": "LineString",
                "coordinates": coordinates,
            },
        }],
    })
}

/// Write `path` to `dir/drone-DD-MM-YYYY.geojson` and return the file path.
pub fn write_path_geojson(dir: &Path, date: RunDate, path: &[LngLat]) -> OutputResult<PathBuf> {
    let file = dir.join(date.geojson_file_name());
    let mut out = BufWriter::new(File::create(&file)?);
    serde_json::to_writer(&mut out, &path_feature_collection(path))?;
    out.flush()?;
    info!(file = %file.display(), points = path.len(), "wrote flight path");
    Ok(file)
}
