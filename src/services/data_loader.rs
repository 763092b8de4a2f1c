//! Loading data points from JSON files
//!
//! A data file is a JSON array of `{ "date": ..., "value": ... }` records.
//! Capitalised field names (`Date`, `Value`) are accepted as well. Dates are
//! either plain `YYYY-MM-DD` or RFC 3339 timestamps; timestamps are moved to
//! the local time zone and truncated to the calendar day.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Local, NaiveDate};
use serde::Deserialize;
use tracing::{info, warn};

use crate::types::{DataPoint, HeatcalError, Result};

/// One record as stored on disk
#[derive(Debug, Deserialize)]
struct RawDataPoint {
    #[serde(alias = "Date")]
    date: String,
    #[serde(alias = "Value")]
    value: f64,
}

/// Parse a stored date into a local calendar day
pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Local).date_naive())
        .map_err(|e| HeatcalError::Parse(format!("invalid date {:?}: {}", raw, e)))
}

/// Loader for data point files
pub struct DataLoader;

impl DataLoader {
    /// Parse data points from JSON text, keeping file order
    pub fn parse(content: &str) -> Result<Vec<DataPoint>> {
        let raw: Vec<RawDataPoint> =
            serde_json::from_str(content).map_err(|e| HeatcalError::Parse(e.to_string()))?;

        let mut points = Vec::with_capacity(raw.len());
        for record in raw {
            let date = parse_date(&record.date)?;
            if !record.value.is_finite() {
                warn!(%date, value = record.value, "skipping non-finite value");
                continue;
            }
            points.push(DataPoint::new(date, record.value));
        }
        Ok(points)
    }

    /// Read and parse a data file
    pub fn load(path: &Path) -> Result<Vec<DataPoint>> {
        let content = fs::read_to_string(path)?;
        let points = Self::parse(&content)?;
        info!(path = %path.display(), count = points.len(), "loaded data points");
        Ok(points)
    }

    /// Like [`DataLoader::load`], but a missing file yields no points
    pub fn load_or_empty(path: &Path) -> Result<Vec<DataPoint>> {
        if !path.exists() {
            info!(path = %path.display(), "no data file, starting empty");
            return Ok(Vec::new());
        }
        Self::load(path)
    }
}
