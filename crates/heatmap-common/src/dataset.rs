//! Dataset model for monthly global land-surface temperature anomalies.
//!
//! The fetched JSON document has the shape:
//! `{ "baseTemperature": 8.66, "monthlyVariance": [{ "year": 1753, "month": 1, "variance": -1.366 }, ...] }`
//!
//! The absolute temperature of a reading is `baseTemperature + variance`.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{HeatmapError, HeatmapResult};

/// The fetched dataset. Immutable once constructed; every scale in the
/// renderer is recomputed from it deterministically.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub base_temperature: f64,
    pub monthly_variance: Vec<MonthlyReading>,
}

/// One month's deviation from the base temperature.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MonthlyReading {
    pub year: i32,
    /// Calendar month, 1-12.
    pub month: u32,
    /// Deviation from the base temperature in degrees Celsius.
    pub variance: f64,
}

/// Raw document as fetched. Record fields are optional so a single
/// malformed record cannot poison the whole parse.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDataset {
    base_temperature: f64,
    #[serde(default)]
    monthly_variance: Vec<RawReading>,
}

#[derive(Debug, Deserialize)]
struct RawReading {
    #[serde(default)]
    year: Option<i64>,
    #[serde(default)]
    month: Option<i64>,
    #[serde(default)]
    variance: Option<f64>,
}

impl RawReading {
    fn validate(&self) -> Result<MonthlyReading, &'static str> {
        let year = self.year.ok_or("missing year")?;
        let month = self.month.ok_or("missing month")?;
        let variance = self.variance.ok_or("missing variance")?;
        let year = i32::try_from(year).map_err(|_| "year out of range")?;
        if !(1..=12).contains(&month) {
            return Err("month outside 1-12");
        }
        if !variance.is_finite() {
            return Err("variance is not finite");
        }
        Ok(MonthlyReading {
            year,
            month: month as u32,
            variance,
        })
    }
}

impl Dataset {
    /// Create a dataset from already-validated readings.
    pub fn new(base_temperature: f64, monthly_variance: Vec<MonthlyReading>) -> HeatmapResult<Self> {
        if monthly_variance.is_empty() {
            return Err(HeatmapError::EmptyDataset);
        }
        Ok(Self {
            base_temperature,
            monthly_variance,
        })
    }

    /// Parse the dataset from its JSON document.
    ///
    /// Malformed records (missing fields, month outside 1-12, non-finite
    /// variance) are skipped with a warning. Fails only when no valid
    /// record remains.
    pub fn from_json(json: &str) -> HeatmapResult<Self> {
        let raw: RawDataset = serde_json::from_str(json)?;

        let mut readings = Vec::with_capacity(raw.monthly_variance.len());
        let mut skipped = 0usize;
        for (index, record) in raw.monthly_variance.iter().enumerate() {
            match record.validate() {
                Ok(reading) => readings.push(reading),
                Err(reason) => {
                    skipped += 1;
                    warn!(index, reason, "skipping malformed record");
                }
            }
        }
        if skipped > 0 {
            warn!(skipped, kept = readings.len(), "dataset contained malformed records");
        }

        Self::new(raw.base_temperature, readings)
    }

    /// Read and parse the dataset from a local JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> HeatmapResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Absolute temperature of a reading.
    pub fn temperature(&self, reading: &MonthlyReading) -> f64 {
        self.base_temperature + reading.variance
    }

    /// `(min, max)` of `base + variance` over all readings.
    pub fn temperature_extent(&self) -> Option<(f64, f64)> {
        let mut variances = self.monthly_variance.iter().map(|r| r.variance);
        let first = variances.next()?;
        let (min, max) = variances.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));
        Some((self.base_temperature + min, self.base_temperature + max))
    }

    /// Distinct years present, in first-occurrence order.
    pub fn years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = Vec::new();
        for reading in &self.monthly_variance {
            if !years.contains(&reading.year) {
                years.push(reading.year);
            }
        }
        years
    }

    /// `(first, last)` year covered by the dataset.
    pub fn year_range(&self) -> Option<(i32, i32)> {
        let mut years = self.monthly_variance.iter().map(|r| r.year);
        let first = years.next()?;
        let (min, max) = years.fold((first, first), |(lo, hi), y| (lo.min(y), hi.max(y)));
        Some((min, max))
    }

    pub fn len(&self) -> usize {
        self.monthly_variance.len()
    }

    pub fn is_empty(&self) -> bool {
        self.monthly_variance.is_empty()
    }
}
