//! Scale math for the temperature heatmap.
//!
//! Implements the three mappings the chart needs:
//! - categorical band scales (year and month axes)
//! - linear scales (legend pixel axis)
//! - equal-interval threshold scales (temperature -> color bucket)

pub mod band;
pub mod linear;
pub mod threshold;

pub use band::{decade_ticks, BandScale};
pub use linear::LinearScale;
pub use threshold::{ScaleError, ThresholdScale};
