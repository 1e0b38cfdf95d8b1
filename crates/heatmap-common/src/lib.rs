//! Common types shared across the temperature-heatmap workspace.

pub mod dataset;
pub mod error;
pub mod month;
pub mod palette;

pub use dataset::{Dataset, MonthlyReading};
pub use error::{HeatmapError, HeatmapResult};
pub use month::month_name;
pub use palette::{bucket_colors, RD_YL_BU_11};
