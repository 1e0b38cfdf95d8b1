//! Error types for chart generation.

use thiserror::Error;

/// Result type alias using HeatmapError.
pub type HeatmapResult<T> = Result<T, HeatmapError>;

/// Primary error type for heatmap operations.
#[derive(Debug, Error)]
pub enum HeatmapError {
    #[error("Failed to fetch dataset: {0}")]
    Fetch(String),

    #[error("Failed to parse dataset: {0}")]
    Parse(String),

    #[error("Dataset contains no valid readings")]
    EmptyDataset,

    #[error("Rendering failed: {0}")]
    Render(String),

    #[error("SVG write error: {0}")]
    Svg(String),

    #[error("Rasterization failed: {0}")]
    Raster(String),

    #[error("I/O error: {0}")]
    Io(String),
}

// Conversion from common error types
impl From<std::io::Error> for HeatmapError {
    fn from(err: std::io::Error) -> Self {
        HeatmapError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for HeatmapError {
    fn from(err: serde_json::Error) -> Self {
        HeatmapError::Parse(format!("JSON error: {}", err))
    }
}
