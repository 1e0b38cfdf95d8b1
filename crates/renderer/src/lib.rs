//! SVG chart rendering for the temperature heatmap.
//!
//! Produces a self-contained SVG document:
//! - one cell rectangle per reading, colored by temperature bucket
//! - x/y axes (years and month names) and an 11-bucket legend
//! - hover behavior via embedded CSS and per-cell `<title>` tooltips
//!
//! The chart can optionally be rasterized to PNG.

pub mod chart;
pub mod layout;
pub mod png;
pub mod svg;

pub use chart::render_chart;
pub use layout::{ChartLayout, Padding};
pub use png::rasterize;
