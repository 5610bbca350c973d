//! # Video Game Sales Chart Library
//!
//! `vgcharts` renders three SVG chart types from the video-game sales
//! dataset: a bar chart of sales per genre, a scatter plot of user score
//! against critic score, and a regional sales heatmap (raw points or
//! aggregated into a weight grid).
//!
//! ## Features
//!
//! - Asynchronous CSV loading with configurable column mappings
//! - Per-category value summation for the bar chart
//! - Spatial grid aggregation of weighted points for the binned heatmap
//! - One configurable renderer per chart type (geometry, theme, titles)
//!
//! ## Example
//!
//! ```no_run
//! use vgcharts::data::{load_heat_points, HeatColumns};
//! use vgcharts::plotting::{render_heatmap, HeatmapConfig};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//! let points = load_heat_points("games.csv", &HeatColumns::default()).await?;
//! let config = HeatmapConfig { bin: Some((0.5, 0.5)), ..HeatmapConfig::default() };
//! render_heatmap(&config, &points, "heatmap.svg")?;
//! # Ok(())
//! # }
//! ```

pub mod data;
pub mod plotting;
pub mod types;
pub mod utils;

// Re-export main types for convenience
pub use types::{BarDatum, Cell, Point, ScatterPoint};
pub use utils::aggregate_grid;
