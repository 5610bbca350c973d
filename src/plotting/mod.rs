pub mod chart;
pub mod styles;


pub use chart::{render_bar_chart, render_heatmap, render_scatter_chart};
pub use styles::{BarChartConfig, ChartGeometry, ChartTheme, HeatmapConfig, ScatterChartConfig};
