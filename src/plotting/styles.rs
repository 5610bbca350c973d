use plotters::style::RGBAColor;
use serde::{Deserialize, Serialize};

use crate::data::{BarColumns, HeatColumns, ScatterColumns};

/// Plot geometry: the size of the plotting area plus the four margins
/// around it. The rendered surface is the plot size plus the margins.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ChartGeometry {
    pub width: u32,
    pub height: u32,
    pub top: u32,
    pub left: u32,
    pub bottom: u32,
    pub right: u32,
}

impl ChartGeometry {
    pub const fn surface_width(&self) -> u32 {
        self.width + self.left + self.right
    }

    pub const fn surface_height(&self) -> u32 {
        self.height + self.top + self.bottom
    }
}

impl Default for ChartGeometry {
    fn default() -> Self {
        Self { width: 1000, height: 500, top: 30, left: 90, bottom: 200, right: 30 }
    }
}

/// Chart theme configuration
#[derive(Clone, Copy, Debug)]
pub struct ChartTheme {
    pub background_color: RGBAColor,
    pub text_color: RGBAColor,
    pub axis_color: RGBAColor,
    pub mark_color: RGBAColor,
    /// Opacity applied to filled marks (heatmap circles in particular)
    pub mark_opacity: f64,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            background_color: RGBAColor(255, 255, 255, 1.0),
            text_color: RGBAColor(40, 40, 40, 1.0),
            axis_color: RGBAColor(40, 40, 40, 0.9),
            // the teal the original marks use
            mark_color: RGBAColor(0x4a, 0x90, 0xa0, 1.0),
            mark_opacity: 0.8,
        }
    }
}

/// Configuration for the category bar chart: geometry, theme, titles and
/// the column mapping projecting rows into bars.
#[derive(Clone, Debug)]
pub struct BarChartConfig {
    pub geometry: ChartGeometry,
    pub theme: ChartTheme,
    pub title: String,
    pub x_desc: String,
    pub y_desc: String,
    pub columns: BarColumns,
    /// Fraction of each band left empty between bars, in `[0, 1)`
    pub padding: f64,
}

impl Default for BarChartConfig {
    fn default() -> Self {
        Self {
            geometry: ChartGeometry::default(),
            theme: ChartTheme::default(),
            title: "Global sales by genre".into(),
            x_desc: "Genre".into(),
            y_desc: "Global sales (millions)".into(),
            columns: BarColumns::default(),
            padding: 0.1,
        }
    }
}

/// Configuration for the scatter plot.
#[derive(Clone, Debug)]
pub struct ScatterChartConfig {
    pub geometry: ChartGeometry,
    pub theme: ChartTheme,
    pub title: String,
    pub x_desc: String,
    pub y_desc: String,
    pub columns: ScatterColumns,
    /// Mark radius in pixels
    pub point_radius: u32,
    /// Keep at most this many points, in file order
    pub max_points: usize,
}

impl Default for ScatterChartConfig {
    fn default() -> Self {
        Self {
            geometry: ChartGeometry::default(),
            theme: ChartTheme::default(),
            title: "User score vs critic score".into(),
            x_desc: "User score".into(),
            y_desc: "Critic score".into(),
            columns: ScatterColumns::default(),
            point_radius: 4,
            max_points: 1000,
        }
    }
}

/// Configuration for the heatmap.
///
/// With `bin = None` every point is drawn where it lies, colored by its
/// own weight. With `bin = Some((w, h))` points are first aggregated into
/// a grid of `w`-by-`h` cells and one mark is drawn per cell at its
/// lower-left corner, colored by the cell's total weight.
#[derive(Clone, Debug)]
pub struct HeatmapConfig {
    pub geometry: ChartGeometry,
    pub theme: ChartTheme,
    pub title: String,
    pub x_desc: String,
    pub y_desc: String,
    pub columns: HeatColumns,
    /// Mark radius in pixels
    pub mark_radius: u32,
    /// Optional `(bin_width, bin_height)` in data coordinates
    pub bin: Option<(f64, f64)>,
}

impl Default for HeatmapConfig {
    fn default() -> Self {
        Self {
            geometry: ChartGeometry { width: 800, height: 600, top: 30, left: 50, bottom: 30, right: 30 },
            theme: ChartTheme::default(),
            title: "Regional sales intensity".into(),
            x_desc: "NA sales (millions)".into(),
            y_desc: "EU sales (millions)".into(),
            columns: HeatColumns::default(),
            mark_radius: 10,
            bin: None,
        }
    }
}
