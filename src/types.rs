//! # Common Types
//!
//! This module contains the common types used throughout the application for
//! representing projected dataset rows and grid aggregation results.

/// One input row projected to a weighted 2D point.
///
/// Produced by the CSV projection step (see [`crate::data`]) and consumed
/// once by the grid aggregator. Immutable by convention: nothing mutates a
/// point after projection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    /// Horizontal coordinate (e.g. North America sales, in millions)
    pub x: f64,
    /// Vertical coordinate (e.g. Europe sales, in millions)
    pub y: f64,
    /// Weight contributed to the cell this point falls into
    pub weight: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64, weight: f64) -> Self {
        Self { x, y, weight }
    }
}

/// One aggregated grid bucket.
///
/// Keyed by `(cell_x, cell_y)`, the floor-division bin indices of every
/// point that fell inside it. `x`/`y` hold the representative coordinates
/// (the cell's lower-left corner), which is where the rendering layer
/// places the mark for this cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cell {
    /// Bin index along X: `floor(point.x / bin_width)`
    pub cell_x: i64,
    /// Bin index along Y: `floor(point.y / bin_height)`
    pub cell_y: i64,
    /// Representative X coordinate: `cell_x * bin_width`
    pub x: f64,
    /// Representative Y coordinate: `cell_y * bin_height`
    pub y: f64,
    /// Sum of the weights of all points mapped to this cell
    pub total_weight: f64,
}

/// One bar of the category bar chart: a category label and the summed
/// value of every row carrying that label.
#[derive(Clone, Debug, PartialEq)]
pub struct BarDatum {
    /// Category label (e.g. genre)
    pub category: String,
    /// Summed value for the category (e.g. global sales, in millions)
    pub value: f64,
}

/// One mark of the scatter plot. The mark radius is a rendering concern
/// and lives in the chart configuration, not here.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
}
