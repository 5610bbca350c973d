use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::error::Error;
use std::ops::Range;
use std::path::Path;

use crate::plotting::styles::{BarChartConfig, HeatmapConfig, ScatterChartConfig};
use crate::types::{BarDatum, Point, ScatterPoint};
use crate::utils::{aggregate_grid, extent};

type PlotError = Box<dyn Error + Send + Sync>;

/// Render the category bar chart to an SVG file.
///
/// Categories are laid out as equal-width bands in input order along X,
/// values grow linearly from zero along Y. One filled rect per category.
pub fn render_bar_chart(
    config: &BarChartConfig,
    data: &[BarDatum],
    output: impl AsRef<Path>,
) -> Result<(), PlotError> {
    let geom = &config.geometry;
    let theme = &config.theme;
    let root = SVGBackend::new(output.as_ref(), (geom.surface_width(), geom.surface_height()))
        .into_drawing_area();
    root.fill(&theme.background_color)?;

    let n = data.len();
    let y_max = extent(data, |d| d.value).map(|(_, hi)| hi).filter(|hi| *hi > 0.0).unwrap_or(1.0);

    let mut chart = ChartBuilder::on(&root)
        .caption(&config.title, ("sans-serif", 30).into_font().color(&theme.text_color))
        .margin_top(geom.top)
        .margin_right(geom.right)
        .x_label_area_size(geom.bottom)
        .y_label_area_size(geom.left)
        .build_cartesian_2d(0f64..n.max(1) as f64, 0f64..y_max)?;

    // Band labels sit at the left edge of each band; thin them out when the
    // category count would make them overlap.
    let categories: Vec<String> = data.iter().map(|d| d.category.clone()).collect();
    let step = (n / 30).max(1);
    let x_label_formatter = move |x: &f64| {
        let idx = *x as usize;
        if (*x - idx as f64).abs() < f64::EPSILON && idx < categories.len() && idx % step == 0 {
            categories[idx].clone()
        } else {
            String::new()
        }
    };

    chart
        .configure_mesh()
        .light_line_style(TRANSPARENT)
        .bold_line_style(theme.axis_color.mix(0.15))
        .axis_style(theme.axis_color)
        .x_desc(&config.x_desc)
        .y_desc(&config.y_desc)
        .label_style(("sans-serif", 15).into_font().color(&theme.text_color))
        .x_labels(n + 1)
        .x_label_formatter(&x_label_formatter)
        .x_label_style(
            ("sans-serif", 15)
                .into_font()
                .color(&theme.text_color)
                .transform(FontTransform::Rotate90)
                .pos(Pos::new(HPos::Right, VPos::Center)),
        )
        .draw()?;

    let pad = (config.padding / 2.0).clamp(0.0, 0.49);
    chart.draw_series(data.iter().enumerate().map(|(i, d)| {
        let x0 = i as f64 + pad;
        let x1 = (i + 1) as f64 - pad;
        Rectangle::new([(x0, 0.0), (x1, d.value)], theme.mark_color.filled())
    }))?;

    root.present()?;
    Ok(())
}

/// Render the scatter plot to an SVG file: one fixed-radius circle per
/// point, X spanning the data extent and Y pinned to start at zero.
pub fn render_scatter_chart(
    config: &ScatterChartConfig,
    data: &[ScatterPoint],
    output: impl AsRef<Path>,
) -> Result<(), PlotError> {
    let geom = &config.geometry;
    let theme = &config.theme;
    let root = SVGBackend::new(output.as_ref(), (geom.surface_width(), geom.surface_height()))
        .into_drawing_area();
    root.fill(&theme.background_color)?;

    let x_range = padded_range(extent(data, |p| p.x));
    let y_range =
        0f64..extent(data, |p| p.y).map(|(_, hi)| hi).filter(|hi| *hi > 0.0).unwrap_or(1.0);

    let mut chart = ChartBuilder::on(&root)
        .caption(&config.title, ("sans-serif", 30).into_font().color(&theme.text_color))
        .margin_top(geom.top)
        .margin_right(geom.right)
        .x_label_area_size(geom.bottom)
        .y_label_area_size(geom.left)
        .build_cartesian_2d(x_range, y_range)?;

    chart
        .configure_mesh()
        .light_line_style(TRANSPARENT)
        .bold_line_style(theme.axis_color.mix(0.15))
        .axis_style(theme.axis_color)
        .x_desc(&config.x_desc)
        .y_desc(&config.y_desc)
        .x_labels(10)
        .y_labels(10)
        .label_style(("sans-serif", 15).into_font().color(&theme.text_color))
        .draw()?;

    chart.draw_series(
        data.iter()
            .map(|p| Circle::new((p.x, p.y), config.point_radius as i32, theme.mark_color.filled())),
    )?;

    root.present()?;
    Ok(())
}

/// Render the heatmap to an SVG file.
///
/// Without binning, every point is drawn at its own coordinates with a
/// color picked from the weight extent. With binning, points are first
/// folded into grid cells and one mark is drawn per cell at the cell's
/// lower-left corner, colored by its total weight.
pub fn render_heatmap(
    config: &HeatmapConfig,
    points: &[Point],
    output: impl AsRef<Path>,
) -> Result<(), PlotError> {
    // (x, y, weight) triples actually drawn, one mark each
    let marks: Vec<(f64, f64, f64)> = match config.bin {
        Some((bin_w, bin_h)) => aggregate_grid(points, bin_w, bin_h)
            .into_iter()
            .map(|c| (c.x, c.y, c.total_weight))
            .collect(),
        None => points.iter().map(|p| (p.x, p.y, p.weight)).collect(),
    };

    let geom = &config.geometry;
    let theme = &config.theme;
    let root = SVGBackend::new(output.as_ref(), (geom.surface_width(), geom.surface_height()))
        .into_drawing_area();
    root.fill(&theme.background_color)?;

    let x_range = padded_range(extent(&marks, |m| m.0));
    let y_range = padded_range(extent(&marks, |m| m.1));
    let weight_extent = extent(&marks, |m| m.2);

    let mut chart = ChartBuilder::on(&root)
        .caption(&config.title, ("sans-serif", 30).into_font().color(&theme.text_color))
        .margin_top(geom.top)
        .margin_right(geom.right)
        .x_label_area_size(geom.bottom)
        .y_label_area_size(geom.left)
        .build_cartesian_2d(x_range, y_range)?;

    chart
        .configure_mesh()
        .light_line_style(TRANSPARENT)
        .bold_line_style(theme.axis_color.mix(0.15))
        .axis_style(theme.axis_color)
        .x_desc(&config.x_desc)
        .y_desc(&config.y_desc)
        .x_labels(10)
        .y_labels(10)
        .label_style(("sans-serif", 15).into_font().color(&theme.text_color))
        .draw()?;

    chart.draw_series(marks.iter().map(|&(x, y, w)| {
        let color = sequential_color(normalize(w, weight_extent)).mix(theme.mark_opacity);
        Circle::new((x, y), config.mark_radius as i32, color.filled())
    }))?;

    root.present()?;
    Ok(())
}

/// Data range for a linear scale, with fallbacks so the chart always
/// builds: `0..1` for empty input and a half-unit pad around a degenerate
/// single-value extent.
fn padded_range(ext: Option<(f64, f64)>) -> Range<f64> {
    match ext {
        None => 0.0..1.0,
        Some((lo, hi)) if lo == hi => (lo - 0.5)..(hi + 0.5),
        Some((lo, hi)) => lo..hi,
    }
}

/// Map a weight into `[0, 1]` over the observed weight extent. A
/// degenerate extent maps everything to the middle of the ramp.
fn normalize(w: f64, ext: Option<(f64, f64)>) -> f64 {
    match ext {
        Some((lo, hi)) if hi > lo => ((w - lo) / (hi - lo)).clamp(0.0, 1.0),
        _ => 0.5,
    }
}

/// Sequential colormap interpolating fixed inferno control points:
/// near-black through purple and red to pale yellow.
fn sequential_color(v: f64) -> RGBColor {
    const POINTS: [(f64, f64, f64); 5] = [
        (0.0015, 0.0005, 0.0139), // near black
        (0.3412, 0.0627, 0.4314), // purple
        (0.7373, 0.2157, 0.3294), // red
        (0.9765, 0.5569, 0.0353), // orange
        (0.9882, 1.0000, 0.6431), // pale yellow
    ];

    let v = v.clamp(0.0, 1.0);
    let idx = v * (POINTS.len() - 1) as f64;
    let i = idx.floor() as usize;
    let t = idx - i as f64;

    if i >= POINTS.len() - 1 {
        let (r, g, b) = POINTS[POINTS.len() - 1];
        return RGBColor((r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8);
    }

    let (r0, g0, b0) = POINTS[i];
    let (r1, g1, b1) = POINTS[i + 1];
    RGBColor(
        ((r0 + t * (r1 - r0)) * 255.0) as u8,
        ((g0 + t * (g1 - g0)) * 255.0) as u8,
        ((b0 + t * (b1 - b0)) * 255.0) as u8,
    )
}

#[cfg(test)]
mod scale_tests {
    use super::*;

    #[test]
    fn test_padded_range_fallbacks() {
        assert_eq!(padded_range(None), 0.0..1.0);
        assert_eq!(padded_range(Some((2.0, 2.0))), 1.5..2.5);
        assert_eq!(padded_range(Some((1.0, 3.0))), 1.0..3.0);
    }

    #[test]
    fn test_normalize_clamps() {
        let ext = Some((0.0, 10.0));
        assert_eq!(normalize(-5.0, ext), 0.0);
        assert_eq!(normalize(5.0, ext), 0.5);
        assert_eq!(normalize(25.0, ext), 1.0);
        assert_eq!(normalize(7.0, None), 0.5);
    }

    #[test]
    fn test_sequential_color_endpoints() {
        let lo = sequential_color(0.0);
        let hi = sequential_color(1.0);
        // dark at the bottom of the ramp, bright at the top
        assert!(lo.0 < 10 && lo.2 < 10);
        assert!(hi.0 > 200 && hi.1 > 200);
    }
}
