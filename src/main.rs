//! Video Game Sales Chart Tool
//!
//! Renders the three charts (genre bar chart, score scatter plot, regional
//! sales heatmap) from a sales CSV into an output directory as SVG files.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tokio::runtime::Runtime;

use vgcharts::data::{load_bar_data, load_heat_points, load_scatter_data};
use vgcharts::plotting::{
    render_bar_chart, render_heatmap, render_scatter_chart, BarChartConfig, HeatmapConfig,
    ScatterChartConfig,
};

fn main() {
    let mut args = std::env::args().skip(1);
    let dataset = match args.next() {
        Some(p) => PathBuf::from(p),
        None => {
            eprintln!("Usage: vgcharts <dataset.csv> [output-dir]");
            std::process::exit(2);
        }
    };
    let out_dir = args.next().map(PathBuf::from).unwrap_or_else(|| PathBuf::from("charts"));

    let rt = match Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Error starting runtime: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = rt.block_on(render_all(&dataset, &out_dir)) {
        eprintln!("Error rendering charts: {:#}", e);
        std::process::exit(1);
    }
}

async fn render_all(dataset: &Path, out_dir: &Path) -> Result<()> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("creating output directory {}", out_dir.display()))?;

    let bar_config = BarChartConfig::default();
    let bars = load_bar_data(dataset, &bar_config.columns)
        .await
        .context("loading bar chart data")?;
    let bar_out = out_dir.join("sales_by_genre.svg");
    render_bar_chart(&bar_config, &bars, &bar_out)
        .map_err(|e| anyhow::anyhow!(e))
        .context("rendering bar chart")?;
    println!("Wrote {} ({} bars)", bar_out.display(), bars.len());

    let scatter_config = ScatterChartConfig::default();
    let points = load_scatter_data(dataset, &scatter_config.columns, scatter_config.max_points)
        .await
        .context("loading scatter plot data")?;
    let scatter_out = out_dir.join("scores_scatter.svg");
    render_scatter_chart(&scatter_config, &points, &scatter_out)
        .map_err(|e| anyhow::anyhow!(e))
        .context("rendering scatter plot")?;
    println!("Wrote {} ({} points)", scatter_out.display(), points.len());

    let heat_config = HeatmapConfig::default();
    let heat_points = load_heat_points(dataset, &heat_config.columns)
        .await
        .context("loading heatmap data")?;
    let heat_out = out_dir.join("regional_heatmap.svg");
    render_heatmap(&heat_config, &heat_points, &heat_out)
        .map_err(|e| anyhow::anyhow!(e))
        .context("rendering heatmap")?;
    println!("Wrote {} ({} marks)", heat_out.display(), heat_points.len());

    Ok(())
}
