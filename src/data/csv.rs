use std::collections::HashMap;
use std::path::Path;

use csv::StringRecord;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::task::spawn_blocking;

use crate::types::{BarDatum, Point, ScatterPoint};

/// Errors surfaced while loading and projecting the dataset.
///
/// The aggregator and the renderers never see malformed input: every row
/// that survives projection carries finite, parsed numbers.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("column {0:?} not found in header")]
    MissingColumn(String),
    #[error("background task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Column mapping for the bar chart: one category field, one value field.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BarColumns {
    pub category: String,
    pub value: String,
}

impl Default for BarColumns {
    fn default() -> Self {
        Self { category: "Genre".into(), value: "Global_Sales".into() }
    }
}

/// Column mapping for the scatter plot.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ScatterColumns {
    pub x: String,
    pub y: String,
}

impl Default for ScatterColumns {
    fn default() -> Self {
        Self { x: "User_Score".into(), y: "Critic_Score".into() }
    }
}

/// Column mapping for the heatmap: two coordinates and a weight.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HeatColumns {
    pub x: String,
    pub y: String,
    pub weight: String,
}

impl Default for HeatColumns {
    fn default() -> Self {
        Self { x: "NA_Sales".into(), y: "EU_Sales".into(), weight: "JP_Sales".into() }
    }
}

/// Load the bar chart data: the value column summed per category.
///
/// Categories keep their first-appearance order in the file, which is the
/// order the band scale lays the bars out in. Rows whose value field does
/// not parse as a number are skipped.
pub async fn load_bar_data(
    path: impl AsRef<Path>,
    columns: &BarColumns,
) -> Result<Vec<BarDatum>, DataError> {
    let path = path.as_ref().to_path_buf();
    let columns = columns.clone();
    // csv parsing is blocking; keep it off the async executor
    spawn_blocking(move || read_bar_data(&path, &columns)).await?
}

/// Load the scatter plot data, truncated to the first `max_points` usable
/// rows (rows with unparseable coordinates do not count toward the limit).
pub async fn load_scatter_data(
    path: impl AsRef<Path>,
    columns: &ScatterColumns,
    max_points: usize,
) -> Result<Vec<ScatterPoint>, DataError> {
    let path = path.as_ref().to_path_buf();
    let columns = columns.clone();
    spawn_blocking(move || read_scatter_data(&path, &columns, max_points)).await?
}

/// Load the heatmap points: one weighted 2D point per usable row.
pub async fn load_heat_points(
    path: impl AsRef<Path>,
    columns: &HeatColumns,
) -> Result<Vec<Point>, DataError> {
    let path = path.as_ref().to_path_buf();
    let columns = columns.clone();
    spawn_blocking(move || read_heat_points(&path, &columns)).await?
}

fn open_reader(path: &Path) -> Result<csv::Reader<std::fs::File>, DataError> {
    Ok(csv::ReaderBuilder::new().flexible(true).from_path(path)?)
}

fn column_index(headers: &StringRecord, name: &str) -> Result<usize, DataError> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| DataError::MissingColumn(name.to_string()))
}

/// Parse a numeric field. The dataset writes unknown scores as "tbd" or
/// leaves the field empty; both fail the parse and the row is skipped.
fn numeric_field(record: &StringRecord, idx: usize) -> Option<f64> {
    record.get(idx)?.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn read_bar_data(path: &Path, columns: &BarColumns) -> Result<Vec<BarDatum>, DataError> {
    let mut reader = open_reader(path)?;
    let headers = reader.headers()?.clone();
    let cat_idx = column_index(&headers, &columns.category)?;
    let val_idx = column_index(&headers, &columns.value)?;

    let mut bars: Vec<BarDatum> = Vec::new();
    let mut by_category: HashMap<String, usize> = HashMap::new();
    let mut rows = 0usize;
    let mut skipped = 0usize;

    for record in reader.records() {
        let record = record?;
        rows += 1;

        let (category, value) = match (record.get(cat_idx), numeric_field(&record, val_idx)) {
            (Some(c), Some(v)) if !c.is_empty() => (c.to_string(), v),
            _ => {
                skipped += 1;
                continue;
            }
        };

        match by_category.get(&category) {
            Some(&i) => bars[i].value += value,
            None => {
                by_category.insert(category.clone(), bars.len());
                bars.push(BarDatum { category, value });
            }
        }
    }

    log_projection("bar", rows, skipped, bars.len());
    Ok(bars)
}

fn read_scatter_data(
    path: &Path,
    columns: &ScatterColumns,
    max_points: usize,
) -> Result<Vec<ScatterPoint>, DataError> {
    let mut reader = open_reader(path)?;
    let headers = reader.headers()?.clone();
    let x_idx = column_index(&headers, &columns.x)?;
    let y_idx = column_index(&headers, &columns.y)?;

    let mut points = Vec::new();
    let mut rows = 0usize;
    let mut skipped = 0usize;

    for record in reader.records() {
        if points.len() >= max_points {
            break;
        }
        let record = record?;
        rows += 1;

        match (numeric_field(&record, x_idx), numeric_field(&record, y_idx)) {
            (Some(x), Some(y)) => points.push(ScatterPoint { x, y }),
            _ => skipped += 1,
        }
    }

    log_projection("scatter", rows, skipped, points.len());
    Ok(points)
}

fn read_heat_points(path: &Path, columns: &HeatColumns) -> Result<Vec<Point>, DataError> {
    let mut reader = open_reader(path)?;
    let headers = reader.headers()?.clone();
    let x_idx = column_index(&headers, &columns.x)?;
    let y_idx = column_index(&headers, &columns.y)?;
    let w_idx = column_index(&headers, &columns.weight)?;

    let mut points = Vec::new();
    let mut rows = 0usize;
    let mut skipped = 0usize;

    for record in reader.records() {
        let record = record?;
        rows += 1;

        match (
            numeric_field(&record, x_idx),
            numeric_field(&record, y_idx),
            numeric_field(&record, w_idx),
        ) {
            (Some(x), Some(y), Some(weight)) => points.push(Point { x, y, weight }),
            _ => skipped += 1,
        }
    }

    log_projection("heatmap", rows, skipped, points.len());
    Ok(points)
}

fn log_projection(chart: &str, rows: usize, skipped: usize, kept: usize) {
    info!("{chart}: projected {kept} marks from {rows} rows");
    if skipped > 0 {
        warn!("{chart}: skipped {skipped} rows with missing or non-numeric fields");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(fields: &[&str]) -> StringRecord {
        StringRecord::from(fields.to_vec())
    }

    #[test]
    fn test_column_index_lookup() {
        let headers = record(&["Name", "Genre", "Global_Sales"]);
        assert_eq!(column_index(&headers, "Genre").unwrap(), 1);
        assert!(matches!(
            column_index(&headers, "JP_Sales"),
            Err(DataError::MissingColumn(name)) if name == "JP_Sales"
        ));
    }

    #[test]
    fn test_numeric_field_parsing() {
        let rec = record(&["82", " 7.5 ", "tbd", "", "NaN"]);
        assert_eq!(numeric_field(&rec, 0), Some(82.0));
        // surrounding whitespace is tolerated
        assert_eq!(numeric_field(&rec, 1), Some(7.5));
        assert_eq!(numeric_field(&rec, 2), None);
        assert_eq!(numeric_field(&rec, 3), None);
        // parses, but non-finite values are rejected
        assert_eq!(numeric_field(&rec, 4), None);
        // out of bounds
        assert_eq!(numeric_field(&rec, 9), None);
    }
}
