use std::collections::HashMap;

use crate::types::{Cell, Point};

/// Aggregate weighted 2D points into a sparse grid of fixed-size cells.
///
/// Each point is assigned to the cell `(floor(x / bin_width),
/// floor(y / bin_height))` and its weight is added to that cell's total.
/// The first point observed for a key creates the cell with its
/// representative coordinates at the cell's lower-left corner.
///
/// Floor division (not truncation toward zero) keeps negative coordinates
/// binning consistently: `x = -5` with `bin_width = 10` lands in cell `-1`,
/// adjacent to and distinct from cell `0`.
///
/// The output order is unspecified; every cell is drawn independently of
/// the others. Empty input yields an empty output. Weights are summed as
/// supplied, including zero and negative values.
pub fn aggregate_grid(points: &[Point], bin_width: f64, bin_height: f64) -> Vec<Cell> {
    debug_assert!(bin_width > 0.0 && bin_height > 0.0);

    let mut cells: HashMap<(i64, i64), Cell> = HashMap::with_capacity(points.len().min(1024));

    for p in points {
        let cell_x = (p.x / bin_width).floor() as i64;
        let cell_y = (p.y / bin_height).floor() as i64;

        let cell = cells.entry((cell_x, cell_y)).or_insert(Cell {
            cell_x,
            cell_y,
            x: cell_x as f64 * bin_width,
            y: cell_y as f64 * bin_height,
            total_weight: 0.0,
        });
        cell.total_weight += p.weight;
    }

    cells.into_values().collect()
}

/// Minimum and maximum of the values produced by `f` over `data`, or
/// `None` when `data` is empty. Used to size the linear chart scales.
pub fn extent<T>(data: &[T], f: impl Fn(&T) -> f64) -> Option<(f64, f64)> {
    data.iter().map(f).fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sorted(mut cells: Vec<Cell>) -> Vec<Cell> {
        cells.sort_by_key(|c| (c.cell_x, c.cell_y));
        cells
    }

    #[test]
    fn test_empty_input() {
        let result = aggregate_grid(&[], 10.0, 10.0);
        assert!(result.is_empty());
    }

    #[test]
    fn test_two_points_share_a_cell() {
        let points = vec![
            Point::new(5.0, 5.0, 1.0),
            Point::new(5.0, 5.0, 2.0),
            Point::new(15.0, 5.0, 3.0),
        ];

        let result = sorted(aggregate_grid(&points, 10.0, 10.0));
        assert_eq!(
            result,
            vec![
                Cell { cell_x: 0, cell_y: 0, x: 0.0, y: 0.0, total_weight: 3.0 },
                Cell { cell_x: 1, cell_y: 0, x: 10.0, y: 0.0, total_weight: 3.0 },
            ]
        );
    }

    #[test]
    fn test_negative_coordinates_floor_divide() {
        // -5 / 10 truncated toward zero would give cell 0; floor gives -1.
        let points = vec![Point::new(-5.0, -5.0, 4.0)];

        let result = aggregate_grid(&points, 10.0, 10.0);
        assert_eq!(
            result,
            vec![Cell { cell_x: -1, cell_y: -1, x: -10.0, y: -10.0, total_weight: 4.0 }]
        );
    }

    #[test]
    fn test_weight_is_conserved() {
        let points: Vec<Point> = (0..100)
            .map(|i| Point::new(i as f64 * 3.7, (i % 13) as f64 * 2.1, i as f64 * 0.5))
            .collect();

        let cells = aggregate_grid(&points, 8.0, 8.0);
        let in_sum: f64 = points.iter().map(|p| p.weight).sum();
        let out_sum: f64 = cells.iter().map(|c| c.total_weight).sum();
        assert!((in_sum - out_sum).abs() < 1e-9);
    }

    #[test]
    fn test_cell_count_bounded_by_point_count() {
        let points: Vec<Point> = (0..50)
            .map(|i| Point::new((i % 7) as f64, (i % 5) as f64, 1.0))
            .collect();

        let cells = aggregate_grid(&points, 2.0, 2.0);
        assert!(cells.len() <= points.len());

        let distinct: std::collections::HashSet<(i64, i64)> = points
            .iter()
            .map(|p| ((p.x / 2.0).floor() as i64, (p.y / 2.0).floor() as i64))
            .collect();
        assert_eq!(cells.len(), distinct.len());
    }

    #[test]
    fn test_zero_and_negative_weights_sum_through() {
        let points = vec![
            Point::new(1.0, 1.0, 0.0),
            Point::new(1.5, 1.5, -2.5),
            Point::new(0.5, 0.5, 2.5),
        ];

        let result = aggregate_grid(&points, 10.0, 10.0);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].total_weight, 0.0);
    }

    #[test]
    fn test_rerun_yields_identical_cells() {
        let points: Vec<Point> = (0..40)
            .map(|i| Point::new(i as f64 * 1.3 - 20.0, i as f64 * 0.9 - 15.0, 1.0))
            .collect();

        let first = sorted(aggregate_grid(&points, 5.0, 5.0));
        let second = sorted(aggregate_grid(&points, 5.0, 5.0));
        assert_eq!(first, second);
    }

    #[test]
    fn test_extent_basic() {
        let values = vec![3.0, -1.0, 7.5, 0.0];
        assert_eq!(extent(&values, |v| *v), Some((-1.0, 7.5)));
    }

    #[test]
    fn test_extent_empty() {
        let values: Vec<f64> = vec![];
        assert_eq!(extent(&values, |v| *v), None);
    }
}
