pub mod aggregation;

pub use aggregation::{aggregate_grid, extent};
