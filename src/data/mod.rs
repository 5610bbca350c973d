pub mod csv;

pub use self::csv::{
    load_bar_data, load_heat_points, load_scatter_data, BarColumns, DataError, HeatColumns,
    ScatterColumns,
};
