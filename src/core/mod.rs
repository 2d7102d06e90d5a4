pub mod grid;
pub mod path;
pub mod primitives;
pub mod scale;
pub mod types;

pub use grid::{
    AxisLimits, AxisTicks, DEFAULT_MIN_FRACTION, PlotArea, PlotGeometry, compute_axis_limits,
    compute_ticks, round_down_to_grid, round_up_to_grid,
};
pub use path::{build_path_string, parse_path_points};
pub use primitives::round_points;
pub use scale::{LinearScale, map_to_pixels};
pub use types::{ChartKind, ChartSeriesPoint, GameRecord, MatchupRecord, Viewport};
