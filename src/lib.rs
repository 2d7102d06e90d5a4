//! luck-report: analytics engine for fantasy-football season reports.
//!
//! The crate turns per-team game records into luck scores and ranked
//! standings, and lays arbitrary (x, y) series out as self-contained SVG
//! charts without a charting library. Loading records and assembling pages is
//! left to the caller.

pub mod analytics;
pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use analytics::{StandingsRow, compute_standings, luck_score};
pub use api::{ColorMap, LeagueConfig, SeasonReport};
pub use error::{ReportError, ReportResult};
pub use render::{ChartRequest, SvgFragment, render_chart};
