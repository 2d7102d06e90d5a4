//! Configuration and report-level entry points.

mod json_contract;
mod league_config;
mod report;

pub use json_contract::{STANDINGS_TABLE_JSON_SCHEMA_V1, StandingsTableJsonContractV1};
pub use league_config::{ColorMap, LeagueConfig, SeasonSchedule};
pub use report::{SeasonReport, TeamReport};
