use std::collections::BTreeMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ReportError, ReportResult};
use crate::render::ChartLayout;

/// Length of one season, used to tell a finished season from one in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonSchedule {
    pub regular_season_weeks: u32,
    pub playoff_rounds: u32,
}

impl SeasonSchedule {
    #[must_use]
    pub const fn new(regular_season_weeks: u32, playoff_rounds: u32) -> Self {
        Self {
            regular_season_weeks,
            playoff_rounds,
        }
    }

    /// Week in which the title game is played.
    #[must_use]
    pub const fn championship_week(self) -> u32 {
        self.regular_season_weeks + self.playoff_rounds
    }

    /// A season is complete once its data reaches the championship week.
    #[must_use]
    pub const fn is_complete(self, max_recorded_week: u32) -> bool {
        max_recorded_week >= self.championship_week()
    }
}

impl Default for SeasonSchedule {
    fn default() -> Self {
        Self::new(14, 3)
    }
}

/// Team name to CSS color lookup for chart series.
///
/// Insertion order is kept so serialized configs stay stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorMap(IndexMap<String, String>);

impl ColorMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_color(mut self, key: impl Into<String>, color: impl Into<String>) -> Self {
        self.insert(key, color);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, color: impl Into<String>) {
        self.0.insert(key.into(), color.into());
    }

    /// Returns the color for `key`; a missing key is an error, never a default.
    pub fn lookup(&self, key: &str) -> ReportResult<&str> {
        self.0
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| ReportError::Lookup {
                kind: "color",
                key: key.to_owned(),
            })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ColorMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, color)| (key.into(), color.into()))
                .collect(),
        )
    }
}

/// League-level settings passed explicitly into aggregation and rendering.
///
/// Serializable so a report build can load it from JSON instead of relying
/// on process-wide constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeagueConfig {
    #[serde(default)]
    pub default_schedule: SeasonSchedule,
    /// Per-season overrides, e.g. for years with a shorter regular season.
    #[serde(default)]
    pub schedules: BTreeMap<u32, SeasonSchedule>,
    #[serde(default)]
    pub colors: ColorMap,
    #[serde(default)]
    pub chart: ChartLayout,
    /// Tick step for both axes of points-for vs points-against charts.
    #[serde(default = "default_points_axis_step")]
    pub points_axis_step: f64,
    /// Tick step for the luck axis of luck-by-season charts.
    #[serde(default = "default_luck_axis_step")]
    pub luck_axis_step: f64,
}

fn default_points_axis_step() -> f64 {
    100.0
}

fn default_luck_axis_step() -> f64 {
    2.0
}

impl Default for LeagueConfig {
    fn default() -> Self {
        Self {
            default_schedule: SeasonSchedule::default(),
            schedules: BTreeMap::new(),
            colors: ColorMap::default(),
            chart: ChartLayout::default(),
            points_axis_step: default_points_axis_step(),
            luck_axis_step: default_luck_axis_step(),
        }
    }
}

impl LeagueConfig {
    #[must_use]
    pub fn with_schedule(mut self, season: u32, schedule: SeasonSchedule) -> Self {
        self.schedules.insert(season, schedule);
        self
    }

    #[must_use]
    pub fn with_colors(mut self, colors: ColorMap) -> Self {
        self.colors = colors;
        self
    }

    #[must_use]
    pub fn schedule_for(&self, season: u32) -> SeasonSchedule {
        self.schedules
            .get(&season)
            .copied()
            .unwrap_or(self.default_schedule)
    }

    pub fn from_json_str(input: &str) -> ReportResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ReportError::Serialization(format!("failed to parse league config: {e}")))
    }

    pub fn to_json_pretty(&self) -> ReportResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ReportError::Serialization(format!("failed to serialize league config: {e}"))
        })
    }
}
