//! Multi-season views built on top of single-season standings.

use std::collections::BTreeMap;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::LeagueConfig;
use crate::core::types::{ChartSeriesPoint, GameRecord};
use crate::error::{ReportError, ReportResult};

use super::standings::{StandingsAggregator, StandingsRow};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonWeeks {
    pub season: u32,
    /// Last regular-season week with recorded games.
    pub regular_season_weeks: u32,
}

/// Seasons present in `games`, ascending, with their last regular-season week.
///
/// Seasons made only of playoff games are skipped.
#[must_use]
pub fn season_weeks(games: &[GameRecord]) -> Vec<SeasonWeeks> {
    let mut weeks: BTreeMap<u32, u32> = BTreeMap::new();
    for game in games.iter().filter(|game| !game.is_playoff) {
        let last = weeks.entry(game.season).or_insert(game.week);
        *last = (*last).max(game.week);
    }
    weeks
        .into_iter()
        .map(|(season, regular_season_weeks)| SeasonWeeks {
            season,
            regular_season_weeks,
        })
        .collect()
}

/// Full-season standings for every season, ascending by season.
pub fn all_season_standings(
    games: &[GameRecord],
    config: &LeagueConfig,
) -> ReportResult<Vec<Vec<StandingsRow>>> {
    let seasons: Vec<u32> = season_weeks(games).iter().map(|s| s.season).collect();
    let aggregator = StandingsAggregator::new(config);
    debug!(seasons = seasons.len(), "computing all season standings");

    // Seasons share no state, so the parallel path returns the same tables.
    #[cfg(feature = "parallel")]
    {
        seasons
            .par_iter()
            .map(|&season| aggregator.compute(games, season, None))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        seasons
            .iter()
            .map(|&season| aggregator.compute(games, season, None))
            .collect()
    }
}

/// One row per season the team played, ascending by season.
pub fn team_history(
    games: &[GameRecord],
    team: &str,
    config: &LeagueConfig,
) -> ReportResult<Vec<StandingsRow>> {
    let history: Vec<StandingsRow> = all_season_standings(games, config)?
        .into_iter()
        .flatten()
        .filter(|row| row.team == team)
        .collect();
    if history.is_empty() {
        return Err(ReportError::Lookup {
            kind: "team",
            key: team.to_owned(),
        });
    }
    Ok(history)
}

/// Regular-season rows of every crowned champion, ascending by season.
pub fn season_champions(
    games: &[GameRecord],
    config: &LeagueConfig,
) -> ReportResult<Vec<StandingsRow>> {
    Ok(all_season_standings(games, config)?
        .into_iter()
        .flatten()
        .filter(|row| row.is_champion)
        .collect())
}

/// Season on x, luck score on y, colored by team.
#[must_use]
pub fn luck_by_season_series(rows: &[StandingsRow]) -> Vec<ChartSeriesPoint> {
    rows.iter()
        .map(|row| ChartSeriesPoint::new(f64::from(row.season), row.luck_score as f64, &row.team))
        .collect()
}

/// Points for on x, points against on y, colored by team.
#[must_use]
pub fn points_scatter_series(rows: &[StandingsRow]) -> Vec<ChartSeriesPoint> {
    rows.iter()
        .map(|row| ChartSeriesPoint::new(row.points_for, row.points_against, &row.team))
        .collect()
}
