use std::cmp::Reverse;

use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, warn};

use crate::api::{LeagueConfig, SeasonSchedule};
use crate::core::primitives::round_points;
use crate::core::types::GameRecord;
use crate::error::ReportResult;

use super::baseline::SeasonBaseline;
use super::luck::luck_score;

/// One ranked line of a season (or partial-season) table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandingsRow {
    pub season: u32,
    pub team: String,
    pub wins: u32,
    pub losses: u32,
    pub record: String,
    pub points_for: f64,
    pub points_against: f64,
    pub points_for_per_game: f64,
    /// Points per game relative to the league average, where 100 is average.
    pub points_for_per_game_index: i64,
    pub avg_margin: f64,
    pub luck_score: i64,
    pub rank: usize,
    pub is_champion: bool,
}

#[derive(Debug, Default)]
struct TeamTotals {
    games: u32,
    wins: u32,
    points_for: f64,
    points_against: f64,
    luck_score: i64,
}

/// Builds standings tables for one league configuration.
#[derive(Debug, Clone, Copy)]
pub struct StandingsAggregator<'a> {
    config: &'a LeagueConfig,
}

impl<'a> StandingsAggregator<'a> {
    #[must_use]
    pub fn new(config: &'a LeagueConfig) -> Self {
        Self { config }
    }

    /// Ranks every team of `season` on regular-season games.
    ///
    /// With `through_week` only weeks up to and including it count and no
    /// champion is flagged. An empty selection yields an empty table.
    pub fn compute(
        &self,
        games: &[GameRecord],
        season: u32,
        through_week: Option<u32>,
    ) -> ReportResult<Vec<StandingsRow>> {
        let selected: Vec<&GameRecord> = games
            .iter()
            .filter(|game| game.season == season && !game.is_playoff)
            .filter(|game| through_week.is_none_or(|week| game.week <= week))
            .collect();
        if selected.is_empty() {
            debug!(season, ?through_week, "no regular-season games selected");
            return Ok(Vec::new());
        }

        let scores: Vec<f64> = selected.iter().map(|game| game.points_scored).collect();
        let baseline = SeasonBaseline::from_scores(&scores)?;

        let mut totals: IndexMap<&str, TeamTotals> = IndexMap::new();
        for game in &selected {
            let team = totals.entry(game.team.as_str()).or_default();
            team.games += 1;
            team.wins += u32::from(game.won);
            team.points_for += game.points_scored;
            team.points_against += game.points_allowed;
            team.luck_score += i64::from(luck_score(
                game.points_scored,
                game.points_allowed,
                baseline,
            ));
        }

        let champion = match through_week {
            None => season_champion(games, season, self.config.schedule_for(season)),
            Some(_) => None,
        };

        let mut ranked: Vec<(&str, TeamTotals)> = totals.into_iter().collect();
        // Stable: equal (wins, points_for) keep first-appearance order.
        ranked.sort_by_key(|(_, t)| (Reverse(t.wins), Reverse(OrderedFloat(t.points_for))));

        if let Some(name) = champion.as_deref() {
            if !ranked.iter().any(|(team, _)| *team == name) {
                warn!(season, champion = name, "champion has no regular-season games");
            }
        }

        let league_per_game = baseline.mean();
        let rows: Vec<StandingsRow> = ranked
            .into_iter()
            .enumerate()
            .map(|(i, (team, t))| {
                let games_played = f64::from(t.games);
                let per_game = t.points_for / games_played;
                let losses = t.games - t.wins;
                StandingsRow {
                    season,
                    team: team.to_owned(),
                    wins: t.wins,
                    losses,
                    record: format!("{}-{}", t.wins, losses),
                    points_for: round_points(t.points_for),
                    points_against: round_points(t.points_against),
                    points_for_per_game: round_points(per_game),
                    points_for_per_game_index: (per_game / league_per_game * 100.0).round() as i64,
                    avg_margin: round_points((t.points_for - t.points_against) / games_played),
                    luck_score: t.luck_score,
                    rank: i + 1,
                    is_champion: champion.as_deref() == Some(team),
                }
            })
            .collect();

        debug!(
            season,
            ?through_week,
            teams = rows.len(),
            games = selected.len(),
            mean = baseline.mean(),
            std = baseline.std(),
            "computed standings"
        );
        Ok(rows)
    }
}

/// Ranks `season` with the default league configuration.
pub fn compute_standings(
    games: &[GameRecord],
    season: u32,
    through_week: Option<u32>,
) -> ReportResult<Vec<StandingsRow>> {
    StandingsAggregator::new(&LeagueConfig::default()).compute(games, season, through_week)
}

/// Winner of the last recorded week, once the season reached its title game.
///
/// Playoff games are included here. Returns `None` for seasons still in
/// progress and when the final week has no single winner.
#[must_use]
pub fn season_champion(
    games: &[GameRecord],
    season: u32,
    schedule: SeasonSchedule,
) -> Option<String> {
    let max_week = games
        .iter()
        .filter(|game| game.season == season)
        .map(|game| game.week)
        .max()?;
    if !schedule.is_complete(max_week) {
        return None;
    }

    let winners: SmallVec<[&GameRecord; 2]> = games
        .iter()
        .filter(|game| game.season == season && game.week == max_week && game.won)
        .collect();
    match winners.as_slice() {
        [winner] => Some(winner.team.clone()),
        _ => {
            warn!(
                season,
                week = max_week,
                winners = winners.len(),
                "final week has no single winner; no champion flagged"
            );
            None
        }
    }
}
