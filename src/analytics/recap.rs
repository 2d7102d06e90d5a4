use serde::{Deserialize, Serialize};

use crate::core::types::GameRecord;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreLine {
    pub team: String,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultLine {
    pub team: String,
    pub score: f64,
    pub opp_score: f64,
}

impl From<&GameRecord> for ResultLine {
    fn from(game: &GameRecord) -> Self {
        Self {
            team: game.team.clone(),
            score: game.points_scored,
            opp_score: game.points_allowed,
        }
    }
}

/// Headline numbers of a single week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyRecap {
    pub season: u32,
    pub week: u32,
    pub highest_scorer: ScoreLine,
    pub lowest_scorer: ScoreLine,
    pub largest_blowout: ResultLine,
    /// `None` when every game of the week was lost by both sides, which only
    /// happens with malformed input.
    pub closest_game: Option<ResultLine>,
}

/// First record that `better` prefers over every earlier one.
fn pick<'a>(
    games: &[&'a GameRecord],
    better: impl Fn(&GameRecord, &GameRecord) -> bool,
) -> Option<&'a GameRecord> {
    games
        .iter()
        .copied()
        .reduce(|best, game| if better(game, best) { game } else { best })
}

/// Summarizes one week; returns `None` when no games were played in it.
///
/// Ties keep the record that appears first in the input.
#[must_use]
pub fn weekly_recap(games: &[GameRecord], season: u32, week: u32) -> Option<WeeklyRecap> {
    let week_games: Vec<&GameRecord> = games
        .iter()
        .filter(|game| game.season == season && game.week == week)
        .collect();

    let highest = pick(&week_games, |a, b| a.points_scored > b.points_scored)?;
    let lowest = pick(&week_games, |a, b| a.points_scored < b.points_scored)?;
    let blowout = pick(&week_games, |a, b| a.margin > b.margin)?;

    let non_losing: Vec<&GameRecord> = week_games
        .iter()
        .copied()
        .filter(|game| game.margin >= 0.0)
        .collect();
    let closest = pick(&non_losing, |a, b| a.margin < b.margin);

    Some(WeeklyRecap {
        season,
        week,
        highest_scorer: ScoreLine {
            team: highest.team.clone(),
            score: highest.points_scored,
        },
        lowest_scorer: ScoreLine {
            team: lowest.team.clone(),
            score: lowest.points_scored,
        },
        largest_blowout: ResultLine::from(blowout),
        closest_game: closest.map(ResultLine::from),
    })
}
