use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::types::MatchupRecord;

/// Matchups of one week in input order.
#[must_use]
pub fn scoreboard(matchups: &[MatchupRecord], season: u32, week: u32) -> Vec<&MatchupRecord> {
    matchups
        .iter()
        .filter(|m| m.season == season && m.week == week)
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayoffRound {
    /// 1 for the first playoff week.
    pub round: u32,
    pub week: u32,
    pub games: Vec<MatchupRecord>,
}

/// Groups a season's playoff matchups into rounds, earliest week first.
#[must_use]
pub fn playoff_bracket(matchups: &[MatchupRecord], season: u32) -> Vec<PlayoffRound> {
    let mut by_week: BTreeMap<u32, Vec<MatchupRecord>> = BTreeMap::new();
    for matchup in matchups
        .iter()
        .filter(|m| m.season == season && m.is_playoff)
    {
        by_week.entry(matchup.week).or_default().push(matchup.clone());
    }

    let Some(&first_week) = by_week.keys().next() else {
        return Vec::new();
    };
    by_week
        .into_iter()
        .map(|(week, games)| PlayoffRound {
            round: week - first_week + 1,
            week,
            games,
        })
        .collect()
}
