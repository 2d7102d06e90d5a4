//! Per-game luck scoring.
//!
//! A game's luck score adds three integer parts:
//! - opponent luck: facing an opponent who scored far below (or above) the
//!   league mean
//! - own-performance luck: winning on a low score, or losing on a high one
//! - close-game luck: +1 / -1 for results decided by fewer than 3 points
//!
//! Every part is floored explicitly, so season totals stay whole numbers.

use serde::{Deserialize, Serialize};

use super::baseline::SeasonBaseline;

/// Games decided by less than this many points count as close.
pub const CLOSE_GAME_MARGIN: f64 = 3.0;

fn steps_from_mean(score: f64, baseline: SeasonBaseline) -> f64 {
    ((baseline.mean() - score).abs() / baseline.std()).floor()
}

/// Normalized half-mean index: 1 for scores around the mean, 0 once the
/// argument drops below `-mean`, 2 once it reaches `3 * mean`.
fn half_mean_index(value: f64, baseline: SeasonBaseline) -> f64 {
    let mean = baseline.mean();
    ((mean + value) / (2.0 * mean)).floor()
}

/// Rewards a weak opponent, penalizes a strong one.
#[must_use]
pub fn opponent_luck(opp_score: f64, baseline: SeasonBaseline) -> i32 {
    let diff = baseline.mean() - opp_score;
    let sign = if diff > 0.0 {
        1.0
    } else if diff < 0.0 {
        -1.0
    } else {
        0.0
    };
    (sign * steps_from_mean(opp_score, baseline)) as i32
}

/// Rewards winning on a low score and penalizes losing on a high score.
///
/// A tie takes the losing branch.
#[must_use]
pub fn own_performance_luck(your_score: f64, opp_score: f64, baseline: SeasonBaseline) -> i32 {
    let steps = steps_from_mean(your_score, baseline);
    let value = if your_score > opp_score {
        steps * half_mean_index(2.0 * baseline.mean() - your_score, baseline)
    } else {
        -steps * half_mean_index(your_score, baseline)
    };
    value as i32
}

#[must_use]
pub fn close_game_luck(your_score: f64, opp_score: f64) -> i32 {
    if (your_score - opp_score).abs() >= CLOSE_GAME_MARGIN {
        return 0;
    }
    if your_score > opp_score {
        1
    } else if your_score < opp_score {
        -1
    } else {
        0
    }
}

/// Total luck for one game.
#[must_use]
pub fn luck_score(your_score: f64, opp_score: f64, baseline: SeasonBaseline) -> i32 {
    LuckBreakdown::for_game(your_score, opp_score, baseline).total()
}

/// The three luck parts of one game, kept apart for display and testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LuckBreakdown {
    pub opponent: i32,
    pub own_performance: i32,
    pub close_game: i32,
}

impl LuckBreakdown {
    #[must_use]
    pub fn for_game(your_score: f64, opp_score: f64, baseline: SeasonBaseline) -> Self {
        Self {
            opponent: opponent_luck(opp_score, baseline),
            own_performance: own_performance_luck(your_score, opp_score, baseline),
            close_game: close_game_luck(your_score, opp_score),
        }
    }

    #[must_use]
    pub fn total(self) -> i32 {
        self.opponent + self.own_performance + self.close_game
    }
}
