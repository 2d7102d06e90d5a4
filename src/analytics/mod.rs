//! Season analytics: luck scoring, standings, and derived views.

pub mod baseline;
pub mod bracket;
pub mod history;
pub mod luck;
pub mod recap;
pub mod standings;

pub use baseline::SeasonBaseline;
pub use bracket::{PlayoffRound, playoff_bracket, scoreboard};
pub use history::{
    SeasonWeeks, all_season_standings, luck_by_season_series, points_scatter_series,
    season_champions, season_weeks, team_history,
};
pub use luck::{
    CLOSE_GAME_MARGIN, LuckBreakdown, close_game_luck, luck_score, opponent_luck,
    own_performance_luck,
};
pub use recap::{ResultLine, ScoreLine, WeeklyRecap, weekly_recap};
pub use standings::{StandingsAggregator, StandingsRow, compute_standings, season_champion};
