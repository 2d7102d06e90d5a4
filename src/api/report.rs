use tracing::debug;

use crate::analytics::{
    StandingsAggregator, StandingsRow, luck_by_season_series, points_scatter_series,
    team_history,
};
use crate::core::{ChartKind, GameRecord};
use crate::error::ReportResult;
use crate::render::{ChartRequest, SvgFragment, render_chart_with_layout};

use super::LeagueConfig;

/// Standings plus the points-for vs points-against scatter for one season.
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonReport {
    pub season: u32,
    pub through_week: Option<u32>,
    pub standings: Vec<StandingsRow>,
    /// `None` when the selection had no games to plot.
    pub points_chart: Option<SvgFragment>,
}

impl SeasonReport {
    pub fn build(
        games: &[GameRecord],
        season: u32,
        through_week: Option<u32>,
        config: &LeagueConfig,
    ) -> ReportResult<Self> {
        let standings = StandingsAggregator::new(config).compute(games, season, through_week)?;
        let points_chart = if standings.is_empty() {
            None
        } else {
            let request = ChartRequest::new(
                points_scatter_series(&standings),
                "Points For",
                "Points Against",
                ChartKind::Scatter,
            )
            .with_steps(config.points_axis_step, config.points_axis_step);
            Some(render_chart_with_layout(&request, &config.colors, &config.chart)?)
        };

        debug!(
            season,
            ?through_week,
            teams = standings.len(),
            "built season report"
        );
        Ok(Self {
            season,
            through_week,
            standings,
            points_chart,
        })
    }

    #[must_use]
    pub fn champion(&self) -> Option<&StandingsRow> {
        self.standings.iter().find(|row| row.is_champion)
    }
}

/// A team's season-by-season summary and luck bar chart.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamReport {
    pub team: String,
    pub seasons: Vec<StandingsRow>,
    pub luck_chart: SvgFragment,
}

impl TeamReport {
    pub fn build(games: &[GameRecord], team: &str, config: &LeagueConfig) -> ReportResult<Self> {
        let seasons = team_history(games, team, config)?;
        let request = ChartRequest::new(
            luck_by_season_series(&seasons),
            "Season",
            "Luck Score",
            ChartKind::Bar,
        )
        .with_steps(1.0, config.luck_axis_step);
        let luck_chart = render_chart_with_layout(&request, &config.colors, &config.chart)?;

        Ok(Self {
            team: team.to_owned(),
            seasons,
            luck_chart,
        })
    }
}
