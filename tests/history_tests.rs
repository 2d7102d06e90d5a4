use luck_report::ReportError;
use luck_report::analytics::{
    SeasonWeeks, all_season_standings, compute_standings, luck_by_season_series,
    points_scatter_series, season_champions, season_weeks, team_history,
};
use luck_report::api::{LeagueConfig, SeasonSchedule};
use luck_report::core::{GameRecord, MatchupRecord};

fn matchup(
    season: u32,
    week: u32,
    is_playoff: bool,
    home: (&str, f64),
    away: (&str, f64),
) -> MatchupRecord {
    MatchupRecord {
        season,
        week,
        is_playoff,
        home_team: home.0.to_owned(),
        home_score: home.1,
        away_team: away.0.to_owned(),
        away_score: away.1,
    }
}

/// Two short seasons: 2022 is complete with a title game, 2023 stops
/// after the regular season.
fn league() -> Vec<GameRecord> {
    let matchups = [
        matchup(2022, 1, false, ("Sharks", 120.0), ("Owls", 100.0)),
        matchup(2022, 1, false, ("Foxes", 90.0), ("Bears", 110.0)),
        matchup(2022, 2, false, ("Sharks", 130.0), ("Foxes", 95.0)),
        matchup(2022, 2, false, ("Owls", 105.0), ("Bears", 100.0)),
        matchup(2022, 3, true, ("Owls", 125.0), ("Sharks", 118.0)),
        matchup(2023, 1, false, ("Owls", 101.0), ("Bears", 99.0)),
        matchup(2023, 1, false, ("Foxes", 140.0), ("Sharks", 97.0)),
        matchup(2023, 2, false, ("Foxes", 111.0), ("Owls", 112.0)),
        matchup(2023, 2, false, ("Bears", 88.0), ("Sharks", 93.0)),
    ];
    matchups.iter().flat_map(|m| m.to_game_records()).collect()
}

fn config() -> LeagueConfig {
    LeagueConfig::default()
        .with_schedule(2022, SeasonSchedule::new(2, 1))
        .with_schedule(2023, SeasonSchedule::new(2, 1))
}

#[test]
fn season_weeks_reports_last_regular_week() {
    let weeks = season_weeks(&league());
    assert_eq!(
        weeks,
        [
            SeasonWeeks {
                season: 2022,
                regular_season_weeks: 2,
            },
            SeasonWeeks {
                season: 2023,
                regular_season_weeks: 2,
            },
        ]
    );
}

#[test]
fn all_seasons_match_single_season_tables() {
    let games = league();
    let tables = all_season_standings(&games, &LeagueConfig::default()).expect("tables");
    assert_eq!(tables.len(), 2);
    assert_eq!(
        tables[1],
        compute_standings(&games, 2023, None).expect("2023")
    );
    assert!(tables.iter().all(|rows| rows.len() == 4));
}

#[test]
fn team_history_lists_every_season_ascending() {
    let history = team_history(&league(), "Sharks", &config()).expect("history");
    let seasons: Vec<u32> = history.iter().map(|row| row.season).collect();
    assert_eq!(seasons, [2022, 2023]);
    assert_eq!(history[0].record, "2-0");
    assert_eq!(history[1].record, "1-1");
}

#[test]
fn unknown_team_is_a_lookup_error() {
    let err = team_history(&league(), "Penguins", &config()).expect_err("no such team");
    assert!(matches!(
        err,
        ReportError::Lookup { kind: "team", ref key } if key == "Penguins"
    ));
}

#[test]
fn champions_only_for_finished_seasons() {
    let champions = season_champions(&league(), &config()).expect("champions");
    assert_eq!(champions.len(), 1);
    assert_eq!(champions[0].season, 2022);
    assert_eq!(champions[0].team, "Owls");
}

#[test]
fn chart_series_follow_row_order() {
    let history = team_history(&league(), "Owls", &config()).expect("history");
    let luck = luck_by_season_series(&history);
    assert_eq!(luck.len(), 2);
    assert_eq!(luck[0].x, 2022.0);
    assert_eq!(luck[0].y, history[0].luck_score as f64);
    assert!(luck.iter().all(|p| p.color_key == "Owls"));

    let rows = compute_standings(&league(), 2022, None).expect("2022");
    let scatter = points_scatter_series(&rows);
    for (point, row) in scatter.iter().zip(&rows) {
        assert_eq!((point.x, point.y), (row.points_for, row.points_against));
        assert_eq!(point.color_key, row.team);
    }
}
