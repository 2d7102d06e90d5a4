use luck_report::api::{
    ColorMap, LeagueConfig, STANDINGS_TABLE_JSON_SCHEMA_V1, SeasonReport, SeasonSchedule,
    StandingsTableJsonContractV1, TeamReport,
};
use luck_report::core::{GameRecord, MatchupRecord};
use luck_report::{ReportError, compute_standings};

fn league() -> Vec<GameRecord> {
    let matchups = [
        ("Sharks", 120.0, "Owls", 100.0, 1, false),
        ("Foxes", 90.0, "Bears", 110.0, 1, false),
        ("Sharks", 130.0, "Foxes", 95.0, 2, false),
        ("Owls", 105.0, "Bears", 100.0, 2, false),
        ("Sharks", 99.0, "Bears", 120.5, 3, true),
    ];
    matchups
        .iter()
        .flat_map(|&(home, home_score, away, away_score, week, is_playoff)| {
            MatchupRecord {
                season: 2023,
                week,
                is_playoff,
                home_team: home.to_owned(),
                home_score,
                away_team: away.to_owned(),
                away_score,
            }
            .to_game_records()
        })
        .collect()
}

fn config() -> LeagueConfig {
    let colors: ColorMap = [
        ("Sharks", "#1f77b4"),
        ("Owls", "#ff7f0e"),
        ("Foxes", "#2ca02c"),
        ("Bears", "#d62728"),
    ]
    .into_iter()
    .collect();
    LeagueConfig::default()
        .with_colors(colors)
        .with_schedule(2023, SeasonSchedule::new(2, 1))
}

#[test]
fn season_report_bundles_table_and_chart() {
    let report = SeasonReport::build(&league(), 2023, None, &config()).expect("report");
    assert_eq!(report.standings.len(), 4);
    assert_eq!(report.champion().map(|row| row.team.as_str()), Some("Bears"));

    let chart = report.points_chart.expect("chart");
    assert!(chart.as_str().starts_with("<svg"));
    assert_eq!(chart.as_str().matches("<circle").count(), 4);
    assert!(chart.as_str().contains("Points Against"));
}

#[test]
fn season_report_for_empty_season_has_no_chart() {
    let report = SeasonReport::build(&league(), 1990, None, &config()).expect("report");
    assert!(report.standings.is_empty());
    assert!(report.points_chart.is_none());
    assert!(report.champion().is_none());
}

#[test]
fn season_report_needs_a_color_per_team() {
    let config = LeagueConfig::default();
    let err = SeasonReport::build(&league(), 2023, None, &config).expect_err("no colors");
    assert!(matches!(err, ReportError::Lookup { kind: "color", .. }));
}

#[test]
fn team_report_draws_one_bar_per_season() {
    let report = TeamReport::build(&league(), "Sharks", &config()).expect("report");
    assert_eq!(report.team, "Sharks");
    assert_eq!(report.seasons.len(), 1);
    // background plus one bar
    assert_eq!(report.luck_chart.as_str().matches("<rect").count(), 2);
    assert!(report.luck_chart.as_str().contains("Luck Score"));
}

#[test]
fn standings_contract_round_trips() {
    let rows = compute_standings(&league(), 2023, Some(2)).expect("rows");
    let payload = StandingsTableJsonContractV1::new(2023, Some(2), rows);
    let json = payload.to_json_pretty().expect("json");
    assert!(json.contains("\"schema_version\": 1"));
    assert!(json.contains("\"points_for_per_game_index\""));

    let parsed = StandingsTableJsonContractV1::from_json_compat_str(&json).expect("parse");
    assert_eq!(parsed, payload);
}

#[test]
fn standings_contract_accepts_bare_rows() {
    let rows = compute_standings(&league(), 2023, None).expect("rows");
    let json = serde_json::to_string(&rows).expect("json");

    let parsed = StandingsTableJsonContractV1::from_json_compat_str(&json).expect("parse");
    assert_eq!(parsed.schema_version, STANDINGS_TABLE_JSON_SCHEMA_V1);
    assert_eq!(parsed.season, 2023);
    assert_eq!(parsed.through_week, None);
    assert_eq!(parsed.rows, rows);
}

#[test]
fn standings_contract_rejects_future_versions() {
    let json = r#"{"schema_version": 2, "season": 2023, "rows": []}"#;
    let err = StandingsTableJsonContractV1::from_json_compat_str(json).expect_err("version 2");
    assert!(matches!(err, ReportError::Serialization(_)));
}

#[test]
fn league_config_fills_missing_fields_with_defaults() {
    let config = LeagueConfig::from_json_str(
        r##"{
            "schedules": {"2019": {"regular_season_weeks": 13, "playoff_rounds": 3}},
            "colors": {"Sharks": "#1f77b4", "Owls": "#ff7f0e"},
            "chart": {"point_radius": 7.0}
        }"##,
    )
    .expect("config");

    assert_eq!(config.schedule_for(2019).championship_week(), 16);
    assert_eq!(config.schedule_for(2020), SeasonSchedule::new(14, 3));
    assert_eq!(config.points_axis_step, 100.0);
    assert_eq!(config.luck_axis_step, 2.0);
    assert_eq!(config.chart.point_radius, 7.0);
    assert_eq!(config.chart.margin_left, 60.0);
    assert_eq!(config.colors.lookup("Owls").expect("owls"), "#ff7f0e");
    assert!(config.colors.lookup("Foxes").is_err());

    let json = config.to_json_pretty().expect("json");
    let sharks = json.find("Sharks").expect("sharks");
    let owls = json.find("Owls").expect("owls");
    assert!(sharks < owls);
    assert_eq!(LeagueConfig::from_json_str(&json).expect("reparse"), config);
}

#[test]
fn malformed_league_config_is_a_serialization_error() {
    let err = LeagueConfig::from_json_str("{\"points_axis_step\": \"wide\"}").expect_err("bad");
    assert!(matches!(err, ReportError::Serialization(_)));
}
