use std::fs;
use std::path::PathBuf;

use luck_report::analytics::weekly_recap;
use luck_report::api::{LeagueConfig, SeasonReport, StandingsTableJsonContractV1, TeamReport};
use luck_report::core::GameRecord;
use luck_report::telemetry::init_default_tracing;

const USAGE: &str = "usage: season_report <standings|chart|recap|team> --games <path> [--season <year>] [--week <n>] [--team <name>] [--config <path>]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CommandKind {
    Standings,
    Chart,
    Recap,
    Team,
}

#[derive(Debug)]
struct CliArgs {
    command: CommandKind,
    games: PathBuf,
    config: Option<PathBuf>,
    season: Option<u32>,
    week: Option<u32>,
    team: Option<String>,
}

fn main() {
    let _ = init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;

    let raw = fs::read_to_string(&args.games)
        .map_err(|err| format!("failed to read `{}`: {err}", args.games.display()))?;
    let games: Vec<GameRecord> =
        serde_json::from_str(&raw).map_err(|err| format!("invalid games json: {err}"))?;
    let config = match &args.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read `{}`: {err}", path.display()))?;
            LeagueConfig::from_json_str(&raw).map_err(|err| err.to_string())?
        }
        None => LeagueConfig::default(),
    };

    match args.command {
        CommandKind::Standings => {
            let season = require(args.season, "--season")?;
            let report = SeasonReport::build(&games, season, args.week, &config)
                .map_err(|err| err.to_string())?;
            let payload = StandingsTableJsonContractV1::new(season, args.week, report.standings);
            println!("{}", payload.to_json_pretty().map_err(|err| err.to_string())?);
        }
        CommandKind::Chart => {
            let season = require(args.season, "--season")?;
            let report = SeasonReport::build(&games, season, args.week, &config)
                .map_err(|err| err.to_string())?;
            let chart = report
                .points_chart
                .ok_or_else(|| format!("no regular-season games for {season}"))?;
            println!("{chart}");
        }
        CommandKind::Recap => {
            let season = require(args.season, "--season")?;
            let week = require(args.week, "--week")?;
            let recap = weekly_recap(&games, season, week)
                .ok_or_else(|| format!("no games in {season} week {week}"))?;
            let payload = serde_json::to_string_pretty(&recap)
                .map_err(|err| format!("failed to serialize json: {err}"))?;
            println!("{payload}");
        }
        CommandKind::Team => {
            let team = args.team.ok_or_else(|| "missing --team".to_owned())?;
            let report =
                TeamReport::build(&games, &team, &config).map_err(|err| err.to_string())?;
            println!("{}", report.luck_chart);
        }
    }
    Ok(())
}

fn require<T>(value: Option<T>, flag: &str) -> Result<T, String> {
    value.ok_or_else(|| format!("missing {flag}"))
}

fn parse_number(flag: &str, value: Option<String>) -> Result<u32, String> {
    let value = value.ok_or_else(|| format!("missing value for {flag}"))?;
    value
        .parse()
        .map_err(|err| format!("invalid value `{value}` for {flag}: {err}"))
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let command = match args.next().as_deref() {
        Some("standings") => CommandKind::Standings,
        Some("chart") => CommandKind::Chart,
        Some("recap") => CommandKind::Recap,
        Some("team") => CommandKind::Team,
        _ => return Err(USAGE.to_owned()),
    };

    let mut games = None::<PathBuf>;
    let mut config = None::<PathBuf>;
    let mut season = None;
    let mut week = None;
    let mut team = None;

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--games" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --games".to_owned())?;
                games = Some(PathBuf::from(value));
            }
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --config".to_owned())?;
                config = Some(PathBuf::from(value));
            }
            "--season" => season = Some(parse_number("--season", args.next())?),
            "--week" => week = Some(parse_number("--week", args.next())?),
            "--team" => {
                team = Some(
                    args.next()
                        .ok_or_else(|| "missing value for --team".to_owned())?,
                );
            }
            "--help" | "-h" => return Err(USAGE.to_owned()),
            _ => return Err(format!("unknown argument `{flag}`")),
        }
    }

    let games = games.ok_or_else(|| "missing --games".to_owned())?;
    Ok(CliArgs {
        command,
        games,
        config,
        season,
        week,
        team,
    })
}
