use criterion::{Criterion, criterion_group, criterion_main};
use luck_report::analytics::compute_standings;
use luck_report::api::ColorMap;
use luck_report::core::{
    ChartKind, ChartSeriesPoint, GameRecord, build_path_string, compute_axis_limits, compute_ticks,
};
use luck_report::render::{ChartRequest, render_chart};
use std::hint::black_box;

fn league_games(teams: usize, weeks: u32) -> Vec<GameRecord> {
    let mut games = Vec::with_capacity(teams * weeks as usize);
    for week in 1..=weeks {
        for pair in 0..teams / 2 {
            let home = format!("team-{}", pair * 2);
            let away = format!("team-{}", pair * 2 + 1);
            let seed = (week as usize * 31 + pair * 17) % 53;
            let home_score = 80.0 + seed as f64 * 1.3;
            let away_score = 95.0 + ((seed * 7) % 41) as f64;
            games.push(GameRecord::from_scores(
                2023, week, false, home, home_score, away_score,
            ));
            games.push(GameRecord::from_scores(
                2023, week, false, away, away_score, home_score,
            ));
        }
    }
    games
}

fn bench_axis_limits_and_ticks_10k(c: &mut Criterion) {
    let series: Vec<ChartSeriesPoint> = (0..10_000)
        .map(|i| {
            let t = i as f64;
            ChartSeriesPoint::new(t * 0.1, (t * 0.01).sin() * 250.0, "series")
        })
        .collect();

    c.bench_function("axis_limits_and_ticks_10k", |b| {
        b.iter(|| {
            let limits = compute_axis_limits(black_box(&series), 50.0, 25.0, true)
                .expect("limits should succeed");
            let _ = compute_ticks(limits, 50.0, 25.0).expect("ticks should succeed");
        })
    });
}

fn bench_path_string_10k(c: &mut Criterion) {
    let xs: Vec<f64> = (0..10_000).map(|i| i as f64 * 0.37).collect();
    let ys: Vec<f64> = xs.iter().map(|x| 200.0 - x.cos() * 80.0).collect();

    c.bench_function("path_string_10k", |b| {
        b.iter(|| {
            let _ = build_path_string(black_box(&xs), black_box(&ys), false)
                .expect("path should build");
        })
    });
}

fn bench_standings_12_teams(c: &mut Criterion) {
    let games = league_games(12, 14);

    c.bench_function("standings_12_teams_14_weeks", |b| {
        b.iter(|| {
            let _ = compute_standings(black_box(&games), 2023, None)
                .expect("standings should succeed");
        })
    });
}

fn bench_scatter_svg_12_points(c: &mut Criterion) {
    let games = league_games(12, 14);
    let rows = compute_standings(&games, 2023, None).expect("standings");
    let colors: ColorMap = rows
        .iter()
        .map(|row| (row.team.clone(), "#1f77b4"))
        .collect();
    let series = rows
        .iter()
        .map(|row| ChartSeriesPoint::new(row.points_for, row.points_against, &row.team))
        .collect();
    let request = ChartRequest::new(series, "Points For", "Points Against", ChartKind::Scatter)
        .with_steps(100.0, 100.0);

    c.bench_function("scatter_svg_12_points", |b| {
        b.iter(|| {
            let _ = render_chart(black_box(&request), black_box(&colors))
                .expect("render should succeed");
        })
    });
}

criterion_group!(
    benches,
    bench_axis_limits_and_ticks_10k,
    bench_path_string_10k,
    bench_standings_12_teams,
    bench_scatter_svg_12_points
);
criterion_main!(benches);
