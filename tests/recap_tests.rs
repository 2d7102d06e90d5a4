use luck_report::analytics::{ResultLine, ScoreLine, weekly_recap};
use luck_report::core::{GameRecord, MatchupRecord};

fn game(week: u32, home: &str, home_score: f64, away: &str, away_score: f64) -> [GameRecord; 2] {
    MatchupRecord {
        season: 2022,
        week,
        is_playoff: false,
        home_team: home.to_owned(),
        home_score,
        away_team: away.to_owned(),
        away_score,
    }
    .to_game_records()
}

fn week_one() -> Vec<GameRecord> {
    [
        game(1, "Sharks", 132.5, "Owls", 98.0),
        game(1, "Foxes", 91.0, "Bears", 92.4),
        game(2, "Sharks", 80.0, "Bears", 150.0),
    ]
    .into_iter()
    .flatten()
    .collect()
}

#[test]
fn recap_picks_week_headlines() {
    let recap = weekly_recap(&week_one(), 2022, 1).expect("week 1 recap");

    assert_eq!(
        recap.highest_scorer,
        ScoreLine {
            team: "Sharks".to_owned(),
            score: 132.5,
        }
    );
    assert_eq!(
        recap.lowest_scorer,
        ScoreLine {
            team: "Foxes".to_owned(),
            score: 91.0,
        }
    );
    assert_eq!(
        recap.largest_blowout,
        ResultLine {
            team: "Sharks".to_owned(),
            score: 132.5,
            opp_score: 98.0,
        }
    );
    let closest = recap.closest_game.expect("closest game");
    assert_eq!(closest.team, "Bears");
    assert_eq!(closest.opp_score, 91.0);
}

#[test]
fn recap_only_reads_the_requested_week() {
    let recap = weekly_recap(&week_one(), 2022, 2).expect("week 2 recap");
    assert_eq!(recap.highest_scorer.team, "Bears");
    assert_eq!(recap.lowest_scorer.team, "Sharks");
    assert_eq!(recap.largest_blowout.team, "Bears");
}

#[test]
fn empty_week_has_no_recap() {
    assert_eq!(weekly_recap(&week_one(), 2022, 9), None);
    assert_eq!(weekly_recap(&week_one(), 2021, 1), None);
}

#[test]
fn ties_keep_the_first_record() {
    let games: Vec<GameRecord> = [
        game(3, "Owls", 100.0, "Foxes", 100.0),
        game(3, "Sharks", 110.0, "Bears", 90.0),
    ]
    .into_iter()
    .flatten()
    .collect();

    let recap = weekly_recap(&games, 2022, 3).expect("recap");
    let closest = recap.closest_game.expect("closest game");
    assert_eq!(closest.team, "Owls");
    assert_eq!(closest.score, closest.opp_score);
}
