use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use livescore_backend::config::settings::LeagueSettings;
use livescore_backend::league::schedule::LeagueCalendar;
use livescore_backend::models::fixture::{Fixture, MatchStatus};

fn settings(rounds_total: u32, fixtures_per_round: u32) -> LeagueSettings {
    LeagueSettings {
        rounds_total,
        fixtures_per_round,
        completion_grace_hours: 2,
    }
}

fn fixture(round: i32, match_time: DateTime<Utc>) -> Fixture {
    Fixture {
        id: Uuid::new_v4(),
        round,
        home_team: format!("Home {}", round),
        away_team: format!("Away {}", round),
        match_time,
        status: MatchStatus::Pending,
        home_goals: None,
        away_goals: None,
        created_at: match_time,
        updated_at: match_time,
    }
}

fn round_of_fixtures(round: i32, count: usize, match_time: DateTime<Utc>) -> Vec<Fixture> {
    (0..count).map(|_| fixture(round, match_time)).collect()
}

#[test]
fn completed_rounds_advance_the_current_round() {
    let calendar = LeagueCalendar::new(&settings(2, 10));
    let now = Utc::now();

    let mut fixtures = round_of_fixtures(1, 10, now - Duration::days(7));
    fixtures.extend(round_of_fixtures(2, 10, now + Duration::days(7)));

    assert_eq!(calendar.last_completed_round(&fixtures, now), 1);
    assert_eq!(calendar.current_round(&fixtures, now), 2);
}

#[test]
fn completeness_is_monotone_over_rounds() {
    let calendar = LeagueCalendar::new(&settings(2, 10));
    let now = Utc::now();

    // Both rounds fully in the past: the later one wins
    let mut fixtures = round_of_fixtures(1, 10, now - Duration::days(14));
    fixtures.extend(round_of_fixtures(2, 10, now - Duration::days(7)));

    assert_eq!(calendar.last_completed_round(&fixtures, now), 2);
    assert_eq!(calendar.current_round(&fixtures, now), 3);
}

#[test]
fn no_completed_round_means_round_one() {
    let calendar = LeagueCalendar::new(&settings(2, 10));
    let now = Utc::now();

    let fixtures = round_of_fixtures(1, 10, now + Duration::days(7));
    assert_eq!(calendar.last_completed_round(&fixtures, now), 0);
    assert_eq!(calendar.current_round(&fixtures, now), 1);
}

#[test]
fn partial_round_does_not_count_as_complete() {
    let calendar = LeagueCalendar::new(&settings(1, 10));
    let now = Utc::now();

    // Nine played, one still scheduled next week
    let mut fixtures = round_of_fixtures(1, 9, now - Duration::days(3));
    fixtures.push(fixture(1, now + Duration::days(4)));

    assert_eq!(calendar.current_round(&fixtures, now), 1);
}

#[test]
fn grace_window_counts_matches_about_to_finish() {
    let calendar = LeagueCalendar::new(&settings(1, 10));
    let now = Utc::now();

    // Kickoff an hour ago: within the two-hour grace horizon
    let fixtures = round_of_fixtures(1, 10, now - Duration::hours(1));
    assert_eq!(calendar.last_completed_round(&fixtures, now), 1);

    // Kickoff three hours from now: beyond the horizon
    let fixtures = round_of_fixtures(1, 10, now + Duration::hours(3));
    assert_eq!(calendar.last_completed_round(&fixtures, now), 0);
}

#[test]
fn deadline_is_earliest_kickoff_and_flags_passed() {
    let calendar = LeagueCalendar::new(&settings(2, 2));
    let now = Utc::now();

    let past_early = now - Duration::hours(30);
    let past_late = now - Duration::hours(20);
    let future_early = now + Duration::hours(20);
    let future_late = now + Duration::hours(30);

    let fixtures = vec![
        fixture(1, past_late),
        fixture(1, past_early),
        fixture(2, future_late),
        fixture(2, future_early),
    ];

    let deadlines = calendar.round_deadlines(&fixtures, now);
    assert_eq!(deadlines.len(), 2);

    assert_eq!(deadlines[0].round, 1);
    assert_eq!(deadlines[0].deadline, Some(past_early));
    assert!(deadlines[0].passed);

    assert_eq!(deadlines[1].round, 2);
    assert_eq!(deadlines[1].deadline, Some(future_early));
    assert!(!deadlines[1].passed);
}

#[test]
fn round_without_fixtures_has_no_deadline() {
    let calendar = LeagueCalendar::new(&settings(2, 2));
    let now = Utc::now();

    let fixtures = round_of_fixtures(1, 2, now - Duration::days(1));
    let deadlines = calendar.round_deadlines(&fixtures, now);

    assert_eq!(deadlines[1].round, 2);
    assert_eq!(deadlines[1].deadline, None);
    assert!(!deadlines[1].passed);
}

#[test]
fn groups_cover_every_round_including_empty_ones() {
    let calendar = LeagueCalendar::new(&settings(3, 2));
    let now = Utc::now();

    let fixtures = round_of_fixtures(2, 2, now);
    let rounds = calendar.group_by_round(&fixtures);

    assert_eq!(rounds.len(), 3);
    assert!(rounds[0].fixtures.is_empty());
    assert_eq!(rounds[1].fixtures.len(), 2);
    assert!(rounds[2].fixtures.is_empty());
}
