use chrono::{DateTime, Duration, Utc};

use crate::config::settings::LeagueSettings;
use crate::models::fixture::{Fixture, RoundDeadline, RoundFixtures};

/// Round classification over the season calendar. Stateless; every method is
/// a pure function of the fixture list and the supplied clock reading.
#[derive(Debug, Clone, Copy)]
pub struct LeagueCalendar {
    rounds_total: u32,
    fixtures_per_round: usize,
    completion_grace: Duration,
}

impl LeagueCalendar {
    pub fn new(settings: &LeagueSettings) -> Self {
        Self {
            rounds_total: settings.rounds_total,
            fixtures_per_round: settings.fixtures_per_round as usize,
            completion_grace: Duration::hours(settings.completion_grace_hours),
        }
    }

    pub fn rounds_total(&self) -> u32 {
        self.rounds_total
    }

    /// Highest round whose full fixture count has kicked off long enough ago
    /// to plausibly be finished (scheduled time plus grace window). The
    /// check ignores actual match status. Returns 0 when no round
    /// qualifies.
    pub fn last_completed_round(&self, fixtures: &[Fixture], now: DateTime<Utc>) -> u32 {
        let horizon = now + self.completion_grace;
        let mut last = 0;
        for round in 1..=self.rounds_total {
            let kicked_off = fixtures
                .iter()
                .filter(|f| f.round == round as i32 && f.match_time <= horizon)
                .count();
            if kicked_off == self.fixtures_per_round {
                last = round;
            }
        }
        last
    }

    /// The round currently being predicted: one past the last completed
    /// round. With the whole season complete this runs one past the final
    /// round.
    pub fn current_round(&self, fixtures: &[Fixture], now: DateTime<Utc>) -> u32 {
        self.last_completed_round(fixtures, now) + 1
    }

    /// Per-round prediction deadline: the earliest kickoff among the round's
    /// fixtures, flagged once it lies in the past. A round without fixtures
    /// has no deadline.
    pub fn round_deadlines(&self, fixtures: &[Fixture], now: DateTime<Utc>) -> Vec<RoundDeadline> {
        (1..=self.rounds_total)
            .map(|round| {
                let deadline = fixtures
                    .iter()
                    .filter(|f| f.round == round as i32)
                    .map(|f| f.match_time)
                    .min();
                RoundDeadline {
                    round,
                    deadline,
                    passed: deadline.map(|d| d < now).unwrap_or(false),
                }
            })
            .collect()
    }

    /// Split a round-ordered fixture list into per-round groups covering
    /// every round of the season, empty rounds included.
    pub fn group_by_round(&self, fixtures: &[Fixture]) -> Vec<RoundFixtures> {
        (1..=self.rounds_total)
            .map(|round| RoundFixtures {
                round,
                fixtures: fixtures
                    .iter()
                    .filter(|f| f.round == round as i32)
                    .cloned()
                    .collect(),
            })
            .collect()
    }
}
