// src/models/fixture.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use uuid::Uuid;

/// One scheduled match. Goals are NULL until the score-update flow touches
/// the fixture.
#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct Fixture {
    pub id: Uuid,
    pub round: i32,
    pub home_team: String,
    pub away_team: String,
    pub match_time: DateTime<Utc>,
    pub status: MatchStatus,
    pub home_goals: Option<i32>,
    pub away_goals: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Match state, stored as a single-letter code.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "varchar")]
pub enum MatchStatus {
    #[sqlx(rename = "P")]
    #[serde(rename = "P")]
    Pending,
    #[sqlx(rename = "L")]
    #[serde(rename = "L")]
    Live,
    #[sqlx(rename = "F")]
    #[serde(rename = "F")]
    Finished,
}

impl MatchStatus {
    pub fn code(&self) -> &'static str {
        match self {
            MatchStatus::Pending => "P",
            MatchStatus::Live => "L",
            MatchStatus::Finished => "F",
        }
    }

    pub fn parse_code(code: &str) -> Option<Self> {
        match code {
            "P" => Some(MatchStatus::Pending),
            "L" => Some(MatchStatus::Live),
            "F" => Some(MatchStatus::Finished),
            _ => None,
        }
    }
}

impl From<String> for MatchStatus {
    fn from(s: String) -> Self {
        MatchStatus::parse_code(s.trim()).unwrap_or(MatchStatus::Pending)
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

// Request/Response DTOs

#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateScoresRequest {
    pub round: i32,
    pub fixtures: Vec<FixtureScoreUpdate>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FixtureScoreUpdate {
    pub fixture_id: Uuid,
    pub home_goals: i32,
    pub away_goals: i32,
    pub status: MatchStatus,
}

/// Fixtures of one round, in kickoff order.
#[derive(Debug, Serialize, Deserialize)]
pub struct RoundFixtures {
    pub round: u32,
    pub fixtures: Vec<Fixture>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FixtureListResponse {
    pub rounds: Vec<RoundFixtures>,
    pub current_round: u32,
}

/// Earliest kickoff of a round; predictions are implicitly due before it.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct RoundDeadline {
    pub round: u32,
    pub deadline: Option<DateTime<Utc>>,
    pub passed: bool,
}
