// src/models/prediction.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A submitted score prediction. `points` and `live_points` are written by
/// the external scoring rule, never computed in this layer.
#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct Prediction {
    pub id: Uuid,
    pub user_id: Uuid,
    pub fixture_id: Uuid,
    pub home_goals: i32,
    pub away_goals: i32,
    pub points: i32,
    pub live_points: i32,
    pub created_at: DateTime<Utc>,
}

/// Prediction joined with the predicting user, for the match detail view.
#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct PredictionWithUser {
    pub id: Uuid,
    pub userid: String,
    pub display_name: String,
    pub home_goals: i32,
    pub away_goals: i32,
    pub points: i32,
    pub live_points: i32,
}

/// Prediction joined with its fixture, for the per-user view.
#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct PredictionWithFixture {
    pub id: Uuid,
    pub fixture_id: Uuid,
    pub round: i32,
    pub home_team: String,
    pub away_team: String,
    pub match_time: DateTime<Utc>,
    pub fixture_home_goals: Option<i32>,
    pub fixture_away_goals: Option<i32>,
    pub home_goals: i32,
    pub away_goals: i32,
    pub points: i32,
    pub live_points: i32,
}

/// One round's worth of a user's predictions.
#[derive(Debug, Serialize, Deserialize)]
pub struct RoundPredictions {
    pub round: i32,
    pub predictions: Vec<PredictionWithFixture>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MatchPredictionsResponse {
    pub fixture: crate::models::fixture::Fixture,
    pub predictions: Vec<PredictionWithUser>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UserPredictionsResponse {
    pub userid: String,
    pub display_name: String,
    pub total_points: i64,
    pub rounds: Vec<RoundPredictions>,
}
