// src/models/ranking.rs
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::fixture::Fixture;

/// Per-user summed final points, the input to live ranking. Rows arrive
/// sorted descending by `points`; that order is the pre-live ranking.
#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct UserTotal {
    pub user_id: Uuid,
    pub userid: String,
    pub display_name: String,
    pub points: i64,
}

/// One row of the live ranking table.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct RankingEntry {
    pub user_id: Uuid,
    pub userid: String,
    pub display_name: String,
    /// Final points plus live provisional points.
    pub points: i64,
    /// Live position minus pre-live position.
    pub change: i64,
    /// Live provisional points alone.
    pub points_live: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LiveRankingsResponse {
    pub live_fixtures: Vec<Fixture>,
    pub rankings: Vec<RankingEntry>,
}
