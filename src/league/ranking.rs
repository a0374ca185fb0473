use std::cmp::Reverse;
use std::collections::HashMap;

use sqlx::PgPool;
use uuid::Uuid;

use crate::db::prediction_queries;
use crate::models::ranking::{RankingEntry, UserTotal};

/// Compute the live ranking.
///
/// `totals` must arrive sorted descending by final points; its order IS the
/// pre-live ranking. Each user's combined score adds the provisional points
/// of their predictions on live fixtures, the table is re-sorted by combined
/// score, and `change` records how far each user moved relative to the
/// pre-live order. The sort is stable, so users with equal combined scores
/// keep their pre-live relative order.
pub fn live_ranking(
    totals: &[UserTotal],
    live_points: &HashMap<Uuid, i64>,
) -> Vec<RankingEntry> {
    let live: Vec<i64> = totals
        .iter()
        .map(|t| live_points.get(&t.user_id).copied().unwrap_or(0))
        .collect();

    let mut order: Vec<usize> = (0..totals.len()).collect();
    order.sort_by_key(|&i| Reverse(totals[i].points + live[i]));

    order
        .iter()
        .enumerate()
        .map(|(live_rank, &past_rank)| {
            let user = &totals[past_rank];
            RankingEntry {
                user_id: user.user_id,
                userid: user.userid.clone(),
                display_name: user.display_name.clone(),
                points: user.points + live[past_rank],
                change: live_rank as i64 - past_rank as i64,
                points_live: live[past_rank],
            }
        })
        .collect()
}

/// Service assembling the live ranking from the store. Recomputes from
/// scratch on every call; rankings are always fresh.
pub struct RankingService {
    pool: PgPool,
}

impl RankingService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn live_table(&self) -> Result<Vec<RankingEntry>, sqlx::Error> {
        let totals = prediction_queries::get_user_totals(&self.pool).await?;
        let live = prediction_queries::get_live_points_by_user(&self.pool).await?;
        Ok(live_ranking(&totals, &live))
    }
}
