use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::db::fixture_queries;
use crate::errors::ApiError;
use crate::league::ranking::RankingService;
use crate::models::common::ApiResponse;
use crate::models::ranking::LiveRankingsResponse;

/// The landing view: every user ranked by final points plus provisional
/// points from fixtures currently in play.
#[tracing::instrument(name = "Get live rankings", skip(pool))]
pub async fn get_live_rankings(pool: web::Data<PgPool>) -> Result<HttpResponse, ApiError> {
    let live_fixtures = fixture_queries::get_live_fixtures(pool.get_ref()).await?;
    let rankings = RankingService::new(pool.get_ref().clone())
        .live_table()
        .await?;

    tracing::debug!(
        "Computed live ranking for {} users with {} live fixtures",
        rankings.len(),
        live_fixtures.len()
    );

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Live rankings",
        LiveRankingsResponse {
            live_fixtures,
            rankings,
        },
    )))
}
