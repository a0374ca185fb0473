use actix_web::{web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::{fixture_queries, prediction_queries};
use crate::errors::ApiError;
use crate::models::common::ApiResponse;
use crate::models::prediction::MatchPredictionsResponse;

/// One fixture plus every prediction submitted for it.
#[tracing::instrument(name = "Get match detail", skip(pool), fields(matchid = %matchid))]
pub async fn get_match_detail(
    matchid: Uuid,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    let fixture = fixture_queries::get_fixture(pool.get_ref(), matchid)
        .await?
        .ok_or_else(|| ApiError::not_found("match"))?;
    let predictions =
        prediction_queries::get_predictions_for_fixture(pool.get_ref(), matchid).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Match detail",
        MatchPredictionsResponse {
            fixture,
            predictions,
        },
    )))
}
