use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::db::{prediction_queries, user_queries};
use crate::errors::ApiError;
use crate::models::common::ApiResponse;
use crate::models::prediction::{RoundPredictions, UserPredictionsResponse};

/// One user's predictions grouped by round, fixtures that have not kicked
/// off excluded, plus the summed final points.
#[tracing::instrument(name = "Get user predictions", skip(pool), fields(userid = %userid))]
pub async fn get_user_detail(
    userid: String,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    let user = user_queries::find_by_userid(pool.get_ref(), &userid)
        .await?
        .ok_or_else(|| ApiError::not_found("user"))?;

    let predictions = prediction_queries::get_user_predictions(pool.get_ref(), user.id).await?;
    let total_points = prediction_queries::get_user_total_points(pool.get_ref(), user.id).await?;

    // The list arrives round-ordered; every round up to the highest
    // predicted one gets a section, empty ones included
    let max_round = predictions.iter().map(|p| p.round).max().unwrap_or(0);
    let rounds: Vec<RoundPredictions> = (1..=max_round)
        .map(|round| RoundPredictions {
            round,
            predictions: predictions
                .iter()
                .filter(|p| p.round == round)
                .cloned()
                .collect(),
        })
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "User predictions",
        UserPredictionsResponse {
            userid: user.userid,
            display_name: user.display_name,
            total_points,
            rounds,
        },
    )))
}
