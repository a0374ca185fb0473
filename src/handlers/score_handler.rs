use actix_web::{web, HttpResponse};
use serde_json::json;
use sqlx::PgPool;

use crate::config::settings::LeagueSettings;
use crate::db::fixture_queries;
use crate::errors::ApiError;
use crate::middleware::auth::Claims;
use crate::models::common::ApiResponse;
use crate::models::fixture::UpdateScoresRequest;

/// Fixtures of one round in kickoff order, for the score-editing flow.
#[tracing::instrument(
    name = "Get round for score update",
    skip(pool, league, claims),
    fields(round = %round, admin_user = %claims.userid)
)]
pub async fn get_round_for_update(
    round: i32,
    pool: web::Data<PgPool>,
    league: web::Data<LeagueSettings>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse, ApiError> {
    validate_round(round, league.get_ref())?;
    let fixtures = fixture_queries::get_fixtures_for_round(pool.get_ref(), round).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Round fixtures", fixtures)))
}

/// Apply corrected goals and status to a round's fixtures.
#[tracing::instrument(
    name = "Update round scores",
    skip(request, pool, league, claims),
    fields(round = %request.round, fixtures = %request.fixtures.len(), admin_user = %claims.userid)
)]
pub async fn update_scores(
    request: web::Json<UpdateScoresRequest>,
    pool: web::Data<PgPool>,
    league: web::Data<LeagueSettings>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse, ApiError> {
    validate_round(request.round, league.get_ref())?;

    let updated =
        fixture_queries::update_round_scores(pool.get_ref(), request.round, &request.fixtures)
            .await?;

    tracing::info!(
        "Updated {} fixtures in round {} by {}",
        updated,
        request.round,
        claims.userid
    );

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Changes saved.",
        "data": { "updated": updated }
    })))
}

fn validate_round(round: i32, league: &LeagueSettings) -> Result<(), ApiError> {
    if round < 1 || round > league.rounds_total as i32 {
        return Err(ApiError::Validation(format!(
            "round must be between 1 and {}",
            league.rounds_total
        )));
    }
    Ok(())
}
