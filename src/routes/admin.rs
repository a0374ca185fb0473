// src/routes/admin.rs
use actix_multipart::form::MultipartForm;
use actix_web::{get, post, web, HttpResponse, Result};
use sqlx::PgPool;

use crate::config::settings::LeagueSettings;
use crate::handlers::{score_handler, upload_handler};
use crate::handlers::upload_handler::PredictionUploadForm;
use crate::middleware::auth::Claims;
use crate::models::fixture::UpdateScoresRequest;

/// Fixtures of one round, for the score-editing flow
#[get("/{round}")]
async fn round_for_update(
    path: web::Path<i32>,
    pool: web::Data<PgPool>,
    league: web::Data<LeagueSettings>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let round = path.into_inner();
    Ok(score_handler::get_round_for_update(round, pool, league, claims).await?)
}

/// Submit corrected goals and status per fixture
#[post("/")]
async fn save_scores(
    request: web::Json<UpdateScoresRequest>,
    pool: web::Data<PgPool>,
    league: web::Data<LeagueSettings>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    Ok(score_handler::update_scores(request, pool, league, claims).await?)
}

/// Upload a zipped prediction sheet
#[post("/")]
async fn upload_predictions(
    form: MultipartForm<PredictionUploadForm>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    Ok(upload_handler::upload_predictions(form, pool, claims).await?)
}
