// src/routes/fixtures.rs
use actix_web::{get, web, HttpResponse, Result};
use sqlx::PgPool;
use uuid::Uuid;

use crate::config::settings::LeagueSettings;
use crate::handlers::{fixtures_handler, match_handler};

/// All fixtures split by round, with the current round
#[get("/fixtures/")]
async fn fixtures(
    pool: web::Data<PgPool>,
    league: web::Data<LeagueSettings>,
) -> Result<HttpResponse> {
    Ok(fixtures_handler::list_fixtures(pool, league).await?)
}

/// Per-round prediction deadlines
#[get("/deadlines/")]
async fn deadlines(
    pool: web::Data<PgPool>,
    league: web::Data<LeagueSettings>,
) -> Result<HttpResponse> {
    Ok(fixtures_handler::list_deadlines(pool, league).await?)
}

/// One fixture with all predictions submitted for it
#[get("/match/{matchid}")]
async fn match_detail(path: web::Path<Uuid>, pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let matchid = path.into_inner();
    Ok(match_handler::get_match_detail(matchid, pool).await?)
}
