use actix_web::{web, HttpResponse};
use chrono::Utc;
use sqlx::PgPool;

use crate::config::settings::LeagueSettings;
use crate::db::fixture_queries;
use crate::errors::ApiError;
use crate::league::schedule::LeagueCalendar;
use crate::models::common::ApiResponse;
use crate::models::fixture::FixtureListResponse;

/// All fixtures split by round, plus which round is currently open for
/// predictions.
#[tracing::instrument(name = "List fixtures by round", skip(pool, league))]
pub async fn list_fixtures(
    pool: web::Data<PgPool>,
    league: web::Data<LeagueSettings>,
) -> Result<HttpResponse, ApiError> {
    let fixtures = fixture_queries::get_all_fixtures(pool.get_ref()).await?;
    let calendar = LeagueCalendar::new(league.get_ref());
    let now = Utc::now();

    let response = FixtureListResponse {
        current_round: calendar.current_round(&fixtures, now),
        rounds: calendar.group_by_round(&fixtures),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success("Fixtures", response)))
}

/// Per-round prediction deadlines with a passed/open flag.
#[tracing::instrument(name = "List round deadlines", skip(pool, league))]
pub async fn list_deadlines(
    pool: web::Data<PgPool>,
    league: web::Data<LeagueSettings>,
) -> Result<HttpResponse, ApiError> {
    let fixtures = fixture_queries::get_all_fixtures(pool.get_ref()).await?;
    let calendar = LeagueCalendar::new(league.get_ref());
    let deadlines = calendar.round_deadlines(&fixtures, Utc::now());

    Ok(HttpResponse::Ok().json(ApiResponse::success("Deadlines", deadlines)))
}
