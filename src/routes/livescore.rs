// src/routes/livescore.rs
use actix_web::{get, web, HttpResponse, Result};
use sqlx::PgPool;

use crate::handlers::livescore_handler;

/// Live ranking of all users
#[get("/")]
async fn live_rankings(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    Ok(livescore_handler::get_live_rankings(pool).await?)
}
