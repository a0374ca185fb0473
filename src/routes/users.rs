// src/routes/users.rs
use actix_web::{get, web, HttpResponse, Result};
use sqlx::PgPool;

use crate::handlers::{privacy_handler, user_handler};

/// One user's predictions grouped by round, with total points
#[get("/user/{userid}")]
async fn user_detail(path: web::Path<String>, pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let userid = path.into_inner();
    Ok(user_handler::get_user_detail(userid, pool).await?)
}

/// Mandatory privacy policy
#[get("/privacy/")]
async fn privacy() -> HttpResponse {
    privacy_handler::privacy_policy().await
}
