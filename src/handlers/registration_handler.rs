use actix_web::{web, HttpResponse};
use secrecy::ExposeSecret;
use sqlx::PgPool;

use crate::db::user_queries;
use crate::models::common::ApiResponse;
use crate::models::user::RegistrationRequest;
use crate::utils::password::hash_password;

#[tracing::instrument(
    name = "Adding a new user",
    // Don't show the password
    skip(user_form, pool),
    fields(
        userid = %user_form.userid,
        user = %user_form
    )
)]
pub async fn register_user(
    user_form: web::Json<RegistrationRequest>,
    pool: web::Data<PgPool>,
) -> HttpResponse {
    match user_queries::find_by_userid(pool.get_ref(), &user_form.userid).await {
        Ok(Some(_)) => {
            return HttpResponse::BadRequest()
                .json(ApiResponse::<()>::error("Userid already taken"));
        }
        Ok(None) => {}
        Err(e) => {
            tracing::error!("Database error occurred: {:?}", e);
            return HttpResponse::InternalServerError().finish();
        }
    }

    let password_hash = hash_password(user_form.password.expose_secret());
    match user_queries::insert_user(
        pool.get_ref(),
        &user_form.userid,
        &user_form.display_name,
        &password_hash,
    )
    .await
    {
        Ok(_) => HttpResponse::Ok().json(ApiResponse::<()>::success_message("User created")),
        Err(_) => HttpResponse::InternalServerError().finish(),
    }
}
