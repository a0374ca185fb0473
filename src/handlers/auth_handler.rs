// src/handlers/auth_handler.rs
use actix_web::{web, HttpResponse};
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use secrecy::ExposeSecret;
use sqlx::PgPool;

use crate::config::jwt::JwtSettings;
use crate::db::user_queries;
use crate::middleware::auth::Claims;
use crate::models::auth::{LoginRequest, LoginResponse};
use crate::models::common::ApiResponse;
use crate::utils::password::verify_password;

#[tracing::instrument(
    name = "Login user attempt",
    skip(login_form, pool, jwt_settings),
    fields(
        userid = %login_form.userid
    )
)]
pub async fn login_user(
    login_form: web::Json<LoginRequest>,
    pool: web::Data<PgPool>,
    jwt_settings: web::Data<JwtSettings>,
) -> HttpResponse {
    let user = match user_queries::find_by_userid(pool.get_ref(), &login_form.userid).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            tracing::info!("User not found or invalid credentials");
            return HttpResponse::Unauthorized()
                .json(ApiResponse::<()>::error("Wrong username or password!"));
        }
        Err(e) => {
            tracing::error!("Database error occurred: {:?}", e);
            return HttpResponse::InternalServerError().finish();
        }
    };

    // Verify password
    if !verify_password(
        login_form.password.expose_secret(),
        user.password_hash.expose_secret(),
    ) {
        tracing::info!("Invalid password");
        return HttpResponse::Unauthorized()
            .json(ApiResponse::<()>::error("Wrong username or password!"));
    }

    // Generate JWT token
    let expiration = Utc::now()
        .checked_add_signed(Duration::hours(jwt_settings.expiration_hours))
        .expect("Valid timestamp")
        .timestamp() as usize;

    let claims = Claims {
        sub: user.id.to_string(),
        userid: user.userid,
        exp: expiration,
    };

    let token = match encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_settings.secret.expose_secret().as_bytes()),
    ) {
        Ok(t) => t,
        Err(e) => {
            tracing::error!("Error generating JWT token: {:?}", e);
            return HttpResponse::InternalServerError().finish();
        }
    };

    HttpResponse::Ok().json(LoginResponse { token })
}

/// Sessions are bearer tokens; the server only acknowledges and the client
/// discards its copy.
#[tracing::instrument(name = "Logout user", skip(claims), fields(userid = %claims.userid))]
pub async fn logout_user(claims: web::ReqData<Claims>) -> HttpResponse {
    tracing::info!("User {} logged out", claims.userid);
    HttpResponse::Ok().json(ApiResponse::<()>::success_message("Logged out."))
}
