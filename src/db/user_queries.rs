use chrono::Utc;
use secrecy::SecretString;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::models::user::User;

/// Look up a user by their external identifier.
pub async fn find_by_userid(pool: &PgPool, userid: &str) -> Result<Option<User>, sqlx::Error> {
    let row = sqlx::query(
        r#"
        SELECT id, userid, display_name, password_hash, created_at, updated_at
        FROM users
        WHERE userid = $1
        "#,
    )
    .bind(userid)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|row| User {
        id: row.get("id"),
        userid: row.get("userid"),
        display_name: row.get("display_name"),
        password_hash: SecretString::new(
            row.get::<String, _>("password_hash").into_boxed_str(),
        ),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }))
}

/// Insert a new user with an already-hashed password.
pub async fn insert_user(
    pool: &PgPool,
    userid: &str,
    display_name: &str,
    password_hash: &str,
) -> Result<Uuid, sqlx::Error> {
    let user_id = Uuid::new_v4();
    sqlx::query(
        r#"
        INSERT INTO users (id, userid, display_name, password_hash, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        "#,
    )
    .bind(user_id)
    .bind(userid)
    .bind(display_name)
    .bind(password_hash)
    .bind(Utc::now())
    .bind(Utc::now())
    .execute(pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to execute user insert query: {:?}", e);
        e
    })?;
    Ok(user_id)
}
