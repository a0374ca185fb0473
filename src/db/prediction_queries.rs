use std::collections::HashMap;

use sqlx::{PgPool, Postgres, Row, Transaction};
use uuid::Uuid;

use crate::models::fixture::MatchStatus;
use crate::models::prediction::{PredictionWithFixture, PredictionWithUser};
use crate::models::ranking::UserTotal;

/// Summed final points per user, sorted descending. Users without a single
/// prediction sum to zero and still appear. The secondary sort keeps tie
/// order deterministic.
pub async fn get_user_totals(pool: &PgPool) -> Result<Vec<UserTotal>, sqlx::Error> {
    sqlx::query_as::<_, UserTotal>(
        r#"
        SELECT u.id AS user_id, u.userid, u.display_name,
               COALESCE(SUM(p.points), 0) AS points
        FROM users u
        LEFT JOIN predictions p ON p.user_id = u.id
        GROUP BY u.id, u.userid, u.display_name
        ORDER BY points DESC, u.userid ASC
        "#,
    )
    .fetch_all(pool)
    .await
}

/// Summed provisional points per user over predictions whose fixture is
/// live. Users with no live prediction are absent from the map.
pub async fn get_live_points_by_user(
    pool: &PgPool,
) -> Result<HashMap<Uuid, i64>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT p.user_id, COALESCE(SUM(p.live_points), 0) AS live_points
        FROM predictions p
        INNER JOIN fixtures f ON f.id = p.fixture_id
        WHERE f.status = $1
        GROUP BY p.user_id
        "#,
    )
    .bind(MatchStatus::Live)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|row| (row.get("user_id"), row.get("live_points")))
        .collect())
}

/// All predictions submitted for one fixture, with the predicting users.
pub async fn get_predictions_for_fixture(
    pool: &PgPool,
    fixture_id: Uuid,
) -> Result<Vec<PredictionWithUser>, sqlx::Error> {
    sqlx::query_as::<_, PredictionWithUser>(
        r#"
        SELECT p.id, u.userid, u.display_name,
               p.home_goals, p.away_goals, p.points, p.live_points
        FROM predictions p
        INNER JOIN users u ON u.id = p.user_id
        WHERE p.fixture_id = $1
        ORDER BY u.userid ASC
        "#,
    )
    .bind(fixture_id)
    .fetch_all(pool)
    .await
}

/// One user's predictions joined with their fixtures, skipping fixtures
/// that have not kicked off yet.
pub async fn get_user_predictions(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Vec<PredictionWithFixture>, sqlx::Error> {
    sqlx::query_as::<_, PredictionWithFixture>(
        r#"
        SELECT p.id, p.fixture_id, f.round, f.home_team, f.away_team, f.match_time,
               f.home_goals AS fixture_home_goals, f.away_goals AS fixture_away_goals,
               p.home_goals, p.away_goals, p.points, p.live_points
        FROM predictions p
        INNER JOIN fixtures f ON f.id = p.fixture_id
        WHERE p.user_id = $1 AND f.status <> $2
        ORDER BY f.round ASC, f.match_time ASC
        "#,
    )
    .bind(user_id)
    .bind(MatchStatus::Pending)
    .fetch_all(pool)
    .await
}

/// Summed final points of one user.
pub async fn get_user_total_points(pool: &PgPool, user_id: Uuid) -> Result<i64, sqlx::Error> {
    let row = sqlx::query(
        r#"
        SELECT COALESCE(SUM(points), 0) AS total
        FROM predictions
        WHERE user_id = $1
        "#,
    )
    .bind(user_id)
    .fetch_one(pool)
    .await?;
    Ok(row.get("total"))
}

/// Insert a prediction keyed on the full (user, fixture, goals) tuple.
/// Returns true when a row was created, false when the identical prediction
/// already existed.
pub async fn insert_prediction_if_absent(
    tx: &mut Transaction<'_, Postgres>,
    user_id: Uuid,
    fixture_id: Uuid,
    home_goals: i32,
    away_goals: i32,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        INSERT INTO predictions (user_id, fixture_id, home_goals, away_goals)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (user_id, fixture_id, home_goals, away_goals) DO NOTHING
        "#,
    )
    .bind(user_id)
    .bind(fixture_id)
    .bind(home_goals)
    .bind(away_goals)
    .execute(&mut **tx)
    .await?;
    Ok(result.rows_affected() == 1)
}
