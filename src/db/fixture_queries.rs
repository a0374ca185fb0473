use sqlx::PgPool;
use uuid::Uuid;

use crate::models::fixture::{Fixture, FixtureScoreUpdate, MatchStatus};

/// All fixtures of the season, round by round in kickoff order.
pub async fn get_all_fixtures(pool: &PgPool) -> Result<Vec<Fixture>, sqlx::Error> {
    sqlx::query_as::<_, Fixture>(
        r#"
        SELECT id, round, home_team, away_team, match_time, status,
               home_goals, away_goals, created_at, updated_at
        FROM fixtures
        ORDER BY round ASC, match_time ASC
        "#,
    )
    .fetch_all(pool)
    .await
}

/// Fixtures of one round in kickoff order.
pub async fn get_fixtures_for_round(
    pool: &PgPool,
    round: i32,
) -> Result<Vec<Fixture>, sqlx::Error> {
    sqlx::query_as::<_, Fixture>(
        r#"
        SELECT id, round, home_team, away_team, match_time, status,
               home_goals, away_goals, created_at, updated_at
        FROM fixtures
        WHERE round = $1
        ORDER BY match_time ASC
        "#,
    )
    .bind(round)
    .fetch_all(pool)
    .await
}

/// Fixtures currently in progress.
pub async fn get_live_fixtures(pool: &PgPool) -> Result<Vec<Fixture>, sqlx::Error> {
    sqlx::query_as::<_, Fixture>(
        r#"
        SELECT id, round, home_team, away_team, match_time, status,
               home_goals, away_goals, created_at, updated_at
        FROM fixtures
        WHERE status = $1
        ORDER BY match_time ASC
        "#,
    )
    .bind(MatchStatus::Live)
    .fetch_all(pool)
    .await
}

pub async fn get_fixture(pool: &PgPool, fixture_id: Uuid) -> Result<Option<Fixture>, sqlx::Error> {
    sqlx::query_as::<_, Fixture>(
        r#"
        SELECT id, round, home_team, away_team, match_time, status,
               home_goals, away_goals, created_at, updated_at
        FROM fixtures
        WHERE id = $1
        "#,
    )
    .bind(fixture_id)
    .fetch_optional(pool)
    .await
}

/// Resolve a fixture from its team-name pair. With a double round-robin
/// schedule this pair is ambiguous; the earliest fixture wins.
pub async fn find_by_teams(
    pool: &PgPool,
    home_team: &str,
    away_team: &str,
) -> Result<Option<Fixture>, sqlx::Error> {
    sqlx::query_as::<_, Fixture>(
        r#"
        SELECT id, round, home_team, away_team, match_time, status,
               home_goals, away_goals, created_at, updated_at
        FROM fixtures
        WHERE home_team = $1 AND away_team = $2
        ORDER BY match_time ASC
        LIMIT 1
        "#,
    )
    .bind(home_team)
    .bind(away_team)
    .fetch_optional(pool)
    .await
}

/// Apply corrected goals and status to a round's fixtures in one
/// transaction. Returns the number of fixtures touched; an update whose id
/// does not belong to the round is ignored.
pub async fn update_round_scores(
    pool: &PgPool,
    round: i32,
    updates: &[FixtureScoreUpdate],
) -> Result<u64, sqlx::Error> {
    let mut tx = pool.begin().await?;
    let mut updated = 0;

    for update in updates {
        let result = sqlx::query(
            r#"
            UPDATE fixtures
            SET home_goals = $1, away_goals = $2, status = $3, updated_at = NOW()
            WHERE id = $4 AND round = $5
            "#,
        )
        .bind(update.home_goals)
        .bind(update.away_goals)
        .bind(update.status)
        .bind(update.fixture_id)
        .bind(round)
        .execute(&mut *tx)
        .await?;
        updated += result.rows_affected();
    }

    tx.commit().await?;
    Ok(updated)
}
