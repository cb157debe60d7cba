//! Postgres pool construction and idempotent schema setup.

use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Pool, Postgres};

pub async fn create_pool(database_url: &str) -> Result<Pool<Postgres>, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(5)
        // Validate pooled connections before handing them out.
        .test_before_acquire(true)
        .connect(database_url)
        .await
}

/// Creates the three tables if they do not exist yet. Not a migration
/// system; safe to run on every startup.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS questions (
            id SERIAL PRIMARY KEY,
            text VARCHAR(200) NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT now()
        )",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS choices (
            id SERIAL PRIMARY KEY,
            question_id INTEGER NOT NULL REFERENCES questions(id) ON DELETE CASCADE,
            text VARCHAR(100) NOT NULL
        )",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS votes (
            id SERIAL PRIMARY KEY,
            choice_id INTEGER NOT NULL REFERENCES choices(id),
            voted_at TIMESTAMPTZ NOT NULL DEFAULT now()
        )",
    )
    .execute(pool)
    .await?;

    Ok(())
}
