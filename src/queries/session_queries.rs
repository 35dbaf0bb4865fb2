use chrono::{Duration, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::Result, models::Session, utils::cookies::SESSION_TTL_SECONDS};

pub async fn create_session(pool: &PgPool, user_id: Uuid, token: &str) -> Result<Session> {
    let expires_at = Utc::now() + Duration::seconds(SESSION_TTL_SECONDS);

    let session = sqlx::query_as::<_, Session>(
        "INSERT INTO sessions (user_id, token, expires_at)
         VALUES ($1, $2, $3)
         RETURNING *",
    )
    .bind(user_id)
    .bind(token)
    .bind(expires_at)
    .fetch_one(pool)
    .await?;

    Ok(session)
}

pub async fn find_valid_session(pool: &PgPool, token: &str) -> Result<Option<Session>> {
    let session = sqlx::query_as::<_, Session>(
        "SELECT * FROM sessions WHERE token = $1 AND expires_at > NOW()",
    )
    .bind(token)
    .fetch_optional(pool)
    .await?;

    Ok(session)
}

pub async fn delete_session(pool: &PgPool, token: &str) -> Result<()> {
    sqlx::query("DELETE FROM sessions WHERE token = $1")
        .bind(token)
        .execute(pool)
        .await?;

    Ok(())
}
