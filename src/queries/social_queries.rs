use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::Result,
    models::{Social, SocialRequest},
};

pub async fn get_all(pool: &PgPool) -> Result<Vec<Social>> {
    let socials = sqlx::query_as::<_, Social>("SELECT * FROM socials ORDER BY created_at")
        .fetch_all(pool)
        .await?;

    Ok(socials)
}

pub async fn create_social(pool: &PgPool, payload: &SocialRequest) -> Result<Social> {
    let social = sqlx::query_as::<_, Social>(
        "INSERT INTO socials (name, url) VALUES ($1, $2) RETURNING *",
    )
    .bind(payload.name.to_uppercase())
    .bind(&payload.url)
    .fetch_one(pool)
    .await?;

    Ok(social)
}

pub async fn update_social(
    pool: &PgPool,
    id: Uuid,
    payload: &SocialRequest,
) -> Result<Option<Social>> {
    let social = sqlx::query_as::<_, Social>(
        "UPDATE socials SET name = $2, url = $3, updated_at = NOW() WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .bind(payload.name.to_uppercase())
    .bind(&payload.url)
    .fetch_optional(pool)
    .await?;

    Ok(social)
}

pub async fn delete_social(pool: &PgPool, id: Uuid) -> Result<bool> {
    let result = sqlx::query("DELETE FROM socials WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() == 1)
}
