use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::Result,
    models::{Bonus, BonusRequest},
};

pub async fn get_all(pool: &PgPool) -> Result<Vec<Bonus>> {
    let bonuses = sqlx::query_as::<_, Bonus>("SELECT * FROM bonuses ORDER BY created_at")
        .fetch_all(pool)
        .await?;

    Ok(bonuses)
}

pub async fn create_bonus(pool: &PgPool, payload: &BonusRequest) -> Result<Bonus> {
    let bonus = sqlx::query_as::<_, Bonus>(
        "INSERT INTO bonuses (name, logo, subtitle, offers, code, image, url)
         VALUES ($1, $1, $2, $3, $4, $5, $6)
         RETURNING *",
    )
    .bind(&payload.name)
    .bind(payload.subtitle.as_deref().unwrap_or(""))
    .bind(payload.offers.as_deref().unwrap_or(&[]))
    .bind(payload.code.to_uppercase())
    .bind(payload.image.as_deref().unwrap_or(""))
    .bind(&payload.url)
    .fetch_one(pool)
    .await?;

    Ok(bonus)
}

pub async fn update_bonus(pool: &PgPool, id: Uuid, payload: &BonusRequest) -> Result<Option<Bonus>> {
    let bonus = sqlx::query_as::<_, Bonus>(
        "UPDATE bonuses
         SET name = $2, logo = $2, subtitle = $3, offers = $4, code = $5, image = $6, url = $7,
             updated_at = NOW()
         WHERE id = $1
         RETURNING *",
    )
    .bind(id)
    .bind(&payload.name)
    .bind(payload.subtitle.as_deref().unwrap_or(""))
    .bind(payload.offers.as_deref().unwrap_or(&[]))
    .bind(payload.code.to_uppercase())
    .bind(payload.image.as_deref().unwrap_or(""))
    .bind(&payload.url)
    .fetch_optional(pool)
    .await?;

    Ok(bonus)
}

pub async fn delete_bonus(pool: &PgPool, id: Uuid) -> Result<bool> {
    let result = sqlx::query("DELETE FROM bonuses WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() == 1)
}
