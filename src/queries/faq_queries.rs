use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::Result,
    models::{Faq, FaqRequest},
};

pub async fn get_all(pool: &PgPool) -> Result<Vec<Faq>> {
    let faqs = sqlx::query_as::<_, Faq>("SELECT * FROM faqs ORDER BY created_at")
        .fetch_all(pool)
        .await?;

    Ok(faqs)
}

pub async fn create_faq(pool: &PgPool, payload: &FaqRequest) -> Result<Faq> {
    let faq = sqlx::query_as::<_, Faq>(
        "INSERT INTO faqs (question, answer) VALUES ($1, $2) RETURNING *",
    )
    .bind(&payload.question)
    .bind(&payload.answer)
    .fetch_one(pool)
    .await?;

    Ok(faq)
}

pub async fn update_faq(pool: &PgPool, id: Uuid, payload: &FaqRequest) -> Result<Option<Faq>> {
    let faq = sqlx::query_as::<_, Faq>(
        "UPDATE faqs SET question = $2, answer = $3, updated_at = NOW() WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .bind(&payload.question)
    .bind(&payload.answer)
    .fetch_optional(pool)
    .await?;

    Ok(faq)
}

pub async fn delete_faq(pool: &PgPool, id: Uuid) -> Result<bool> {
    let result = sqlx::query("DELETE FROM faqs WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() == 1)
}
