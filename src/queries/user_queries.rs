use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::Result, models::User};

pub async fn create_user(pool: &PgPool, email: &str) -> Result<User> {
    let user = sqlx::query_as::<_, User>("INSERT INTO users (email) VALUES ($1) RETURNING *")
        .bind(email)
        .fetch_one(pool)
        .await?;

    Ok(user)
}

pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>> {
    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
        .bind(email)
        .fetch_optional(pool)
        .await?;

    Ok(user)
}

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<User>> {
    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(user)
}

pub async fn touch_last_login(pool: &PgPool, id: Uuid) -> Result<User> {
    let user = sqlx::query_as::<_, User>(
        "UPDATE users SET last_login = NOW() WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .fetch_one(pool)
    .await?;

    Ok(user)
}
