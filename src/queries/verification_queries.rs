use chrono::{Duration, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::Result, models::VerificationCode};

const CODE_EXPIRY_MINUTES: i64 = 10;

pub async fn create_verification_code(
    pool: &PgPool,
    email: &str,
    code: &str,
) -> Result<VerificationCode> {
    let expires_at = Utc::now() + Duration::minutes(CODE_EXPIRY_MINUTES);

    let verification_code = sqlx::query_as::<_, VerificationCode>(
        "INSERT INTO verification_codes (email, code, expires_at)
         VALUES ($1, $2, $3)
         RETURNING *",
    )
    .bind(email)
    .bind(code)
    .bind(expires_at)
    .fetch_one(pool)
    .await?;

    Ok(verification_code)
}

/// Wrong code, expired code, and already-used code all fall through to the
/// same `None` here, so the caller cannot distinguish them.
pub async fn find_valid_code(
    pool: &PgPool,
    email: &str,
    code: &str,
) -> Result<Option<VerificationCode>> {
    let verification_code = sqlx::query_as::<_, VerificationCode>(
        "SELECT * FROM verification_codes
         WHERE email = $1 AND code = $2 AND used = FALSE AND expires_at > NOW()
         ORDER BY created_at DESC
         LIMIT 1",
    )
    .bind(email)
    .bind(code)
    .fetch_optional(pool)
    .await?;

    Ok(verification_code)
}

/// Mark a code used. The `used = FALSE` predicate makes consumption a
/// check-and-set: of two concurrent verifies racing on the same code, only
/// one sees an affected row.
pub async fn consume_code(pool: &PgPool, id: Uuid) -> Result<bool> {
    let result = sqlx::query("UPDATE verification_codes SET used = TRUE WHERE id = $1 AND used = FALSE")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() == 1)
}
