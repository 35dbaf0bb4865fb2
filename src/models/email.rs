use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::UserResponse;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendCodeRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub require_existing: bool,
}

/// Missing fields deserialize to empty strings so the handler can reject
/// them with a 400 rather than a deserialization error.
#[derive(Debug, Deserialize)]
pub struct VerifyCodeRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub code: String,
}

/// One-time email code. Consumed at most once via a conditional update on
/// `used`; expiry is checked at lookup time and rows are never deleted.
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct VerificationCode {
    pub id: Uuid,
    pub email: String,
    pub code: String,
    pub used: bool,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    pub success: bool,
    pub message: String,
    pub user: UserResponse,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_existing_defaults_to_false() {
        let request: SendCodeRequest =
            serde_json::from_str(r#"{"email":"a@x.com"}"#).unwrap();
        assert!(!request.require_existing);
    }

    #[test]
    fn require_existing_is_camel_case_on_the_wire() {
        let request: SendCodeRequest =
            serde_json::from_str(r#"{"email":"a@x.com","requireExisting":true}"#).unwrap();
        assert!(request.require_existing);
    }
}
