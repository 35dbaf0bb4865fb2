use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A dashboard account. Created lazily on first successful code verification;
/// `is_allow` stays false until an administrator approves the account, and no
/// session can exist for an unapproved user.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub is_allow: bool,
    pub created_at: DateTime<Utc>,
    pub last_login: DateTime<Utc>,
}

/// Public projection returned to the client after verification.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub is_allow: bool,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            is_allow: user.is_allow,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_response_serializes_camel_case() {
        let user = User {
            id: Uuid::nil(),
            email: "admin@neokcs.test".to_string(),
            is_allow: true,
            created_at: Utc::now(),
            last_login: Utc::now(),
        };

        let value = serde_json::to_value(UserResponse::from(user)).unwrap();
        assert_eq!(value["email"], "admin@neokcs.test");
        assert_eq!(value["isAllow"], true);
        assert!(value.get("is_allow").is_none());
    }
}
