use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Bonus {
    pub id: Uuid,
    pub name: String,
    pub logo: String,
    pub subtitle: String,
    pub offers: Vec<String>,
    pub code: String,
    pub image: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Required fields deserialize to empty strings when absent so the handler
/// can reject them with a 400 rather than a deserialization error.
#[derive(Debug, Deserialize)]
pub struct BonusRequest {
    #[serde(default)]
    pub name: String,
    pub subtitle: Option<String>,
    pub offers: Option<Vec<String>>,
    #[serde(default)]
    pub code: String,
    pub image: Option<String>,
    #[serde(default)]
    pub url: String,
}
