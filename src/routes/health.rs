use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::{database, error::Result, AppState};

const SERVICE: &str = "neokcs-back";

pub async fn health_check() -> impl IntoResponse {
    Json(json!({ "status": "ok", "service": SERVICE }))
}

/// Readiness additionally proves the dashboard store is reachable.
pub async fn readiness_check(State(state): State<AppState>) -> Result<impl IntoResponse> {
    database::check_health(&state.db).await?;

    Ok((
        StatusCode::OK,
        Json(json!({
            "status": "ready",
            "service": SERVICE,
            "database": "connected"
        })),
    ))
}
