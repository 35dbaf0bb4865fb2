use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    error::{AppError, Result},
    models::{Social, SocialRequest},
    queries::social_queries,
    AppState,
};

pub async fn list_socials(State(state): State<AppState>) -> Result<Json<Vec<Social>>> {
    let socials = social_queries::get_all(&state.db).await?;
    Ok(Json(socials))
}

pub async fn create_social(
    State(state): State<AppState>,
    Json(payload): Json<SocialRequest>,
) -> Result<(StatusCode, Json<Social>)> {
    validate_social(&payload)?;

    let social = social_queries::create_social(&state.db, &payload).await?;
    Ok((StatusCode::CREATED, Json(social)))
}

pub async fn update_social(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<SocialRequest>,
) -> Result<Json<Social>> {
    validate_social(&payload)?;

    let social = social_queries::update_social(&state.db, id, &payload)
        .await?
        .ok_or_else(|| AppError::NotFound("Social not found".to_string()))?;

    Ok(Json(social))
}

pub async fn delete_social(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode> {
    if !social_queries::delete_social(&state.db, id).await? {
        return Err(AppError::NotFound("Social not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}

fn validate_social(payload: &SocialRequest) -> Result<()> {
    if payload.name.is_empty() || payload.url.is_empty() {
        return Err(AppError::BadRequest("Name and URL are required".to_string()));
    }
    Ok(())
}
