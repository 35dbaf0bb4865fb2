use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    error::{AppError, Result},
    models::{Bonus, BonusRequest},
    queries::bonus_queries,
    AppState,
};

pub async fn list_bonuses(State(state): State<AppState>) -> Result<Json<Vec<Bonus>>> {
    let bonuses = bonus_queries::get_all(&state.db).await?;
    Ok(Json(bonuses))
}

pub async fn create_bonus(
    State(state): State<AppState>,
    Json(payload): Json<BonusRequest>,
) -> Result<(StatusCode, Json<Bonus>)> {
    validate_bonus(&payload)?;

    let bonus = bonus_queries::create_bonus(&state.db, &payload).await?;
    Ok((StatusCode::CREATED, Json(bonus)))
}

pub async fn update_bonus(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<BonusRequest>,
) -> Result<Json<Bonus>> {
    validate_bonus(&payload)?;

    let bonus = bonus_queries::update_bonus(&state.db, id, &payload)
        .await?
        .ok_or_else(|| AppError::NotFound("Bonus not found".to_string()))?;

    Ok(Json(bonus))
}

pub async fn delete_bonus(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<StatusCode> {
    if !bonus_queries::delete_bonus(&state.db, id).await? {
        return Err(AppError::NotFound("Bonus not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}

fn validate_bonus(payload: &BonusRequest) -> Result<()> {
    if payload.name.is_empty() || payload.code.is_empty() || payload.url.is_empty() {
        return Err(AppError::BadRequest(
            "Name, code, and URL are required".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_name_deserializes_and_fails_validation() {
        let payload: BonusRequest =
            serde_json::from_str(r#"{"code":"abc","url":"https://x"}"#).unwrap();
        assert!(matches!(
            validate_bonus(&payload),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn full_payload_passes_validation() {
        let payload: BonusRequest = serde_json::from_str(
            r#"{"name":"Partner","code":"abc","url":"https://x","offers":["a"]}"#,
        )
        .unwrap();
        assert!(validate_bonus(&payload).is_ok());
    }
}
