use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    error::{AppError, Result},
    models::{Faq, FaqRequest},
    queries::faq_queries,
    AppState,
};

pub async fn list_faqs(State(state): State<AppState>) -> Result<Json<Vec<Faq>>> {
    let faqs = faq_queries::get_all(&state.db).await?;
    Ok(Json(faqs))
}

pub async fn create_faq(
    State(state): State<AppState>,
    Json(payload): Json<FaqRequest>,
) -> Result<(StatusCode, Json<Faq>)> {
    validate_faq(&payload)?;

    let faq = faq_queries::create_faq(&state.db, &payload).await?;
    Ok((StatusCode::CREATED, Json(faq)))
}

pub async fn update_faq(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<FaqRequest>,
) -> Result<Json<Faq>> {
    validate_faq(&payload)?;

    let faq = faq_queries::update_faq(&state.db, id, &payload)
        .await?
        .ok_or_else(|| AppError::NotFound("FAQ not found".to_string()))?;

    Ok(Json(faq))
}

pub async fn delete_faq(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<StatusCode> {
    if !faq_queries::delete_faq(&state.db, id).await? {
        return Err(AppError::NotFound("FAQ not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}

fn validate_faq(payload: &FaqRequest) -> Result<()> {
    if payload.question.is_empty() || payload.answer.is_empty() {
        return Err(AppError::BadRequest(
            "Question and answer are required".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_answer_deserializes_and_fails_validation() {
        let payload: FaqRequest = serde_json::from_str(r#"{"question":"How?"}"#).unwrap();
        assert!(matches!(validate_faq(&payload), Err(AppError::BadRequest(_))));
    }
}
