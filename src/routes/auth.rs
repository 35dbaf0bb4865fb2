use axum::{extract::State, Extension, Json};
use axum_extra::extract::CookieJar;
use serde_json::{json, Value};

use crate::{
    error::{AppError, Result},
    models::{MessageResponse, SendCodeRequest, User, UserResponse, VerifyCodeRequest, VerifyResponse},
    queries::{session_queries, user_queries, verification_queries},
    services::email_service,
    utils::{cookies, token},
    AppState,
};

pub async fn send_verification_code(
    State(state): State<AppState>,
    Json(payload): Json<SendCodeRequest>,
) -> Result<Json<MessageResponse>> {
    validate_email(&payload.email)?;

    let email = payload.email.to_lowercase();

    let existing = user_queries::find_by_email(&state.db, &email).await?;

    if payload.require_existing && existing.is_none() {
        return Err(AppError::NotFound(
            "No account found with this email address".to_string(),
        ));
    }

    if let Some(user) = &existing {
        if !user.is_allow {
            return Err(AppError::Forbidden(
                "Your account is pending approval. Please contact an administrator.".to_string(),
            ));
        }
    }

    let code = token::generate_verification_code();

    // Prior unused codes stay valid; every request adds exactly one row.
    verification_queries::create_verification_code(&state.db, &email, &code).await?;

    // A dispatch failure leaves the code row in place.
    email_service::send_verification_email(&state.ses_client, &email, &code, &state.sender_email)
        .await?;

    tracing::info!("Verification code sent to {}", email);

    Ok(Json(MessageResponse {
        success: true,
        message: "Verification code sent to your email".to_string(),
    }))
}

pub async fn verify_code(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<VerifyCodeRequest>,
) -> Result<(CookieJar, Json<VerifyResponse>)> {
    if payload.email.is_empty() || payload.code.is_empty() {
        return Err(AppError::BadRequest("Email and code are required".to_string()));
    }

    let email = payload.email.to_lowercase();

    let verification = verification_queries::find_valid_code(&state.db, &email, &payload.code)
        .await?
        .ok_or_else(|| {
            AppError::BadRequest("Invalid or expired verification code".to_string())
        })?;

    // Spend the code before anything else; a lost race reports the same
    // collapsed error as a wrong or expired code.
    if !verification_queries::consume_code(&state.db, verification.id).await? {
        return Err(AppError::BadRequest(
            "Invalid or expired verification code".to_string(),
        ));
    }

    let user = match user_queries::find_by_email(&state.db, &email).await? {
        Some(user) => user_queries::touch_last_login(&state.db, user.id).await?,
        None => user_queries::create_user(&state.db, &email).await?,
    };

    // First-time registrants are persisted above but still denied a session
    // until an administrator flips is_allow.
    if !user.is_allow {
        return Err(AppError::Forbidden(
            "Your account is pending approval. Please contact an administrator.".to_string(),
        ));
    }

    let session_token = token::generate_session_token();
    session_queries::create_session(&state.db, user.id, &session_token).await?;

    tracing::info!("Session created for {}", user.email);

    let jar = jar.add(cookies::session_cookie(session_token, state.cookie_secure()));

    Ok((
        jar,
        Json(VerifyResponse {
            success: true,
            message: "Authentication successful".to_string(),
            user: user.into(),
        }),
    ))
}

pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, Json<Value>)> {
    if let Some(cookie) = jar.get(cookies::SESSION_COOKIE) {
        session_queries::delete_session(&state.db, cookie.value()).await?;
    }

    let jar = jar.add(cookies::clear_session_cookie(state.cookie_secure()));

    Ok((jar, Json(json!({ "success": true }))))
}

pub async fn current_user(Extension(user): Extension<User>) -> Json<UserResponse> {
    Json(user.into())
}

fn validate_email(email: &str) -> Result<()> {
    if email.is_empty() || !email.contains('@') {
        return Err(AppError::BadRequest("Valid email is required".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_email_is_rejected() {
        assert!(validate_email("").is_err());
    }

    #[test]
    fn email_without_at_sign_is_rejected() {
        assert!(validate_email("adminexample.com").is_err());
    }

    #[test]
    fn plain_email_passes() {
        assert!(validate_email("admin@example.com").is_ok());
    }
}
