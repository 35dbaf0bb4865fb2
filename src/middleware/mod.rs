use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;
use sqlx::PgPool;

use crate::{
    error::{AppError, Result},
    models::User,
    queries::{session_queries, user_queries},
    utils::cookies::SESSION_COOKIE,
    AppState,
};

/// Paths reachable without a session cookie: the login page, the two
/// unauthenticated auth endpoints, and the health probes.
const PUBLIC_PREFIXES: &[&str] = &[
    "/auth",
    "/api/auth/send-code",
    "/api/auth/verify-code",
    "/health",
];

pub fn is_public_path(path: &str) -> bool {
    PUBLIC_PREFIXES.iter().any(|prefix| path.starts_with(prefix))
}

/// Perimeter guard. Checks cookie presence only, never validity; protected
/// handlers still go through `require_session` for the real decision.
pub async fn route_guard(jar: CookieJar, req: Request, next: Next) -> Response {
    let has_token = jar.get(SESSION_COOKIE).is_some();
    let path = req.uri().path();

    if !has_token && !is_public_path(path) {
        return Redirect::temporary("/auth").into_response();
    }

    if has_token && path == "/auth" {
        return Redirect::temporary("/").into_response();
    }

    next.run(req).await
}

/// Resolve a bearer token to an authorized user. Fails closed: a missing
/// session, a missing user, or `is_allow = false` all resolve to `None`.
/// Authorization state is re-checked here on every request, never cached in
/// the session row.
pub async fn resolve_session(pool: &PgPool, token: &str) -> Result<Option<User>> {
    if token.is_empty() {
        return Ok(None);
    }

    let Some(session) = session_queries::find_valid_session(pool, token).await? else {
        return Ok(None);
    };

    let Some(user) = user_queries::find_by_id(pool, session.user_id).await? else {
        return Ok(None);
    };

    if !user.is_allow {
        return Ok(None);
    }

    Ok(Some(user))
}

pub async fn require_session(
    State(state): State<AppState>,
    jar: CookieJar,
    mut req: Request,
    next: Next,
) -> Result<Response> {
    let token = jar
        .get(SESSION_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .ok_or_else(|| AppError::Unauthorized("Authentication required".to_string()))?;

    let user = resolve_session(&state.db, &token)
        .await?
        .ok_or_else(|| AppError::Unauthorized("Invalid or expired session".to_string()))?;

    req.extensions_mut().insert(user);

    Ok(next.run(req).await)
}
