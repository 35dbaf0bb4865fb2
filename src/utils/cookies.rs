use axum_extra::extract::cookie::{Cookie, SameSite};
use time::Duration;

/// Cookie name for the session token.
pub const SESSION_COOKIE: &str = "session-token";

/// Session lifetime in seconds (7 days). The cookie Max-Age and the session
/// row's `expires_at` both derive from this constant.
pub const SESSION_TTL_SECONDS: i64 = 7 * 24 * 60 * 60;

pub fn session_cookie(token: String, secure: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .max_age(Duration::seconds(SESSION_TTL_SECONDS))
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .build()
}

/// Expire the session cookie by setting Max-Age to 0.
pub fn clear_session_cookie(secure: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, ""))
        .path("/")
        .max_age(Duration::ZERO)
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .build()
}
