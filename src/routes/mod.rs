mod auth;
mod bonuses;
mod faqs;
mod health;
mod socials;

use axum::{
    middleware::{from_fn, from_fn_with_state},
    routing::{get, post, put},
    Router,
};

use crate::{
    middleware::{require_session, route_guard},
    AppState,
};

pub fn create_router(state: AppState) -> Router {
    // Content endpoints and /me require a fully resolved session, not just
    // cookie presence.
    let protected_api = Router::new()
        .route("/api/auth/me", get(auth::current_user))
        .route(
            "/api/bonuses",
            get(bonuses::list_bonuses).post(bonuses::create_bonus),
        )
        .route(
            "/api/bonuses/:id",
            put(bonuses::update_bonus).delete(bonuses::delete_bonus),
        )
        .route(
            "/api/socials",
            get(socials::list_socials).post(socials::create_social),
        )
        .route(
            "/api/socials/:id",
            put(socials::update_social).delete(socials::delete_social),
        )
        .route("/api/faqs", get(faqs::list_faqs).post(faqs::create_faq))
        .route(
            "/api/faqs/:id",
            put(faqs::update_faq).delete(faqs::delete_faq),
        )
        .layer(from_fn_with_state(state.clone(), require_session));

    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/api/auth/send-code", post(auth::send_verification_code))
        .route("/api/auth/verify-code", post(auth::verify_code))
        .route("/api/auth/logout", post(auth::logout))
        .merge(protected_api)
        .layer(from_fn(route_guard))
        .with_state(state)
}
