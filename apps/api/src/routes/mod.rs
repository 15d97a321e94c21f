pub mod health;
pub mod resume;
pub mod sessions;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Session API — one in-memory session per browser tab
        .route("/api/v1/sessions", post(sessions::handle_create_session))
        .route("/api/v1/sessions/:id", get(sessions::handle_get_session))
        .route(
            "/api/v1/sessions/:id/navigate",
            post(sessions::handle_navigate),
        )
        .route("/api/v1/sessions/:id/signup", post(sessions::handle_signup))
        .route("/api/v1/sessions/:id/signin", post(sessions::handle_signin))
        .route(
            "/api/v1/sessions/:id/signout",
            post(sessions::handle_signout),
        )
        .route(
            "/api/v1/sessions/:id/error/dismiss",
            post(sessions::handle_dismiss_error),
        )
        .route(
            "/api/v1/sessions/:id/loading",
            post(sessions::handle_set_loading),
        )
        // Resume parsing relay
        .route("/api/v1/parse-resume", post(resume::handle_parse_resume))
        .with_state(state)
}
