use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::user::User;
use crate::nav::catalog::{UserType, View};
use crate::nav::screen::{screen, ScreenDescriptor};
use crate::session::{SessionState, SessionStore};
use crate::state::AppState;
use crate::validation::{sanitize_signup, validate_signup};

/// What a rendering client sees after any session operation.
#[derive(Serialize)]
pub struct SessionSnapshot {
    pub current_view: View,
    pub screen: ScreenDescriptor,
    pub user: Option<User>,
    pub is_authenticated: bool,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl SessionSnapshot {
    fn from_state(state: SessionState) -> Self {
        let screen = screen(state.current_view, state.user.as_ref());
        SessionSnapshot {
            current_view: state.current_view,
            screen,
            is_authenticated: state.is_authenticated(),
            user: state.user,
            is_loading: state.is_loading,
            error: state.error,
        }
    }
}

#[derive(Serialize)]
pub struct SessionCreatedResponse {
    pub session_id: Uuid,
    #[serde(flatten)]
    pub snapshot: SessionSnapshot,
}

fn lookup(state: &AppState, id: Uuid) -> Result<Arc<SessionStore>, AppError> {
    state
        .sessions
        .get(id)
        .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))
}

/// POST /api/v1/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> (StatusCode, Json<SessionCreatedResponse>) {
    let (session_id, store) = state.sessions.create();
    (
        StatusCode::CREATED,
        Json(SessionCreatedResponse {
            session_id,
            snapshot: SessionSnapshot::from_state(store.snapshot()),
        }),
    )
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let store = lookup(&state, id)?;
    Ok(Json(SessionSnapshot::from_state(store.snapshot())))
}

#[derive(Deserialize)]
pub struct NavigateRequest {
    pub view: View,
}

/// POST /api/v1/sessions/:id/navigate
///
/// A denied navigation is an expected outcome, not an HTTP failure: the
/// response is a normal snapshot carrying the denial copy in `error`.
pub async fn handle_navigate(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<NavigateRequest>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let store = lookup(&state, id)?;
    store.navigate(req.view);
    Ok(Json(SessionSnapshot::from_state(store.snapshot())))
}

#[derive(Deserialize)]
pub struct SignupRequest {
    pub user_type: UserType,
    pub email: String,
    pub name: String,
}

/// POST /api/v1/sessions/:id/signup
pub async fn handle_signup(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<SignupRequest>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let store = lookup(&state, id)?;

    let validation = validate_signup(&req.email, &req.name);
    if !validation.is_valid {
        return Err(AppError::UnprocessableEntity(validation.errors.join("; ")));
    }

    let sanitized = sanitize_signup(&req.email, &req.name);
    store
        .sign_up(req.user_type, sanitized)
        .await
        .map_err(|in_flight| AppError::Conflict(in_flight.to_string()))?;

    Ok(Json(SessionSnapshot::from_state(store.snapshot())))
}

/// POST /api/v1/sessions/:id/signin
///
/// The body carries an already-resolved user record; there is no loading
/// phase on this path.
pub async fn handle_signin(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(user): Json<User>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let store = lookup(&state, id)?;
    store.sign_in(user);
    Ok(Json(SessionSnapshot::from_state(store.snapshot())))
}

/// POST /api/v1/sessions/:id/signout
pub async fn handle_signout(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let store = lookup(&state, id)?;
    store.sign_out();
    Ok(Json(SessionSnapshot::from_state(store.snapshot())))
}

#[derive(Deserialize)]
pub struct LoadingRequest {
    pub is_loading: bool,
}

/// POST /api/v1/sessions/:id/loading
///
/// Lets the client drive the global loading overlay around flows (like the
/// resume upload) that resolve outside the store's own async operations.
pub async fn handle_set_loading(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<LoadingRequest>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let store = lookup(&state, id)?;
    store.set_loading(req.is_loading);
    Ok(Json(SessionSnapshot::from_state(store.snapshot())))
}

/// POST /api/v1/sessions/:id/error/dismiss
pub async fn handle_dismiss_error(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let store = lookup(&state, id)?;
    store.clear_error();
    Ok(Json(SessionSnapshot::from_state(store.snapshot())))
}
