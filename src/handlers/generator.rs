use axum::{
    extract::{Extension, Form, Path},
    response::{Html, Redirect},
    routing::{get, post},
    Router,
};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::content::{ContentAction, ContentPiece};
use crate::models::settings::{ContentSettings, ContentType};
use crate::pages::{generator, Route};
use crate::session::{Notice, SessionId, SessionState};
use crate::AppState;

pub fn generator_routes() -> Router {
    Router::new()
        .route("/generator", get(new_session))
        .route("/generator/:session_id", get(generator_page))
        .route("/generator/:session_id/settings", post(apply_settings))
        .route(
            "/generator/:session_id/content/:content_type/:action",
            post(content_action),
        )
}

/// Page URL of a session. Every form handler redirects here when done.
pub fn session_page(session_id: SessionId) -> Redirect {
    Redirect::to(&format!("{}/{}", Route::Generator.path(), session_id))
}

/// A plain visit to `/generator` always starts over with a fresh session.
pub async fn new_session(Extension(state): Extension<Arc<AppState>>) -> Redirect {
    let session = state.sessions.create().await;
    tracing::info!(session_id = %session.id, "generator session started");
    session_page(session.id)
}

pub async fn generator_page(
    Extension(state): Extension<Arc<AppState>>,
    Path(session_id): Path<Uuid>,
) -> Result<Html<String>, AppError> {
    let session = state
        .sessions
        .take_for_render(&session_id)
        .await
        .ok_or(AppError::SessionNotFound(session_id))?;

    let pieces = generate_pieces(&state, &session).await;
    Ok(Html(generator::render(&session, &pieces, state.config.max_upload_mb)))
}

async fn generate_pieces(state: &AppState, session: &SessionState) -> Vec<ContentPiece> {
    if !session.results_visible() {
        return Vec::new();
    }
    let mut pieces = Vec::new();
    for content_type in session.settings.enabled_types() {
        pieces.push(
            state
                .content_provider
                .generate(content_type, None, &session.settings)
                .await,
        );
    }
    pieces
}

pub async fn apply_settings(
    Extension(state): Extension<Arc<AppState>>,
    Path(session_id): Path<Uuid>,
    Form(form): Form<HashMap<String, String>>,
) -> Result<Redirect, AppError> {
    let settings = ContentSettings::from_form(&form);
    tracing::debug!(
        session_id = %session_id,
        content_types = settings.content_types.len(),
        tone = settings.tone.label(),
        "applying settings"
    );

    state
        .sessions
        .update(&session_id, |s| s.settings = settings)
        .await
        .ok_or(AppError::SessionNotFound(session_id))?;

    Ok(session_page(session_id))
}

/// Copy, download, regenerate and share only acknowledge the click.
pub async fn content_action(
    Extension(state): Extension<Arc<AppState>>,
    Path((session_id, content_type, action)): Path<(Uuid, String, String)>,
) -> Result<Redirect, AppError> {
    let content_type = ContentType::from_slug(&content_type)
        .ok_or(AppError::UnknownContentType(content_type))?;
    let action = ContentAction::from_slug(&action).ok_or(AppError::UnknownAction(action))?;

    let notice = if action.is_informational() {
        Notice::info(action.acknowledgment())
    } else {
        Notice::success(action.acknowledgment())
    };

    state
        .sessions
        .update(&session_id, |s| s.flash = Some(notice))
        .await
        .ok_or(AppError::SessionNotFound(session_id))?;

    tracing::info!(
        session_id = %session_id,
        content_type = content_type.slug(),
        action = action.slug(),
        "content action acknowledged"
    );
    Ok(session_page(session_id))
}
