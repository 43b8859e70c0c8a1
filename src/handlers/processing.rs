use axum::{
    extract::{Extension, Path},
    response::{Json, Redirect},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::error::AppError;
use crate::handlers::generator::session_page;
use crate::services::processing::{self, PipelineStep, StartOutcome};
use crate::AppState;

pub fn processing_routes() -> Router {
    Router::new()
        .route("/generator/:session_id/process", post(start_processing))
        .route("/api/sessions/:session_id/progress", get(get_progress))
}

#[derive(Debug, Serialize)]
pub struct ProgressResponse {
    pub session_id: Uuid,
    pub status: &'static str,
    pub percent: u8,
    pub steps: Vec<PipelineStep>,
}

pub async fn start_processing(
    Extension(state): Extension<Arc<AppState>>,
    Path(session_id): Path<Uuid>,
) -> Result<Redirect, AppError> {
    let outcome = processing::start(&state.sessions, session_id, state.config.progress_tick).await?;
    if outcome != StartOutcome::Started {
        tracing::debug!(session_id = %session_id, ?outcome, "start processing ignored");
    }
    Ok(session_page(session_id))
}

pub async fn get_progress(
    Extension(state): Extension<Arc<AppState>>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<ProgressResponse>, AppError> {
    let session = state
        .sessions
        .get(&session_id)
        .await
        .ok_or(AppError::SessionNotFound(session_id))?;

    let steps = if session.input.is_present() {
        processing::pipeline(session.processing)
    } else {
        Vec::new()
    };

    Ok(Json(ProgressResponse {
        session_id,
        status: session.processing.status_label(),
        percent: session.processing.percent(),
        steps,
    }))
}
