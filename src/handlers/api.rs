use axum::{
    extract::{Extension, Path},
    response::Json,
    routing::get,
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use uuid::Uuid;

use crate::error::AppError;
use crate::session::SessionState;
use crate::AppState;

pub fn api_routes() -> Router {
    Router::new()
        .route("/api/status", get(api_status))
        .route("/api/sessions/:session_id", get(get_session))
}

pub async fn api_status(Extension(state): Extension<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "status": "operational",
        "version": env!("CARGO_PKG_VERSION"),
        "services": {
            "content_provider": state.content_provider.name(),
            "active_sessions": state.sessions.len().await,
        },
        "limits": {
            "max_upload_mb": state.config.max_upload_mb,
            "session_ttl_minutes": state.config.session_ttl.as_secs() / 60,
        },
        "timestamp": chrono::Utc::now(),
    }))
}

/// Snapshot of a session without its pending flash notice.
pub async fn get_session(
    Extension(state): Extension<Arc<AppState>>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<SessionState>, AppError> {
    state
        .sessions
        .get(&session_id)
        .await
        .map(Json)
        .ok_or(AppError::SessionNotFound(session_id))
}
