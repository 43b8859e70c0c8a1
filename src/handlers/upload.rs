use axum::{
    extract::{multipart::Multipart, DefaultBodyLimit, Extension, Form, Path},
    response::Redirect,
    routing::post,
    Router,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::error::AppError;
use crate::handlers::generator::session_page;
use crate::models::intake::{InputSource, LinkForm};
use crate::services::intake;
use crate::session::Notice;
use crate::AppState;

pub fn upload_routes(max_upload_bytes: usize) -> Router {
    let file_routes = Router::new()
        .route("/generator/:session_id/upload", post(upload_file))
        .layer(DefaultBodyLimit::max(max_upload_bytes));

    let input_routes = Router::new()
        .route("/generator/:session_id/link", post(submit_link))
        .route("/generator/:session_id/clear", post(clear_input));

    file_routes.merge(input_routes)
}

/// Accepts the `file` part of a multipart form. Only metadata is kept: the
/// bytes are streamed to count the size and then dropped.
pub async fn upload_file(
    Extension(state): Extension<Arc<AppState>>,
    Path(session_id): Path<Uuid>,
    mut multipart: Multipart,
) -> Result<Redirect, AppError> {
    if state.sessions.get(&session_id).await.is_none() {
        return Err(AppError::SessionNotFound(session_id));
    }

    let mut received = None;
    while let Some(mut field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        let declared_mime = field.content_type().map(str::to_string);

        let mut size = 0u64;
        while let Some(chunk) = field.chunk().await? {
            size += chunk.len() as u64;
        }
        received = Some((filename, size, declared_mime));
    }

    let Some((filename, size, declared_mime)) = received.filter(|(name, _, _)| !name.is_empty())
    else {
        tracing::debug!(session_id = %session_id, "upload form submitted without a file");
        return Ok(session_page(session_id));
    };

    match intake::accept_file(&filename, size, declared_mime.as_deref()) {
        Ok(asset) => {
            tracing::info!(
                session_id = %session_id,
                filename = %asset.name,
                size = asset.size,
                mime_type = %asset.mime_type,
                "file accepted"
            );
            state
                .sessions
                .update(&session_id, |s| s.set_input(InputSource::File(asset)))
                .await
                .ok_or(AppError::SessionNotFound(session_id))?;
        }
        Err(e) => {
            tracing::warn!(session_id = %session_id, filename = %filename, error = %e, "file rejected");
            state
                .sessions
                .update(&session_id, |s| s.flash = Some(Notice::error(e.to_string())))
                .await
                .ok_or(AppError::SessionNotFound(session_id))?;
        }
    }

    Ok(session_page(session_id))
}

pub async fn submit_link(
    Extension(state): Extension<Arc<AppState>>,
    Path(session_id): Path<Uuid>,
    Form(form): Form<LinkForm>,
) -> Result<Redirect, AppError> {
    let outcome = intake::accept_link(&form.url);

    state
        .sessions
        .update(&session_id, |s| match outcome {
            Ok(Some(link)) => {
                tracing::info!(session_id = %s.id, url = %link.url, "youtube link accepted");
                s.set_input(InputSource::Link(link));
            }
            Ok(None) => {}
            Err(e) => {
                tracing::warn!(session_id = %s.id, url = %form.url, "youtube link rejected");
                s.flash = Some(Notice::error(e.to_string()));
            }
        })
        .await
        .ok_or(AppError::SessionNotFound(session_id))?;

    Ok(session_page(session_id))
}

pub async fn clear_input(
    Extension(state): Extension<Arc<AppState>>,
    Path(session_id): Path<Uuid>,
) -> Result<Redirect, AppError> {
    state
        .sessions
        .update(&session_id, |s| s.set_input(InputSource::None))
        .await
        .ok_or(AppError::SessionNotFound(session_id))?;

    tracing::info!(session_id = %session_id, "input cleared");
    Ok(session_page(session_id))
}

#[cfg(test)]
mod tests {
    use crate::config::AppConfig;
    use crate::models::intake::InputSource;
    use crate::test_support::{
        body_json, body_string, get, post_form, post_multipart, test_app, test_app_with,
    };
    use axum::http::StatusCode;

    #[tokio::test]
    async fn valid_upload_is_stored_and_shown() {
        let (app, state) = test_app();
        let id = state.sessions.create().await.id;

        let response = post_multipart(
            &app,
            &format!("/generator/{id}/upload"),
            "episode.mp3",
            Some("audio/mpeg"),
            &[0u8; 2048],
        )
        .await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        match state.sessions.get(&id).await.unwrap().input {
            InputSource::File(asset) => {
                assert_eq!(asset.name, "episode.mp3");
                assert_eq!(asset.size, 2048);
                assert_eq!(asset.mime_type, "audio/mpeg");
            }
            other => panic!("unexpected input {other:?}"),
        }

        let html = body_string(get(&app, &format!("/generator/{id}")).await).await;
        assert!(html.contains("✅ File Successfully Uploaded!"));
        assert!(html.contains("🎉 Content Generation Complete!"));
    }

    #[tokio::test]
    async fn unsupported_extension_leaves_state_unchanged() {
        let (app, state) = test_app();
        let id = state.sessions.create().await.id;

        let response = post_multipart(
            &app,
            &format!("/generator/{id}/upload"),
            "notes.txt",
            Some("text/plain"),
            b"hello",
        )
        .await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(state.sessions.get(&id).await.unwrap().input, InputSource::None);

        let response = get(&app, &format!("/generator/{id}")).await;
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains("notice-error"));
        assert!(html.contains("Unsupported file type"));
    }

    #[tokio::test]
    async fn invalid_link_shows_error_and_keeps_previous_input() {
        let (app, state) = test_app();
        let id = state.sessions.create().await.id;

        post_form(&app, &format!("/generator/{id}/link"), "url=https%3A%2F%2Fyoutu.be%2Fabc123").await;
        post_form(&app, &format!("/generator/{id}/link"), "url=https%3A%2F%2Fvimeo.com%2F1").await;

        let session = state.sessions.get(&id).await.unwrap();
        assert!(matches!(session.input, InputSource::Link(ref l) if l.url == "https://youtu.be/abc123"));

        let html = body_string(get(&app, &format!("/generator/{id}")).await).await;
        assert!(html.contains("❌ Please enter a valid YouTube URL"));
        assert!(html.contains("✅ Valid YouTube URL Detected!"));
    }

    #[tokio::test]
    async fn empty_link_is_no_input() {
        let (app, state) = test_app();
        let id = state.sessions.create().await.id;

        post_form(&app, &format!("/generator/{id}/link"), "url=").await;
        let session = state.sessions.get(&id).await.unwrap();
        assert_eq!(session.input, InputSource::None);
        assert!(session.flash.is_none());
    }

    #[tokio::test]
    async fn latest_input_wins_and_clear_resets() {
        let (app, state) = test_app();
        let id = state.sessions.create().await.id;

        post_multipart(&app, &format!("/generator/{id}/upload"), "talk.wav", None, b"RIFF").await;
        post_form(&app, &format!("/generator/{id}/link"), "url=https%3A%2F%2Fwww.youtube.com%2Fwatch%3Fv%3Dx").await;
        assert!(matches!(state.sessions.get(&id).await.unwrap().input, InputSource::Link(_)));

        post_form(&app, &format!("/generator/{id}/clear"), "").await;
        assert_eq!(state.sessions.get(&id).await.unwrap().input, InputSource::None);
    }

    #[tokio::test]
    async fn upload_over_the_configured_limit_is_rejected() {
        let (app, state) = test_app_with(AppConfig {
            max_upload_mb: 1,
            ..AppConfig::default()
        });
        let id = state.sessions.create().await.id;

        let response = post_multipart(
            &app,
            &format!("/generator/{id}/upload"),
            "episode.mp3",
            Some("audio/mpeg"),
            &vec![0u8; 2 * 1024 * 1024],
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["success"], false);
        assert_eq!(state.sessions.get(&id).await.unwrap().input, InputSource::None);
    }

    #[tokio::test]
    async fn upload_to_unknown_session_is_not_found() {
        let (app, _) = test_app();
        let response = post_multipart(
            &app,
            &format!("/generator/{}/upload", uuid::Uuid::new_v4()),
            "episode.mp3",
            None,
            b"ID3",
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
