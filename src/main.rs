use axum::{Extension, Router};
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::CorsLayer;

mod config;
mod error;
mod handlers;
mod middleware;
mod models;
mod pages;
mod services;
mod session;

use config::AppConfig;
use services::{ContentProvider, MockContentProvider};
use session::SessionStore;

// Shared by every handler through the `Extension` layer
pub struct AppState {
    pub config: AppConfig,
    pub sessions: SessionStore,
    pub content_provider: Arc<dyn ContentProvider>,
}

impl AppState {
    pub fn new(config: AppConfig, content_provider: Arc<dyn ContentProvider>) -> Self {
        Self {
            config,
            sessions: SessionStore::new(),
            content_provider,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    init_logging()?;

    let config = AppConfig::from_env()?;
    tracing::info!(
        bind_addr = %config.bind_addr,
        max_upload_mb = config.max_upload_mb,
        progress_tick_ms = config.progress_tick.as_millis() as u64,
        session_ttl_minutes = config.session_ttl.as_secs() / 60,
        "configuration loaded"
    );

    let shared_state = Arc::new(AppState::new(config, Arc::new(MockContentProvider)));
    tracing::info!(
        provider = shared_state.content_provider.name(),
        "content provider ready"
    );

    spawn_session_sweeper(shared_state.sessions.clone(), shared_state.config.session_ttl);

    let app = build_router(shared_state.clone());

    let listener = tokio::net::TcpListener::bind(shared_state.config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<std::net::SocketAddr>(),
    )
    .await?;

    Ok(())
}

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(handlers::ui::ui_routes())
        .merge(handlers::generator::generator_routes())
        .merge(handlers::upload::upload_routes(state.config.max_upload_bytes()))
        .merge(handlers::processing::processing_routes())
        .merge(handlers::api::api_routes())
        .layer(axum::middleware::from_fn(middleware::logging::request_logging_middleware))
        .layer(CorsLayer::permissive())
        .layer(Extension(state))
}

/// Drops idle sessions once a minute.
fn spawn_session_sweeper(sessions: SessionStore, ttl: Duration) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(60));
        loop {
            interval.tick().await;
            let removed = sessions.prune_idle(ttl).await;
            if removed > 0 {
                let remaining = sessions.len().await;
                tracing::info!(removed, remaining, "pruned idle sessions");
            }
        }
    });
}

fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cfg!(debug_assertions) {
            "debug,podcast_agent=trace,hyper=info,tower=info".to_string()
        } else {
            "info,podcast_agent=info,hyper=warn,tower=warn".to_string()
        }
    });

    let env_filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&log_level))?;

    // LOG_FORMAT=json for log aggregation, pretty otherwise
    let fmt_layer = if std::env::var("LOG_FORMAT").as_deref() == Ok("json") {
        fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(false)
            .with_target(true)
            .with_thread_ids(true)
            .boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    tracing::info!("🎙️ {} starting up...", pages::APP_TITLE);
    tracing::info!("Version: {}", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "Build mode: {}",
        if cfg!(debug_assertions) { "development" } else { "production" }
    );
    tracing::info!("Log level: {}", log_level);

    Ok(())
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request};
    use axum::response::Response;
    use tower::ServiceExt;

    const BOUNDARY: &str = "podcast-agent-test-boundary";

    pub fn test_app() -> (Router, Arc<AppState>) {
        test_app_with(AppConfig {
            progress_tick: Duration::from_millis(1),
            ..AppConfig::default()
        })
    }

    pub fn test_app_with(config: AppConfig) -> (Router, Arc<AppState>) {
        let state = Arc::new(AppState::new(config, Arc::new(MockContentProvider)));
        (build_router(state.clone()), state)
    }

    pub fn test_router() -> Router {
        test_app().0
    }

    pub async fn get(app: &Router, uri: &str) -> Response {
        let request = Request::get(uri).body(Body::empty()).unwrap();
        app.clone().oneshot(request).await.unwrap()
    }

    pub async fn post_form(app: &Router, uri: &str, body: &str) -> Response {
        let request = Request::post(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap();
        app.clone().oneshot(request).await.unwrap()
    }

    pub async fn post_multipart(
        app: &Router,
        uri: &str,
        filename: &str,
        content_type: Option<&str>,
        bytes: &[u8],
    ) -> Response {
        let mut body = format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\n"
        )
        .into_bytes();
        if let Some(content_type) = content_type {
            body.extend_from_slice(format!("Content-Type: {content_type}\r\n").as_bytes());
        }
        body.extend_from_slice(b"\r\n");
        body.extend_from_slice(bytes);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

        let request = Request::post(uri)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap();
        app.clone().oneshot(request).await.unwrap()
    }

    pub async fn body_string(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    pub async fn body_json(response: Response) -> serde_json::Value {
        serde_json::from_str(&body_string(response).await).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn sweeper_drops_idle_sessions() {
        let sessions = SessionStore::new();
        sessions.create().await;
        tokio::time::sleep(Duration::from_millis(5)).await;

        spawn_session_sweeper(sessions.clone(), Duration::ZERO);
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(sessions.len().await, 0);
    }
}
