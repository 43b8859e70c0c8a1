use axum::{extract::Query, response::Html, routing::get, Router};
use serde::Deserialize;

use crate::pages::{catalog, home, landing};

pub fn ui_routes() -> Router {
    Router::new()
        .route("/", get(home_page))
        .route("/landing", get(landing_page))
}

#[derive(Debug, Default, Deserialize)]
pub struct HomeQuery {
    pub notice: Option<String>,
}

/// Home page. `?notice=<key>` shows one of the quick-action notices; unknown
/// keys are ignored.
pub async fn home_page(Query(query): Query<HomeQuery>) -> Html<String> {
    let active = query.notice.as_deref().and_then(catalog::home_notice);
    if let (Some(key), None) = (query.notice.as_deref(), active) {
        tracing::debug!(notice = %key, "ignoring unknown home notice");
    }
    Html(home::render(active))
}

pub async fn landing_page() -> Html<String> {
    Html(landing::render())
}

#[cfg(test)]
mod tests {
    use crate::test_support::{body_string, get, test_router};
    use axum::http::StatusCode;

    #[tokio::test]
    async fn home_renders_with_and_without_notice() {
        let app = test_router();

        let response = get(&app, "/").await;
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains("Platform Impact"));
        assert!(!html.contains(r#"role="status""#));

        let html = body_string(get(&app, "/?notice=demo").await).await;
        assert!(html.contains("Demo available in the main app!"));

        let html = body_string(get(&app, "/?notice=bogus").await).await;
        assert!(!html.contains(r#"role="status""#));
    }

    #[tokio::test]
    async fn landing_is_served() {
        let app = test_router();
        let response = get(&app, "/landing").await;
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains("Simple, Transparent Pricing"));
    }
}
