//! Main HTTP server and routing.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    response::Html,
    routing::{get, post},
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, instrument};

use textra_config::Settings;
use textra_core::{ObjectStore, OcrService, WaitPolicy};

use crate::health;
use crate::pages;
use crate::result;
use crate::status;
use crate::upload;

/// Application state shared across routes.
///
/// Clients are injected at startup; handlers never construct their own.
#[derive(Clone)]
pub struct GatewayState {
    pub store: Arc<dyn ObjectStore>,
    pub ocr: Arc<dyn OcrService>,
    pub wait_policy: WaitPolicy,
    pub max_upload_bytes: usize,
    pub started_at: Instant,
}

impl GatewayState {
    pub fn new(store: Arc<dyn ObjectStore>, ocr: Arc<dyn OcrService>, settings: &Settings) -> Self {
        Self {
            store,
            ocr,
            wait_policy: WaitPolicy {
                interval: settings.poll_interval(),
                timeout: settings.result_timeout(),
            },
            max_upload_bytes: settings.max_upload_bytes(),
            started_at: Instant::now(),
        }
    }
}

async fn index() -> Html<String> {
    Html(pages::index_page())
}

/// Build the router with every route and middleware.
pub fn build_router(state: GatewayState) -> Router {
    let body_limit = state.max_upload_bytes;
    Router::new()
        .route("/", get(index))
        .route("/upload", post(upload::upload_page))
        .route("/api/upload", post(upload::upload_api))
        .route("/status", post(status::job_status))
        .route(
            "/result",
            get(result::result_requires_post).post(result::job_result),
        )
        .route("/api/health", get(health::get_health))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Starts the HTTP server and runs until Ctrl-C.
#[instrument(skip(state))]
pub async fn start_server(addr: SocketAddr, state: GatewayState) -> Result<()> {
    let app = build_router(state);

    info!("Textra HTTP server listening on {}", addr);
    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Textra HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use crate::test_support::{MockOcr, MockStore, read_text, router};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_index_page() {
        let store = MockStore::default();
        let ocr = MockOcr::succeeding_after(0, vec![]);

        let response = router(&store, &ocr)
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(read_text(response).await.contains("enctype=\"multipart/form-data\""));
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let store = MockStore::default();
        let ocr = MockOcr::succeeding_after(0, vec![]);

        let response = router(&store, &ocr)
            .oneshot(Request::get("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
