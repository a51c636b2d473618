//! Garden HTTP server
//!
//! Serves the rendered note pages and a small JSON API for the browser UI,
//! built with Axum.
//!
//! # Endpoints
//!
//! ## Pages
//! - `GET /`, `GET /notes`, `GET /notes/` - Note index
//! - `GET /notes/:slug` - Note detail (index when the slug is unknown)
//!
//! ## Notes
//! - `GET /api/v1/notes` - List notes
//! - `GET /api/v1/notes/:slug` - Get a note
//!
//! ## Health
//! - `GET /health/live` - Liveness check
//! - `GET /health/ready` - Readiness check
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,ignore
//! use garden::api::{serve, AppState};
//! use garden::config::Config;
//! use garden::notes::NoteRegistry;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default()?;
//!     let registry = Arc::new(NoteRegistry::load(&config.notes.manifest)?);
//!
//!     let state = AppState::new(registry, &config);
//!     serve(state, &config.api).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{http::HeaderValue, http::Method, routing::get, Router};
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::config::ApiConfig;

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let page_routes = Router::new()
        .route("/", get(routes::pages::index))
        .route("/notes", get(routes::pages::index))
        .route("/notes/", get(routes::pages::index))
        .route("/notes/:slug", get(routes::pages::note));

    let api_routes = Router::new()
        .route("/notes", get(routes::notes::list_notes))
        .route("/notes/:slug", get(routes::notes::get_note));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let cors = cors_layer(&state.config);

    // Create shared state
    let shared_state = Arc::new(state);

    Router::new()
        .merge(page_routes)
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(shared_state)
}

/// CORS for the browser UI's dev server; permissive when no origins are set
fn cors_layer(config: &ApiConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin {:?}", origin);
                None
            }
        })
        .collect();

    if origins.is_empty() {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods([Method::GET])
    }
}

/// Start the server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Garden listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Garden shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::notes::{Note, NoteContent, NoteRegistry};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        response::Response,
    };
    use tower::util::ServiceExt;

    fn create_test_app(notes: Vec<Note>) -> Router {
        let registry = Arc::new(NoteRegistry::new(notes).unwrap());
        let state = AppState::new(registry, &Config::default());
        build_router(state)
    }

    fn sample_notes() -> Vec<Note> {
        vec![
            Note::new("intro", "Intro", NoteContent::new("<p>Welcome</p>"), "app/notes/intro.mdx")
                .unwrap(),
            Note::new("tips", "Tips", NoteContent::new("<p>Tip</p>"), "app/notes/tips.mdx")
                .unwrap(),
        ]
    }

    async fn get(app: Router, uri: &str) -> Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_health_live() {
        let response = get(create_test_app(sample_notes()), "/health/live").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_ready() {
        let response = get(create_test_app(sample_notes()), "/health/ready").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_full_reports_note_count() {
        let response = get(create_test_app(sample_notes()), "/health").await;
        assert_eq!(response.status(), StatusCode::OK);

        let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(json["notes"], 2);
        assert_eq!(json["status"], "healthy");
    }

    #[tokio::test]
    async fn test_index_page() {
        let response = get(create_test_app(sample_notes()), "/").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key("accept-ch"));

        let html = body_text(response).await;
        assert!(html.contains("href=\"/notes/intro\""));
        assert!(html.contains("href=\"/notes/tips\""));
        assert!(!html.contains("<header"));
    }

    #[tokio::test]
    async fn test_note_page_wide_viewport() {
        let app = create_test_app(sample_notes());
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/notes/tips")
                    .header("Sec-CH-Viewport-Width", "1280")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let html = body_text(response).await;
        assert!(html.contains("<h1 class=\"text-lg\">Tips</h1>"));
        assert!(html.contains("<aside id=\"sidebar\""));
        assert!(!html.contains("aria-controls"));
        assert!(html.contains("<p>Tip</p>"));
    }

    #[tokio::test]
    async fn test_note_page_narrow_viewport_toggles() {
        let closed = body_text(get(create_test_app(sample_notes()), "/notes/tips?vw=360").await).await;
        assert!(!closed.contains("<aside"));
        assert!(closed.contains("href=\"/notes/tips?menu=open&amp;vw=360\""));

        let open = body_text(
            get(create_test_app(sample_notes()), "/notes/tips?vw=360&menu=open").await,
        )
        .await;
        assert!(open.contains("<aside id=\"sidebar\""));
        assert!(open.contains("href=\"/notes/tips?menu=closed&amp;vw=360\""));
    }

    #[tokio::test]
    async fn test_unknown_note_renders_index() {
        let response = get(create_test_app(sample_notes()), "/notes/missing").await;
        assert_eq!(response.status(), StatusCode::OK);

        let html = body_text(response).await;
        assert!(html.contains("href=\"/notes/intro\""));
        assert!(!html.contains("<header"));
    }

    #[tokio::test]
    async fn test_empty_slug_renders_index() {
        for uri in ["/notes/", "/notes"] {
            let response = get(create_test_app(sample_notes()), uri).await;
            assert_eq!(response.status(), StatusCode::OK, "{}", uri);

            let html = body_text(response).await;
            assert!(html.contains("href=\"/notes/intro\""));
            assert!(!html.contains("<header"));
        }
    }

    #[tokio::test]
    async fn test_repeated_query_params_still_render() {
        let response = get(
            create_test_app(sample_notes()),
            "/notes/tips?menu=open&menu=closed&vw=360&vw=2000",
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let html = body_text(response).await;
        assert!(html.contains("<aside id=\"sidebar\""));
        assert!(html.contains("href=\"/notes/tips?menu=closed&amp;vw=360\""));
    }

    #[tokio::test]
    async fn test_cors_permissive_by_default() {
        let response = create_test_app(sample_notes())
            .oneshot(
                Request::builder()
                    .uri("/api/v1/notes")
                    .header("Origin", "http://localhost:8091")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.headers()["access-control-allow-origin"], "*");
    }

    #[tokio::test]
    async fn test_cors_allow_list() {
        let mut config = Config::default();
        config.api.cors_origins = vec!["http://localhost:8091".to_string()];
        let registry = Arc::new(NoteRegistry::new(sample_notes()).unwrap());
        let app = build_router(AppState::new(registry, &config));

        let request = |origin: &str| {
            Request::builder()
                .uri("/api/v1/notes")
                .header("Origin", origin)
                .body(Body::empty())
                .unwrap()
        };

        let allowed = app.clone().oneshot(request("http://localhost:8091")).await.unwrap();
        assert_eq!(
            allowed.headers()["access-control-allow-origin"],
            "http://localhost:8091"
        );

        let denied = app.oneshot(request("http://evil.example")).await.unwrap();
        assert!(!denied.headers().contains_key("access-control-allow-origin"));
    }

    #[tokio::test]
    async fn test_empty_registry_index() {
        let response = get(create_test_app(Vec::new()), "/notes/anything").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("<ul></ul>"));
    }

    #[tokio::test]
    async fn test_list_notes_api() {
        let response = get(create_test_app(sample_notes()), "/api/v1/notes").await;
        assert_eq!(response.status(), StatusCode::OK);

        let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(json["total"], 2);
        assert_eq!(json["notes"][0]["slug"], "intro");
        assert_eq!(json["notes"][1]["href"], "/notes/tips");
        assert_eq!(json["static_breakpoint"], "sm");
        assert_eq!(
            json["links"]["new_note_url"],
            "https://github.com/jacobparis/garden/new/master/app/notes"
        );
    }

    #[tokio::test]
    async fn test_get_note_api() {
        let response = get(create_test_app(sample_notes()), "/api/v1/notes/intro").await;
        assert_eq!(response.status(), StatusCode::OK);

        let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(json["title"], "Intro");
        assert_eq!(json["html"], "<p>Welcome</p>");
        assert_eq!(
            json["edit_url"],
            "https://github.com/jacobparis/garden/blob/master/app/notes/intro.mdx"
        );
    }

    #[tokio::test]
    async fn test_get_note_api_not_found() {
        let response = get(create_test_app(sample_notes()), "/api/v1/notes/missing").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(json["error"]["code"], "NOT_FOUND");
    }
}
