//! OralScan Gateway API
//!
//! HTTP layer built with Axum. The browser only ever talks to this server;
//! the predictor and chatbot URLs stay on the server side.
//!
//! # Endpoints
//!
//! ## Screening
//! - `POST /api/predict` - Classify an uploaded image (multipart field `file`)
//! - `POST /api/report` - Generate the PDF report for a prediction
//!
//! ## Chat
//! - `POST /api/chat` - Send one message to the chatbot
//!
//! ## UI
//! - `GET /api/settings` - Display settings
//! - any other path - compiled UI, falling back to `index.html`
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,no_run
//! use oralscan::api::{serve, AppState};
//! use oralscan::config::Config;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env();
//!     let state = AppState::from_config(&config)?;
//!     serve(state).await?;
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderValue, StatusCode},
    routing::{get, post},
    Router,
};
use std::path::Path;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::config::ServerConfig;

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/predict", post(routes::predict::predict))
        .route("/report", post(routes::report::generate_report))
        .route("/chat", post(routes::chat::chat))
        .route("/settings", get(routes::settings::get_settings))
        .layer(DefaultBodyLimit::max(state.server.max_upload_bytes()));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let cors = cors_layer(&state.server.cors_origins);
    let static_dir = static_root(&state.server);

    let router = Router::new()
        .nest("/api", api_routes)
        .nest("/health", health_routes);

    let router = match static_dir {
        Some(dir) => {
            tracing::info!("Serving UI from {}", dir);
            let index = Path::new(&dir).join("index.html");
            router.fallback_service(ServeDir::new(&dir).fallback(ServeFile::new(index)))
        }
        None => router.fallback(|| async { StatusCode::NOT_FOUND }),
    };

    router
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(Arc::new(state))
}

/// Static UI directory, if one is configured and present on disk
fn static_root(server: &ServerConfig) -> Option<String> {
    let dir = server.static_dir.as_deref().filter(|d| !d.trim().is_empty())?;
    if Path::new(dir).is_dir() {
        Some(dir.to_string())
    } else {
        tracing::warn!("Static directory {} not found, UI will not be served", dir);
        None
    }
}

/// CORS for the listed origins; any origin when the list is empty
fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin {:?}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Start the gateway
pub async fn serve(state: AppState) -> Result<(), ApiError> {
    let addr = state.server.addr();
    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("OralScan gateway listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("OralScan gateway shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
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
                tracing::error!("Failed to install SIGTERM handler: {}", e);
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
    use crate::api::dto::HealthResponse;
    use crate::api::error::ErrorResponse;
    use crate::config::Config;
    use crate::test_support::{closed_url, fake_chatbot, fake_predictor, spawn};
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use oralscan_core::{ChatReply, ClassificationResult, ClientSettings, ReplyFormat};
    use tower::util::ServiceExt;

    const BOUNDARY: &str = "oralscan-test-boundary";

    async fn create_test_app() -> Router {
        let predictor = spawn(fake_predictor("Oral Cancer")).await;
        let chatbot = spawn(fake_chatbot()).await;
        app_with(&predictor, &chatbot, None)
    }

    fn app_with(predictor: &str, chatbot: &str, static_dir: Option<String>) -> Router {
        let mut config = Config::default();
        config.endpoints.predictor_url = predictor.to_string();
        config.endpoints.chat_url = chatbot.to_string();
        config.server.static_dir = static_dir;
        config.ui.reply_format = ReplyFormat::Bullets;

        build_router(AppState::from_config(&config).unwrap())
    }

    fn multipart(field: &str, file_name: &str, data: &str) -> Request<Body> {
        let body = format!(
            "--{b}\r\nContent-Disposition: form-data; name=\"{field}\"; filename=\"{file_name}\"\r\n\
             Content-Type: image/png\r\n\r\n{data}\r\n--{b}--\r\n",
            b = BOUNDARY,
        );
        Request::builder()
            .method("POST")
            .uri("/api/predict")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={}", BOUNDARY),
            )
            .body(Body::from(body))
            .unwrap()
    }

    fn json_post(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
        axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec()
    }

    #[tokio::test]
    async fn test_health_live() {
        let app = create_test_app().await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health/live")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_full_health_reports_degraded() {
        let predictor = spawn(fake_predictor("Normal")).await;
        let app = app_with(&predictor, &closed_url().await, None);

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let health: HealthResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(health.status, "degraded");
        assert_eq!(health.predictor, "ok");
        assert_eq!(health.chatbot, "error");
    }

    #[tokio::test]
    async fn test_ready_requires_both_upstreams() {
        let app = app_with(&closed_url().await, &closed_url().await, None);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health/ready")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_settings() {
        let app = create_test_app().await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/settings")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let settings: ClientSettings = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(settings.reply_format, ReplyFormat::Bullets);
        assert!(settings.show_confidence);
    }

    #[tokio::test]
    async fn test_predict_forwards_image() {
        let app = create_test_app().await;

        let response = app.oneshot(multipart("file", "slide.png", "PNG")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let result: ClassificationResult =
            serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(result.prediction, "Oral Cancer");
        assert_eq!(result.confidence_label().as_deref(), Some("97.35%"));
    }

    #[tokio::test]
    async fn test_predict_without_file_field() {
        let app = create_test_app().await;

        let response = app.oneshot(multipart("image", "slide.png", "PNG")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ErrorResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(error.error.code, "VALIDATION_ERROR");
        assert_eq!(error.error.message, "Validation error: No file uploaded");
        assert!(!error.request_id.is_empty());
    }

    #[tokio::test]
    async fn test_predict_with_predictor_down() {
        let chatbot = spawn(fake_chatbot()).await;
        let app = app_with(&closed_url().await, &chatbot, None);

        let response = app.oneshot(multipart("file", "slide.png", "PNG")).await.unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_report_is_pdf_attachment() {
        let app = create_test_app().await;

        let response = app
            .oneshot(json_post(
                "/api/report",
                serde_json::json!({
                    "patient_name": "Anonymous",
                    "prediction": "Oral Cancer",
                    "confidence": 97.35,
                    "image_name": "slide.png"
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/pdf");
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"Oral_Cancer_Report.pdf\""
        );
        assert!(body_bytes(response).await.starts_with(b"%PDF"));
    }

    #[tokio::test]
    async fn test_chat_forwards_message() {
        let app = create_test_app().await;

        let response = app
            .oneshot(json_post("/api/chat", serde_json::json!({ "message": "hello" })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let reply: ChatReply = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(reply.text(), Some("• You asked: hello"));
    }

    #[tokio::test]
    async fn test_blank_chat_is_rejected() {
        let app = create_test_app().await;

        let response = app
            .oneshot(json_post("/api/chat", serde_json::json!({ "message": "   " })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_malformed_json_uses_error_envelope() {
        let app = create_test_app().await;

        for uri in ["/api/chat", "/api/report"] {
            let request = Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{\"message\": "))
                .unwrap();

            let response = app.clone().oneshot(request).await.unwrap();

            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", uri);
            let error: ErrorResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
            assert_eq!(error.error.code, "VALIDATION_ERROR");
            assert!(!error.request_id.is_empty());
        }
    }

    #[tokio::test]
    async fn test_unknown_path_without_ui_is_404() {
        let app = create_test_app().await;

        let response = app
            .oneshot(Request::builder().uri("/upload").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_ui_routes_fall_back_to_index() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<html>oralscan</html>").unwrap();

        let predictor = spawn(fake_predictor("Normal")).await;
        let chatbot = spawn(fake_chatbot()).await;
        let app = app_with(
            &predictor,
            &chatbot,
            Some(dir.path().to_string_lossy().to_string()),
        );

        let response = app
            .oneshot(Request::builder().uri("/creators").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_bytes(response).await, b"<html>oralscan</html>");
    }

    #[test]
    fn test_cors_layer_accepts_empty_list() {
        let _ = cors_layer(&[]);
        let _ = cors_layer(&["http://localhost:8084".to_string(), "bad\norigin".to_string()]);
    }
}
