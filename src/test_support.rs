//! In-process fakes of the predictor and chatbot for tests

use axum::{
    extract::{Multipart, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tokio::net::TcpListener;

use oralscan_core::{ChatRequest, ReportRequest};

/// Serve `router` on an ephemeral port and return its base URL
pub async fn spawn(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

/// A URL nothing is listening on
pub async fn closed_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

/// Predictor that classifies every image as `prediction` with 97.35%
pub fn fake_predictor(prediction: &str) -> Router {
    Router::new()
        .route("/", get(|| async { "Oral Cancer Prediction API is running" }))
        .route("/predict", post(predict))
        .route("/generate-report", post(report))
        .with_state(prediction.to_string())
}

async fn predict(State(prediction): State<String>, mut multipart: Multipart) -> impl IntoResponse {
    while let Ok(Some(field)) = multipart.next_field().await {
        if field.name() != Some("file") {
            continue;
        }
        let name = field.file_name().unwrap_or("").to_string();
        if name.is_empty() {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "No file selected" })),
            );
        }
        return (
            StatusCode::OK,
            Json(json!({
                "prediction": prediction,
                "confidence": 97.35,
                "image_url": format!("http://127.0.0.1:5000/uploads/{}", name),
            })),
        );
    }

    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "error": "No file part" })),
    )
}

async fn report(Json(request): Json<ReportRequest>) -> impl IntoResponse {
    let body = format!(
        "%PDF-1.4\nPatient: {}\nPrediction: {}\nConfidence: {:.2}%\nImage: {}\n",
        request.patient_name, request.prediction, request.confidence, request.image_name
    );
    ([(header::CONTENT_TYPE, "application/pdf")], body.into_bytes())
}

/// Chatbot that echoes the question back as a single bullet
pub fn fake_chatbot() -> Router {
    Router::new()
        .route("/", get(|| async { "AskOral chatbot is running" }))
        .route(
            "/predict",
            post(|Json(request): Json<ChatRequest>| async move {
                Json(json!({ "reply": format!("• You asked: {}", request.message) }))
            }),
        )
}

/// Chatbot whose model always fails
pub fn failing_chatbot() -> Router {
    Router::new().route(
        "/predict",
        post(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "reply": "AI chatbot error" })),
            )
        }),
    )
}
