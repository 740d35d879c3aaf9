//! Predict Routes
//!
//! - POST /api/predict - Forward an uploaded image to the predictor

use axum::{
    extract::{Multipart, State},
    Json,
};
use std::sync::Arc;

use oralscan_core::{ClassificationResult, UPLOAD_FIELD};

use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;

/// POST /api/predict
///
/// Accepts a multipart body with the image in field `file` and returns the
/// predictor's classification unchanged.
pub async fn predict(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> ApiResult<Json<ClassificationResult>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::Validation(format!("Invalid multipart body: {}", e)))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_string();
        if file_name.is_empty() {
            return Err(ApiError::Validation("No file selected".to_string()));
        }
        let content_type = field.content_type().map(str::to_string);

        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::Validation(format!("Failed to read upload: {}", e)))?;

        tracing::debug!(file_name = %file_name, size = bytes.len(), "Received image upload");

        let result = state
            .predictor
            .predict(&file_name, content_type.as_deref(), bytes.to_vec())
            .await?;

        return Ok(Json(result));
    }

    Err(ApiError::Validation("No file uploaded".to_string()))
}
