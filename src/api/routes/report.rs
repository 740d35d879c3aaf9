//! Report Routes
//!
//! - POST /api/report - Generate the PDF screening report

use axum::{
    extract::{rejection::JsonRejection, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use oralscan_core::{ReportRequest, REPORT_FILE_NAME};

use crate::api::error::ApiResult;
use crate::api::state::AppState;

/// POST /api/report
///
/// Forwards the report request and returns the PDF as an attachment.
pub async fn generate_report(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ReportRequest>, JsonRejection>,
) -> ApiResult<Response> {
    let Json(req) = payload?;
    let pdf = state.predictor.generate_report(&req).await?;

    let disposition = format!("attachment; filename=\"{}\"", REPORT_FILE_NAME);

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        pdf,
    )
        .into_response())
}
