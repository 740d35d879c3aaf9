//! Chat Routes
//!
//! - POST /api/chat - Forward one message to the chatbot

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use std::sync::Arc;

use oralscan_core::{ChatReply, ChatRequest};

use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;

/// POST /api/chat
pub async fn chat(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> ApiResult<Json<ChatReply>> {
    let Json(req) = payload?;
    if req.message.trim().is_empty() {
        return Err(ApiError::Validation("message cannot be empty".to_string()));
    }

    let reply = state.chatbot.send(&req).await?;
    Ok(Json(reply))
}
