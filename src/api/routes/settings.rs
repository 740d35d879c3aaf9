//! Settings Routes
//!
//! - GET /api/settings - Display settings for the UI

use axum::{extract::State, Json};
use std::sync::Arc;

use oralscan_core::ClientSettings;

use crate::api::state::AppState;

/// GET /api/settings
pub async fn get_settings(State(state): State<Arc<AppState>>) -> Json<ClientSettings> {
    Json(state.settings)
}
