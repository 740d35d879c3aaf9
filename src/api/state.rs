//! Application State
//!
//! Shared state accessible by all API handlers. Built once at startup and
//! never mutated afterwards.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Instant;

use oralscan_core::ClientSettings;

use crate::config::{Config, ServerConfig};
use crate::upstream::{ChatbotClient, PredictorClient, UpstreamError};

/// Shared application state for all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    /// Image predictor client
    pub predictor: Arc<PredictorClient>,
    /// Chatbot client
    pub chatbot: Arc<ChatbotClient>,
    /// Display settings handed to the UI
    pub settings: ClientSettings,
    /// Server configuration
    pub server: Arc<ServerConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(
        predictor: PredictorClient,
        chatbot: ChatbotClient,
        settings: ClientSettings,
        server: ServerConfig,
    ) -> Self {
        Self {
            predictor: Arc::new(predictor),
            chatbot: Arc::new(chatbot),
            settings,
            server: Arc::new(server),
            start_time: Instant::now(),
            started_at: Utc::now(),
        }
    }

    /// Build clients and settings from a resolved configuration
    pub fn from_config(config: &Config) -> Result<Self, UpstreamError> {
        Ok(Self::new(
            PredictorClient::new(&config.endpoints)?,
            ChatbotClient::new(&config.endpoints)?,
            config.ui.client_settings(),
            config.server.clone(),
        ))
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
