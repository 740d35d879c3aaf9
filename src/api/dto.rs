//! Gateway-only Data Transfer Objects
//!
//! Bodies forwarded to and from the upstream services live in
//! `oralscan_core::dto`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Full health status
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status: healthy, degraded, unhealthy
    pub status: String,
    /// Predictor status: ok or error
    pub predictor: String,
    /// Chatbot status: ok or error
    pub chatbot: String,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    pub started_at: DateTime<Utc>,
    /// Application version
    pub version: String,
}
