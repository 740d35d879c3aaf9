//! Chatbot Client
//!
//! Talks to the chatbot service: `POST {chat_url}/predict` with
//! `{"message": ...}`, answered by `{"reply": ...}`.

use async_trait::async_trait;
use reqwest::Client;

use oralscan_core::{ChatReply, ChatRequest, ChatTransport, TransportError};

use super::{build_http_client, decode_json, ensure_success, join_url, UpstreamError};
use crate::config::EndpointsConfig;

const SERVICE: &str = "chatbot";

/// HTTP client for the chatbot
#[derive(Debug, Clone)]
pub struct ChatbotClient {
    client: Client,
    base_url: String,
}

impl ChatbotClient {
    /// Create a client for the chatbot configured in `endpoints`
    pub fn new(endpoints: &EndpointsConfig) -> Result<Self, UpstreamError> {
        Self::with_base_url(&endpoints.chat_url, endpoints.request_timeout_secs)
    }

    pub fn with_base_url(base_url: &str, timeout_secs: Option<u64>) -> Result<Self, UpstreamError> {
        Ok(Self {
            client: build_http_client(timeout_secs)?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check if the chatbot is reachable
    pub async fn health_check(&self) -> Result<(), UpstreamError> {
        let response = self
            .client
            .get(join_url(&self.base_url, "/"))
            .send()
            .await
            .map_err(|e| UpstreamError::from_send(SERVICE, e))?;

        ensure_success(SERVICE, response).await.map(|_| ())
    }

    /// Send one user message and return the bot's reply
    pub async fn send(&self, request: &ChatRequest) -> Result<ChatReply, UpstreamError> {
        tracing::debug!(length = request.message.len(), "Sending message to chatbot");

        let response = self
            .client
            .post(join_url(&self.base_url, "/predict"))
            .json(request)
            .send()
            .await
            .map_err(|e| UpstreamError::from_send(SERVICE, e))?;

        let response = ensure_success(SERVICE, response).await?;
        decode_json(SERVICE, response).await
    }
}

#[async_trait(?Send)]
impl ChatTransport for ChatbotClient {
    async fn send_chat(&self, request: &ChatRequest) -> Result<ChatReply, TransportError> {
        self.send(request).await.map_err(TransportError::from)
    }
}
