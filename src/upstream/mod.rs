//! Upstream Service Clients
//!
//! HTTP clients for the two external services OralScan relies on:
//!
//! - [`PredictorClient`]: image classification and PDF reports
//! - [`ChatbotClient`]: medical education chatbot
//!
//! Neither client retries. Failures are classified into
//! [`UpstreamError`] and left to the caller.

pub mod chatbot;
pub mod error;
pub mod predictor;

pub use chatbot::ChatbotClient;
pub use error::UpstreamError;
pub use predictor::PredictorClient;

use reqwest::{Client, Response};
use std::time::Duration;

use oralscan_core::dto::UpstreamErrorBody;

/// Build a reqwest client, with a timeout only when one is configured
pub(crate) fn build_http_client(timeout_secs: Option<u64>) -> Result<Client, UpstreamError> {
    let mut builder = Client::builder();
    if let Some(secs) = timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    Ok(builder.build()?)
}

/// Join a base URL and an absolute path without doubling slashes
pub(crate) fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Turn a non-OK response into [`UpstreamError::Status`], preferring the
/// service's own error message when it sends one.
pub(crate) async fn ensure_success(
    service: &'static str,
    response: Response,
) -> Result<Response, UpstreamError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<UpstreamErrorBody>(&text)
        .map(|body| body.error)
        .unwrap_or(text);

    tracing::warn!(service, status = status.as_u16(), %message, "Upstream returned an error");

    Err(UpstreamError::Status {
        service,
        status: status.as_u16(),
        message,
    })
}

/// Decode a JSON body, reporting shape mismatches as malformed responses
pub(crate) async fn decode_json<T: serde::de::DeserializeOwned>(
    service: &'static str,
    response: Response,
) -> Result<T, UpstreamError> {
    let bytes = response
        .bytes()
        .await
        .map_err(|e| UpstreamError::from_send(service, e))?;

    serde_json::from_slice(&bytes).map_err(|e| UpstreamError::Malformed {
        service,
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("http://127.0.0.1:5000", "/predict"), "http://127.0.0.1:5000/predict");
        assert_eq!(join_url("https://bot.example.org/", "predict"), "https://bot.example.org/predict");
    }

    #[test]
    fn test_build_client_with_and_without_timeout() {
        assert!(build_http_client(None).is_ok());
        assert!(build_http_client(Some(5)).is_ok());
    }
}
