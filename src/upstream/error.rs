//! Upstream Error Types

use oralscan_core::TransportError;
use thiserror::Error;

/// Errors that can occur when calling the predictor or chatbot
#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("{service} unavailable")]
    Unavailable { service: &'static str },

    #[error("{service} request timed out")]
    Timeout { service: &'static str },

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("{service} returned {status}: {message}")]
    Status {
        service: &'static str,
        status: u16,
        message: String,
    },

    #[error("{service} sent a malformed response: {message}")]
    Malformed {
        service: &'static str,
        message: String,
    },
}

impl UpstreamError {
    /// Classify a reqwest send error for `service`
    pub(crate) fn from_send(service: &'static str, e: reqwest::Error) -> Self {
        if e.is_timeout() {
            UpstreamError::Timeout { service }
        } else if e.is_connect() {
            UpstreamError::Unavailable { service }
        } else {
            UpstreamError::Request(e)
        }
    }
}

impl From<UpstreamError> for TransportError {
    fn from(e: UpstreamError) -> Self {
        match e {
            UpstreamError::Status {
                status, message, ..
            } => TransportError::Status { status, message },
            UpstreamError::Malformed { message, .. } => TransportError::Malformed(message),
            other => TransportError::Network(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_conversion() {
        let status = UpstreamError::Status {
            service: "chatbot",
            status: 500,
            message: "AI chatbot error".to_string(),
        };
        assert_eq!(
            TransportError::from(status),
            TransportError::Status {
                status: 500,
                message: "AI chatbot error".to_string()
            }
        );

        let down = UpstreamError::Unavailable { service: "predictor" };
        assert_eq!(
            TransportError::from(down),
            TransportError::Network("predictor unavailable".to_string())
        );
    }
}
