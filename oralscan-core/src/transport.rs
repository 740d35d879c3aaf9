//! Transport Seams
//!
//! The chat widget and upload flow talk to their endpoints through these
//! traits. The browser implements them with `fetch`, the CLI with reqwest,
//! and tests with in-memory fakes.
//!
//! Futures are not required to be `Send`: the browser runs everything on a
//! single-threaded event loop.

use async_trait::async_trait;
use thiserror::Error;

use crate::dto::{ChatReply, ChatRequest, ClassificationResult, ReportRequest};

/// Ways a request to an external endpoint can fail
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransportError {
    /// Could not reach the endpoint at all
    #[error("Network error: {0}")]
    Network(String),

    /// The endpoint answered with a non-OK status
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// The body could not be decoded into the expected shape
    #[error("Malformed response: {0}")]
    Malformed(String),
}

/// Sends chat messages
#[async_trait(?Send)]
pub trait ChatTransport {
    async fn send_chat(&self, request: &ChatRequest) -> Result<ChatReply, TransportError>;
}

/// Sends images for classification and requests PDF reports
#[async_trait(?Send)]
pub trait PredictTransport {
    /// Handle to the image being uploaded
    type File;

    async fn predict(&self, file: &Self::File) -> Result<ClassificationResult, TransportError>;

    async fn generate_report(&self, request: &ReportRequest) -> Result<Vec<u8>, TransportError>;
}
