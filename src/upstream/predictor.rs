//! Predictor Client
//!
//! Talks to the image classification service:
//!
//! - `GET /` - liveness message
//! - `POST /predict` - multipart `file` upload, returns the classification
//! - `POST /generate-report` - JSON report request, returns a PDF

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;

use oralscan_core::{
    ClassificationResult, PredictTransport, ReportRequest, SelectedImage, TransportError,
    UPLOAD_FIELD,
};

use super::{build_http_client, decode_json, ensure_success, join_url, UpstreamError};
use crate::config::EndpointsConfig;

const SERVICE: &str = "predictor";

/// HTTP client for the image predictor
#[derive(Debug, Clone)]
pub struct PredictorClient {
    client: Client,
    base_url: String,
}

impl PredictorClient {
    /// Create a client for the predictor configured in `endpoints`
    pub fn new(endpoints: &EndpointsConfig) -> Result<Self, UpstreamError> {
        Self::with_base_url(&endpoints.predictor_url, endpoints.request_timeout_secs)
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

    /// Check if the predictor is reachable
    pub async fn health_check(&self) -> Result<(), UpstreamError> {
        let response = self
            .client
            .get(join_url(&self.base_url, "/"))
            .send()
            .await
            .map_err(|e| UpstreamError::from_send(SERVICE, e))?;

        ensure_success(SERVICE, response).await.map(|_| ())
    }

    /// Upload an image for classification
    pub async fn predict(
        &self,
        file_name: &str,
        content_type: Option<&str>,
        bytes: Vec<u8>,
    ) -> Result<ClassificationResult, UpstreamError> {
        let size = bytes.len();
        let mut part = Part::bytes(bytes).file_name(file_name.to_string());
        if let Some(mime) = content_type {
            part = part.mime_str(mime)?;
        }
        let form = Form::new().part(UPLOAD_FIELD, part);

        tracing::debug!(file_name, size, "Sending image to predictor");

        let response = self
            .client
            .post(join_url(&self.base_url, "/predict"))
            .multipart(form)
            .send()
            .await
            .map_err(|e| UpstreamError::from_send(SERVICE, e))?;

        let response = ensure_success(SERVICE, response).await?;
        let result: ClassificationResult = decode_json(SERVICE, response).await?;

        tracing::info!(
            prediction = %result.prediction,
            confidence = ?result.confidence,
            "Predictor classified image"
        );

        Ok(result)
    }

    /// Request a PDF report for a prediction
    pub async fn generate_report(&self, request: &ReportRequest) -> Result<Vec<u8>, UpstreamError> {
        let response = self
            .client
            .post(join_url(&self.base_url, "/generate-report"))
            .json(request)
            .send()
            .await
            .map_err(|e| UpstreamError::from_send(SERVICE, e))?;

        let response = ensure_success(SERVICE, response).await?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| UpstreamError::from_send(SERVICE, e))?;

        tracing::debug!(size = bytes.len(), "Predictor returned report");
        Ok(bytes.to_vec())
    }
}

#[async_trait(?Send)]
impl PredictTransport for PredictorClient {
    type File = SelectedImage;

    async fn predict(&self, file: &SelectedImage) -> Result<ClassificationResult, TransportError> {
        PredictorClient::predict(self, &file.name, Some(&file.mime), file.bytes.clone())
            .await
            .map_err(TransportError::from)
    }

    async fn generate_report(&self, request: &ReportRequest) -> Result<Vec<u8>, TransportError> {
        PredictorClient::generate_report(self, request)
            .await
            .map_err(TransportError::from)
    }
}
