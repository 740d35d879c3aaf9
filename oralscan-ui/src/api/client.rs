//! HTTP API Client
//!
//! Functions for communicating with the OralScan gateway. The gateway
//! forwards to the predictor and chatbot, so the browser never needs their
//! addresses.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use wasm_bindgen::{JsCast, JsValue};

use oralscan_core::{
    ChatReply, ChatRequest, ChatTransport, ClassificationResult, ClientSettings, ImageFile,
    PredictTransport, ReportRequest, TransportError, UPLOAD_FIELD,
};

/// Default API base URL: the gateway serving this page
pub const DEFAULT_API_BASE: &str = "/api";

const API_BASE_KEY: &str = "oralscan_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_BASE_KEY).ok().flatten())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

// ============ Response Types ============

#[derive(Debug, serde::Deserialize)]
struct ApiErrorResponse {
    error: ApiErrorBody,
}

#[derive(Debug, serde::Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Pull the message out of a gateway error body
fn parse_error_body(text: &str) -> Option<String> {
    serde_json::from_str::<ApiErrorResponse>(text)
        .ok()
        .map(|body| body.error.message)
}

fn network_error(e: gloo_net::Error) -> TransportError {
    TransportError::Network(e.to_string())
}

fn js_error(e: JsValue) -> TransportError {
    TransportError::Network(format!("{:?}", e))
}

async fn ensure_ok(response: Response) -> Result<Response, TransportError> {
    if response.ok() {
        return Ok(response);
    }

    let status = response.status();
    let text = response.text().await.unwrap_or_default();
    let message = parse_error_body(&text).unwrap_or_else(|| response.status_text());

    Err(TransportError::Status { status, message })
}

// ============ Transports ============

/// An image picked in the browser
#[derive(Debug, Clone)]
pub struct PickedFile(pub web_sys::File);

impl ImageFile for PickedFile {
    fn file_name(&self) -> String {
        self.0.name()
    }
}

/// The gateway, as seen by the upload flow and the chat widget
#[derive(Debug, Clone, Copy, Default)]
pub struct Gateway;

#[async_trait(?Send)]
impl PredictTransport for Gateway {
    type File = PickedFile;

    async fn predict(&self, file: &PickedFile) -> Result<ClassificationResult, TransportError> {
        let form = web_sys::FormData::new().map_err(js_error)?;
        form.append_with_blob_and_filename(UPLOAD_FIELD, &file.0, &file.0.name())
            .map_err(js_error)?;

        let response = Request::post(&format!("{}/predict", get_api_base()))
            .body(form)
            .map_err(network_error)?
            .send()
            .await
            .map_err(network_error)?;

        ensure_ok(response)
            .await?
            .json::<ClassificationResult>()
            .await
            .map_err(|e| TransportError::Malformed(e.to_string()))
    }

    async fn generate_report(&self, request: &ReportRequest) -> Result<Vec<u8>, TransportError> {
        let response = Request::post(&format!("{}/report", get_api_base()))
            .json(request)
            .map_err(network_error)?
            .send()
            .await
            .map_err(network_error)?;

        ensure_ok(response)
            .await?
            .binary()
            .await
            .map_err(network_error)
    }
}

#[async_trait(?Send)]
impl ChatTransport for Gateway {
    async fn send_chat(&self, request: &ChatRequest) -> Result<ChatReply, TransportError> {
        let response = Request::post(&format!("{}/chat", get_api_base()))
            .json(request)
            .map_err(network_error)?
            .send()
            .await
            .map_err(network_error)?;

        ensure_ok(response)
            .await?
            .json::<ChatReply>()
            .await
            .map_err(|e| TransportError::Malformed(e.to_string()))
    }
}

// ============ API Functions ============

/// Fetch display settings
pub async fn fetch_settings() -> Result<ClientSettings, String> {
    let response = Request::get(&format!("{}/settings", get_api_base()))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("Gateway returned {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Hand `bytes` to the browser as a file download
pub fn download_bytes(bytes: &[u8], file_name: &str, mime: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window")?;
    let document = window.document().ok_or("No document")?;

    let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(bytes));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(mime);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(|e| format!("{:?}", e))?;

    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(|e| format!("{:?}", e))?;

    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")
        .map_err(|e| format!("{:?}", e))?
        .dyn_into()
        .map_err(|_| "Not an anchor element".to_string())?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();

    let _ = web_sys::Url::revoke_object_url(&url);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_parse_gateway_error() {
        let body = r#"{"error":{"code":"SERVICE_UNAVAILABLE","message":"predictor unavailable"},"request_id":"abc"}"#;
        assert_eq!(parse_error_body(body).as_deref(), Some("predictor unavailable"));
    }

    #[wasm_bindgen_test]
    fn test_parse_non_json_error() {
        assert_eq!(parse_error_body("Bad Gateway"), None);
    }

    #[wasm_bindgen_test]
    fn test_download_bytes_in_browser() {
        assert_eq!(download_bytes(b"%PDF-1.4", "Oral_Cancer_Report.pdf", "application/pdf"), Ok(()));
    }
}
