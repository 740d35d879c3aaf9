//! Data Transfer Objects
//!
//! Request and response bodies exchanged with the predictor and chatbot
//! services. The gateway forwards these verbatim, so the same types are used
//! on both sides of it.

use serde::{Deserialize, Serialize};

use crate::mapper::{present, ResultPresentation, ScreeningLabel};

/// File name used for downloaded screening reports
pub const REPORT_FILE_NAME: &str = "Oral_Cancer_Report.pdf";

/// Patient name sent with report requests; the site never collects one
pub const DEFAULT_PATIENT_NAME: &str = "Anonymous";

/// Multipart field name the predictor reads the image from
pub const UPLOAD_FIELD: &str = "file";

// ============================================
// PREDICTOR DTOs
// ============================================

/// Response body of `POST /predict` on the predictor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Class name, e.g. "Oral Cancer" or "Normal"
    pub prediction: String,
    /// Confidence as a percentage (0-100), when the predictor reports one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    /// Where the predictor stored the uploaded image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl ClassificationResult {
    pub fn new(prediction: impl Into<String>) -> Self {
        Self {
            prediction: prediction.into(),
            confidence: None,
            image_url: None,
        }
    }

    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = Some(confidence);
        self
    }

    pub fn label(&self) -> ScreeningLabel {
        ScreeningLabel::from_prediction(&self.prediction)
    }

    /// Run the prediction through the result mapper
    pub fn presentation(&self) -> ResultPresentation {
        present(&self.prediction)
    }

    /// Human readable confidence, e.g. "97.35%"
    pub fn confidence_label(&self) -> Option<String> {
        self.confidence.map(|c| format!("{:.2}%", c))
    }
}

/// Request body of `POST /generate-report` on the predictor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRequest {
    pub patient_name: String,
    pub prediction: String,
    pub confidence: f64,
    pub image_name: String,
}

impl ReportRequest {
    pub fn new(prediction: impl Into<String>, confidence: f64, image_name: impl Into<String>) -> Self {
        Self {
            patient_name: DEFAULT_PATIENT_NAME.to_string(),
            prediction: prediction.into(),
            confidence,
            image_name: image_name.into(),
        }
    }
}

/// Error body returned by the upstream services on non-OK responses
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamErrorBody {
    #[serde(alias = "reply")]
    pub error: String,
}

// ============================================
// CHATBOT DTOs
// ============================================

/// Request body of `POST /predict` on the chatbot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Response body of the chatbot. `reply` may be missing or empty when the
/// model produced nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    #[serde(default)]
    pub reply: Option<String>,
}

impl ChatReply {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: Some(reply.into()),
        }
    }

    /// The reply text, if the model said anything
    pub fn text(&self) -> Option<&str> {
        self.reply.as_deref().filter(|r| !r.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_without_confidence() {
        let result: ClassificationResult =
            serde_json::from_str(r#"{"prediction": "Normal"}"#).unwrap();
        assert_eq!(result.label(), ScreeningLabel::Normal);
        assert_eq!(result.confidence, None);
        assert_eq!(result.confidence_label(), None);
    }

    #[test]
    fn test_classification_full_body() {
        let body = r#"{
            "prediction": "Oral Cancer",
            "confidence": 97.354,
            "image_url": "http://127.0.0.1:5000/uploads/slide.png"
        }"#;
        let result: ClassificationResult = serde_json::from_str(body).unwrap();
        assert_eq!(result.label(), ScreeningLabel::OralCancer);
        assert_eq!(result.confidence_label().as_deref(), Some("97.35%"));
        assert!(result.image_url.is_some());
    }

    #[test]
    fn test_classification_requires_prediction() {
        let parsed = serde_json::from_str::<ClassificationResult>(r#"{"confidence": 50.0}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_report_request_wire_shape() {
        let request = ReportRequest::new("Normal", 88.5, "slide.png");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["patient_name"], "Anonymous");
        assert_eq!(json["prediction"], "Normal");
        assert_eq!(json["confidence"], 88.5);
        assert_eq!(json["image_name"], "slide.png");
    }

    #[test]
    fn test_chat_reply_text() {
        assert_eq!(ChatReply::new("hi there").text(), Some("hi there"));
        assert_eq!(ChatReply::new("").text(), None);

        let missing: ChatReply = serde_json::from_str("{}").unwrap();
        assert_eq!(missing.text(), None);
    }
}
