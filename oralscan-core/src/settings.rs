//! Client Display Settings
//!
//! Toggles between the observed variants of the upload page and chat
//! widget. The gateway serves these from its configuration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How bot replies are rendered in the chat widget
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplyFormat {
    /// Show the reply text as-is
    #[default]
    Plain,
    /// Keep only bullet lines, without their markers
    Bullets,
}

impl FromStr for ReplyFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "plain" => Ok(ReplyFormat::Plain),
            "bullets" => Ok(ReplyFormat::Bullets),
            other => Err(format!("unknown reply format '{}' (expected plain or bullets)", other)),
        }
    }
}

impl fmt::Display for ReplyFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplyFormat::Plain => f.write_str("plain"),
            ReplyFormat::Bullets => f.write_str("bullets"),
        }
    }
}

/// Settings the UI fetches from `GET /api/settings`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientSettings {
    /// Show the predictor's confidence next to the result
    #[serde(default = "default_true")]
    pub show_confidence: bool,
    #[serde(default)]
    pub reply_format: ReplyFormat,
    /// Offer the PDF report download
    #[serde(default = "default_true")]
    pub report_enabled: bool,
}

fn default_true() -> bool {
    true
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            show_confidence: true,
            reply_format: ReplyFormat::Plain,
            report_enabled: true,
        }
    }
}
