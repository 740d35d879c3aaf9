//! # OralScan
//!
//! Gateway and command-line tooling for an AI-assisted oral cancer image
//! screening site. Classification, report generation and chatbot replies
//! are delegated to external HTTP services; this crate owns their
//! configuration and forwards to them.
//!
//! ## Modules
//!
//! - [`api`]: Axum gateway serving the UI and `/api/*`
//! - [`upstream`]: reqwest clients for the predictor and chatbot
//! - [`config`]: TOML configuration with environment overrides
//! - [`logging`]: tracing subscriber setup
//!
//! Presentation logic shared with the browser lives in [`oralscan_core`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use oralscan::{config::Config, upstream::PredictorClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env();
//!     let predictor = PredictorClient::new(&config.endpoints)?;
//!
//!     let image = std::fs::read("slide.png")?;
//!     let result = predictor.predict("slide.png", Some("image/png"), image).await?;
//!
//!     println!("{}", result.presentation().message);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod logging;
pub mod upstream;

#[cfg(test)]
mod test_support;

pub use api::{build_router, serve, ApiError, AppState};
pub use config::{Config, ConfigError};
pub use upstream::{ChatbotClient, PredictorClient, UpstreamError};
