//! # OralScan Core
//!
//! Logic shared by the OralScan gateway, CLI and browser UI. Nothing here
//! touches the network directly; requests go through the traits in
//! [`transport`], so the crate builds for both native targets and
//! `wasm32-unknown-unknown`.
//!
//! ## Modules
//!
//! - [`mapper`]: classification label to result card text
//! - [`chat`]: chat widget history and send lifecycle
//! - [`upload`]: image selection, analysis and report download
//! - [`dto`]: predictor and chatbot wire types
//! - [`settings`]: display toggles served to the UI
//!
//! ## Example
//!
//! ```
//! use oralscan_core::mapper::{present, ScreeningLabel};
//!
//! let card = present("Normal");
//! assert_eq!(card.label, ScreeningLabel::Normal);
//! assert_eq!(card.recommendation_steps().len(), 4);
//! ```

pub mod chat;
pub mod dto;
pub mod mapper;
pub mod settings;
pub mod transport;
pub mod upload;

pub use chat::{
    bullet_lines, render_entry, ChatLog, ChatMessage, ChatWidget, ReplyView, Sender,
    CONNECT_ERROR_TEXT, NO_REPLY_TEXT,
};
pub use dto::{
    ChatReply, ChatRequest, ClassificationResult, ReportRequest, REPORT_FILE_NAME, UPLOAD_FIELD,
};
pub use mapper::{present, DiseaseInfo, ResultPresentation, ScreeningLabel};
pub use settings::{ClientSettings, ReplyFormat};
pub use transport::{ChatTransport, PredictTransport, TransportError};
pub use upload::{ImageFile, SelectedImage, UploadAlert, UploadFlow};
