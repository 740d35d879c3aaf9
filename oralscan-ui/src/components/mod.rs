//! UI Components
//!
//! Reusable Leptos components shared by the pages.

pub mod chat_widget;
pub mod loading;
pub mod nav;
pub mod result_card;
pub mod toast;

pub use chat_widget::ChatWidget;
pub use loading::InlineLoading;
pub use nav::Nav;
pub use result_card::ResultCard;
pub use toast::Toast;
