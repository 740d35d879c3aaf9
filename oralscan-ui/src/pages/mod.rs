//! Pages
//!
//! Top-level page components for each route.

pub mod about;
pub mod creators;
pub mod home;
pub mod upload;

pub use about::About;
pub use creators::Creators;
pub use home::Home;
pub use upload::Upload;
