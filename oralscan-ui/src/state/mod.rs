//! State Management
//!
//! Global application state. Page-level flows keep their own signals.

pub mod global;

pub use global::{provide_global_state, GlobalState};
