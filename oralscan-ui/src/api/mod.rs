//! Gateway API
//!
//! Everything the UI sends over the network goes through [`client`].

pub mod client;

pub use client::*;
