//! Service request confirmation modal.
//!
//! # Design
//! - Requests are logged as JSON and dropped; there is no delivery channel.

pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
