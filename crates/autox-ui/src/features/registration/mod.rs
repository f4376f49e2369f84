//! Partner registration wizard.
//!
//! # Design
//! - Keep all step and form logic in `state` so it is testable without a DOM.
//! - The modal emits a packaged registration through a callback and owns nothing else.

pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
