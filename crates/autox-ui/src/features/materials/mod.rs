//! Materials catalog feature.
//!
//! # Design
//! - Filtering is pure and lives in `state`; the page only renders the subset.
//! - Quotes are local component state until the visitor asks for service.

pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
