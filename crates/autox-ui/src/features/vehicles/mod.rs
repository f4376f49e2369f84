//! Vehicle rental catalog feature.

pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
