//! Mock sign-in / sign-up and profile editing.

pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
