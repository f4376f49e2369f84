//! Partner dashboard and the guest partner pitch.

pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
