//! Feature slices: DOM-free `state` modules plus wasm-only `view` modules.
pub mod auth;
pub mod materials;
pub mod partner;
pub mod registration;
pub mod request;
pub mod vehicles;
#[cfg(target_arch = "wasm32")]
pub mod site;
