//! Core, DOM-free primitives shared by every feature slice.
pub mod config;
pub mod contact;
pub mod quote;
pub mod session;
