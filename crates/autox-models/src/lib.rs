#![forbid(unsafe_code)]
#![deny(unused_must_use, rustdoc::broken_intra_doc_links, rustdoc::bare_urls)]
#![warn(
    dead_code,
    unused_imports,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
//! Shared records for the Auto X marketplace front-end.
//!
//! Catalog entries are static constants, session records live only in memory
//! and partner registrations are simulated client-side. Everything derives
//! serde so the UI can log a snapshot as JSON without ad-hoc formatting.

pub mod catalog;
pub mod partner;
pub mod request;
pub mod user;

pub use catalog::{District, MaterialCategory, MaterialItem, Supplier, Vehicle, VehicleKind};
pub use partner::{
    BankDetails, InsuranceDetails, Partner, PartnerDocuments, PartnerKind, PartnerRegistration,
    PartnerStatus,
};
pub use request::{DurationUnit, RequestAmount, RequestedItem, ServiceRequest};
pub use user::{User, UserUpdate};
