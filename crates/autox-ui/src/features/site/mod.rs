//! Static marketing pages: landing, services, about and contact.

pub mod view;
