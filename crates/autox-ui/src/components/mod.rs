//! Shared Yew building blocks used across feature views.
pub(crate) mod counter;
pub(crate) mod empty_state;
pub(crate) mod footer;
pub(crate) mod header;
pub(crate) mod modal;
pub(crate) mod steps;
pub(crate) mod supplier_card;
pub(crate) mod toast;
