//! Ephemeral service request sent to a supplier or vehicle owner.
//!
//! Requests are built when the visitor confirms the request modal, logged and
//! dropped. There is no order lifecycle behind them.

use serde::{Deserialize, Serialize};

/// Rental duration unit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum DurationUnit {
    /// Billed per hour.
    #[default]
    Hours,
    /// Billed per day.
    Days,
}

impl DurationUnit {
    /// Plural label (`hours`/`days`).
    #[must_use]
    pub const fn plural(self) -> &'static str {
        match self {
            Self::Hours => "hours",
            Self::Days => "days",
        }
    }

    /// Singular label (`hour`/`day`).
    #[must_use]
    pub const fn singular(self) -> &'static str {
        match self {
            Self::Hours => "hour",
            Self::Days => "day",
        }
    }
}

/// Which listing the request is about.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RequestedItem {
    /// A material listing.
    Material {
        /// Catalog id.
        id: String,
        /// Listing name.
        name: String,
        /// Supplier name.
        supplier: String,
    },
    /// A vehicle listing.
    Vehicle {
        /// Catalog id.
        id: String,
        /// Listing name.
        name: String,
        /// Owner name.
        owner: String,
    },
}

/// How much of the listing is wanted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RequestAmount {
    /// Material quantity in the listing's unit.
    Quantity {
        /// Always at least one.
        quantity: u32,
        /// Unit of sale.
        unit: String,
    },
    /// Vehicle rental length.
    Rental {
        /// Always at least one.
        duration: u32,
        /// Hours or days.
        unit: DurationUnit,
    },
}

/// A visitor's expressed interest in a listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceRequest {
    /// Requested listing.
    pub item: RequestedItem,
    /// Requested amount.
    pub amount: RequestAmount,
    /// Estimated cost in rupees at list price.
    pub estimated_total: u64,
    /// Optional note for the supplier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}
