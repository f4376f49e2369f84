//! Partner dashboard view state.
//!
//! # Design
//! - Figures other than the listing count are placeholders until bookings exist.
//! - Labels are derived from the partner record, never stored.

use autox_models::{Partner, PartnerKind, PartnerStatus};

use crate::catalog;

/// Placeholder monthly booking count.
pub const MOCK_MONTHLY_BOOKINGS: u32 = 23;
/// Placeholder lifetime earnings in rupees.
pub const MOCK_TOTAL_EARNINGS: u64 = 15_420;

/// Dashboard tabs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DashboardTab {
    /// Stats and recent activity.
    #[default]
    Overview,
    /// The partner's vehicles or materials.
    Listings,
    /// Incoming bookings.
    Bookings,
    /// Payouts.
    Earnings,
    /// Business profile.
    Profile,
}

impl DashboardTab {
    /// All tabs in display order.
    pub const ALL: [Self; 5] = [
        Self::Overview,
        Self::Listings,
        Self::Bookings,
        Self::Earnings,
        Self::Profile,
    ];

    /// Tab label; the listings tab is named after what the partner offers.
    #[must_use]
    pub const fn label(self, kind: PartnerKind) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Listings => kind.listings_label(),
            Self::Bookings => "Bookings",
            Self::Earnings => "Earnings",
            Self::Profile => "Profile",
        }
    }
}

/// Headline figures for the overview tab.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DashboardStats {
    /// Listings owned by the partner.
    pub total_listings: u32,
    /// Listings currently live.
    pub active_listings: u32,
    /// Bookings this month.
    pub monthly_bookings: u32,
    /// Lifetime earnings in rupees.
    pub total_earnings: u64,
}

impl DashboardStats {
    /// Figures for a partner.
    ///
    /// Listings are catalog entries published under the partner's business
    /// name, so a freshly registered partner starts at zero.
    #[must_use]
    pub fn for_partner(partner: &Partner) -> Self {
        let owner = partner.details.business_name.as_str();
        let availability: Vec<bool> = match partner.kind() {
            PartnerKind::VehicleOwner => catalog::vehicles()
                .iter()
                .filter(|vehicle| vehicle.owner.name == owner)
                .map(|vehicle| vehicle.available)
                .collect(),
            PartnerKind::MaterialSupplier => catalog::materials()
                .iter()
                .filter(|item| item.supplier.name == owner)
                .map(|item| item.available)
                .collect(),
        };
        Self {
            total_listings: count(availability.len()),
            active_listings: count(availability.iter().filter(|live| **live).count()),
            monthly_bookings: MOCK_MONTHLY_BOOKINGS,
            total_earnings: MOCK_TOTAL_EARNINGS,
        }
    }
}

fn count(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}

/// Status badge text.
#[must_use]
pub const fn status_label(status: PartnerStatus) -> &'static str {
    status.label()
}

/// Status badge class.
#[must_use]
pub const fn status_class(status: PartnerStatus) -> &'static str {
    match status {
        PartnerStatus::Approved => "badge-success",
        PartnerStatus::Pending => "badge-warning",
        PartnerStatus::Rejected => "badge-error",
    }
}

/// Rating with one decimal place.
#[must_use]
pub fn rating_label(rating: f32) -> String {
    format!("{rating:.1}")
}

#[cfg(test)]
mod tests {
    use super::{DashboardStats, DashboardTab, rating_label, status_class, status_label};
    use autox_models::{
        BankDetails, InsuranceDetails, Partner, PartnerDocuments, PartnerKind,
        PartnerRegistration, PartnerStatus,
    };
    use chrono::{TimeZone, Utc};

    fn partner(kind: PartnerKind, business_name: &str) -> Partner {
        let at = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).single().expect("valid time");
        Partner::from_registration(
            PartnerRegistration {
                kind,
                business_name: business_name.to_string(),
                owner_name: "O".to_string(),
                email: "e@x.lk".to_string(),
                phone: "0771234567".to_string(),
                address: String::new(),
                city: String::new(),
                province: String::new(),
                postal_code: String::new(),
                business_license: String::new(),
                tax_id: String::new(),
                years_in_business: 0,
                description: String::new(),
                services: Vec::new(),
                certifications: Vec::new(),
                insurance: InsuranceDetails::default(),
                bank: BankDetails::default(),
                documents: PartnerDocuments::default(),
            },
            at,
        )
    }

    #[test]
    fn listings_tab_follows_partner_kind() {
        assert_eq!(DashboardTab::Listings.label(PartnerKind::VehicleOwner), "Vehicles");
        assert_eq!(
            DashboardTab::Listings.label(PartnerKind::MaterialSupplier),
            "Materials"
        );
        assert_eq!(DashboardTab::Overview.label(PartnerKind::VehicleOwner), "Overview");
    }

    #[test]
    fn fresh_partner_stats() {
        let stats = DashboardStats::for_partner(&partner(PartnerKind::VehicleOwner, "New Co"));
        assert_eq!(stats.total_listings, 0);
        assert_eq!(stats.active_listings, 0);
        assert_eq!(stats.monthly_bookings, 23);
        assert_eq!(stats.total_earnings, 15_420);
    }

    #[test]
    fn listings_are_matched_by_business_name_and_kind() {
        let owner = partner(PartnerKind::VehicleOwner, "Galle Fort Machinery");
        let stats = DashboardStats::for_partner(&owner);
        assert_eq!(stats.total_listings, 1);
        assert_eq!(stats.active_listings, 0);
        let wrong_kind = partner(PartnerKind::MaterialSupplier, "Galle Fort Machinery");
        assert_eq!(DashboardStats::for_partner(&wrong_kind).total_listings, 0);
    }

    #[test]
    fn labels_format() {
        assert_eq!(status_label(PartnerStatus::Pending), "Pending");
        assert_eq!(status_class(PartnerStatus::Rejected), "badge-error");
        assert_eq!(rating_label(0.0), "0.0");
        assert_eq!(rating_label(4.66), "4.7");
    }
}
