//! Partner (vehicle owner / material supplier) registration records.
//!
//! A registration is packaged by the five-step wizard and promoted to a
//! [`Partner`] client-side. Nothing is reviewed or stored; the status starts
//! as [`PartnerStatus::Pending`] and stays there for the session.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What the partner brings to the platform.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PartnerKind {
    /// Rents out construction vehicles and machinery.
    VehicleOwner,
    /// Supplies construction materials.
    MaterialSupplier,
}

impl PartnerKind {
    /// Human-readable partner type.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::VehicleOwner => "Vehicle Owner",
            Self::MaterialSupplier => "Material Supplier",
        }
    }

    /// Plural noun for the partner's listings.
    #[must_use]
    pub const fn listings_label(self) -> &'static str {
        match self {
            Self::VehicleOwner => "Vehicles",
            Self::MaterialSupplier => "Materials",
        }
    }

    /// Singular noun for one listing.
    #[must_use]
    pub const fn listing_label(self) -> &'static str {
        match self {
            Self::VehicleOwner => "Vehicle",
            Self::MaterialSupplier => "Material",
        }
    }
}

/// Review state of a partner application.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PartnerStatus {
    /// Submitted, awaiting review.
    Pending,
    /// Accepted onto the platform.
    Approved,
    /// Declined.
    Rejected,
}

impl PartnerStatus {
    /// Capitalised status label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }
}

/// Insurance policy covering the partner's business.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct InsuranceDetails {
    /// Insurer name.
    pub provider: String,
    /// Policy number.
    pub policy_number: String,
    /// Expiry date as entered (`YYYY-MM-DD` from the date picker).
    pub expiry_date: String,
}

/// Payout bank account.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BankDetails {
    /// Name on the account.
    pub account_holder: String,
    /// Bank name.
    pub bank_name: String,
    /// Account number.
    pub account_number: String,
    /// Branch code.
    pub branch_code: String,
}

/// Names of the verification documents picked in the last wizard step.
///
/// Files are never read or uploaded; only the chosen file name is kept.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PartnerDocuments {
    /// Business registration / license scan.
    pub business_license: Option<String>,
    /// Insurance certificate.
    pub insurance: Option<String>,
    /// Tax registration certificate.
    pub tax_certificate: Option<String>,
    /// Recent bank statement.
    pub bank_statement: Option<String>,
}

/// Everything the registration wizard collects.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PartnerRegistration {
    /// Partner type chosen on step one.
    pub kind: PartnerKind,
    /// Registered business name.
    pub business_name: String,
    /// Owner or contact person.
    pub owner_name: String,
    /// Business email.
    pub email: String,
    /// Business phone.
    pub phone: String,
    /// Street address.
    pub address: String,
    /// City or town.
    pub city: String,
    /// Province.
    pub province: String,
    /// Postal code.
    pub postal_code: String,
    /// Business license / registration number.
    pub business_license: String,
    /// Tax identification number.
    pub tax_id: String,
    /// Years the business has operated.
    pub years_in_business: u32,
    /// Free-form business description.
    pub description: String,
    /// Services offered, in the order they were ticked.
    pub services: Vec<String>,
    /// Certifications held, in the order they were ticked.
    pub certifications: Vec<String>,
    /// Insurance policy.
    pub insurance: InsuranceDetails,
    /// Payout account.
    pub bank: BankDetails,
    /// Verification document names.
    pub documents: PartnerDocuments,
}

/// A registered partner as held in the session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Partner {
    /// Timestamp-derived identifier.
    pub id: String,
    /// Review status.
    pub status: PartnerStatus,
    /// When the wizard was submitted.
    pub registered_at: DateTime<Utc>,
    /// Average customer rating (zero until rated).
    pub rating: f32,
    /// Jobs completed through the platform.
    pub total_jobs: u32,
    /// Submitted registration details.
    #[serde(flatten)]
    pub details: PartnerRegistration,
}

impl Partner {
    /// Promote a wizard submission into a pending partner.
    ///
    /// The identifier is the submission time in milliseconds since the epoch.
    #[must_use]
    pub fn from_registration(details: PartnerRegistration, registered_at: DateTime<Utc>) -> Self {
        Self {
            id: registered_at.timestamp_millis().to_string(),
            status: PartnerStatus::Pending,
            registered_at,
            rating: 0.0,
            total_jobs: 0,
            details,
        }
    }

    /// Partner type shortcut.
    #[must_use]
    pub const fn kind(&self) -> PartnerKind {
        self.details.kind
    }
}

#[cfg(test)]
mod tests {
    use super::{
        BankDetails, InsuranceDetails, Partner, PartnerDocuments, PartnerKind, PartnerRegistration,
        PartnerStatus,
    };
    use chrono::{TimeZone, Utc};

    fn registration() -> PartnerRegistration {
        PartnerRegistration {
            kind: PartnerKind::VehicleOwner,
            business_name: "Lanka Earthmovers".to_string(),
            owner_name: "Kamal Perera".to_string(),
            email: "ops@earthmovers.lk".to_string(),
            phone: "+94 71 555 0101".to_string(),
            address: "12 Temple Road".to_string(),
            city: "Kurunegala".to_string(),
            province: "North Western".to_string(),
            postal_code: "60000".to_string(),
            business_license: "PV-00123".to_string(),
            tax_id: "TIN-884512".to_string(),
            years_in_business: 7,
            description: "Excavation and site clearing".to_string(),
            services: vec!["Excavation Services".to_string()],
            certifications: Vec::new(),
            insurance: InsuranceDetails::default(),
            bank: BankDetails::default(),
            documents: PartnerDocuments::default(),
        }
    }

    #[test]
    fn from_registration_starts_pending_with_timestamp_id() {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).single().expect("valid time");
        let partner = Partner::from_registration(registration(), at);
        assert_eq!(partner.id, at.timestamp_millis().to_string());
        assert_eq!(partner.status, PartnerStatus::Pending);
        assert_eq!(partner.total_jobs, 0);
        assert!(partner.rating.abs() < f32::EPSILON);
        assert_eq!(partner.kind(), PartnerKind::VehicleOwner);
        assert_eq!(partner.details, registration());
    }

    #[test]
    fn partner_serializes_flat() {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).single().expect("valid time");
        let value = serde_json::to_value(Partner::from_registration(registration(), at))
            .expect("serialize partner");
        assert_eq!(value["business_name"], "Lanka Earthmovers");
        assert_eq!(value["status"], "pending");
        assert_eq!(value["kind"], "vehicle_owner");
    }
}
