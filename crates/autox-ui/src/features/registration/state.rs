//! Partner registration wizard state.
//!
//! # Design
//! - Keep form inputs as strings for lossless editing; convert only on submit.
//! - Navigation is linear over five steps; only the first step gates advancing.
//! - A successful submit resets the wizard so the result is emitted once.

use autox_models::{
    BankDetails, InsuranceDetails, PartnerDocuments, PartnerKind, PartnerRegistration,
};
use thiserror::Error;

/// Services offered by vehicle owners.
pub const VEHICLE_SERVICES: [&str; 8] = [
    "Excavation Services",
    "Transportation",
    "Crane Operations",
    "Demolition",
    "Material Handling",
    "Site Preparation",
    "Road Construction",
    "Landscaping",
];

/// Services offered by material suppliers.
pub const MATERIAL_SERVICES: [&str; 8] = [
    "Sand Supply",
    "Gravel Supply",
    "Concrete Supply",
    "Steel Supply",
    "Brick Supply",
    "Timber Supply",
    "Roofing Materials",
    "Plumbing Supplies",
];

/// Certifications a partner can declare.
pub const CERTIFICATIONS: [&str; 6] = [
    "ISO 9001",
    "OSHA Certified",
    "DOT Certified",
    "EPA Compliant",
    "Quality Assurance Certified",
    "Safety Management Certified",
];

/// Service options for a partner type.
#[must_use]
pub const fn services_for(kind: PartnerKind) -> &'static [&'static str] {
    match kind {
        PartnerKind::VehicleOwner => &VEHICLE_SERVICES,
        PartnerKind::MaterialSupplier => &MATERIAL_SERVICES,
    }
}

/// Wizard steps in order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RegistrationStep {
    /// Choose vehicle owner or material supplier.
    #[default]
    PartnerType,
    /// Business identity and contact.
    BusinessInfo,
    /// Address, services and certifications.
    AddressServices,
    /// Insurance policy and payout account.
    InsuranceBanking,
    /// Verification documents.
    Documents,
}

impl RegistrationStep {
    /// Total number of steps.
    pub const COUNT: u8 = 5;

    /// All steps in order.
    pub const ALL: [Self; 5] = [
        Self::PartnerType,
        Self::BusinessInfo,
        Self::AddressServices,
        Self::InsuranceBanking,
        Self::Documents,
    ];

    /// One-based position.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::PartnerType => 1,
            Self::BusinessInfo => 2,
            Self::AddressServices => 3,
            Self::InsuranceBanking => 4,
            Self::Documents => 5,
        }
    }

    /// Following step; the last step stays put.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::PartnerType => Self::BusinessInfo,
            Self::BusinessInfo => Self::AddressServices,
            Self::AddressServices => Self::InsuranceBanking,
            Self::InsuranceBanking | Self::Documents => Self::Documents,
        }
    }

    /// Preceding step; the first step stays put.
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::PartnerType | Self::BusinessInfo => Self::PartnerType,
            Self::AddressServices => Self::BusinessInfo,
            Self::InsuranceBanking => Self::AddressServices,
            Self::Documents => Self::InsuranceBanking,
        }
    }

    /// Heading for the step panel.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::PartnerType => "Choose Your Partner Type",
            Self::BusinessInfo => "Business Information",
            Self::AddressServices => "Address & Services",
            Self::InsuranceBanking => "Insurance & Banking",
            Self::Documents => "Document Upload",
        }
    }

    /// Short label for the step indicator.
    #[must_use]
    pub const fn short_label(self) -> &'static str {
        match self {
            Self::PartnerType => "Type",
            Self::BusinessInfo => "Business",
            Self::AddressServices => "Address",
            Self::InsuranceBanking => "Banking",
            Self::Documents => "Documents",
        }
    }

    /// Whether this is the final step.
    #[must_use]
    pub const fn is_last(self) -> bool {
        matches!(self, Self::Documents)
    }
}

/// Free-text fields of the wizard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    /// Business name.
    BusinessName,
    /// Owner name.
    OwnerName,
    /// Business email.
    Email,
    /// Business phone.
    Phone,
    /// Business license number.
    BusinessLicense,
    /// Tax id.
    TaxId,
    /// Years in business (numeric text).
    YearsInBusiness,
    /// Description.
    Description,
    /// Street address.
    Address,
    /// City.
    City,
    /// Province.
    Province,
    /// Postal code.
    PostalCode,
    /// Insurance provider.
    InsuranceProvider,
    /// Insurance policy number.
    PolicyNumber,
    /// Insurance expiry date.
    ExpiryDate,
    /// Bank account holder.
    AccountHolder,
    /// Bank name.
    BankName,
    /// Bank account number.
    AccountNumber,
    /// Bank branch code.
    BranchCode,
}

/// Document slots on the last step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Document {
    /// Business license scan.
    BusinessLicense,
    /// Insurance certificate.
    Insurance,
    /// Tax certificate.
    TaxCertificate,
    /// Bank statement.
    BankStatement,
}

impl Document {
    /// All slots in display order.
    pub const ALL: [Self; 4] = [
        Self::BusinessLicense,
        Self::Insurance,
        Self::TaxCertificate,
        Self::BankStatement,
    ];

    /// Slot label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::BusinessLicense => "Business License",
            Self::Insurance => "Insurance Certificate",
            Self::TaxCertificate => "Tax Certificate",
            Self::BankStatement => "Bank Statement",
        }
    }

    /// Upload prompt under the slot label.
    #[must_use]
    pub const fn hint(self) -> &'static str {
        match self {
            Self::BusinessLicense => "Upload your business license document",
            Self::Insurance => "Upload your insurance certificate",
            Self::TaxCertificate => "Upload your tax registration certificate",
            Self::BankStatement => "Upload recent bank statement",
        }
    }
}

/// Raw wizard inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    /// Selected partner type.
    pub partner_kind: Option<PartnerKind>,
    /// Business name.
    pub business_name: String,
    /// Owner name.
    pub owner_name: String,
    /// Business email.
    pub email: String,
    /// Business phone.
    pub phone: String,
    /// Business license number.
    pub business_license: String,
    /// Tax id.
    pub tax_id: String,
    /// Years in business as typed.
    pub years_in_business: String,
    /// Description.
    pub description: String,
    /// Street address.
    pub address: String,
    /// City.
    pub city: String,
    /// Province.
    pub province: String,
    /// Postal code.
    pub postal_code: String,
    /// Ticked services.
    pub services: Vec<String>,
    /// Ticked certifications.
    pub certifications: Vec<String>,
    /// Insurance provider.
    pub insurance_provider: String,
    /// Policy number.
    pub policy_number: String,
    /// Expiry date.
    pub expiry_date: String,
    /// Account holder.
    pub account_holder: String,
    /// Bank name.
    pub bank_name: String,
    /// Account number.
    pub account_number: String,
    /// Branch code.
    pub branch_code: String,
    /// Picked document names.
    pub documents: PartnerDocuments,
}

fn toggle(list: &mut Vec<String>, value: &str) {
    if let Some(idx) = list.iter().position(|existing| existing == value) {
        list.remove(idx);
    } else {
        list.push(value.to_string());
    }
}

impl RegistrationForm {
    /// Choose the partner type, pruning services the new type does not offer.
    pub fn set_partner_kind(&mut self, kind: PartnerKind) {
        self.partner_kind = Some(kind);
        let offered = services_for(kind);
        self.services
            .retain(|service| offered.contains(&service.as_str()));
    }

    /// Tick or untick a service.
    pub fn toggle_service(&mut self, service: &str) {
        toggle(&mut self.services, service);
    }

    /// Tick or untick a certification.
    pub fn toggle_certification(&mut self, certification: &str) {
        toggle(&mut self.certifications, certification);
    }

    /// Whether a service is ticked.
    #[must_use]
    pub fn has_service(&self, service: &str) -> bool {
        self.services.iter().any(|existing| existing == service)
    }

    /// Whether a certification is ticked.
    #[must_use]
    pub fn has_certification(&self, certification: &str) -> bool {
        self.certifications
            .iter()
            .any(|existing| existing == certification)
    }

    /// Current value of a text field.
    #[must_use]
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::BusinessName => &self.business_name,
            Field::OwnerName => &self.owner_name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::BusinessLicense => &self.business_license,
            Field::TaxId => &self.tax_id,
            Field::YearsInBusiness => &self.years_in_business,
            Field::Description => &self.description,
            Field::Address => &self.address,
            Field::City => &self.city,
            Field::Province => &self.province,
            Field::PostalCode => &self.postal_code,
            Field::InsuranceProvider => &self.insurance_provider,
            Field::PolicyNumber => &self.policy_number,
            Field::ExpiryDate => &self.expiry_date,
            Field::AccountHolder => &self.account_holder,
            Field::BankName => &self.bank_name,
            Field::AccountNumber => &self.account_number,
            Field::BranchCode => &self.branch_code,
        }
    }

    /// Replace a text field.
    pub fn set_field(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::BusinessName => &mut self.business_name,
            Field::OwnerName => &mut self.owner_name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::BusinessLicense => &mut self.business_license,
            Field::TaxId => &mut self.tax_id,
            Field::YearsInBusiness => &mut self.years_in_business,
            Field::Description => &mut self.description,
            Field::Address => &mut self.address,
            Field::City => &mut self.city,
            Field::Province => &mut self.province,
            Field::PostalCode => &mut self.postal_code,
            Field::InsuranceProvider => &mut self.insurance_provider,
            Field::PolicyNumber => &mut self.policy_number,
            Field::ExpiryDate => &mut self.expiry_date,
            Field::AccountHolder => &mut self.account_holder,
            Field::BankName => &mut self.bank_name,
            Field::AccountNumber => &mut self.account_number,
            Field::BranchCode => &mut self.branch_code,
        };
        *slot = value;
    }

    /// Record (or clear) the picked file name for a document slot.
    pub fn set_document(&mut self, document: Document, file_name: Option<String>) {
        let slot = match document {
            Document::BusinessLicense => &mut self.documents.business_license,
            Document::Insurance => &mut self.documents.insurance,
            Document::TaxCertificate => &mut self.documents.tax_certificate,
            Document::BankStatement => &mut self.documents.bank_statement,
        };
        *slot = file_name.filter(|name| !name.trim().is_empty());
    }

    /// Picked file name for a document slot.
    #[must_use]
    pub fn document(&self, document: Document) -> Option<&str> {
        match document {
            Document::BusinessLicense => self.documents.business_license.as_deref(),
            Document::Insurance => self.documents.insurance.as_deref(),
            Document::TaxCertificate => self.documents.tax_certificate.as_deref(),
            Document::BankStatement => self.documents.bank_statement.as_deref(),
        }
    }

    /// Years in business; anything that is not a non-negative integer is zero.
    #[must_use]
    pub fn years_in_business(&self) -> u32 {
        self.years_in_business.trim().parse().unwrap_or(0)
    }
}

/// Errors raised when submitting the wizard.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationError {
    /// Submit was attempted before the final step.
    #[error("registration can only be submitted from the final step")]
    NotOnFinalStep,
    /// No partner type was chosen.
    #[error("partner type is required")]
    MissingPartnerKind,
}

/// Wizard navigation plus form state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Wizard {
    /// Current step.
    pub step: RegistrationStep,
    /// Collected inputs.
    pub form: RegistrationForm,
}

impl Wizard {
    /// Whether "Next" is enabled.
    #[must_use]
    pub const fn can_advance(&self) -> bool {
        !matches!(self.step, RegistrationStep::PartnerType) || self.form.partner_kind.is_some()
    }

    /// Move forward when allowed.
    pub const fn advance(&mut self) {
        if self.can_advance() {
            self.step = self.step.next();
        }
    }

    /// Move back one step.
    pub const fn back(&mut self) {
        self.step = self.step.prev();
    }

    /// Progress bar fill, 20 to 100.
    #[must_use]
    pub const fn progress_percent(&self) -> u8 {
        self.step.number() * (100 / RegistrationStep::COUNT)
    }

    /// Package the registration and reset the wizard.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrationError::NotOnFinalStep`] before step five and
    /// [`RegistrationError::MissingPartnerKind`] without a partner type. The
    /// wizard is left untouched on error.
    pub fn submit(&mut self) -> Result<PartnerRegistration, RegistrationError> {
        if !self.step.is_last() {
            return Err(RegistrationError::NotOnFinalStep);
        }
        let kind = self
            .form
            .partner_kind
            .ok_or(RegistrationError::MissingPartnerKind)?;
        let form = std::mem::take(&mut self.form);
        self.step = RegistrationStep::default();
        let years_in_business = form.years_in_business();
        Ok(PartnerRegistration {
            kind,
            business_name: form.business_name,
            owner_name: form.owner_name,
            email: form.email,
            phone: form.phone,
            address: form.address,
            city: form.city,
            province: form.province,
            postal_code: form.postal_code,
            business_license: form.business_license,
            tax_id: form.tax_id,
            years_in_business,
            description: form.description,
            services: form.services,
            certifications: form.certifications,
            insurance: InsuranceDetails {
                provider: form.insurance_provider,
                policy_number: form.policy_number,
                expiry_date: form.expiry_date,
            },
            bank: BankDetails {
                account_holder: form.account_holder,
                bank_name: form.bank_name,
                account_number: form.account_number,
                branch_code: form.branch_code,
            },
            documents: form.documents,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_wizard() -> Wizard {
        let mut wizard = Wizard::default();
        wizard.form.set_partner_kind(PartnerKind::VehicleOwner);
        wizard.advance();
        wizard.form.set_field(Field::BusinessName, "Lanka Earthmovers".to_string());
        wizard.form.set_field(Field::OwnerName, "Kamal Perera".to_string());
        wizard.form.set_field(Field::Email, "ops@earthmovers.lk".to_string());
        wizard.form.set_field(Field::Phone, "+94 71 555 0101".to_string());
        wizard.form.set_field(Field::BusinessLicense, "PV-00123".to_string());
        wizard.form.set_field(Field::TaxId, "TIN-884512".to_string());
        wizard.form.set_field(Field::YearsInBusiness, "7".to_string());
        wizard.form.set_field(Field::Description, "Site clearing".to_string());
        wizard.advance();
        wizard.form.set_field(Field::Address, "12 Temple Road".to_string());
        wizard.form.set_field(Field::City, "Kurunegala".to_string());
        wizard.form.set_field(Field::Province, "North Western".to_string());
        wizard.form.set_field(Field::PostalCode, "60000".to_string());
        wizard.form.toggle_service("Excavation Services");
        wizard.form.toggle_service("Demolition");
        wizard.form.toggle_certification("ISO 9001");
        wizard.advance();
        wizard.form.set_field(Field::InsuranceProvider, "Ceylinco".to_string());
        wizard.form.set_field(Field::PolicyNumber, "POL-77".to_string());
        wizard.form.set_field(Field::ExpiryDate, "2026-12-31".to_string());
        wizard.form.set_field(Field::AccountHolder, "Lanka Earthmovers".to_string());
        wizard.form.set_field(Field::BankName, "Commercial Bank".to_string());
        wizard.form.set_field(Field::AccountNumber, "8001234567".to_string());
        wizard.form.set_field(Field::BranchCode, "045".to_string());
        wizard.advance();
        wizard
            .form
            .set_document(Document::BusinessLicense, Some("license.pdf".to_string()));
        wizard
            .form
            .set_document(Document::BankStatement, Some("statement.pdf".to_string()));
        wizard
    }

    #[test]
    fn steps_walk_in_order_and_saturate() {
        let numbers: Vec<u8> = RegistrationStep::ALL.iter().map(|step| step.number()).collect();
        assert_eq!(numbers, [1, 2, 3, 4, 5]);
        assert_eq!(RegistrationStep::Documents.next(), RegistrationStep::Documents);
        assert_eq!(RegistrationStep::PartnerType.prev(), RegistrationStep::PartnerType);
        assert_eq!(
            RegistrationStep::BusinessInfo.next().prev(),
            RegistrationStep::BusinessInfo
        );
    }

    #[test]
    fn first_step_requires_partner_type() {
        let mut wizard = Wizard::default();
        assert!(!wizard.can_advance());
        wizard.advance();
        assert_eq!(wizard.step, RegistrationStep::PartnerType);
        wizard.form.set_partner_kind(PartnerKind::MaterialSupplier);
        assert!(wizard.can_advance());
        wizard.advance();
        assert_eq!(wizard.step, RegistrationStep::BusinessInfo);
        // Later steps never block.
        assert!(wizard.can_advance());
    }

    #[test]
    fn progress_tracks_step() {
        let mut wizard = filled_wizard();
        assert_eq!(wizard.progress_percent(), 100);
        wizard.back();
        wizard.back();
        assert_eq!(wizard.step, RegistrationStep::AddressServices);
        assert_eq!(wizard.progress_percent(), 60);
    }

    #[test]
    fn submit_packages_every_step_exactly_once() {
        let mut wizard = filled_wizard();
        let registration = wizard.submit().expect("final step submit");
        assert_eq!(registration.kind, PartnerKind::VehicleOwner);
        assert_eq!(registration.business_name, "Lanka Earthmovers");
        assert_eq!(registration.years_in_business, 7);
        assert_eq!(registration.city, "Kurunegala");
        assert_eq!(
            registration.services,
            ["Excavation Services".to_string(), "Demolition".to_string()]
        );
        assert_eq!(registration.certifications, ["ISO 9001".to_string()]);
        assert_eq!(registration.insurance.policy_number, "POL-77");
        assert_eq!(registration.bank.branch_code, "045");
        assert_eq!(
            registration.documents.business_license.as_deref(),
            Some("license.pdf")
        );
        assert_eq!(registration.documents.insurance, None);

        assert_eq!(wizard, Wizard::default());
        assert_eq!(wizard.submit(), Err(RegistrationError::NotOnFinalStep));
    }

    #[test]
    fn submit_before_final_step_keeps_state() {
        let mut wizard = filled_wizard();
        wizard.back();
        let before = wizard.clone();
        assert_eq!(wizard.submit(), Err(RegistrationError::NotOnFinalStep));
        assert_eq!(wizard, before);
    }

    #[test]
    fn submit_without_kind_fails() {
        let mut wizard = Wizard {
            step: RegistrationStep::Documents,
            form: RegistrationForm::default(),
        };
        assert_eq!(wizard.submit(), Err(RegistrationError::MissingPartnerKind));
    }

    #[test]
    fn switching_kind_prunes_services() {
        let mut form = RegistrationForm::default();
        form.set_partner_kind(PartnerKind::VehicleOwner);
        form.toggle_service("Transportation");
        form.set_partner_kind(PartnerKind::MaterialSupplier);
        assert!(form.services.is_empty());
        form.toggle_service("Sand Supply");
        form.set_partner_kind(PartnerKind::MaterialSupplier);
        assert!(form.has_service("Sand Supply"));
    }

    #[test]
    fn toggles_add_then_remove() {
        let mut form = RegistrationForm::default();
        form.toggle_certification("EPA Compliant");
        assert!(form.has_certification("EPA Compliant"));
        form.toggle_certification("EPA Compliant");
        assert!(!form.has_certification("EPA Compliant"));
    }

    #[test]
    fn invalid_years_become_zero() {
        let mut form = RegistrationForm::default();
        for raw in ["", "abc", "-3", "2.5"] {
            form.set_field(Field::YearsInBusiness, raw.to_string());
            assert_eq!(form.years_in_business(), 0, "{raw}");
        }
        form.set_field(Field::YearsInBusiness, " 12 ".to_string());
        assert_eq!(form.years_in_business(), 12);
    }

    #[test]
    fn blank_document_names_clear_the_slot() {
        let mut form = RegistrationForm::default();
        form.set_document(Document::Insurance, Some("cert.png".to_string()));
        assert_eq!(form.document(Document::Insurance), Some("cert.png"));
        form.set_document(Document::Insurance, Some("  ".to_string()));
        assert_eq!(form.document(Document::Insurance), None);
    }

    #[test]
    fn every_document_slot_lands_in_the_registration() {
        let mut form = RegistrationForm::default();
        for document in Document::ALL {
            assert!(!document.hint().is_empty(), "{document:?}");
            form.set_document(document, Some(format!("{}.pdf", document.label())));
        }
        let docs = &form.documents;
        assert_eq!(docs.business_license.as_deref(), Some("Business License.pdf"));
        assert_eq!(docs.insurance.as_deref(), Some("Insurance Certificate.pdf"));
        assert_eq!(docs.tax_certificate.as_deref(), Some("Tax Certificate.pdf"));
        assert_eq!(docs.bank_statement.as_deref(), Some("Bank Statement.pdf"));
    }

    #[test]
    fn service_lists_match_partner_kind() {
        assert!(services_for(PartnerKind::VehicleOwner).contains(&"Crane Operations"));
        assert!(services_for(PartnerKind::MaterialSupplier).contains(&"Timber Supply"));
        assert_eq!(CERTIFICATIONS.len(), 6);
    }
}
