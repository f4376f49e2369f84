//! Embedded site configuration.
//!
//! # Design
//! - The JSON bundle is compiled in; there is no runtime fetch.
//! - Parsing and validation are separate so tests can feed arbitrary payloads.
//! - A broken bundle never blocks rendering: [`SiteConfig::load`] reports the
//!   error alongside the built-in defaults.

use serde::Deserialize;
use thiserror::Error;

const EMBEDDED: &str = include_str!("../../config/site.json");

/// Errors raised while loading the site configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The bundle was not valid JSON for [`SiteConfig`].
    #[error("site configuration is malformed")]
    Malformed {
        /// Underlying parser failure.
        #[source]
        source: serde_json::Error,
    },
    /// A field failed validation.
    #[error("invalid site configuration field")]
    InvalidField {
        /// Offending field name.
        field: &'static str,
        /// Machine-readable reason for the failure.
        reason: &'static str,
    },
}

impl ConfigError {
    /// Structured payload for log lines, e.g. `support_phone: too_few_digits`.
    #[must_use]
    pub fn detail(&self) -> String {
        match self {
            Self::Malformed { source } => source.to_string(),
            Self::InvalidField { field, reason } => format!("{field}: {reason}"),
        }
    }
}

/// Toast auto-dismiss timings in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct ToastTiming {
    /// Partner registration confirmation.
    pub registration_ms: u32,
    /// Service request confirmation.
    pub request_ms: u32,
    /// Anything else.
    pub default_ms: u32,
}

impl Default for ToastTiming {
    fn default() -> Self {
        Self {
            registration_ms: 5_000,
            request_ms: 3_000,
            default_ms: 4_000,
        }
    }
}

/// Brand and support details rendered across the site.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SiteConfig {
    /// Brand name.
    pub brand: String,
    /// One-line tagline for the footer.
    pub tagline: String,
    /// Support hotline shown in the top bar.
    pub support_phone: String,
    /// Number used for support WhatsApp chats.
    pub support_whatsapp: String,
    /// Support mailbox.
    pub support_email: String,
    /// Head office address.
    pub office_address: String,
    /// Toast timings.
    #[serde(default)]
    pub toasts: ToastTiming,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand: "Auto X".to_string(),
            tagline: "Construction materials and vehicle rentals across Sri Lanka".to_string(),
            support_phone: "+94 76 1098385".to_string(),
            support_whatsapp: "+94 76 1098385".to_string(),
            support_email: "support@autox.lk".to_string(),
            office_address: "No. 45, Galle Road, Colombo 03".to_string(),
            toasts: ToastTiming::default(),
        }
    }
}

impl SiteConfig {
    /// Parse and validate a JSON payload.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Malformed`] for invalid JSON and
    /// [`ConfigError::InvalidField`] when a value fails validation.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(raw).map_err(|source| ConfigError::Malformed { source })?;
        config.validate()?;
        Ok(config)
    }

    /// Load the embedded bundle, falling back to defaults on failure.
    ///
    /// The error is returned next to the fallback so the caller can log it.
    #[must_use]
    pub fn load() -> (Self, Option<ConfigError>) {
        match Self::parse(EMBEDDED) {
            Ok(config) => (config, None),
            Err(err) => (Self::default(), Some(err)),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.brand.trim().is_empty() {
            return Err(invalid("brand", "empty"));
        }
        for (field, phone) in [
            ("support_phone", &self.support_phone),
            ("support_whatsapp", &self.support_whatsapp),
        ] {
            if phone.chars().filter(char::is_ascii_digit).count() < 9 {
                return Err(invalid(field, "too_few_digits"));
            }
        }
        if !self.support_email.contains('@') {
            return Err(invalid("support_email", "missing_at"));
        }
        let timings = [
            ("toasts.registration_ms", self.toasts.registration_ms),
            ("toasts.request_ms", self.toasts.request_ms),
            ("toasts.default_ms", self.toasts.default_ms),
        ];
        for (field, value) in timings {
            if value == 0 {
                return Err(invalid(field, "zero"));
            }
        }
        Ok(())
    }
}

const fn invalid(field: &'static str, reason: &'static str) -> ConfigError {
    ConfigError::InvalidField { field, reason }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, SiteConfig, ToastTiming};

    #[test]
    fn embedded_bundle_is_valid() {
        let (config, err) = SiteConfig::load();
        assert!(err.is_none(), "{err:?}");
        assert_eq!(config.brand, "Auto X");
        assert_eq!(config.support_phone, "+94 76 1098385");
        assert_eq!(config.toasts, ToastTiming::default());
    }

    #[test]
    fn default_matches_embedded_bundle() {
        let (config, _) = SiteConfig::load();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn malformed_json_is_reported() {
        let err = SiteConfig::parse("{ not json").expect_err("should fail");
        assert!(matches!(err, ConfigError::Malformed { .. }));
    }

    #[test]
    fn missing_toasts_section_uses_defaults() {
        let raw = r#"{
            "brand": "Auto X",
            "tagline": "t",
            "support_phone": "+94 76 1098385",
            "support_whatsapp": "+94 76 1098385",
            "support_email": "help@autox.lk",
            "office_address": "Colombo"
        }"#;
        let config = SiteConfig::parse(raw).expect("valid config");
        assert_eq!(config.toasts, ToastTiming::default());
    }

    #[test]
    fn short_phone_is_rejected() {
        let raw = r#"{
            "brand": "Auto X",
            "tagline": "t",
            "support_phone": "1234",
            "support_whatsapp": "+94 76 1098385",
            "support_email": "help@autox.lk",
            "office_address": "Colombo"
        }"#;
        let err = SiteConfig::parse(raw).expect_err("should fail");
        assert!(matches!(
            err,
            ConfigError::InvalidField {
                field: "support_phone",
                reason: "too_few_digits"
            }
        ));
        assert_eq!(err.detail(), "support_phone: too_few_digits");
    }

    #[test]
    fn malformed_detail_carries_parser_position() {
        let err = SiteConfig::parse("{ not json").expect_err("should fail");
        assert!(err.detail().contains("line 1"), "{}", err.detail());
    }

    #[test]
    fn zero_toast_duration_is_rejected() {
        let raw = r#"{
            "brand": "Auto X",
            "tagline": "t",
            "support_phone": "+94 76 1098385",
            "support_whatsapp": "+94 76 1098385",
            "support_email": "help@autox.lk",
            "office_address": "Colombo",
            "toasts": { "registration_ms": 0, "request_ms": 3000, "default_ms": 4000 }
        }"#;
        assert!(matches!(
            SiteConfig::parse(raw),
            Err(ConfigError::InvalidField {
                field: "toasts.registration_ms",
                ..
            })
        ));
    }
}
