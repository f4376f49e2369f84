//! Off-platform contact links (phone dialer and WhatsApp).
//!
//! # Design
//! - Link construction is pure and unit-tested; opening a link is a wasm-only side effect.
//! - A phone number without digits is rejected instead of producing a dead link.
//! - A link that cannot be opened is logged and surfaced as an error toast.

use crate::core::session::{AppAction, ToastKind};
use thiserror::Error;

/// Errors raised while building or opening contact links.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContactError {
    /// The phone number contained no digits at all.
    #[error("phone number has no digits")]
    MissingDigits {
        /// Phone number as supplied.
        phone: String,
    },
    /// The browser refused to open a new window.
    #[error("the browser blocked the new window")]
    Blocked,
    /// Navigating to the link failed.
    #[error("the browser could not open the link")]
    Navigation {
        /// Debug rendering of the browser error.
        detail: String,
    },
}

fn ensure_digits(phone: &str) -> Result<(), ContactError> {
    if phone.chars().any(|ch| ch.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ContactError::MissingDigits {
            phone: phone.to_string(),
        })
    }
}

/// Build a `tel:` URI, dropping whitespace but keeping a leading `+`.
///
/// # Errors
///
/// Returns [`ContactError::MissingDigits`] when the number has no digits.
pub fn tel_uri(phone: &str) -> Result<String, ContactError> {
    ensure_digits(phone)?;
    let compact: String = phone.chars().filter(|ch| !ch.is_whitespace()).collect();
    Ok(format!("tel:{compact}"))
}

/// Build a `wa.me` chat link with a pre-filled message.
///
/// # Errors
///
/// Returns [`ContactError::MissingDigits`] when the number has no digits.
pub fn whatsapp_url(phone: &str, message: &str) -> Result<String, ContactError> {
    ensure_digits(phone)?;
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    Ok(format!(
        "https://wa.me/{digits}?text={}",
        urlencoding::encode(message)
    ))
}

/// Preset WhatsApp text for a listing inquiry.
#[must_use]
pub fn inquiry_message(item_name: &str, supplier_name: &str) -> String {
    format!(
        "Hi {supplier_name}, I found your {item_name} listing on Auto X and would like to know more about availability and delivery."
    )
}

/// Preset WhatsApp text for the support line.
#[must_use]
pub fn support_message(brand: &str) -> String {
    format!("Hi {brand} team, I need help with a construction order.")
}

/// Error toast raised when a contact link cannot be opened.
#[must_use]
pub fn failure_notice(err: &ContactError) -> AppAction {
    AppAction::Notify {
        message: format!("Could not open contact link: {err}."),
        kind: ToastKind::Error,
    }
}

/// Open the device dialer for `phone`.
///
/// # Errors
///
/// Returns [`ContactError`] when the number is unusable or navigation fails.
#[cfg(target_arch = "wasm32")]
pub fn open_dialer(phone: &str) -> Result<(), ContactError> {
    let uri = tel_uri(phone)?;
    gloo::utils::window()
        .location()
        .set_href(&uri)
        .map_err(|err| ContactError::Navigation {
            detail: format!("{err:?}"),
        })
}

/// Open a WhatsApp chat with `phone` in a new tab.
///
/// # Errors
///
/// Returns [`ContactError`] when the number is unusable or the window is not opened.
#[cfg(target_arch = "wasm32")]
pub fn open_whatsapp(phone: &str, message: &str) -> Result<(), ContactError> {
    let url = whatsapp_url(phone, message)?;
    match gloo::utils::window().open_with_url_and_target(&url, "_blank") {
        Ok(Some(_)) => Ok(()),
        Ok(None) => Err(ContactError::Blocked),
        Err(err) => Err(ContactError::Navigation {
            detail: format!("{err:?}"),
        }),
    }
}

/// Log a failed contact attempt and queue an error toast.
#[cfg(target_arch = "wasm32")]
pub fn report_failure(phone: &str, err: &ContactError) {
    gloo::console::error!(format!("contact link not opened for {phone}: {err:?}"));
    crate::core::session::dispatch(failure_notice(err));
}

#[cfg(test)]
mod tests {
    use super::{ContactError, failure_notice, inquiry_message, tel_uri, whatsapp_url};
    use crate::core::session::{AppAction, AppState, ToastKind, reduce};

    #[test]
    fn tel_uri_strips_whitespace_and_keeps_plus() {
        assert_eq!(
            tel_uri("+94 76 1098385").expect("valid phone"),
            "tel:+94761098385"
        );
        assert_eq!(
            tel_uri(" 011\t291 4400 ").expect("valid phone"),
            "tel:0112914400"
        );
    }

    #[test]
    fn whatsapp_url_keeps_digits_and_encodes_text() {
        let url = whatsapp_url("+94 (77) 234-5678", "Hi there & thanks?").expect("valid phone");
        assert_eq!(
            url,
            "https://wa.me/94772345678?text=Hi%20there%20%26%20thanks%3F"
        );
    }

    #[test]
    fn phones_without_digits_are_rejected() {
        assert_eq!(
            tel_uri("call me"),
            Err(ContactError::MissingDigits {
                phone: "call me".to_string()
            })
        );
        assert!(whatsapp_url("", "hello").is_err());
    }

    #[test]
    fn inquiry_names_item_and_supplier() {
        let text = inquiry_message("River Sand", "Kalu Ganga Sand Traders");
        assert!(text.contains("River Sand"));
        assert!(text.starts_with("Hi Kalu Ganga Sand Traders"));
    }

    #[test]
    fn unusable_phone_becomes_error_toast() {
        let err = tel_uri("n/a").expect_err("no digits");
        let notice = failure_notice(&err);
        assert_eq!(
            notice,
            AppAction::Notify {
                message: "Could not open contact link: phone number has no digits.".to_string(),
                kind: ToastKind::Error,
            }
        );

        let state = reduce(&AppState::default(), notice);
        assert_eq!(state.toasts.len(), 1);
        assert_eq!(state.toasts[0].kind, ToastKind::Error);
        assert_eq!(state.toasts[0].timeout_ms, state.toast_timing.default_ms);
    }

    #[test]
    fn blocked_window_notice_names_the_cause() {
        let AppAction::Notify { message, kind } = failure_notice(&ContactError::Blocked) else {
            panic!("expected a notify action");
        };
        assert_eq!(kind, ToastKind::Error);
        assert!(message.contains("blocked the new window"), "{message}");
    }
}
