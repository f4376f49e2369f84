//! Auth modal and profile editor form state.
//!
//! # Design
//! - Sign-in is simulated: any well-formed email and non-empty password produce a session user.
//! - Validation only checks presence and shape; nothing is verified against a backend.

use autox_models::{User, UserUpdate};
use thiserror::Error;
use uuid::Uuid;

/// Which variant of the auth modal is shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    /// Existing account.
    #[default]
    SignIn,
    /// New account.
    SignUp,
}

impl AuthMode {
    /// The other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::SignIn => Self::SignUp,
            Self::SignUp => Self::SignIn,
        }
    }

    /// Modal heading.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::SignIn => "Welcome Back",
            Self::SignUp => "Create Account",
        }
    }

    /// Submit button label.
    #[must_use]
    pub const fn submit_label(self) -> &'static str {
        match self {
            Self::SignIn => "Sign In",
            Self::SignUp => "Sign Up",
        }
    }
}

/// Validation failures surfaced inline in the auth modal.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AuthFormError {
    /// Sign-up without a name.
    #[error("Please enter your full name.")]
    MissingName,
    /// Email missing or without `@`.
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    /// Empty password.
    #[error("Please enter your password.")]
    MissingPassword,
}

/// Raw auth modal inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthForm {
    /// Current mode.
    pub mode: AuthMode,
    /// Full name (sign-up only).
    pub name: String,
    /// Email address.
    pub email: String,
    /// Phone number (sign-up only, optional).
    pub phone: String,
    /// Password; never stored on the user.
    pub password: String,
}

impl AuthForm {
    /// Validate and build the session user.
    ///
    /// # Errors
    ///
    /// Returns the first failing [`AuthFormError`] check.
    pub fn to_user(&self) -> Result<User, AuthFormError> {
        let email = self.email.trim();
        let Some((local, domain)) = email.split_once('@') else {
            return Err(AuthFormError::InvalidEmail);
        };
        if local.is_empty() || domain.is_empty() {
            return Err(AuthFormError::InvalidEmail);
        }
        if self.password.is_empty() {
            return Err(AuthFormError::MissingPassword);
        }
        let name = match self.mode {
            AuthMode::SignUp => {
                let name = self.name.trim();
                if name.is_empty() {
                    return Err(AuthFormError::MissingName);
                }
                name.to_string()
            }
            AuthMode::SignIn => local.to_string(),
        };
        let phone = match self.mode {
            AuthMode::SignUp => non_blank(&self.phone),
            AuthMode::SignIn => None,
        };
        Ok(User {
            id: Uuid::new_v4(),
            name,
            email: email.to_string(),
            phone,
        })
    }

    /// Switch modes, keeping the email.
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        self.password.clear();
    }
}

/// Header profile editor inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileForm {
    /// Display name.
    pub name: String,
    /// Phone number.
    pub phone: String,
}

impl ProfileForm {
    /// Pre-fill from the current user.
    #[must_use]
    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            phone: user.phone.clone().unwrap_or_default(),
        }
    }

    /// Changes relative to `user`; blank names are ignored.
    #[must_use]
    pub fn to_update(&self, user: &User) -> UserUpdate {
        let name = non_blank(&self.name).filter(|name| *name != user.name);
        let phone = non_blank(&self.phone).filter(|phone| user.phone.as_ref() != Some(phone));
        UserUpdate { name, phone }
    }
}

fn non_blank(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::{AuthForm, AuthFormError, AuthMode, ProfileForm};
    use autox_models::{User, UserUpdate};
    use uuid::Uuid;

    fn sign_in(email: &str, password: &str) -> AuthForm {
        AuthForm {
            email: email.to_string(),
            password: password.to_string(),
            ..AuthForm::default()
        }
    }

    #[test]
    fn sign_in_derives_name_from_email() {
        let user = sign_in(" nimal@example.lk ", "secret")
            .to_user()
            .expect("valid sign in");
        assert_eq!(user.name, "nimal");
        assert_eq!(user.email, "nimal@example.lk");
        assert_eq!(user.phone, None);
    }

    #[test]
    fn email_must_have_both_sides_of_at() {
        for email in ["", "nimal", "@example.lk", "nimal@"] {
            assert_eq!(
                sign_in(email, "secret").to_user(),
                Err(AuthFormError::InvalidEmail),
                "{email}"
            );
        }
    }

    #[test]
    fn password_is_required() {
        assert_eq!(
            sign_in("a@b.lk", "").to_user(),
            Err(AuthFormError::MissingPassword)
        );
    }

    #[test]
    fn sign_up_requires_name_and_keeps_phone() {
        let mut form = sign_in("kamal@example.lk", "pw");
        form.mode = AuthMode::SignUp;
        assert_eq!(form.to_user(), Err(AuthFormError::MissingName));
        form.name = "Kamal Perera".to_string();
        form.phone = " +94 71 000 0000 ".to_string();
        let user = form.to_user().expect("valid sign up");
        assert_eq!(user.name, "Kamal Perera");
        assert_eq!(user.phone.as_deref(), Some("+94 71 000 0000"));
    }

    #[test]
    fn toggling_mode_clears_password_only() {
        let mut form = sign_in("a@b.lk", "pw");
        form.toggle_mode();
        assert_eq!(form.mode, AuthMode::SignUp);
        assert_eq!(form.email, "a@b.lk");
        assert!(form.password.is_empty());
    }

    #[test]
    fn profile_update_only_carries_changes() {
        let user = User {
            id: Uuid::nil(),
            name: "Nimal".to_string(),
            email: "nimal@example.lk".to_string(),
            phone: Some("0771234567".to_string()),
        };
        let mut form = ProfileForm::from_user(&user);
        assert_eq!(form.to_update(&user), UserUpdate::default());
        form.name = "  ".to_string();
        form.phone = "0719999999".to_string();
        assert_eq!(
            form.to_update(&user),
            UserUpdate {
                name: None,
                phone: Some("0719999999".to_string())
            }
        );
    }
}
