//! Signed-in visitor record. Held in memory only.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A visitor who has signed in or signed up.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// Session-scoped identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Optional contact phone.
    pub phone: Option<String>,
}

/// Partial profile update applied on top of the current [`User`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserUpdate {
    /// Replacement display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Replacement phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl User {
    /// Return a copy of this user with the provided fields replaced.
    #[must_use]
    pub fn merged(&self, update: &UserUpdate) -> Self {
        let mut next = self.clone();
        if let Some(name) = &update.name {
            next.name.clone_from(name);
        }
        if let Some(phone) = &update.phone {
            next.phone = Some(phone.clone());
        }
        next
    }
}
