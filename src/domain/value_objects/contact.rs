//! Contact identifier value object
//!
//! A reader's contact is an email-like string. It is valid iff it contains an
//! `@` and its last four characters are one of [`ContactId::ALLOWED_SUFFIXES`].

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, CatalogResult};

/// Validated contact identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ContactId(String);

impl ContactId {
    /// Suffixes a contact may end in
    pub const ALLOWED_SUFFIXES: [&'static str; 3] = [".com", ".edu", ".org"];

    /// Validate and wrap a contact identifier.
    ///
    /// Rejections are logged at `warn` level as well as returned.
    pub fn parse(value: impl Into<String>) -> CatalogResult<Self> {
        let value = value.into();
        if is_valid_contact(&value) {
            Ok(Self(value))
        } else {
            tracing::warn!(contact = %value, "invalid contact format");
            Err(CatalogError::InvalidContact { value })
        }
    }

    /// Get the contact as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Pure format check for a contact identifier.
pub fn is_valid_contact(value: &str) -> bool {
    value.contains('@')
        && ContactId::ALLOWED_SUFFIXES
            .iter()
            .any(|suffix| value.ends_with(suffix))
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ContactId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ContactId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ContactId {
    type Error = CatalogError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<ContactId> for String {
    fn from(contact: ContactId) -> Self {
        contact.0
    }
}
