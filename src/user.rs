//! The users that receive transfers.

use serde::Deserialize;

/// Displayed in place of a missing governorate.
pub const MISSING_GOVERNORATE_LABEL: &str = "N/A";

/// A recipient of transfers, matched to transactions by `code`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct User {
    /// The code that transactions use to refer to this user.
    pub code: String,
    /// The user's display name.
    pub name: String,
    /// The governorate the user lives in, if known.
    #[serde(default)]
    pub governorate: Option<String>,
}

impl User {
    /// Create a user without a governorate.
    pub fn new(code: &str, name: &str) -> Self {
        Self {
            code: code.to_owned(),
            name: name.to_owned(),
            governorate: None,
        }
    }

    /// Set the governorate.
    pub fn governorate(mut self, governorate: &str) -> Self {
        self.governorate = Some(governorate.to_owned());
        self
    }

    /// The governorate for display, or [MISSING_GOVERNORATE_LABEL] if it is
    /// missing or empty.
    pub fn governorate_label(&self) -> &str {
        self.governorate
            .as_deref()
            .filter(|governorate| !governorate.is_empty())
            .unwrap_or(MISSING_GOVERNORATE_LABEL)
    }
}
