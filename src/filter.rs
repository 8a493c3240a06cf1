//! The search predicate applied to transactions.

use serde::{Deserialize, Deserializer};
use time::Date;

use crate::{
    data_store::DataStore,
    transaction::{Transaction, parse_calendar_date},
    user::User,
};

/// The status selector value that matches every status.
pub const ALL_STATUSES_LABEL: &str = "الكل";

/// Which transaction statuses to keep.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StatusFilter {
    /// Keep every status.
    #[default]
    All,
    /// Keep transactions whose status label equals this label exactly.
    Only(String),
}

impl StatusFilter {
    /// Interpret a status selector value. [ALL_STATUSES_LABEL] and the empty
    /// string select all statuses.
    pub fn from_label(label: &str) -> Self {
        if label.is_empty() || label == ALL_STATUSES_LABEL {
            Self::All
        } else {
            Self::Only(label.to_owned())
        }
    }

    /// The selector value for this filter.
    pub fn label(&self) -> &str {
        match self {
            Self::All => ALL_STATUSES_LABEL,
            Self::Only(label) => label,
        }
    }

    fn matches(&self, status: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(label) => label == status,
        }
    }
}

/// The search controls of the dashboard.
///
/// Each control that is left empty matches every transaction.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TransactionFilter {
    /// Matched case-insensitively against user codes (substring) and user
    /// names (prefix).
    #[serde(default)]
    pub search: String,
    /// The earliest transaction date to keep, inclusive.
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub start_date: Option<Date>,
    /// The latest transaction date to keep, inclusive.
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub end_date: Option<Date>,
    /// The status to keep.
    #[serde(default, deserialize_with = "deserialize_status")]
    pub status: StatusFilter,
}

impl TransactionFilter {
    /// Whether `transaction` passes all three search controls.
    ///
    /// `user` is the joined user of `transaction`, if there is one.
    pub fn matches(&self, transaction: &Transaction, user: Option<&User>) -> bool {
        self.matches_code_or_name(transaction, user)
            && self.matches_date_range(transaction)
            && self.status.matches(&transaction.status)
    }

    fn matches_code_or_name(&self, transaction: &Transaction, user: Option<&User>) -> bool {
        let search = self.search.to_lowercase();

        transaction.user_code.to_lowercase().contains(&search)
            || user.is_some_and(|user| user.name.to_lowercase().starts_with(&search))
    }

    fn matches_date_range(&self, transaction: &Transaction) -> bool {
        if self.start_date.is_none() && self.end_date.is_none() {
            return true;
        }

        // A date that cannot be parsed never satisfies a date bound.
        let Some(date) = transaction.calendar_date() else {
            return false;
        };

        self.start_date.is_none_or(|start| date >= start)
            && self.end_date.is_none_or(|end| date <= end)
    }
}

/// Get the transactions in `data_store` that match `filter`, in their
/// original order.
pub fn filter_transactions<'a>(
    data_store: &'a DataStore,
    filter: &TransactionFilter,
) -> Vec<&'a Transaction> {
    data_store
        .transactions()
        .iter()
        .filter(|transaction| {
            filter.matches(transaction, data_store.user_by_code(&transaction.user_code))
        })
        .collect()
}

fn deserialize_optional_date<'de, D>(deserializer: D) -> Result<Option<Date>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = Option::<String>::deserialize(deserializer)?;

    match text.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => parse_calendar_date(text)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid date \"{text}\""))),
    }
}

fn deserialize_status<'de, D>(deserializer: D) -> Result<StatusFilter, D::Error>
where
    D: Deserializer<'de>,
{
    let label = Option::<String>::deserialize(deserializer)?;

    Ok(label
        .as_deref()
        .map(StatusFilter::from_label)
        .unwrap_or_default())
}
