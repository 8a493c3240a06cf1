//! Transfer records as they appear in the data file.

use serde::Deserialize;
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

/// The status label of a transfer that went through.
pub const COMPLETED_LABEL: &str = "مكتملة";
/// The status label of a transfer that was refused.
pub const REJECTED_LABEL: &str = "مرفوضة";

const ISO_DATE_FORMAT: &[BorrowedFormatItem] =
    format_description!("[year]-[month padding:none]-[day padding:none]");
const SLASH_DATE_FORMAT: &[BorrowedFormatItem] =
    format_description!("[year]/[month padding:none]/[day padding:none]");

/// A single money transfer made to a user.
///
/// Transactions have no ID, they are identified by their position in the
/// data file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// The code of the user that received the transfer.
    pub user_code: String,
    /// The amount of money transferred.
    pub amount: f64,
    /// The time of day the transfer was made, displayed as is.
    #[serde(default)]
    pub time: String,
    /// The date the transfer was made, e.g. "2024-01-31".
    #[serde(default)]
    pub date: String,
    /// The localized status label, see [COMPLETED_LABEL] and [REJECTED_LABEL].
    pub status: String,
}

/// The known outcomes of a transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionStatus {
    /// The status label is [COMPLETED_LABEL].
    Completed,
    /// The status label is [REJECTED_LABEL].
    Rejected,
    /// Any other status label.
    Unknown,
}

impl TransactionStatus {
    /// Classify a status label. Labels are compared exactly.
    pub fn from_label(label: &str) -> Self {
        match label {
            COMPLETED_LABEL => Self::Completed,
            REJECTED_LABEL => Self::Rejected,
            _ => Self::Unknown,
        }
    }
}

impl Transaction {
    /// Create a transaction with an empty time.
    pub fn new(user_code: &str, amount: f64, date: &str, status: &str) -> Self {
        Self {
            user_code: user_code.to_owned(),
            amount,
            time: String::new(),
            date: date.to_owned(),
            status: status.to_owned(),
        }
    }

    /// Set the time of day.
    pub fn time(mut self, time: &str) -> Self {
        self.time = time.to_owned();
        self
    }

    /// The classified status of the transfer.
    pub fn status(&self) -> TransactionStatus {
        TransactionStatus::from_label(&self.status)
    }

    /// The transfer date as a calendar date, or `None` if the date string
    /// cannot be parsed.
    pub fn calendar_date(&self) -> Option<Date> {
        parse_calendar_date(&self.date)
    }
}

/// Parse a calendar date in the format "YYYY-MM-DD" or "YYYY/MM/DD".
///
/// Anything after a 'T' or space (e.g. a time of day) is ignored.
pub(crate) fn parse_calendar_date(text: &str) -> Option<Date> {
    let text = text.trim();
    let date_part = text.split(['T', ' ']).next().unwrap_or(text);

    Date::parse(date_part, ISO_DATE_FORMAT)
        .or_else(|_| Date::parse(date_part, SLASH_DATE_FORMAT))
        .ok()
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::{
        COMPLETED_LABEL, REJECTED_LABEL, Transaction, TransactionStatus, parse_calendar_date,
    };

    #[test]
    fn deserializes_camel_case_fields() {
        let json = r#"{
            "userCode": "A1",
            "amount": 150.5,
            "time": "10:30",
            "date": "2024-01-05",
            "status": "مكتملة"
        }"#;

        let got: Transaction = serde_json::from_str(json).unwrap();

        assert_eq!(
            got,
            Transaction::new("A1", 150.5, "2024-01-05", COMPLETED_LABEL).time("10:30")
        );
    }

    #[test]
    fn classifies_status_labels() {
        assert_eq!(
            TransactionStatus::from_label(COMPLETED_LABEL),
            TransactionStatus::Completed
        );
        assert_eq!(
            TransactionStatus::from_label(REJECTED_LABEL),
            TransactionStatus::Rejected
        );
        assert_eq!(
            TransactionStatus::from_label("pending"),
            TransactionStatus::Unknown
        );
    }

    #[test]
    fn parses_dates() {
        assert_eq!(parse_calendar_date("2024-01-05"), Some(date!(2024 - 01 - 05)));
        assert_eq!(parse_calendar_date("2024/12/31"), Some(date!(2024 - 12 - 31)));
        assert_eq!(
            parse_calendar_date("2024-03-09T08:15:00"),
            Some(date!(2024 - 03 - 09))
        );
        assert_eq!(
            parse_calendar_date(" 2024-03-09 08:15 "),
            Some(date!(2024 - 03 - 09))
        );
    }

    #[test]
    fn unparseable_date_is_none() {
        let transaction = Transaction::new("A1", 1.0, "yesterday", COMPLETED_LABEL);

        assert_eq!(transaction.calendar_date(), None);
        assert_eq!(parse_calendar_date(""), None);
        assert_eq!(parse_calendar_date("2024-13-01"), None);
    }
}
