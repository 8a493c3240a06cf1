//! Aggregate statistics for the summary cards and charts.

use crate::{
    data_store::DataStore,
    transaction::{Transaction, TransactionStatus},
};

/// Where the recipient card gets its label from.
///
/// The label always comes from the first transaction of the filtered set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum RecipientLabel {
    /// The transaction's raw user code.
    #[default]
    #[value(name = "code")]
    UserCode,
    /// The name of the transaction's user. Falls back to the user code when
    /// the transaction has no matching user.
    #[value(name = "name")]
    UserName,
}

/// The number of completed and rejected transfers, as shown in the charts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(super) struct StatusCounts {
    pub completed: usize,
    pub rejected: usize,
}

/// The figures shown in the summary cards.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct TransferSummary {
    /// The label of the first transfer's recipient.
    pub recipient: String,
    /// The sum of the amounts of completed transfers.
    pub total_amount: f64,
    pub counts: StatusCounts,
}

/// Summarize a filtered set of transactions.
///
/// Every transaction counts, including those without a matching user.
/// The completed count is everything that is not rejected, so transfers with
/// an unknown status are counted as completed.
///
/// Returns `None` if `transactions` is empty.
pub(super) fn summarize(
    transactions: &[&Transaction],
    data_store: &DataStore,
    recipient_label: RecipientLabel,
) -> Option<TransferSummary> {
    let first = transactions.first()?;

    let total_amount = transactions
        .iter()
        .filter(|transaction| transaction.status() == TransactionStatus::Completed)
        .map(|transaction| transaction.amount)
        .sum();

    let rejected = transactions
        .iter()
        .filter(|transaction| transaction.status() == TransactionStatus::Rejected)
        .count();

    let recipient = match recipient_label {
        RecipientLabel::UserCode => first.user_code.clone(),
        RecipientLabel::UserName => data_store
            .user_by_code(&first.user_code)
            .map(|user| user.name.clone())
            .unwrap_or_else(|| first.user_code.clone()),
    };

    Some(TransferSummary {
        recipient,
        total_amount,
        counts: StatusCounts {
            completed: transactions.len() - rejected,
            rejected,
        },
    })
}

#[cfg(test)]
mod tests {
    use crate::{
        data_store::DataStore,
        filter::{TransactionFilter, filter_transactions},
        test_utils::sample_data_store,
        transaction::{COMPLETED_LABEL, REJECTED_LABEL, Transaction},
        user::User,
    };

    use super::{RecipientLabel, StatusCounts, TransferSummary, summarize};

    fn summarize_all(data_store: &DataStore, recipient_label: RecipientLabel) -> Option<TransferSummary> {
        let transactions = filter_transactions(data_store, &TransactionFilter::default());
        summarize(&transactions, data_store, recipient_label)
    }

    #[test]
    fn summarizes_three_transfers() {
        let store = DataStore::new(
            vec![
                Transaction::new("A", 100.0, "2024-01-01", COMPLETED_LABEL),
                Transaction::new("B", 50.0, "2024-01-02", REJECTED_LABEL),
                Transaction::new("C", 200.0, "2024-01-03", COMPLETED_LABEL),
            ],
            vec![User::new("A", "Ahmed"), User::new("B", "Basma"), User::new("C", "Chadi")],
        );

        let got = summarize_all(&store, RecipientLabel::UserCode);

        assert_eq!(
            got,
            Some(TransferSummary {
                recipient: "A".to_owned(),
                total_amount: 300.0,
                counts: StatusCounts {
                    completed: 2,
                    rejected: 1,
                },
            })
        );
    }

    #[test]
    fn empty_set_has_no_summary() {
        let store = sample_data_store();

        assert_eq!(summarize(&[], &store, RecipientLabel::UserCode), None);
    }

    #[test]
    fn counts_transfers_without_a_user() {
        // "X" has no matching user but is still completed.
        let store = sample_data_store();

        let got = summarize_all(&store, RecipientLabel::UserCode).unwrap();

        assert_eq!(got.total_amount, 375.0);
        assert_eq!(
            got.counts,
            StatusCounts {
                completed: 3,
                rejected: 1,
            }
        );
    }

    #[test]
    fn counts_add_up_to_filtered_size_for_known_statuses() {
        let store = sample_data_store();
        let filters = [
            TransactionFilter::default(),
            TransactionFilter {
                search: "b".to_owned(),
                ..Default::default()
            },
            TransactionFilter {
                search: "c".to_owned(),
                ..Default::default()
            },
        ];

        for filter in filters {
            let transactions = filter_transactions(&store, &filter);
            let summary = summarize(&transactions, &store, RecipientLabel::UserCode).unwrap();

            assert_eq!(
                summary.counts.completed + summary.counts.rejected,
                transactions.len()
            );
        }
    }

    #[test]
    fn unknown_status_counts_as_completed_but_adds_no_amount() {
        let store = DataStore::new(
            vec![
                Transaction::new("A", 10.0, "2024-01-01", COMPLETED_LABEL),
                Transaction::new("A", 99.0, "2024-01-02", "pending"),
            ],
            vec![],
        );

        let got = summarize_all(&store, RecipientLabel::UserCode).unwrap();

        assert_eq!(got.total_amount, 10.0);
        assert_eq!(
            got.counts,
            StatusCounts {
                completed: 2,
                rejected: 0,
            }
        );
    }

    #[test]
    fn recipient_uses_first_transfer() {
        let store = sample_data_store();
        let transactions = filter_transactions(
            &store,
            &TransactionFilter {
                search: "c".to_owned(),
                ..Default::default()
            },
        );

        let by_code = summarize(&transactions, &store, RecipientLabel::UserCode).unwrap();
        let by_name = summarize(&transactions, &store, RecipientLabel::UserName).unwrap();

        assert_eq!(by_code.recipient, "C");
        assert_eq!(by_name.recipient, "Chadi");
    }

    #[test]
    fn recipient_name_falls_back_to_code() {
        let store = DataStore::new(
            vec![Transaction::new("X", 1.0, "2024-01-01", COMPLETED_LABEL)],
            vec![],
        );

        let got = summarize_all(&store, RecipientLabel::UserName).unwrap();

        assert_eq!(got.recipient, "X");
    }
}
