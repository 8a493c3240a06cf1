//! The transfers table.

use maud::{Markup, html};

use crate::{
    data_store::DataStore,
    html::{TABLE_CELL_STYLE, TABLE_HEADER_STYLE, format_amount},
    transaction::{Transaction, TransactionStatus},
};

const COMPLETED_ROW_STYLE: &str = "completed bg-green-50 border-b \
    dark:bg-green-950/40 dark:border-gray-700";
const REJECTED_ROW_STYLE: &str = "rejected bg-red-50 border-b \
    dark:bg-red-950/40 dark:border-gray-700";

/// How a row is highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum RowStyle {
    Completed,
    /// Anything that is not completed is shown as rejected.
    Rejected,
}

impl RowStyle {
    fn class(self) -> &'static str {
        match self {
            RowStyle::Completed => COMPLETED_ROW_STYLE,
            RowStyle::Rejected => REJECTED_ROW_STYLE,
        }
    }
}

/// A transfer joined with its user, ready for display.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct TableRow<'a> {
    pub user_code: &'a str,
    pub user_name: &'a str,
    pub amount: f64,
    pub time: &'a str,
    pub date: &'a str,
    pub status: &'a str,
    pub governorate: &'a str,
    pub style: RowStyle,
}

/// Join each transaction to its user, skipping transactions that have none.
///
/// The order of `transactions` is preserved.
pub(super) fn build_table_rows<'a>(
    transactions: &[&'a Transaction],
    data_store: &'a DataStore,
) -> Vec<TableRow<'a>> {
    transactions
        .iter()
        .filter_map(|&transaction| {
            let user = data_store.user_by_code(&transaction.user_code)?;

            let style = match transaction.status() {
                TransactionStatus::Completed => RowStyle::Completed,
                TransactionStatus::Rejected | TransactionStatus::Unknown => RowStyle::Rejected,
            };

            Some(TableRow {
                user_code: &transaction.user_code,
                user_name: &user.name,
                amount: transaction.amount,
                time: &transaction.time,
                date: &transaction.date,
                status: &transaction.status,
                governorate: user.governorate_label(),
                style,
            })
        })
        .collect()
}

/// Renders the table of transfers.
///
/// # Arguments
/// * `rows` - The rows to display, in display order
pub(super) fn transactions_table(rows: &[TableRow]) -> Markup {
    html! {
        div class="w-full overflow-x-auto rounded-lg shadow" {
            table
                id="transaction-table"
                class="w-full text-sm text-left text-gray-500 dark:text-gray-400"
            {
                thead class=(TABLE_HEADER_STYLE) {
                    tr {
                        th scope="col" class=(TABLE_CELL_STYLE) { "User Code" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Name" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Amount" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Time" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Status" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Governorate" }
                    }
                }
                tbody {
                    @for row in rows {
                        tr class=(row.style.class()) {
                            td class=(TABLE_CELL_STYLE) { (row.user_code) }
                            td class=(TABLE_CELL_STYLE) dir="auto" { (row.user_name) }
                            td class=(TABLE_CELL_STYLE) { (format_amount(row.amount)) }
                            td class=(TABLE_CELL_STYLE) { (row.time) }
                            td class=(TABLE_CELL_STYLE) { (row.date) }
                            td class=(TABLE_CELL_STYLE) dir="auto" { (row.status) }
                            td class=(TABLE_CELL_STYLE) dir="auto" { (row.governorate) }
                        }
                    }
                }
            }
        }
    }
}
