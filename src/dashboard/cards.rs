//! The summary cards shown above the transfers table.

use maud::{Markup, html};

use crate::{dashboard::summary::TransferSummary, html::format_amount};

/// Renders the recipient, total amount and rejected count cards.
pub(super) fn summary_cards(summary: &TransferSummary) -> Markup {
    html! {
        section
            id="cards-container"
            class="w-full grid grid-cols-1 md:grid-cols-3 gap-4 mb-4"
        {
            (card("Recipient", "recipient-name", &summary.recipient))
            (card("Total Completed Amount", "total-amount", &format_amount(summary.total_amount)))
            (card("Rejected Transfers", "rejected-count", &summary.counts.rejected.to_string()))
        }
    }
}

fn card(title: &str, value_id: &str, value: &str) -> Markup {
    html! {
        div
            class="bg-white dark:bg-gray-800 border border-gray-200
                dark:border-gray-700 rounded-lg p-4 shadow-md"
        {
            h4 class="text-sm text-gray-600 dark:text-gray-400 mb-2" { (title) }

            div id=(value_id) class="text-3xl font-bold truncate" title=(value) { (value) }
        }
    }
}
