//! The form for searching and filtering transfers.

use maud::{Markup, html};

use crate::{
    endpoints,
    filter::ALL_STATUSES_LABEL,
    html::{BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, loading_spinner},
    transaction::{COMPLETED_LABEL, REJECTED_LABEL},
};

/// The options of the status selector, in display order.
const STATUS_OPTIONS: [&str; 3] = [ALL_STATUSES_LABEL, COMPLETED_LABEL, REJECTED_LABEL];

/// Renders the search form.
///
/// Submitting the form swaps the search results into `#results`, errors go to
/// the alert container.
pub(super) fn search_form() -> Markup {
    let spinner = loading_spinner();

    html! {
        form
            hx-get=(endpoints::SEARCH_TRANSACTIONS)
            hx-target="#results"
            hx-target-error="#alert-container"
            hx-swap="innerHTML"
            hx-indicator="#indicator"
            class="w-full grid grid-cols-1 md:grid-cols-5 gap-4 items-end mb-4
                bg-gray-50 dark:bg-gray-800 p-4 rounded-lg"
        {
            div
            {
                label for="search" class=(FORM_LABEL_STYLE) { "Search" }

                input
                    name="search"
                    id="search"
                    type="text"
                    placeholder="User code or name"
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="start_date" class=(FORM_LABEL_STYLE) { "From" }

                input
                    name="start_date"
                    id="start_date"
                    type="date"
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="end_date" class=(FORM_LABEL_STYLE) { "To" }

                input
                    name="end_date"
                    id="end_date"
                    type="date"
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="status" class=(FORM_LABEL_STYLE) { "Status" }

                select
                    name="status"
                    id="status"
                    class=(FORM_TEXT_INPUT_STYLE)
                {
                    @for status in STATUS_OPTIONS {
                        option value=(status) { (status) }
                    }
                }
            }

            button type="submit" id="search-button" class=(BUTTON_PRIMARY_STYLE)
            {
                span id="indicator" class="inline htmx-indicator" { (spinner) }
                "Search"
            }
        }
    }
}
