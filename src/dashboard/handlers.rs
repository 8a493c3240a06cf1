//! Dashboard HTTP handlers and view rendering.
//!
//! This module contains:
//! - The handler for the full dashboard page
//! - The search handler that returns the results fragment for htmx
//! - The state used by both handlers

use axum::{
    extract::{FromRef, Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error,
    alert::Alert,
    dashboard::{
        cards::summary_cards,
        charts::{TransferCharts, charts_fragment_script, charts_page_script, charts_view},
        search_form::search_form,
        summary::{RecipientLabel, StatusCounts, summarize},
        table::{build_table_rows, transactions_table},
    },
    data_store::{DataStore, SharedDataStore},
    endpoints,
    filter::{TransactionFilter, filter_transactions},
    html::{ECHARTS_SCRIPT, HeadElement, PAGE_CONTAINER_STYLE, base},
    navigation::Sidebar,
    transaction::Transaction,
};

/// The state needed for displaying and searching the dashboard.
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// The loaded transactions and users.
    pub data_store: SharedDataStore,
    /// Where the recipient card gets its label from.
    pub recipient_label: RecipientLabel,
}

impl FromRef<AppState> for DashboardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            data_store: state.data_store.clone(),
            recipient_label: state.recipient_label,
        }
    }
}

/// The cards and table for a set of transfers, and the counts to chart.
struct SearchResults {
    content: Markup,
    /// `None` when there are no transfers, in which case the charts are left
    /// untouched.
    counts: Option<StatusCounts>,
}

/// Display the dashboard with every loaded transfer.
///
/// Until the data file has been loaded the page shows no transfers and the
/// charts are drawn with zero counts.
pub async fn get_dashboard_page(State(state): State<DashboardState>) -> Result<Response, Error> {
    let data_store = state
        .data_store
        .read()
        .inspect_err(|error| tracing::error!("could not acquire data store lock: {error}"))
        .map_err(|_| Error::DataStoreLock)?;

    Ok(dashboard_view(&data_store, state.recipient_label).into_response())
}

/// Filter the transfers and return the results fragment.
///
/// The fragment replaces the contents of `#results` and carries a script that
/// updates the existing charts. If nothing matches, only a message is
/// returned and the charts keep their previous data.
pub async fn search_transactions(
    State(state): State<DashboardState>,
    query: Result<Query<TransactionFilter>, QueryRejection>,
) -> Response {
    let filter = match query {
        Ok(Query(filter)) => filter,
        Err(rejection) => {
            tracing::warn!("invalid search query: {rejection}");
            return (
                StatusCode::BAD_REQUEST,
                Alert::Error {
                    message: "Invalid search".to_owned(),
                    details: "Check that the dates are valid and try again.".to_owned(),
                },
            )
                .into_response();
        }
    };

    let data_store = match state.data_store.read() {
        Ok(data_store) => data_store,
        Err(error) => {
            tracing::error!("could not acquire data store lock: {error}");
            return Error::DataStoreLock.into_alert_response();
        }
    };

    let transactions = filter_transactions(&data_store, &filter);
    tracing::debug!(
        "search matched {} of {} transactions",
        transactions.len(),
        data_store.transactions().len()
    );

    search_results_fragment(&transactions, &data_store, state.recipient_label).into_response()
}

/// Builds the cards and table for `transactions`.
///
/// # Arguments
/// * `transactions` - The filtered transfers, in their original order
/// * `data_store` - The store used to join transfers to users
/// * `recipient_label` - Where the recipient card gets its label from
/// * `empty_message` - Shown instead of the cards and table if `transactions` is empty
fn search_results(
    transactions: &[&Transaction],
    data_store: &DataStore,
    recipient_label: RecipientLabel,
    empty_message: &str,
) -> SearchResults {
    let Some(summary) = summarize(transactions, data_store, recipient_label) else {
        return SearchResults {
            content: no_results_view(empty_message),
            counts: None,
        };
    };

    let rows = build_table_rows(transactions, data_store);

    SearchResults {
        content: html!(
            (summary_cards(&summary))
            (transactions_table(&rows))
        ),
        counts: Some(summary.counts),
    }
}

fn no_results_view(message: &str) -> Markup {
    html!(
        p
            id="no-results"
            class="w-full py-8 text-center text-gray-600 dark:text-gray-400"
        {
            (message)
        }
    )
}

/// Renders the results fragment returned to the search form.
fn search_results_fragment(
    transactions: &[&Transaction],
    data_store: &DataStore,
    recipient_label: RecipientLabel,
) -> Markup {
    let results = search_results(
        transactions,
        data_store,
        recipient_label,
        "No transfers match your search.",
    );

    html!(
        (results.content)

        @if let Some(counts) = results.counts {
            (charts_fragment_script(&TransferCharts::attached().update(counts)))
        }
    )
}

/// Renders the full dashboard page with every loaded transfer.
fn dashboard_view(data_store: &DataStore, recipient_label: RecipientLabel) -> Markup {
    let sidebar = Sidebar::new(endpoints::DASHBOARD_VIEW).into_html();
    let transactions = filter_transactions(data_store, &TransactionFilter::default());
    let results = search_results(
        &transactions,
        data_store,
        recipient_label,
        "Nothing here yet... Transfers will show up here once the data file has been loaded.",
    );
    let chart_updates = TransferCharts::new().update(results.counts.unwrap_or_default());

    let content = html!(
        (sidebar)

        main class="lg:ml-56"
        {
            div class=(PAGE_CONTAINER_STYLE)
            {
                div class="w-full max-w-screen-xl"
                {
                    h2 class="text-xl font-bold mb-4" { "Transfers" }

                    (search_form())

                    (charts_view())

                    div id="results" class="w-full"
                    {
                        (results.content)
                    }
                }
            }
        }
    );

    let [sidebar_style, sidebar_script] = Sidebar::head_elements();
    let head_elements = [
        sidebar_style,
        sidebar_script,
        HeadElement::ScriptLink(ECHARTS_SCRIPT),
        charts_page_script(&chart_updates),
    ];

    base("Dashboard", &head_elements, &content)
}
