//! The endpoint for reloading the data file without restarting the server.

use std::path::PathBuf;

use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRedirect;

use crate::{
    AppState,
    data_store::{DataStore, SharedDataStore, replace_data_store},
    endpoints,
};

/// The state needed to reload the data file.
#[derive(Debug, Clone)]
pub struct ReloadState {
    /// The store to replace.
    pub data_store: SharedDataStore,
    /// The data file to read.
    pub data_path: PathBuf,
}

impl FromRef<AppState> for ReloadState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            data_store: state.data_store.clone(),
            data_path: state.data_path.clone(),
        }
    }
}

/// Re-read the data file and replace the data store with its contents.
///
/// On success the client is redirected to the dashboard so that the page,
/// including its charts, is rebuilt from the new data. On failure the
/// previously loaded data is kept and an alert is returned.
pub async fn reload_data_endpoint(State(state): State<ReloadState>) -> Response {
    let data_store = match DataStore::load(&state.data_path).await {
        Ok(data_store) => data_store,
        Err(error) => {
            tracing::error!("Error reloading data file: {error}");
            return error.into_alert_response();
        }
    };

    if data_store.is_empty() {
        tracing::warn!("{} contains no transactions", state.data_path.display());
    }

    let transaction_count = data_store.transactions().len();
    let user_count = data_store.users().len();

    if let Err(error) = replace_data_store(&state.data_store, data_store) {
        return error.into_alert_response();
    }

    tracing::info!(
        "Reloaded {transaction_count} transactions and {user_count} users from {}",
        state.data_path.display()
    );

    (
        HxRedirect(endpoints::DASHBOARD_VIEW.to_owned()),
        StatusCode::OK,
    )
        .into_response()
}
