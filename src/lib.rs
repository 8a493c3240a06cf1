//! Transfer Dashboard is a web page for browsing money transfers.
//!
//! The server loads a static JSON file of transactions and users, then serves
//! a dashboard with a searchable table of transfers, summary cards, and
//! charts comparing completed and rejected transfers.
//!
//! Pages are rendered on the server with maud and searches are made with htmx,
//! so the browser only swaps in HTML fragments returned by the server.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use tokio::signal;

mod alert;
mod app_state;
mod dashboard;
mod data_store;
mod endpoints;
mod filter;
mod html;
mod internal_server_error;
mod logging;
mod navigation;
mod not_found;
mod reload;
mod routing;
mod transaction;
mod user;

#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use dashboard::RecipientLabel;
pub use data_store::{DataStore, SharedDataStore, spawn_initial_load};
pub use filter::{StatusFilter, TransactionFilter, filter_transactions};
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;
pub use transaction::{Transaction, TransactionStatus};
pub use user::User;

use crate::{alert::Alert, internal_server_error::InternalServerError};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
///
/// A transaction that refers to an unknown user code is not an error, it is
/// simply left out of the transactions table.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The data file could not be read from disk.
    ///
    /// Callers should pass in the path of the file and the original error as
    /// a string.
    #[error("could not read the data file \"{path}\": {reason}")]
    DataFileRead {
        /// The path that was read.
        path: String,
        /// The underlying I/O error.
        reason: String,
    },

    /// The data file was read but is not valid JSON or does not have the
    /// expected shape.
    #[error("could not parse the data file: {0}")]
    DataFileParse(String),

    /// Could not acquire the data store lock.
    #[error("could not acquire the data store lock")]
    DataStoreLock,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::DataFileRead { .. } | Error::DataFileParse(_) => InternalServerError {
                description: "Could not load transactions",
                fix: "Check that the data file exists and contains valid JSON, then reload the data.",
            }
            .into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError::default().into_response()
            }
        }
    }
}

impl Error {
    fn into_alert_response(self) -> Response {
        match self {
            Error::DataFileRead { path, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Alert::Error {
                    message: "Could not read the data file".to_owned(),
                    details: format!(
                        "The file \"{path}\" could not be read. \
                        The previously loaded transactions are still shown."
                    ),
                },
            )
                .into_response(),
            Error::DataFileParse(reason) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Alert::Error {
                    message: "Could not parse the data file".to_owned(),
                    details: format!(
                        "{reason}. The previously loaded transactions are still shown."
                    ),
                },
            )
                .into_response(),
            Error::DataStoreLock => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Alert::ErrorSimple {
                    message: "Something went wrong, check the server logs for more details."
                        .to_owned(),
                },
            )
                .into_response(),
        }
    }
}
