//! Implements a struct that holds the state of the REST server.

use std::{
    path::PathBuf,
    sync::{Arc, RwLock},
};

use crate::{
    dashboard::RecipientLabel,
    data_store::{DataStore, SharedDataStore},
};

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The transactions and users loaded from the data file.
    pub data_store: SharedDataStore,

    /// The path of the JSON data file, read on start-up and on reload.
    pub data_path: PathBuf,

    /// Where the recipient card gets its label from.
    pub recipient_label: RecipientLabel,
}

impl AppState {
    /// Create a new [AppState] with an empty data store.
    ///
    /// The store is populated by loading `data_path`, see
    /// [crate::spawn_initial_load].
    pub fn new(data_path: impl Into<PathBuf>, recipient_label: RecipientLabel) -> Self {
        Self::with_data_store(DataStore::default(), data_path, recipient_label)
    }

    /// Create a new [AppState] with an already loaded data store.
    pub fn with_data_store(
        data_store: DataStore,
        data_path: impl Into<PathBuf>,
        recipient_label: RecipientLabel,
    ) -> Self {
        Self {
            data_store: Arc::new(RwLock::new(data_store)),
            data_path: data_path.into(),
            recipient_label,
        }
    }
}
