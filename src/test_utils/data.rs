use std::{
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use crate::{
    data_store::{DataStore, SharedDataStore},
    transaction::{COMPLETED_LABEL, REJECTED_LABEL, Transaction},
    user::User,
};

/// Four transactions on consecutive days in January 2024.
///
/// "A" and "C" are completed, "B" is rejected, and "X" is completed but has
/// no matching user.
pub(crate) fn sample_data_store() -> DataStore {
    DataStore::new(
        vec![
            Transaction::new("A", 100.0, "2024-01-01", COMPLETED_LABEL).time("09:00"),
            Transaction::new("B", 50.0, "2024-01-02", REJECTED_LABEL).time("10:15"),
            Transaction::new("C", 200.0, "2024-01-03", COMPLETED_LABEL).time("11:30"),
            Transaction::new("X", 75.0, "2024-01-04", COMPLETED_LABEL).time("12:45"),
        ],
        vec![
            User::new("A", "Ahmed").governorate("Cairo"),
            User::new("B", "Basma"),
            User::new("C", "Chadi").governorate("Giza"),
        ],
    )
}

pub(crate) fn shared(data_store: DataStore) -> SharedDataStore {
    Arc::new(RwLock::new(data_store))
}

/// A data file in the system temp directory that is deleted on drop.
pub(crate) struct TestDataFile {
    path: PathBuf,
}

impl TestDataFile {
    /// `name` must be unique across tests since tests run in parallel.
    pub(crate) fn new(name: &str, contents: &str) -> Self {
        let path = std::env::temp_dir().join(format!(
            "transfer_dashboard_{}_{name}.json",
            std::process::id()
        ));
        std::fs::write(&path, contents).expect("Could not write test data file");

        Self { path }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    pub(crate) fn overwrite(&self, contents: &str) {
        std::fs::write(&self.path, contents).expect("Could not overwrite test data file");
    }
}

impl Drop for TestDataFile {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}
