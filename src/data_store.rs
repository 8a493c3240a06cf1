//! The in-memory store of transactions and users loaded from the data file.
//!
//! The store starts empty, is populated once when the data file has been
//! loaded, and after that is only read. The one exception is an explicit
//! reload, which swaps in a freshly loaded store.

use std::{
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use serde::Deserialize;
use tokio::task::JoinHandle;

use crate::{Error, transaction::Transaction, user::User};

/// A data store shared between request handlers.
pub type SharedDataStore = Arc<RwLock<DataStore>>;

/// The transactions and users from the data file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DataStore {
    #[serde(default)]
    transactions: Vec<Transaction>,
    #[serde(default)]
    users: Vec<User>,
}

impl DataStore {
    /// Create a store from already loaded records.
    pub fn new(transactions: Vec<Transaction>, users: Vec<User>) -> Self {
        Self {
            transactions,
            users,
        }
    }

    /// Parse the JSON contents of a data file.
    ///
    /// # Errors
    /// Returns [Error::DataFileParse] if `text` is not valid JSON or the
    /// records do not have the expected fields.
    pub fn from_json(text: &str) -> Result<Self, Error> {
        serde_json::from_str(text).map_err(|error| Error::DataFileParse(error.to_string()))
    }

    /// Read and parse the data file at `path`.
    ///
    /// # Errors
    /// Returns [Error::DataFileRead] if the file cannot be read, or
    /// [Error::DataFileParse] if its contents cannot be parsed.
    pub async fn load(path: &Path) -> Result<Self, Error> {
        let text = tokio::fs::read_to_string(path)
            .await
            .map_err(|error| Error::DataFileRead {
                path: path.display().to_string(),
                reason: error.to_string(),
            })?;

        Self::from_json(&text)
    }

    /// All transactions in the order they appear in the data file.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// All users in the order they appear in the data file.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Whether there are no transactions to show.
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Get the first user whose code is exactly `code`.
    ///
    /// Codes are case-sensitive. `None` is expected for transactions that
    /// refer to users missing from the data file.
    pub fn user_by_code(&self, code: &str) -> Option<&User> {
        self.users.iter().find(|user| user.code == code)
    }
}

/// Swap the contents of `shared` for `data_store`.
///
/// # Errors
/// Returns [Error::DataStoreLock] if the lock is poisoned.
pub(crate) fn replace_data_store(
    shared: &SharedDataStore,
    data_store: DataStore,
) -> Result<(), Error> {
    let mut guard = shared
        .write()
        .inspect_err(|error| tracing::error!("could not acquire data store lock: {error}"))
        .map_err(|_| Error::DataStoreLock)?;

    *guard = data_store;

    Ok(())
}

/// Load the data file in the background and populate `shared` once it has
/// loaded.
///
/// Until the task finishes, handlers see the empty store. A failed load is
/// logged and leaves the store empty.
pub fn spawn_initial_load(shared: SharedDataStore, path: PathBuf) -> JoinHandle<()> {
    tokio::spawn(async move {
        match DataStore::load(&path).await {
            Ok(data_store) => {
                tracing::info!(
                    "Loaded {} transactions and {} users from {}",
                    data_store.transactions().len(),
                    data_store.users().len(),
                    path.display()
                );

                if let Err(error) = replace_data_store(&shared, data_store) {
                    tracing::error!("could not populate the data store: {error}");
                }
            }
            Err(error) => tracing::error!("Error loading data file: {error}"),
        }
    })
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, RwLock};

    use crate::{
        Error,
        test_utils::{TestDataFile, sample_data_store},
        transaction::{COMPLETED_LABEL, Transaction},
        user::User,
    };

    use super::{DataStore, spawn_initial_load};

    #[test]
    fn parses_data_file() {
        let json = r#"{
            "transactions": [
                {"userCode": "A1", "amount": 100, "time": "09:00", "date": "2024-01-01", "status": "مكتملة"}
            ],
            "users": [
                {"code": "A1", "name": "Ahmed", "governorate": "Cairo"}
            ]
        }"#;

        let got = DataStore::from_json(json).unwrap();

        assert_eq!(
            got,
            DataStore::new(
                vec![Transaction::new("A1", 100.0, "2024-01-01", COMPLETED_LABEL).time("09:00")],
                vec![User::new("A1", "Ahmed").governorate("Cairo")],
            )
        );
    }

    #[test]
    fn missing_lists_default_to_empty() {
        let got = DataStore::from_json("{}").unwrap();

        assert!(got.is_empty());
        assert!(got.users().is_empty());
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        let got = DataStore::from_json("{\"transactions\": [");

        assert!(matches!(got, Err(Error::DataFileParse(_))));
    }

    #[test]
    fn user_lookup_matches_code_exactly() {
        let store = sample_data_store();

        assert_eq!(store.user_by_code("A").map(|user| user.name.as_str()), Some("Ahmed"));
        assert_eq!(store.user_by_code("a"), None);
        assert_eq!(store.user_by_code("Z"), None);
    }

    #[test]
    fn user_lookup_returns_first_match() {
        let store = DataStore::new(
            vec![],
            vec![User::new("A", "First"), User::new("A", "Second")],
        );

        assert_eq!(store.user_by_code("A").unwrap().name, "First");
    }

    #[test]
    fn every_transaction_joins_iff_a_user_has_its_code() {
        let store = sample_data_store();

        for transaction in store.transactions() {
            let has_user = store
                .users()
                .iter()
                .any(|user| user.code == transaction.user_code);

            assert_eq!(
                store.user_by_code(&transaction.user_code).is_some(),
                has_user,
                "join mismatch for {transaction:?}"
            );
        }
    }

    #[tokio::test]
    async fn load_reads_file() {
        let file = TestDataFile::new(
            "load_reads_file",
            r#"{"transactions": [], "users": [{"code": "A", "name": "Ahmed"}]}"#,
        );

        let got = DataStore::load(file.path()).await.unwrap();

        assert_eq!(got.users(), &[User::new("A", "Ahmed")]);
    }

    #[tokio::test]
    async fn load_missing_file_is_a_read_error() {
        let got = DataStore::load("does/not/exist.json".as_ref()).await;

        assert!(matches!(got, Err(Error::DataFileRead { .. })));
    }

    #[tokio::test]
    async fn initial_load_populates_store() {
        let file = TestDataFile::new(
            "initial_load_populates_store",
            r#"{"transactions": [{"userCode": "A", "amount": 5, "date": "2024-01-01", "status": "مكتملة"}]}"#,
        );
        let shared = Arc::new(RwLock::new(DataStore::default()));

        spawn_initial_load(shared.clone(), file.path().to_owned())
            .await
            .unwrap();

        assert_eq!(shared.read().unwrap().transactions().len(), 1);
    }

    #[tokio::test]
    async fn failed_initial_load_leaves_store_empty() {
        let shared = Arc::new(RwLock::new(DataStore::default()));

        spawn_initial_load(shared.clone(), "does/not/exist.json".into())
            .await
            .unwrap();

        assert!(shared.read().unwrap().is_empty());
    }
}
