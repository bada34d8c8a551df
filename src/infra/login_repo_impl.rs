use crate::application_port::LoginError;
use crate::domain_model::Account;
use crate::domain_port::{AccountInfoRecord, CredentialStore, LoginRepo};
use std::sync::Arc;

/// Adapts `login_proc` rows into `Account`s.
pub struct StoredProcLoginRepo {
    store: Arc<dyn CredentialStore>,
}

impl StoredProcLoginRepo {
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        StoredProcLoginRepo { store }
    }

    fn record_to_account(record: AccountInfoRecord) -> Account {
        Account {
            username: record.username,
            password: record.password,
            display_name: record.display_name,
        }
    }
}

#[async_trait::async_trait]
impl LoginRepo for StoredProcLoginRepo {
    async fn find_by_credentials(
        &self,
        username: Option<&str>,
        password: Option<&str>,
    ) -> Result<Option<Account>, LoginError> {
        let record = self.store.find_credentials(username, password).await?;
        Ok(record.map(Self::record_to_account))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_port::CredentialStoreError;
    use std::sync::Mutex;

    type Call = (Option<String>, Option<String>);

    struct RecordingStore {
        calls: Mutex<Vec<Call>>,
        row: Option<AccountInfoRecord>,
    }

    impl RecordingStore {
        fn returning(row: Option<AccountInfoRecord>) -> Arc<Self> {
            Arc::new(RecordingStore {
                calls: Mutex::new(Vec::new()),
                row,
            })
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait::async_trait]
    impl CredentialStore for RecordingStore {
        async fn find_credentials(
            &self,
            username: Option<&str>,
            password: Option<&str>,
        ) -> Result<Option<AccountInfoRecord>, CredentialStoreError> {
            self.calls
                .lock()
                .unwrap()
                .push((username.map(str::to_string), password.map(str::to_string)));
            Ok(self.row.clone())
        }
    }

    struct BrokenStore;

    #[async_trait::async_trait]
    impl CredentialStore for BrokenStore {
        async fn find_credentials(
            &self,
            _username: Option<&str>,
            _password: Option<&str>,
        ) -> Result<Option<AccountInfoRecord>, CredentialStoreError> {
            Err(CredentialStoreError::Query("connection refused".into()))
        }
    }

    fn alice_row() -> AccountInfoRecord {
        AccountInfoRecord {
            username: "alice".into(),
            password: "pw123".into(),
            display_name: "Alice A".into(),
        }
    }

    fn call(username: Option<&str>, password: Option<&str>) -> Call {
        (username.map(str::to_string), password.map(str::to_string))
    }

    #[tokio::test]
    async fn maps_row_fields_one_to_one() {
        let store = RecordingStore::returning(Some(alice_row()));
        let repo = StoredProcLoginRepo::new(store.clone());

        let account = repo
            .find_by_credentials(Some("alice"), Some("pw123"))
            .await
            .unwrap();

        assert_eq!(account, Some(Account::new("alice", "pw123", "Alice A")));
        assert_eq!(store.calls(), vec![call(Some("alice"), Some("pw123"))]);
    }

    #[tokio::test]
    async fn missing_row_is_absent_not_error() {
        let store = RecordingStore::returning(None);
        let repo = StoredProcLoginRepo::new(store.clone());

        let account = repo
            .find_by_credentials(Some("bob"), Some("pw123"))
            .await
            .unwrap();

        assert!(account.is_none());
        assert_eq!(store.calls().len(), 1);
    }

    #[tokio::test]
    async fn forwards_inputs_verbatim() {
        let store = RecordingStore::returning(None);
        let repo = StoredProcLoginRepo::new(store.clone());

        repo.find_by_credentials(Some(""), Some("")).await.unwrap();
        repo.find_by_credentials(Some("  Alice "), Some(" pw123\n"))
            .await
            .unwrap();
        repo.find_by_credentials(None, Some("pw123")).await.unwrap();
        repo.find_by_credentials(None, None).await.unwrap();

        assert_eq!(
            store.calls(),
            vec![
                call(Some(""), Some("")),
                call(Some("  Alice "), Some(" pw123\n")),
                call(None, Some("pw123")),
                call(None, None),
            ]
        );
    }

    #[tokio::test]
    async fn store_failure_propagates_message() {
        let repo = StoredProcLoginRepo::new(Arc::new(BrokenStore));

        let err = repo
            .find_by_credentials(Some("alice"), Some("pw123"))
            .await
            .unwrap_err();

        match err {
            LoginError::Store(message) => {
                assert_eq!(message, "query failed: connection refused")
            }
        }
    }
}
