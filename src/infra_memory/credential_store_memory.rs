use crate::domain_port::{AccountInfoRecord, CredentialStore, CredentialStoreError};
use dashmap::DashMap;

/// `account` table kept in memory, keyed by username.
#[derive(Debug, Default)]
pub struct InMemoryCredentialStore {
    accounts: DashMap<String, AccountInfoRecord>,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_accounts(records: impl IntoIterator<Item = AccountInfoRecord>) -> Self {
        let store = Self::new();
        for record in records {
            store.insert(record);
        }
        store
    }

    /// Replaces any row with the same username.
    pub fn insert(&self, record: AccountInfoRecord) {
        self.accounts.insert(record.username.clone(), record);
    }

    pub(crate) fn len(&self) -> usize {
        self.accounts.len()
    }
}

#[async_trait::async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn find_credentials(
        &self,
        username: Option<&str>,
        password: Option<&str>,
    ) -> Result<Option<AccountInfoRecord>, CredentialStoreError> {
        // NULL on either side never compares equal
        let (Some(username), Some(password)) = (username, password) else {
            return Ok(None);
        };

        let row = self
            .accounts
            .get(username)
            .filter(|entry| entry.password == password)
            .map(|entry| entry.value().clone());
        Ok(row)
    }
}
