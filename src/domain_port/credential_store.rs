/// One row of the `account` table as returned by `login_proc`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountInfoRecord {
    pub username: String,
    pub password: String,
    pub display_name: String,
}

#[async_trait::async_trait]
pub trait CredentialStore: Send + Sync {
    /// Equality lookup on both values. Yields the single matching row, or
    /// `None` when nothing matches. An absent value is SQL NULL and matches
    /// no row.
    async fn find_credentials(
        &self,
        username: Option<&str>,
        password: Option<&str>,
    ) -> Result<Option<AccountInfoRecord>, CredentialStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum CredentialStoreError {
    #[error("query failed: {0}")]
    Query(String),
    #[error("unreadable row: {0}")]
    Decode(String),
    #[error("expected at most one matching row, got {0}")]
    Ambiguous(usize),
}
