use crate::domain_model::Account;
use crate::domain_port::CredentialStoreError;

#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error("store error: {0}")]
    Store(String),
}

impl From<CredentialStoreError> for LoginError {
    fn from(err: CredentialStoreError) -> Self {
        LoginError::Store(err.to_string())
    }
}

#[derive(Debug, Clone)]
pub struct LoginInput {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[async_trait::async_trait]
pub trait LoginService: Send + Sync {
    /// `Ok(None)` means the credentials matched no account.
    async fn login(&self, request: LoginInput) -> Result<Option<Account>, LoginError>;
}
