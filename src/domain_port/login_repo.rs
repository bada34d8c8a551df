use crate::application_port::LoginError;
use crate::domain_model::Account;

#[async_trait::async_trait]
pub trait LoginRepo: Send + Sync {
    /// Fetch the account matching both credentials (for login).
    /// A non-match is `Ok(None)`, never an error.
    async fn find_by_credentials(
        &self,
        username: Option<&str>,
        password: Option<&str>,
    ) -> Result<Option<Account>, LoginError>;
}
