use crate::application_port::{LoginError, LoginInput, LoginService};
use crate::domain_model::Account;
use crate::domain_port::LoginRepo;
use std::sync::Arc;

pub struct RealLoginService {
    login_repo: Arc<dyn LoginRepo>,
}

impl RealLoginService {
    pub fn new(login_repo: Arc<dyn LoginRepo>) -> RealLoginService {
        RealLoginService { login_repo }
    }
}

#[async_trait::async_trait]
impl LoginService for RealLoginService {
    async fn login(&self, request: LoginInput) -> Result<Option<Account>, LoginError> {
        self.login_repo
            .find_by_credentials(request.username.as_deref(), request.password.as_deref())
            .await
    }
}
