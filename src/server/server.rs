use crate::application_impl::*;
use crate::application_port::*;
use crate::domain_port::*;
use crate::infra::*;
use crate::infra_memory::*;
use crate::infra_mysql::*;
use crate::logger::*;
use crate::settings::Settings;
use anyhow::anyhow;
use sqlx::MySqlPool;
use sqlx::mysql::MySqlPoolOptions;
use std::sync::Arc;

pub struct Server {
    pub login_service: Arc<dyn LoginService>,
    pool: Option<MySqlPool>,
}

impl Server {
    pub async fn try_new(settings: &Settings) -> anyhow::Result<Self> {
        let store = &settings.store;

        let (credential_store, pool): (Arc<dyn CredentialStore>, Option<MySqlPool>) =
            match store.backend.as_str() {
                "memory" => {
                    let records = store.accounts.iter().cloned().map(|a| AccountInfoRecord {
                        username: a.username,
                        password: a.password,
                        display_name: a.display_name,
                    });
                    let memory_store = InMemoryCredentialStore::with_accounts(records);
                    info!(accounts = memory_store.len(), "using in-memory credential store");
                    (Arc::new(memory_store), None)
                }
                "mysql" => {
                    let dsn = store
                        .dsn
                        .as_deref()
                        .ok_or_else(|| anyhow!("store.dsn is required for the mysql backend"))?;
                    let pool = MySqlPoolOptions::new()
                        .max_connections(store.max_connections)
                        .connect(dsn)
                        .await?;
                    info!(
                        max_connections = store.max_connections,
                        "connected to mysql credential store"
                    );
                    (Arc::new(MySqlCredentialStore::new(pool.clone())), Some(pool))
                }
                other => return Err(anyhow!("Unknown store backend: {}", other)),
            };

        let server = Self::assemble(credential_store, pool);
        info!("server started");
        Ok(server)
    }

    /// Wires the service stack over an already built store.
    pub fn with_store(credential_store: Arc<dyn CredentialStore>) -> Self {
        Self::assemble(credential_store, None)
    }

    fn assemble(credential_store: Arc<dyn CredentialStore>, pool: Option<MySqlPool>) -> Self {
        let login_repo: Arc<dyn LoginRepo> =
            Arc::new(StoredProcLoginRepo::new(credential_store));
        let login_service: Arc<dyn LoginService> = Arc::new(RealLoginService::new(login_repo));

        Self {
            login_service,
            pool,
        }
    }

    pub async fn shutdown(&self) {
        info!("server shutting down...");

        if let Some(pool) = &self.pool {
            pool.close().await;
            info!("mysql pool closed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_model::Account;
    use crate::settings::parse_settings_str;

    fn settings_with_store(store: &str) -> Settings {
        parse_settings_str(&format!(
            r#"
[http]
address = "127.0.0.1:0"

[log]
filter = "info"

[store]
{store}
"#
        ))
        .unwrap()
    }

    #[tokio::test]
    async fn memory_backend_serves_seeded_accounts() {
        let settings = settings_with_store(
            r#"
backend = "memory"

[[store.accounts]]
username = "alice"
password = "pw123"
display_name = "Alice A"
"#,
        );
        let server = Server::try_new(&settings).await.unwrap();

        let account = server
            .login_service
            .login(LoginInput {
                username: Some("alice".into()),
                password: Some("pw123".into()),
            })
            .await
            .unwrap();

        assert_eq!(account, Some(Account::new("alice", "pw123", "Alice A")));
        server.shutdown().await;
    }

    #[tokio::test]
    async fn unknown_backend_is_rejected() {
        let settings = settings_with_store(r#"backend = "postgres""#);

        let err = Server::try_new(&settings).await.err().unwrap();

        assert!(err.to_string().contains("Unknown store backend"));
    }

    #[tokio::test]
    async fn mysql_backend_requires_dsn() {
        let settings = settings_with_store(r#"backend = "mysql""#);

        let err = Server::try_new(&settings).await.err().unwrap();

        assert!(err.to_string().contains("store.dsn"));
    }
}
