use crate::domain_port::*;
use sqlx::mysql::MySqlRow;
use sqlx::{MySqlPool, Row};

pub struct MySqlCredentialStore {
    pool: MySqlPool,
}

impl MySqlCredentialStore {
    pub fn new(pool: MySqlPool) -> Self {
        MySqlCredentialStore { pool }
    }

    fn row_to_record(row: &MySqlRow) -> Result<AccountInfoRecord, CredentialStoreError> {
        record_from_columns(|column| row.try_get::<String, _>(column))
    }
}

fn record_from_columns<F>(get: F) -> Result<AccountInfoRecord, CredentialStoreError>
where
    F: Fn(&str) -> Result<String, sqlx::Error>,
{
    let column = |name: &str| get(name).map_err(|e| CredentialStoreError::Decode(e.to_string()));

    Ok(AccountInfoRecord {
        username: column("username")?,
        password: column("password")?,
        display_name: column("display_name")?,
    })
}

/// One row or none; anything more breaks the `login_proc` contract.
fn single_row<R, T, F>(rows: Vec<R>, decode: F) -> Result<Option<T>, CredentialStoreError>
where
    F: FnOnce(&R) -> Result<T, CredentialStoreError>,
{
    match rows.as_slice() {
        [] => Ok(None),
        [row] => decode(row).map(Some),
        _ => Err(CredentialStoreError::Ambiguous(rows.len())),
    }
}

#[async_trait::async_trait]
impl CredentialStore for MySqlCredentialStore {
    async fn find_credentials(
        &self,
        username: Option<&str>,
        password: Option<&str>,
    ) -> Result<Option<AccountInfoRecord>, CredentialStoreError> {
        // login_proc(IN p_username, IN p_password); None binds as NULL
        let rows: Vec<MySqlRow> = sqlx::query("CALL login_proc(?, ?)")
            .bind(username)
            .bind(password)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| CredentialStoreError::Query(e.to_string()))?;

        single_row(rows, Self::row_to_record)
    }
}
