use serde::Serialize;

/// A verified account, built from exactly one credential store row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub username: String,
    /// Plaintext, as returned by `login_proc`.
    pub password: String,
    pub display_name: String,
}

impl Account {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Self {
        Account {
            username: username.into(),
            password: password.into(),
            display_name: display_name.into(),
        }
    }
}
