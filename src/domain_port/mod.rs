// store

mod credential_store;

pub use credential_store::*;

// repo

mod login_repo;

pub use login_repo::*;
