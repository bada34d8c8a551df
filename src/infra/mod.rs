mod login_repo_impl;

pub use login_repo_impl::*;
