mod login_service_impl;

pub use login_service_impl::*;
