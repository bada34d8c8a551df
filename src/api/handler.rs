use super::error::*;
use crate::application_port::{LoginInput, LoginService};
use crate::logger::*;
use serde::Deserialize;
use std::sync::Arc;
use warp::http::StatusCode;
use warp::{self, reject};

/// Missing and `null` fields both arrive as `None` and reach the store as NULL.
#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

pub async fn login(
    body: LoginRequest,
    login_service: Arc<dyn LoginService>,
) -> Result<Box<dyn warp::Reply>, warp::Rejection> {
    let login_input = LoginInput {
        username: body.username,
        password: body.password,
    };
    let account = login_service
        .login(login_input)
        .await
        .map_err(ApiErrorCode::from)
        .map_err(reject::custom)?;

    match account {
        Some(account) => {
            debug!("login accepted");
            Ok(Box::new(warp::reply::json(&account)))
        }
        None => {
            debug!("login rejected");
            Ok(Box::new(StatusCode::UNAUTHORIZED))
        }
    }
}
