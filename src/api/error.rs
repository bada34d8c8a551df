use crate::application_port::*;
use serde::Serialize;
use std::convert::Infallible;
use thiserror::Error;
use tracing::warn;
use warp::filters::body::BodyDeserializeError;
use warp::http::StatusCode;
use warp::{Rejection, reject};

pub async fn recover_error(err: Rejection) -> Result<impl warp::Reply, Infallible> {
    let code = if let Some(code) = err.find::<ApiErrorCode>() {
        code.clone()
    } else if err.is_not_found() {
        ApiErrorCode::NotFound
    } else if let Some(e) = err.find::<BodyDeserializeError>() {
        ApiErrorCode::BadRequest(e.to_string())
    } else if err.find::<reject::PayloadTooLarge>().is_some() {
        ApiErrorCode::PayloadTooLarge
    } else if err.find::<reject::LengthRequired>().is_some() {
        ApiErrorCode::BadRequest("content-length header is required".to_string())
    } else if err.find::<reject::UnsupportedMediaType>().is_some() {
        ApiErrorCode::BadRequest("expected application/json".to_string())
    } else if err.find::<reject::MethodNotAllowed>().is_some() {
        ApiErrorCode::MethodNotAllowed
    } else {
        ApiErrorCode::internal(format!("unhandled rejection: {:?}", err))
    };

    let status = code.status();
    let json = warp::reply::json(&ApiError {
        message: code.to_string(),
        code,
    });
    Ok(warp::reply::with_status(json, status))
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub code: ApiErrorCode,
    pub message: String,
}

#[derive(Debug, Clone, Error, Serialize)]
#[serde(into = "&'static str")]
pub enum ApiErrorCode {
    #[error("Malformed request: {0}")]
    BadRequest(String),
    #[error("Not found")]
    NotFound,
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error("Request body too large")]
    PayloadTooLarge,
    #[error("Internal error")]
    InternalError,
}

impl From<ApiErrorCode> for &'static str {
    fn from(code: ApiErrorCode) -> Self {
        match code {
            ApiErrorCode::BadRequest(_) => "BadRequest",
            ApiErrorCode::NotFound => "NotFound",
            ApiErrorCode::MethodNotAllowed => "MethodNotAllowed",
            ApiErrorCode::PayloadTooLarge => "PayloadTooLarge",
            ApiErrorCode::InternalError => "InternalError",
        }
    }
}

impl ApiErrorCode {
    pub fn internal<E: std::fmt::Display>(error: E) -> ApiErrorCode {
        warn!("Internal error: {}", error);
        ApiErrorCode::InternalError
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiErrorCode::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiErrorCode::NotFound => StatusCode::NOT_FOUND,
            ApiErrorCode::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiErrorCode::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ApiErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl reject::Reject for ApiErrorCode {}

impl From<LoginError> for ApiErrorCode {
    fn from(error: LoginError) -> Self {
        match error {
            LoginError::Store(e) => ApiErrorCode::internal(e),
        }
    }
}
