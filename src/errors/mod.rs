use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use std::fmt;

use crate::constants::{
    CODE_INVALID_BODY, CODE_INVALID_USER_ID, CODE_STORE_ERROR, CODE_USER_NOT_FOUND,
    ERR_INVALID_BODY, ERR_INVALID_USER_ID, ERR_USER_NOT_FOUND,
};
use crate::models::ErrorResponse;

#[derive(Debug)]
pub enum ApiError {
    /// Client-caused: malformed id or body.
    BadRequest { code: String, message: String },
    /// No matching row.
    NotFound { code: String, message: String },
    /// Any failure of the underlying store, message passed through verbatim.
    InternalServerError { code: String, message: String },
}

impl ApiError {
    pub fn invalid_user_id() -> Self {
        ApiError::BadRequest {
            code: CODE_INVALID_USER_ID.to_string(),
            message: ERR_INVALID_USER_ID.to_string(),
        }
    }

    pub fn invalid_body(detail: impl fmt::Display) -> Self {
        ApiError::BadRequest {
            code: CODE_INVALID_BODY.to_string(),
            message: format!("{}: {}", ERR_INVALID_BODY, detail),
        }
    }

    pub fn user_not_found() -> Self {
        ApiError::NotFound {
            code: CODE_USER_NOT_FOUND.to_string(),
            message: ERR_USER_NOT_FOUND.to_string(),
        }
    }

    pub fn store(message: impl Into<String>) -> Self {
        ApiError::InternalServerError {
            code: CODE_STORE_ERROR.to_string(),
            message: message.into(),
        }
    }

    pub fn code(&self) -> &str {
        match self {
            ApiError::BadRequest { code, .. }
            | ApiError::NotFound { code, .. }
            | ApiError::InternalServerError { code, .. } => code,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ApiError::BadRequest { message, .. }
            | ApiError::NotFound { message, .. }
            | ApiError::InternalServerError { message, .. } => message,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound { .. })
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::BadRequest { code, message } => {
                write!(f, "Bad Request [{}]: {}", code, message)
            }
            ApiError::NotFound { code, message } => {
                write!(f, "Not Found [{}]: {}", code, message)
            }
            ApiError::InternalServerError { code, message } => {
                write!(f, "Internal Server Error [{}]: {}", code, message)
            }
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::InternalServerError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            success: false,
            code: self.code().to_string(),
            message: self.message().to_string(),
        })
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        ApiError::store(err.to_string())
    }
}

/// Startup configuration failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
    #[error("invalid value {value:?} for environment variable {key}")]
    Invalid { key: &'static str, value: String },
}
