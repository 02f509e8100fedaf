//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while allowing actix
//! handlers to turn domain failures into consistent `{"error": ...}` JSON
//! bodies and status codes.

use actix_web::{http::StatusCode, web, HttpResponse, ResponseError};
use tracing::error;

use crate::domain::{Error, ErrorCode};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest | ErrorCode::ThresholdNotMet => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound | ErrorCode::NoData => StatusCode::NOT_FOUND,
        ErrorCode::Conflict => StatusCode::CONFLICT,
        ErrorCode::StoreError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn redact_if_store_error(error: &Error) -> Error {
    if matches!(error.code(), ErrorCode::StoreError) {
        Error::store("Internal server error")
    } else {
        error.clone()
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        if matches!(self.code(), ErrorCode::StoreError) {
            error!(message = self.message(), "store failure surfaced to client");
        }
        HttpResponse::build(self.status_code()).json(redact_if_store_error(self))
    }
}

/// JSON body extractor configuration mapping deserialization failures to
/// the canonical error shape instead of actix's plain-text default.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| Error::invalid_request(err.to_string()).into())
}

/// Path extractor configuration with the canonical error shape.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default()
        .error_handler(|err, _req| Error::invalid_request(err.to_string()).into())
}

/// Query extractor configuration with the canonical error shape.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err, _req| Error::invalid_request(err.to_string()).into())
}
