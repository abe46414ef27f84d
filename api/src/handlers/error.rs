//! Mapping of domain failures onto HTTP responses

use actix_web::{
    error::{InternalError, JsonPayloadError, QueryPayloadError},
    http::StatusCode,
    HttpRequest, HttpResponse,
};
use bands_core::errors::{DomainError, ErrorKind, ValidationError};
use bands_shared::error_codes;
use validator::ValidationErrors;

use crate::dto::{ErrorResponse, ErrorResponseExt};

/// HTTP status for each error kind
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::InvalidData => StatusCode::BAD_REQUEST,
        ErrorKind::Unauthorized => StatusCode::FORBIDDEN,
        ErrorKind::EmailAlreadyTaken => StatusCode::CONFLICT,
        ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Handle domain errors and convert them to appropriate HTTP responses
///
/// Internal failures are logged in full and answered with a generic message.
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    let kind = error.kind();
    let status = status_for(kind);

    let response = match &error {
        DomainError::Internal { .. } => {
            log::error!("Domain Error: {:?}", error);
            ErrorResponse::new(kind.code(), "An internal error occurred")
        }
        DomainError::Validation(validation) => {
            log::debug!("Validation failed: {}", validation);
            let response = ErrorResponse::new(kind.code(), validation.to_string());
            match validation.field() {
                Some(field) => response.add_detail("field", field),
                None => response,
            }
        }
        _ => {
            log::debug!("Request rejected: {}", error);
            ErrorResponse::new(kind.code(), error.to_string())
        }
    };

    response.to_response(status)
}

/// Convert `validator` failures on a request body into a 400 response
pub fn handle_validation_errors(errors: ValidationErrors) -> HttpResponse {
    let mut response = ErrorResponse::new(error_codes::INVALID_DATA, "Invalid request data");

    for (field, field_errors) in errors.field_errors() {
        let messages: Vec<String> = field_errors
            .iter()
            .map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string())
            })
            .collect();
        response = response.add_detail(field.to_string(), messages);
    }

    response.to_response(StatusCode::BAD_REQUEST)
}

/// Error handler for `web::JsonConfig`: undecodable bodies become `invalid_data`
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = handle_domain_error(malformed(&err));
    InternalError::from_response(err, response).into()
}

/// Error handler for `web::QueryConfig`
pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = handle_domain_error(malformed(&err));
    InternalError::from_response(err, response).into()
}

fn malformed(err: &dyn std::fmt::Display) -> DomainError {
    ValidationError::MalformedRequest {
        reason: err.to_string(),
    }
    .into()
}
