//! Framework-independent request and response shapes.

use axum::http::StatusCode;
use serde::Serialize;
use serde_json::Value;

use crate::controller::HttpError;
use crate::dto::Account;

/// Inbound request as seen by a controller.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HttpRequest {
    /// Decoded JSON body, if the request had one.
    pub body: Option<Value>,
}

impl HttpRequest {
    /// Create a request carrying `body`.
    pub fn new(body: Value) -> Self {
        Self { body: Some(body) }
    }
}

/// Payload of an [`HttpResponse`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum HttpBody {
    Account(Account),
    Error(HttpError),
}

/// Outbound response produced by a controller.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status_code: StatusCode,
    pub body: HttpBody,
}

/// `400 Bad Request` carrying `error`.
pub fn bad_request(error: HttpError) -> HttpResponse {
    HttpResponse {
        status_code: StatusCode::BAD_REQUEST,
        body: HttpBody::Error(error),
    }
}

/// `500 Internal Server Error` with the generic [`HttpError::Server`] body.
pub fn server_error() -> HttpResponse {
    HttpResponse {
        status_code: StatusCode::INTERNAL_SERVER_ERROR,
        body: HttpBody::Error(HttpError::Server),
    }
}

/// `200 OK` carrying the created account.
pub fn ok(account: Account) -> HttpResponse {
    HttpResponse {
        status_code: StatusCode::OK,
        body: HttpBody::Account(account),
    }
}
