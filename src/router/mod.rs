//! HTTP routes.
//!
//! Routes adapt axum requests to controllers and controller responses back
//! to axum.

pub mod metrics;
pub mod signup;
pub mod status;

use axum::body::Bytes;
use axum::http::header;
use axum::response::{IntoResponse, Response};

use crate::controller::{HttpRequest, HttpResponse};
use crate::error::{Result, ServerError};

/// Decode a raw body into an [`HttpRequest`].
///
/// An empty body yields a request without body.
pub fn decode(body: &Bytes) -> Result<HttpRequest> {
    if body.is_empty() {
        return Ok(HttpRequest::default());
    }

    let body = serde_json::from_slice(body)
        .map_err(|err| ServerError::ParsingForm(Box::new(err)))?;

    Ok(HttpRequest::new(body))
}

/// Encode a controller [`HttpResponse`] as a JSON axum [`Response`].
pub fn encode(response: HttpResponse) -> Result<Response> {
    let body = serde_json::to_vec(&response.body).map_err(|err| {
        ServerError::Internal {
            details: "cannot serialize controller response".into(),
            source: Some(Box::new(err)),
        }
    })?;

    Ok((
        response.status_code,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response())
}
