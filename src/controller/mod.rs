//! Controllers turn an [`HttpRequest`] into an [`HttpResponse`].
//!
//! They know nothing about the HTTP framework serving them; the router
//! adapts requests and responses at the edge.

pub mod errors;
pub mod http;
pub mod signup;

pub use errors::HttpError;
pub use http::{HttpBody, HttpRequest, HttpResponse};
pub use signup::{SignUpController, SignUpRequest};

use async_trait::async_trait;

/// Inbound port for a request handler.
#[async_trait]
pub trait Controller: Send + Sync {
    /// Handle a request. Every failure is reported through the response.
    async fn handle(&self, request: HttpRequest) -> HttpResponse;
}
