use axum::body::Bytes;
use axum::extract::State;
use axum::response::Response;

use crate::AppState;
use crate::error::Result;
use crate::router::{decode, encode};

/// Handler to register a new account.
pub async fn handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response> {
    let request = decode(&body)?;
    let response = state.signup.handle(request).await;

    encode(response)
}
