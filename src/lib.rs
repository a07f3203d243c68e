//! Sign-up is a small account registration API.
//!
//! Requests are validated by the [`controller::SignUpController`], which
//! delegates email syntax checks and account creation to injected ports.
#![forbid(unsafe_code)]

pub mod adapters;
pub mod config;
pub mod controller;
pub mod dto;
pub mod error;
pub mod ports;
pub mod router;
pub mod telemetry;

use std::sync::Arc;
use std::time::Duration;

use axum::body::Bytes;
use axum::http::{Method, StatusCode, header};
use axum::routing::{get, post};
use axum::{Router, middleware as AxumMiddleware};
use metrics_exporter_prometheus::PrometheusHandle;
use tower::ServiceBuilder;
use tower_http::LatencyUnit;
use tower_http::cors::{Any, CorsLayer};
use tower_http::sensitive_headers::SetSensitiveHeadersLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};

use crate::adapters::{EmailValidatorAdapter, MemoryAccountStore};
use crate::controller::{Controller, SignUpController};
use crate::error::ServerError;

/// MUST NEVER be used in production.
#[cfg(test)]
pub async fn make_request(
    app: Router,
    method: Method,
    path: &str,
    body: String,
) -> axum::http::Response<axum::body::Body> {
    use axum::extract::Request;
    use tower::util::ServiceExt;

    app.oneshot(
        Request::builder()
            .method(method)
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json")
            .body(axum::body::Body::from(body))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// State sharing between routes.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<config::Configuration>,
    pub signup: Arc<dyn Controller>,
    pub metrics: Option<PrometheusHandle>,
}

/// Create router.
pub fn app(state: AppState) -> Router {
    let timeout = state.config.server.timeout();

    let middleware = ServiceBuilder::new()
        // Add high level tracing/logging to all requests.
        .layer(
            TraceLayer::new_for_http()
                .on_body_chunk(|chunk: &Bytes, latency: Duration, _span: &tracing::Span| {
                    tracing::trace!(size_bytes = chunk.len(), latency = ?latency, "sending body chunk")
                })
                .make_span_with(DefaultMakeSpan::new().include_headers(true).level(tracing::Level::INFO))
                .on_request(DefaultOnRequest::new())
                .on_response(DefaultOnResponse::new().include_headers(true).latency_unit(LatencyUnit::Micros)),
        )
        // Set a timeout.
        .layer(TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, timeout))
        // Remove senstive headers from trace.
        .layer(SetSensitiveHeadersLayer::new([header::AUTHORIZATION, header::COOKIE]))
        // Add CORS preflight support.
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers(Any),
        );

    Router::new()
        // `GET /status.json` goes to `status`.
        .route("/status.json", get(router::status::status))
        // `GET /metrics` goes to Prometheus exposition.
        .route("/metrics", get(router::metrics::handler))
        // `POST /signup` goes to the sign-up controller.
        .route("/signup", post(router::signup::handler))
        .with_state(state)
        .route_layer(AxumMiddleware::from_fn(telemetry::track))
        .layer(middleware)
}

/// Initialize the application state.
pub fn initialize_state(
    config: Arc<config::Configuration>,
) -> Result<AppState, ServerError> {
    let metrics = if config.telemetry.metrics {
        Some(telemetry::setup_metrics_recorder()?)
    } else {
        None
    };

    let signup = SignUpController::new(
        Box::new(EmailValidatorAdapter::new()),
        Box::new(MemoryAccountStore::new(config.store.max_accounts)),
    );

    Ok(AppState {
        config,
        signup: Arc::new(signup),
        metrics,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unknown_route() {
        let config = Arc::new(config::Configuration::default());
        let app = app(initialize_state(config).unwrap());

        let response =
            make_request(app, Method::GET, "/unknown", String::new()).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_metrics_disabled() {
        let config = Arc::new(config::Configuration::default());
        let app = app(initialize_state(config).unwrap());

        let response =
            make_request(app, Method::GET, "/metrics", String::new()).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_metrics_route_renders_recorded_metrics() {
        use http_body_util::BodyExt;
        use metrics_exporter_prometheus::PrometheusBuilder;

        let recorder = PrometheusBuilder::new().build_recorder();
        let state = AppState {
            config: Arc::new(config::Configuration::default()),
            signup: Arc::new(SignUpController::new(
                Box::new(EmailValidatorAdapter::new()),
                Box::new(MemoryAccountStore::default()),
            )),
            metrics: Some(recorder.handle()),
        };
        let app = app(state);

        let rendered = metrics::with_local_recorder(&recorder, || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .unwrap();

            runtime.block_on(async {
                let body = serde_json::json!({
                    "name": "forestus7",
                    "email": "forestus7@gmail.com",
                    "password": "sugoi777",
                    "passwordConfirmation": "sugoi777",
                });
                let response = make_request(
                    app.clone(),
                    Method::POST,
                    "/signup",
                    body.to_string(),
                )
                .await;
                assert_eq!(response.status(), StatusCode::OK);

                let response =
                    make_request(app, Method::GET, "/metrics", String::new())
                        .await;
                assert_eq!(response.status(), StatusCode::OK);

                let body =
                    response.into_body().collect().await.unwrap().to_bytes();
                String::from_utf8(body.to_vec()).unwrap()
            })
        });

        assert!(rendered.contains(r#"signup_requests_total{outcome="created"} 1"#));
        assert!(rendered.contains("http_requests_total{"));
        assert!(rendered.contains(r#"path="/signup""#));
    }

    #[tokio::test]
    async fn test_status_route() {
        let config = Arc::new(config::Configuration::default());
        let app = app(initialize_state(config).unwrap());

        let response =
            make_request(app, Method::GET, "/status.json", String::new()).await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}
