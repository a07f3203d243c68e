//! Public configuration page for front-end identification and customization.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;

use crate::config::Configuration;

/// Public server status (configuration).
pub async fn status(
    State(config): State<Arc<Configuration>>,
) -> Json<Configuration> {
    Json(Configuration::clone(&config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_status_hides_private_sections() {
        let Json(config) =
            status(State(Arc::new(Configuration::default()))).await;
        let value = serde_json::to_value(&config).unwrap();

        assert!(value.get("version").is_some());
        assert!(value.get("server").is_none());
    }
}
