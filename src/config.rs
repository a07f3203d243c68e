//! Configuration manager.

use std::fs::File;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::FromRef;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::AppState;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";
const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    /// Instance name.
    pub name: String,
    /// Domain name of current instance.
    pub url: String,
    support: Option<String>,
    favicon: Option<String>,
    #[serde(default)]
    version: String,
    #[serde(skip)]
    path: PathBuf,
    /// Related to HTTP listener.
    #[serde(default, skip_serializing)]
    pub server: Server,
    /// Related to logs and metrics.
    #[serde(default, skip_serializing)]
    pub telemetry: Telemetry,
    /// Related to the development account store.
    #[serde(default, skip_serializing)]
    pub store: Store,
}

/// HTTP listener configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Server {
    /// IP address to bind.
    pub address: String,
    /// Port to bind.
    pub port: u16,
    /// Request timeout in seconds.
    pub timeout: u64,
}

impl Default for Server {
    fn default() -> Self {
        Self {
            address: "0.0.0.0".into(),
            port: 8888,
            timeout: 10,
        }
    }
}

impl Server {
    /// Socket address to listen on.
    pub fn socket_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        Ok(SocketAddr::new(self.address.parse()?, self.port))
    }

    /// Request timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

/// Logs and metrics configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Telemetry {
    /// `tracing` filter directive, overridden by `RUST_LOG`.
    pub filter: String,
    /// Expose Prometheus metrics on `/metrics`.
    pub metrics: bool,
}

impl Default for Telemetry {
    fn default() -> Self {
        Self {
            filter: "info".into(),
            metrics: false,
        }
    }
}

/// In-memory account store configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Store {
    /// Maximum number of accounts kept in memory.
    pub max_accounts: usize,
}

impl Default for Store {
    fn default() -> Self {
        Self {
            max_accounts: crate::adapters::memory::DEFAULT_MAX_ACCOUNTS,
        }
    }
}

impl FromRef<AppState> for Arc<Configuration> {
    fn from_ref(state: &AppState) -> Arc<Configuration> {
        Arc::clone(&state.config)
    }
}

impl Configuration {
    pub fn path(mut self, path: PathBuf) -> Self {
        self.path = path;
        self
    }

    /// Normalizes a URL string by ensuring it starts with a valid scheme
    /// (`http` or `https`).
    fn normalize_url(&self, url: &str) -> Result<String, url::ParseError> {
        let url_with_scheme =
            if url.starts_with("http://") || url.starts_with("https://") {
                url.to_string()
            } else {
                format!("https://{url}")
            };

        let parsed_url = Url::parse(&url_with_scheme)?;
        Ok(parsed_url.to_string())
    }

    /// Set version and normalize URLs of a freshly parsed configuration.
    fn finalize(&self, mut config: Self) -> Result<Self, url::ParseError> {
        config.version = VERSION.to_owned();
        config.path = self.path.clone();

        if !config.url.is_empty() {
            config.url = self.normalize_url(&config.url)?;
        }
        config.support = config
            .support
            .map(|s| self.normalize_url(&s))
            .transpose()?;
        config.favicon = config
            .favicon
            .map(|f| self.normalize_url(&f))
            .transpose()?;

        Ok(config)
    }

    /// Reads the `config.yaml` file from the specified path or the default
    /// location.
    pub fn read(self) -> Result<Arc<Self>, url::ParseError> {
        let default_path = PathBuf::from(DEFAULT_CONFIG_PATH);
        let file_path = if self.path.is_file() {
            &self.path
        } else {
            &default_path
        };

        match File::open(file_path) {
            Ok(file) => {
                let config: Configuration = match serde_yaml::from_reader(file)
                {
                    Ok(config) => config,
                    Err(err) => {
                        return Ok(Arc::new(self.error(err)));
                    },
                };

                Ok(Arc::new(self.finalize(config)?))
            },
            Err(err) => Ok(Arc::new(self.error(err))),
        }
    }

    /// Return a default configuration as fallback.
    fn error(&self, err: impl std::error::Error) -> Self {
        tracing::error!(
            error = %err,
            path = %self.path.display(),
            "cannot read configuration file"
        );
        Self {
            version: VERSION.to_owned(),
            ..Default::default()
        }
    }
}
