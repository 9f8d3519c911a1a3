//! Server configuration for the list API.
//!
//! Supports programmatic configuration, command line arguments and
//! environment variables.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `APIQL_SERVER_PORT` | 8080 | Server port |
//! | `APIQL_SERVER_HOST` | 127.0.0.1 | Host to bind |
//! | `APIQL_LOG_LEVEL` | info | Log level |
//! | `APIQL_REQUEST_TIMEOUT` | 30 | Request timeout (seconds) |
//! | `APIQL_ENABLE_CORS` | true | Enable CORS |
//! | `APIQL_CORS_ORIGINS` | * | Allowed origins |
//! | `APIQL_DEFAULT_LIMIT` | 10 | Page size when `limit` is absent |
//! | `APIQL_DEFAULT_OFFSET` | 0 | Offset when `offset` is absent |
//!
//! # Example
//!
//! ```rust
//! use apiql_rest::ServerConfig;
//!
//! let config = ServerConfig {
//!     port: 3000,
//!     default_limit: 25,
//!     ..Default::default()
//! };
//! assert_eq!(config.descriptor_defaults().limit, 25);
//! ```

use apiql_query::types::{DEFAULT_LIMIT, DEFAULT_OFFSET, DescriptorDefaults};
use clap::Parser;

/// Server configuration for the list API.
#[derive(Debug, Clone, Parser)]
#[command(name = "apiql-server")]
#[command(about = "Query-string driven list API")]
pub struct ServerConfig {
    /// Port to listen on.
    #[arg(short, long, env = "APIQL_SERVER_PORT", default_value = "8080")]
    pub port: u16,

    /// Host address to bind to.
    #[arg(long, env = "APIQL_SERVER_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "APIQL_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Request timeout in seconds.
    #[arg(long, env = "APIQL_REQUEST_TIMEOUT", default_value = "30")]
    pub request_timeout: u64,

    /// Enable CORS.
    #[arg(long, env = "APIQL_ENABLE_CORS", default_value = "true")]
    pub enable_cors: bool,

    /// Allowed CORS origins (comma-separated, or * for all).
    #[arg(long, env = "APIQL_CORS_ORIGINS", default_value = "*")]
    pub cors_origins: String,

    /// Page size used when a request has no `limit`.
    #[arg(long, env = "APIQL_DEFAULT_LIMIT", default_value = "10")]
    pub default_limit: i64,

    /// Offset used when a request has no `offset`.
    #[arg(long, env = "APIQL_DEFAULT_OFFSET", default_value = "0")]
    pub default_offset: i64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            host: "127.0.0.1".to_string(),
            log_level: "info".to_string(),
            request_timeout: 30,
            enable_cors: true,
            cors_origins: "*".to_string(),
            default_limit: DEFAULT_LIMIT,
            default_offset: DEFAULT_OFFSET,
        }
    }
}

impl ServerConfig {
    /// Creates a new ServerConfig from environment variables, falling back
    /// to defaults.
    pub fn from_env() -> Self {
        Self::try_parse().unwrap_or_default()
    }

    /// Returns the socket address to bind to.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Returns the pagination defaults for the descriptor builder.
    pub fn descriptor_defaults(&self) -> DescriptorDefaults {
        DescriptorDefaults {
            limit: self.default_limit,
            offset: self.default_offset,
        }
    }

    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.port == 0 {
            errors.push("Port cannot be 0".to_string());
        }

        if self.request_timeout == 0 {
            errors.push("Request timeout cannot be 0".to_string());
        }

        if self.default_limit <= 0 {
            errors.push("Default limit must be positive".to_string());
        }

        if self.default_offset < 0 {
            errors.push("Default offset cannot be negative".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Creates a configuration suitable for testing.
    pub fn for_testing() -> Self {
        Self {
            port: 0,
            host: "127.0.0.1".to_string(),
            log_level: "debug".to_string(),
            request_timeout: 5,
            enable_cors: false,
            cors_origins: "*".to_string(),
            default_limit: DEFAULT_LIMIT,
            default_offset: DEFAULT_OFFSET,
        }
    }
}
