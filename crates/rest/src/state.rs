//! Application state for the list API.
//!
//! Holds the query executor and the server configuration shared by all
//! handlers. Per-request values (descriptor, condition, envelope) never live
//! here.

use std::sync::Arc;

use apiql_query::core::QueryExecutor;
use apiql_query::types::DescriptorDefaults;

use crate::config::ServerConfig;

/// Shared application state for the REST API.
///
/// # Type Parameters
///
/// * `E` - The query executor (must implement [`QueryExecutor`])
pub struct AppState<E> {
    /// The query executor.
    executor: Arc<E>,

    /// Server configuration.
    config: Arc<ServerConfig>,
}

// Manually implement Clone since E is wrapped in Arc and doesn't need to be Clone
impl<E> Clone for AppState<E> {
    fn clone(&self) -> Self {
        Self {
            executor: Arc::clone(&self.executor),
            config: Arc::clone(&self.config),
        }
    }
}

impl<E: QueryExecutor> AppState<E> {
    /// Creates a new AppState with the given executor and configuration.
    pub fn new(executor: Arc<E>, config: ServerConfig) -> Self {
        Self {
            executor,
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the query executor.
    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// Returns a reference to the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Returns the pagination defaults for incoming requests.
    pub fn descriptor_defaults(&self) -> DescriptorDefaults {
        self.config.descriptor_defaults()
    }
}
