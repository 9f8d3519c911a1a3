//! Common test utilities for list API testing.
//!
//! - [`StubExecutor`] - Executor that records each compiled query
//! - [`create_test_server`] - Test server wired to a stub executor

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use apiql_query::compiler::CompiledQuery;
use apiql_query::condition::ConditionTree;
use apiql_query::core::{QueryExecutor, QueryPage};
use apiql_query::error::{QueryError, QueryResult};
use apiql_rest::{ServerConfig, create_app_with_config};
use async_trait::async_trait;
use axum_test::TestServer;
use serde_json::Value;

/// What the stub executor answers with.
#[derive(Debug, Clone)]
pub enum Reply {
    /// Return these rows, with `totals` equal to the row count.
    Rows(Vec<Value>),
    /// Fail with `NoRows`.
    NoRows,
    /// Fail with an engine message.
    Engine(String),
    /// Fail with an invalid-request message.
    Invalid(String),
    /// Sleep, then return no rows.
    Slow(Duration),
}

/// A query the stub executor received.
#[derive(Debug, Clone)]
pub struct Recorded {
    /// Entity from the path.
    pub entity: String,
    /// The compiled query.
    pub query: CompiledQuery<ConditionTree>,
}

pub type Recorder = Arc<Mutex<Vec<Recorded>>>;

/// Executor that records each query and answers with a fixed reply.
pub struct StubExecutor {
    reply: Reply,
    recorded: Recorder,
}

impl StubExecutor {
    /// Creates a stub answering with `reply`, plus a handle to what it records.
    pub fn new(reply: Reply) -> (Self, Recorder) {
        let recorded = Arc::new(Mutex::new(Vec::new()));
        let executor = Self {
            reply,
            recorded: Arc::clone(&recorded),
        };
        (executor, recorded)
    }
}

#[async_trait]
impl QueryExecutor for StubExecutor {
    type Condition = ConditionTree;

    fn backend_name(&self) -> &str {
        "stub"
    }

    async fn fetch(
        &self,
        entity: &str,
        query: &CompiledQuery<ConditionTree>,
    ) -> QueryResult<QueryPage> {
        self.recorded.lock().unwrap().push(Recorded {
            entity: entity.to_string(),
            query: query.clone(),
        });

        match &self.reply {
            Reply::Rows(rows) => Ok(QueryPage::new(rows.clone(), rows.len() as u64)),
            Reply::NoRows => Err(QueryError::no_rows(entity)),
            Reply::Engine(message) => Err(QueryError::engine(message.clone())),
            Reply::Invalid(message) => Err(QueryError::invalid(message.clone())),
            Reply::Slow(delay) => {
                tokio::time::sleep(*delay).await;
                Ok(QueryPage::default())
            }
        }
    }
}

/// Creates a test server answering every list request with `reply`.
pub fn create_test_server(reply: Reply) -> (TestServer, Recorder) {
    create_test_server_with_config(reply, ServerConfig::for_testing())
}

/// Creates a test server with a custom configuration.
pub fn create_test_server_with_config(
    reply: Reply,
    config: ServerConfig,
) -> (TestServer, Recorder) {
    let (executor, recorded) = StubExecutor::new(reply);
    let app = create_app_with_config(executor, config);
    let server = TestServer::new(app).expect("Failed to create test server");
    (server, recorded)
}

/// Returns the last query the stub executor received.
pub fn last_query(recorded: &Recorder) -> Recorded {
    recorded
        .lock()
        .unwrap()
        .last()
        .cloned()
        .expect("No query was recorded")
}
