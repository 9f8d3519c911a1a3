//! Response envelope.
//!
//! Every handler builds its own envelope; nothing is shared between requests.
//!
//! | Call | Body |
//! |------|------|
//! | `success(POST, id, _)` | `{"success": true, "id": id}` |
//! | `success(GET, _, Some(data))` | existing fields plus `{"data": data}` |
//! | `success(other, _, _)` | `{"success": true}` |
//! | `fail(Engine(msg))` | `{"success": false, "error": {"orm": msg}}` |
//! | `fail(Fields(map))` | `{"success": false, "error": map}` |
//!
//! The built-in list route only produces the `GET` and `Engine` shapes. The
//! `POST`, other-method and `Fields` shapes are for write handlers mounted
//! by the embedding application next to [`crate::routing::create_routes`].

use std::collections::BTreeMap;

use apiql_query::error::clear_error_prefix;
use axum::http::Method;
use serde::Serialize;
use serde_json::{Map, Value, json};

/// What went wrong, as reported in a failure envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureDetail {
    /// A query engine message.
    Engine(String),
    /// Per-field validation messages.
    Fields(BTreeMap<String, String>),
}

/// JSON body of an API response.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ResponseEnvelope {
    body: Map<String, Value>,
}

impl ResponseEnvelope {
    /// Creates an empty envelope.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the match count of a list response.
    pub fn with_totals(mut self, totals: u64) -> Self {
        self.body.insert("totals".to_string(), json!(totals));
        self
    }

    /// Shapes a success body for the request method.
    ///
    /// `POST` reports the created id, `GET` attaches `data` to whatever the
    /// envelope already holds, and every other method reports plain success.
    pub fn success(mut self, method: &Method, id: i64, data: Option<Value>) -> Self {
        if *method == Method::POST {
            self.body = Map::new();
            self.body.insert("success".to_string(), Value::Bool(true));
            self.body.insert("id".to_string(), json!(id));
        } else if *method == Method::GET {
            if let Some(data) = data {
                self.body.insert("data".to_string(), data);
            }
        } else {
            self.body = Map::new();
            self.body.insert("success".to_string(), Value::Bool(true));
        }
        self
    }

    /// Creates a failure body.
    pub fn fail(detail: FailureDetail) -> Self {
        let error = match detail {
            FailureDetail::Engine(message) => json!({ "orm": clear_error_prefix(&message) }),
            FailureDetail::Fields(fields) => json!(fields),
        };

        let mut body = Map::new();
        body.insert("success".to_string(), Value::Bool(false));
        body.insert("error".to_string(), error);
        Self { body }
    }

    /// Returns a field of the body.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.body.get(key)
    }

    /// Converts the envelope into a JSON value.
    pub fn into_value(self) -> Value {
        Value::Object(self.body)
    }
}
