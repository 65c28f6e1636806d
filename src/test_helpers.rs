//! Test helpers for building landscape documents and mock-backed contexts

#![cfg(test)]

use crate::context::Context;
use crate::traits::{MockCommandExecutor, MockHttpClient, MockOutput};
use serde_json::{Map, Value, json};
use std::sync::Arc;

/// Builder for a single landscape entry
pub struct LandscapeBuilder {
    id: String,
    properties: Map<String, Value>,
}

impl LandscapeBuilder {
    /// Create a landscape with every record field filled from its id
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        let properties = json!({
            "type": "aws",
            "description": format!("{} landscape", id),
            "owner": "platform-team",
            "jumpbox": "10.0.0.1",
            "concourse": "10.0.0.2",
            "director": "10.0.0.3",
            "domain": format!("{}.example.com", id),
        });

        Self {
            id,
            properties: match properties {
                Value::Object(map) => map,
                _ => Map::new(),
            },
        }
    }

    /// Set (or add) a property
    pub fn property(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.properties.insert(key.to_string(), value.into());
        self
    }

    /// Remove a property
    pub fn without(mut self, key: &str) -> Self {
        self.properties.remove(key);
        self
    }
}

/// Builder for a whole landscape configuration document
pub struct LandscapeDocument {
    landscapes: Vec<LandscapeBuilder>,
}

impl LandscapeDocument {
    pub fn new() -> Self {
        Self {
            landscapes: Vec::new(),
        }
    }

    /// The single landscape `a` used across the end-to-end scenarios
    pub fn scenario() -> Self {
        Self::new().landscape(
            LandscapeBuilder::new("a")
                .property("type", "t")
                .property("description", "d")
                .property("owner", "o")
                .property("jumpbox", "1.1.1.1")
                .property("concourse", "2.2.2.2")
                .property("director", "3.3.3.3")
                .property("domain", "x.com"),
        )
    }

    pub fn landscape(mut self, landscape: LandscapeBuilder) -> Self {
        self.landscapes.push(landscape);
        self
    }

    /// Render the document as JSON text
    pub fn build(self) -> String {
        let document: Map<String, Value> = self
            .landscapes
            .into_iter()
            .map(|l| (l.id, Value::Object(l.properties)))
            .collect();
        Value::Object(document).to_string()
    }
}

/// A context wired to mocks, with handles kept for assertions
pub struct TestEnv {
    pub ctx: Context,
    pub output: Arc<MockOutput>,
    pub executor: Arc<MockCommandExecutor>,
    pub http: Arc<MockHttpClient>,
}

impl TestEnv {
    /// Serve `document` and succeed every external command
    pub fn new(document: &str) -> Self {
        Self::build(
            MockHttpClient::with_response(document),
            MockCommandExecutor::new(),
        )
    }

    /// Serve `document` and use the given executor
    pub fn with_executor(document: &str, executor: MockCommandExecutor) -> Self {
        Self::build(MockHttpClient::with_response(document), executor)
    }

    /// Answer every request with an HTTP error status
    pub fn with_status(status: u16, reason: &str) -> Self {
        Self::build(
            MockHttpClient::with_status(status, reason),
            MockCommandExecutor::new(),
        )
    }

    fn build(http: MockHttpClient, executor: MockCommandExecutor) -> Self {
        let output = Arc::new(MockOutput::new());
        let executor = Arc::new(executor);
        let http = Arc::new(http);

        let ctx = Context::test_with(output.clone(), executor.clone(), http.clone());

        Self {
            ctx,
            output,
            executor,
            http,
        }
    }
}
