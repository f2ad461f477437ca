use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use serde_json::Value;

use crate::modules::content::application::ports::outgoing::content_store::{
    ContentStore, ContentStoreError,
};
use crate::modules::content::application::queries::GroqQuery;

/// In-memory content store keyed by catalog query name.
///
/// Unknown queries resolve to `null`, which is what the real store returns
/// for a dataset with no matching documents. Individual queries (or the
/// whole store) can be switched to fail to exercise fallback paths.
#[derive(Default, Clone)]
pub struct StubContentStore {
    results: HashMap<String, Value>,
    failing: HashSet<String>,
    offline: bool,
}

impl StubContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store where every query and the readiness ping fail.
    pub fn failing() -> Self {
        Self {
            offline: true,
            ..Self::default()
        }
    }

    pub fn with_result(mut self, query_name: &str, value: Value) -> Self {
        self.results.insert(query_name.to_string(), value);
        self
    }

    pub fn failing_query(mut self, query_name: &str) -> Self {
        self.failing.insert(query_name.to_string());
        self
    }
}

#[async_trait]
impl ContentStore for StubContentStore {
    async fn execute(&self, query: &GroqQuery) -> Result<Value, ContentStoreError> {
        if self.offline || self.failing.contains(query.name) {
            return Err(ContentStoreError::Transport(
                "stub store is offline".to_string(),
            ));
        }

        Ok(self.results.get(query.name).cloned().unwrap_or(Value::Null))
    }

    async fn ping(&self) -> Result<(), ContentStoreError> {
        if self.offline {
            return Err(ContentStoreError::Transport(
                "stub store is offline".to_string(),
            ));
        }
        Ok(())
    }
}
