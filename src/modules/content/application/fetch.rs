// src/modules/content/application/fetch.rs
//
// Fetch Layer. A broken content store must never break page rendering:
// every transport or decode failure is absorbed into a type-appropriate
// empty fallback here and logged for operators. Callers see the same shape
// for "no data yet" and "store down"; only the log line differs.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use crate::modules::content::application::ports::outgoing::content_store::ContentStore;
use crate::modules::content::application::queries::GroqQuery;

/// Outcome of one catalog query. `Empty` is a normal renderable state
/// (pre-population, unknown slug); `Failed` is a store-side problem that has
/// already been logged and must stay invisible to the page.
#[derive(Debug, Clone, PartialEq)]
pub enum Fetched<T> {
    Hit(T),
    Empty,
    Failed,
}

impl<T> Fetched<T> {
    pub fn into_option(self) -> Option<T> {
        match self {
            Fetched::Hit(value) => Some(value),
            Fetched::Empty | Fetched::Failed => None,
        }
    }
}

impl<T> Fetched<Vec<T>> {
    pub fn into_list(self) -> Vec<T> {
        match self {
            Fetched::Hit(items) => items,
            Fetched::Empty | Fetched::Failed => Vec::new(),
        }
    }
}

#[derive(Clone)]
pub struct ContentFetcher {
    store: Arc<dyn ContentStore>,
}

impl ContentFetcher {
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        Self { store }
    }

    /// Singleton fetch: `Empty` when the store matched no document.
    pub async fn fetch_single<T: DeserializeOwned>(&self, query: GroqQuery) -> Fetched<T> {
        match self.store.execute(&query).await {
            Ok(Value::Null) => Fetched::Empty,
            Ok(tree) => match serde_json::from_value::<T>(tree) {
                Ok(document) => Fetched::Hit(document),
                Err(err) => {
                    warn!(
                        query = query.name,
                        error = %err,
                        "content store returned an undecodable document, serving fallback"
                    );
                    Fetched::Failed
                }
            },
            Err(err) => {
                warn!(
                    query = query.name,
                    error = %err,
                    "content store query failed, serving fallback"
                );
                Fetched::Failed
            }
        }
    }

    /// List fetch: `Empty` when the store matched zero documents.
    pub async fn fetch_list<T: DeserializeOwned>(&self, query: GroqQuery) -> Fetched<Vec<T>> {
        match self.store.execute(&query).await {
            Ok(Value::Null) => Fetched::Empty,
            Ok(tree) => match serde_json::from_value::<Vec<T>>(tree) {
                Ok(items) if items.is_empty() => Fetched::Empty,
                Ok(items) => Fetched::Hit(items),
                Err(err) => {
                    warn!(
                        query = query.name,
                        error = %err,
                        "content store returned an undecodable list, serving fallback"
                    );
                    Fetched::Failed
                }
            },
            Err(err) => {
                warn!(
                    query = query.name,
                    error = %err,
                    "content store query failed, serving fallback"
                );
                Fetched::Failed
            }
        }
    }
}
