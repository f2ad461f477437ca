// src/modules/content/adapter/outgoing/sanity_store_http.rs
//
// ContentStore adapter for the Sanity data API. Read-only: every catalog
// query goes out as a GET against the query endpoint, and the `result`
// field of the response body comes back as the raw document tree.

use std::env;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use url::Url;

use crate::modules::content::application::ports::outgoing::content_store::{
    ContentStore, ContentStoreError,
};
use crate::modules::content::application::queries::GroqQuery;

#[derive(Debug, Clone)]
pub struct SanityConfig {
    pub project_id: String,
    pub dataset: String,
    pub api_version: String,
    /// The CDN host serves cached reads; the live host serves fresh ones.
    pub use_cdn: bool,
    pub timeout: Duration,
}

impl SanityConfig {
    pub fn from_env() -> Self {
        let project_id =
            env::var("SANITY_PROJECT_ID").expect("SANITY_PROJECT_ID is not set in .env file");
        let dataset = env::var("SANITY_DATASET").expect("SANITY_DATASET is not set in .env file");
        let api_version =
            env::var("SANITY_API_VERSION").unwrap_or_else(|_| "2024-01-01".to_string());
        let use_cdn = env::var("SANITY_USE_CDN")
            .map(|v| v != "false" && v != "0")
            .unwrap_or(true);
        let timeout_secs: u64 = env::var("SANITY_HTTP_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .expect("SANITY_HTTP_TIMEOUT_SECS must be a number");

        Self {
            project_id,
            dataset,
            api_version,
            use_cdn,
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    fn query_base(&self) -> Url {
        let host = if self.use_cdn {
            "apicdn.sanity.io"
        } else {
            "api.sanity.io"
        };
        let base = format!(
            "https://{}.{}/v{}/data/query/{}",
            self.project_id, host, self.api_version, self.dataset
        );
        Url::parse(&base).expect("sanity query URL must be valid")
    }
}

/// Response envelope of the query endpoint. `result` is `null` for
/// singleton queries with no match.
#[derive(Deserialize)]
struct QueryResponse {
    #[serde(default)]
    result: Value,
}

pub struct SanityStoreHttp {
    client: reqwest::Client,
    query_base: Url,
}

impl SanityStoreHttp {
    pub fn new(config: &SanityConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("failed to build HTTP client");

        Self {
            client,
            query_base: config.query_base(),
        }
    }

    /// GROQ parameters ride as `$name` query-string arguments, each value
    /// JSON-encoded (so string params keep their quotes).
    fn request_url(&self, query: &GroqQuery) -> Result<Url, ContentStoreError> {
        let mut url = self.query_base.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("query", query.groq);
            for (name, value) in &query.params {
                let encoded = serde_json::to_string(value)
                    .map_err(|err| ContentStoreError::Decode(err.to_string()))?;
                pairs.append_pair(&format!("${name}"), &encoded);
            }
        }
        Ok(url)
    }
}

fn unwrap_result(body: &str) -> Result<Value, ContentStoreError> {
    let parsed: QueryResponse =
        serde_json::from_str(body).map_err(|err| ContentStoreError::Decode(err.to_string()))?;
    Ok(parsed.result)
}

#[async_trait]
impl ContentStore for SanityStoreHttp {
    async fn execute(&self, query: &GroqQuery) -> Result<Value, ContentStoreError> {
        let url = self.request_url(query)?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| ContentStoreError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ContentStoreError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|err| ContentStoreError::Transport(err.to_string()))?;

        unwrap_result(&body)
    }

    async fn ping(&self) -> Result<(), ContentStoreError> {
        // Cheapest query the endpoint accepts; only reachability matters.
        let probe = GroqQuery {
            name: "readiness-probe",
            groq: "count(*[_id == \"__probe__\"])",
            params: Vec::new(),
        };
        self.execute(&probe).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::modules::content::application::queries;

    fn config(use_cdn: bool) -> SanityConfig {
        SanityConfig {
            project_id: "abc123".to_string(),
            dataset: "production".to_string(),
            api_version: "2024-01-01".to_string(),
            use_cdn,
            timeout: Duration::from_secs(10),
        }
    }

    #[test]
    fn cdn_flag_picks_the_host() {
        assert_eq!(
            config(true).query_base().as_str(),
            "https://abc123.apicdn.sanity.io/v2024-01-01/data/query/production"
        );
        assert_eq!(
            config(false).query_base().as_str(),
            "https://abc123.api.sanity.io/v2024-01-01/data/query/production"
        );
    }

    #[test]
    fn request_url_carries_query_and_json_encoded_params() {
        let store = SanityStoreHttp::new(&config(true));
        let url = store.request_url(&queries::project_by_slug("my-app")).unwrap();

        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        assert!(pairs
            .iter()
            .any(|(k, v)| k == "query" && v.contains("slug.current == $slug")));
        // String params stay JSON-encoded so the endpoint sees them quoted.
        assert!(pairs.iter().any(|(k, v)| k == "$slug" && v == "\"my-app\""));
    }

    #[test]
    fn result_field_is_unwrapped() {
        let result = unwrap_result(r#"{"result": {"name": "Jane"}, "ms": 4}"#).unwrap();
        assert_eq!(result, json!({"name": "Jane"}));
    }

    #[test]
    fn missing_result_reads_as_null() {
        let result = unwrap_result(r#"{"ms": 2}"#).unwrap();
        assert_eq!(result, Value::Null);
    }

    #[test]
    fn malformed_body_is_a_decode_error() {
        let err = unwrap_result("<html>gateway timeout</html>").unwrap_err();
        assert!(matches!(err, ContentStoreError::Decode(_)));
    }
}
