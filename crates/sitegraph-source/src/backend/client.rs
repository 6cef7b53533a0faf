//! HTTP client for the backend object-query API
//!
//! Wraps a [`reqwest::Client`] with the credentials and base URL from the
//! sourcing configuration. Queries are equality-only; a query failure is
//! fatal for the whole run, so errors propagate unchanged.

use crate::backend::{endpoints, object::RawObject};
use crate::config::SourceConfig;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Map, Value};
use sitegraph_common::{Result, SitegraphError};
use std::time::Duration;

/// Response envelope for class queries
#[derive(Debug, Deserialize)]
struct QueryResults {
    results: Vec<RawObject>,
}

/// Client for the backend object-query API
pub struct BackendClient {
    client: Client,
    server_url: String,
    app_id: String,
    master_key: String,
}

impl BackendClient {
    /// Create a new client from the sourcing configuration
    pub fn new(config: &SourceConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            server_url: config.server_url.clone(),
            app_id: config.app_id.clone(),
            master_key: config.master_key.clone(),
        })
    }

    /// Start a query against a named class
    pub fn query(&self, class_name: impl Into<String>) -> ClassQuery<'_> {
        ClassQuery {
            client: self,
            class_name: class_name.into(),
            constraints: Map::new(),
        }
    }

    /// Get the configured server URL
    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    async fn find(&self, class_name: &str, constraints: &Map<String, Value>) -> Result<Vec<RawObject>> {
        let url = endpoints::class_url(&self.server_url, class_name);

        let mut request = self
            .client
            .get(&url)
            .header("X-Parse-Application-Id", &self.app_id)
            .header("X-Parse-Master-Key", &self.master_key);

        if !constraints.is_empty() {
            request = request.query(&[("where", serde_json::to_string(constraints)?)]);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            return Err(SitegraphError::query(
                class_name,
                response.status().as_u16(),
            ));
        }

        let body: QueryResults = response.json().await?;
        Ok(body.results)
    }
}

/// Builder for an equality-filtered query over one class
pub struct ClassQuery<'a> {
    client: &'a BackendClient,
    class_name: String,
    constraints: Map<String, Value>,
}

impl ClassQuery<'_> {
    /// Require a property to equal a value
    pub fn eq(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.constraints.insert(key.into(), value.into());
        self
    }

    /// Require a reference property to point at a specific object
    pub fn eq_pointer(self, key: impl Into<String>, class_name: &str, id: &str) -> Self {
        let pointer = crate::backend::Pointer::new(class_name, id);
        self.eq(key, pointer.to_value())
    }

    /// Execute the query and return all matching records
    pub async fn find(self) -> Result<Vec<RawObject>> {
        self.client.find(&self.class_name, &self.constraints).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn test_client() -> BackendClient {
        let config = SourceConfig::new("app", "key", "http://localhost:1337/parse", "site1", "Blog");
        BackendClient::new(&config).unwrap()
    }

    #[test]
    fn test_query_constraints_accumulate() {
        let client = test_client();
        let query = client
            .query("ModelField")
            .eq("isDisabled", false)
            .eq_pointer("model", "Model", "m1");

        assert_eq!(query.class_name, "ModelField");
        assert_eq!(query.constraints.get("isDisabled"), Some(&json!(false)));
        assert_eq!(
            query.constraints.get("model"),
            Some(&json!({
                "__type": "Pointer",
                "className": "Model",
                "objectId": "m1",
            }))
        );
    }

    #[test]
    fn test_unfiltered_query_has_no_constraints() {
        let client = test_client();
        let query = client.query("MediaItem");
        assert!(query.constraints.is_empty());
    }

    #[tokio::test]
    async fn test_find_unreachable_server() {
        let config = SourceConfig::new("app", "key", "http://localhost:9", "site1", "Blog");
        let client = BackendClient::new(&config).unwrap();
        let result = client.query("Model").find().await;
        assert!(matches!(result, Err(SitegraphError::Http(_))));
    }
}
