//! REST client for the Firebase Realtime Database.

use std::collections::BTreeMap;

use reqwest::Client;
use serde_json::Value;
use url::Url;

use crate::config::FirebaseConfig;

/// Error type for database operations.
#[derive(Debug, thiserror::Error)]
pub enum FirebaseError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Database returned status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Invalid database URL: {0}")]
    InvalidUrl(String),

    #[error("Unexpected response shape: {0}")]
    InvalidResponse(String),
}

/// Result type for database operations.
pub type FirebaseResult<T> = Result<T, FirebaseError>;

/// Client for the Realtime Database REST surface.
///
/// A node's children are fetched as a map keyed by generated push id. The
/// `auth` token is appended to every request and is never logged.
///
/// # Example
/// ```ignore
/// let client = FirebaseClient::new(&FirebaseConfig::from_env()?)?;
/// let children = client.fetch_children("sensors/light").await?;
/// client.delete("sensors/light/-NxAbCd").await?;
/// ```
#[derive(Clone)]
pub struct FirebaseClient {
    http_client: Client,
    base_url: String,
    auth_token: String,
}

impl FirebaseClient {
    /// Create a client from connection settings.
    ///
    /// The database URL is validated up front; a malformed endpoint fails
    /// here rather than on the first request.
    pub fn new(config: &FirebaseConfig) -> FirebaseResult<Self> {
        let http_client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()?;

        let mut base_url = config.database_url.clone();
        // Remove trailing slash
        if base_url.ends_with('/') {
            base_url.pop();
        }

        if Url::parse(&base_url).is_err() {
            return Err(FirebaseError::InvalidUrl(base_url));
        }

        Ok(Self {
            http_client,
            base_url,
            auth_token: config.auth_token.clone(),
        })
    }

    fn node_url(&self, path: &str) -> String {
        format!("{}/{}.json", self.base_url, path.trim_matches('/'))
    }

    /// Fetch all children of a node.
    ///
    /// Returns `None` when the node does not exist (the REST surface renders
    /// absent nodes as JSON `null`).
    pub async fn fetch_children(
        &self,
        path: &str,
    ) -> FirebaseResult<Option<BTreeMap<String, Value>>> {
        let response = self
            .http_client
            .get(self.node_url(path))
            .query(&[("auth", self.auth_token.as_str())])
            .send()
            .await?;

        Self::children_from(Self::expect_success(response).await?.json().await?)
    }

    /// Fetch the last `n` children of a node ordered by a child field.
    ///
    /// Mirrors the dashboard's live query shape: `orderBy` takes the field
    /// name as a quoted JSON string per the REST conventions, and
    /// `limitToLast` bounds the result set.
    pub async fn query_last_n(
        &self,
        path: &str,
        order_by: &str,
        n: u32,
    ) -> FirebaseResult<Option<BTreeMap<String, Value>>> {
        let order_by_quoted = format!("\"{order_by}\"");
        let limit = n.to_string();
        let response = self
            .http_client
            .get(self.node_url(path))
            .query(&[
                ("orderBy", order_by_quoted.as_str()),
                ("limitToLast", limit.as_str()),
                ("auth", self.auth_token.as_str()),
            ])
            .send()
            .await?;

        Self::children_from(Self::expect_success(response).await?.json().await?)
    }

    /// Delete a node.
    ///
    /// Deleting a nonexistent node succeeds; deletes are naturally
    /// idempotent.
    pub async fn delete(&self, path: &str) -> FirebaseResult<()> {
        let response = self
            .http_client
            .delete(self.node_url(path))
            .query(&[("auth", self.auth_token.as_str())])
            .send()
            .await?;

        Self::expect_success(response).await?;
        Ok(())
    }

    async fn expect_success(response: reqwest::Response) -> FirebaseResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response.text().await.unwrap_or_default();
        Err(FirebaseError::Api {
            status: status.as_u16(),
            message,
        })
    }

    fn children_from(value: Value) -> FirebaseResult<Option<BTreeMap<String, Value>>> {
        match value {
            Value::Null => Ok(None),
            Value::Object(map) => Ok(Some(map.into_iter().collect())),
            other => Err(FirebaseError::InvalidResponse(format!(
                "expected an object of children, got {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path, query_param},
    };

    use super::*;

    fn test_config(url: &str) -> FirebaseConfig {
        FirebaseConfig {
            database_url: url.to_string(),
            auth_token: "test-token".to_string(),
        }
    }

    #[test]
    fn test_trailing_slash_is_stripped() {
        let client = FirebaseClient::new(&test_config("https://db.example.test/")).unwrap();
        assert_eq!(client.node_url("sensors/light"), "https://db.example.test/sensors/light.json");
    }

    #[test]
    fn test_invalid_url_is_rejected() {
        assert!(matches!(
            FirebaseClient::new(&test_config("not a url")),
            Err(FirebaseError::InvalidUrl(_))
        ));
    }

    #[tokio::test]
    async fn test_fetch_children_returns_none_for_absent_node() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/sensors/motion.json"))
            .and(query_param("auth", "test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(Value::Null))
            .mount(&server)
            .await;

        let client = FirebaseClient::new(&test_config(&server.uri())).unwrap();
        let children = client.fetch_children("sensors/motion").await.unwrap();
        assert!(children.is_none());
    }

    #[tokio::test]
    async fn test_fetch_children_returns_map() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/sensors/light.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "-Nx1": {"timestamp": 1000, "value": 2048.0},
                "-Nx2": {"timestamp": 2000, "value": 1024.0},
            })))
            .mount(&server)
            .await;

        let client = FirebaseClient::new(&test_config(&server.uri())).unwrap();
        let children = client.fetch_children("sensors/light").await.unwrap().unwrap();
        assert_eq!(children.len(), 2);
        assert_eq!(children["-Nx1"]["timestamp"], json!(1000));
    }

    #[tokio::test]
    async fn test_query_last_n_sends_firebase_query_params() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/sensors/gas.json"))
            .and(query_param("orderBy", "\"timestamp\""))
            .and(query_param("limitToLast", "20"))
            .and(query_param("auth", "test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "-Nx1": {"timestamp": 1000, "value": 512.0},
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = FirebaseClient::new(&test_config(&server.uri())).unwrap();
        let children = client
            .query_last_n("sensors/gas", "timestamp", 20)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(children.len(), 1);
    }

    #[tokio::test]
    async fn test_delete_hits_child_node() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/sensors/light/-Nx1.json"))
            .and(query_param("auth", "test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(Value::Null))
            .expect(1)
            .mount(&server)
            .await;

        let client = FirebaseClient::new(&test_config(&server.uri())).unwrap();
        client.delete("sensors/light/-Nx1").await.unwrap();
    }

    #[tokio::test]
    async fn test_non_success_status_is_an_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/sensors/gas.json"))
            .respond_with(ResponseTemplate::new(401).set_body_string("Permission denied"))
            .mount(&server)
            .await;

        let client = FirebaseClient::new(&test_config(&server.uri())).unwrap();
        let err = client.fetch_children("sensors/gas").await.unwrap_err();
        match err {
            FirebaseError::Api { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "Permission denied");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_scalar_response_is_invalid() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/sensors/gas.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!(42)))
            .mount(&server)
            .await;

        let client = FirebaseClient::new(&test_config(&server.uri())).unwrap();
        assert!(matches!(
            client.fetch_children("sensors/gas").await,
            Err(FirebaseError::InvalidResponse(_))
        ));
    }
}
