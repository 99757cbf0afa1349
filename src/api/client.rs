//! To-do API client implementation.
//!
//! Read-only access to the to-do list and to individual users.

use crate::api::models::{Todo, User};
use crate::config::Config;
use crate::error::ClientError;
use reqwest::Client;
use serde::de::DeserializeOwned;

/// To-do API client.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct TodoClient {
    /// HTTP client for API requests
    client: Client,
    /// Base URL without trailing slash
    base_url: String,
}

impl TodoClient {
    /// Create a new client from configuration.
    ///
    /// # Arguments
    /// * `config` - Application configuration
    ///
    /// # Returns
    /// * `Result<TodoClient, ClientError>` - New client or error
    ///
    /// # Details
    /// Requires an `http://` or `https://` base URL.
    pub fn new(config: &Config) -> Result<Self, ClientError> {
        let base_url = config.api_base_url.trim().trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ClientError::InvalidBaseUrl(config.api_base_url.clone()));
        }

        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(ClientError::Build)?;

        Ok(Self { client, base_url })
    }

    /// Base URL requests are issued against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch every to-do.
    pub async fn get_todos(&self) -> Result<Vec<Todo>, ClientError> {
        self.get_json(&format!("{}/todos.json", self.base_url)).await
    }

    /// Fetch a single user by ID.
    pub async fn get_user(&self, user_id: i64) -> Result<User, ClientError> {
        self.get_json(&format!("{}/users/{}.json", self.base_url, user_id))
            .await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ClientError> {
        tracing::debug!(url, "GET");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| ClientError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Status {
                url: url.to_string(),
                status,
                body,
            });
        }

        response.json().await.map_err(|source| ClientError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> TodoClient {
        let config = Config {
            api_base_url: format!("{}/api/", server.uri()),
            ..Config::default()
        };
        TodoClient::new(&config).unwrap()
    }

    #[test]
    fn test_client_new_rejects_bad_base_url() {
        for url in ["", "ftp://example.com", "example.com/api"] {
            let config = Config {
                api_base_url: url.to_string(),
                ..Config::default()
            };
            assert!(matches!(
                TodoClient::new(&config),
                Err(ClientError::InvalidBaseUrl(_))
            ));
        }
    }

    #[test]
    fn test_client_new_trims_trailing_slash() {
        let config = Config {
            api_base_url: "https://example.com/api/".to_string(),
            ..Config::default()
        };
        let client = TodoClient::new(&config).unwrap();
        assert_eq!(client.base_url(), "https://example.com/api");
    }

    #[tokio::test]
    async fn test_get_todos() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/todos.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": 1, "title": "delectus aut autem", "completed": false, "userId": 1},
                {"id": 2, "title": "quis ut nam facilis", "completed": true, "userId": 2}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let todos = client_for(&server).get_todos().await.unwrap();
        assert_eq!(todos.len(), 2);
        assert_eq!(todos[1], Todo::new(2, "quis ut nam facilis", true, 2));
    }

    #[tokio::test]
    async fn test_get_user() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/users/3.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": 3,
                "name": "Clementine Bauch",
                "email": "Nathan@yesenia.net",
                "username": "Samantha"
            })))
            .mount(&server)
            .await;

        let user = client_for(&server).get_user(3).await.unwrap();
        assert_eq!(user.name, "Clementine Bauch");
        assert_eq!(user.username.as_deref(), Some("Samantha"));
    }

    #[tokio::test]
    async fn test_non_success_status_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/users/99.json"))
            .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
            .mount(&server)
            .await;

        match client_for(&server).get_user(99).await {
            Err(ClientError::Status { status, body, .. }) => {
                assert_eq!(status, StatusCode::NOT_FOUND);
                assert_eq!(body, "not found");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/todos.json"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        assert!(matches!(
            client_for(&server).get_todos().await,
            Err(ClientError::Decode { .. })
        ));
    }
}
