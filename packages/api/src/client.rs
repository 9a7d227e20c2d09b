//! # HTTP user source
//!
//! [`UsersClient`] issues a single `GET` against the configured endpoint and
//! decodes the body as a JSON array of [`UserRecord`]s. Extra fields on each
//! object are ignored. There is no retry, no timeout and no authentication.
//!
//! The client works on every platform: on WASM `reqwest` goes through the
//! browser's `fetch`, on native it uses its own connection pool.

use reqwest::Url;
use store::{UserRecord, UserSource, UsersConfig};

use crate::error::ApiError;

#[derive(Clone, Debug)]
pub struct UsersClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl UsersClient {
    /// Create a client for an absolute `http`/`https` endpoint.
    pub fn new(endpoint: &str) -> Result<Self, ApiError> {
        let url = Url::parse(endpoint).map_err(|e| ApiError::InvalidEndpoint {
            endpoint: endpoint.to_string(),
            reason: e.to_string(),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ApiError::InvalidEndpoint {
                endpoint: endpoint.to_string(),
                reason: format!("unsupported scheme {}", url.scheme()),
            });
        }
        Ok(Self {
            http: reqwest::Client::new(),
            endpoint: url,
        })
    }

    pub fn from_config(config: &UsersConfig) -> Result<Self, ApiError> {
        Self::new(&config.source.endpoint)
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Fetch and decode the user list.
    pub async fn list_users(&self) -> Result<Vec<UserRecord>, ApiError> {
        tracing::debug!("GET {}", self.endpoint);
        let body = self
            .http
            .get(self.endpoint.clone())
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        let users: Vec<UserRecord> = serde_json::from_str(&body)?;
        Ok(users)
    }
}

impl UserSource for UsersClient {
    type Error = ApiError;

    async fn fetch_users(&self) -> Result<Vec<UserRecord>, ApiError> {
        self.list_users().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::Router;
    use store::{fetch_initial, LoadStatus, UserId, UserStore};
    use tokio::net::TcpListener;

    const USERS_JSON: &str = r#"[
        {
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "address": { "street": "Kulas Light", "city": "Gwenborough" },
            "phone": "1-770-736-8031 x56442",
            "website": "hildegard.org"
        },
        {
            "id": 2,
            "name": "Ervin Howell",
            "username": "Antonette",
            "email": "Shanna@melissa.tv",
            "phone": "010-692-6593 x09125"
        }
    ]"#;

    /// Serve a few fixed routes on an ephemeral port and return its base URL.
    async fn spawn_server() -> String {
        let app = Router::new()
            .route("/users", get(|| async { USERS_JSON }))
            .route(
                "/broken",
                get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
            )
            .route("/garbage", get(|| async { "<html>not json</html>" }))
            .route("/object", get(|| async { "{}" }));

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn test_list_users() {
        let base = spawn_server().await;
        let client = UsersClient::new(&format!("{base}/users")).unwrap();

        let users = client.list_users().await.unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].id, UserId(1));
        assert_eq!(users[0].name, "Leanne Graham");
        assert_eq!(users[0].email, "Sincere@april.biz");
        assert_eq!(users[1].phone, "010-692-6593 x09125");
    }

    #[tokio::test]
    async fn test_error_status() {
        let base = spawn_server().await;
        let client = UsersClient::new(&format!("{base}/broken")).unwrap();

        let err = client.list_users().await.unwrap_err();
        assert!(matches!(err, ApiError::Request(_)));
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let base = spawn_server().await;

        let client = UsersClient::new(&format!("{base}/garbage")).unwrap();
        assert!(matches!(client.list_users().await, Err(ApiError::Decode(_))));

        let client = UsersClient::new(&format!("{base}/object")).unwrap();
        assert!(matches!(client.list_users().await, Err(ApiError::Decode(_))));
    }

    #[tokio::test]
    async fn test_connection_refused() {
        // Grab a free port, then release it so nothing is listening.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = UsersClient::new(&format!("http://{addr}/users")).unwrap();
        assert!(matches!(client.list_users().await, Err(ApiError::Request(_))));
    }

    #[test]
    fn test_invalid_endpoint() {
        assert!(matches!(
            UsersClient::new("not a url"),
            Err(ApiError::InvalidEndpoint { .. })
        ));
        assert!(matches!(
            UsersClient::new("ftp://example.com/users"),
            Err(ApiError::InvalidEndpoint { .. })
        ));
    }

    #[test]
    fn test_from_config_uses_endpoint() {
        let config = UsersConfig::default().with_endpoint("http://localhost:9999/people");
        let client = UsersClient::from_config(&config).unwrap();
        assert_eq!(client.endpoint().as_str(), "http://localhost:9999/people");
    }

    #[tokio::test]
    async fn test_initial_load_fills_store() {
        let base = spawn_server().await;
        let client = UsersClient::new(&format!("{base}/users")).unwrap();
        let mut store = UserStore::new();

        let result = fetch_initial(store.load_status(), &client).await.unwrap();
        assert_eq!(store.apply_loaded(result), LoadStatus::Loaded(2));
        assert_eq!(store.len(), 2);
    }

    #[tokio::test]
    async fn test_failed_load_leaves_store_empty() {
        let base = spawn_server().await;
        let client = UsersClient::new(&format!("{base}/broken")).unwrap();
        let mut store = UserStore::new();

        let result = fetch_initial(store.load_status(), &client).await.unwrap();
        assert_eq!(store.apply_loaded(result), LoadStatus::Failed);
        assert!(store.is_empty());
    }
}
