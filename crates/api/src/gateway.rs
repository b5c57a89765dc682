//! API gateway
//!
//! A thin `reqwest` wrapper that attaches the session's bearer token to
//! every call. Rules:
//!
//! - no token: fail with [`ShopError::AuthMissing`] before any network I/O
//! - HTTP 401: purge the stored token, then fail with [`ShopError::AuthRejected`]
//! - other non-2xx: fail with the body's `error` field, or a generic message
//!
//! Bodies are JSON only; image upload is the one multipart exception and
//! lives in [`crate::upload`].

use crate::session::Session;
use champa_core::{GENERIC_FAILURE, ShopConfig, ShopError, ShopResult};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode, header};
use serde::{Serialize, de::DeserializeOwned};
use std::sync::Arc;
use tracing::{debug, warn};

/// Error body the backend sends with non-2xx answers
#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Map a transport failure to a user-facing request error
pub(crate) fn transport_error(e: reqwest::Error) -> ShopError {
    let message = if e.is_timeout() {
        "Request timed out. Please try again.".to_string()
    } else if e.is_connect() {
        "Unable to connect to the server. Please check your connection.".to_string()
    } else if e.is_decode() {
        "Received an unexpected response from the server.".to_string()
    } else {
        e.to_string()
    };
    ShopError::request_failed(e.status().map(|s| s.as_u16()), message)
}

// ============================================================================
// Gateway
// ============================================================================

/// HTTP client for the storefront backend
#[derive(Debug, Clone)]
pub struct ApiGateway {
    client: Client,
    base_url: String,
    session: Arc<Session>,
}

impl ApiGateway {
    /// Create a gateway for `config.base_url` using `session` for auth
    pub fn new(config: &ShopConfig, session: Arc<Session>) -> ShopResult<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| ShopError::internal(format!("failed to create HTTP client: {e}")))?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    /// The session whose token this gateway sends
    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the full URL for an API path
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) fn client(&self) -> &Client {
        &self.client
    }

    /// The current token, or `AuthMissing` without touching the network
    pub(crate) fn require_token(&self) -> ShopResult<String> {
        self.session.token().ok_or(ShopError::AuthMissing)
    }

    // ========================================================================
    // Generic request helpers
    // ========================================================================

    /// Send a GET request and deserialise the response
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ShopResult<T> {
        self.request::<T, ()>(Method::GET, path, None).await
    }

    /// Send a POST request with a JSON body and deserialise the response
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ShopResult<T> {
        self.request(Method::POST, path, Some(body)).await
    }

    /// Send a PUT request with a JSON body and deserialise the response
    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ShopResult<T> {
        self.request(Method::PUT, path, Some(body)).await
    }

    /// Send a DELETE request, discarding the response body
    pub async fn delete(&self, path: &str) -> ShopResult<()> {
        self.request::<serde_json::Value, ()>(Method::DELETE, path, None)
            .await
            .map(|_| ())
    }

    /// Authenticated JSON request
    async fn request<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> ShopResult<T> {
        let token = self.require_token()?;
        debug!("{method} {path}");

        let mut req = self
            .client
            .request(method, self.url(path))
            .bearer_auth(token)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(body) = body {
            let json = serde_json::to_vec(body)?;
            req = req.body(json);
        }
        self.send(req).await
    }

    /// Unauthenticated JSON request (public storefront endpoints, login)
    pub(crate) async fn request_public<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> ShopResult<T> {
        debug!("{method} {path} (public)");
        let mut req = self.client.request(method, self.url(path));
        if let Some(body) = body {
            req = req.json(body);
        }
        let response = req.send().await.map_err(transport_error)?;
        Self::decode(response).await
    }

    /// Send a prepared authenticated request and apply the 401 rule
    pub(crate) async fn send<T: DeserializeOwned>(&self, req: RequestBuilder) -> ShopResult<T> {
        let response = req.send().await.map_err(transport_error)?;
        if response.status() == StatusCode::UNAUTHORIZED {
            let message = Self::error_message(response).await;
            warn!("Server rejected the session token: {message}");
            self.session.clear();
            return Err(ShopError::AuthRejected { message });
        }
        Self::decode(response).await
    }

    /// Deserialise a 2xx body or turn any other status into `RequestFailed`
    async fn decode<T: DeserializeOwned>(response: Response) -> ShopResult<T> {
        let status = response.status();
        if status.is_success() {
            let bytes = response.bytes().await.map_err(transport_error)?;
            serde_json::from_slice(&bytes).map_err(|e| {
                ShopError::request_failed(
                    Some(status.as_u16()),
                    format!("Received an unexpected response from the server: {e}"),
                )
            })
        } else {
            let code = status.as_u16();
            let message = Self::error_message(response).await;
            Err(ShopError::request_failed(Some(code), message))
        }
    }

    /// The body's `error` field, or the generic fallback
    async fn error_message(response: Response) -> String {
        response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.error)
            .filter(|msg| !msg.trim().is_empty())
            .unwrap_or_else(|| GENERIC_FAILURE.to_string())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use champa_core::{MemoryStorage, SharedStorage};
    use serde_json::json;
    use wiremock::matchers::{body_json, header as header_eq, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn gateway_for(server: &MockServer, token: Option<&str>) -> (ApiGateway, SharedStorage) {
        let storage = MemoryStorage::shared();
        let session = Session::shared(storage.clone());
        if let Some(token) = token {
            session.set_token(token).unwrap();
        }
        let config = ShopConfig {
            base_url: server.uri(),
            ..ShopConfig::default()
        };
        (ApiGateway::new(&config, session).unwrap(), storage)
    }

    #[tokio::test]
    async fn test_missing_token_fails_before_network() {
        let server = MockServer::start().await;
        let (gateway, _) = gateway_for(&server, None);

        let err = gateway
            .get::<serde_json::Value>("/api/admin/me")
            .await
            .unwrap_err();
        assert!(matches!(err, ShopError::AuthMissing));
        assert_eq!(err.to_string(), "Login required");

        let received = server.received_requests().await.unwrap_or_default();
        assert!(received.is_empty());
    }

    #[tokio::test]
    async fn test_bearer_and_json_headers() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/admin/admins"))
            .and(header_eq("authorization", "Bearer tok-1"))
            .and(header_eq("content-type", "application/json"))
            .and(body_json(json!({"username": "keo"})))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 3})))
            .expect(1)
            .mount(&server)
            .await;

        let (gateway, _) = gateway_for(&server, Some("tok-1"));
        let created: serde_json::Value = gateway
            .post("/api/admin/admins", &json!({"username": "keo"}))
            .await
            .unwrap();
        assert_eq!(created["id"], 3);
    }

    #[tokio::test]
    async fn test_401_purges_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/admin/dashboard"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({"error": "session expired"})))
            .expect(1)
            .mount(&server)
            .await;

        let (gateway, storage) = gateway_for(&server, Some("stale"));
        let err = gateway
            .get::<serde_json::Value>("/api/admin/dashboard")
            .await
            .unwrap_err();
        assert!(matches!(err, ShopError::AuthRejected { ref message } if message == "session expired"));
        assert_eq!(storage.get(champa_core::TOKEN_KEY), None);

        // The next call fails locally
        let err = gateway
            .get::<serde_json::Value>("/api/admin/dashboard")
            .await
            .unwrap_err();
        assert!(matches!(err, ShopError::AuthMissing));
    }

    #[tokio::test]
    async fn test_server_error_message_and_fallback() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/api/admin/products/4"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({"error": "price must be a number"})))
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/api/admin/products/4"))
            .respond_with(ResponseTemplate::new(500).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let (gateway, storage) = gateway_for(&server, Some("tok"));
        let err = gateway
            .put::<serde_json::Value, _>("/api/admin/products/4", &json!({"price": "x"}))
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(400));
        assert_eq!(err.user_message(), "price must be a number");

        let err = gateway.delete("/api/admin/products/4").await.unwrap_err();
        assert_eq!(err.status(), Some(500));
        assert_eq!(err.user_message(), GENERIC_FAILURE);

        // Only 401 touches the token
        assert!(storage.get(champa_core::TOKEN_KEY).is_some());
    }

    #[tokio::test]
    async fn test_malformed_success_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/admin/me"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let (gateway, _) = gateway_for(&server, Some("tok"));
        let err = gateway
            .get::<serde_json::Value>("/api/admin/me")
            .await
            .unwrap_err();
        assert!(matches!(err, ShopError::RequestFailed { status: Some(200), .. }));
    }

    #[tokio::test]
    async fn test_connection_refused_is_request_failed() {
        let storage = MemoryStorage::shared();
        let session = Session::shared(storage);
        session.set_token("tok").unwrap();
        let config = ShopConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            request_timeout_secs: 2,
            ..ShopConfig::default()
        };
        let gateway = ApiGateway::new(&config, session).unwrap();
        let err = gateway
            .get::<serde_json::Value>("/api/admin/me")
            .await
            .unwrap_err();
        assert!(matches!(err, ShopError::RequestFailed { status: None, .. }));
    }
}
