//! Typed calls for every backend route the app uses

use crate::gateway::ApiGateway;
use champa_core::{
    Account, AccountKind, AdminIdentity, Credentials, DashboardStats, LoginResponse, NewAccount,
    ProductDraft, ProductId, ProductRecord, Review, ShopResult, Validatable,
};
use reqwest::Method;
use tracing::{info, warn};

// ============================================================================
// Public storefront
// ============================================================================

impl ApiGateway {
    /// `GET /api/products`, no login needed
    pub async fn public_products(&self) -> ShopResult<Vec<ProductRecord>> {
        self.request_public::<_, ()>(Method::GET, "/api/products", None)
            .await
    }

    /// `GET /api/reviews`, no login needed
    pub async fn public_reviews(&self) -> ShopResult<Vec<Review>> {
        self.request_public::<_, ()>(Method::GET, "/api/reviews", None)
            .await
    }

    // ========================================================================
    // Session
    // ========================================================================

    /// Log in and store the returned token
    pub async fn login(&self, credentials: &Credentials) -> ShopResult<LoginResponse> {
        credentials.validate()?;
        let trimmed = Credentials {
            username: credentials.username.trim().to_string(),
            password: credentials.password.trim().to_string(),
        };
        let response: LoginResponse = self
            .request_public(Method::POST, "/api/login", Some(&trimmed))
            .await?;
        self.session().set_token(&response.token)?;
        info!("Logged in as {} ({})", response.user.username, response.user.role);
        Ok(response)
    }

    /// Invalidate the token server-side; the local token is dropped either way
    pub async fn logout(&self) -> ShopResult<()> {
        let Some(token) = self.session().token() else {
            return Ok(());
        };
        let req = self
            .client()
            .post(self.url("/api/logout"))
            .bearer_auth(token);
        let outcome = self.send::<serde_json::Value>(req).await;
        self.session().clear();
        if let Err(e) = &outcome {
            warn!("Logout request failed: {e}");
        }
        outcome.map(|_| ())
    }

    // ========================================================================
    // Admin
    // ========================================================================

    /// `GET /api/admin/me`, the liveness probe run before an admin page loads
    pub async fn admin_me(&self) -> ShopResult<AdminIdentity> {
        self.get("/api/admin/me").await
    }

    pub async fn dashboard(&self) -> ShopResult<DashboardStats> {
        self.get("/api/admin/dashboard").await
    }

    /// List admins or customers
    pub async fn list_accounts(&self, kind: AccountKind) -> ShopResult<Vec<Account>> {
        self.get(&format!("/api/admin/{}", kind.plural())).await
    }

    /// Create an admin account
    pub async fn create_admin(&self, account: &NewAccount) -> ShopResult<Account> {
        account.validate()?;
        self.post("/api/admin/admins", account).await
    }

    /// Create a customer account through the public registration route
    pub async fn register_customer(&self, account: &NewAccount) -> ShopResult<Account> {
        account.validate()?;
        self.post("/api/register", account).await
    }

    /// Create an account of either kind
    pub async fn create_account(&self, kind: AccountKind, account: &NewAccount) -> ShopResult<Account> {
        match kind {
            AccountKind::Admin => self.create_admin(account).await,
            AccountKind::Customer => self.register_customer(account).await,
        }
    }

    pub async fn delete_account(&self, kind: AccountKind, id: i64) -> ShopResult<()> {
        self.delete(&format!("/api/admin/{}/{id}", kind.plural()))
            .await
    }

    pub async fn list_products(&self) -> ShopResult<Vec<ProductRecord>> {
        self.get("/api/admin/products").await
    }

    pub async fn create_product(&self, draft: &ProductDraft) -> ShopResult<ProductRecord> {
        draft.validate()?;
        self.post("/api/admin/products", draft).await
    }

    pub async fn update_product(&self, id: ProductId, draft: &ProductDraft) -> ShopResult<ProductRecord> {
        draft.validate()?;
        self.put(&format!("/api/admin/products/{id}"), draft).await
    }

    pub async fn delete_product(&self, id: ProductId) -> ShopResult<()> {
        self.delete(&format!("/api/admin/products/{id}")).await
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Session;
    use champa_core::{MemoryStorage, ShopConfig, ShopError};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::sync::Arc;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn gateway(server: &MockServer) -> (ApiGateway, Arc<Session>) {
        let session = Session::shared(MemoryStorage::shared());
        let config = ShopConfig {
            base_url: server.uri(),
            ..ShopConfig::default()
        };
        (ApiGateway::new(&config, session.clone()).unwrap(), session)
    }

    #[tokio::test]
    async fn test_public_products_without_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/products"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 11, "name": "Blue Wave", "price": 150000, "stock": 4,
                 "image": "/static/uploads/product/a.jpg", "description": "Jersey",
                 "category": "jersey", "price_type": "ຄໍມົນ"},
                {"id": 12, "name": "Run Tee", "price": 90000, "stock": 0,
                 "image": null, "description": null, "category": null, "price_type": null}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let (gateway, session) = gateway(&server);
        assert!(!session.is_logged_in());
        let products = gateway.public_products().await.unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].name, "Blue Wave");
        assert_eq!(products[1].stock, Some(0));
    }

    #[tokio::test]
    async fn test_login_stores_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/login"))
            .and(body_json(json!({"username": "noy", "password": "pw"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "token": "fresh-token",
                "user": {"id": 1, "username": "noy", "role": "admin"}
            })))
            .mount(&server)
            .await;

        let (gateway, session) = gateway(&server);
        let creds = Credentials {
            username: " noy ".to_string(),
            password: "pw".to_string(),
        };
        let response = gateway.login(&creds).await.unwrap();
        assert_eq!(response.user.role, "admin");
        assert_eq!(session.token().as_deref(), Some("fresh-token"));
    }

    #[tokio::test]
    async fn test_login_validation_blocks_request() {
        let server = MockServer::start().await;
        let (gateway, _) = gateway(&server);
        let err = gateway.login(&Credentials::default()).await.unwrap_err();
        assert!(err.is_validation());
        assert!(server.received_requests().await.unwrap_or_default().is_empty());
    }

    #[tokio::test]
    async fn test_login_failure_surfaces_server_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/login"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({"error": "wrong password"})))
            .mount(&server)
            .await;

        let (gateway, session) = gateway(&server);
        let creds = Credentials {
            username: "noy".to_string(),
            password: "bad".to_string(),
        };
        let err = gateway.login(&creds).await.unwrap_err();
        assert_eq!(err.user_message(), "wrong password");
        assert!(!session.is_logged_in());
    }

    #[tokio::test]
    async fn test_logout_clears_token_even_on_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/logout"))
            .and(header("authorization", "Bearer t1"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        let (gateway, session) = gateway(&server);
        session.set_token("t1").unwrap();
        assert!(gateway.logout().await.is_err());
        assert!(!session.is_logged_in());

        // Already logged out: nothing to send
        gateway.logout().await.unwrap();
    }

    #[tokio::test]
    async fn test_account_routes() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/admin/customers"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 5, "username": "keo", "phone": "02055550000", "role": "customer"}
            ])))
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/api/admin/admins/9"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/register"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!(
                {"id": 6, "username": "new", "phone": null, "role": "customer"}
            )))
            .expect(1)
            .mount(&server)
            .await;

        let (gateway, session) = gateway(&server);
        session.set_token("tok").unwrap();

        let customers = gateway.list_accounts(AccountKind::Customer).await.unwrap();
        assert_eq!(customers[0].username, "keo");

        gateway.delete_account(AccountKind::Admin, 9).await.unwrap();

        let created = gateway
            .create_account(
                AccountKind::Customer,
                &NewAccount {
                    username: "new".to_string(),
                    password: "pw".to_string(),
                    phone: None,
                },
            )
            .await
            .unwrap();
        assert_eq!(created.id, 6);
    }

    #[tokio::test]
    async fn test_invalid_draft_is_not_sent() {
        let server = MockServer::start().await;
        let (gateway, session) = gateway(&server);
        session.set_token("tok").unwrap();

        let err = gateway
            .create_product(&ProductDraft::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ShopError::FieldValidation { ref field, .. } if field == "name"));
        assert!(server.received_requests().await.unwrap_or_default().is_empty());
    }
}
