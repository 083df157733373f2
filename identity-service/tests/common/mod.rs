use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use identity_service::domain::user::service::UserService;
use identity_service::inbound::http::router::create_router;
use identity_service::outbound::repositories::InMemoryUserRepository;

pub const TEST_JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns a real server on a random port
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let authenticator = Arc::new(Authenticator::new(TEST_JWT_SECRET));
        let user_repository = Arc::new(InMemoryUserRepository::new());

        let user_service = Arc::new(UserService::new(
            user_repository,
            Arc::clone(&authenticator),
            24,
        ));

        user_service
            .ensure_builtin_users()
            .await
            .expect("Failed to provision built-in users");

        let router = create_router(user_service, authenticator, Duration::from_secs(5));

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
        }
    }

    /// Log in and return the granted token; panics on any failure.
    pub async fn login(&self, username: &str, password: &str) -> String {
        let response = self
            .post("/api/v1/login")
            .json(&serde_json::json!({"username": username, "password": password}))
            .send()
            .await
            .expect("Failed to execute login request");
        assert_eq!(
            response.status(),
            reqwest::StatusCode::OK,
            "login as {username} failed"
        );

        let body: serde_json::Value = response.json().await.expect("Failed to parse login body");
        body["token"]
            .as_str()
            .expect("Token missing from login body")
            .to_string()
    }

    /// Token for the built-in administrator.
    pub async fn admin_token(&self) -> String {
        self.login("admin", "admin").await
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Helper to make POST request with Bearer token
    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    /// Helper to make PATCH request with Bearer token
    pub fn patch_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .patch(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    /// Helper to make DELETE request with Bearer token
    pub fn delete_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .delete(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }
}
