use std::collections::HashMap;
use std::sync::Arc;

use base64::{engine::general_purpose::STANDARD as B64, Engine};
use reqwest::{Client, Response};
use serde::Serialize;
use serde_json::{json, Value};
use test_context::AsyncTestContext;
use tokio::sync::RwLock;
use uuid::Uuid;

use member_service::app_state::{AppState, SessionStoreType};
use member_service::domain::{LoginResponse, RefreshSession, SessionStore, SessionStoreError};
use member_service::services::{
    HashmapBoardStore, HashmapCategoryStore, HashmapMemberStore, HashmapSessionStore,
    MemberService, TokenService,
};
use member_service::utils::{AdminBootstrap, Config};
use member_service::Application;

pub const PASSWORD: &str = "Wonder!land1";
pub const ADMIN_USER_ID: &str = "root_admin";
pub const ADMIN_PASSWORD: &str = "Sup3r!Secret";

fn test_config() -> Config {
    let secret = B64.encode([3u8; 32]);
    let vars: HashMap<&str, String> = HashMap::from([
        ("REFRESH_HASH_KEY_B64", B64.encode([7u8; 32])),
        (
            "JWT_HS256_KEYS_JSON",
            format!(r#"[{{"kid":"k1","secret_b64":"{secret}"}}]"#),
        ),
        ("JWT_ACTIVE_KID", "k1".to_string()),
        ("ARGON2_MEMORY_KIB", "1024".to_string()),
        ("ARGON2_ITERATIONS", "1".to_string()),
    ]);
    Config::from_vars(|key| vars.get(key).cloned()).expect("test config")
}

pub struct TestApp {
    pub address: String,
    pub http_client: Client,
    pub state: AppState,
}

/// Session store whose backing service is down: every call fails.
pub struct UnavailableSessionStore;

#[async_trait::async_trait]
impl SessionStore for UnavailableSessionStore {
    async fn put(
        &mut self,
        _: RefreshSession,
        _: chrono::Duration,
    ) -> Result<(), SessionStoreError> {
        Err(SessionStoreError::Unavailable("connection refused".into()))
    }

    async fn get(&self, _: &str) -> Result<Option<RefreshSession>, SessionStoreError> {
        Err(SessionStoreError::Unavailable("connection refused".into()))
    }

    async fn invalidate(&mut self, _: &str) -> Result<bool, SessionStoreError> {
        Err(SessionStoreError::Unavailable("connection refused".into()))
    }
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_session_store(Arc::new(RwLock::new(HashmapSessionStore::default()))).await
    }

    pub async fn with_session_store(session_store: SessionStoreType) -> Self {
        let config = Arc::new(test_config());
        let token_service = Arc::new(TokenService::from_config(&config).unwrap());
        let app_state = AppState::new(
            Arc::new(RwLock::new(HashmapMemberStore::default())),
            session_store,
            Arc::new(RwLock::new(HashmapCategoryStore::default())),
            Arc::new(RwLock::new(HashmapBoardStore::default())),
            token_service,
            config,
        );

        MemberService::bootstrap_admin(
            &app_state,
            &AdminBootstrap {
                user_id: ADMIN_USER_ID.to_string(),
                password: ADMIN_PASSWORD.to_string(),
                email: "admin@example.com".to_string(),
            },
        )
        .await
        .expect("admin bootstrap");

        let app = Application::build(app_state.clone(), "127.0.0.1:0")
            .await
            .expect("Failed to build app");
        let address = app.address.clone();

        tokio::spawn(async move {
            if let Err(e) = app.run().await {
                eprintln!("Test server error: {}", e);
            }
        });

        TestApp {
            address,
            http_client: Client::new(),
            state: app_state,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", &self.address, path)
    }

    pub async fn get(&self, path: &str, token: Option<&str>) -> Response {
        let mut request = self.http_client.get(self.url(path));
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        request.send().await.expect("Failed to execute GET request.")
    }

    pub async fn send_json<B: Serialize>(
        &self,
        method: reqwest::Method,
        path: &str,
        body: &B,
        token: Option<&str>,
    ) -> Response {
        let mut request = self.http_client.request(method, self.url(path)).json(body);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        request.send().await.expect("Failed to execute request.")
    }

    pub async fn post<B: Serialize>(&self, path: &str, body: &B, token: Option<&str>) -> Response {
        self.send_json(reqwest::Method::POST, path, body, token).await
    }

    pub async fn delete(&self, path: &str, token: &str) -> Response {
        self.http_client
            .delete(self.url(path))
            .bearer_auth(token)
            .send()
            .await
            .expect("Failed to execute DELETE request.")
    }

    pub async fn register(&self, user_id: &str, email: &str) -> Response {
        self.post(
            "/api/member/register",
            &json!({
                "userId": user_id,
                "password": PASSWORD,
                "email": email,
                "nickname": user_id,
            }),
            None,
        )
        .await
    }

    pub async fn login(&self, user_id: &str, password: &str) -> Response {
        self.post(
            "/api/member/login",
            &json!({ "userId": user_id, "password": password }),
            None,
        )
        .await
    }

    /// Registers a fresh member and returns its user id and token pair.
    pub async fn signed_in_member(&self) -> (String, LoginResponse) {
        let user_id = get_random_user_id();
        let response = self
            .register(&user_id, &format!("{user_id}@example.com"))
            .await;
        assert_eq!(response.status().as_u16(), 201);
        let tokens = self.login_ok(&user_id, PASSWORD).await;
        (user_id, tokens)
    }

    pub async fn signed_in_admin(&self) -> LoginResponse {
        self.login_ok(ADMIN_USER_ID, ADMIN_PASSWORD).await
    }

    async fn login_ok(&self, user_id: &str, password: &str) -> LoginResponse {
        let response = self.login(user_id, password).await;
        assert_eq!(response.status().as_u16(), 200);
        response.json().await.expect("token pair")
    }

    /// Creates an active category as the administrator and returns its id.
    pub async fn create_category(&self, admin_token: &str, name: &str) -> i64 {
        let response = self
            .post(
                "/api/category",
                &json!({
                    "name": name,
                    "description": "test category",
                    "categoryLevel": 1,
                    "categoryOrder": 1,
                }),
                Some(admin_token),
            )
            .await;
        assert_eq!(response.status().as_u16(), 201);
        let body: Value = response.json().await.unwrap();
        body["categoryId"].as_i64().unwrap()
    }
}

pub fn get_random_user_id() -> String {
    // user ids are limited to 20 word characters
    format!("u{}", &Uuid::new_v4().simple().to_string()[..12])
}

pub struct TestContext {
    pub test_app: TestApp,
}

impl AsyncTestContext for TestContext {
    async fn setup() -> Self {
        TestContext {
            test_app: TestApp::new().await,
        }
    }

    async fn teardown(self) {}
}
