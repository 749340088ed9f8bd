use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response};
use ecole::router::init_router;
use ecole::state::AppState;
use ecole_config::{CorsConfig, GuardConfig, JwtConfig};
use ecole_db::RoleStore;
use http_body_util::BodyExt;
use jsonwebtoken::{EncodingKey, Header, encode};

pub const TEST_SECRET: &str = "test-secret-key-at-least-32-characters-long";

/// Role store holding a fixed user -> role names map and counting lookups.
#[derive(Default)]
pub struct InMemoryRoleStore {
    users: HashMap<i32, Vec<String>>,
    lookups: AtomicUsize,
}

#[allow(dead_code)]
impl InMemoryRoleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, user_id: i32, roles: &[&str]) -> Self {
        self.users
            .insert(user_id, roles.iter().map(|r| r.to_string()).collect());
        self
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RoleStore for InMemoryRoleStore {
    async fn role_names_for_user(&self, user_id: i32) -> Result<Option<Vec<String>>, sqlx::Error> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self.users.get(&user_id).cloned())
    }
}

/// Role store whose every lookup fails like a dropped connection.
#[allow(dead_code)]
pub struct FailingRoleStore;

#[async_trait]
impl RoleStore for FailingRoleStore {
    async fn role_names_for_user(&self, _user_id: i32) -> Result<Option<Vec<String>>, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }
}

/// Role store that never answers within the test timeout.
#[allow(dead_code)]
pub struct HangingRoleStore;

#[async_trait]
impl RoleStore for HangingRoleStore {
    async fn role_names_for_user(&self, _user_id: i32) -> Result<Option<Vec<String>>, sqlx::Error> {
        tokio::time::sleep(Duration::from_secs(60)).await;
        Ok(Some(vec!["ADMIN".to_string()]))
    }
}

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: TEST_SECRET.to_string(),
        access_token_expiry: 3600,
    }
}

#[allow(dead_code)]
pub fn test_state(roles: Arc<dyn RoleStore>) -> AppState {
    AppState {
        roles,
        jwt_config: test_jwt_config(),
        cors_config: CorsConfig::default(),
        guard_config: GuardConfig {
            role_lookup_timeout: Duration::from_millis(200),
        },
    }
}

#[allow(dead_code)]
pub fn setup_test_app(roles: Arc<dyn RoleStore>) -> Router {
    init_router(test_state(roles))
}

/// Signs an arbitrary JSON payload with `secret`.
#[allow(dead_code)]
pub fn sign(payload: serde_json::Value, secret: &str) -> String {
    encode(
        &Header::default(),
        &payload,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

#[allow(dead_code)]
pub fn token_for(user_id: i32) -> String {
    ecole_auth::create_access_token(user_id, &test_jwt_config()).unwrap()
}

#[allow(dead_code)]
pub fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header("x-access-token", token);
    }
    builder.body(Body::empty()).unwrap()
}

#[allow(dead_code)]
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}
