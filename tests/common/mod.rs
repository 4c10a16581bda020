//! Common test utilities for integration tests
//!
//! Provides an in-memory user repository, a PostgreSQL container harness,
//! and request/response helpers shared by the test binaries.

#![allow(dead_code)]

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Method, Request, Response},
    Router,
};
use config::{File, FileFormat};
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use testcontainers::{runners::AsyncRunner, ContainerAsync, ImageExt};
use testcontainers_modules::postgres::Postgres;
use tower::util::ServiceExt;

use megamind_api::domain::gateways::UserRepository;
use megamind_api::domain::models::user::{NewUser, User, UserId};
use megamind_api::infrastructure::driven_adapters::config::AppConfig;
use megamind_api::infrastructure::driven_adapters::user_repository::PostgresUserRepository;
use megamind_api::infrastructure::driving_adapters::api_rest::{self, AppState};
use megamind_api::shared::errors::RepositoryError;

/// Body limits small enough to exercise from a test
pub const TEST_JSON_LIMIT: usize = 1024;
pub const TEST_FORM_LIMIT: usize = 512;

/// Non-persistent repository with storage-like ID assignment
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
    next_id: AtomicI64,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, user: &NewUser) -> Result<User, RepositoryError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let user = User::restore(UserId::new(id), user.username.clone(), user.password.clone());
        self.users.lock().unwrap().push(user.clone());
        Ok(user)
    }

    async fn find_all(&self) -> Result<Vec<User>, RepositoryError> {
        Ok(self.users.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError> {
        Ok(self.users.lock().unwrap().iter().find(|u| u.id() == id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.username() == username)
            .cloned())
    }

    async fn delete_by_id(&self, id: UserId) -> Result<u64, RepositoryError> {
        let mut users = self.users.lock().unwrap();
        let before = users.len();
        users.retain(|u| u.id() != id);
        Ok((before - users.len()) as u64)
    }
}

/// Repository whose every call fails like an unreachable database
pub struct FailingUserRepository;

#[async_trait]
impl UserRepository for FailingUserRepository {
    async fn insert(&self, _user: &NewUser) -> Result<User, RepositoryError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn find_all(&self) -> Result<Vec<User>, RepositoryError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn find_by_id(&self, _id: UserId) -> Result<Option<User>, RepositoryError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn find_by_username(&self, _username: &str) -> Result<Option<User>, RepositoryError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn delete_by_id(&self, _id: UserId) -> Result<u64, RepositoryError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }
}

/// Create a test configuration with the given route prefix
pub fn create_test_config(prefix: &str) -> AppConfig {
    let config_str = format!(
        r#"
[server]
host = "127.0.0.1"
port = 0

[api]
prefix = "{prefix}"
versions = ["1"]
json_limit = {TEST_JSON_LIMIT}
form_limit = {TEST_FORM_LIMIT}

[database]
host = "localhost"
port = 5432
username = "test"
password = "test"
database = "test"
max_connections = 5
min_connections = 1
synchronize = false
logging = false
"#
    );

    AppConfig::defaults()
        .expect("Failed to build default config")
        .add_source(File::from_str(&config_str, FileFormat::Toml))
        .build()
        .expect("Failed to build test config")
        .try_deserialize()
        .expect("Failed to deserialize test config")
}

/// Router-level test application
pub struct TestApp {
    pub router: Router,
    pub repository: Arc<dyn UserRepository>,
}

impl TestApp {
    /// Application backed by an empty in-memory repository
    pub fn in_memory() -> Self {
        Self::with_repository("api", Arc::new(InMemoryUserRepository::default()))
    }

    /// Application mounted under a custom prefix
    pub fn with_prefix(prefix: &str) -> Self {
        Self::with_repository(prefix, Arc::new(InMemoryUserRepository::default()))
    }

    pub fn with_repository(prefix: &str, repository: Arc<dyn UserRepository>) -> Self {
        let state = AppState::new(create_test_config(prefix), repository.clone());
        Self {
            router: api_rest::router(state),
            repository,
        }
    }

    /// Send a request through the full middleware stack
    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn get(&self, uri: &str) -> Response<Body> {
        self.send(Request::builder().method(Method::GET).uri(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn delete(&self, uri: &str) -> Response<Body> {
        self.send(Request::builder().method(Method::DELETE).uri(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn post_json<T: Serialize>(&self, uri: &str, body: &T) -> Response<Body> {
        self.send(
            Request::builder()
                .method(Method::POST)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_string(body).unwrap()))
                .unwrap(),
        )
        .await
    }

    pub async fn post_form(&self, uri: &str, body: &str) -> Response<Body> {
        self.send(
            Request::builder()
                .method(Method::POST)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    /// Create a user through the API and return the response body
    pub async fn create_user(&self, username: &str, password: &str) -> UserResponse {
        let response = self
            .post_json("/api/user", &CreateUserRequest::new(username, password))
            .await;
        assert_eq!(response.status(), axum::http::StatusCode::CREATED);
        read_json(response).await
    }
}

/// Application backed by a fresh PostgreSQL container
pub struct PostgresTestApp {
    pub app: TestApp,
    pub pool: PgPool,
    _container: ContainerAsync<Postgres>,
}

impl PostgresTestApp {
    pub async fn new() -> Self {
        let (container, pool) = start_postgres().await;

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("Failed to run migrations");

        let repository = Arc::new(PostgresUserRepository::new(pool.clone()));

        Self {
            app: TestApp::with_repository("api", repository),
            pool,
            _container: container,
        }
    }

    /// Stored password column for the given user
    pub async fn stored_password(&self, id: i64) -> String {
        sqlx::query_scalar("SELECT password FROM users WHERE id = $1")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .expect("Failed to read stored password")
    }
}

/// Start an empty PostgreSQL container and connect to it; no migrations are run
pub async fn start_postgres() -> (ContainerAsync<Postgres>, PgPool) {
    let container = Postgres::default()
        .with_tag("16-alpine")
        .start()
        .await
        .expect("Failed to start PostgreSQL container");

    let host = container.get_host().await.expect("Failed to get host");
    let port = container
        .get_host_port_ipv4(5432)
        .await
        .expect("Failed to get port");

    let database_url = format!("postgres://postgres:postgres@{host}:{port}/postgres");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .min_connections(1)
        .connect(&database_url)
        .await
        .expect("Failed to connect to test database");

    (container, pool)
}

/// Read and deserialize a JSON response body
pub async fn read_json<T: serde::de::DeserializeOwned>(response: Response<Body>) -> T {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

/// Read a response body as text
pub async fn read_text(response: Response<Body>) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(body.to_vec()).unwrap()
}

/// Helper struct for creating user request bodies
#[derive(Debug, Serialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub password: String,
}

impl CreateUserRequest {
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
        }
    }
}

/// User response structure for deserialization
#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
}

/// Error response structure for deserialization
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
    pub request_id: Option<String>,
    pub timestamp: String,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub details: Option<Vec<FieldError>>,
}

#[derive(Debug, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}
