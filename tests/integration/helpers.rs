//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use eventhub_auth::{Authenticator, IdentityResolver, JwtDecoder};
use eventhub_core::config::{AppConfig, AuthConfig, DatabaseConfig, StorageConfig};
use eventhub_core::error::AppError;
use eventhub_core::result::AppResult;
use eventhub_core::traits::ImageStore;
use eventhub_database::InMemoryEventStore;
use eventhub_entity::UserProfile;
use eventhub_service::EventService;
use eventhub_storage::LocalImageStore;

/// Secret the test tokens are signed with.
pub const TEST_SECRET: &str = "integration-test-secret";

/// User id the identity service reports as broken.
pub const BROKEN_USER: &str = "500";

const BOUNDARY: &str = "eventhub-test-boundary";

/// Identity service double knowing a fixed set of users.
#[derive(Debug, Default)]
pub struct StaticIdentityResolver {
    users: HashMap<String, UserProfile>,
    calls: AtomicUsize,
}

impl StaticIdentityResolver {
    /// Resolver knowing the given user ids.
    pub fn with_users(ids: &[i64]) -> Self {
        let users = ids
            .iter()
            .map(|&id| (id.to_string(), profile(id)))
            .collect();
        Self {
            users,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of lookups performed so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IdentityResolver for StaticIdentityResolver {
    async fn resolve(&self, user_id: &str) -> AppResult<UserProfile> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if user_id == BROKEN_USER {
            return Err(AppError::external_service("Failed to parse user data"));
        }
        self.users
            .get(user_id)
            .cloned()
            .ok_or_else(|| AppError::unauthorized("User not found in authentication service"))
    }
}

fn profile(id: i64) -> UserProfile {
    UserProfile {
        id,
        email: format!("user{id}@test.com"),
        firstname: Some("Test".to_string()),
        lastname: Some("User".to_string()),
        state: None,
        mobile: None,
        username: Some(format!("user{id}")),
        enabled: true,
    }
}

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Event rows behind the router
    pub store: InMemoryEventStore,
    /// Image files behind the router
    pub images: Arc<LocalImageStore>,
    /// Identity service double
    pub identity: Arc<StaticIdentityResolver>,
    /// Keeps the image directory alive
    _dir: TempDir,
}

impl TestApp {
    /// Create a new test application with users 1 and 7 known.
    pub async fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let image_dir = dir.path().join("theme");
        let image_dir = image_dir.to_str().expect("Non UTF-8 temp dir").to_string();

        let config = AppConfig {
            server: Default::default(),
            database: DatabaseConfig {
                url: "postgres://unused".to_string(),
                max_connections: 1,
                min_connections: 0,
                connect_timeout_seconds: 1,
                idle_timeout_seconds: 1,
            },
            auth: AuthConfig {
                jwt_secret: TEST_SECRET.to_string(),
            },
            identity: Default::default(),
            storage: StorageConfig {
                image_dir: image_dir.clone(),
                ..Default::default()
            },
            logging: Default::default(),
        };

        let store = InMemoryEventStore::new();
        let images = Arc::new(
            LocalImageStore::new(&image_dir)
                .await
                .expect("Failed to init image store"),
        );
        let identity = Arc::new(StaticIdentityResolver::with_users(&[1, 7]));

        let event_service = Arc::new(EventService::new(
            Arc::new(store.clone()),
            images.clone(),
        ));
        let authenticator = Arc::new(Authenticator::new(
            JwtDecoder::new(&config.auth),
            identity.clone(),
        ));

        let state = eventhub_api::AppState::new(Arc::new(config), event_service, authenticator);
        let router = eventhub_api::router::build_router(state);

        Self {
            router,
            store,
            images,
            identity,
            _dir: dir,
        }
    }

    /// A valid bearer token for `user_id` (a JSON number or string).
    pub fn token_for(&self, user_id: Value) -> String {
        sign(serde_json::json!({ "user_id": user_id }), TEST_SECRET)
    }

    /// Whether the image behind `path` exists.
    pub async fn image_exists(&self, path: &str) -> bool {
        self.images.exists(path).await.expect("Failed to inspect image")
    }

    /// Number of files in the image directory.
    pub fn image_count(&self) -> usize {
        std::fs::read_dir(self.images.root())
            .expect("Failed to read image dir")
            .count()
    }

    /// Make a JSON (or empty-bodied) HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");
        self.send(req).await
    }

    /// Make a multipart/form-data request to the test app
    pub async fn multipart(
        &self,
        method: &str,
        path: &str,
        parts: &[Part<'_>],
        token: Option<&str>,
    ) -> TestResponse {
        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header(
                "Content-Type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
            );

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        let req = req
            .body(Body::from(multipart_body(parts)))
            .expect("Failed to build request");
        self.send(req).await
    }

    /// Send a prepared request
    pub async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");
        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
        }
    }

    /// Create the "Launch" event for `user_id` and return its JSON.
    pub async fn create_event(&self, token: &str, user_id: &str) -> Value {
        let response = self
            .multipart(
                "POST",
                "/api/v1/event/create",
                &event_form(user_id, "Launch", Some(("logo.png", &b"\x89PNG"[..]))),
                Some(token),
            )
            .await;
        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Create failed: {:?}",
            response.body
        );
        response.body["event"].clone()
    }
}

/// Sign arbitrary claims with HS256.
pub fn sign(claims: Value, secret: &str) -> String {
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .expect("Failed to sign token")
}

/// One part of a multipart body.
#[derive(Debug, Clone, Copy)]
pub enum Part<'a> {
    /// A text field: name, value.
    Text(&'a str, &'a str),
    /// A file field: name, file name, content.
    File(&'a str, &'a str, &'a [u8]),
}

/// The standard event form, optionally with an `image` file.
pub fn event_form<'a>(
    user_id: &'a str,
    title: &'a str,
    image: Option<(&'a str, &'a [u8])>,
) -> Vec<Part<'a>> {
    let mut parts = vec![
        Part::Text("user_id", user_id),
        Part::Text("title", title),
        Part::Text("category", "tech"),
        Part::Text("description", "kick-off"),
        Part::Text("start_time", "2024-01-01T10:00"),
        Part::Text("end_time", "2024-01-01T12:00"),
    ];
    if let Some((file_name, data)) = image {
        parts.push(Part::File("image", file_name, data));
    }
    parts
}

fn multipart_body(parts: &[Part<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match part {
            Part::Text(name, value) => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
                );
                body.extend_from_slice(value.as_bytes());
            }
            Part::File(name, file_name, data) => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\n\
                         Content-Type: application/octet-stream\r\n\r\n"
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(data);
            }
        }
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: axum::http::HeaderMap,
    /// Parsed JSON body
    pub body: Value,
}
