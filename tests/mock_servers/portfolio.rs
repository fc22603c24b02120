#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//! Mock portfolio REST API for testing
//!
//! Simulates the FastAPI backend: bearer-token login, one collection per
//! resource (`/api/blogs/`, `/api/projects/`, `/api/about/`,
//! `/api/contact/`), item routes (`/api/<resource>/{id}`) and the project
//! image upload. Collections answer with and without the trailing slash.
//! Like the backend, the contact list and delete routes read the token from
//! `?token=` and ignore the `Authorization` header.
//! Every request is recorded so tests can assert on what was sent.

use axum::{
    extract::{Multipart, Path, Query, Request, State},
    http::{header, HeaderMap, Method, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Map, Value};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

pub const MOCK_PASSWORD: &str = "letmein";
pub const MOCK_TOKEN: &str = "mock-token-123";

/// Naive UTC, as the backend's `datetime.utcnow()` serializes
const CREATED_AT: &str = "2024-01-05T14:30:00.123456";

const RESOURCES: [&str; 4] = ["blogs", "projects", "about", "contact"];

/// One request as the mock saw it
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub bearer: Option<String>,
}

/// One uploaded file
#[derive(Debug, Clone)]
pub struct RecordedUpload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub size: usize,
}

#[derive(Default)]
struct MockApiState {
    records: HashMap<&'static str, Vec<Value>>,
    requests: Vec<RecordedRequest>,
    uploads: Vec<RecordedUpload>,
    fail_next: Option<(StatusCode, Option<String>)>,
    next_id: u32,
}

/// Mock portfolio API server
pub struct MockPortfolioApi {
    addr: SocketAddr,
    state: Arc<RwLock<MockApiState>>,
    handle: JoinHandle<()>,
}

impl MockPortfolioApi {
    /// Start a mock API on a random port
    pub async fn start() -> Self {
        let state = Arc::new(RwLock::new(MockApiState::default()));

        let app = Router::new()
            .route("/api/auth/login", post(handle_login))
            .route("/api/projects/upload", post(handle_upload))
            .route("/api/{resource}", get(handle_list).post(handle_create))
            .route("/api/{resource}/", get(handle_list).post(handle_create))
            .route(
                "/api/{resource}/{id}",
                get(handle_get).put(handle_update).delete(handle_delete),
            )
            .layer(middleware::from_fn_with_state(state.clone(), record_request))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            addr,
            state,
            handle,
        }
    }

    /// Get the server address
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Base URL for `ApiConfig::base_url`
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Insert a record as-is (it must carry its own `id`)
    pub async fn seed(&self, resource: &'static str, record: Value) {
        let mut state = self.state.write().await;
        state.records.entry(resource).or_default().push(record);
    }

    /// Current records of one resource
    pub async fn records(&self, resource: &str) -> Vec<Value> {
        let state = self.state.read().await;
        state.records.get(resource).cloned().unwrap_or_default()
    }

    /// Every request received so far
    pub async fn requests(&self) -> Vec<RecordedRequest> {
        self.state.read().await.requests.clone()
    }

    pub async fn uploads(&self) -> Vec<RecordedUpload> {
        self.state.read().await.uploads.clone()
    }

    /// Answer the next request with `status` (and a FastAPI `detail` body if given)
    pub async fn fail_next(&self, status: StatusCode, detail: Option<&str>) {
        self.state.write().await.fail_next = Some((status, detail.map(String::from)));
    }

    /// Stop the mock server
    pub async fn stop(self) {
        self.handle.abort();
    }
}

fn detail(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "detail": message }))).into_response()
}

fn is_authorized(headers: &HeaderMap) -> bool {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(|v| v == format!("Bearer {MOCK_TOKEN}"))
        .unwrap_or(false)
}

fn has_query_token(query: &HashMap<String, String>) -> bool {
    query.get("token").map(String::as_str) == Some(MOCK_TOKEN)
}

fn unauthorized() -> Response {
    detail(StatusCode::UNAUTHORIZED, "Could not validate credentials")
}

fn known_resource(resource: &str) -> Option<&'static str> {
    RESOURCES.iter().copied().find(|r| *r == resource)
}

/// Record the request, then either inject the queued failure or pass through
async fn record_request(
    State(state): State<Arc<RwLock<MockApiState>>>,
    request: Request,
    next: Next,
) -> Response {
    let failure = {
        let mut state = state.write().await;
        let bearer = request
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .map(String::from);
        state.requests.push(RecordedRequest {
            method: request.method().clone(),
            path: request.uri().path().to_string(),
            query: request.uri().query().map(String::from),
            bearer,
        });
        state.fail_next.take()
    };

    match failure {
        Some((status, Some(message))) => detail(status, &message),
        Some((status, None)) => status.into_response(),
        None => next.run(request).await,
    }
}

async fn handle_login(Json(body): Json<Value>) -> Response {
    if body.get("password").and_then(Value::as_str) == Some(MOCK_PASSWORD) {
        Json(json!({ "access_token": MOCK_TOKEN, "token_type": "bearer" })).into_response()
    } else {
        detail(StatusCode::UNAUTHORIZED, "Invalid credentials")
    }
}

async fn handle_upload(
    State(state): State<Arc<RwLock<MockApiState>>>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Response {
    if !is_authorized(&headers) {
        return unauthorized();
    }
    while let Some(field) = multipart.next_field().await.unwrap() {
        if field.name() == Some("file") {
            let file_name = field.file_name().unwrap_or_default().to_string();
            let content_type = field.content_type().map(String::from);
            let size = field.bytes().await.unwrap().len();
            state.write().await.uploads.push(RecordedUpload {
                file_name: file_name.clone(),
                content_type,
                size,
            });
            return Json(json!({ "image_url": format!("/uploads/{file_name}") })).into_response();
        }
    }
    detail(StatusCode::BAD_REQUEST, "No file uploaded")
}

async fn handle_list(
    State(state): State<Arc<RwLock<MockApiState>>>,
    Path(resource): Path<String>,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    let Some(resource) = known_resource(&resource) else {
        return detail(StatusCode::NOT_FOUND, "Not Found");
    };
    if resource == "contact" && !has_query_token(&query) {
        return detail(StatusCode::UNAUTHORIZED, "Authentication required");
    }
    let state = state.read().await;
    Json(state.records.get(resource).cloned().unwrap_or_default()).into_response()
}

async fn handle_create(
    State(state): State<Arc<RwLock<MockApiState>>>,
    Path(resource): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Map<String, Value>>,
) -> Response {
    let Some(resource) = known_resource(&resource) else {
        return detail(StatusCode::NOT_FOUND, "Not Found");
    };
    if resource != "contact" && !is_authorized(&headers) {
        return unauthorized();
    }
    let mut state = state.write().await;
    state.next_id += 1;
    let mut record = body;
    record.insert("id".into(), json!(format!("{resource}-{}", state.next_id)));
    record.insert("created_at".into(), json!(CREATED_AT));
    let record = Value::Object(record);
    state
        .records
        .entry(resource)
        .or_default()
        .push(record.clone());
    Json(record).into_response()
}

async fn handle_get(
    State(state): State<Arc<RwLock<MockApiState>>>,
    Path((resource, id)): Path<(String, String)>,
) -> Response {
    let state = state.read().await;
    let found = state
        .records
        .get(resource.as_str())
        .and_then(|records| records.iter().find(|r| r["id"] == id.as_str()));
    match found {
        Some(record) => Json(record.clone()).into_response(),
        None => detail(StatusCode::NOT_FOUND, "Not found"),
    }
}

async fn handle_update(
    State(state): State<Arc<RwLock<MockApiState>>>,
    Path((resource, id)): Path<(String, String)>,
    headers: HeaderMap,
    Json(body): Json<Map<String, Value>>,
) -> Response {
    if !is_authorized(&headers) {
        return unauthorized();
    }
    let mut state = state.write().await;
    let found = state
        .records
        .get_mut(resource.as_str())
        .and_then(|records| records.iter_mut().find(|r| r["id"] == id.as_str()));
    match found {
        Some(Value::Object(record)) => {
            for (key, value) in body {
                record.insert(key, value);
            }
            record.insert("updated_at".into(), json!(CREATED_AT));
            Json(json!({ "message": "Updated successfully" })).into_response()
        }
        _ => detail(StatusCode::NOT_FOUND, "Not found"),
    }
}

async fn handle_delete(
    State(state): State<Arc<RwLock<MockApiState>>>,
    Path((resource, id)): Path<(String, String)>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    let authorized = if resource == "contact" {
        has_query_token(&query)
    } else {
        is_authorized(&headers)
    };
    if !authorized {
        return unauthorized();
    }
    let mut state = state.write().await;
    let Some(records) = state.records.get_mut(resource.as_str()) else {
        return detail(StatusCode::NOT_FOUND, "Not found");
    };
    let before = records.len();
    records.retain(|r| r["id"] != id.as_str());
    if records.len() == before {
        return detail(StatusCode::NOT_FOUND, "Not found");
    }
    Json(json!({ "message": "Deleted successfully" })).into_response()
}
