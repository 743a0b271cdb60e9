//! In-memory stand-in for the YAY partner API.
//!
//! Serves `POST /papi/projects` with basic auth and a small subset of the
//! real server-side checks, answering with problem documents the way the
//! hosted API does. `GET /papi/projects/{id}` returns the stored payload so
//! tests can inspect exactly what a client sent.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde_json::{json, Map, Value};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

pub const DEFAULT_USERNAME: &str = "partner";
pub const DEFAULT_PASSWORD: &str = "secret";

const PROBLEM_JSON: &str = "application/problem+json";

#[derive(Clone, Debug)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Default for Credentials {
    fn default() -> Self {
        Self {
            username: DEFAULT_USERNAME.to_string(),
            password: DEFAULT_PASSWORD.to_string(),
        }
    }
}

pub type Db = Arc<RwLock<HashMap<Uuid, Value>>>;

#[derive(Clone)]
struct AppState {
    credentials: Arc<Credentials>,
    projects: Db,
}

pub fn app(credentials: Credentials) -> Router {
    let state = AppState {
        credentials: Arc::new(credentials),
        projects: Arc::new(RwLock::new(HashMap::new())),
    };
    Router::new()
        .route("/papi/projects", post(create_project))
        .route("/papi/projects/{id}", get(get_project))
        // A deployment that fails without a problem body.
        .route("/papi/broken/projects", post(broken))
        .with_state(state)
}

pub async fn run(listener: TcpListener, credentials: Credentials) -> Result<(), std::io::Error> {
    axum::serve(listener, app(credentials)).await
}

async fn create_project(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: String,
) -> Response {
    if !authorized(&headers, &state.credentials) {
        tracing::warn!("rejecting request with missing or wrong credentials");
        return problem(
            StatusCode::UNAUTHORIZED,
            "Unauthorized",
            "Missing or invalid credentials",
            Map::new(),
        );
    }

    let payload: Value = match serde_json::from_str(&body) {
        Ok(payload) => payload,
        Err(e) => {
            return problem(
                StatusCode::BAD_REQUEST,
                "Bad Request",
                &format!("Request body is not valid JSON: {e}"),
                Map::new(),
            )
        }
    };

    let errors = validate(&payload);
    if !errors.is_empty() {
        let mut extra = Map::new();
        extra.insert("errors".to_string(), Value::Object(errors));
        return problem(
            StatusCode::BAD_REQUEST,
            "Bad Request",
            "The project payload failed validation",
            extra,
        );
    }

    let id = Uuid::new_v4();
    state.projects.write().await.insert(id, payload);
    tracing::info!(%id, "project created");

    (
        StatusCode::CREATED,
        Json(json!({
            "projectId": id,
            "redirectUrl": format!("https://checkout.yaymemories.com/projects/{id}/select"),
        })),
    )
        .into_response()
}

async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, StatusCode> {
    let projects = state.projects.read().await;
    projects.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn broken() -> StatusCode {
    StatusCode::INTERNAL_SERVER_ERROR
}

fn authorized(headers: &HeaderMap, credentials: &Credentials) -> bool {
    let Some(value) = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
    else {
        return false;
    };
    let Some(encoded) = value.strip_prefix("Basic ") else {
        return false;
    };
    let Ok(decoded) = BASE64.decode(encoded) else {
        return false;
    };
    let expected = format!("{}:{}", credentials.username, credentials.password);
    decoded == expected.as_bytes()
}

/// Field errors keyed by dotted path, e.g. `customer.email`.
fn validate(payload: &Value) -> Map<String, Value> {
    let mut errors = Map::new();
    let mut fail = |field: &str, message: &str| {
        errors.insert(field.to_string(), json!([message]));
    };

    for field in ["title", "locale"] {
        if !payload[field].as_str().is_some_and(|s| !s.trim().is_empty()) {
            fail(field, "This field is required.");
        }
    }
    for field in ["customer", "upload"] {
        if !payload[field].is_object() {
            fail(field, "This field is required.");
        }
    }

    match payload["customer"]["email"].as_str() {
        Some(email) if email != email.to_lowercase() => {
            fail("customer.email", "The email field must be lowercase.")
        }
        Some(email) if !email.contains('@') => {
            fail("customer.email", "The email field must be a valid email address.")
        }
        Some(_) => {}
        None => fail("customer.email", "This field is required."),
    }

    if payload["customer"]["address"].get("postal_code").is_none() {
        fail("customer.address.postal_code", "This field is required.");
    }

    match payload["upload"].get("photoUrls") {
        Some(Value::Array(urls)) if urls.is_empty() => {
            fail("upload.photoUrls", "Omit photoUrls instead of sending an empty list.")
        }
        Some(Value::Array(_)) | None => {}
        Some(_) => fail("upload.photoUrls", "This field must be a list."),
    }

    errors
}

fn problem(status: StatusCode, title: &str, detail: &str, extra: Map<String, Value>) -> Response {
    let mut body = Map::new();
    body.insert(
        "type".to_string(),
        json!(format!("https://httpstatus.es/{}", status.as_u16())),
    );
    body.insert("title".to_string(), json!(title));
    body.insert("detail".to_string(), json!(detail));
    body.insert("status".to_string(), json!(status.as_u16()));
    body.insert("instance".to_string(), json!("/projects"));
    body.extend(extra);

    (
        status,
        [(header::CONTENT_TYPE, PROBLEM_JSON)],
        Value::Object(body).to_string(),
    )
        .into_response()
}
