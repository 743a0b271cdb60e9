use axum::http::{self, Request, StatusCode};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use http_body_util::BodyExt;
use mock_server::{app, Credentials, DEFAULT_PASSWORD, DEFAULT_USERNAME};
use serde_json::{json, Value};
use tower::ServiceExt;

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn auth(user: &str, pass: &str) -> String {
    format!("Basic {}", BASE64.encode(format!("{user}:{pass}")))
}

fn project_request(uri: &str, authorization: Option<String>, body: &str) -> Request<String> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json");
    if let Some(value) = authorization {
        builder = builder.header(http::header::AUTHORIZATION, value);
    }
    builder.body(body.to_string()).unwrap()
}

fn valid_body() -> String {
    json!({
        "title": "Sarah & Mike's Wedding Album",
        "customer": {
            "firstname": "Sarah",
            "lastname": "Mueller",
            "email": "sarah.mueller@gmail.com",
            "address": {
                "line1": "Musterstraße 123",
                "line2": "Apartment 4B",
                "city": "Berlin",
                "postal_code": "10115",
                "country": "DE"
            }
        },
        "upload": {
            "numberOfImages": 150,
            "coverUrl": "https://my-photo-app.example.com/images/wedding-cover.jpg"
        },
        "locale": "de_DE"
    })
    .to_string()
}

// --- create ---

#[tokio::test]
async fn create_project_returns_201() {
    let resp = app(Credentials::default())
        .oneshot(project_request(
            "/papi/projects",
            Some(auth(DEFAULT_USERNAME, DEFAULT_PASSWORD)),
            &valid_body(),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = body_json(resp).await;
    let id = body["projectId"].as_str().unwrap();
    assert_eq!(uuid::Uuid::parse_str(id).unwrap().get_version_num(), 4);
    assert_eq!(
        body["redirectUrl"],
        format!("https://checkout.yaymemories.com/projects/{id}/select")
    );
}

#[tokio::test]
async fn missing_credentials_return_401_problem() {
    let resp = app(Credentials::default())
        .oneshot(project_request("/papi/projects", None, &valid_body()))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        resp.headers()[http::header::CONTENT_TYPE],
        "application/problem+json"
    );
    let body = body_json(resp).await;
    assert_eq!(body["status"], 401);
    assert_eq!(body["title"], "Unauthorized");
}

#[tokio::test]
async fn wrong_password_returns_401() {
    let resp = app(Credentials::default())
        .oneshot(project_request(
            "/papi/projects",
            Some(auth(DEFAULT_USERNAME, "wrong")),
            &valid_body(),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn custom_credentials_are_honoured() {
    let credentials = Credentials {
        username: "acme".to_string(),
        password: "s3cret".to_string(),
    };
    let resp = app(credentials)
        .oneshot(project_request(
            "/papi/projects",
            Some(auth("acme", "s3cret")),
            &valid_body(),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn invalid_payload_returns_400_with_errors() {
    let mut payload: Value = serde_json::from_str(&valid_body()).unwrap();
    payload["customer"]["email"] = json!("Sarah.Mueller@Gmail.com");

    let resp = app(Credentials::default())
        .oneshot(project_request(
            "/papi/projects",
            Some(auth(DEFAULT_USERNAME, DEFAULT_PASSWORD)),
            &payload.to_string(),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert_eq!(body["type"], "https://httpstatus.es/400");
    assert_eq!(body["title"], "Bad Request");
    assert_eq!(body["status"], 400);
    assert_eq!(body["instance"], "/projects");
    assert_eq!(
        body["errors"]["customer.email"][0],
        "The email field must be lowercase."
    );
}

#[tokio::test]
async fn malformed_json_returns_400() {
    let resp = app(Credentials::default())
        .oneshot(project_request(
            "/papi/projects",
            Some(auth(DEFAULT_USERNAME, DEFAULT_PASSWORD)),
            "{not json",
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert!(body["detail"]
        .as_str()
        .unwrap()
        .starts_with("Request body is not valid JSON"));
}

#[tokio::test]
async fn broken_deployment_returns_empty_500() {
    let resp = app(Credentials::default())
        .oneshot(project_request(
            "/papi/broken/projects",
            Some(auth(DEFAULT_USERNAME, DEFAULT_PASSWORD)),
            &valid_body(),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body_bytes(resp).await.is_empty());
}

// --- inspect ---

#[tokio::test]
async fn get_project_not_found() {
    let resp = app(Credentials::default())
        .oneshot(
            Request::builder()
                .uri("/papi/projects/00000000-0000-0000-0000-000000000000")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn created_payload_can_be_inspected() {
    use tower::Service;

    let mut app = app(Credentials::default()).into_service();

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(project_request(
            "/papi/projects",
            Some(auth(DEFAULT_USERNAME, DEFAULT_PASSWORD)),
            &valid_body(),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let id = body_json(resp).await["projectId"]
        .as_str()
        .unwrap()
        .to_string();

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(
            Request::builder()
                .uri(format!("/papi/projects/{id}"))
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let stored = body_json(resp).await;
    let sent: Value = serde_json::from_str(&valid_body()).unwrap();
    assert_eq!(stored, sent);
}
