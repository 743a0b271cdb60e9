//! Round trips against the live mock server over real HTTP.
//!
//! # Design
//! Starts the mock server on a random port, then drives `PartnerClient` with
//! the bundled `UreqTransport`. The mock stores every accepted payload, so
//! the tests can read back exactly what went over the wire.

#![cfg(feature = "ureq")]

use std::net::SocketAddr;
use std::time::Duration;

use mock_server::{Credentials, DEFAULT_PASSWORD, DEFAULT_USERNAME};
use serde_json::{json, Value};
use yay_partner_core::{
    Address, ApiError, Configuration, CreateProjectRequest, Customer, PartnerClient, ProblemKind,
    Upload, UreqTransport,
};

/// Start the mock server on a random port in a background thread.
fn start_mock_server() -> SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener, Credentials::default()).await
        })
        .unwrap();
    });

    addr
}

fn client(base_url: &str, password: &str) -> PartnerClient<UreqTransport> {
    let config =
        Configuration::with_base_url(DEFAULT_USERNAME, password, "IntegrationTest/1.0", base_url)
            .unwrap();
    PartnerClient::with_transport(config, UreqTransport::with_timeout(Duration::from_secs(5)))
}

/// Read back a stored payload through the mock's inspection route.
fn stored_payload(addr: SocketAddr, id: &str) -> Value {
    let mut response = ureq::get(&format!("http://{addr}/papi/projects/{id}"))
        .call()
        .unwrap();
    let body = response.body_mut().read_to_string().unwrap();
    serde_json::from_str(&body).unwrap()
}

fn wedding_album(photo_urls: Option<Vec<String>>) -> CreateProjectRequest {
    let address =
        Address::new("Musterstraße 123", "Apartment 4B", "Berlin", "10115", "DE").unwrap();
    let customer = Customer::new("Sarah", "Mueller", "sarah.mueller@gmail.com", address).unwrap();
    let upload = Upload::new(
        150,
        "https://my-photo-app.example.com/images/wedding-cover.jpg",
        photo_urls,
    )
    .unwrap();
    CreateProjectRequest::new("Sarah & Mike's Wedding Album", customer, upload, "de_DE").unwrap()
}

#[test]
fn create_project_round_trip() {
    let addr = start_mock_server();
    let c = client(&format!("http://{addr}/papi/"), DEFAULT_PASSWORD);

    let photos = vec![
        "https://my-photo-app.example.com/photos/img001.jpg".to_string(),
        "https://my-photo-app.example.com/photos/img002.jpg".to_string(),
        "https://my-photo-app.example.com/photos/img003.jpg".to_string(),
    ];
    let created = c.create_project(&wedding_album(Some(photos))).unwrap();

    let project = created.result();
    assert_eq!(project.uuid().get_version_num(), 4);
    assert_eq!(
        project.redirect_url(),
        format!(
            "https://checkout.yaymemories.com/projects/{}/select",
            project.project_id()
        )
    );
    assert_eq!(created.response().status, 201);
    assert!(created.debug().starts_with(&format!("POST http://{addr}/papi/projects -> 201")));

    let stored = stored_payload(addr, project.project_id());
    assert_eq!(
        stored,
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
                "coverUrl": "https://my-photo-app.example.com/images/wedding-cover.jpg",
                "photoUrls": [
                    "https://my-photo-app.example.com/photos/img001.jpg",
                    "https://my-photo-app.example.com/photos/img002.jpg",
                    "https://my-photo-app.example.com/photos/img003.jpg"
                ]
            },
            "locale": "de_DE"
        })
    );
}

#[test]
fn photo_urls_are_omitted_on_the_wire() {
    let addr = start_mock_server();
    let c = client(&format!("http://{addr}/papi"), DEFAULT_PASSWORD);

    let created = c.create_project(&wedding_album(None)).unwrap();

    let stored = stored_payload(addr, created.result().project_id());
    let upload = stored["upload"].as_object().unwrap();
    assert!(!upload.contains_key("photoUrls"));
}

#[test]
fn wrong_password_is_unauthorized() {
    let addr = start_mock_server();
    let c = client(&format!("http://{addr}/papi/"), "not-the-password");

    let err = c.create_project(&wedding_album(None)).unwrap_err();
    assert!(err.is_unauthorized());
    let server = err.server_error().unwrap();
    assert_eq!(server.response().status, 401);
    assert_eq!(err.to_string(), "Server returned 401 with message Unauthorized");
}

#[test]
fn empty_failure_body_is_unknown_problem() {
    let addr = start_mock_server();
    let c = client(&format!("http://{addr}/papi/broken/"), DEFAULT_PASSWORD);

    let err = c.create_project(&wedding_album(None)).unwrap_err();
    let server = err.server_error().unwrap();
    assert_eq!(server.kind(), ProblemKind::UnknownProblem);
    assert_eq!(server.problem().status(), 500);
    assert!(server.debug().contains("-> 500"));
}

#[test]
fn unreachable_server_is_a_transport_error() {
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let c = client(&format!("http://127.0.0.1:{port}/papi/"), DEFAULT_PASSWORD);

    let err = c.create_project(&wedding_album(None)).unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
    assert!(err.problem().is_none());
}
