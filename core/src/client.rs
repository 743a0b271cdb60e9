//! Request orchestrator for `POST {baseUrl}projects`.
//!
//! # Design
//! `PartnerClient` holds a `Configuration` and a `Transport`, both read-only
//! after construction, and no other state. The single operation is split
//! like every host-does-IO call in this crate:
//! - `build_create_project` turns a validated request into an `HttpRequest`,
//! - the transport executes it,
//! - `parse_create_project` classifies the `HttpResponse`.
//!
//! `create_project` chains the three. Callers driving their own I/O can use
//! the two halves directly. Nothing is retried.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use tracing::{debug, error, info, warn};

use crate::config::Configuration;
use crate::error::{ApiError, ServerError};
use crate::http::{HttpMethod, HttpRequest, HttpResponse, Transport};
use crate::response::CreatedProjectResponse;
use crate::types::{CreateProjectRequest, CreatedProject};
use crate::wire::ProjectPayload;

#[cfg(feature = "ureq")]
use crate::transport::UreqTransport;

const JSON: &str = "application/json";

#[derive(Debug, Clone)]
pub struct PartnerClient<T> {
    config: Configuration,
    transport: T,
}

#[cfg(feature = "ureq")]
impl PartnerClient<UreqTransport> {
    /// Client backed by a default `UreqTransport`.
    pub fn new(config: Configuration) -> Self {
        Self::with_transport(config, UreqTransport::new())
    }
}

impl<T> PartnerClient<T> {
    pub fn with_transport(config: Configuration, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn build_create_project(
        &self,
        project: &CreateProjectRequest,
    ) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(&ProjectPayload::from(project))
            .map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: format!("{}projects", self.config.base_url()),
            headers: vec![
                ("authorization".to_string(), self.basic_auth()),
                ("user-agent".to_string(), self.config.user_agent().to_string()),
                ("content-type".to_string(), JSON.to_string()),
                ("accept".to_string(), JSON.to_string()),
            ],
            body: Some(body),
        })
    }

    /// Classifies a response to `build_create_project`'s request.
    ///
    /// | status | outcome |
    /// |--------|---------|
    /// | 201 | `CreatedProjectResponse` |
    /// | 401 | `ServerError`, `ProblemKind::Unauthorized` |
    /// | other, empty body | `ServerError`, `ProblemKind::UnknownProblem` |
    /// | other, with body | `ServerError`, `ProblemKind::Problem` |
    pub fn parse_create_project(
        &self,
        response: HttpResponse,
    ) -> Result<CreatedProjectResponse, ApiError> {
        let server_error = match response.status {
            201 => return created(response),
            401 => ServerError::unauthorized(response),
            _ if response.is_empty_body() => ServerError::unknown_problem(response),
            _ => ServerError::from_response(response),
        };
        warn!(
            status = server_error.response().status,
            problem_status = server_error.problem().status(),
            title = server_error.problem().title(),
            kind = ?server_error.kind(),
            "partner API rejected project"
        );
        Err(server_error.into())
    }

    fn basic_auth(&self) -> String {
        let credentials = format!("{}:{}", self.config.username(), self.config.password());
        format!("Basic {}", BASE64.encode(credentials))
    }
}

impl<T: Transport> PartnerClient<T> {
    /// Sends exactly one request and classifies the answer.
    pub fn create_project(
        &self,
        project: &CreateProjectRequest,
    ) -> Result<CreatedProjectResponse, ApiError> {
        let request = self.build_create_project(project)?;
        debug!(method = %request.method, url = %request.url, "sending create-project request");
        let response = self.transport.execute(&request).map_err(|e| {
            error!(url = %request.url, error = %e, "create-project request failed");
            e
        })?;
        self.parse_create_project(response)
    }
}

fn created(response: HttpResponse) -> Result<CreatedProjectResponse, ApiError> {
    let body = response
        .json()
        .map_err(|e| ApiError::Deserialization(e.to_string()))?;
    let project = CreatedProject::from_json(&body).map_err(ApiError::InvalidResponse)?;
    info!(project_id = project.project_id(), "partner project created");
    Ok(CreatedProjectResponse::new(project, response))
}
