//! Error types for the partner API client.
//!
//! # Design
//! Three families, kept apart so callers can react to each differently:
//! - `ValidationError` (see `validation`) is raised while building value
//!   objects, before any network activity.
//! - `ServerError` is raised after a completed round trip with a status
//!   other than 201. It carries the parsed `ApiProblem` and the raw response.
//! - `ConfigError` and `TransportError` are environment or programmer
//!   mistakes: bad configuration, unreachable host, unreadable body.
//!
//! `ApiError` is the umbrella returned by `PartnerClient`.

use std::fmt;

use serde_json::json;
use thiserror::Error;

use crate::http::HttpResponse;
use crate::types::ApiProblem;
use crate::validation::ValidationError;

/// Invalid or missing connection settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{0} environment variable is not set")]
    MissingVariable(&'static str),

    #[error("Invalid environment '{0}'. Must be 'sandbox' or 'production'.")]
    InvalidEnvironment(String),

    #[error("User agent cannot be empty")]
    EmptyUserAgent,

    #[error("Invalid user agent format '{0}'. Expected format: 'AppName/Version'")]
    InvalidUserAgent(String),

    #[error("Invalid base URL '{0}'. Expected an absolute http(s) URL without query or fragment")]
    InvalidBaseUrl(String),
}

/// The request never produced a response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("request to {url} failed: {message}")]
    Network { url: String, message: String },

    #[error("failed to read response body: {0}")]
    Body(String),
}

/// How a failed round trip was classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProblemKind {
    /// 401. The problem is synthesized; the body is not inspected.
    Unauthorized,
    /// Non-201 with an empty body. The problem is synthesized.
    UnknownProblem,
    /// Non-201 with a body, read leniently as an `ApiProblem`.
    Problem,
}

/// The server answered with something other than `201 Created`.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerError {
    kind: ProblemKind,
    problem: ApiProblem,
    response: HttpResponse,
}

impl ServerError {
    pub(crate) fn unauthorized(response: HttpResponse) -> Self {
        let problem = ApiProblem::from_json(&json!({
            "type": "about:blank",
            "title": "Unauthorized",
            "detail": "Authentication failed, check the configured username and password",
            "status": 401,
        }));
        Self {
            kind: ProblemKind::Unauthorized,
            problem,
            response,
        }
    }

    pub(crate) fn unknown_problem(response: HttpResponse) -> Self {
        let problem = ApiProblem::from_json(&json!({
            "type": "about:blank",
            "title": "Unknown HTTP Problem",
            "detail": format!("The server returned status {} without a response body", response.status),
            "status": response.status,
        }));
        Self {
            kind: ProblemKind::UnknownProblem,
            problem,
            response,
        }
    }

    /// A body that is not valid JSON is read as an empty problem document.
    pub(crate) fn from_response(response: HttpResponse) -> Self {
        let problem = match response.json() {
            Ok(body) => ApiProblem::from_json(&body),
            Err(_) => ApiProblem::from_map(serde_json::Map::new()),
        };
        Self {
            kind: ProblemKind::Problem,
            problem,
            response,
        }
    }

    pub fn kind(&self) -> ProblemKind {
        self.kind
    }

    pub fn problem(&self) -> &ApiProblem {
        &self.problem
    }

    pub fn response(&self) -> &HttpResponse {
        &self.response
    }

    /// Transport diagnostics of the failed exchange.
    pub fn debug(&self) -> &str {
        &self.response.debug
    }

    pub fn into_problem(self) -> ApiProblem {
        self.problem
    }
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Server returned {} with message {}",
            self.problem.status(),
            self.problem.title()
        )
    }
}

impl std::error::Error for ServerError {}

/// Errors returned by `PartnerClient`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Server(Box<ServerError>),

    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// A `201` body was not valid JSON.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// A `201` body was JSON but lacked a usable `projectId` or `redirectUrl`.
    #[error("invalid response from server: {0}")]
    InvalidResponse(#[source] ValidationError),
}

impl From<ServerError> for ApiError {
    fn from(error: ServerError) -> Self {
        ApiError::Server(Box::new(error))
    }
}

impl ApiError {
    pub fn server_error(&self) -> Option<&ServerError> {
        match self {
            ApiError::Server(error) => Some(error),
            _ => None,
        }
    }

    pub fn problem(&self) -> Option<&ApiProblem> {
        self.server_error().map(ServerError::problem)
    }

    pub fn is_unauthorized(&self) -> bool {
        self.server_error()
            .is_some_and(|e| e.kind() == ProblemKind::Unauthorized)
    }
}
