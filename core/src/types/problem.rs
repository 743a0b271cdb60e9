//! RFC 7807 style problem documents returned by the partner API.
//!
//! # Design
//! There are two ways in. `ApiProblem::new` is strict and rejects status codes
//! outside 100..=599. `ApiProblem::from_json` / `from_map` read untrusted
//! response bodies and never fail: missing or wrongly typed members fall back
//! to defaults, and a missing status becomes `UNKNOWN_STATUS`, a value `new`
//! itself would reject. Callers detect that case with `has_unknown_status`.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::validation::ValidationError;

/// Status recorded when a problem body carries no usable integer `status`.
pub const UNKNOWN_STATUS: u32 = 99_999;

pub const DEFAULT_TYPE: &str = "unknown";
pub const DEFAULT_TITLE: &str = "Unknown Error";
pub const DEFAULT_DETAIL: &str = "An unknown error occurred";

const CANONICAL_MEMBERS: [&str; 5] = ["type", "title", "detail", "status", "instance"];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiProblem {
    #[serde(rename = "type")]
    problem_type: String,
    title: String,
    detail: String,
    status: u32,
    instance: Option<String>,
    /// Extension members, e.g. a per-field `errors` object.
    #[serde(flatten)]
    additional: Map<String, Value>,
}

impl ApiProblem {
    pub fn new(
        problem_type: impl Into<String>,
        title: impl Into<String>,
        detail: impl Into<String>,
        status: u32,
        instance: Option<String>,
        additional: Map<String, Value>,
    ) -> Result<Self, ValidationError> {
        if !(100..=599).contains(&status) {
            return Err(ValidationError::new(
                "status",
                format!("Invalid HTTP status code: {status}"),
            ));
        }
        Ok(Self {
            problem_type: problem_type.into(),
            title: title.into(),
            detail: detail.into(),
            status,
            instance,
            additional,
        })
    }

    /// Reads a decoded response body. Non-object bodies yield a problem made
    /// entirely of defaults.
    pub fn from_json(body: &Value) -> Self {
        match body {
            Value::Object(map) => Self::from_map(map.clone()),
            _ => Self::from_map(Map::new()),
        }
    }

    /// Lenient counterpart of `new`; see the module docs.
    ///
    /// Only non-negative integers that fit in `u32` count as a status. An
    /// integer outside 100..=599 is kept as sent rather than rejected.
    pub fn from_map(mut body: Map<String, Value>) -> Self {
        let problem_type = string_member(&body, "type").unwrap_or_else(|| DEFAULT_TYPE.to_string());
        let title = string_member(&body, "title").unwrap_or_else(|| DEFAULT_TITLE.to_string());
        let detail = string_member(&body, "detail").unwrap_or_else(|| DEFAULT_DETAIL.to_string());
        let status = body
            .get("status")
            .and_then(Value::as_u64)
            .and_then(|s| u32::try_from(s).ok())
            .unwrap_or(UNKNOWN_STATUS);
        let instance = string_member(&body, "instance");

        for member in CANONICAL_MEMBERS {
            body.remove(member);
        }

        Self {
            problem_type,
            title,
            detail,
            status,
            instance,
            additional: body,
        }
    }

    pub fn problem_type(&self) -> &str {
        &self.problem_type
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }

    pub fn status(&self) -> u32 {
        self.status
    }

    pub fn instance(&self) -> Option<&str> {
        self.instance.as_deref()
    }

    pub fn additional(&self) -> &Map<String, Value> {
        &self.additional
    }

    /// 4xx
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status)
    }

    /// 5xx and above, including `UNKNOWN_STATUS`.
    pub fn is_server_error(&self) -> bool {
        self.status >= 500
    }

    /// True for status 400 or for any `type` mentioning "validation".
    pub fn is_validation_error(&self) -> bool {
        self.status == 400 || self.problem_type.contains("validation")
    }

    pub fn is_authentication_error(&self) -> bool {
        self.status == 401
    }

    pub fn has_unknown_status(&self) -> bool {
        self.status == UNKNOWN_STATUS
    }
}

fn string_member(body: &Map<String, Value>, key: &str) -> Option<String> {
    match body.get(key) {
        Some(Value::String(s)) => Some(s.clone()),
        _ => None,
    }
}
