use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use crate::validation::{is_absolute_url, is_uuid_v4, ValidationError};

/// Body of a `201 Created` answer: the new project and where to send the
/// customer next.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedProject {
    project_id: String,
    redirect_url: String,
    #[serde(skip)]
    uuid: Uuid,
}

impl CreatedProject {
    /// `project_id` must be a UUID v4 in canonical hyphenated form (either
    /// case); it is kept exactly as the server sent it.
    pub fn new(
        project_id: impl Into<String>,
        redirect_url: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let project_id = project_id.into();
        let redirect_url = redirect_url.into();

        if !is_uuid_v4(&project_id) {
            return Err(invalid_project_id(&project_id));
        }
        let uuid = Uuid::parse_str(&project_id).map_err(|_| invalid_project_id(&project_id))?;
        if !is_absolute_url(&redirect_url) {
            return Err(ValidationError::new(
                "redirectUrl",
                format!("Invalid redirect URL: {redirect_url}"),
            ));
        }

        Ok(Self {
            project_id,
            redirect_url,
            uuid,
        })
    }

    /// Reads a decoded `201` body. Unlike `ApiProblem`, missing or non-string
    /// identifiers are hard failures.
    pub fn from_json(body: &Value) -> Result<Self, ValidationError> {
        let Some(project_id) = body.get("projectId").and_then(Value::as_str) else {
            return Err(ValidationError::new(
                "projectId",
                "Missing or invalid projectId in response",
            ));
        };
        let Some(redirect_url) = body.get("redirectUrl").and_then(Value::as_str) else {
            return Err(ValidationError::new(
                "redirectUrl",
                "Missing or invalid redirectUrl in response",
            ));
        };
        Self::new(project_id, redirect_url)
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn redirect_url(&self) -> &str {
        &self.redirect_url
    }

    pub fn uuid(&self) -> Uuid {
        self.uuid
    }
}

fn invalid_project_id(project_id: &str) -> ValidationError {
    ValidationError::new(
        "projectId",
        format!("Invalid project ID format: {project_id}"),
    )
}
