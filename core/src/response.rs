use crate::http::HttpResponse;
use crate::types::CreatedProject;

/// Successful outcome of `PartnerClient::create_project`.
///
/// Keeps the raw `HttpResponse` next to the parsed project so headers and
/// transport diagnostics stay available.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedProjectResponse {
    project: CreatedProject,
    response: HttpResponse,
}

impl CreatedProjectResponse {
    pub(crate) fn new(project: CreatedProject, response: HttpResponse) -> Self {
        Self { project, response }
    }

    pub fn result(&self) -> &CreatedProject {
        &self.project
    }

    pub fn response(&self) -> &HttpResponse {
        &self.response
    }

    pub fn debug(&self) -> &str {
        &self.response.debug
    }

    pub fn into_result(self) -> CreatedProject {
        self.project
    }
}
