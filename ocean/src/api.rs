//! Typed wrappers over [`Gateway::call`], one per backend endpoint.

use serde::Serialize;
use serde_json::Value;
use shared_types::{
    AuthResponse, CreateProjectRequest, Credentials, DocType, GenerateSectionRequest,
    OutlineResponse, Project, RefineSectionRequest, SaveSectionsRequest, Section,
    SectionContentResponse,
};

use crate::error::{ClientError, ClientResult};
use crate::gateway::{Gateway, Method, NoSession, SessionHandle, Transport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Register,
}

impl AuthMode {
    pub fn path(&self) -> &'static str {
        match self {
            AuthMode::Login => "/login",
            AuthMode::Register => "/register",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            AuthMode::Login => AuthMode::Register,
            AuthMode::Register => AuthMode::Login,
        }
    }
}

/// Binary export payload as returned by the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPayload {
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

fn to_body<B: Serialize>(body: &B) -> ClientResult<Value> {
    serde_json::to_value(body).map_err(|e| ClientError::Validation(e.to_string()))
}

fn project_path(project_id: &str) -> String {
    format!("/projects/{project_id}")
}

/// `POST /login` or `POST /register`. Never carries a token; a 401 here means
/// bad credentials and is reported as `ClientError::Auth`.
pub async fn authenticate<T: Transport>(
    gateway: &Gateway<T>,
    mode: AuthMode,
    credentials: &Credentials,
) -> ClientResult<AuthResponse> {
    let reply = gateway
        .call(&NoSession, mode.path(), Method::Post, Some(to_body(credentials)?))
        .await
        .map_err(|e| match e {
            ClientError::Unauthorized { message } => {
                ClientError::Auth(message.unwrap_or_else(|| "Auth failed".to_string()))
            }
            ClientError::RequestFailed(message) => ClientError::Auth(message),
            other => other,
        })?;
    reply.into_json()
}

pub async fn list_projects<T: Transport>(
    gateway: &Gateway<T>,
    session: &dyn SessionHandle,
) -> ClientResult<Vec<Project>> {
    let reply = gateway.call(session, "/projects", Method::Get, None).await?;
    match reply.into_json::<Value>()? {
        Value::Array(items) => items
            .into_iter()
            .map(|item| serde_json::from_value(item).map_err(ClientError::from))
            .collect(),
        // Anything that is not a list is treated as an empty collection
        _ => Ok(Vec::new()),
    }
}

pub async fn fetch_project<T: Transport>(
    gateway: &Gateway<T>,
    session: &dyn SessionHandle,
    project_id: &str,
) -> ClientResult<Project> {
    gateway
        .call(session, &project_path(project_id), Method::Get, None)
        .await?
        .into_json()
}

pub async fn create_project<T: Transport>(
    gateway: &Gateway<T>,
    session: &dyn SessionHandle,
    topic: &str,
    doc_type: DocType,
) -> ClientResult<Project> {
    let body = to_body(&CreateProjectRequest {
        doc_type,
        topic: topic.to_string(),
    })?;
    gateway
        .call(session, "/projects", Method::Post, Some(body))
        .await?
        .into_json()
}

pub async fn generate_outline<T: Transport>(
    gateway: &Gateway<T>,
    session: &dyn SessionHandle,
    project_id: &str,
) -> ClientResult<Vec<Section>> {
    let path = format!("{}/generate-outline", project_path(project_id));
    let outline: OutlineResponse = gateway
        .call(session, &path, Method::Post, None)
        .await?
        .into_json()?;
    Ok(outline.sections)
}

pub async fn generate_section<T: Transport>(
    gateway: &Gateway<T>,
    session: &dyn SessionHandle,
    project_id: &str,
    index: usize,
) -> ClientResult<String> {
    let path = format!("{}/sections/generate", project_path(project_id));
    let body = to_body(&GenerateSectionRequest { index })?;
    let reply: SectionContentResponse = gateway
        .call(session, &path, Method::Post, Some(body))
        .await?
        .into_json()?;
    Ok(reply.content)
}

pub async fn refine_section<T: Transport>(
    gateway: &Gateway<T>,
    session: &dyn SessionHandle,
    project_id: &str,
    index: usize,
    instruction: &str,
) -> ClientResult<String> {
    let path = format!("{}/sections/refine", project_path(project_id));
    let body = to_body(&RefineSectionRequest {
        index,
        instruction: instruction.to_string(),
    })?;
    let reply: SectionContentResponse = gateway
        .call(session, &path, Method::Post, Some(body))
        .await?
        .into_json()?;
    Ok(reply.content)
}

/// `PUT /projects/{id}` with the full section list
pub async fn save_sections<T: Transport>(
    gateway: &Gateway<T>,
    session: &dyn SessionHandle,
    project_id: &str,
    sections: &[Section],
) -> ClientResult<()> {
    let body = to_body(&SaveSectionsRequest {
        sections: sections.to_vec(),
    })?;
    gateway
        .call(session, &project_path(project_id), Method::Put, Some(body))
        .await?;
    Ok(())
}

pub async fn export_project<T: Transport>(
    gateway: &Gateway<T>,
    session: &dyn SessionHandle,
    project_id: &str,
) -> ClientResult<ExportPayload> {
    let path = format!("{}/export", project_path(project_id));
    let (content_type, bytes) = gateway
        .call(session, &path, Method::Get, None)
        .await?
        .into_binary()?;
    Ok(ExportPayload {
        content_type,
        bytes,
    })
}
