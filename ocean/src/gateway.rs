//! Backend gateway - the single authenticated request path.
//!
//! Every call makes exactly one attempt: no retries, no timeout, no backoff.
//! The HTTP stack itself is behind [`Transport`] so the same gateway runs on
//! gloo-net in the browser and on scripted fakes in tests.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared_types::ErrorBody;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

const GENERIC_FAILURE: &str = "Request failed";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// Case-insensitive header lookup
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn is_json(&self) -> bool {
        self.content_type
            .as_deref()
            .map(|ct| ct.to_ascii_lowercase().contains("application/json"))
            .unwrap_or(false)
    }
}

/// One HTTP round trip. `Err` means the request never produced a response.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, String>;
}

/// What the gateway needs from the session: the bearer token, and a way to
/// drop it when the server says it is no longer valid.
pub trait SessionHandle {
    fn token(&self) -> Option<String>;
    fn invalidate(&self);
}

/// Used for login and register, which never carry a token.
pub struct NoSession;

impl SessionHandle for NoSession {
    fn token(&self) -> Option<String> {
        None
    }

    fn invalidate(&self) {}
}

/// A successful reply
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Json(Value),
    Binary {
        content_type: Option<String>,
        bytes: Vec<u8>,
    },
}

impl Reply {
    pub fn into_json<T: DeserializeOwned>(self) -> ClientResult<T> {
        match self {
            Reply::Json(value) => Ok(serde_json::from_value(value)?),
            Reply::Binary { content_type, .. } => Err(ClientError::InvalidResponse(format!(
                "expected JSON, got {}",
                content_type.as_deref().unwrap_or("untyped body")
            ))),
        }
    }

    pub fn into_binary(self) -> ClientResult<(Option<String>, Vec<u8>)> {
        match self {
            Reply::Binary {
                content_type,
                bytes,
            } => Ok((content_type, bytes)),
            Reply::Json(_) => Err(ClientError::InvalidResponse(
                "expected a document, got JSON".to_string(),
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Gateway<T> {
    transport: T,
    config: ClientConfig,
}

impl<T: Transport> Gateway<T> {
    pub fn new(transport: T, config: ClientConfig) -> Self {
        Self { transport, config }
    }

    pub async fn call(
        &self,
        session: &dyn SessionHandle,
        path: &str,
        method: Method,
        body: Option<Value>,
    ) -> ClientResult<Reply> {
        let mut headers = vec![("Content-Type".to_string(), "application/json".to_string())];
        if let Some(token) = session.token().filter(|t| !t.is_empty()) {
            headers.push(("Authorization".to_string(), format!("Bearer {token}")));
        }

        let request = HttpRequest {
            method,
            url: self.config.url(path),
            headers,
            body: body.map(|b| b.to_string()),
        };

        tracing::debug!(%method, path, "Backend request");
        let response = self.transport.send(request).await.map_err(|e| {
            tracing::warn!(%method, path, error = %e, "Backend unreachable");
            ClientError::Transport(e)
        })?;

        if response.status == 401 {
            tracing::info!(%method, path, "Backend rejected session");
            session.invalidate();
            return Err(ClientError::Unauthorized {
                message: error_message(&response.body),
            });
        }

        interpret(response).map_err(|e| {
            tracing::warn!(%method, path, error = %e, "Backend request failed");
            e
        })
    }
}

/// Turn a non-401 response into a reply or a failure.
pub fn interpret(response: HttpResponse) -> ClientResult<Reply> {
    if !response.is_success() {
        let message = error_message(&response.body).unwrap_or_else(|| GENERIC_FAILURE.to_string());
        return Err(ClientError::RequestFailed(message));
    }

    if response.is_json() {
        let value = serde_json::from_slice(&response.body)?;
        return Ok(Reply::Json(value));
    }

    Ok(Reply::Binary {
        content_type: response.content_type,
        bytes: response.body,
    })
}

/// The `error` field of a JSON error body, if there is one.
fn error_message(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .map(|body| body.error)
        .filter(|message| !message.trim().is_empty())
}
