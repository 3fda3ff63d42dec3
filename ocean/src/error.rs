//! Error taxonomy for client operations.
//!
//! Load and persist failures never reach the user; they are logged where they
//! happen. Everything else propagates as a `ClientError`.

use crate::config::ConfigError;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ClientError {
    /// Bad credentials or rejected registration, shown inline on the auth form
    #[error("{0}")]
    Auth(String),

    /// Session expired or was revoked; the session has already been reset
    #[error("Unauthorized")]
    Unauthorized { message: Option<String> },

    /// Non-2xx reply other than 401
    #[error("{0}")]
    RequestFailed(String),

    /// Rejected locally before any request was made
    #[error("{0}")]
    Validation(String),

    #[error("Network error: {0}")]
    Transport(String),

    #[error("Unexpected response: {0}")]
    InvalidResponse(String),

    #[error("Unknown project '{0}'")]
    UnknownProject(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl ClientError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ClientError::Unauthorized { .. })
    }

    /// Text for a blocking alert, falling back to `fallback` for errors whose
    /// message is not meant for users.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ClientError::Auth(msg)
            | ClientError::RequestFailed(msg)
            | ClientError::Validation(msg)
                if !msg.trim().is_empty() =>
            {
                msg.clone()
            }
            _ => fallback.to_string(),
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> Self {
        ClientError::InvalidResponse(e.to_string())
    }
}

pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;

    #[test]
    fn config_errors_convert_and_clone() {
        let err: ClientError = ClientConfig::new("ftp://docs").unwrap_err().into();
        let copy = err.clone();
        assert_eq!(copy, err);
        assert!(matches!(copy, ClientError::Config(ConfigError::InvalidScheme(_))));
        assert_eq!(copy.user_message("Bad configuration"), "Bad configuration");
    }

    #[test]
    fn server_messages_reach_the_user() {
        let err = ClientError::RequestFailed("Project not found".to_string());
        assert_eq!(err.user_message("Export failed"), "Project not found");
        assert_eq!(
            ClientError::RequestFailed("  ".to_string()).user_message("Export failed"),
            "Export failed"
        );
    }
}
