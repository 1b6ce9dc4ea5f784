//! Error types for the Mambu API client.
//!
//! Every failure surfaced by the crate is a [`MambuApiError`]. Callers branch on
//! [`MambuApiError::code`] and [`MambuApiError::message`]; [`MambuApiError::kind`]
//! is there when the classification itself matters.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Code reported for failures that never reached the server.
pub const LOCAL_ERROR_CODE: i32 = -1;

/// The single error type returned by every operation in this crate.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct MambuApiError(Box<MambuErrorKind>);

#[derive(Debug, Error)]
pub enum MambuErrorKind {
    #[error("Missing required input: {0}")]
    MissingInput(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Failed to create URL for domain {domain:?} with path {path:?}: {source}")]
    UrlConstruction {
        domain: String,
        path: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Invalid request: {0}")]
    InvalidRequest(#[from] ureq::http::Error),
    #[error("Connection failure: {0}")]
    Transport(#[from] ureq::Error),
    #[error("HTTP {status}: {body}")]
    Http {
        status: u16,
        body: String,
        response: Option<MambuErrorResponse>,
    },
    #[error("Failed to serialize request body: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("Failed to parse response as {expected}: {source}")]
    Deserialize {
        expected: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("Invalid JSON date format {0:?}")]
    DateFormat(String),
    #[error("Operation returns {declared} but {requested} was requested")]
    ReturnFormatMismatch {
        declared: &'static str,
        requested: &'static str,
    },
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),
    #[error("{message}")]
    Api { code: i32, message: String },
}

/// Structured failure body returned by the Mambu API, e.g.
/// `{"returnCode":101,"returnStatus":"INVALID_PARAMETERS","errorSource":"offset"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MambuErrorResponse {
    pub return_code: i32,
    #[serde(default)]
    pub return_status: Option<String>,
    #[serde(default)]
    pub error_source: Option<String>,
}

impl std::fmt::Display for MambuErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.return_status, &self.error_source) {
            (Some(status), Some(source)) => write!(f, "{status} ({source})"),
            (Some(status), None) => write!(f, "{status}"),
            (None, Some(source)) => write!(f, "error {} ({source})", self.return_code),
            (None, None) => write!(f, "error {}", self.return_code),
        }
    }
}

impl MambuApiError {
    /// Service-level failure with an explicit code, e.g. a required setting
    /// missing from an otherwise successful response.
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        MambuErrorKind::Api {
            code,
            message: message.into(),
        }
        .into()
    }

    pub(crate) fn missing_input(what: impl Into<String>) -> Self {
        MambuErrorKind::MissingInput(what.into()).into()
    }

    pub(crate) fn invalid_input(what: impl Into<String>) -> Self {
        MambuErrorKind::InvalidInput(what.into()).into()
    }

    /// Builds the error for a non-2xx response, extracting the server's
    /// structured payload when the body carries one.
    pub(crate) fn from_status(status: u16, body: String) -> Self {
        let response = serde_json::from_str::<MambuErrorResponse>(&body).ok();
        MambuErrorKind::Http {
            status,
            body,
            response,
        }
        .into()
    }

    #[must_use]
    pub fn kind(&self) -> &MambuErrorKind {
        &self.0
    }

    /// Server `returnCode` for structured failures, the HTTP status for other
    /// HTTP failures, [`LOCAL_ERROR_CODE`] for anything that failed locally.
    #[must_use]
    pub fn code(&self) -> i32 {
        match self.kind() {
            MambuErrorKind::Http {
                response: Some(response),
                ..
            } => response.return_code,
            MambuErrorKind::Http { status, .. } => i32::from(*status),
            MambuErrorKind::Api { code, .. } => *code,
            _ => LOCAL_ERROR_CODE,
        }
    }

    #[must_use]
    pub fn message(&self) -> String {
        match self.kind() {
            MambuErrorKind::Http {
                response: Some(response),
                ..
            } => response.to_string(),
            MambuErrorKind::Http { status, body, .. } if body.trim().is_empty() => {
                format!("HTTP {status}")
            }
            MambuErrorKind::Http { body, .. } => body.clone(),
            other => other.to_string(),
        }
    }

    /// HTTP status of the failed exchange, if a response was received.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self.kind() {
            MambuErrorKind::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    #[must_use]
    pub fn server_error(&self) -> Option<&MambuErrorResponse> {
        match self.kind() {
            MambuErrorKind::Http { response, .. } => response.as_ref(),
            _ => None,
        }
    }
}

impl From<MambuErrorKind> for MambuApiError {
    fn from(value: MambuErrorKind) -> Self {
        Self(Box::new(value))
    }
}

impl From<ureq::Error> for MambuApiError {
    fn from(value: ureq::Error) -> Self {
        MambuErrorKind::Transport(value).into()
    }
}

impl From<ureq::http::Error> for MambuApiError {
    fn from(value: ureq::http::Error) -> Self {
        MambuErrorKind::InvalidRequest(value).into()
    }
}

impl From<std::env::VarError> for MambuApiError {
    fn from(value: std::env::VarError) -> Self {
        MambuErrorKind::EnvVar(value).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structured_body_provides_code_and_message() {
        let err = MambuApiError::from_status(
            400,
            r#"{"returnCode":101,"returnStatus":"INVALID_PARAMETERS","errorSource":"offset"}"#
                .to_string(),
        );
        assert_eq!(err.code(), 101);
        assert_eq!(err.status(), Some(400));
        assert_eq!(err.message(), "INVALID_PARAMETERS (offset)");
        assert_eq!(
            err.server_error().map(|r| r.return_status.as_deref()),
            Some(Some("INVALID_PARAMETERS"))
        );
    }

    #[test]
    fn unstructured_body_falls_back_to_status() {
        let err = MambuApiError::from_status(502, "<html>Bad Gateway</html>".to_string());
        assert_eq!(err.code(), 502);
        assert_eq!(err.message(), "<html>Bad Gateway</html>");
        assert!(err.server_error().is_none());

        let empty = MambuApiError::from_status(404, String::new());
        assert_eq!(empty.message(), "HTTP 404");
    }

    #[test]
    fn local_failures_use_local_code() {
        let err = MambuApiError::missing_input("index rate");
        assert_eq!(err.code(), LOCAL_ERROR_CODE);
        assert_eq!(err.message(), "Missing required input: index rate");
        assert!(err.status().is_none());
    }

    #[test]
    fn service_errors_keep_their_code() {
        let err = MambuApiError::new(-1, "Base Currency must be defined");
        assert_eq!(err.code(), -1);
        assert_eq!(err.to_string(), "Base Currency must be defined");
    }
}
