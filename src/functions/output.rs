//! Typed results of a dispatched operation.

use serde::de::DeserializeOwned;

use super::definition::ApiReturnFormat;
use crate::{error::MambuErrorKind, json::from_json_str, APIResult};

/// Result of an operation, tagged with the shape its definition declares.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiOutput<T> {
    Object(T),
    Collection(Vec<T>),
    ResponseString(String),
    Boolean(bool),
}

impl<T: DeserializeOwned> ApiOutput<T> {
    /// Parses a successful response body according to `format`.
    pub(crate) fn parse(format: ApiReturnFormat, body: String) -> APIResult<Self> {
        match format {
            ApiReturnFormat::Object => from_json_str(&body).map(ApiOutput::Object),
            ApiReturnFormat::Collection => {
                let trimmed = body.trim();
                if trimmed.is_empty() || trimmed == "null" {
                    return Ok(ApiOutput::Collection(Vec::new()));
                }
                from_json_str(trimmed).map(ApiOutput::Collection)
            }
            ApiReturnFormat::ResponseString => Ok(ApiOutput::ResponseString(body)),
            ApiReturnFormat::Boolean => Ok(ApiOutput::Boolean(true)),
        }
    }
}

impl<T> ApiOutput<T> {
    #[must_use]
    pub fn format(&self) -> ApiReturnFormat {
        match self {
            ApiOutput::Object(_) => ApiReturnFormat::Object,
            ApiOutput::Collection(_) => ApiReturnFormat::Collection,
            ApiOutput::ResponseString(_) => ApiReturnFormat::ResponseString,
            ApiOutput::Boolean(_) => ApiReturnFormat::Boolean,
        }
    }

    fn mismatch(&self, requested: ApiReturnFormat) -> crate::MambuApiError {
        MambuErrorKind::ReturnFormatMismatch {
            declared: self.format().as_str(),
            requested: requested.as_str(),
        }
        .into()
    }

    pub fn into_object(self) -> APIResult<T> {
        match self {
            ApiOutput::Object(value) => Ok(value),
            other => Err(other.mismatch(ApiReturnFormat::Object)),
        }
    }

    pub fn into_collection(self) -> APIResult<Vec<T>> {
        match self {
            ApiOutput::Collection(values) => Ok(values),
            other => Err(other.mismatch(ApiReturnFormat::Collection)),
        }
    }

    pub fn into_string(self) -> APIResult<String> {
        match self {
            ApiOutput::ResponseString(text) => Ok(text),
            other => Err(other.mismatch(ApiReturnFormat::ResponseString)),
        }
    }

    pub fn into_bool(self) -> APIResult<bool> {
        match self {
            ApiOutput::Boolean(flag) => Ok(flag),
            other => Err(other.mismatch(ApiReturnFormat::Boolean)),
        }
    }
}
