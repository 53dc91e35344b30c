//! Models for the user-data encryption exchange and the URLs derived from its
//! result.

use serde::{Deserialize, Serialize};

/// Outcome marker the backend puts on every encrypt response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

/// Backend response to an encrypt request.
///
/// Successful bodies pass through unchanged; every failure kind collapses
/// into the same shape so callers have a single handling path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptResponse {
    pub status: ResponseStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Opaque token standing in for the full configuration. Never parsed
    /// client-side, only substituted into URLs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encrypted_str: Option<String>,
}

impl EncryptResponse {
    /// Uniform error shape for any failure kind.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Error,
            message: Some(message.into()),
            encrypted_str: None,
        }
    }
}

/// Parsed shape of a non-2xx response body.
///
/// The backend emits FastAPI-style bodies: `detail` is either a list of
/// validation errors or a plain string, and some error paths only carry a
/// top-level `message`. Anything else is [`ErrorBody::Unknown`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorBody {
    /// Validation errors; each entry is one error's message.
    Validation(Vec<String>),
    /// A single human-readable message, passed on verbatim.
    Message(String),
    /// Unparseable or empty body.
    Unknown,
}

#[derive(Deserialize)]
struct RawErrorBody {
    #[serde(default)]
    detail: Option<RawDetail>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDetail {
    Validation(Vec<RawValidationError>),
    Message(String),
    Other(serde::de::IgnoredAny),
}

#[derive(Deserialize)]
struct RawValidationError {
    #[serde(default)]
    msg: Option<String>,
}

impl ErrorBody {
    /// Parses an error response body into its tagged shape.
    ///
    /// Validation entries without a `msg` contribute nothing; a validation
    /// list that yields no messages degrades to [`ErrorBody::Unknown`] so the
    /// formatter never produces empty text.
    #[must_use]
    pub fn parse(body: &str) -> Self {
        let Ok(raw) = serde_json::from_str::<RawErrorBody>(body) else {
            return Self::Unknown;
        };

        match raw.detail {
            Some(RawDetail::Validation(errors)) => {
                let messages: Vec<String> =
                    errors.into_iter().filter_map(|error| error.msg).collect();

                if messages.is_empty() {
                    Self::Unknown
                } else {
                    Self::Validation(messages)
                }
            }
            Some(RawDetail::Message(message)) => Self::Message(message),
            Some(RawDetail::Other(_)) | None => raw.message.map_or(Self::Unknown, Self::Message),
        }
    }
}

/// The two URL variants derived from an encrypted token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestUrls {
    /// Plain HTTPS manifest URL.
    pub manifest_url: String,
    /// `stremio://` deep-link variant with identical host and path.
    pub stremio_install_url: String,
}
