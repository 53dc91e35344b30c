#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]

//! Client for the FuseBox user-data encryption exchange.
//!
//! Encodes a [`ProfileConfig`] through the codec, POSTs it to the backend,
//! and hands back the opaque encrypted token that stands in for the
//! configuration from then on. Also derives the manifest URLs a media app
//! installs from. One outbound call per invocation; no retries, no caching.

pub mod models;

use std::{sync::LazyLock, time::Duration};

use fusebox_profile::{models::ProfileConfig, profile_to_user_data};
use thiserror::Error;
use url::Url;

use crate::models::{EncryptResponse, ErrorBody, ManifestUrls};

static API_KEY_HEADER_NAME: &str = "X-API-Key";
static STREMIO_SCHEME: &str = "stremio";

/// Shown when an error response carries nothing usable.
pub const FALLBACK_ERROR_MESSAGE: &str = "Failed to save configuration. Please try again.";
/// Shown when the request deadline elapses.
pub const TIMEOUT_ERROR_MESSAGE: &str = "Request timed out. Please try again.";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

static CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .unwrap()
});

/// Source of the stored instance API key attached as `X-API-Key`.
///
/// Injected at the call site instead of read from ambient storage so tests
/// and non-browser hosts stay deterministic.
pub trait ApiKeyProvider: Send + Sync {
    fn api_key(&self) -> Option<String>;
}

impl ApiKeyProvider for Option<String> {
    fn api_key(&self) -> Option<String> {
        self.clone()
    }
}

/// Provider with no stored key, for public hosted instances.
pub struct NoApiKey;

impl ApiKeyProvider for NoApiKey {
    fn api_key(&self) -> Option<String> {
        None
    }
}

#[derive(Debug, Error)]
pub enum EncryptUserDataError {
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
    #[error("Request timed out")]
    Timeout,
    #[error(transparent)]
    Reqwest(reqwest::Error),
}

impl From<reqwest::Error> for EncryptUserDataError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Reqwest(err)
        }
    }
}

/// Encodes `config` and exchanges it for an encrypted token.
///
/// `existing_secret` selects update over create: the payload is re-keyed
/// against the previously issued token instead of minting a new one.
/// Non-2xx responses come back as `Ok` with the uniform error shape, message
/// extracted per the tiered [`ErrorBody`] contract; only transport-level
/// failures surface as `Err`.
///
/// # Errors
///
/// * `EncryptUserDataError::InvalidBaseUrl` if `base_url` does not parse
/// * `EncryptUserDataError::Timeout` if the request deadline elapses
/// * `EncryptUserDataError::Reqwest` for any other transport failure
pub async fn try_encrypt_user_data(
    base_url: &str,
    config: &ProfileConfig,
    api_password: Option<&str>,
    existing_secret: Option<&str>,
    keys: &(impl ApiKeyProvider + ?Sized),
) -> Result<EncryptResponse, EncryptUserDataError> {
    let payload = profile_to_user_data(config, api_password);
    let url = encrypt_endpoint(base_url, existing_secret)?;

    log::debug!("try_encrypt_user_data: POST {url}");

    let mut request = CLIENT.post(url).json(&payload);

    if let Some(api_key) = keys.api_key().filter(|key| !key.is_empty()) {
        request = request.header(API_KEY_HEADER_NAME, api_key);
    }

    let response = request.send().await?;

    if response.status().is_success() {
        Ok(response.json().await?)
    } else {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        log::debug!("try_encrypt_user_data: status={status} body={body}");

        Ok(EncryptResponse::error(error_message(&ErrorBody::parse(
            &body,
        ))))
    }
}

/// [`try_encrypt_user_data`] with every failure collapsed into the uniform
/// `{status: error, message}` shape, so callers have a single handling path.
pub async fn encrypt_user_data(
    base_url: &str,
    config: &ProfileConfig,
    api_password: Option<&str>,
    existing_secret: Option<&str>,
    keys: &(impl ApiKeyProvider + ?Sized),
) -> EncryptResponse {
    match try_encrypt_user_data(base_url, config, api_password, existing_secret, keys).await {
        Ok(response) => response,
        Err(EncryptUserDataError::Timeout) => {
            log::error!("encrypt_user_data: request timed out");
            EncryptResponse::error(TIMEOUT_ERROR_MESSAGE)
        }
        Err(err) => {
            log::error!("encrypt_user_data: {err:?}");
            EncryptResponse::error(FALLBACK_ERROR_MESSAGE)
        }
    }
}

/// Formats a parsed error body into the user-facing message.
///
/// Tiered contract: validation messages joined by comma, then a plain
/// message verbatim, then the hardcoded fallback.
#[must_use]
pub fn error_message(body: &ErrorBody) -> String {
    match body {
        ErrorBody::Validation(messages) => messages.join(", "),
        ErrorBody::Message(message) => message.clone(),
        ErrorBody::Unknown => FALLBACK_ERROR_MESSAGE.to_string(),
    }
}

/// Builds the manifest URL pair for an encrypted token.
///
/// Pure string templating against the instance origin; the token's contents
/// are never inspected. The deep link swaps the HTTP(S) scheme for
/// `stremio://`, keeping host and path byte-identical.
#[must_use]
pub fn generate_manifest_urls(origin: &str, encrypted_str: &str) -> ManifestUrls {
    let origin = origin.trim_end_matches('/');
    let manifest_url = format!("{origin}/{encrypted_str}/manifest.json");

    let stremio_install_url = manifest_url.split_once("://").map_or_else(
        || format!("{STREMIO_SCHEME}://{manifest_url}"),
        |(_, rest)| format!("{STREMIO_SCHEME}://{rest}"),
    );

    ManifestUrls {
        manifest_url,
        stremio_install_url,
    }
}

fn encrypt_endpoint(base_url: &str, existing_secret: Option<&str>) -> Result<Url, url::ParseError> {
    let base = base_url.trim_end_matches('/');

    let endpoint = existing_secret.map_or_else(
        || format!("{base}/encrypt-user-data"),
        |secret| format!("{base}/encrypt-user-data/{secret}"),
    );

    Url::parse(&endpoint)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::models::ResponseStatus;

    #[test]
    fn validation_error_messages_join_with_comma() {
        let body = r#"{"detail":[{"msg":"bad size"},{"msg":"bad sort"}]}"#;

        assert_eq!(
            error_message(&ErrorBody::parse(body)),
            "bad size, bad sort".to_string()
        );
    }

    #[test]
    fn validation_entries_without_msg_are_skipped() {
        let body = r#"{"detail":[{"loc":["body","max_size"]},{"msg":"bad sort"}]}"#;

        assert_eq!(
            ErrorBody::parse(body),
            ErrorBody::Validation(vec!["bad sort".to_string()])
        );
    }

    #[test]
    fn string_detail_passes_through_verbatim() {
        let body = r#"{"detail":"Invalid API password"}"#;

        assert_eq!(
            ErrorBody::parse(body),
            ErrorBody::Message("Invalid API password".to_string())
        );
    }

    #[test]
    fn top_level_message_is_the_third_tier() {
        let body = r#"{"message":"Something broke"}"#;

        assert_eq!(
            ErrorBody::parse(body),
            ErrorBody::Message("Something broke".to_string())
        );
    }

    #[test]
    fn unparseable_bodies_fall_back_to_the_hardcoded_message() {
        for body in ["", "not json", "{}", r#"{"detail":[]}"#, r#"{"detail":{}}"#] {
            assert_eq!(ErrorBody::parse(body), ErrorBody::Unknown, "body: {body}");
            assert_eq!(
                error_message(&ErrorBody::parse(body)),
                FALLBACK_ERROR_MESSAGE.to_string()
            );
        }
    }

    #[test]
    fn unknown_detail_shape_still_honors_top_level_message() {
        let body = r#"{"detail":{"oops":true},"message":"fallback text"}"#;

        assert_eq!(
            ErrorBody::parse(body),
            ErrorBody::Message("fallback text".to_string())
        );
    }

    #[test]
    fn manifest_urls_from_https_origin() {
        let urls = generate_manifest_urls("https://example.com", "abc123");

        assert_eq!(urls.manifest_url, "https://example.com/abc123/manifest.json");
        assert_eq!(
            urls.stremio_install_url,
            "stremio://example.com/abc123/manifest.json"
        );
    }

    #[test]
    fn manifest_urls_keep_host_and_path_for_http_origin() {
        let urls = generate_manifest_urls("http://localhost:8000/", "tok");

        assert_eq!(urls.manifest_url, "http://localhost:8000/tok/manifest.json");
        assert_eq!(
            urls.stremio_install_url,
            "stremio://localhost:8000/tok/manifest.json"
        );
    }

    #[test]
    fn endpoint_selection_create_vs_update() {
        let create = encrypt_endpoint("https://example.com", None).unwrap();
        let update = encrypt_endpoint("https://example.com/", Some("abc123")).unwrap();

        assert_eq!(create.as_str(), "https://example.com/encrypt-user-data");
        assert_eq!(
            update.as_str(),
            "https://example.com/encrypt-user-data/abc123"
        );
    }

    #[test]
    fn option_string_is_an_api_key_provider() {
        let stored: Option<String> = Some("key".to_string());

        assert_eq!(stored.api_key(), Some("key".to_string()));
        assert_eq!(NoApiKey.api_key(), None);
    }

    #[test]
    fn error_response_shape_is_uniform() {
        let response = EncryptResponse::error("nope");

        assert_eq!(response.status, ResponseStatus::Error);
        assert_eq!(response.message, Some("nope".to_string()));
        assert_eq!(response.encrypted_str, None);
    }

    #[test_log::test(tokio::test)]
    async fn invalid_base_url_errors_before_any_request() {
        let result = try_encrypt_user_data(
            "not a url",
            &ProfileConfig::default(),
            None,
            None,
            &NoApiKey,
        )
        .await;

        assert!(matches!(
            result,
            Err(EncryptUserDataError::InvalidBaseUrl(_))
        ));
    }
}
