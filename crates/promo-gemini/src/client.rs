//! HTTP client for the Gemini `generateContent` REST API.
//!
//! Wraps `reqwest` with credential handling and typed response
//! deserialization. The credential is resolved once at construction and may
//! be absent: in that case every call fails with
//! [`GeminiError::MissingCredential`] before any network I/O happens.

use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use crate::error::GeminiError;
use crate::types::{ApiErrorBody, GenerateContentRequest, GenerateContentResponse};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Client for the Gemini REST API.
///
/// Use [`GeminiClient::new`] for production or
/// [`GeminiClient::with_base_url`] to point at a mock server in tests.
pub struct GeminiClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl GeminiClient {
    /// Creates a client pointed at the production Gemini API.
    ///
    /// # Errors
    ///
    /// Returns [`GeminiError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: Option<String>, timeout_secs: u64) -> Result<Self, GeminiError> {
        Self::with_base_url(api_key, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`GeminiError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn with_base_url(
        api_key: Option<String>,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, GeminiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("promo/0.1 (marketing-studio)")
            .build()?;

        Ok(Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    /// Issues one `generateContent` call against the given model.
    ///
    /// Exactly one attempt is made; there is no retry.
    ///
    /// # Errors
    ///
    /// - [`GeminiError::MissingCredential`] if no API key is configured
    ///   (returned before any request is sent).
    /// - [`GeminiError::Http`] on network failure or timeout.
    /// - [`GeminiError::Api`] if the provider answers with a non-2xx status.
    /// - [`GeminiError::Malformed`] if the response body is not the expected
    ///   JSON shape.
    pub async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GeminiError> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(GeminiError::MissingCredential);
        };

        let url = format!("{}/v1beta/models/{model}:generateContent", self.base_url);
        debug!(model, "issuing generateContent request");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(GeminiError::Api {
                code: status.as_u16(),
                message: extract_error_message(&body),
            });
        }

        serde_json::from_str(&body).map_err(|e| GeminiError::Malformed {
            context: format!("generateContent({model})"),
            source: e,
        })
    }
}

/// Pulls the human-readable message out of a provider error body, falling
/// back to the (truncated) raw body when it is not the usual envelope.
fn extract_error_message(body: &str) -> String {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(envelope) => envelope.error.message,
        Err(_) => truncate(body.trim(), 200),
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max_chars).collect();
        format!("{cut}…")
    }
}
