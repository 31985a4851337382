//! Gemini `generateContent` wire types.
//!
//! Models the JSON bodies of the v1beta REST endpoint
//! `models/{model}:generateContent`. Only the fields this gateway reads or
//! writes are modelled; unknown response fields are ignored on deserialize.

use serde::{Deserialize, Serialize};

/// Request body for a `generateContent` call.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

/// One conversational turn: a role plus its parts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    /// A user-role turn holding a single text part.
    #[must_use]
    pub fn user_text(text: impl Into<String>) -> Self {
        Self {
            role: Some("user".to_string()),
            parts: vec![Part {
                text: Some(text.into()),
                inline_data: None,
            }],
        }
    }
}

/// A single part of a turn: text, or an inline binary payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
}

/// Mime-typed, base64-encoded binary payload inside a [`Part`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

/// Per-request generation settings.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,
    /// Provider-side structured-output schema (Gemini wire form, e.g.
    /// `{"type": "OBJECT", "properties": ...}`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_schema: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thinking_config: Option<ThinkingConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_config: Option<ImageConfig>,
}

/// Internal-reasoning allowance requested from the provider.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThinkingConfig {
    pub thinking_budget: i32,
}

/// Settings for image-capable models.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageConfig {
    pub aspect_ratio: String,
}

/// Response body of a successful `generateContent` call.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub model_version: Option<String>,
}

/// One generated candidate.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate's text parts.
    ///
    /// Returns `None` when there is no candidate, no text part, or the
    /// joined text is empty; callers treat all three the same way.
    #[must_use]
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }

    /// First inline image of the first candidate, as a `data:` URL.
    #[must_use]
    pub fn inline_image(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        content
            .parts
            .iter()
            .filter_map(|part| part.inline_data.as_ref())
            .find(|inline| !inline.data.is_empty())
            .map(|inline| format!("data:{};base64,{}", inline.mime_type, inline.data))
    }
}

/// Error envelope the API returns on non-2xx statuses.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub error: ApiErrorDetail,
}

/// The `error` object inside [`ApiErrorBody`].
#[derive(Debug, Deserialize)]
pub struct ApiErrorDetail {
    #[serde(default)]
    pub code: Option<u16>,
    pub message: String,
    #[serde(default)]
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response_with_parts(parts: Vec<Part>) -> GenerateContentResponse {
        GenerateContentResponse {
            candidates: vec![Candidate {
                content: Some(Content {
                    role: Some("model".to_string()),
                    parts,
                }),
                finish_reason: Some("STOP".to_string()),
            }],
            model_version: None,
        }
    }

    #[test]
    fn text_joins_multiple_text_parts() {
        let response = response_with_parts(vec![
            Part {
                text: Some("{\"a\":".to_string()),
                inline_data: None,
            },
            Part {
                text: Some("1}".to_string()),
                inline_data: None,
            },
        ]);
        assert_eq!(response.text().as_deref(), Some("{\"a\":1}"));
    }

    #[test]
    fn text_is_none_without_candidates() {
        let response = GenerateContentResponse {
            candidates: vec![],
            model_version: None,
        };
        assert!(response.text().is_none());
    }

    #[test]
    fn text_is_none_when_parts_are_empty() {
        let response = response_with_parts(vec![]);
        assert!(response.text().is_none());
    }

    #[test]
    fn inline_image_formats_data_url() {
        let response = response_with_parts(vec![
            Part {
                text: Some("Here is your visual.".to_string()),
                inline_data: None,
            },
            Part {
                text: None,
                inline_data: Some(InlineData {
                    mime_type: "image/png".to_string(),
                    data: "aGVsbG8=".to_string(),
                }),
            },
        ]);
        assert_eq!(
            response.inline_image().as_deref(),
            Some("data:image/png;base64,aGVsbG8=")
        );
    }

    #[test]
    fn inline_image_is_none_for_text_only_parts() {
        let response = response_with_parts(vec![Part {
            text: Some("no image here".to_string()),
            inline_data: None,
        }]);
        assert!(response.inline_image().is_none());
    }

    #[test]
    fn request_serializes_camel_case_config() {
        let request = GenerateContentRequest {
            contents: vec![Content::user_text("hi")],
            generation_config: Some(GenerationConfig {
                response_mime_type: Some("application/json".to_string()),
                response_schema: Some(serde_json::json!({ "type": "ARRAY" })),
                thinking_config: Some(ThinkingConfig {
                    thinking_budget: 1024,
                }),
                image_config: None,
            }),
        };

        let json = serde_json::to_value(&request).expect("should serialize");
        assert_eq!(json["generationConfig"]["responseMimeType"], "application/json");
        assert_eq!(
            json["generationConfig"]["thinkingConfig"]["thinkingBudget"],
            1024
        );
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hi");
        // Unset options stay off the wire entirely.
        assert!(json["generationConfig"].get("imageConfig").is_none());
    }

    #[test]
    fn api_error_body_parses_provider_envelope() {
        let body = serde_json::json!({
            "error": {
                "code": 429,
                "message": "Resource has been exhausted",
                "status": "RESOURCE_EXHAUSTED"
            }
        });
        let parsed: ApiErrorBody = serde_json::from_value(body).expect("should parse");
        assert_eq!(parsed.error.code, Some(429));
        assert_eq!(parsed.error.message, "Resource has been exhausted");
    }
}
