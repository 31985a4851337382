use thiserror::Error;

/// Errors raised at the Gemini call boundary.
///
/// None of these cross the [`crate::MarketingStudio`] public surface: every
/// operation there matches on the variant and converts it into the task's
/// renderable fallback.
#[derive(Debug, Error)]
pub enum GeminiError {
    /// No API credential was configured. Checked before any network I/O.
    #[error("Gemini API key is missing; set GEMINI_API_KEY in your .env file")]
    MissingCredential,

    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider answered with a non-2xx status and an error body.
    #[error("Gemini API error {code}: {message}")]
    Api { code: u16, message: String },

    /// The response body could not be deserialized into the expected shape.
    #[error("malformed response for {context}: {source}")]
    Malformed {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The call succeeded but the candidate carried no text.
    #[error("response contained no text payload")]
    EmptyResponse,

    /// The image call succeeded but returned no inline image part.
    #[error("response contained no inline image data")]
    NoInlineImage,
}
