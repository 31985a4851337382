//! High-level marketing generation operations.
//!
//! [`MarketingStudio`] is the single boundary the rest of the application
//! talks to. Internally every operation runs as `Result<T, GeminiError>`;
//! the public methods match on the error tag and convert it into the task's
//! renderable fallback, so no error ever crosses this surface as `Err`.
//! Callers check for the fallback/absent marker instead of handling faults:
//!
//! - copy generation returns a one-element fallback message,
//! - structured tasks return `None`,
//! - lead scoring returns a defined neutral default,
//! - image generation returns `None`.

use promo_core::{
    CampaignStrategy, LeadScore, OptimizationResult, Persona, Platform, SeoResult, StudioConfig,
    SwotAnalysis, Tone,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::warn;

use crate::client::GeminiClient;
use crate::error::GeminiError;
use crate::models::StudioTask;
use crate::prompts::{self, PromptSpec};
use crate::types::{
    Content, GenerateContentRequest, GenerationConfig, ImageConfig, ThinkingConfig,
};

/// Fallback post shown when no credential is configured.
const MISSING_KEY_FALLBACK: &str = "Error: API Key is missing. Please configure it in .env file.";
/// Fallback post shown when copy generation fails for any other reason.
const COPY_FALLBACK: &str = "Failed to generate content. Please try again.";

/// Lead-score reason when the provider answered without a payload.
const LEAD_SCORE_EMPTY_REASON: &str = "Analysis failed, default score.";
/// Lead-score reason for any other failure.
const LEAD_SCORE_ERROR_REASON: &str = "Error in AI analysis.";

/// Wire shape of a lead-score response before clamping.
#[derive(Debug, Deserialize)]
struct RawLeadScore {
    score: f64,
    reason: String,
}

impl RawLeadScore {
    fn clamped(self) -> LeadScore {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let score = self.score.clamp(0.0, 100.0).round() as u8;
        LeadScore {
            score,
            reason: self.reason,
        }
    }
}

/// The AI gateway for all marketing generation tasks.
///
/// Holds its resolved credential (inside [`GeminiClient`]) from construction
/// on; there is no global or lazily-initialized state. Cloning is cheap and
/// concurrent calls share nothing mutable.
#[derive(Clone)]
pub struct MarketingStudio {
    client: std::sync::Arc<GeminiClient>,
}

impl MarketingStudio {
    /// Creates a studio from resolved configuration.
    ///
    /// A missing credential is not an error here: each call will fail with
    /// its fallback instead, without attempting any network interaction.
    ///
    /// # Errors
    ///
    /// Returns [`GeminiError::Http`] if the HTTP client cannot be built.
    pub fn new(config: &StudioConfig) -> Result<Self, GeminiError> {
        let client = GeminiClient::new(config.gemini_api_key.clone(), config.request_timeout_secs)?;
        Ok(Self {
            client: std::sync::Arc::new(client),
        })
    }

    /// Creates a studio pointed at a custom base URL (for tests).
    ///
    /// # Errors
    ///
    /// Returns [`GeminiError::Http`] if the HTTP client cannot be built.
    pub fn with_base_url(config: &StudioConfig, base_url: &str) -> Result<Self, GeminiError> {
        let client = GeminiClient::with_base_url(
            config.gemini_api_key.clone(),
            config.request_timeout_secs,
            base_url,
        )?;
        Ok(Self {
            client: std::sync::Arc::new(client),
        })
    }

    /// Generates short social posts for one platform.
    ///
    /// Always returns at least one element: on failure, a single
    /// human-readable fallback message takes the place of generated copy.
    pub async fn generate_marketing_copy(
        &self,
        topic: &str,
        platform: Platform,
        tone: Tone,
        audience: &str,
    ) -> Vec<String> {
        let spec = prompts::marketing_copy(topic, platform, tone, audience);
        match self
            .structured::<Vec<String>>(StudioTask::QuickCopy, spec)
            .await
        {
            Ok(posts) => posts,
            Err(GeminiError::MissingCredential) => vec![MISSING_KEY_FALLBACK.to_string()],
            Err(err) => {
                warn!(error = %err, "marketing copy generation failed");
                vec![COPY_FALLBACK.to_string()]
            }
        }
    }

    /// Drafts a mini campaign strategy, or `None` on any failure.
    pub async fn generate_campaign_strategy(
        &self,
        product_name: &str,
        goal: &str,
    ) -> Option<CampaignStrategy> {
        let spec = prompts::campaign_strategy(product_name, goal);
        self.structured_or_none(StudioTask::CampaignStrategy, spec, "campaign strategy")
            .await
    }

    /// Runs a SWOT analysis of a competitor, or `None` on any failure.
    ///
    /// This task requests an elevated thinking budget from the provider.
    pub async fn analyze_competitor(
        &self,
        competitor_name: &str,
        industry: &str,
    ) -> Option<SwotAnalysis> {
        let spec = prompts::competitor_swot(competitor_name, industry);
        self.structured_or_none(StudioTask::CompetitorSwot, spec, "competitor analysis")
            .await
    }

    /// Synthesizes a buyer persona, or `None` on any failure.
    pub async fn generate_audience_persona(
        &self,
        product_name: &str,
        industry: &str,
        region: &str,
    ) -> Option<Persona> {
        let spec = prompts::audience_persona(product_name, industry, region);
        self.structured_or_none(StudioTask::AudiencePersona, spec, "persona generation")
            .await
    }

    /// Rewrites copy toward a goal, or `None` on any failure.
    pub async fn optimize_content(
        &self,
        original_text: &str,
        goal: &str,
    ) -> Option<OptimizationResult> {
        let spec = prompts::content_optimization(original_text, goal);
        self.structured_or_none(StudioTask::ContentOptimization, spec, "content optimization")
            .await
    }

    /// Researches search keywords for a topic, or `None` on any failure.
    pub async fn research_keywords(&self, topic: &str) -> Option<SeoResult> {
        let spec = prompts::keyword_research(topic);
        self.structured_or_none(StudioTask::KeywordResearch, spec, "keyword research")
            .await
    }

    /// Scores a lead's conversion probability.
    ///
    /// Never returns an empty state: failures yield a defined neutral
    /// default, and the returned score is always within 0-100.
    pub async fn analyze_lead_score(
        &self,
        name: &str,
        source: &str,
        interactions: &str,
    ) -> LeadScore {
        let spec = prompts::lead_score(name, source, interactions);
        match self
            .structured::<RawLeadScore>(StudioTask::LeadScoring, spec)
            .await
        {
            Ok(raw) => raw.clamped(),
            Err(GeminiError::EmptyResponse) => LeadScore {
                score: 50,
                reason: LEAD_SCORE_EMPTY_REASON.to_string(),
            },
            Err(err) => {
                warn!(error = %err, "lead scoring failed");
                LeadScore {
                    score: 0,
                    reason: LEAD_SCORE_ERROR_REASON.to_string(),
                }
            }
        }
    }

    /// Generates an ad visual and returns it as a `data:{mime};base64,...`
    /// URL, or `None` on failure or when the response holds no inline image.
    pub async fn generate_marketing_image(&self, image_prompt: &str) -> Option<String> {
        match self.try_marketing_image(image_prompt).await {
            Ok(data_url) => Some(data_url),
            Err(err) => {
                warn!(error = %err, "image generation failed");
                None
            }
        }
    }

    async fn try_marketing_image(&self, image_prompt: &str) -> Result<String, GeminiError> {
        let spec = prompts::ad_visual(image_prompt);
        let request = GenerateContentRequest {
            contents: vec![Content::user_text(spec.instruction)],
            generation_config: Some(GenerationConfig {
                image_config: Some(ImageConfig {
                    aspect_ratio: "1:1".to_string(),
                }),
                ..GenerationConfig::default()
            }),
        };

        let response = self
            .client
            .generate_content(StudioTask::AdVisual.tier().model_id(), &request)
            .await?;
        response.inline_image().ok_or(GeminiError::NoInlineImage)
    }

    /// Issues one structured call and decodes its text payload into `T`.
    async fn structured<T: DeserializeOwned>(
        &self,
        task: StudioTask,
        spec: PromptSpec,
    ) -> Result<T, GeminiError> {
        let request = text_request(spec, task);
        let response = self
            .client
            .generate_content(task.tier().model_id(), &request)
            .await?;
        let text = response.text().ok_or(GeminiError::EmptyResponse)?;
        serde_json::from_str(&text).map_err(|e| GeminiError::Malformed {
            context: format!("{task:?}"),
            source: e,
        })
    }

    async fn structured_or_none<T: DeserializeOwned>(
        &self,
        task: StudioTask,
        spec: PromptSpec,
        label: &str,
    ) -> Option<T> {
        match self.structured(task, spec).await {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(task = label, error = %err, "generation failed");
                None
            }
        }
    }
}

/// Builds the request for a structured text task: JSON mime type, the
/// builder's schema, and the task's thinking budget when it has one.
fn text_request(spec: PromptSpec, task: StudioTask) -> GenerateContentRequest {
    let config = GenerationConfig {
        response_mime_type: Some("application/json".to_string()),
        response_schema: spec.response_schema,
        thinking_config: task
            .thinking_budget()
            .map(|budget| ThinkingConfig {
                thinking_budget: budget,
            }),
        image_config: None,
    };

    GenerateContentRequest {
        contents: vec![Content::user_text(spec.instruction)],
        generation_config: Some(config),
    }
}
