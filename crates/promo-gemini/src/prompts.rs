//! Prompt builders: pure functions from typed parameters to an instruction
//! plus the response schema the provider is asked to enforce.
//!
//! Every builder interpolates its parameters verbatim (the transport is a
//! single opaque text field, so no escaping is needed) and pairs the prose
//! description of the output shape with the matching Gemini `responseSchema`
//! object. Input validation (e.g. rejecting empty strings) is the caller's
//! responsibility; builders are total over their input domain.

use promo_core::{Platform, Tone};
use serde_json::json;

/// An instruction plus the schema the response must conform to.
///
/// `response_schema` is `None` for tasks without structured output (image
/// generation).
#[derive(Debug, Clone)]
pub struct PromptSpec {
    pub instruction: String,
    pub response_schema: Option<serde_json::Value>,
}

/// Short social posts for one platform.
#[must_use]
pub fn marketing_copy(topic: &str, platform: Platform, tone: Tone, audience: &str) -> PromptSpec {
    let instruction = format!(
        "Generate 3 distinct social media posts for {platform} about \"{topic}\".\n\
         Target Audience: {audience}.\n\
         Tone: {tone}.\n\
         Include emojis and 3-5 hashtags.\n\
         Return ONLY a JSON array of strings."
    );

    PromptSpec {
        instruction,
        response_schema: Some(json!({
            "type": "ARRAY",
            "items": { "type": "STRING" }
        })),
    }
}

/// Mini campaign strategy for a product and goal.
#[must_use]
pub fn campaign_strategy(product_name: &str, goal: &str) -> PromptSpec {
    let instruction = format!(
        "Create a mini marketing campaign strategy for \"{product_name}\".\n\
         Goal: {goal}.\n\n\
         Output JSON with:\n\
         - overview (brief strategy summary)\n\
         - targetAudience (description of ideal customer)\n\
         - keyThemes (array of 3 marketing angles)\n\
         - suggestedPosts (array of 3 posts for different platforms, including \
         content, hashtags array, and bestTime to post string)."
    );

    PromptSpec {
        instruction,
        response_schema: Some(json!({
            "type": "OBJECT",
            "properties": {
                "overview": { "type": "STRING" },
                "targetAudience": { "type": "STRING" },
                "keyThemes": { "type": "ARRAY", "items": { "type": "STRING" } },
                "suggestedPosts": {
                    "type": "ARRAY",
                    "items": {
                        "type": "OBJECT",
                        "properties": {
                            "platform": { "type": "STRING" },
                            "content": { "type": "STRING" },
                            "hashtags": { "type": "ARRAY", "items": { "type": "STRING" } },
                            "bestTime": { "type": "STRING" }
                        }
                    }
                }
            }
        })),
    }
}

/// Strategic SWOT analysis of a named competitor.
#[must_use]
pub fn competitor_swot(competitor_name: &str, industry: &str) -> PromptSpec {
    let instruction = format!(
        "Perform a strategic SWOT analysis for a competitor named \"{competitor_name}\" \
         in the \"{industry}\" industry.\n\
         Think deeply about market trends and potential hidden factors.\n\n\
         Return JSON with:\n\
         - strengths (array of 3 strings)\n\
         - weaknesses (array of 3 strings)\n\
         - opportunities (array of 3 strings)\n\
         - threats (array of 3 strings)\n\
         - strategicAdvice (A paragraph of advice on how to compete against them)"
    );

    PromptSpec {
        instruction,
        response_schema: Some(json!({
            "type": "OBJECT",
            "properties": {
                "strengths": { "type": "ARRAY", "items": { "type": "STRING" } },
                "weaknesses": { "type": "ARRAY", "items": { "type": "STRING" } },
                "opportunities": { "type": "ARRAY", "items": { "type": "STRING" } },
                "threats": { "type": "ARRAY", "items": { "type": "STRING" } },
                "strategicAdvice": { "type": "STRING" }
            }
        })),
    }
}

/// Detailed buyer persona for a product, industry, and region.
#[must_use]
pub fn audience_persona(product_name: &str, industry: &str, region: &str) -> PromptSpec {
    let instruction = format!(
        "Create a detailed buyer persona for a product named \"{product_name}\" \
         in the \"{industry}\" industry.\n\
         Target Region: {region}.\n\n\
         Return JSON with:\n\
         - name (a fictional name for the persona)\n\
         - ageRange (e.g., \"25-34\")\n\
         - occupation (job title)\n\
         - incomeLevel (e.g., \"$50k - $75k\")\n\
         - frustrations (array of 3 pain points)\n\
         - goals (array of 3 objectives)\n\
         - motivations (array of 3 drivers)\n\
         - preferredChannels (array of social media or communication channels)\n\
         - bio (a short paragraph describing their life and needs)"
    );

    PromptSpec {
        instruction,
        response_schema: Some(json!({
            "type": "OBJECT",
            "properties": {
                "name": { "type": "STRING" },
                "ageRange": { "type": "STRING" },
                "occupation": { "type": "STRING" },
                "incomeLevel": { "type": "STRING" },
                "frustrations": { "type": "ARRAY", "items": { "type": "STRING" } },
                "goals": { "type": "ARRAY", "items": { "type": "STRING" } },
                "motivations": { "type": "ARRAY", "items": { "type": "STRING" } },
                "preferredChannels": { "type": "ARRAY", "items": { "type": "STRING" } },
                "bio": { "type": "STRING" }
            }
        })),
    }
}

/// Copy rewrite toward a stated goal.
#[must_use]
pub fn content_optimization(original_text: &str, goal: &str) -> PromptSpec {
    let instruction = format!(
        "Act as an expert copyeditor. Rewrite the following text to achieve this \
         goal: \"{goal}\".\n\n\
         Original Text: \"{original_text}\"\n\n\
         Return JSON with:\n\
         - original (the input text)\n\
         - optimized (the rewritten text)\n\
         - changesMade (a brief explanation of what was improved and why)"
    );

    PromptSpec {
        instruction,
        response_schema: Some(json!({
            "type": "OBJECT",
            "properties": {
                "original": { "type": "STRING" },
                "optimized": { "type": "STRING" },
                "changesMade": { "type": "STRING" }
            }
        })),
    }
}

/// Conversion-probability scoring of one lead.
#[must_use]
pub fn lead_score(name: &str, source: &str, interactions: &str) -> PromptSpec {
    let instruction = format!(
        "Act as a senior sales analyst. Analyze this lead and assign a conversion \
         probability score (0-100).\n\
         Lead Name: {name}\n\
         Source: {source}\n\
         Interactions: {interactions}\n\n\
         Provide a JSON response with:\n\
         - 'score': number\n\
         - 'reason': A concise, insightful 1-sentence reason for the score."
    );

    PromptSpec {
        instruction,
        response_schema: Some(json!({
            "type": "OBJECT",
            "properties": {
                "score": { "type": "NUMBER" },
                "reason": { "type": "STRING" }
            }
        })),
    }
}

/// Keyword research for a topic.
#[must_use]
pub fn keyword_research(topic: &str) -> PromptSpec {
    let instruction = format!(
        "Act as an SEO strategist. Research search keywords for the topic \"{topic}\".\n\n\
         Return JSON with:\n\
         - keywords (array of 5 entries, each with term, an estimated monthly \
         volume range string like \"10K-100K\", and difficulty of Low, Medium or High)"
    );

    PromptSpec {
        instruction,
        response_schema: Some(json!({
            "type": "OBJECT",
            "properties": {
                "keywords": {
                    "type": "ARRAY",
                    "items": {
                        "type": "OBJECT",
                        "properties": {
                            "term": { "type": "STRING" },
                            "volume": { "type": "STRING" },
                            "difficulty": {
                                "type": "STRING",
                                "enum": ["Low", "Medium", "High"]
                            }
                        }
                    }
                }
            }
        })),
    }
}

/// Ad visual generation. The user's prompt is passed through as-is; image
/// responses carry no structured output, so there is no schema.
#[must_use]
pub fn ad_visual(image_prompt: &str) -> PromptSpec {
    PromptSpec {
        instruction: image_prompt.to_string(),
        response_schema: None,
    }
}
