//! Typed result contracts shared by the AI gateway and the presentation layer.
//!
//! All types model the JSON the Gemini structured-output path returns, so
//! field names serialize in the provider's camelCase convention. Every
//! contract is a plain value record: fully populated on success or absent
//! entirely; the gateway never hands out a partially-filled record.

use serde::{Deserialize, Serialize};

/// A mini campaign strategy: summary, audience, angles, and draft posts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignStrategy {
    pub overview: String,
    pub target_audience: String,
    pub key_themes: Vec<String>,
    pub suggested_posts: Vec<SuggestedPost>,
}

/// A single draft post inside a [`CampaignStrategy`].
///
/// `platform` is free text from the model rather than [`crate::Platform`]:
/// strategy drafts may name channels outside the closed posting set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedPost {
    pub platform: String,
    pub content: String,
    pub hashtags: Vec<String>,
    pub best_time: String,
}

/// Competitor SWOT analysis. Each list nominally holds 3 items; the count is
/// model-chosen and not enforced here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwotAnalysis {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub opportunities: Vec<String>,
    pub threats: Vec<String>,
    pub strategic_advice: String,
}

/// A synthesized buyer persona.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Persona {
    pub name: String,
    pub age_range: String,
    pub occupation: String,
    pub income_level: String,
    pub frustrations: Vec<String>,
    pub goals: Vec<String>,
    pub motivations: Vec<String>,
    pub preferred_channels: Vec<String>,
    pub bio: String,
}

/// A copy rewrite: the input echoed back, the rewritten text, and the
/// model's rationale for what changed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationResult {
    pub original: String,
    pub optimized: String,
    pub changes_made: String,
}

/// Conversion-probability score for a lead.
///
/// `score` is always in 0-100: the gateway clamps model output on success and
/// substitutes defined defaults on failure, so downstream ranking logic never
/// sees an out-of-range or absent score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadScore {
    pub score: u8,
    pub reason: String,
}

/// Keyword research output for a topic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeoResult {
    pub keywords: Vec<SeoKeyword>,
}

/// One researched search term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeoKeyword {
    pub term: String,
    /// Display-ready monthly volume estimate, e.g. `"10K-100K"`.
    pub volume: String,
    pub difficulty: KeywordDifficulty,
}

/// Ranking difficulty bucket for a keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeywordDifficulty {
    Low,
    Medium,
    High,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn campaign_strategy_deserializes_from_provider_json() {
        let json = serde_json::json!({
            "overview": "Lean into scarcity messaging.",
            "targetAudience": "Urban commuters aged 25-40",
            "keyThemes": ["Speed", "Savings", "Sustainability"],
            "suggestedPosts": [
                {
                    "platform": "Instagram",
                    "content": "Your commute, upgraded.",
                    "hashtags": ["#commute", "#upgrade"],
                    "bestTime": "Tuesday 8am"
                }
            ]
        });

        let strategy: CampaignStrategy =
            serde_json::from_value(json).expect("should deserialize strategy");

        assert_eq!(strategy.overview, "Lean into scarcity messaging.");
        assert_eq!(strategy.target_audience, "Urban commuters aged 25-40");
        assert_eq!(strategy.key_themes.len(), 3);
        assert_eq!(strategy.suggested_posts.len(), 1);
        assert_eq!(strategy.suggested_posts[0].platform, "Instagram");
        assert_eq!(strategy.suggested_posts[0].best_time, "Tuesday 8am");
        assert_eq!(
            strategy.suggested_posts[0].hashtags,
            vec!["#commute", "#upgrade"]
        );
    }

    #[test]
    fn campaign_strategy_rejects_missing_field() {
        // No partial contracts: a record missing `suggestedPosts` must fail
        // the whole decode rather than yield a half-filled strategy.
        let json = serde_json::json!({
            "overview": "x",
            "targetAudience": "y",
            "keyThemes": []
        });

        assert!(serde_json::from_value::<CampaignStrategy>(json).is_err());
    }

    #[test]
    fn swot_uses_camel_case_advice_field() {
        let json = serde_json::json!({
            "strengths": ["brand"],
            "weaknesses": ["price"],
            "opportunities": ["expansion"],
            "threats": ["churn"],
            "strategicAdvice": "Compete on service."
        });

        let swot: SwotAnalysis = serde_json::from_value(json).expect("should deserialize swot");
        assert_eq!(swot.strategic_advice, "Compete on service.");
    }

    #[test]
    fn persona_round_trips_without_field_loss() {
        let persona = Persona {
            name: "Maya Chen".into(),
            age_range: "25-34".into(),
            occupation: "Product designer".into(),
            income_level: "$75k - $95k".into(),
            frustrations: vec!["tool sprawl".into()],
            goals: vec!["ship faster".into()],
            motivations: vec!["craft".into()],
            preferred_channels: vec!["Instagram".into(), "LinkedIn".into()],
            bio: "Designs in the morning, climbs in the evening.".into(),
        };

        let json = serde_json::to_value(&persona).expect("should serialize");
        assert!(json.get("ageRange").is_some());
        assert!(json.get("preferredChannels").is_some());

        let back: Persona = serde_json::from_value(json).expect("should deserialize");
        assert_eq!(back, persona);
    }

    #[test]
    fn keyword_difficulty_matches_display_buckets() {
        let json = serde_json::json!({
            "keywords": [
                { "term": "summer sale", "volume": "10K-100K", "difficulty": "High" },
                { "term": "flash deal", "volume": "1K-10K", "difficulty": "Low" }
            ]
        });

        let seo: SeoResult = serde_json::from_value(json).expect("should deserialize seo");
        assert_eq!(seo.keywords[0].difficulty, KeywordDifficulty::High);
        assert_eq!(seo.keywords[1].difficulty, KeywordDifficulty::Low);
    }

    #[test]
    fn keyword_difficulty_rejects_unknown_bucket() {
        let json = serde_json::json!(
            { "term": "x", "volume": "1K", "difficulty": "Impossible" }
        );
        assert!(serde_json::from_value::<SeoKeyword>(json).is_err());
    }
}
