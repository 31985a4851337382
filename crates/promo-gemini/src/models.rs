//! Static routing from studio task to Gemini model.
//!
//! The binding is a fixed table, not a runtime option: short copy goes to the
//! fast tier, analysis tasks to the reasoning tier, visuals to the image
//! tier. Competitor SWOT additionally requests an elevated thinking budget.

/// Model tier a task is served by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelTier {
    /// Fast, cheap tier for short generation.
    Flash,
    /// Deeper-reasoning tier for multi-step analysis.
    Pro,
    /// Image-capable tier.
    ImageFlash,
}

impl ModelTier {
    /// The provider model identifier for this tier.
    #[must_use]
    pub fn model_id(self) -> &'static str {
        match self {
            ModelTier::Flash => "gemini-1.5-flash",
            ModelTier::Pro => "gemini-3-pro-preview",
            ModelTier::ImageFlash => "gemini-2.5-flash-image",
        }
    }
}

/// A generation task the studio performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudioTask {
    QuickCopy,
    CampaignStrategy,
    CompetitorSwot,
    AudiencePersona,
    ContentOptimization,
    LeadScoring,
    KeywordResearch,
    AdVisual,
}

impl StudioTask {
    /// The tier serving this task.
    #[must_use]
    pub fn tier(self) -> ModelTier {
        match self {
            StudioTask::QuickCopy => ModelTier::Flash,
            StudioTask::CampaignStrategy
            | StudioTask::CompetitorSwot
            | StudioTask::AudiencePersona
            | StudioTask::ContentOptimization
            | StudioTask::LeadScoring
            | StudioTask::KeywordResearch => ModelTier::Pro,
            StudioTask::AdVisual => ModelTier::ImageFlash,
        }
    }

    /// Extra internal-reasoning allowance requested from the provider, in
    /// tokens. Only competitor SWOT carries one; other tasks use the
    /// provider default depth.
    #[must_use]
    pub fn thinking_budget(self) -> Option<i32> {
        match self {
            StudioTask::CompetitorSwot => Some(1024),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quick_copy_routes_to_flash() {
        assert_eq!(StudioTask::QuickCopy.tier(), ModelTier::Flash);
        assert_eq!(
            StudioTask::QuickCopy.tier().model_id(),
            "gemini-1.5-flash"
        );
    }

    #[test]
    fn analysis_tasks_route_to_pro() {
        for task in [
            StudioTask::CampaignStrategy,
            StudioTask::CompetitorSwot,
            StudioTask::AudiencePersona,
            StudioTask::ContentOptimization,
            StudioTask::LeadScoring,
            StudioTask::KeywordResearch,
        ] {
            assert_eq!(task.tier(), ModelTier::Pro, "task: {task:?}");
        }
    }

    #[test]
    fn ad_visual_routes_to_image_tier() {
        assert_eq!(
            StudioTask::AdVisual.tier().model_id(),
            "gemini-2.5-flash-image"
        );
    }

    #[test]
    fn only_competitor_swot_requests_thinking_budget() {
        assert_eq!(StudioTask::CompetitorSwot.thinking_budget(), Some(1024));
        assert_eq!(StudioTask::QuickCopy.thinking_budget(), None);
        assert_eq!(StudioTask::LeadScoring.thinking_budget(), None);
        assert_eq!(StudioTask::AdVisual.thinking_budget(), None);
    }
}
