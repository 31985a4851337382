use thiserror::Error;

pub mod channels;
pub mod config;
pub mod contracts;

pub use channels::{Platform, Tone};
pub use config::{load_config, load_config_from_env, ConfigError, StudioConfig};
pub use contracts::{
    CampaignStrategy, KeywordDifficulty, LeadScore, OptimizationResult, Persona, SeoKeyword,
    SeoResult, SuggestedPost, SwotAnalysis,
};

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid platform: {0}")]
    InvalidPlatform(String),

    #[error("invalid tone: {0}")]
    InvalidTone(String),
}
