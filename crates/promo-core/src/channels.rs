//! Closed input sets for content generation: posting platforms and copy tones.
//!
//! Both the prompt builders and the CLI parse against these enums, so the
//! closed set lives here rather than in either consumer.

use std::fmt;
use std::str::FromStr;

use crate::CoreError;

/// Social platform a post is generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Twitter,
    Instagram,
    LinkedIn,
    Facebook,
    TikTok,
}

impl Platform {
    /// All supported platforms, in display order.
    pub const ALL: [Platform; 5] = [
        Platform::Twitter,
        Platform::Instagram,
        Platform::LinkedIn,
        Platform::Facebook,
        Platform::TikTok,
    ];
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Platform::Twitter => "Twitter",
            Platform::Instagram => "Instagram",
            Platform::LinkedIn => "LinkedIn",
            Platform::Facebook => "Facebook",
            Platform::TikTok => "TikTok",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Platform {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "twitter" => Ok(Platform::Twitter),
            "instagram" => Ok(Platform::Instagram),
            "linkedin" => Ok(Platform::LinkedIn),
            "facebook" => Ok(Platform::Facebook),
            "tiktok" => Ok(Platform::TikTok),
            other => Err(CoreError::InvalidPlatform(other.to_string())),
        }
    }
}

/// Voice the generated copy is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Professional,
    Casual,
    Playful,
    Bold,
    Witty,
}

impl Tone {
    /// All supported tones, in display order.
    pub const ALL: [Tone; 5] = [
        Tone::Professional,
        Tone::Casual,
        Tone::Playful,
        Tone::Bold,
        Tone::Witty,
    ];
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tone::Professional => "Professional",
            Tone::Casual => "Casual",
            Tone::Playful => "Playful",
            Tone::Bold => "Bold",
            Tone::Witty => "Witty",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Tone {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "professional" => Ok(Tone::Professional),
            "casual" => Ok(Tone::Casual),
            "playful" => Ok(Tone::Playful),
            "bold" => Ok(Tone::Bold),
            "witty" => Ok(Tone::Witty),
            other => Err(CoreError::InvalidTone(other.to_string())),
        }
    }
}
